use wellplot_rs::compose::{
    AxisId, AxisPlacement, CompositionState, DashStyle, OverlayOptions, TrackComposer, TrackSlot,
};
use wellplot_rs::config::{ConfigRegistry, TrackConfig, TrackFamily};
use wellplot_rs::core::types::LogRow;

fn rows() -> Vec<LogRow> {
    (0..4)
        .map(|i| {
            LogRow::new(1000.0 + f64::from(i))
                .with_channel("GR", 40.0)
                .with_channel("GR_NORM", 45.0)
                .with_channel("RWA_FULL", 1.0)
                .with_channel("RWA_SIMPLE", 2.0)
                .with_channel("RWA_TAR", 3.0)
                .with_channel("A", 0.1)
                .with_channel("B", 0.2)
                .with_channel("C", 0.3)
                .with_channel("D", 0.4)
        })
        .collect()
}

#[test]
fn dual_overlay_offsets_its_overlay_past_all_primaries() {
    let registry = ConfigRegistry::default_logs();
    let composer = TrackComposer::new(&registry, 4);

    let state = composer.dual_overlay(
        CompositionState::new(),
        &rows(),
        "GR_DUAL",
        TrackSlot::new(2).with_domain([0.25, 0.5]),
        &OverlayOptions::default(),
    );

    assert_eq!(state.traces.len(), 2);
    assert_eq!(state.overlay_count, 1);
    assert_eq!(state.traces[0].x_axis, AxisId(2));
    // First overlay of a 4-track figure lands at x5.
    assert_eq!(state.traces[1].x_axis, AxisId(5));

    let overlay = state.axes.get(&AxisId(5)).expect("overlay axis");
    assert_eq!(
        overlay.placement,
        AxisPlacement::Overlay { anchor: AxisId(2) }
    );
    assert_eq!(overlay.range, Some([0.0, 250.0]));
}

#[test]
fn successive_tracks_thread_the_overlay_counter() {
    let registry = ConfigRegistry::default_logs();
    let composer = TrackComposer::new(&registry, 2);

    let state = composer.dual_overlay(
        CompositionState::new(),
        &rows(),
        "GR_DUAL",
        TrackSlot::new(1),
        &OverlayOptions::default(),
    );
    let state = composer.dual_overlay(
        state,
        &rows(),
        "GR_DUAL",
        TrackSlot::new(2),
        &OverlayOptions::default(),
    );

    assert_eq!(state.overlay_count, 2);
    // Overlays landed at x3 and x4, past the two primaries.
    assert!(state.axes.contains_key(&AxisId(3)));
    assert!(state.axes.contains_key(&AxisId(4)));
    assert_eq!(state.axes.len(), 4);
}

#[test]
fn dashed_secondary_styles_the_second_curve() {
    let registry = ConfigRegistry::default_logs();
    let composer = TrackComposer::new(&registry, 1);

    let state = composer.dual_overlay(
        CompositionState::new(),
        &rows(),
        "GR_DUAL",
        TrackSlot::new(1),
        &OverlayOptions {
            dashed_secondary: true,
        },
    );

    assert_eq!(state.traces[0].line.dash, DashStyle::Solid);
    assert_eq!(state.traces[1].line.dash, DashStyle::Dash);
}

#[test]
fn triple_overlay_allocates_two_overlay_axes() {
    let registry = ConfigRegistry::default_logs();
    let composer = TrackComposer::new(&registry, 3);

    let state = composer.triple_overlay(
        CompositionState::new(),
        &rows(),
        "RWA",
        TrackSlot::new(1),
    );

    assert_eq!(state.traces.len(), 3);
    assert_eq!(state.overlay_count, 2);
    assert_eq!(state.traces[1].x_axis, AxisId(4));
    assert_eq!(state.traces[2].x_axis, AxisId(5));
    assert_eq!(state.traces[1].line.dash, DashStyle::Dash);
    assert_eq!(state.traces[2].line.dash, DashStyle::Dot);
}

#[test]
fn quad_overlay_allocates_three_overlay_axes() {
    let mut registry = ConfigRegistry::new();
    registry.insert(
        "QUAD",
        TrackConfig::new(TrackFamily::QuadOverlay)
            .with_channels(["A", "B", "C", "D"])
            .with_colors(["red", "green", "blue", "black"])
            .with_ranges([[0.0, 1.0], [0.0, 1.0], [0.0, 1.0], [0.0, 1.0]]),
    );
    let composer = TrackComposer::new(&registry, 1);

    let state = composer.quad_overlay(CompositionState::new(), &rows(), "QUAD", TrackSlot::new(1));

    assert_eq!(state.traces.len(), 4);
    assert_eq!(state.overlay_count, 3);
    let ids: Vec<AxisId> = state.axes.keys().copied().collect();
    assert_eq!(ids, vec![AxisId(1), AxisId(2), AxisId(3), AxisId(4)]);
}

#[test]
fn incomplete_configuration_skips_missing_channels() {
    let mut registry = ConfigRegistry::new();
    registry.insert(
        "SHORT",
        TrackConfig::new(TrackFamily::TripleOverlay)
            .with_channels(["A", "B"])
            .with_colors(["red", "green"])
            .with_ranges([[0.0, 1.0], [0.0, 1.0]]),
    );
    let composer = TrackComposer::new(&registry, 1);

    let state = composer.triple_overlay(CompositionState::new(), &rows(), "SHORT", TrackSlot::new(1));

    assert_eq!(state.traces.len(), 2);
    assert_eq!(state.overlay_count, 1);
}
