use rand::SeedableRng;
use rand::rngs::StdRng;
use wellplot_rs::compose::{AxisId, CompositionState, TraceGeometry, TrackComposer, TrackSlot};
use wellplot_rs::config::ConfigRegistry;
use wellplot_rs::core::types::LogRow;

fn heatmap_parts(
    state: &CompositionState,
) -> (&Vec<Vec<Option<f64>>>, &Vec<wellplot_rs::core::color::ColorscalePoint>, &Vec<String>) {
    match &state.traces[0].geometry {
        TraceGeometry::Heatmap {
            z,
            colorscale,
            hover_text,
            ..
        } => (z, colorscale, hover_text),
        other => panic!("expected a heatmap geometry, got {other:?}"),
    }
}

#[test]
fn static_flag_track_uses_its_configured_code_maps() {
    let registry = ConfigRegistry::default_logs();
    let composer = TrackComposer::new(&registry, 1);
    let rows: Vec<LogRow> = [0.0, 1.0, 6.0]
        .iter()
        .enumerate()
        .map(|(i, code)| LogRow::new(1000.0 + i as f64).with_channel("CLASS", *code))
        .collect();

    let mut rng = StdRng::seed_from_u64(1);
    let state = composer.flag(
        CompositionState::new(),
        &rows,
        "CLASS",
        TrackSlot::new(1).with_domain([0.0, 0.1]),
        &mut rng,
    );

    assert_eq!(state.traces.len(), 1);
    let (z, colorscale, hover) = heatmap_parts(&state);

    // Seven configured classes -> codes normalized by 7, 14 scale points.
    assert_eq!(colorscale.len(), 14);
    assert_eq!(z[0][1], Some(1.0 / 7.0));
    assert_eq!(hover, &vec![
        "Non Reservoir".to_owned(),
        "Water".to_owned(),
        "Coal".to_owned(),
    ]);

    let axis = state.axes.get(&AxisId(1)).expect("flag axis");
    assert!(!axis.show_tick_labels);
}

#[test]
fn sparse_static_codes_still_yield_a_valid_colorscale() {
    let registry = ConfigRegistry::default_logs();
    let composer = TrackComposer::new(&registry, 1);
    // TEST only configures codes 0, 1, and 3.
    let rows = vec![
        LogRow::new(1000.0).with_channel("TEST", 3.0),
        LogRow::new(1001.0).with_channel("TEST", 2.0),
    ];

    let mut rng = StdRng::seed_from_u64(1);
    let state = composer.flag(
        CompositionState::new(),
        &rows,
        "TEST",
        TrackSlot::new(1),
        &mut rng,
    );

    let (_, colorscale, hover) = heatmap_parts(&state);
    // Codes 0..=3 -> four color intervals, the unconfigured one transparent.
    assert_eq!(colorscale.len(), 8);
    assert_eq!(hover[0], "Gas");
    assert_eq!(hover[1], "");
}

#[test]
fn dynamic_flag_track_encodes_and_colors_categories() {
    let registry = ConfigRegistry::default_logs();
    let composer = TrackComposer::new(&registry, 1);
    let rows = vec![
        LogRow::new(1000.0).with_channel("MARKER", "TOP-A"),
        LogRow::new(1001.0).with_channel("MARKER", ""),
        LogRow::new(1002.0).with_channel("MARKER", "TOP-B"),
    ];

    let mut rng = StdRng::seed_from_u64(7);
    let state = composer.flag(
        CompositionState::new(),
        &rows,
        "MARKER",
        TrackSlot::new(1),
        &mut rng,
    );

    let (z, colorscale, hover) = heatmap_parts(&state);
    assert_eq!(hover, &vec!["TOP-A".to_owned(), String::new(), "TOP-B".to_owned()]);
    // Three codes (null + two markers) normalized by 3.
    assert_eq!(z[0][0], Some(1.0 / 3.0));
    assert_eq!(z[0][1], Some(0.0));
    assert_eq!(z[0][2], Some(2.0 / 3.0));

    // Code 0 renders transparent; generated colors are hex.
    assert_eq!(colorscale[0].color, "rgba(0,0,0,0)");
    assert!(colorscale[2].color.starts_with('#'));
}

#[test]
fn dynamic_colors_are_deterministic_for_a_seeded_rng() {
    let registry = ConfigRegistry::default_logs();
    let composer = TrackComposer::new(&registry, 1);
    let rows = vec![
        LogRow::new(1000.0).with_channel("MARKER", "TOP-A"),
        LogRow::new(1001.0).with_channel("MARKER", "TOP-B"),
    ];

    let build = || {
        let mut rng = StdRng::seed_from_u64(42);
        composer.flag(
            CompositionState::new(),
            &rows,
            "MARKER",
            TrackSlot::new(1),
            &mut rng,
        )
    };

    assert_eq!(build(), build());
}
