use wellplot_rs::compose::{
    AxisId, AxisScale, CompositionState, LineOptions, TraceGeometry, TrackComposer, TrackSlot,
};
use wellplot_rs::config::ConfigRegistry;
use wellplot_rs::core::types::LogRow;

fn gr_rows() -> Vec<LogRow> {
    (0..5)
        .map(|i| {
            LogRow::new(1000.0 + f64::from(i))
                .with_channel("GR", 40.0 + f64::from(i))
                .with_channel("RT", 10.0 + f64::from(i))
        })
        .collect()
}

#[test]
fn line_track_adds_one_trace_and_its_primary_axis() {
    let registry = ConfigRegistry::default_logs();
    let composer = TrackComposer::new(&registry, 3);

    let state = composer.line(
        CompositionState::new(),
        &gr_rows(),
        "GR",
        TrackSlot::new(1).with_domain([0.0, 0.25]),
        &LineOptions::default(),
    );

    assert_eq!(state.traces.len(), 1);
    assert_eq!(state.overlay_count, 0);

    let trace = &state.traces[0];
    assert_eq!(trace.name, "GR");
    assert_eq!(trace.x_axis, AxisId(1));
    assert_eq!(trace.legend_group.as_deref(), Some("legend1"));
    assert_eq!(trace.x.len(), 5);
    assert_eq!(trace.x[0], Some(40.0));

    let axis = state.axes.get(&AxisId(1)).expect("primary axis");
    assert_eq!(axis.scale, AxisScale::Linear);
    assert_eq!(axis.range, Some([0.0, 250.0]));
    assert_eq!(axis.domain(), Some([0.0, 0.25]));
}

#[test]
fn log_tracks_store_their_range_in_log_units() {
    let registry = ConfigRegistry::default_logs();
    let composer = TrackComposer::new(&registry, 1);

    let state = composer.line(
        CompositionState::new(),
        &gr_rows(),
        "RT",
        TrackSlot::new(1),
        &LineOptions::default(),
    );

    let axis = state.axes.get(&AxisId(1)).expect("primary axis");
    assert_eq!(axis.scale, AxisScale::Log10);
    let range = axis.range.expect("range");
    assert!((range[0] - 0.02f64.log10()).abs() < 1e-12);
    assert!((range[1] - 2000.0f64.log10()).abs() < 1e-12);
}

#[test]
fn channel_override_reads_an_alternate_column() {
    let registry = ConfigRegistry::default_logs();
    let composer = TrackComposer::new(&registry, 1);

    let options = LineOptions {
        channel: Some("RT".to_owned()),
        label: Some("Resistivity".to_owned()),
    };
    let state = composer.line(
        CompositionState::new(),
        &gr_rows(),
        "GR",
        TrackSlot::new(1),
        &options,
    );

    assert_eq!(state.traces[0].name, "Resistivity");
    assert_eq!(state.traces[0].x[0], Some(10.0));
}

#[test]
fn unknown_key_returns_the_state_unchanged() {
    let registry = ConfigRegistry::default_logs();
    let composer = TrackComposer::new(&registry, 1);

    let state = composer.line(
        CompositionState::new(),
        &gr_rows(),
        "NOT_A_KEY",
        TrackSlot::new(1),
        &LineOptions::default(),
    );

    assert_eq!(state, CompositionState::new());
}

#[test]
fn missing_rows_become_explicit_gaps() {
    let registry = ConfigRegistry::default_logs();
    let composer = TrackComposer::new(&registry, 1);
    let rows = vec![
        LogRow::new(10.0).with_channel("GR", 50.0),
        LogRow::new(11.0),
        LogRow::new(12.0).with_channel("GR", 60.0),
    ];

    let state = composer.line(
        CompositionState::new(),
        &rows,
        "GR",
        TrackSlot::new(1),
        &LineOptions::default(),
    );

    assert_eq!(state.traces[0].x, vec![Some(50.0), None, Some(60.0)]);
    assert!(matches!(state.traces[0].geometry, TraceGeometry::Line));
}
