use wellplot_rs::compose::{
    AxisId, CompositionState, DepthNote, TrackComposer, TrackSlot, XRef, YRef,
};
use wellplot_rs::config::ConfigRegistry;
use wellplot_rs::core::types::LogRow;

fn marker_rows() -> Vec<LogRow> {
    vec![
        LogRow::new(1000.0).with_channel("MARKER", "BALIKPAPAN-TOP"),
        LogRow::new(1010.0).with_channel("MARKER", "BALIKPAPAN-TOP"),
        LogRow::new(1200.0).with_channel("MARKER", "TOP-B"),
        LogRow::new(1500.0).with_channel("MARKER", "DEEP"),
    ]
}

#[test]
fn text_labels_annotate_each_group_at_its_mean_depth() {
    let registry = ConfigRegistry::default_logs();
    let composer = TrackComposer::new(&registry, 1);

    let state = composer.text_labels(
        CompositionState::new(),
        &marker_rows(),
        "MARKER",
        TrackSlot::new(1).with_domain([0.0, 0.1]),
        2000.0,
    );

    assert_eq!(state.annotations.len(), 3);
    let first = &state.annotations[0];
    assert_eq!(first.y, 1005.0);
    assert_eq!(first.y_ref, YRef::Depth);
    assert_eq!(first.x_ref, XRef::AxisDomain { axis: AxisId(1) });
    assert!(first.bold);
    // Long names are clipped to eight characters for the narrow track.
    assert_eq!(first.text, "BALIKPAP");

    // One invisible pinning trace forces the axis into existence.
    assert_eq!(state.traces.len(), 1);
    assert!(!state.traces[0].show_legend);
    let axis = state.axes.get(&AxisId(1)).expect("label axis");
    assert!(!axis.show_tick_labels);
}

#[test]
fn labels_at_or_below_the_depth_limit_are_dropped() {
    let registry = ConfigRegistry::default_logs();
    let composer = TrackComposer::new(&registry, 1);

    let state = composer.text_labels(
        CompositionState::new(),
        &marker_rows(),
        "MARKER",
        TrackSlot::new(1),
        1200.0,
    );

    let texts: Vec<&str> = state
        .annotations
        .iter()
        .map(|annotation| annotation.text.as_str())
        .collect();
    assert_eq!(texts, vec!["BALIKPAP"]);
}

#[test]
fn empty_marker_column_still_creates_the_axis() {
    let registry = ConfigRegistry::default_logs();
    let composer = TrackComposer::new(&registry, 1);
    let rows = vec![LogRow::new(1000.0), LogRow::new(1001.0)];

    let state = composer.text_labels(CompositionState::new(), &rows, "MARKER", TrackSlot::new(1), 2000.0);

    assert!(state.annotations.is_empty());
    assert!(state.traces.is_empty());
    assert!(state.axes.contains_key(&AxisId(1)));
}

#[test]
fn depth_notes_become_arrowed_annotations() {
    let registry = ConfigRegistry::default_logs();
    let composer = TrackComposer::new(&registry, 2);
    let notes = vec![
        DepthNote {
            depth: 1050.0,
            note: "Water bearing sand, tested 1998".to_owned(),
        },
    ];

    let state = composer.note_labels(CompositionState::new(), &notes, TrackSlot::new(2));

    assert_eq!(state.annotations.len(), 1);
    let note = &state.annotations[0];
    assert!(note.show_arrow);
    assert_eq!(note.arrow_shift_x, 20.0);
    assert_eq!(note.y, 1050.0);
    assert_eq!(note.x_ref, XRef::Axis { axis: AxisId(2) });
    // Notes clip to twenty characters.
    assert_eq!(note.text.chars().count(), 20);
}
