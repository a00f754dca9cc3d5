use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::compose::axis::{AxisEntry, AxisId};
use crate::compose::state::CompositionState;
use crate::compose::trace::TraceDescriptor;
use crate::compose::{TrackComposer, TrackSlot};
use crate::core::markers::{MarkerGroup, extract_marker_groups};
use crate::core::types::LogRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

/// Horizontal coordinate system of an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "space")]
pub enum XRef {
    /// Paper coordinates, `0..1` across the whole figure.
    Paper,
    /// Fraction of one axis's horizontal domain.
    AxisDomain { axis: AxisId },
    /// Data coordinates of one axis.
    Axis { axis: AxisId },
}

/// Vertical coordinate system of an annotation or shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YRef {
    Paper,
    Depth,
}

/// One positioned text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub text: String,
    pub bold: bool,
    pub x: f64,
    pub y: f64,
    pub x_ref: XRef,
    pub y_ref: YRef,
    pub x_anchor: Anchor,
    pub y_anchor: Anchor,
    pub font_size: f64,
    pub font_color: String,
    pub background: Option<String>,
    pub show_arrow: bool,
    /// Horizontal arrow tail offset in pixels, only meaningful with
    /// `show_arrow`.
    pub arrow_shift_x: f64,
    pub text_angle: f64,
}

impl Annotation {
    #[must_use]
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            bold: false,
            x,
            y,
            x_ref: XRef::Paper,
            y_ref: YRef::Paper,
            x_anchor: Anchor::Center,
            y_anchor: Anchor::Middle,
            font_size: 10.0,
            font_color: "black".to_owned(),
            background: None,
            show_arrow: false,
            arrow_shift_x: 0.0,
            text_angle: 0.0,
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn with_refs(mut self, x_ref: XRef, y_ref: YRef) -> Self {
        self.x_ref = x_ref;
        self.y_ref = y_ref;
        self
    }

    #[must_use]
    pub fn with_anchors(mut self, x_anchor: Anchor, y_anchor: Anchor) -> Self {
        self.x_anchor = x_anchor;
        self.y_anchor = y_anchor;
        self
    }

    #[must_use]
    pub fn with_font(mut self, size: f64, color: impl Into<String>) -> Self {
        self.font_size = size;
        self.font_color = color.into();
        self
    }

    #[must_use]
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_arrow(mut self, shift_x: f64) -> Self {
        self.show_arrow = true;
        self.arrow_shift_x = shift_x;
        self
    }

    #[must_use]
    pub fn with_angle(mut self, degrees: f64) -> Self {
        self.text_angle = degrees;
        self
    }
}

/// A free-depth note, e.g. a formation-test remark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthNote {
    pub depth: f64,
    pub note: String,
}

fn truncated(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

/// Centered formation-top labels, one per marker group, skipping groups
/// whose mean depth is at or beyond `depth_limit` so labels never bleed
/// into the cut-off zone below the plotted range.
#[must_use]
pub(crate) fn marker_annotations(
    groups: &[MarkerGroup],
    axis: AxisId,
    depth_limit: f64,
) -> Vec<Annotation> {
    groups
        .iter()
        .filter(|group| group.mean_depth < depth_limit)
        .map(|group| {
            Annotation::new(truncated(&group.label, 8), 0.5, group.mean_depth)
                .bold()
                .with_refs(XRef::AxisDomain { axis }, YRef::Depth)
                .with_background("rgba(255, 255, 255, 0.7)")
        })
        .collect()
}

impl TrackComposer<'_> {
    /// Text-annotation track: no visible series, just an invisible
    /// axis-pinning trace and one centered label per categorical group at
    /// its mean depth.
    #[must_use]
    pub fn text_labels(
        &self,
        mut state: CompositionState,
        rows: &[LogRow],
        key: &str,
        slot: TrackSlot,
        depth_limit: f64,
    ) -> CompositionState {
        let Some(config) = self.registry().track(key) else {
            warn!(key, "no track configuration, skipping text label track");
            return state;
        };
        let Some(channel) = config.channel(0) else {
            warn!(key, "text label track has no channel configured, skipping");
            return state;
        };

        let axis_id = self.primary_axis(slot);
        let groups = extract_marker_groups(rows, channel);

        if !groups.is_empty() {
            let depths: Vec<f64> = groups.iter().map(|group| group.mean_depth).collect();
            let min = depths.iter().copied().min_by_key(|d| OrderedFloat(*d));
            let max = depths.iter().copied().max_by_key(|d| OrderedFloat(*d));
            if let (Some(min), Some(max)) = (min, max) {
                state.push_trace(TraceDescriptor::boundary(
                    vec![Some(0.0), Some(1.0)],
                    vec![min, max],
                    axis_id,
                ));
            }
            state
                .annotations
                .extend(marker_annotations(&groups, axis_id, depth_limit));
        }

        state.insert_axis(
            axis_id,
            AxisEntry::primary(slot.domain)
                .without_tick_labels()
                .without_zero_line(),
        );
        state
    }

    /// Arrowed note labels anchored at specific depths, e.g. formation-test
    /// remarks beside a point-marker track. Appends annotations only.
    #[must_use]
    pub fn note_labels(
        &self,
        mut state: CompositionState,
        notes: &[DepthNote],
        slot: TrackSlot,
    ) -> CompositionState {
        let axis_id = self.primary_axis(slot);
        state.annotations.extend(notes.iter().map(|note| {
            Annotation::new(truncated(&note.note, 20), 0.1, note.depth)
                .with_refs(XRef::Axis { axis: axis_id }, YRef::Depth)
                .with_anchors(Anchor::Left, Anchor::Middle)
                .with_arrow(20.0)
        }));
        state
    }
}
