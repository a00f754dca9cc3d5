//! Track/axis allocation and trace composition.
//!
//! One composer method exists per track family. All of them share the same
//! shape: take the accumulated [`CompositionState`], append this track's
//! traces, axes, and annotations, and return the updated state. The state
//! is threaded linearly through one figure build so overlay-axis IDs stay
//! unique without any hidden shared counter.

pub mod annotations;
pub mod axis;
pub mod crossover;
pub mod figure;
pub mod fill;
pub mod flag;
pub mod json_contract;
pub mod line;
pub mod overlay;
pub mod points;
pub mod state;
pub mod trace;

use ordered_float::OrderedFloat;
use rand::Rng;
use tracing::warn;

pub use annotations::{Anchor, Annotation, DepthNote, XRef, YRef};
pub use axis::{AxisEntry, AxisId, AxisPlacement, AxisScale};
pub use crossover::{CrossoverOptions, GsaOptions, NormalizedOptions, ThresholdOptions};
pub use figure::{DEFAULT_TRACKS, DepthAxis, FigureBuilder, FigureSpec, ShapeLine};
pub use fill::FillOptions;
pub use json_contract::{FIGURE_SPEC_JSON_SCHEMA_V1, FigureSpecJsonContractV1};
pub use line::LineOptions;
pub use overlay::OverlayOptions;
pub use state::CompositionState;
pub use trace::{
    DashStyle, FillMode, LINE_WIDTH, LineStyle, TRANSPARENT, TraceDescriptor, TraceGeometry,
};

use crate::config::{ConfigRegistry, TrackFamily};
use crate::core::types::LogRow;

/// The track position a composer call fills: its 1-based index (which is
/// also its primary axis ID) and its horizontal domain slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSlot {
    pub index: usize,
    pub domain: Option<[f64; 2]>,
}

impl TrackSlot {
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self {
            index,
            domain: None,
        }
    }

    #[must_use]
    pub fn with_domain(mut self, domain: [f64; 2]) -> Self {
        self.domain = Some(domain);
        self
    }
}

/// Composes tracks against a fixed configuration registry and a fixed
/// total track count.
///
/// The track count pins the overlay-axis offset scheme: primary axes are
/// `x1..x{total_tracks}`, each newly allocated overlay axis gets
/// `x{total_tracks + overlay_count}`, so the two ID ranges never collide
/// no matter which families the figure mixes.
#[derive(Debug, Clone, Copy)]
pub struct TrackComposer<'a> {
    registry: &'a ConfigRegistry,
    total_tracks: usize,
}

impl<'a> TrackComposer<'a> {
    #[must_use]
    pub fn new(registry: &'a ConfigRegistry, total_tracks: usize) -> Self {
        Self {
            registry,
            total_tracks,
        }
    }

    #[must_use]
    pub(crate) fn registry(&self) -> &'a ConfigRegistry {
        self.registry
    }

    #[must_use]
    pub(crate) fn primary_axis(&self, slot: TrackSlot) -> AxisId {
        AxisId(slot.index as u32)
    }

    /// Allocates the next overlay axis ID, bumping the figure counter.
    #[must_use]
    pub(crate) fn next_overlay(&self, state: &mut CompositionState) -> AxisId {
        state.overlay_count += 1;
        AxisId(self.total_tracks as u32 + state.overlay_count)
    }

    /// Dispatches a track to its configured family with default options.
    /// Unknown keys are skipped with a warning so one bad entry cannot
    /// abort the rest of the figure.
    #[must_use]
    pub fn compose<R: Rng>(
        &self,
        state: CompositionState,
        rows: &[LogRow],
        key: &str,
        slot: TrackSlot,
        rng: &mut R,
    ) -> CompositionState {
        let Some(family) = self.registry.family(key) else {
            warn!(key, "unknown track key, skipping track");
            return state;
        };

        match family {
            TrackFamily::Line => self.line(state, rows, key, slot, &LineOptions::default()),
            TrackFamily::FillToLimit => self.fill_to_limit(state, rows, key, slot, 0),
            TrackFamily::FillToZero => {
                self.fill_to_zero(state, rows, key, slot, 0, &FillOptions::default())
            }
            TrackFamily::StackedFill => self.stacked_fill(state, rows, key, slot),
            TrackFamily::DualOverlay => {
                self.dual_overlay(state, rows, key, slot, &OverlayOptions::default())
            }
            TrackFamily::TripleOverlay => self.triple_overlay(state, rows, key, slot),
            TrackFamily::QuadOverlay => self.quad_overlay(state, rows, key, slot),
            TrackFamily::Crossover => {
                self.crossover(state, rows, key, slot, &CrossoverOptions::default())
            }
            TrackFamily::ThresholdCrossover => {
                self.threshold_crossover(state, rows, key, slot, &ThresholdOptions::default())
            }
            TrackFamily::NormalizedCrossover => {
                self.normalized_crossover(state, rows, key, slot, &NormalizedOptions::default())
            }
            TrackFamily::GsaCrossover => {
                self.gsa_crossover(state, rows, key, slot, &GsaOptions::default())
            }
            TrackFamily::Flag => self.flag(state, rows, key, slot, rng),
            TrackFamily::PointMarker => self.point_marker(state, rows, key, slot),
            TrackFamily::TextLabels => {
                let limit = rows
                    .iter()
                    .map(|row| row.depth)
                    .max_by_key(|depth| OrderedFloat(*depth))
                    .unwrap_or(f64::INFINITY);
                self.text_labels(state, rows, key, slot, limit)
            }
        }
    }
}
