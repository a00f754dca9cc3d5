use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::compose::annotations::Annotation;
use crate::compose::axis::{AxisEntry, AxisId};
use crate::compose::trace::TraceDescriptor;

/// Everything accumulated while composing one figure: the trace list, the
/// typed axis map, positioned annotations, and the overlay-axis counter.
///
/// A state belongs to exactly one figure build. It starts empty, moves
/// through composer calls by value, and its `overlay_count` equals the
/// number of overlay axes allocated so far, which keeps overlay IDs unique
/// across the whole figure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositionState {
    pub traces: Vec<TraceDescriptor>,
    pub axes: IndexMap<AxisId, AxisEntry>,
    pub annotations: Vec<Annotation>,
    pub overlay_count: u32,
}

impl CompositionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_trace(&mut self, trace: TraceDescriptor) {
        self.traces.push(trace);
    }

    /// Registers an axis. Replacing an existing entry points at a composer
    /// call-order mistake, so it is logged rather than silently accepted.
    pub fn insert_axis(&mut self, id: AxisId, entry: AxisEntry) {
        if self.axes.insert(id, entry).is_some() {
            warn!(axis = %id, "axis entry replaced an existing axis with the same id");
        }
    }
}
