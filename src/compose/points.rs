use tracing::warn;

use crate::compose::axis::AxisEntry;
use crate::compose::state::CompositionState;
use crate::compose::trace::{TraceDescriptor, channel_x, constant_x, depth_y};
use crate::compose::{TrackComposer, TrackSlot};
use crate::core::types::LogRow;

impl TrackComposer<'_> {
    /// Sparse values rendered as open circle markers on a fixed `[0, 1]`
    /// axis. An invisible constant trace pins the axis's right edge so the
    /// markers keep their horizontal position regardless of the data.
    #[must_use]
    pub fn point_marker(
        &self,
        mut state: CompositionState,
        rows: &[LogRow],
        key: &str,
        slot: TrackSlot,
    ) -> CompositionState {
        let Some(config) = self.registry().track(key) else {
            warn!(key, "no track configuration, skipping point marker track");
            return state;
        };
        let Some(channel) = config.channel(0) else {
            warn!(key, "point marker track has no channel configured, skipping");
            return state;
        };

        let axis_id = self.primary_axis(slot);
        state.push_trace(TraceDescriptor::markers(
            channel,
            channel_x(rows, channel),
            depth_y(rows),
            config.color(0).unwrap_or("black"),
            axis_id,
        ));
        state.push_trace(TraceDescriptor::boundary(
            constant_x(rows, 1.0),
            depth_y(rows),
            axis_id,
        ));

        state.insert_axis(
            axis_id,
            AxisEntry::primary(slot.domain)
                .with_range(config.range(0).unwrap_or([0.0, 1.0]))
                .without_tick_labels(),
        );
        state
    }
}
