use tracing::warn;

use crate::compose::axis::AxisEntry;
use crate::compose::state::CompositionState;
use crate::compose::trace::{LineStyle, TraceDescriptor, channel_x, depth_y, legend_group};
use crate::compose::{TrackComposer, TrackSlot};
use crate::core::types::LogRow;

/// Options for the single-curve family.
#[derive(Debug, Clone, Default)]
pub struct LineOptions {
    /// Channel to read; defaults to the track's first configured channel.
    pub channel: Option<String>,
    /// Legend label; defaults to the channel name.
    pub label: Option<String>,
}

impl TrackComposer<'_> {
    /// Single curve on its own primary axis.
    #[must_use]
    pub fn line(
        &self,
        mut state: CompositionState,
        rows: &[LogRow],
        key: &str,
        slot: TrackSlot,
        options: &LineOptions,
    ) -> CompositionState {
        let Some(config) = self.registry().track(key) else {
            warn!(key, "no track configuration, skipping line track");
            return state;
        };

        let channel = options
            .channel
            .clone()
            .or_else(|| config.channel(0).map(str::to_owned))
            .unwrap_or_else(|| key.to_owned());
        let label = options.label.clone().unwrap_or_else(|| channel.clone());
        let axis_id = self.primary_axis(slot);

        state.push_trace(TraceDescriptor::curve(
            label,
            channel_x(rows, &channel),
            depth_y(rows),
            LineStyle::solid(config.color(0).unwrap_or("black")),
            axis_id,
            legend_group(slot.index),
        ));

        let mut axis = AxisEntry::primary(slot.domain);
        match config.range(0) {
            Some(range) => axis = axis.with_scaled_range(range, config.log_scale),
            None => warn!(key, "no display range configured for line track"),
        }
        state.insert_axis(axis_id, axis);
        state
    }
}
