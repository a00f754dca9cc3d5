use tracing::warn;

use crate::compose::axis::AxisEntry;
use crate::compose::state::CompositionState;
use crate::compose::trace::{
    FillMode, LineStyle, TraceDescriptor, channel_x, constant_x, depth_y, legend_group,
};
use crate::compose::{TrackComposer, TrackSlot};
use crate::core::types::LogRow;

/// Options for the fill-to-zero family.
#[derive(Debug, Clone)]
pub struct FillOptions {
    pub fill_color: String,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            fill_color: "lightgray".to_owned(),
        }
    }
}

impl TrackComposer<'_> {
    /// Curve filled toward the upper bound of its display range: an
    /// invisible boundary trace pinned at the bound, then the curve filling
    /// back to it.
    #[must_use]
    pub fn fill_to_limit(
        &self,
        mut state: CompositionState,
        rows: &[LogRow],
        key: &str,
        slot: TrackSlot,
        channel_index: usize,
    ) -> CompositionState {
        let Some(config) = self.registry().track(key) else {
            warn!(key, "no track configuration, skipping fill track");
            return state;
        };
        let (Some(channel), Some(range)) = (config.channel(channel_index), config.range(channel_index))
        else {
            warn!(key, channel_index, "fill track is missing its channel or range, skipping");
            return state;
        };

        let axis_id = self.primary_axis(slot);
        let limit = range[1];

        state.push_trace(TraceDescriptor::boundary(
            constant_x(rows, limit),
            depth_y(rows),
            axis_id,
        ));
        state.push_trace(
            TraceDescriptor::curve(
                channel,
                channel_x(rows, channel),
                depth_y(rows),
                LineStyle::solid(config.color(channel_index).unwrap_or("black")),
                axis_id,
                legend_group(slot.index),
            )
            .with_fill(FillMode::ToNext, None),
        );

        state.insert_axis(axis_id, AxisEntry::primary(slot.domain).with_range(range));
        state
    }

    /// Curve filled toward zero.
    #[must_use]
    pub fn fill_to_zero(
        &self,
        mut state: CompositionState,
        rows: &[LogRow],
        key: &str,
        slot: TrackSlot,
        channel_index: usize,
        options: &FillOptions,
    ) -> CompositionState {
        let Some(config) = self.registry().track(key) else {
            warn!(key, "no track configuration, skipping fill track");
            return state;
        };
        let Some(channel) = config.channel(channel_index) else {
            warn!(key, channel_index, "fill track is missing its channel, skipping");
            return state;
        };

        let axis_id = self.primary_axis(slot);
        state.push_trace(
            TraceDescriptor::curve(
                channel,
                channel_x(rows, channel),
                depth_y(rows),
                LineStyle::solid(config.color(channel_index).unwrap_or("black")),
                axis_id,
                legend_group(slot.index),
            )
            .with_fill(FillMode::ToZero, Some(options.fill_color.clone())),
        );

        let mut axis = AxisEntry::primary(slot.domain);
        if let Some(range) = config.range(channel_index) {
            axis = axis.with_range(range);
        }
        state.insert_axis(axis_id, axis);
        state
    }

    /// N channels stacked by filling the first to zero and each later one
    /// to its predecessor. Every extra channel reserves one empty overlay
    /// axis so the figure header stays aligned with multi-axis tracks.
    #[must_use]
    pub fn stacked_fill(
        &self,
        mut state: CompositionState,
        rows: &[LogRow],
        key: &str,
        slot: TrackSlot,
    ) -> CompositionState {
        let Some(config) = self.registry().track(key) else {
            warn!(key, "no track configuration, skipping stacked fill track");
            return state;
        };
        let axis_id = self.primary_axis(slot);

        for (index, channel) in config.channels.iter().enumerate() {
            let fill = if index == 0 {
                FillMode::ToZero
            } else {
                FillMode::ToNext
            };
            state.push_trace(
                TraceDescriptor::curve(
                    channel.as_str(),
                    channel_x(rows, channel),
                    depth_y(rows),
                    LineStyle::solid(config.color(index).unwrap_or("black")).with_width(0.0),
                    axis_id,
                    legend_group(slot.index),
                )
                .with_fill(fill, None),
            );
        }

        let mut axis = AxisEntry::primary(slot.domain);
        if let Some(range) = config.range(0) {
            axis = axis.with_range(range);
        }
        state.insert_axis(axis_id, axis);

        for _ in 1..config.channels.len() {
            let overlay_id = self.next_overlay(&mut state);
            state.push_trace(TraceDescriptor::boundary(Vec::new(), Vec::new(), overlay_id));
            let mut overlay = AxisEntry::overlay(axis_id);
            if let Some(range) = config.range(0) {
                overlay = overlay.with_range(range);
            }
            state.insert_axis(overlay_id, overlay);
        }
        state
    }
}
