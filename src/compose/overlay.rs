use tracing::warn;

use crate::compose::axis::AxisEntry;
use crate::compose::state::CompositionState;
use crate::compose::trace::{DashStyle, LineStyle, TraceDescriptor, channel_x, depth_y, legend_group};
use crate::compose::{TrackComposer, TrackSlot};
use crate::core::types::LogRow;

/// Options for the dual-overlay family.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayOptions {
    /// Draws the second curve dashed, the usual styling when the overlay is
    /// a derived version of the primary curve.
    pub dashed_secondary: bool,
}

impl TrackComposer<'_> {
    /// Two curves in one track, the second on its own overlay axis.
    #[must_use]
    pub fn dual_overlay(
        &self,
        state: CompositionState,
        rows: &[LogRow],
        key: &str,
        slot: TrackSlot,
        options: &OverlayOptions,
    ) -> CompositionState {
        let dashes: &[DashStyle] = if options.dashed_secondary {
            &[DashStyle::Solid, DashStyle::Dash]
        } else {
            &[DashStyle::Solid, DashStyle::Solid]
        };
        self.overlay_stack(state, rows, key, slot, dashes)
    }

    /// Three independently scaled curves: solid, dashed, dotted.
    #[must_use]
    pub fn triple_overlay(
        &self,
        state: CompositionState,
        rows: &[LogRow],
        key: &str,
        slot: TrackSlot,
    ) -> CompositionState {
        self.overlay_stack(
            state,
            rows,
            key,
            slot,
            &[DashStyle::Solid, DashStyle::Dash, DashStyle::Dot],
        )
    }

    /// Four independently scaled solid curves.
    #[must_use]
    pub fn quad_overlay(
        &self,
        state: CompositionState,
        rows: &[LogRow],
        key: &str,
        slot: TrackSlot,
    ) -> CompositionState {
        self.overlay_stack(
            state,
            rows,
            key,
            slot,
            &[DashStyle::Solid; 4],
        )
    }

    /// Shared body of the overlay families: curve 0 on the primary axis,
    /// each later curve on a freshly allocated overlay axis with its own
    /// range. Channels missing from the configuration are skipped with a
    /// warning so a short table degrades instead of failing.
    fn overlay_stack(
        &self,
        mut state: CompositionState,
        rows: &[LogRow],
        key: &str,
        slot: TrackSlot,
        dashes: &[DashStyle],
    ) -> CompositionState {
        let Some(config) = self.registry().track(key) else {
            warn!(key, "no track configuration, skipping overlay track");
            return state;
        };
        let primary_id = self.primary_axis(slot);

        for (index, dash) in dashes.iter().enumerate() {
            let Some(channel) = config.channel(index) else {
                warn!(key, index, "overlay track configuration is incomplete, skipping channel");
                continue;
            };

            let axis_id = if index == 0 {
                primary_id
            } else {
                self.next_overlay(&mut state)
            };

            state.push_trace(TraceDescriptor::curve(
                channel,
                channel_x(rows, channel),
                depth_y(rows),
                LineStyle::solid(config.color(index).unwrap_or("black")).with_dash(*dash),
                axis_id,
                legend_group(slot.index),
            ));

            let mut axis = if index == 0 {
                AxisEntry::primary(slot.domain)
            } else {
                AxisEntry::overlay(primary_id)
            };
            match config.range(index) {
                Some(range) => axis = axis.with_scaled_range(range, config.log_scale),
                None => warn!(key, index, "no display range configured for overlay channel"),
            }
            state.insert_axis(axis_id, axis);
        }
        state
    }
}
