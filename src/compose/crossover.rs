use tracing::warn;

use crate::compose::axis::{AxisEntry, AxisId};
use crate::compose::state::CompositionState;
use crate::compose::trace::{
    FillMode, LineStyle, TraceDescriptor, channel_x, constant_x, depth_y, legend_group,
};
use crate::compose::{TrackComposer, TrackSlot};
use crate::config::palette;
use crate::core::segment::{Segment, fill_color, segment, segment_by};
use crate::core::types::LogRow;

/// Options for the shared-scale crossover family.
#[derive(Debug, Clone)]
pub struct CrossoverOptions {
    pub positive_color: String,
    pub negative_color: String,
}

impl Default for CrossoverOptions {
    fn default() -> Self {
        Self {
            positive_color: "limegreen".to_owned(),
            negative_color: "lightgray".to_owned(),
        }
    }
}

/// Options for the threshold crossover family.
#[derive(Debug, Clone)]
pub struct ThresholdOptions {
    pub positive_color: String,
    pub negative_color: String,
}

impl Default for ThresholdOptions {
    fn default() -> Self {
        Self {
            positive_color: palette::RED.to_owned(),
            negative_color: "lightgray".to_owned(),
        }
    }
}

/// Options for the normalized crossover family.
#[derive(Debug, Clone)]
pub struct NormalizedOptions {
    pub positive_color: String,
    pub negative_color: String,
    /// Keep only positive segments; turning this off shades every segment
    /// with its label's color instead.
    pub only_positive: bool,
    /// Skip the shading pass entirely, leaving just the two curves.
    pub exclude_crossover: bool,
}

impl Default for NormalizedOptions {
    fn default() -> Self {
        Self {
            positive_color: "limegreen".to_owned(),
            negative_color: "lightgray".to_owned(),
            only_positive: true,
            exclude_crossover: false,
        }
    }
}

/// Options for the GSA crossover family.
#[derive(Debug, Clone)]
pub struct GsaOptions {
    pub red_fill: String,
    pub blue_fill: String,
}

impl Default for GsaOptions {
    fn default() -> Self {
        Self {
            red_fill: "red".to_owned(),
            blue_fill: palette::BLUE.to_owned(),
        }
    }
}

impl TrackComposer<'_> {
    /// Two curves sharing one scale, with each positive crossover segment
    /// shaded by a fill pair. Fills are appended before the curves so the
    /// curves draw on top, and one empty overlay axis is reserved to keep
    /// the header layout aligned with multi-axis tracks.
    #[must_use]
    pub fn crossover(
        &self,
        mut state: CompositionState,
        rows: &[LogRow],
        key: &str,
        slot: TrackSlot,
        options: &CrossoverOptions,
    ) -> CompositionState {
        let Some(config) = self.registry().track(key) else {
            warn!(key, "no track configuration, skipping crossover track");
            return state;
        };
        let (Some(channel_1), Some(channel_2)) = (config.channel(0), config.channel(1)) else {
            warn!(key, "crossover track needs two channels, skipping");
            return state;
        };
        let axis_id = self.primary_axis(slot);

        for segment in segment(rows, key, self.registry(), true) {
            push_fill_pair(
                &mut state,
                &segment,
                channel_1,
                channel_2,
                &fill_color(segment.positive, &options.positive_color, &options.negative_color),
                axis_id,
            );
        }

        for (index, channel) in [channel_1, channel_2].into_iter().enumerate() {
            state.push_trace(TraceDescriptor::curve(
                channel,
                channel_x(rows, channel),
                depth_y(rows),
                LineStyle::solid(config.color(index).unwrap_or("black")),
                axis_id,
                legend_group(slot.index),
            ));
        }

        let mut axis = AxisEntry::primary(slot.domain);
        if let Some(range) = config.range(0) {
            axis = axis.with_scaled_range(range, config.log_scale);
        }
        state.insert_axis(axis_id, axis);

        let overlay_id = self.next_overlay(&mut state);
        state.push_trace(TraceDescriptor::boundary(Vec::new(), Vec::new(), overlay_id));
        let mut overlay = AxisEntry::overlay(axis_id);
        if let Some(range) = config.range(0) {
            overlay = overlay.with_scaled_range(range, config.log_scale);
        }
        state.insert_axis(overlay_id, overlay);
        state
    }

    /// One curve against its configured scalar threshold; exceedance
    /// segments are shaded between the curve and the threshold line, and
    /// the threshold itself is drawn as a labeled line.
    #[must_use]
    pub fn threshold_crossover(
        &self,
        mut state: CompositionState,
        rows: &[LogRow],
        key: &str,
        slot: TrackSlot,
        options: &ThresholdOptions,
    ) -> CompositionState {
        let Some(config) = self.registry().track(key) else {
            warn!(key, "no track configuration, skipping threshold track");
            return state;
        };
        let Some(channel) = config.channel(0) else {
            warn!(key, "threshold track has no channel configured, skipping");
            return state;
        };
        let Some(threshold) = config.threshold else {
            warn!(key, "threshold track has no threshold configured, skipping");
            return state;
        };
        let axis_id = self.primary_axis(slot);

        for segment in segment(rows, key, self.registry(), true) {
            state.push_trace(TraceDescriptor::boundary(
                channel_x(segment.rows, channel),
                depth_y(segment.rows),
                axis_id,
            ));
            state.push_trace(
                TraceDescriptor::boundary(
                    constant_x(segment.rows, threshold),
                    depth_y(segment.rows),
                    axis_id,
                )
                .with_fill(
                    FillMode::ToNext,
                    Some(fill_color(
                        segment.positive,
                        &options.positive_color,
                        &options.negative_color,
                    )),
                ),
            );
        }

        state.push_trace(TraceDescriptor::curve(
            channel,
            channel_x(rows, channel),
            depth_y(rows),
            LineStyle::solid(config.color(0).unwrap_or("black")),
            axis_id,
            legend_group(slot.index),
        ));
        state.push_trace(TraceDescriptor::curve(
            "Threshold",
            constant_x(rows, threshold),
            depth_y(rows),
            LineStyle::solid(palette::RED),
            axis_id,
            legend_group(slot.index),
        ));

        let mut axis = AxisEntry::primary(slot.domain);
        if let Some(range) = config.range(0) {
            axis = axis.with_range(range);
        }
        state.insert_axis(axis_id, axis);
        state
    }

    /// Raw channel pair on independent scales plus a hidden shading axis
    /// running over the precomputed normalized pair. The normalized columns
    /// must exist on the rows before this runs (see
    /// [`crate::core::normalize::normalize_crossover`]).
    #[must_use]
    pub fn normalized_crossover(
        &self,
        mut state: CompositionState,
        rows: &[LogRow],
        key: &str,
        slot: TrackSlot,
        options: &NormalizedOptions,
    ) -> CompositionState {
        let Some(config) = self.registry().track(key) else {
            warn!(key, "no track configuration, skipping normalized crossover track");
            return state;
        };
        let (Some(channel_1), Some(channel_2)) = (config.channel(0), config.channel(1)) else {
            warn!(key, "normalized crossover track needs two raw channels, skipping");
            return state;
        };
        let primary_id = self.primary_axis(slot);

        state.push_trace(
            TraceDescriptor::curve(
                channel_1,
                channel_x(rows, channel_1),
                depth_y(rows),
                LineStyle::solid(config.color(0).unwrap_or("black")),
                primary_id,
                legend_group(slot.index),
            )
            .without_legend(),
        );
        let mut axis = AxisEntry::primary(slot.domain);
        if let Some(range) = config.range(0) {
            axis = axis.with_scaled_range(range, config.log_scale);
        }
        state.insert_axis(primary_id, axis);

        let overlay_id = self.next_overlay(&mut state);
        state.push_trace(
            TraceDescriptor::curve(
                channel_2,
                channel_x(rows, channel_2),
                depth_y(rows),
                LineStyle::solid(config.color(1).unwrap_or("black")),
                overlay_id,
                legend_group(slot.index),
            )
            .without_legend(),
        );
        let mut overlay = AxisEntry::overlay(primary_id);
        if let Some(range) = config.range(1) {
            overlay = overlay.with_range(range);
        }
        state.insert_axis(overlay_id, overlay);

        if !options.exclude_crossover {
            let (Some(norm_1), Some(norm_2)) = (config.channel(2), config.channel(3)) else {
                warn!(key, "normalized columns are not configured, skipping shading");
                return state;
            };

            let shading_id = self.next_overlay(&mut state);
            for segment in segment(rows, key, self.registry(), options.only_positive) {
                push_fill_pair(
                    &mut state,
                    &segment,
                    norm_1,
                    norm_2,
                    &fill_color(segment.positive, &options.positive_color, &options.negative_color),
                    shading_id,
                );
            }
            let mut shading = AxisEntry::overlay(primary_id).hidden();
            if let Some(range) = config.range(0) {
                shading = shading.with_scaled_range(range, config.log_scale);
            }
            state.insert_axis(shading_id, shading);
        }
        state
    }

    /// Measured curve against its GSA baseline with two conditional
    /// shading passes on hidden overlay axes.
    ///
    /// For log-scaled pairs (resistivity) the red condition fires when the
    /// measured curve exceeds the baseline; for linear pairs
    /// (porosity/density) it fires when the curve falls below it, because
    /// resistivity indicates the same anomaly inversely. The blue condition
    /// is the mirror image.
    #[must_use]
    pub fn gsa_crossover(
        &self,
        mut state: CompositionState,
        rows: &[LogRow],
        key: &str,
        slot: TrackSlot,
        options: &GsaOptions,
    ) -> CompositionState {
        let Some(config) = self.registry().track(key) else {
            warn!(key, "no track configuration, skipping GSA crossover track");
            return state;
        };
        let (Some(channel_1), Some(channel_2)) = (config.channel(0), config.channel(1)) else {
            warn!(key, "GSA crossover track needs two channels, skipping");
            return state;
        };
        let primary_id = self.primary_axis(slot);
        let inverted = config.log_scale;

        state.push_trace(TraceDescriptor::curve(
            channel_1,
            channel_x(rows, channel_1),
            depth_y(rows),
            LineStyle::solid(config.color(0).unwrap_or("black")),
            primary_id,
            legend_group(slot.index),
        ));
        let mut axis = AxisEntry::primary(slot.domain);
        if let Some(range) = config.range(0) {
            axis = axis.with_scaled_range(range, config.log_scale);
        }
        state.insert_axis(primary_id, axis);

        let overlay_id = self.next_overlay(&mut state);
        state.push_trace(TraceDescriptor::curve(
            channel_2,
            channel_x(rows, channel_2),
            depth_y(rows),
            LineStyle::solid(config.color(1).unwrap_or("black")),
            overlay_id,
            legend_group(slot.index),
        ));
        let mut overlay = AxisEntry::overlay(primary_id);
        if let Some(range) = config.range(1) {
            overlay = overlay.with_scaled_range(range, config.log_scale);
        }
        state.insert_axis(overlay_id, overlay);

        let exceeds = |row: &LogRow| match (row.finite(channel_1), row.finite(channel_2)) {
            (Some(a), Some(b)) => a > b,
            _ => false,
        };
        let falls_below = |row: &LogRow| match (row.finite(channel_1), row.finite(channel_2)) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        };

        for (fill, condition) in [
            (&options.red_fill, inverted),
            (&options.blue_fill, !inverted),
        ] {
            let shading_id = self.next_overlay(&mut state);
            let segments = if condition {
                segment_by(rows, exceeds)
            } else {
                segment_by(rows, falls_below)
            };
            for segment in segments.into_iter().filter(|segment| segment.positive) {
                push_fill_pair(&mut state, &segment, channel_1, channel_2, fill, shading_id);
            }
            let mut shading = AxisEntry::overlay(primary_id).hidden();
            if let Some(range) = config.range(0) {
                shading = shading.with_scaled_range(range, config.log_scale);
            }
            state.insert_axis(shading_id, shading);
        }
        state
    }
}

/// Appends one shaded crossover segment: an invisible boundary trace on
/// the first channel, then a trace on the second channel filling back to
/// it. Segments arrive in depth order, so fills never overlap.
fn push_fill_pair(
    state: &mut CompositionState,
    segment: &Segment<'_>,
    near_channel: &str,
    far_channel: &str,
    fill: &str,
    axis_id: AxisId,
) {
    state.push_trace(TraceDescriptor::boundary(
        channel_x(segment.rows, near_channel),
        depth_y(segment.rows),
        axis_id,
    ));
    state.push_trace(
        TraceDescriptor::boundary(
            channel_x(segment.rows, far_channel),
            depth_y(segment.rows),
            axis_id,
        )
        .with_fill(FillMode::ToNext, Some(fill.to_owned())),
    );
}
