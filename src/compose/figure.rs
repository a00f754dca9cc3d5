use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::compose::annotations::{Anchor, Annotation, YRef, marker_annotations};
use crate::compose::axis::{AxisEntry, AxisId};
use crate::compose::state::CompositionState;
use crate::compose::trace::TraceDescriptor;
use crate::compose::{TrackComposer, TrackSlot};
use crate::config::{ConfigRegistry, TrackFamily};
use crate::core::domain::track_domains;
use crate::core::markers::extract_marker_groups;
use crate::core::normalize::normalize_crossover;
use crate::core::types::LogRow;
use crate::error::{PlotError, PlotResult};

/// The standard default track sequence for a QC overview figure.
pub const DEFAULT_TRACKS: &[&str] = &["MARKER", "GR", "RT_RHOB", "NPHI_RHOB"];

/// Paper-space boundary between the plot area below and the header band
/// above, where per-track channel names, units, and ranges are drawn.
const HEADER_BAND: f64 = 0.8;

/// One straight separator or grid line in the finished figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeLine {
    pub x: [f64; 2],
    pub y: [f64; 2],
    pub y_ref: YRef,
    pub color: String,
    pub width: f64,
    /// Draw beneath the data layer (used for depth grid lines).
    pub below: bool,
}

impl ShapeLine {
    fn separator(x: [f64; 2], y: [f64; 2]) -> Self {
        Self {
            x,
            y,
            y_ref: YRef::Paper,
            color: "black".to_owned(),
            width: 1.0,
            below: false,
        }
    }

    fn depth_grid(depth: f64) -> Self {
        Self {
            x: [0.0, 1.0],
            y: [depth, depth],
            y_ref: YRef::Depth,
            color: "gainsboro".to_owned(),
            width: 1.0,
            below: true,
        }
    }
}

/// The shared, reversed depth axis every track binds to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthAxis {
    pub title: String,
    /// `[deepest, shallowest]` so depth increases downward.
    pub range: [f64; 2],
    /// Vertical paper span below the header band.
    pub domain: [f64; 2],
    pub show_grid: bool,
    pub show_spikes: bool,
}

/// A finished figure specification, ready for the rendering boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureSpec {
    pub title: Option<String>,
    pub traces: Vec<TraceDescriptor>,
    pub axes: IndexMap<AxisId, AxisEntry>,
    pub annotations: Vec<Annotation>,
    pub shapes: Vec<ShapeLine>,
    pub depth_axis: DepthAxis,
}

/// Composes a full multi-track figure from an ordered track sequence.
///
/// The builder runs every track through its configured family, then
/// finalizes the figure: tick values per track, header annotations, track
/// separators, and the reversed depth axis. Rows must arrive sorted by
/// depth ascending.
#[derive(Debug, Clone)]
pub struct FigureBuilder<'a> {
    registry: &'a ConfigRegistry,
    sequence: Vec<String>,
    title: Option<String>,
    spacing: f64,
    depth_grid_interval: Option<f64>,
}

impl<'a> FigureBuilder<'a> {
    #[must_use]
    pub fn new(registry: &'a ConfigRegistry) -> Self {
        Self {
            registry,
            sequence: Vec::new(),
            title: None,
            spacing: 0.0,
            depth_grid_interval: None,
        }
    }

    #[must_use]
    pub fn with_track(mut self, key: impl Into<String>) -> Self {
        self.sequence.push(key.into());
        self
    }

    #[must_use]
    pub fn with_tracks<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sequence.extend(keys.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_default_tracks(self) -> Self {
        self.with_tracks(DEFAULT_TRACKS.iter().copied())
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Draws horizontal depth grid lines at the given interval instead of
    /// the depth axis's own grid.
    #[must_use]
    pub fn with_depth_grid(mut self, interval: f64) -> Self {
        self.depth_grid_interval = Some(interval);
        self
    }

    pub fn build<R: Rng>(&self, rows: &[LogRow], rng: &mut R) -> PlotResult<FigureSpec> {
        if rows.is_empty() {
            return Err(PlotError::InvalidData(
                "figure requires at least one row".to_owned(),
            ));
        }
        if self.sequence.is_empty() {
            return Err(PlotError::InvalidData(
                "figure requires at least one track".to_owned(),
            ));
        }

        let working = self.prepare_rows(rows);
        let (min_depth, max_depth) = depth_extrema(&working);

        let ratios: Vec<f64> = self
            .sequence
            .iter()
            .map(|key| self.registry.width_ratio(key))
            .collect();
        let domains = track_domains(&ratios, self.spacing);

        let composer = TrackComposer::new(self.registry, self.sequence.len());
        let mut state = CompositionState::new();
        let mut track_axes: Vec<Vec<AxisId>> = Vec::with_capacity(self.sequence.len());

        for (index, key) in self.sequence.iter().enumerate() {
            let slot = TrackSlot::new(index + 1).with_domain(domains[index]);
            let axes_before = state.axes.len();
            state = composer.compose(state, &working, key, slot, rng);

            // Dynamic flag tracks (formation markers etc.) also get their
            // per-group text labels, like the deployed overview figure.
            if let Some(config) = self.registry.track(key) {
                if config.family == TrackFamily::Flag && config.flag_names.is_none() {
                    if let Some(channel) = config.channel(0) {
                        let groups = extract_marker_groups(&working, channel);
                        state.annotations.extend(marker_annotations(
                            &groups,
                            composer.primary_axis(slot),
                            max_depth,
                        ));
                    }
                }
            }

            track_axes.push(state.axes.keys().skip(axes_before).copied().collect());
        }

        debug!(
            tracks = self.sequence.len(),
            traces = state.traces.len(),
            axes = state.axes.len(),
            "composed figure"
        );

        self.apply_tick_values(&mut state);
        self.apply_header_annotations(&mut state, &domains, &track_axes);

        let mut shapes = separator_shapes(&domains);
        if let Some(interval) = self.depth_grid_interval {
            shapes.extend(depth_grid_shapes(min_depth, max_depth, interval));
        }

        Ok(FigureSpec {
            title: self.title.clone(),
            traces: state.traces,
            axes: state.axes,
            annotations: state.annotations,
            shapes,
            depth_axis: DepthAxis {
                title: "DEPTH (m)".to_owned(),
                range: [max_depth, min_depth],
                domain: [0.0, HEADER_BAND],
                show_grid: self.depth_grid_interval.is_none(),
                show_spikes: true,
            },
        })
    }

    /// Precomputes the normalized columns every normalized-crossover track
    /// in the sequence depends on.
    fn prepare_rows(&self, rows: &[LogRow]) -> Vec<LogRow> {
        let mut working = rows.to_vec();
        for key in &self.sequence {
            let Some(config) = self.registry.track(key) else {
                continue;
            };
            if config.family != TrackFamily::NormalizedCrossover {
                continue;
            }
            let (Some(channel_a), Some(channel_b)) = (config.channel(0), config.channel(1)) else {
                warn!(key = %key, "normalized crossover track is missing its raw channels");
                continue;
            };
            working = normalize_crossover(&working, channel_a, channel_b, self.registry);
        }
        working
    }

    /// Tick values for every numeric track's primary axis: five evenly
    /// spaced ticks on linear axes, decade sub-ticks on log axes.
    fn apply_tick_values(&self, state: &mut CompositionState) {
        for (index, key) in self.sequence.iter().enumerate() {
            let Some(config) = self.registry.track(key) else {
                continue;
            };
            if !family_has_numeric_header(config.family) {
                continue;
            }
            let Some(range) = config.range(0) else {
                continue;
            };

            let ticks = if config.log_scale {
                log_decade_ticks(range[0].min(range[1]), range[0].max(range[1]))
            } else {
                linspace(range[0], range[1], 5)
            };
            if let Some(entry) = state.axes.get_mut(&AxisId(index as u32 + 1)) {
                entry.tick_values = Some(ticks);
                entry.show_grid = true;
            }
        }
    }

    /// Header-band annotations: the rotated depth label, then per visible
    /// axis of each track its channel name, unit, and range edges, stacked
    /// upward inside the band.
    fn apply_header_annotations(
        &self,
        state: &mut CompositionState,
        domains: &[[f64; 2]],
        track_axes: &[Vec<AxisId>],
    ) {
        state.annotations.push(
            Annotation::new("DEPTH (m)", -0.01, 0.9)
                .with_font(12.0, "black")
                .with_anchors(Anchor::Right, Anchor::Top)
                .with_angle(-90.0),
        );

        for (index, key) in self.sequence.iter().enumerate() {
            let Some(config) = self.registry.track(key) else {
                continue;
            };
            let Some(domain) = domains.get(index) else {
                continue;
            };
            let center = (domain[0] + domain[1]) / 2.0;
            let mut level = 0usize;

            for axis_id in &track_axes[index] {
                let visible = state
                    .axes
                    .get(axis_id)
                    .is_some_and(|entry| entry.visible);
                if !visible {
                    continue;
                }

                let color = config.color(level).unwrap_or("black").to_owned();
                let position = 0.85 + level as f64 * 0.04;
                if let Some(entry) = state.axes.get_mut(axis_id) {
                    entry.line_color = Some(color.clone());
                }

                if let Some(channel) = config.channel(level) {
                    state.annotations.push(
                        Annotation::new(channel, center, position)
                            .bold()
                            .with_font(12.0, color.clone())
                            .with_anchors(Anchor::Center, Anchor::Bottom),
                    );
                }
                if let Some(unit) = config.unit(level).filter(|unit| !unit.is_empty()) {
                    state.annotations.push(
                        Annotation::new(unit, center, position - 0.04)
                            .with_font(10.0, color.clone())
                            .with_anchors(Anchor::Center, Anchor::Bottom),
                    );
                }
                if family_has_numeric_header(config.family) {
                    if let Some(range) = config.range(level) {
                        state.annotations.push(
                            Annotation::new(range[0].to_string(), domain[0], position)
                                .with_font(10.0, color.clone())
                                .with_anchors(Anchor::Left, Anchor::Middle),
                        );
                        state.annotations.push(
                            Annotation::new(range[1].to_string(), domain[1], position)
                                .with_font(10.0, color)
                                .with_anchors(Anchor::Right, Anchor::Middle),
                        );
                    }
                }
                level += 1;
            }
        }
    }
}

fn family_has_numeric_header(family: TrackFamily) -> bool {
    !matches!(
        family,
        TrackFamily::Flag | TrackFamily::PointMarker | TrackFamily::TextLabels
    )
}

fn depth_extrema(rows: &[LogRow]) -> (f64, f64) {
    let min = rows
        .iter()
        .map(|row| row.depth)
        .min_by_key(|depth| OrderedFloat(*depth))
        .unwrap_or(0.0);
    let max = rows
        .iter()
        .map(|row| row.depth)
        .max_by_key(|depth| OrderedFloat(*depth))
        .unwrap_or(0.0);
    (min, max)
}

/// Track separators and header band lines, all in paper coordinates.
fn separator_shapes(domains: &[[f64; 2]]) -> Vec<ShapeLine> {
    let mut shapes = Vec::with_capacity(domains.len() + 4);
    for domain in domains {
        shapes.push(ShapeLine::separator([domain[0], domain[0]], [0.0, 1.0]));
    }
    shapes.push(ShapeLine::separator([1.0, 1.0], [0.0, 1.0]));
    shapes.push(ShapeLine::separator([0.0, 1.0], [0.0, 0.0]));
    shapes.push(ShapeLine::separator([0.0, 1.0], [HEADER_BAND, HEADER_BAND]));
    shapes.push(ShapeLine::separator([0.0, 1.0], [1.0, 1.0]));
    shapes
}

fn depth_grid_shapes(min_depth: f64, max_depth: f64, interval: f64) -> Vec<ShapeLine> {
    if !interval.is_finite() || interval <= 0.0 {
        warn!(interval, "depth grid interval must be positive, skipping grid");
        return Vec::new();
    }
    let mut shapes = Vec::new();
    let mut depth = (min_depth / interval).ceil() * interval;
    while depth < max_depth {
        shapes.push(ShapeLine::depth_grid(depth));
        depth += interval;
    }
    shapes
}

/// Evenly spaced values from `start` to `stop` inclusive; `start` may be
/// greater than `stop` for inverted ranges.
fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            (0..count).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Decade sub-ticks `j * 10^i` covering `[min, max]`, for log axes.
fn log_decade_ticks(min: f64, max: f64) -> Vec<f64> {
    if min <= 0.0 || max <= min {
        return Vec::new();
    }
    let mut ticks = Vec::new();
    let lowest = min.log10().floor() as i32;
    let highest = max.log10().ceil() as i32;
    for exponent in lowest..highest {
        for mantissa in 1..10 {
            let value = f64::from(mantissa) * 10f64.powi(exponent);
            if value >= min && value <= max {
                ticks.push(value);
            }
        }
    }
    ticks
}
