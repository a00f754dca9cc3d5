use serde::{Deserialize, Serialize};

use crate::compose::axis::AxisId;
use crate::core::color::ColorscalePoint;
use crate::core::types::LogRow;

/// Default curve line width, matching the deployed viewer styling.
pub const LINE_WIDTH: f64 = 0.9;

/// Fully transparent color used for boundary traces and hidden lines.
pub const TRANSPARENT: &str = "rgba(0,0,0,0)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashStyle {
    Solid,
    Dash,
    Dot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
    pub dash: DashStyle,
}

impl LineStyle {
    #[must_use]
    pub fn solid(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            width: LINE_WIDTH,
            dash: DashStyle::Solid,
        }
    }

    #[must_use]
    pub fn with_dash(mut self, dash: DashStyle) -> Self {
        self.dash = dash;
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn invisible() -> Self {
        Self {
            color: TRANSPARENT.to_owned(),
            width: 0.0,
            dash: DashStyle::Solid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// Fill toward the previously appended trace.
    ToNext,
    /// Fill toward the zero line of the axis.
    ToZero,
}

/// Geometry of a single renderable series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TraceGeometry {
    Line,
    FilledArea {
        fill: FillMode,
        fill_color: Option<String>,
    },
    Heatmap {
        z: Vec<Vec<Option<f64>>>,
        z_min: f64,
        z_max: f64,
        colorscale: Vec<ColorscalePoint>,
        hover_text: Vec<String>,
    },
    Markers {
        symbol: String,
        size: f64,
        outline_width: f64,
    },
}

/// One renderable series bound to a track axis. Descriptors are immutable
/// once appended; composers only ever push new ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceDescriptor {
    pub name: String,
    pub geometry: TraceGeometry,
    /// Per-row values; `None` marks a gap the renderer must not bridge.
    pub x: Vec<Option<f64>>,
    pub y: Vec<f64>,
    pub line: LineStyle,
    pub x_axis: AxisId,
    pub legend_group: Option<String>,
    pub show_legend: bool,
    pub show_hover: bool,
}

impl TraceDescriptor {
    /// Visible curve with legend and hover enabled.
    #[must_use]
    pub fn curve(
        name: impl Into<String>,
        x: Vec<Option<f64>>,
        y: Vec<f64>,
        line: LineStyle,
        x_axis: AxisId,
        legend_group: String,
    ) -> Self {
        Self {
            name: name.into(),
            geometry: TraceGeometry::Line,
            x,
            y,
            line,
            x_axis,
            legend_group: Some(legend_group),
            show_legend: true,
            show_hover: true,
        }
    }

    /// Invisible trace used as the near edge of a fill pair or to pin an
    /// axis into existence.
    #[must_use]
    pub fn boundary(x: Vec<Option<f64>>, y: Vec<f64>, x_axis: AxisId) -> Self {
        Self {
            name: String::new(),
            geometry: TraceGeometry::Line,
            x,
            y,
            line: LineStyle::invisible(),
            x_axis,
            legend_group: None,
            show_legend: false,
            show_hover: false,
        }
    }

    #[must_use]
    pub fn heatmap(
        name: impl Into<String>,
        z: Vec<Vec<Option<f64>>>,
        y: Vec<f64>,
        colorscale: Vec<ColorscalePoint>,
        hover_text: Vec<String>,
        x_axis: AxisId,
    ) -> Self {
        Self {
            name: name.into(),
            geometry: TraceGeometry::Heatmap {
                z,
                z_min: 0.0,
                z_max: 1.0,
                colorscale,
                hover_text,
            },
            x: Vec::new(),
            y,
            line: LineStyle::invisible(),
            x_axis,
            legend_group: None,
            show_legend: false,
            show_hover: true,
        }
    }

    #[must_use]
    pub fn markers(
        name: impl Into<String>,
        x: Vec<Option<f64>>,
        y: Vec<f64>,
        color: impl Into<String>,
        x_axis: AxisId,
    ) -> Self {
        Self {
            name: name.into(),
            geometry: TraceGeometry::Markers {
                symbol: "circle-open".to_owned(),
                size: 8.0,
                outline_width: 1.5,
            },
            x,
            y,
            line: LineStyle::solid(color),
            x_axis,
            legend_group: None,
            show_legend: true,
            show_hover: true,
        }
    }

    #[must_use]
    pub fn with_fill(mut self, fill: FillMode, fill_color: Option<String>) -> Self {
        self.geometry = TraceGeometry::FilledArea { fill, fill_color };
        self
    }

    #[must_use]
    pub fn without_legend(mut self) -> Self {
        self.show_legend = false;
        self
    }
}

/// Legend group shared by every trace of one track.
#[must_use]
pub(crate) fn legend_group(track_index: usize) -> String {
    format!("legend{track_index}")
}

/// Per-row values of one channel, with explicit gaps for missing cells.
#[must_use]
pub(crate) fn channel_x(rows: &[LogRow], channel: &str) -> Vec<Option<f64>> {
    rows.iter().map(|row| row.number(channel)).collect()
}

/// One constant value per row, used for threshold and boundary lines.
#[must_use]
pub(crate) fn constant_x(rows: &[LogRow], value: f64) -> Vec<Option<f64>> {
    vec![Some(value); rows.len()]
}

#[must_use]
pub(crate) fn depth_y(rows: &[LogRow]) -> Vec<f64> {
    rows.iter().map(|row| row.depth).collect()
}
