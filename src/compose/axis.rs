use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use tracing::warn;

/// Numeric axis identifier, rendered as `x{n}` at the serialization
/// boundary. Primary track axes use `1..=total_tracks`; overlay axes are
/// offset past `total_tracks` so the two ranges can never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AxisId(pub u32);

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

impl Serialize for AxisId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AxisId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.strip_prefix('x')
            .and_then(|digits| digits.parse::<u32>().ok())
            .map(AxisId)
            .ok_or_else(|| de::Error::custom(format!("invalid axis id '{text}'")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisScale {
    Linear,
    Log10,
}

/// Where an axis sits: primary axes own a horizontal slice of the figure,
/// overlay axes stack onto a primary axis with their own value scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "role")]
pub enum AxisPlacement {
    Primary { domain: Option<[f64; 2]> },
    Overlay { anchor: AxisId },
}

/// One named axis of the figure.
///
/// For `Log10` axes the `range` endpoints are stored in log10 units, which
/// is the form the rendering boundary consumes; `tick_values` stay in data
/// units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisEntry {
    pub placement: AxisPlacement,
    pub range: Option<[f64; 2]>,
    pub scale: AxisScale,
    pub visible: bool,
    pub show_grid: bool,
    pub show_tick_labels: bool,
    pub show_zero_line: bool,
    pub tick_values: Option<Vec<f64>>,
    pub line_color: Option<String>,
}

impl AxisEntry {
    #[must_use]
    pub fn primary(domain: Option<[f64; 2]>) -> Self {
        Self {
            placement: AxisPlacement::Primary { domain },
            range: None,
            scale: AxisScale::Linear,
            visible: true,
            show_grid: false,
            show_tick_labels: true,
            show_zero_line: true,
            tick_values: None,
            line_color: None,
        }
    }

    #[must_use]
    pub fn overlay(anchor: AxisId) -> Self {
        Self {
            placement: AxisPlacement::Overlay { anchor },
            ..Self::primary(None)
        }
    }

    #[must_use]
    pub fn with_range(mut self, range: [f64; 2]) -> Self {
        self.range = Some(range);
        self.scale = AxisScale::Linear;
        self
    }

    /// Log-scales the axis, storing the range in log10 units. Non-positive
    /// endpoints cannot be log-scaled; those fall back to a linear range
    /// with a warning.
    #[must_use]
    pub fn with_log_range(mut self, range: [f64; 2]) -> Self {
        if range[0] <= 0.0 || range[1] <= 0.0 {
            warn!(
                start = range[0],
                end = range[1],
                "cannot log-scale a range with non-positive endpoints, keeping linear"
            );
            return self.with_range(range);
        }
        self.range = Some([range[0].log10(), range[1].log10()]);
        self.scale = AxisScale::Log10;
        self
    }

    /// Applies either scaling depending on the track's configuration.
    #[must_use]
    pub fn with_scaled_range(self, range: [f64; 2], log_scale: bool) -> Self {
        if log_scale {
            self.with_log_range(range)
        } else {
            self.with_range(range)
        }
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    #[must_use]
    pub fn without_tick_labels(mut self) -> Self {
        self.show_tick_labels = false;
        self
    }

    #[must_use]
    pub fn without_zero_line(mut self) -> Self {
        self.show_zero_line = false;
        self
    }

    #[must_use]
    pub fn is_overlay(&self) -> bool {
        matches!(self.placement, AxisPlacement::Overlay { .. })
    }

    #[must_use]
    pub fn domain(&self) -> Option<[f64; 2]> {
        match self.placement {
            AxisPlacement::Primary { domain } => domain,
            AxisPlacement::Overlay { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisEntry, AxisId, AxisScale};

    #[test]
    fn axis_id_round_trips_through_its_string_form() {
        let id = AxisId(7);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"x7\"");
        let back: AxisId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn log_range_is_stored_in_log_units() {
        let entry = AxisEntry::primary(None).with_log_range([0.02, 2000.0]);
        assert_eq!(entry.scale, AxisScale::Log10);
        let range = entry.range.expect("range set");
        assert!((range[0] - 0.02f64.log10()).abs() < 1e-12);
        assert!((range[1] - 2000.0f64.log10()).abs() < 1e-12);
    }

    #[test]
    fn non_positive_log_range_falls_back_to_linear() {
        let entry = AxisEntry::primary(None).with_log_range([0.0, 10.0]);
        assert_eq!(entry.scale, AxisScale::Linear);
        assert_eq!(entry.range, Some([0.0, 10.0]));
    }
}
