use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Conventional LAS null sentinel; parsers that do not scrub it can use
/// [`drop_sentinel_rows`] before composing.
pub const NULL_SENTINEL: f64 = -999.25;

/// One measured value in a log column.
///
/// Untagged serialization keeps rows interchangeable with the JSON the
/// upstream parsing service emits: numbers stay numbers, categorical values
/// stay strings, and absent measurements are `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelValue {
    Number(f64),
    Text(String),
    Null,
}

impl ChannelValue {
    /// Numeric view of the value; `Text` and `Null` read as `None`.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) | Self::Null => None,
        }
    }

    /// Numeric view restricted to finite values, which is what every
    /// comparison and interpolation in this crate operates on.
    #[must_use]
    pub fn as_finite(&self) -> Option<f64> {
        self.as_number().filter(|value| value.is_finite())
    }

    /// Categorical view of the value, used by the encoder and the marker
    /// extraction. Empty and whitespace-only strings read as `None`, finite
    /// numbers are formatted so mixed-typed flag columns stay encodable.
    #[must_use]
    pub fn as_category(&self) -> Option<String> {
        match self {
            Self::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_owned())
            }
            Self::Number(value) if value.is_finite() => Some(format!("{value}")),
            Self::Number(_) | Self::Null => None,
        }
    }
}

impl From<f64> for ChannelValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ChannelValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// One depth-indexed measurement record.
///
/// Rows are ordered by depth ascending by the upstream data service; this
/// crate preserves that order end-to-end because segmentation depends on
/// adjacency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRow {
    pub depth: f64,
    #[serde(default)]
    pub channels: IndexMap<String, ChannelValue>,
}

impl LogRow {
    #[must_use]
    pub fn new(depth: f64) -> Self {
        Self {
            depth,
            channels: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_channel(mut self, name: impl Into<String>, value: impl Into<ChannelValue>) -> Self {
        self.channels.insert(name.into(), value.into());
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ChannelValue>) {
        self.channels.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ChannelValue> {
        self.channels.get(name)
    }

    /// Numeric value of a channel; missing channels, text, and `Null` all
    /// read as `None` so traces carry explicit gaps instead of zeros.
    #[must_use]
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(ChannelValue::as_number)
    }

    /// Finite numeric value of a channel, the form comparisons consume.
    #[must_use]
    pub fn finite(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(ChannelValue::as_finite)
    }

    #[must_use]
    pub fn category(&self, name: &str) -> Option<String> {
        self.get(name).and_then(ChannelValue::as_category)
    }
}

/// Drops rows where any of the given channels still carries the LAS null
/// sentinel. Row order is preserved.
#[must_use]
pub fn drop_sentinel_rows(rows: &[LogRow], channels: &[&str]) -> Vec<LogRow> {
    rows.iter()
        .filter(|row| {
            channels
                .iter()
                .all(|channel| row.number(channel) != Some(NULL_SENTINEL))
        })
        .cloned()
        .collect()
}
