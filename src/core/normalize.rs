use tracing::warn;

use crate::config::ConfigRegistry;
use crate::core::types::{ChannelValue, LogRow};
use crate::error::{PlotError, PlotResult};

/// Linear interpolation from one value range onto another.
///
/// Ranges may be inverted (start greater than end) to mirror an axis; the
/// mapping follows the configured orientation either way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMap {
    from: [f64; 2],
    to: [f64; 2],
}

impl LinearMap {
    pub fn new(from: [f64; 2], to: [f64; 2]) -> PlotResult<Self> {
        let finite = from.iter().chain(to.iter()).all(|value| value.is_finite());
        if !finite || from[0] == from[1] {
            return Err(PlotError::InvalidData(
                "linear map source range must be finite and non-degenerate".to_owned(),
            ));
        }
        Ok(Self { from, to })
    }

    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        self.to[0] + (value - self.from[0]) * (self.to[1] - self.to[0]) / (self.from[1] - self.from[0])
    }
}

/// Rescales `channel_b` onto `channel_a`'s configured display range so the
/// two differently-scaled curves can share a visual axis.
///
/// For each row, `channel_a`'s value is copied into `{A}_NORM` and
/// `channel_b`'s value is interpolated into `{B}_NORM_{A}`. Non-finite and
/// missing inputs produce the null marker, never zero, so downstream
/// consumers can tell a gap from a real value. When the `{A}_{B}` range
/// pair is not configured the input is returned unchanged with a warning.
#[must_use]
pub fn normalize_crossover(
    rows: &[LogRow],
    channel_a: &str,
    channel_b: &str,
    registry: &ConfigRegistry,
) -> Vec<LogRow> {
    let pair_key = format!("{channel_a}_{channel_b}");
    let Some(config) = registry.track(&pair_key) else {
        warn!(key = %pair_key, "no range pair configured, skipping crossover normalization");
        return rows.to_vec();
    };
    let (Some(range_a), Some(range_b)) = (config.range(0), config.range(1)) else {
        warn!(key = %pair_key, "range pair is incomplete, skipping crossover normalization");
        return rows.to_vec();
    };

    let map = match LinearMap::new(range_b, range_a) {
        Ok(map) => Some(map),
        Err(err) => {
            warn!(key = %pair_key, error = %err, "degenerate range pair, normalized values will be null");
            None
        }
    };

    let a_norm = format!("{channel_a}_NORM");
    let b_norm = format!("{channel_b}_NORM_{channel_a}");

    rows.iter()
        .map(|row| {
            let mut out = row.clone();
            out.set(
                a_norm.as_str(),
                row.finite(channel_a)
                    .map_or(ChannelValue::Null, ChannelValue::Number),
            );
            let mapped = map.and_then(|map| row.finite(channel_b).map(|value| map.apply(value)));
            out.set(
                b_norm.as_str(),
                mapped.map_or(ChannelValue::Null, ChannelValue::Number),
            );
            out
        })
        .collect()
}
