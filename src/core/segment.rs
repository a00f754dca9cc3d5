use tracing::warn;

use crate::config::{ConfigRegistry, TrackConfig, TrackFamily};
use crate::core::types::LogRow;

/// A maximal contiguous run of rows sharing one crossover label.
///
/// Segments borrow from the labeled row slice, partition it exactly, and
/// preserve depth order; concatenating them reproduces the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<'a> {
    pub positive: bool,
    pub rows: &'a [LogRow],
}

/// Run-length groups rows by a caller-supplied labeling predicate in a
/// single linear pass.
pub fn segment_by<'a, F>(rows: &'a [LogRow], predicate: F) -> Vec<Segment<'a>>
where
    F: Fn(&LogRow) -> bool,
{
    let mut segments = Vec::new();
    if rows.is_empty() {
        return segments;
    }

    let mut start = 0;
    let mut current = predicate(&rows[0]);
    for (index, row) in rows.iter().enumerate().skip(1) {
        let label = predicate(row);
        if label != current {
            segments.push(Segment {
                positive: current,
                rows: &rows[start..index],
            });
            start = index;
            current = label;
        }
    }
    segments.push(Segment {
        positive: current,
        rows: &rows[start..],
    });
    segments
}

/// Labels rows by the crossover rule configured for `key` and groups them
/// into contiguous segments. With `only_positive` set, negative segments
/// are dropped (order preserved).
///
/// A missing track configuration labels every row negative and warns
/// instead of failing, so one misconfigured track cannot abort a figure.
pub fn segment<'a>(
    rows: &'a [LogRow],
    key: &str,
    registry: &ConfigRegistry,
    only_positive: bool,
) -> Vec<Segment<'a>> {
    let mut segments = match registry.track(key) {
        Some(config) => segment_by(rows, |row| row_is_positive(row, config)),
        None => {
            warn!(key, "no track configuration for crossover labeling, all rows labeled negative");
            segment_by(rows, |_| false)
        }
    };

    if only_positive {
        segments.retain(|segment| segment.positive);
    }
    segments
}

/// Crossover labeling rule, dispatched on the track family:
/// threshold families compare their single channel against the configured
/// scalar, normalized families compare the precomputed normalized pair, and
/// every other family compares the two raw channels. Missing or non-finite
/// values fail the comparison, so gaps always label negative.
fn row_is_positive(row: &LogRow, config: &TrackConfig) -> bool {
    match config.family {
        TrackFamily::ThresholdCrossover => {
            let Some(threshold) = config.threshold else {
                return false;
            };
            config
                .channel(0)
                .and_then(|channel| row.finite(channel))
                .is_some_and(|value| value > threshold)
        }
        TrackFamily::NormalizedCrossover => channels_cross(row, config, 2, 3),
        _ => channels_cross(row, config, 0, 1),
    }
}

fn channels_cross(row: &LogRow, config: &TrackConfig, first: usize, second: usize) -> bool {
    let first = config.channel(first).and_then(|channel| row.finite(channel));
    let second = config
        .channel(second)
        .and_then(|channel| row.finite(channel));
    match (first, second) {
        (Some(a), Some(b)) => a > b,
        _ => false,
    }
}

/// Fill color for a segment: positive segments take the highlight color,
/// negative segments the fallback.
#[must_use]
pub fn fill_color(positive: bool, positive_color: &str, negative_color: &str) -> String {
    if positive {
        positive_color.to_owned()
    } else {
        negative_color.to_owned()
    }
}
