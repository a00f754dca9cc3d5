use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::types::LogRow;

/// One categorical group of rows, reduced to its mean depth. Used to place
/// formation-top labels and similar per-group annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerGroup {
    pub label: String,
    pub mean_depth: f64,
}

/// Groups a categorical column and computes the mean depth per group.
/// Null/empty cells are skipped; groups come back in first-seen order.
#[must_use]
pub fn extract_marker_groups(rows: &[LogRow], column: &str) -> Vec<MarkerGroup> {
    let mut groups: IndexMap<String, (f64, usize)> = IndexMap::new();
    for row in rows {
        let Some(label) = row.category(column) else {
            continue;
        };
        let entry = groups.entry(label).or_insert((0.0, 0));
        entry.0 += row.depth;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(label, (depth_sum, count))| MarkerGroup {
            label,
            mean_depth: depth_sum / count as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::extract_marker_groups;
    use crate::core::types::LogRow;

    #[test]
    fn groups_average_depth_in_first_seen_order() {
        let rows = vec![
            LogRow::new(100.0).with_channel("MARKER", "TOP-A"),
            LogRow::new(110.0).with_channel("MARKER", "TOP-A"),
            LogRow::new(120.0).with_channel("MARKER", ""),
            LogRow::new(200.0).with_channel("MARKER", "TOP-B"),
        ];

        let groups = extract_marker_groups(&rows, "MARKER");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "TOP-A");
        assert_eq!(groups[0].mean_depth, 105.0);
        assert_eq!(groups[1].label, "TOP-B");
        assert_eq!(groups[1].mean_depth, 200.0);
    }
}
