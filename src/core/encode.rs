use indexmap::IndexMap;

use crate::core::types::{ChannelValue, LogRow};

/// Replaces a categorical column with stable small integer codes.
///
/// Codes are assigned in first-seen order starting at 1; code 0 is reserved
/// for null/empty cells and is never assigned to a real value. Returns the
/// encoded rows plus the code-to-label reverse lookup used for hover text
/// and legends. Re-encoding the same column always yields the same codes.
#[must_use]
pub fn encode_with_null(rows: &[LogRow], column: &str) -> (Vec<LogRow>, IndexMap<u32, String>) {
    let mut codes: IndexMap<String, u32> = IndexMap::new();
    let mut labels: IndexMap<u32, String> = IndexMap::new();
    labels.insert(0, String::new());

    for row in rows {
        if let Some(label) = row.category(column) {
            let next = codes.len() as u32 + 1;
            let code = *codes.entry(label.clone()).or_insert(next);
            labels.entry(code).or_insert(label);
        }
    }

    let encoded = rows
        .iter()
        .map(|row| {
            let code = row
                .category(column)
                .and_then(|label| codes.get(&label).copied())
                .unwrap_or(0);
            let mut out = row.clone();
            out.set(column, ChannelValue::Number(f64::from(code)));
            out
        })
        .collect();

    (encoded, labels)
}

#[cfg(test)]
mod tests {
    use super::encode_with_null;
    use crate::core::types::LogRow;

    fn marker_rows() -> Vec<LogRow> {
        vec![
            LogRow::new(10.0).with_channel("MARKER", "TOP-A"),
            LogRow::new(11.0).with_channel("MARKER", ""),
            LogRow::new(12.0).with_channel("MARKER", "TOP-B"),
            LogRow::new(13.0).with_channel("MARKER", "TOP-A"),
        ]
    }

    #[test]
    fn codes_follow_first_seen_order() {
        let (encoded, labels) = encode_with_null(&marker_rows(), "MARKER");

        let codes: Vec<f64> = encoded
            .iter()
            .map(|row| row.number("MARKER").unwrap())
            .collect();
        assert_eq!(codes, vec![1.0, 0.0, 2.0, 1.0]);
        assert_eq!(labels.get(&1).map(String::as_str), Some("TOP-A"));
        assert_eq!(labels.get(&2).map(String::as_str), Some("TOP-B"));
        assert_eq!(labels.get(&0).map(String::as_str), Some(""));
    }

    #[test]
    fn re_encoding_is_deterministic() {
        let rows = marker_rows();
        let (first_rows, first_labels) = encode_with_null(&rows, "MARKER");
        let (second_rows, second_labels) = encode_with_null(&rows, "MARKER");

        assert_eq!(first_rows, second_rows);
        assert_eq!(first_labels, second_labels);
    }
}
