use tracing::warn;

/// Splits the horizontal paper span `[0, 1]` into one `[start, end]` domain
/// per track, proportionally to the given width ratios, with `spacing`
/// paper units between adjacent tracks.
#[must_use]
pub fn track_domains(ratios: &[f64], spacing: f64) -> Vec<[f64; 2]> {
    let count = ratios.len();
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![[0.0, 1.0]];
    }

    let mut total: f64 = ratios.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        warn!(total, "track width ratios do not sum to a positive value, using equal widths");
        total = count as f64;
    }

    let plot_width = 1.0 - (count - 1) as f64 * spacing;
    let mut domains = Vec::with_capacity(count);
    let mut start = 0.0;
    for ratio in ratios {
        let ratio = if ratio.is_finite() && *ratio > 0.0 {
            *ratio
        } else {
            1.0
        };
        let end = start + ratio / total * plot_width;
        domains.push([start, end]);
        start = end + spacing;
    }
    domains
}

#[cfg(test)]
mod tests {
    use super::track_domains;
    use approx::assert_relative_eq;

    #[test]
    fn single_track_spans_full_width() {
        assert_eq!(track_domains(&[3.0], 0.0), vec![[0.0, 1.0]]);
    }

    #[test]
    fn ratios_partition_the_paper_span() {
        let domains = track_domains(&[0.5, 1.0, 1.0, 1.0], 0.0);
        assert_eq!(domains.len(), 4);
        assert_relative_eq!(domains[0][1] - domains[0][0], 1.0 / 7.0);
        assert_relative_eq!(domains[3][1], 1.0);
        for pair in domains.windows(2) {
            assert_relative_eq!(pair[0][1], pair[1][0]);
        }
    }

    #[test]
    fn spacing_separates_adjacent_tracks() {
        let domains = track_domains(&[1.0, 1.0], 0.1);
        assert_relative_eq!(domains[1][0] - domains[0][1], 0.1);
        assert_relative_eq!(domains[1][1], 1.0);
    }
}
