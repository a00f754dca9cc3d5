use ordered_float::OrderedFloat;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// RGB color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    #[must_use]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Samples a uniform random color, blended toward white by
    /// `pastel_factor`. A factor of `0.0` keeps the raw sample; larger
    /// factors desaturate.
    pub fn random(rng: &mut impl Rng, pastel_factor: f64) -> Self {
        let blend = |x: f64| (x + pastel_factor) / (1.0 + pastel_factor);
        Self::new(
            blend(rng.random::<f64>()),
            blend(rng.random::<f64>()),
            blend(rng.random::<f64>()),
        )
    }

    /// L1 distance between two colors in the unit cube.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.r - other.r).abs() + (self.g - other.g).abs() + (self.b - other.b).abs()
    }

    /// `#rrggbb` form; channels are scaled to bytes, rounded, and clamped.
    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |channel: f64| (channel * 255.0).round().clamp(0.0, 255.0) as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }
}

/// Number of candidates drawn per [`pick_distinct_color`] call.
const DISTINCT_COLOR_TRIALS: usize = 100;

/// Picks a color maximizing the minimum distance to every existing color
/// (maximin diversity). With no existing colors the first sample wins; ties
/// keep the earliest candidate.
pub fn pick_distinct_color(existing: &[Rgb], rng: &mut impl Rng, pastel_factor: f64) -> Rgb {
    let mut best = Rgb::random(rng, pastel_factor);
    if existing.is_empty() {
        return best;
    }

    let nearest = |candidate: Rgb| {
        existing
            .iter()
            .map(|color| candidate.distance(*color))
            .fold(f64::INFINITY, f64::min)
    };

    let mut best_distance = nearest(best);
    for _ in 1..DISTINCT_COLOR_TRIALS {
        let candidate = Rgb::random(rng, pastel_factor);
        let candidate_distance = nearest(candidate);
        if candidate_distance > best_distance {
            best = candidate;
            best_distance = candidate_distance;
        }
    }
    best
}

/// One control point of a colorscale, positioned in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorscalePoint {
    pub position: f64,
    pub color: String,
}

impl ColorscalePoint {
    #[must_use]
    pub fn new(position: f64, color: impl Into<String>) -> Self {
        Self {
            position,
            color: color.into(),
        }
    }
}

/// Builds a stepped colorscale: each color interval gets two control points
/// so a gradient-based renderer paints sharp category boundaries.
///
/// Requires one more boundary than colors; on mismatch the scale is empty
/// and an error is logged. Boundaries are sorted ascending and min-max
/// normalized; a collapsed boundary range degrades to a flat scale.
#[must_use]
pub fn discrete_colorscale(boundaries: &[f64], colors: &[String]) -> Vec<ColorscalePoint> {
    if boundaries.len() != colors.len() + 1 {
        error!(
            boundaries = boundaries.len(),
            colors = colors.len(),
            "discrete colorscale requires exactly one more boundary than colors"
        );
        return Vec::new();
    }

    let mut sorted = boundaries.to_vec();
    sorted.sort_by_key(|value| OrderedFloat(*value));
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];

    if min == max {
        warn!(value = min, "colorscale boundaries are all equal, using a flat scale");
        return colors
            .iter()
            .map(|color| ColorscalePoint::new(0.0, color.clone()))
            .collect();
    }

    let normalized: Vec<f64> = sorted
        .iter()
        .map(|value| (value - min) / (max - min))
        .collect();

    let mut scale = Vec::with_capacity(colors.len() * 2);
    for (k, color) in colors.iter().enumerate() {
        scale.push(ColorscalePoint::new(normalized[k], color.clone()));
        scale.push(ColorscalePoint::new(normalized[k + 1], color.clone()));
    }
    scale
}

#[cfg(test)]
mod tests {
    use super::{Rgb, discrete_colorscale};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn pastel_factor_bounds_samples() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let color = Rgb::random(&mut rng, 0.7);
            let floor = 0.7 / 1.7;
            assert!(color.r >= floor && color.r <= 1.0);
            assert!(color.g >= floor && color.g <= 1.0);
            assert!(color.b >= floor && color.b <= 1.0);
        }
    }

    #[test]
    fn hex_clamps_out_of_range_channels() {
        assert_eq!(Rgb::new(1.2, -0.1, 0.5).to_hex(), "#ff0080");
    }

    #[test]
    fn colorscale_mismatch_is_empty() {
        let colors = vec!["red".to_owned(), "blue".to_owned()];
        assert!(discrete_colorscale(&[0.0, 1.0], &colors).is_empty());
    }

    #[test]
    fn colorscale_steps_match_expected_layout() {
        let colors = vec!["red".to_owned(), "blue".to_owned()];
        let scale = discrete_colorscale(&[0.0, 1.0, 2.0], &colors);
        let flattened: Vec<(f64, &str)> = scale
            .iter()
            .map(|point| (point.position, point.color.as_str()))
            .collect();
        assert_eq!(
            flattened,
            vec![(0.0, "red"), (0.5, "red"), (0.5, "blue"), (1.0, "blue")]
        );
    }
}
