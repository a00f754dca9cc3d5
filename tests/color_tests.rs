use rand::SeedableRng;
use rand::rngs::StdRng;
use wellplot_rs::core::color::{Rgb, discrete_colorscale, pick_distinct_color};

fn min_distance(candidate: Rgb, existing: &[Rgb]) -> f64 {
    existing
        .iter()
        .map(|color| candidate.distance(*color))
        .fold(f64::INFINITY, f64::min)
}

#[test]
fn maximin_pick_dominates_every_candidate_from_the_same_stream() {
    let existing = vec![Rgb::new(1.0, 0.0, 0.0), Rgb::new(0.0, 0.0, 1.0)];

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let picked = pick_distinct_color(&existing, &mut rng, 0.0);

        // The picker consumes exactly 100 candidates; replaying the stream
        // shows the choice maximizes the minimum distance over all of them.
        let mut replay = StdRng::seed_from_u64(seed);
        let candidates: Vec<Rgb> = (0..100).map(|_| Rgb::random(&mut replay, 0.0)).collect();

        let picked_distance = min_distance(picked, &existing);
        for candidate in &candidates {
            assert!(picked_distance >= min_distance(*candidate, &existing));
        }
        assert!(candidates.contains(&picked));
        assert!(picked_distance > 0.0);
    }
}

#[test]
fn empty_existing_set_returns_the_first_sample() {
    let mut rng = StdRng::seed_from_u64(3);
    let picked = pick_distinct_color(&[], &mut rng, 0.0);

    let mut replay = StdRng::seed_from_u64(3);
    assert_eq!(picked, Rgb::random(&mut replay, 0.0));
}

#[test]
fn colorscale_has_two_points_per_color() {
    let colors: Vec<String> = ["#d9d9d9", "#00bfff", "#ffb6c1"]
        .iter()
        .map(|c| (*c).to_owned())
        .collect();
    let scale = discrete_colorscale(&[0.0, 1.0, 2.0, 3.0], &colors);

    assert_eq!(scale.len(), 2 * colors.len());
    for point in &scale {
        assert!((0.0..=1.0).contains(&point.position));
    }
    for pair in scale.windows(2) {
        assert!(pair[0].position <= pair[1].position);
    }
}

#[test]
fn colorscale_sorts_unordered_boundaries() {
    let colors: Vec<String> = vec!["red".to_owned(), "blue".to_owned()];
    let scale = discrete_colorscale(&[2.0, 0.0, 1.0], &colors);

    let positions: Vec<f64> = scale.iter().map(|point| point.position).collect();
    assert_eq!(positions, vec![0.0, 0.5, 0.5, 1.0]);
}

#[test]
fn degenerate_boundaries_produce_a_flat_scale() {
    let colors: Vec<String> = vec!["red".to_owned(), "blue".to_owned()];
    let scale = discrete_colorscale(&[4.0, 4.0, 4.0], &colors);

    assert_eq!(scale.len(), 2);
    assert!(scale.iter().all(|point| point.position == 0.0));
}

#[test]
fn boundary_count_mismatch_is_rejected() {
    let colors: Vec<String> = vec!["red".to_owned()];
    assert!(discrete_colorscale(&[0.0], &colors).is_empty());
    assert!(discrete_colorscale(&[0.0, 1.0, 2.0], &colors).is_empty());
}
