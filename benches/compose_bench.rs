use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;
use wellplot_rs::compose::FigureBuilder;
use wellplot_rs::config::ConfigRegistry;
use wellplot_rs::core::segment::segment;
use wellplot_rs::core::types::LogRow;

fn synthetic_rows(count: usize) -> Vec<LogRow> {
    (0..count)
        .map(|i| {
            let marker = match i * 8 / count {
                0 => "TOP-A",
                1 => "TOP-B",
                2 => "TOP-C",
                _ => "TOP-D",
            };
            LogRow::new(1000.0 + i as f64 * 0.1)
                .with_channel("MARKER", marker)
                .with_channel("GR", 40.0 + (i % 50) as f64)
                .with_channel("RT", if i % 9 < 4 { 120.0 } else { 1.5 })
                .with_channel("RO", 10.0)
                .with_channel("RHOB", 2.2 + (i % 5) as f64 * 0.04)
                .with_channel("NPHI", 0.1 + (i % 7) as f64 * 0.05)
        })
        .collect()
}

fn bench_segment_10k(c: &mut Criterion) {
    let registry = ConfigRegistry::default_logs();
    let rows = synthetic_rows(10_000);

    c.bench_function("segment_rt_ro_10k", |b| {
        b.iter(|| {
            let segments = segment(black_box(&rows), black_box("RT_RO"), &registry, true);
            black_box(segments.len())
        })
    });
}

fn bench_default_figure_2k(c: &mut Criterion) {
    let registry = ConfigRegistry::default_logs();
    let rows = synthetic_rows(2_000);

    c.bench_function("default_figure_2k", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(7);
            let figure = FigureBuilder::new(&registry)
                .with_default_tracks()
                .build(black_box(&rows), &mut rng)
                .expect("figure build");
            black_box(figure.traces.len())
        })
    });
}

criterion_group!(benches, bench_segment_10k, bench_default_figure_2k);
criterion_main!(benches);
