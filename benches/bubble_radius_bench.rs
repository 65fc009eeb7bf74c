use chart_bubble::api::{BubbleConfig, BubbleRadiusEngine, InMemoryChartSource, SeriesKind};
use chart_bubble::core::{BubbleValue, DataPoint, area_proportional_radius};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_area_proportional_radius(c: &mut Criterion) {
    c.bench_function("area_proportional_radius", |b| {
        b.iter(|| {
            let _ = area_proportional_radius(black_box(4_321.123), black_box(10_000.0), 24.5);
        })
    });
}

fn bench_rendered_radii_10k(c: &mut Criterion) {
    let points: Vec<DataPoint> = (0..10_000)
        .map(|i| {
            let t = i as f64;
            DataPoint::new(t, BubbleValue::pair(100.0 + t * 0.05, 1.0 + (i % 97) as f64))
        })
        .collect();
    let source =
        InMemoryChartSource::new(1920.0, 1080.0).with_series("bubbles", SeriesKind::Bubble, points);
    let mut engine =
        BubbleRadiusEngine::new(source, BubbleConfig::default()).expect("engine init");

    c.bench_function("rendered_radii_10k", |b| {
        b.iter(|| {
            engine.begin_render_pass();
            let _ = black_box(engine.rendered_radii());
        })
    });
}

criterion_group!(
    benches,
    bench_area_proportional_radius,
    bench_rendered_radii_10k
);
criterion_main!(benches);
