use chart_bubble::api::{
    BubbleChartSource, BubbleConfig, BubbleRadiusEngine, InMemoryChartSource, SeriesKind,
};
use chart_bubble::core::{BubbleValue, DataPoint, area_proportional_radius, default_max_radius};
use proptest::prelude::*;

fn bubble_engine(
    values: &[(f64, f64)],
    max_radius: f64,
) -> BubbleRadiusEngine<InMemoryChartSource> {
    let points = values
        .iter()
        .enumerate()
        .map(|(i, (y, z))| DataPoint::new(i as f64, BubbleValue::pair(*y, *z)));
    let source =
        InMemoryChartSource::new(600.0, 400.0).with_series("bubbles", SeriesKind::Bubble, points);
    BubbleRadiusEngine::new(source, BubbleConfig::default().with_max_radius(max_radius))
        .expect("engine init")
}

proptest! {
    #[test]
    fn radius_squared_ratio_matches_magnitude_ratio(
        m1 in 0.01f64..10_000.0,
        m2 in 0.01f64..10_000.0,
        dataset_max in 10_000.0f64..20_000.0,
        max_radius in 1.0f64..200.0
    ) {
        let r1 = area_proportional_radius(m1, dataset_max, max_radius);
        let r2 = area_proportional_radius(m2, dataset_max, max_radius);
        prop_assert!(r1 > 0.0 && r2 > 0.0);
        let ratio = (r1 * r1) / (r2 * r2);
        prop_assert!((ratio - m1 / m2).abs() <= 1e-9 * (m1 / m2).max(1.0));
    }

    #[test]
    fn radius_is_non_negative_and_bounded_by_max(
        values in prop::collection::vec((-50.0f64..50.0, 0.0f64..1_000.0), 1..32),
        max_radius in 1.0f64..100.0
    ) {
        prop_assume!(values.iter().any(|(_, z)| *z > 0.0));
        let engine = bubble_engine(&values, max_radius);
        for radius in engine.rendered_radii() {
            let radius = radius.expect("bubble point");
            prop_assert!(radius >= 0.0);
            prop_assert!(radius <= max_radius + 1e-9);
        }
    }

    #[test]
    fn dataset_max_point_lands_on_max_radius(
        values in prop::collection::vec((-50.0f64..50.0, 0.1f64..1_000.0), 1..32),
        max_radius in 1.0f64..100.0
    ) {
        let engine = bubble_engine(&values, max_radius);
        let points = engine.source().rendered_points().to_vec();
        let (index, _) = values
            .iter()
            .enumerate()
            .fold((0, f64::MIN), |best, (i, (_, z))| if *z > best.1 { (i, *z) } else { best });

        let radius = engine.radius_for(&points[index]);
        prop_assert!((radius - max_radius).abs() <= 1e-9 * max_radius);
    }

    #[test]
    fn default_max_radius_never_drops_below_padding(
        base_length in 0.0f64..5_000.0,
        count in 0usize..10_000
    ) {
        let max_radius = default_max_radius(base_length, count);
        prop_assert!(max_radius >= 12.0);
        prop_assert!(max_radius.is_finite());
    }
}
