use std::f64::consts::PI;

/// Padding added to the heuristic max radius so dense datasets still get visible bubbles.
pub const DEFAULT_MAX_RADIUS_PADDING_PX: f64 = 12.0;

/// Divisor applied to the largest series point count in the heuristic max radius.
pub const DEFAULT_MAX_RADIUS_DENSITY_DIVISOR: f64 = 2.0;

/// Heuristic ceiling used when no max radius is configured.
///
/// `base_length / (largest_series_point_count * 2) + 12`. An empty chart is
/// treated as a single-point series so the result stays finite.
#[must_use]
pub fn default_max_radius(base_length: f64, largest_series_point_count: usize) -> f64 {
    let count = largest_series_point_count.max(1) as f64;
    base_length / (count * DEFAULT_MAX_RADIUS_DENSITY_DIVISOR) + DEFAULT_MAX_RADIUS_PADDING_PX
}

/// Radius whose circle area is proportional to `magnitude`.
///
/// The dataset maximum maps onto `max_radius`. Degenerate inputs (non-positive or
/// non-finite dataset maximum, negative area, non-finite result) resolve to `0.0`.
#[must_use]
pub fn area_proportional_radius(magnitude: f64, dataset_max: f64, max_radius: f64) -> f64 {
    if !dataset_max.is_finite() || dataset_max <= 0.0 {
        return 0.0;
    }

    let max_area = PI * max_radius * max_radius;
    let area = magnitude * (max_area / dataset_max);
    let radius = (area / PI).sqrt();
    if radius.is_finite() { radius } else { 0.0 }
}

/// Circle area for a radius, used to check proportionality.
#[must_use]
pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}

#[cfg(test)]
mod tests {
    use super::{area_proportional_radius, default_max_radius};

    #[test]
    fn default_max_radius_matches_heuristic() {
        assert_eq!(default_max_radius(100.0, 4), 24.5);
        assert_eq!(default_max_radius(100.0, 0), 62.0);
    }

    #[test]
    fn degenerate_inputs_resolve_to_zero() {
        assert_eq!(area_proportional_radius(5.0, 0.0, 10.0), 0.0);
        assert_eq!(area_proportional_radius(5.0, f64::NAN, 10.0), 0.0);
        assert_eq!(area_proportional_radius(-5.0, 10.0, 10.0), 0.0);
        assert!((area_proportional_radius(10.0, 10.0, 10.0) - 10.0).abs() < 1e-12);
    }
}
