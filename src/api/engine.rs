use std::cell::RefCell;

use tracing::{debug, trace, warn};

use crate::core::{
    DataPoint, ResolvedMagnitude, area_proportional_radius, default_max_radius, max_magnitude,
    resolve_magnitude,
};
use crate::error::ChartResult;

use super::bubble_config::validate_max_radius;
use super::render_cache::{RenderCacheKey, RenderCacheStats, RenderPassCache};
use super::{
    Axis, BubbleChartSource, BubbleConfig, MaxRadiusFn, PointConfig, apply_bubble_point_defaults,
};

/// Resolves bubble marker radii for one chart.
///
/// Marker area, not radius, scales linearly with magnitude; the point holding
/// the dataset maximum is drawn at `max_radius`. Axis-derived values are
/// memoized until the next `begin_render_pass`.
pub struct BubbleRadiusEngine<S: BubbleChartSource> {
    source: S,
    config: BubbleConfig,
    max_radius_fn: Option<MaxRadiusFn>,
    cache: RefCell<RenderPassCache>,
}

impl<S: BubbleChartSource> BubbleRadiusEngine<S> {
    pub fn new(source: S, config: BubbleConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            source,
            config,
            max_radius_fn: None,
            cache: RefCell::new(RenderPassCache::default()),
        })
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to chart state. Call `begin_render_pass` before resolving
    /// radii against changed geometry.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    #[must_use]
    pub fn config(&self) -> BubbleConfig {
        self.config
    }

    /// Sets or clears the fixed max radius.
    pub fn set_max_radius(&mut self, max_radius: Option<f64>) -> ChartResult<()> {
        self.config.max_radius = max_radius.map(validate_max_radius).transpose()?;
        Ok(())
    }

    /// Installs a per-point max radius callback. Takes priority over the fixed value.
    pub fn set_max_radius_fn(&mut self, max_radius_fn: Option<MaxRadiusFn>) {
        self.max_radius_fn = max_radius_fn;
    }

    #[must_use]
    pub fn has_max_radius_fn(&self) -> bool {
        self.max_radius_fn.is_some()
    }

    /// Drops every value memoized during the previous render pass.
    pub fn begin_render_pass(&mut self) {
        debug!("begin bubble render pass");
        self.cache.get_mut().clear();
    }

    #[must_use]
    pub fn cache_stats(&self) -> RenderCacheStats {
        self.cache.borrow().stats()
    }

    /// Shorter of the two rendered axis path lengths, measured once per render pass.
    #[must_use]
    pub fn base_length(&self) -> f64 {
        let mut cache = self.cache.borrow_mut();
        if let Some(base_length) = cache.get(RenderCacheKey::BubbleBaseLength) {
            return base_length;
        }

        let x_length = self.source.axis_path_length(Axis::X);
        let y_length = self.source.axis_path_length(Axis::Y);
        let base_length = x_length.min(y_length);
        debug!(
            x_length,
            y_length,
            base_length,
            "measured bubble base length"
        );
        cache.add(RenderCacheKey::BubbleBaseLength, base_length);
        base_length
    }

    /// Ceiling on the radius of `point`.
    ///
    /// Callback first, then the fixed configured value, then
    /// `base_length / (largest_series_point_count * 2) + 12`.
    #[must_use]
    pub fn max_radius(&self, point: &DataPoint) -> f64 {
        if let Some(max_radius_fn) = &self.max_radius_fn {
            let chart: &dyn BubbleChartSource = &self.source;
            return max_radius_fn(chart, point);
        }
        if let Some(max_radius) = self.config.max_radius {
            return max_radius;
        }
        default_max_radius(self.base_length(), self.source.largest_series_point_count())
    }

    fn resolve(&self, point: &DataPoint) -> ResolvedMagnitude {
        resolve_magnitude(point, self.source.is_bubble_series(point))
    }

    /// Largest magnitude across every rendered point, `None` for datasets
    /// without a finite magnitude.
    #[must_use]
    pub fn dataset_max_magnitude(&self) -> Option<f64> {
        max_magnitude(
            self.source
                .rendered_points()
                .iter()
                .map(|point| self.resolve(point)),
        )
    }

    /// Radius for `point` with its circle area proportional to its magnitude.
    ///
    /// Degenerate datasets (no positive maximum) and points without a usable
    /// magnitude resolve to `0.0`.
    #[must_use]
    pub fn radius_for(&self, point: &DataPoint) -> f64 {
        self.radius_against(point, self.dataset_max_magnitude())
    }

    /// Radius of every rendered point, in render order. Non-bubble points map to `None`.
    #[must_use]
    pub fn rendered_radii(&self) -> Vec<Option<f64>> {
        let dataset_max = self.dataset_max_magnitude();
        if !dataset_max.is_some_and(|max| max > 0.0) {
            warn!(
                ?dataset_max,
                "bubble dataset has no positive magnitude; radii collapse to zero"
            );
        }

        self.source
            .rendered_points()
            .iter()
            .map(|point| {
                self.source
                    .is_bubble_series(point)
                    .then(|| self.radius_against(point, dataset_max))
            })
            .collect()
    }

    fn radius_against(&self, point: &DataPoint, dataset_max: Option<f64>) -> f64 {
        let max_radius = self.max_radius(point);
        let magnitude = self.resolve(point).magnitude();
        let radius = match (magnitude, dataset_max) {
            (Some(magnitude), Some(dataset_max)) => {
                area_proportional_radius(magnitude, dataset_max, max_radius)
            }
            _ => 0.0,
        };
        trace!(
            x = point.x,
            ?magnitude,
            ?dataset_max,
            max_radius,
            radius,
            "resolve bubble radius"
        );
        radius
    }

    /// Point-marker options in effect, with bubble defaults forced when a
    /// bubble series is rendered.
    #[must_use]
    pub fn point_config(&self) -> PointConfig {
        let has_bubble_series = self
            .source
            .rendered_points()
            .iter()
            .any(|point| self.source.is_bubble_series(point));
        apply_bubble_point_defaults(self.config.point, has_bubble_series)
    }
}
