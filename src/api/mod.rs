mod bubble_config;
mod chart_source;
mod engine;
mod render_cache;

pub use bubble_config::{
    BUBBLE_POINT_SENSITIVITY_PX, BubbleConfig, MaxRadiusFn, PointConfig, PointShape,
    apply_bubble_point_defaults,
};
pub use chart_source::{Axis, BubbleChartSource, InMemoryChartSource, SeriesKind};
pub use engine::BubbleRadiusEngine;
pub use render_cache::{RenderCacheKey, RenderCacheStats};
