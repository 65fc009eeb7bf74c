use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

use super::BubbleChartSource;

/// User-supplied max radius, evaluated per point.
///
/// Receives the chart handle and the point explicitly. The returned value is used as-is.
pub type MaxRadiusFn =
    Arc<dyn Fn(&dyn BubbleChartSource, &DataPoint) -> f64 + Send + Sync + 'static>;

/// Hover sensitivity forced onto point markers when a bubble series is rendered.
pub const BUBBLE_POINT_SENSITIVITY_PX: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointShape {
    Circle,
    Rectangle,
}

/// Point-marker options shared by scatter-like series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointConfig {
    #[serde(default = "default_point_show")]
    pub show: bool,
    #[serde(default = "default_point_shape")]
    pub shape: PointShape,
    #[serde(default = "default_point_sensitivity_px")]
    pub sensitivity_px: f64,
}

impl Default for PointConfig {
    fn default() -> Self {
        Self {
            show: default_point_show(),
            shape: default_point_shape(),
            sensitivity_px: default_point_sensitivity_px(),
        }
    }
}

/// Forces circle markers with bubble hover sensitivity when any bubble series is present.
#[must_use]
pub fn apply_bubble_point_defaults(config: PointConfig, has_bubble_series: bool) -> PointConfig {
    if !has_bubble_series {
        return config;
    }
    PointConfig {
        show: true,
        shape: PointShape::Circle,
        sensitivity_px: BUBBLE_POINT_SENSITIVITY_PX,
    }
}

/// Serializable bubble options.
///
/// `max_radius` of `None` selects the axis-derived heuristic. A per-point
/// callback is attached on the engine since closures do not serialize.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BubbleConfig {
    #[serde(default)]
    pub max_radius: Option<f64>,
    #[serde(default)]
    pub point: PointConfig,
}

impl BubbleConfig {
    #[must_use]
    pub fn with_max_radius(mut self, max_radius: f64) -> Self {
        self.max_radius = Some(max_radius);
        self
    }

    #[must_use]
    pub fn with_point(mut self, point: PointConfig) -> Self {
        self.point = point;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if let Some(max_radius) = self.max_radius {
            validate_max_radius(max_radius)?;
        }
        if !self.point.sensitivity_px.is_finite() || self.point.sensitivity_px < 0.0 {
            return Err(ChartError::InvalidConfig(
                "point `sensitivity_px` must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}

pub(super) fn validate_max_radius(max_radius: f64) -> ChartResult<f64> {
    if !max_radius.is_finite() || max_radius <= 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "bubble `max_radius` must be finite and > 0, got {max_radius}"
        )));
    }
    Ok(max_radius)
}

fn default_point_show() -> bool {
    true
}

fn default_point_shape() -> PointShape {
    PointShape::Circle
}

fn default_point_sensitivity_px() -> f64 {
    10.0
}
