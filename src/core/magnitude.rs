use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::types::{BubbleValue, DataPoint};

/// Dimension selector for dual-dimension bubble values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Y,
    Z,
}

impl Dimension {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

/// Magnitude shape resolved once per point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedMagnitude {
    /// Bubble point carrying a separate size dimension.
    Dimensional { y: Option<f64>, z: Option<f64> },
    /// Plain value. `None` when the raw shape has no usable scalar.
    Single(Option<f64>),
}

impl ResolvedMagnitude {
    /// Scalar the bubble area is proportional to.
    #[must_use]
    pub fn magnitude(self) -> Option<f64> {
        match self {
            Self::Dimensional { z, .. } => z,
            Self::Single(value) => value,
        }
    }

    #[must_use]
    pub fn has_z_dimension(self) -> bool {
        matches!(self, Self::Dimensional { .. })
    }
}

/// Returns whether `value` has the dual-dimension shape (`{y, z}` fields or a `[y, z]` pair).
#[must_use]
pub fn is_dimensional_shape(value: &BubbleValue) -> bool {
    match value {
        BubbleValue::Fields(fields) => fields.y.is_some() || fields.z.is_some(),
        BubbleValue::Sequence(values) => values.len() == 2,
        BubbleValue::Scalar(_) => false,
    }
}

/// Returns `true` only for bubble-series points with a dual-dimension value.
#[must_use]
pub fn has_z_dimension(point: &DataPoint, is_bubble_series: bool) -> bool {
    is_bubble_series && is_dimensional_shape(&point.value)
}

/// Reads one dimension of a dual-dimension value.
///
/// Named fields are looked up by name; sequences are positional (`y` at 0, `z` at 1).
/// Scalars and absent fields yield `None`.
#[must_use]
pub fn extract_magnitude(value: &BubbleValue, dimension: Dimension) -> Option<f64> {
    match value {
        BubbleValue::Fields(fields) => match dimension {
            Dimension::Y => fields.y,
            Dimension::Z => fields.z,
        },
        BubbleValue::Sequence(values) => {
            let index = match dimension {
                Dimension::Y => 0,
                Dimension::Z => 1,
            };
            values.get(index).copied()
        }
        BubbleValue::Scalar(_) => None,
    }
}

/// Classifies a point and extracts both dimensions in one pass.
#[must_use]
pub fn resolve_magnitude(point: &DataPoint, is_bubble_series: bool) -> ResolvedMagnitude {
    if has_z_dimension(point, is_bubble_series) {
        return ResolvedMagnitude::Dimensional {
            y: extract_magnitude(&point.value, Dimension::Y),
            z: extract_magnitude(&point.value, Dimension::Z),
        };
    }

    let single = match &point.value {
        BubbleValue::Scalar(value) => Some(*value),
        BubbleValue::Fields(fields) => fields.mid,
        BubbleValue::Sequence(_) => None,
    };
    ResolvedMagnitude::Single(single)
}

/// Largest finite magnitude among `magnitudes`, `None` when there is none.
#[must_use]
pub fn max_magnitude<I>(magnitudes: I) -> Option<f64>
where
    I: IntoIterator<Item = ResolvedMagnitude>,
{
    magnitudes
        .into_iter()
        .filter_map(ResolvedMagnitude::magnitude)
        .filter(|value| value.is_finite())
        .map(OrderedFloat)
        .max()
        .map(OrderedFloat::into_inner)
}
