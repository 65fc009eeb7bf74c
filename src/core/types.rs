use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::magnitude::Dimension;
use crate::error::{ChartError, ChartResult};

/// Named-field payload of a data value.
///
/// `mid` is the plain magnitude of single-dimension values. `y` and `z` mark a
/// dual-dimension bubble where `z` drives the bubble size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NamedFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl NamedFields {
    #[must_use]
    pub fn mid(mid: f64) -> Self {
        Self {
            mid: Some(mid),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn yz(y: f64, z: f64) -> Self {
        Self {
            y: Some(y),
            z: Some(z),
            ..Self::default()
        }
    }
}

/// Raw value carried by a rendered datum.
///
/// Deserializes from the three JSON shapes hosts feed in: a bare number,
/// an object with named fields, or a positional array (`[y, z]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BubbleValue {
    Scalar(f64),
    Sequence(SmallVec<[f64; 2]>),
    Fields(NamedFields),
}

impl BubbleValue {
    #[must_use]
    pub fn pair(y: f64, z: f64) -> Self {
        Self::Sequence(SmallVec::from_buf([y, z]))
    }

    #[must_use]
    pub fn sequence(values: &[f64]) -> Self {
        Self::Sequence(SmallVec::from_slice(values))
    }
}

impl From<f64> for BubbleValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<NamedFields> for BubbleValue {
    fn from(fields: NamedFields) -> Self {
        Self::Fields(fields)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(default)]
    pub series_id: String,
    pub x: f64,
    pub value: BubbleValue,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, value: impl Into<BubbleValue>) -> Self {
        Self {
            series_id: String::new(),
            x,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn with_series(mut self, series_id: impl Into<String>) -> Self {
        self.series_id = series_id.into();
        self
    }

    /// Builds a single-dimension point from a decimal magnitude.
    pub fn from_decimal(x: f64, value: Decimal) -> ChartResult<Self> {
        let value = value.to_f64().ok_or_else(|| {
            ChartError::InvalidData("bubble value cannot be represented as f64".to_owned())
        })?;
        Ok(Self::new(x, value))
    }

    /// Builds a dual-dimension point whose bubble size follows `z`.
    pub fn from_decimal_yz(x: f64, y: Decimal, z: Decimal) -> ChartResult<Self> {
        let y = decimal_dimension(y, Dimension::Y)?;
        let z = decimal_dimension(z, Dimension::Z)?;
        Ok(Self::new(x, NamedFields::yz(y, z)))
    }
}

fn decimal_dimension(value: Decimal, dimension: Dimension) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!(
            "bubble `{}` dimension cannot be represented as f64",
            dimension.name()
        ))
    })
}
