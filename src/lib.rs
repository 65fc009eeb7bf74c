//! chart-bubble: area-proportional bubble radius resolution.
//!
//! Given a chart's rendered axes and data, this crate computes marker radii so
//! that bubble *area* tracks the data magnitude, with optional `{y, z}` values
//! where `z` drives the size independently of the plotted position.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{BubbleConfig, BubbleRadiusEngine};
pub use error::{ChartError, ChartResult};
