use std::cell::Cell;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::DataPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesKind {
    Bubble,
    Scatter,
    Line,
}

/// Read-only view of the surrounding chart consumed by bubble radius resolution.
///
/// Implementations own axis geometry and series bookkeeping. The same handle is
/// passed to user-supplied max-radius callbacks.
pub trait BubbleChartSource {
    /// Rendered pixel length of the axis path.
    fn axis_path_length(&self, axis: Axis) -> f64;

    fn is_bubble_series(&self, point: &DataPoint) -> bool;

    /// Every point of the current render pass, across all series.
    fn rendered_points(&self) -> &[DataPoint];

    fn largest_series_point_count(&self) -> usize;
}

/// Headless chart source backed by plain vectors.
///
/// Counts axis measurements so hosts and tests can verify memoization.
#[derive(Debug, Default)]
pub struct InMemoryChartSource {
    x_axis_length: f64,
    y_axis_length: f64,
    series: IndexMap<String, SeriesKind>,
    points: Vec<DataPoint>,
    measurements: Cell<u64>,
}

impl InMemoryChartSource {
    #[must_use]
    pub fn new(x_axis_length: f64, y_axis_length: f64) -> Self {
        Self {
            x_axis_length,
            y_axis_length,
            ..Self::default()
        }
    }

    /// Registers a series and appends its points, tagging them with `series_id`.
    #[must_use]
    pub fn with_series(
        mut self,
        series_id: impl Into<String>,
        kind: SeriesKind,
        points: impl IntoIterator<Item = DataPoint>,
    ) -> Self {
        self.add_series(series_id, kind, points);
        self
    }

    pub fn add_series(
        &mut self,
        series_id: impl Into<String>,
        kind: SeriesKind,
        points: impl IntoIterator<Item = DataPoint>,
    ) {
        let series_id = series_id.into();
        self.series.insert(series_id.clone(), kind);
        self.points.extend(
            points
                .into_iter()
                .map(|point| point.with_series(series_id.clone())),
        );
    }

    pub fn set_axis_lengths(&mut self, x_axis_length: f64, y_axis_length: f64) {
        self.x_axis_length = x_axis_length;
        self.y_axis_length = y_axis_length;
    }

    #[must_use]
    pub fn series_kind(&self, series_id: &str) -> Option<SeriesKind> {
        self.series.get(series_id).copied()
    }

    #[must_use]
    pub fn has_bubble_series(&self) -> bool {
        self.series.values().any(|kind| *kind == SeriesKind::Bubble)
    }

    /// Number of axis path measurements performed so far.
    #[must_use]
    pub fn measurement_count(&self) -> u64 {
        self.measurements.get()
    }
}

impl BubbleChartSource for InMemoryChartSource {
    fn axis_path_length(&self, axis: Axis) -> f64 {
        self.measurements
            .set(self.measurements.get().saturating_add(1));
        match axis {
            Axis::X => self.x_axis_length,
            Axis::Y => self.y_axis_length,
        }
    }

    fn is_bubble_series(&self, point: &DataPoint) -> bool {
        self.series_kind(&point.series_id) == Some(SeriesKind::Bubble)
    }

    fn rendered_points(&self) -> &[DataPoint] {
        &self.points
    }

    fn largest_series_point_count(&self) -> usize {
        self.series
            .keys()
            .map(|series_id| {
                self.points
                    .iter()
                    .filter(|point| &point.series_id == series_id)
                    .count()
            })
            .max()
            .unwrap_or(0)
    }
}
