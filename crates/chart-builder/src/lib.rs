//! Chart construction for ocean data slices.
//!
//! Builds serializable chart descriptions — the data, axes and labels a
//! plotting front-end needs — rather than pixels. Each chart style lives in
//! its own module:
//! - heatmap (spatial map, plus the two-panel comparison)
//! - line (spatial mean over time)
//! - stats (min/average/max bars)
//! - surface (3-D view of the latest plane)
//! - contour (latest plane plus evenly spaced levels)

pub mod contour;
pub mod heatmap;
pub mod line;
pub mod stats;
pub mod surface;

use serde::Serialize;
use thiserror::Error;

pub use contour::{contour_chart, ContourChart};
pub use heatmap::{comparison_chart, heatmap_chart, ComparisonChart, HeatmapChart};
pub use line::{line_chart, LineChart};
pub use stats::{stats_chart, StatsChart};
pub use surface::{surface_chart, SurfaceChart};

/// An opaque renderable chart description.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Chart {
    Heatmap(HeatmapChart),
    Line(LineChart),
    Stats(StatsChart),
    Surface(SurfaceChart),
    Contour(ContourChart),
    Comparison(ComparisonChart),
}

impl Chart {
    /// The chart's display title.
    pub fn title(&self) -> &str {
        match self {
            Self::Heatmap(c) => &c.title,
            Self::Line(c) => &c.title,
            Self::Stats(c) => &c.title,
            Self::Surface(c) => &c.title,
            Self::Contour(c) => &c.title,
            Self::Comparison(c) => &c.title,
        }
    }
}

/// Errors while building a chart.
#[derive(Error, Debug)]
pub enum ChartError {
    /// The slice has no defined cells to plot.
    #[error("no defined data to chart: {0}")]
    EmptySlice(String),
}

/// Result type for chart construction.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Reshape a row-major plane into per-latitude rows.
pub(crate) fn plane_rows(plane: &[f32], nlat: usize, nlon: usize) -> Vec<Vec<f32>> {
    (0..nlat)
        .map(|j| plane[j * nlon..(j + 1) * nlon].to_vec())
        .collect()
}
