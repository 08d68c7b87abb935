//! Trend line charts.

use chrono::{DateTime, Utc};
use serde::Serialize;

use ocean_grid::GridSlice;

use crate::{Chart, ChartError, Result};

/// Spatial mean of the slice at each time step.
#[derive(Debug, Clone, Serialize)]
pub struct LineChart {
    pub title: String,
    pub units: String,
    pub times: Vec<DateTime<Utc>>,
    pub values: Vec<f64>,
}

/// Build the time-series chart for a slice.
pub fn line_chart(slice: &GridSlice, title: &str) -> Result<Chart> {
    let values = slice.time_means();
    if values.iter().all(|v| v.is_nan()) {
        return Err(ChartError::EmptySlice(slice.variable.clone()));
    }

    Ok(Chart::Line(LineChart {
        title: title.to_string(),
        units: slice.units.clone(),
        times: slice.times.clone(),
        values,
    }))
}
