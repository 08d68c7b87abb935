//! Statistics bar charts.

use serde::Serialize;

use ocean_grid::StatsSummary;

use crate::{Chart, Result};

/// Minimum/average/maximum as a three-bar chart.
#[derive(Debug, Clone, Serialize)]
pub struct StatsChart {
    pub title: String,
    pub units: String,
    pub categories: Vec<&'static str>,
    pub values: Vec<f64>,
}

/// Build a bar chart from an already-computed summary.
pub fn stats_chart(stats: &StatsSummary, parameter_label: &str, units: &str) -> Result<Chart> {
    Ok(Chart::Stats(StatsChart {
        title: format!("{parameter_label} Statistics"),
        units: units.to_string(),
        categories: vec!["Minimum", "Average", "Maximum"],
        values: vec![stats.min, stats.mean, stats.max],
    }))
}
