//! Contour (isoline) charts.

use serde::Serialize;

use ocean_grid::GridSlice;

use crate::{plane_rows, Chart, ChartError, Result};

/// Number of evenly spaced contour levels between the plane's min and max.
const DEFAULT_LEVELS: usize = 10;

/// The latest time plane plus the contour levels to draw over it.
#[derive(Debug, Clone, Serialize)]
pub struct ContourChart {
    pub title: String,
    pub units: String,
    pub lats: Vec<f64>,
    pub lons: Vec<f64>,
    pub values: Vec<Vec<f32>>,
    /// Strictly increasing levels inside the plane's value range.
    pub levels: Vec<f64>,
}

/// Build a contour map of the slice's latest time plane.
pub fn contour_chart(slice: &GridSlice, title: &str) -> Result<Chart> {
    let plane = slice.latest_plane();

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in plane {
        if v.is_nan() {
            continue;
        }
        min = min.min(v as f64);
        max = max.max(v as f64);
    }
    if !min.is_finite() {
        return Err(ChartError::EmptySlice(slice.variable.clone()));
    }

    let (_, nlat, nlon) = slice.shape();
    Ok(Chart::Contour(ContourChart {
        title: title.to_string(),
        units: slice.units.clone(),
        lats: slice.lats.clone(),
        lons: slice.lons.clone(),
        values: plane_rows(plane, nlat, nlon),
        levels: levels_between(min, max, DEFAULT_LEVELS),
    }))
}

/// Evenly spaced interior levels of `(min, max)`; a flat plane collapses to
/// its single value.
fn levels_between(min: f64, max: f64, count: usize) -> Vec<f64> {
    if max <= min {
        return vec![min];
    }
    let step = (max - min) / (count + 1) as f64;
    (1..=count).map(|k| min + step * k as f64).collect()
}
