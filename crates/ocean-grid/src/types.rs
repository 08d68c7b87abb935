//! Core dataset types.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A named variable with its full (time, lat, lon) data in row-major order.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Lower-case variable name, e.g. "temperature".
    pub name: String,
    /// Physical units, e.g. "°C".
    pub units: String,
    /// Values, `time_count * lat_count * lon_count` long. NaN marks cells
    /// outside every region.
    pub data: Vec<f32>,
}

/// The full synthetic dataset: shared coordinate axes plus one gridded array
/// per variable.
#[derive(Debug, Clone)]
pub struct OceanDataset {
    pub times: Vec<DateTime<Utc>>,
    pub lats: Vec<f64>,
    pub lons: Vec<f64>,
    variables: Vec<Variable>,
}

impl OceanDataset {
    /// Assemble a dataset from axes and variables. Variables whose data
    /// length does not match the axes are rejected by `debug_assert` only;
    /// construction sites are all internal.
    pub fn new(
        times: Vec<DateTime<Utc>>,
        lats: Vec<f64>,
        lons: Vec<f64>,
        variables: Vec<Variable>,
    ) -> Self {
        let expected = times.len() * lats.len() * lons.len();
        for var in &variables {
            debug_assert_eq!(var.data.len(), expected, "variable {} shape", var.name);
        }
        Self {
            times,
            lats,
            lons,
            variables,
        }
    }

    /// Grid shape as (time, lat, lon) counts.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.times.len(), self.lats.len(), self.lons.len())
    }

    /// All variables in declaration order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Look up a variable by name (case-insensitive).
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables
            .iter()
            .find(|v| v.name.eq_ignore_ascii_case(name))
    }

    /// Flat index for (time, lat, lon) indices.
    pub fn index(&self, t: usize, j: usize, i: usize) -> usize {
        (t * self.lats.len() + j) * self.lons.len() + i
    }
}

/// A variable restricted to one region's bounding box.
///
/// Carries its own copies of the axis vectors; for an antimeridian-crossing
/// region the longitude axis is the concatenation of the eastern and western
/// segments.
#[derive(Debug, Clone, Serialize)]
pub struct GridSlice {
    pub variable: String,
    pub units: String,
    pub times: Vec<DateTime<Utc>>,
    pub lats: Vec<f64>,
    pub lons: Vec<f64>,
    /// Values in (time, lat, lon) row-major order.
    pub data: Vec<f32>,
}

impl GridSlice {
    /// Slice shape as (time, lat, lon) counts.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.times.len(), self.lats.len(), self.lons.len())
    }

    /// Value at (time, lat, lon) indices.
    pub fn value(&self, t: usize, j: usize, i: usize) -> f32 {
        self.data[(t * self.lats.len() + j) * self.lons.len() + i]
    }

    /// Number of defined (non-NaN) cells.
    pub fn defined_count(&self) -> usize {
        self.data.iter().filter(|v| !v.is_nan()).count()
    }

    /// The most recent time plane, row-major (lat, lon).
    pub fn latest_plane(&self) -> &[f32] {
        let plane = self.lats.len() * self.lons.len();
        if plane == 0 || self.times.is_empty() {
            return &[];
        }
        let start = (self.times.len() - 1) * plane;
        &self.data[start..start + plane]
    }

    /// NaN-aware spatial mean for each time step.
    pub fn time_means(&self) -> Vec<f64> {
        let plane = self.lats.len() * self.lons.len();
        self.times
            .iter()
            .enumerate()
            .map(|(t, _)| {
                let cells = &self.data[t * plane..(t + 1) * plane];
                let mut sum = 0.0;
                let mut count = 0usize;
                for &v in cells {
                    if !v.is_nan() {
                        sum += v as f64;
                        count += 1;
                    }
                }
                if count == 0 {
                    f64::NAN
                } else {
                    sum / count as f64
                }
            })
            .collect()
    }
}
