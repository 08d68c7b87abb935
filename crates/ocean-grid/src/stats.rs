//! NaN-aware statistics over a grid slice.

use serde::Serialize;

use ocean_common::region_description;

use crate::types::GridSlice;

/// Summary statistics for one slice.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSummary {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation over the defined cells.
    pub std_dev: f64,
    /// Number of defined (non-NaN) cells.
    pub count: usize,
    /// Slice shape as (time, lat, lon) counts.
    pub shape: (usize, usize, usize),
    /// Static description of the summarized region, when one was named.
    pub description: Option<String>,
}

/// Reduce a slice to summary statistics.
///
/// Returns `None` for a slice with no defined cells; reductions never panic
/// on empty or all-NaN input.
pub fn summarize(slice: &GridSlice) -> Option<StatsSummary> {
    let mut count = 0usize;
    let mut sum = 0.0f64;
    let mut sum_sq = 0.0f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for &v in &slice.data {
        if v.is_nan() {
            continue;
        }
        let v = v as f64;
        count += 1;
        sum += v;
        sum_sq += v * v;
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }

    if count == 0 {
        return None;
    }

    let mean = sum / count as f64;
    let variance = (sum_sq / count as f64 - mean * mean).max(0.0);

    Some(StatsSummary {
        mean,
        min,
        max,
        std_dev: variance.sqrt(),
        count,
        shape: slice.shape(),
        description: None,
    })
}

/// Like [`summarize`], additionally attaching the descriptive sentence for
/// `region_name` (a generic fallback covers unrecognized names).
pub fn summarize_region(slice: &GridSlice, region_name: &str) -> Option<StatsSummary> {
    summarize(slice).map(|mut stats| {
        stats.description = Some(region_description(region_name).to_string());
        stats
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn slice_with(data: Vec<f32>, nlat: usize, nlon: usize) -> GridSlice {
        let nt = data.len() / (nlat * nlon).max(1);
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        GridSlice {
            variable: "temperature".to_string(),
            units: "°C".to_string(),
            times: (0..nt).map(|t| t0 + chrono::Duration::days(t as i64)).collect(),
            lats: (0..nlat).map(|j| j as f64).collect(),
            lons: (0..nlon).map(|i| i as f64).collect(),
            data,
        }
    }

    #[test]
    fn test_basic_stats() {
        let slice = slice_with(vec![1.0, 2.0, 3.0, f32::NAN], 2, 2);
        let stats = summarize(&slice).unwrap();

        assert_eq!(stats.count, 3);
        assert!((stats.mean - 2.0).abs() < 1e-9);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 3.0);
        assert!((stats.std_dev - (2.0f64 / 3.0).sqrt()).abs() < 1e-9);
        assert_eq!(stats.shape, (1, 2, 2));
    }

    #[test]
    fn test_min_mean_max_ordering() {
        let slice = slice_with(vec![4.5, -1.0, 0.25, 9.75], 2, 2);
        let stats = summarize(&slice).unwrap();
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
    }

    #[test]
    fn test_all_nan_slice_is_no_data() {
        let slice = slice_with(vec![f32::NAN; 4], 2, 2);
        assert!(summarize(&slice).is_none());
    }

    #[test]
    fn test_empty_slice_is_no_data() {
        let slice = slice_with(Vec::new(), 0, 0);
        assert!(summarize(&slice).is_none());
    }

    #[test]
    fn test_region_description_attached() {
        let slice = slice_with(vec![1.0], 1, 1);
        let stats = summarize_region(&slice, "arctic ocean").unwrap();
        assert!(stats.description.unwrap().contains("polar"));

        let stats = summarize_region(&slice, "unknown basin").unwrap();
        assert_eq!(stats.description.unwrap(), "Ocean region");
    }
}
