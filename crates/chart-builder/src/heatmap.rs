//! Spatial heatmap charts.

use serde::Serialize;

use ocean_grid::GridSlice;

use crate::{plane_rows, Chart, ChartError, Result};

/// A lat/lon heatmap of the most recent time step.
#[derive(Debug, Clone, Serialize)]
pub struct HeatmapChart {
    pub title: String,
    pub units: String,
    pub lats: Vec<f64>,
    pub lons: Vec<f64>,
    /// One row per latitude; NaN cells serialize as null.
    pub values: Vec<Vec<f32>>,
}

/// Two heatmaps of the same region shown side by side.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonChart {
    pub title: String,
    pub left: HeatmapChart,
    pub right: HeatmapChart,
}

/// Build a heatmap of the slice's latest time plane.
pub fn heatmap_chart(slice: &GridSlice, title: &str) -> Result<Chart> {
    Ok(Chart::Heatmap(build_panel(slice, title)?))
}

/// Build a side-by-side comparison of two slices over the same region.
pub fn comparison_chart(left: &GridSlice, right: &GridSlice, title: &str) -> Result<Chart> {
    let left_panel = build_panel(left, &format!("{} — {}", title, left.variable))?;
    let right_panel = build_panel(right, &format!("{} — {}", title, right.variable))?;

    Ok(Chart::Comparison(ComparisonChart {
        title: title.to_string(),
        left: left_panel,
        right: right_panel,
    }))
}

fn build_panel(slice: &GridSlice, title: &str) -> Result<HeatmapChart> {
    let plane = slice.latest_plane();
    if plane.iter().all(|v| v.is_nan()) {
        return Err(ChartError::EmptySlice(slice.variable.clone()));
    }

    let (_, nlat, nlon) = slice.shape();
    Ok(HeatmapChart {
        title: title.to_string(),
        units: slice.units.clone(),
        lats: slice.lats.clone(),
        lons: slice.lons.clone(),
        values: plane_rows(plane, nlat, nlon),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocean_common::find_region;
    use ocean_grid::{generate_dataset, select, GridConfig};

    fn slice(parameter: &str) -> GridSlice {
        let ds = generate_dataset(
            &GridConfig {
                time_steps: 2,
                lat_step: 10.0,
                lon_step: 10.0,
                ..GridConfig::default()
            },
            Some(8),
        );
        select(&ds, parameter, find_region("bay of bengal").unwrap()).unwrap()
    }

    #[test]
    fn test_heatmap_uses_latest_plane() {
        let slice = slice("temperature");
        let chart = heatmap_chart(&slice, "Temperature in Bay Of Bengal").unwrap();

        match chart {
            Chart::Heatmap(map) => {
                assert_eq!(map.values.len(), slice.lats.len());
                assert_eq!(map.values[0].len(), slice.lons.len());
                let (nt, _, _) = slice.shape();
                assert_eq!(map.values[0][0], slice.value(nt - 1, 0, 0));
            }
            other => panic!("expected heatmap, got {other:?}"),
        }
    }

    #[test]
    fn test_comparison_has_both_panels() {
        let temp = slice("temperature");
        let salt = slice("salinity");
        let chart = comparison_chart(&temp, &salt, "Bay Of Bengal").unwrap();

        match chart {
            Chart::Comparison(cmp) => {
                assert!(cmp.left.title.contains("temperature"));
                assert!(cmp.right.title.contains("salinity"));
                assert_eq!(cmp.left.units, "°C");
                assert_eq!(cmp.right.units, "PSU");
            }
            other => panic!("expected comparison, got {other:?}"),
        }
    }

    #[test]
    fn test_all_nan_plane_is_an_error() {
        let mut s = slice("temperature");
        for v in &mut s.data {
            *v = f32::NAN;
        }
        assert!(matches!(
            heatmap_chart(&s, "t"),
            Err(ChartError::EmptySlice(_))
        ));
    }
}
