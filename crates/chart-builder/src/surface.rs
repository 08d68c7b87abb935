//! 3-D surface charts.

use serde::Serialize;

use ocean_grid::GridSlice;

use crate::{plane_rows, Chart, ChartError, Result};

/// The latest time plane as a surface: z-values over the lat/lon plane.
#[derive(Debug, Clone, Serialize)]
pub struct SurfaceChart {
    pub title: String,
    pub units: String,
    pub lats: Vec<f64>,
    pub lons: Vec<f64>,
    pub values: Vec<Vec<f32>>,
}

/// Build a 3-D surface view of the slice's latest time plane.
pub fn surface_chart(slice: &GridSlice, title: &str) -> Result<Chart> {
    let plane = slice.latest_plane();
    if plane.iter().all(|v| v.is_nan()) {
        return Err(ChartError::EmptySlice(slice.variable.clone()));
    }

    let (_, nlat, nlon) = slice.shape();
    Ok(Chart::Surface(SurfaceChart {
        title: title.to_string(),
        units: slice.units.clone(),
        lats: slice.lats.clone(),
        lons: slice.lons.clone(),
        values: plane_rows(plane, nlat, nlon),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocean_common::find_region;
    use ocean_grid::{generate_dataset, select, GridConfig};

    #[test]
    fn test_surface_dimensions() {
        let ds = generate_dataset(
            &GridConfig {
                time_steps: 2,
                lat_step: 10.0,
                lon_step: 10.0,
                ..GridConfig::default()
            },
            Some(2),
        );
        let slice = select(&ds, "temperature", find_region("indian ocean").unwrap()).unwrap();
        let chart = surface_chart(&slice, "Temperature in Indian Ocean").unwrap();

        match chart {
            Chart::Surface(surface) => {
                assert_eq!(surface.values.len(), surface.lats.len());
                assert_eq!(surface.values[0].len(), surface.lons.len());
            }
            other => panic!("expected surface, got {other:?}"),
        }
    }
}
