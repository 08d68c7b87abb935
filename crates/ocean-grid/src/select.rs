//! Region/variable selection.
//!
//! Slices one variable down to a region's bounding box, then shrinks the
//! slice to its defined extent. Absence of data is an explicit `None`, never
//! an error.

use tracing::warn;

use ocean_common::Region;

use crate::types::{GridSlice, OceanDataset, Variable};

/// Select a variable restricted to `region`.
///
/// The variable is resolved by exact name first; failing that, the first
/// variable whose name contains "temp", then the first declared variable
/// (both fallbacks are logged). Returns `None` only when the dataset has no
/// variables at all.
pub fn select(ds: &OceanDataset, parameter: &str, region: &Region) -> Option<GridSlice> {
    let var = resolve_variable(ds, parameter)?;

    let lat_indices: Vec<usize> = ds
        .lats
        .iter()
        .enumerate()
        .filter(|(_, &lat)| region.bounds.lat.contains(lat))
        .map(|(j, _)| j)
        .collect();
    let lon_indices: Vec<usize> = ds
        .lons
        .iter()
        .enumerate()
        .filter(|(_, &lon)| region.bounds.lon.contains(lon))
        .map(|(i, _)| i)
        .collect();

    let slice = extract(ds, var, &lat_indices, &lon_indices);
    Some(trim_to_defined(slice))
}

/// Resolve a variable name with the documented fallback chain.
fn resolve_variable<'a>(ds: &'a OceanDataset, parameter: &str) -> Option<&'a Variable> {
    if let Some(var) = ds.variable(parameter) {
        return Some(var);
    }

    if let Some(var) = ds
        .variables()
        .iter()
        .find(|v| v.name.to_lowercase().contains("temp"))
    {
        warn!(
            requested = parameter,
            using = %var.name,
            "variable not found, falling back to temperature-like variable"
        );
        return Some(var);
    }

    match ds.variables().first() {
        Some(var) => {
            warn!(
                requested = parameter,
                using = %var.name,
                "variable not found, falling back to first declared variable"
            );
            Some(var)
        }
        None => None,
    }
}

/// Copy the cells at the given axis indices into a new slice.
fn extract(
    ds: &OceanDataset,
    var: &Variable,
    lat_indices: &[usize],
    lon_indices: &[usize],
) -> GridSlice {
    let mut data = Vec::with_capacity(ds.times.len() * lat_indices.len() * lon_indices.len());
    for (t, _) in ds.times.iter().enumerate() {
        for &j in lat_indices {
            for &i in lon_indices {
                data.push(var.data[ds.index(t, j, i)]);
            }
        }
    }

    GridSlice {
        variable: var.name.clone(),
        units: var.units.clone(),
        times: ds.times.clone(),
        lats: lat_indices.iter().map(|&j| ds.lats[j]).collect(),
        lons: lon_indices.iter().map(|&i| ds.lons[i]).collect(),
        data,
    }
}

/// Shrink a slice to the bounding extent of its defined cells.
///
/// Rows/columns that are NaN at every time step are dropped from the edges.
/// A slice with no defined cells at all collapses to empty spatial axes.
fn trim_to_defined(slice: GridSlice) -> GridSlice {
    let (nt, nlat, nlon) = slice.shape();

    let mut lat_defined = vec![false; nlat];
    let mut lon_defined = vec![false; nlon];
    for t in 0..nt {
        for j in 0..nlat {
            for i in 0..nlon {
                if !slice.value(t, j, i).is_nan() {
                    lat_defined[j] = true;
                    lon_defined[i] = true;
                }
            }
        }
    }

    let lat_first = lat_defined.iter().position(|&d| d);
    let lon_first = lon_defined.iter().position(|&d| d);

    let (j0, j1, i0, i1) = match (lat_first, lon_first) {
        (Some(j0), Some(i0)) => {
            let j1 = lat_defined.iter().rposition(|&d| d).unwrap_or(j0);
            let i1 = lon_defined.iter().rposition(|&d| d).unwrap_or(i0);
            (j0, j1, i0, i1)
        }
        // Nothing defined anywhere.
        _ => {
            return GridSlice {
                lats: Vec::new(),
                lons: Vec::new(),
                data: Vec::new(),
                ..slice
            };
        }
    };

    if j0 == 0 && j1 == nlat - 1 && i0 == 0 && i1 == nlon - 1 {
        return slice;
    }

    let mut data = Vec::with_capacity(nt * (j1 - j0 + 1) * (i1 - i0 + 1));
    for t in 0..nt {
        for j in j0..=j1 {
            for i in i0..=i1 {
                data.push(slice.value(t, j, i));
            }
        }
    }

    GridSlice {
        lats: slice.lats[j0..=j1].to_vec(),
        lons: slice.lons[i0..=i1].to_vec(),
        data,
        ..slice
    }
}
