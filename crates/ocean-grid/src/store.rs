//! Zarr V3 persistence for the dataset.
//!
//! One 3-D float32 array per variable, chunked per time step, plus a
//! `manifest.json` alongside the arrays describing axes and variables. The
//! manifest is what makes a directory recognizable as an ocean-chat store.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use zarrs::array::{Array, ArrayBuilder, DataType, FillValue};
use zarrs::array_subset::ArraySubset;
use zarrs_filesystem::FilesystemStore;

use crate::error::{GridError, Result};
use crate::types::{OceanDataset, Variable};

const MANIFEST_NAME: &str = "manifest.json";

/// Descriptor for one persisted variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct VariableEntry {
    name: String,
    units: String,
}

/// Store-level metadata: the coordinate axes and variable list.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DatasetManifest {
    variables: Vec<VariableEntry>,
    times: Vec<DateTime<Utc>>,
    lats: Vec<f64>,
    lons: Vec<f64>,
}

/// Write the dataset to a Zarr store at `path`, replacing any previous
/// contents of the manifest and arrays.
pub fn write_dataset(path: &Path, ds: &OceanDataset) -> Result<()> {
    std::fs::create_dir_all(path)?;
    let store = Arc::new(
        FilesystemStore::new(path).map_err(|e| GridError::WriteFailed(e.to_string()))?,
    );

    let (nt, nlat, nlon) = ds.shape();

    for var in ds.variables() {
        let array = ArrayBuilder::new(
            vec![nt as u64, nlat as u64, nlon as u64],
            DataType::Float32,
            vec![1, nlat as u64, nlon as u64]
                .try_into()
                .map_err(|e| GridError::WriteFailed(format!("{e:?}")))?,
            FillValue::from(f32::NAN),
        )
        .attributes({
            let mut attrs = serde_json::Map::new();
            attrs.insert("units".to_string(), serde_json::json!(var.units));
            attrs.insert("long_name".to_string(), serde_json::json!(var.name));
            attrs
        })
        .build(store.clone(), &format!("/{}", var.name))
        .map_err(|e| GridError::WriteFailed(e.to_string()))?;

        array
            .store_metadata()
            .map_err(|e| GridError::WriteFailed(e.to_string()))?;

        let subset = ArraySubset::new_with_start_shape(
            vec![0, 0, 0],
            vec![nt as u64, nlat as u64, nlon as u64],
        )
        .map_err(|e| GridError::WriteFailed(e.to_string()))?;

        array
            .store_array_subset_elements(&subset, &var.data)
            .map_err(|e| GridError::WriteFailed(e.to_string()))?;
    }

    let manifest = DatasetManifest {
        variables: ds
            .variables()
            .iter()
            .map(|v| VariableEntry {
                name: v.name.clone(),
                units: v.units.clone(),
            })
            .collect(),
        times: ds.times.clone(),
        lats: ds.lats.clone(),
        lons: ds.lons.clone(),
    };
    let manifest_json = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(path.join(MANIFEST_NAME), manifest_json)?;

    info!(path = %path.display(), variables = ds.variables().len(), "persisted dataset store");
    Ok(())
}

/// Open a dataset store previously written by [`write_dataset`].
pub fn open_dataset(path: &Path) -> Result<OceanDataset> {
    if !path.is_dir() {
        return Err(GridError::UnsupportedContainer(format!(
            "{} is not a dataset store directory",
            path.display()
        )));
    }

    let manifest_path = path.join(MANIFEST_NAME);
    let manifest_json = std::fs::read_to_string(&manifest_path).map_err(|_| {
        GridError::UnsupportedContainer(format!(
            "{} has no {MANIFEST_NAME}",
            path.display()
        ))
    })?;
    let manifest: DatasetManifest = serde_json::from_str(&manifest_json)?;

    let store = Arc::new(
        FilesystemStore::new(path).map_err(|e| GridError::OpenFailed(e.to_string()))?,
    );

    let nt = manifest.times.len();
    let nlat = manifest.lats.len();
    let nlon = manifest.lons.len();

    let mut variables = Vec::with_capacity(manifest.variables.len());
    for entry in &manifest.variables {
        let array = Array::open(store.clone(), &format!("/{}", entry.name))
            .map_err(|e| GridError::OpenFailed(e.to_string()))?;

        if array.shape() != [nt as u64, nlat as u64, nlon as u64] {
            return Err(GridError::InvalidMetadata(format!(
                "array {} shape {:?} does not match manifest axes ({nt}, {nlat}, {nlon})",
                entry.name,
                array.shape()
            )));
        }

        let subset = ArraySubset::new_with_start_shape(
            vec![0, 0, 0],
            vec![nt as u64, nlat as u64, nlon as u64],
        )
        .map_err(|e| GridError::ReadFailed(e.to_string()))?;

        let data: Vec<f32> = array
            .retrieve_array_subset_elements(&subset)
            .map_err(|e| GridError::ReadFailed(e.to_string()))?;

        variables.push(Variable {
            name: entry.name.clone(),
            units: entry.units.clone(),
            data,
        });
    }

    info!(path = %path.display(), variables = variables.len(), "opened dataset store");

    Ok(OceanDataset::new(
        manifest.times,
        manifest.lats,
        manifest.lons,
        variables,
    ))
}
