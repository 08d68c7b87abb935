//! Process-wide dataset cache.
//!
//! The dataset is built at most once per process; later calls get the same
//! shared handle. There is no invalidation and no teardown. The cache is an
//! explicit object owned by the orchestrator rather than hidden module state.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{info, warn};

use crate::config::DatasetConfig;
use crate::download;
use crate::generate::generate_dataset;
use crate::store::{open_dataset, write_dataset};
use crate::types::OceanDataset;

/// Memoized dataset holder.
pub struct DatasetCache {
    config: DatasetConfig,
    dataset: OnceCell<Arc<OceanDataset>>,
}

impl DatasetCache {
    /// Create a cache for the given configuration. Nothing is built until
    /// the first `get_or_build` call.
    pub fn new(config: DatasetConfig) -> Self {
        Self {
            config,
            dataset: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Return the dataset, building it on the first call.
    ///
    /// Build order: existing store on disk, then an optional reference
    /// download, then the synthetic generator. The generator cannot fail, so
    /// this always produces a dataset; persistence problems only cost the
    /// next process a rebuild.
    pub fn get_or_build(&self) -> Arc<OceanDataset> {
        self.dataset
            .get_or_init(|| Arc::new(self.build()))
            .clone()
    }

    fn build(&self) -> OceanDataset {
        let store_path = self.config.store_path();

        if store_path.exists() {
            match open_dataset(&store_path) {
                Ok(ds) => return ds,
                Err(e) => {
                    warn!(error = %e, "existing dataset store unusable, rebuilding");
                }
            }
        }

        if let Some(url) = &self.config.source_url {
            match self.try_download(url) {
                Ok(ds) => return ds,
                Err(e) => {
                    warn!(error = %e, "reference download unusable, falling back to synthetic data");
                }
            }
        }

        info!(seed = ?self.config.seed, "building synthetic dataset");
        let ds = generate_dataset(&self.config.grid, self.config.seed);

        if let Err(e) = write_dataset(&store_path, &ds) {
            warn!(error = %e, "could not persist dataset store");
        }

        ds
    }

    fn try_download(&self, url: &str) -> crate::error::Result<OceanDataset> {
        let dest = self.config.download_path();
        download::fetch(url, &dest, self.config.download_timeout())?;
        open_dataset(&dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    fn test_config(dir: &std::path::Path) -> DatasetConfig {
        DatasetConfig {
            data_dir: dir.to_path_buf(),
            seed: Some(11),
            source_url: None,
            grid: GridConfig {
                time_steps: 3,
                lat_step: 15.0,
                lon_step: 15.0,
                ..GridConfig::default()
            },
            ..DatasetConfig::default()
        }
    }

    #[test]
    fn test_get_or_build_returns_shared_handle() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = DatasetCache::new(test_config(dir.path()));

        let a = cache.get_or_build();
        let b = cache.get_or_build();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_build_persists_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = DatasetCache::new(test_config(dir.path()));

        let built = cache.get_or_build();
        assert!(cache.config().store_path().is_dir());

        // A second cache over the same directory opens the persisted store.
        let reopened = DatasetCache::new(test_config(dir.path())).get_or_build();
        assert_eq!(reopened.shape(), built.shape());
    }
}
