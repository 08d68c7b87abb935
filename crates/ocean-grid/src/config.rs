//! Configuration for dataset generation and storage.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Dimensions of the synthetic grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of daily time steps.
    pub time_steps: usize,
    /// Latitude resolution in degrees.
    pub lat_step: f64,
    /// Longitude resolution in degrees.
    pub lon_step: f64,
    /// Timestamp of the first time step.
    pub start: DateTime<Utc>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            time_steps: 30,
            lat_step: 2.0,
            lon_step: 2.0,
            start: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }
}

impl GridConfig {
    /// Validate the grid configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.time_steps == 0 {
            return Err("time_steps must be > 0".to_string());
        }
        if self.lat_step <= 0.0 || self.lat_step > 90.0 {
            return Err("lat_step must be in (0, 90]".to_string());
        }
        if self.lon_step <= 0.0 || self.lon_step > 180.0 {
            return Err("lon_step must be in (0, 180]".to_string());
        }
        Ok(())
    }

    /// Latitude axis: -90 to 90 inclusive.
    pub fn latitudes(&self) -> Vec<f64> {
        let mut lats = Vec::new();
        let mut lat = -90.0;
        while lat <= 90.0 + 1e-9 {
            lats.push(lat);
            lat += self.lat_step;
        }
        lats
    }

    /// Longitude axis: -180 up to (but excluding) 180.
    pub fn longitudes(&self) -> Vec<f64> {
        let mut lons = Vec::new();
        let mut lon = -180.0;
        while lon < 180.0 - 1e-9 {
            lons.push(lon);
            lon += self.lon_step;
        }
        lons
    }

    /// Time axis: daily steps from `start`.
    pub fn times(&self) -> Vec<DateTime<Utc>> {
        (0..self.time_steps)
            .map(|t| self.start + chrono::Duration::days(t as i64))
            .collect()
    }
}

/// Configuration for the dataset cache.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Directory holding the persisted dataset store.
    pub data_dir: PathBuf,
    /// Seed for the synthetic generator; entropy when absent.
    pub seed: Option<u64>,
    /// Optional URL of a reference dataset to download before falling back
    /// to the synthetic generator.
    pub source_url: Option<String>,
    /// Bounded wait for the reference download.
    pub download_timeout_secs: u64,
    /// Synthetic grid dimensions.
    pub grid: GridConfig,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("ocean-data"),
            seed: None,
            source_url: None,
            download_timeout_secs: 30,
            grid: GridConfig::default(),
        }
    }
}

impl DatasetConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("OCEAN_DATA_DIR") {
            config.data_dir = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("OCEAN_SEED") {
            if let Ok(seed) = val.parse() {
                config.seed = Some(seed);
            }
        }

        if let Ok(val) = std::env::var("OCEAN_SOURCE_URL") {
            if !val.is_empty() {
                config.source_url = Some(val);
            }
        }

        if let Ok(val) = std::env::var("OCEAN_DOWNLOAD_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                config.download_timeout_secs = secs;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.download_timeout_secs == 0 {
            return Err("download_timeout_secs must be > 0".to_string());
        }
        self.grid.validate()
    }

    /// Path of the Zarr store inside the data directory.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join("ocean.zarr")
    }

    /// Destination for a downloaded reference file.
    pub fn download_path(&self) -> PathBuf {
        self.data_dir.join("reference_dataset.nc")
    }

    /// Download timeout as a `Duration`.
    pub fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.download_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_axes() {
        let config = GridConfig::default();
        let lats = config.latitudes();
        let lons = config.longitudes();

        assert_eq!(lats.len(), 91);
        assert_eq!(lats[0], -90.0);
        assert_eq!(*lats.last().unwrap(), 90.0);

        assert_eq!(lons.len(), 180);
        assert_eq!(lons[0], -180.0);
        assert_eq!(*lons.last().unwrap(), 178.0);
    }

    #[test]
    fn test_times_are_daily() {
        let config = GridConfig::default();
        let times = config.times();
        assert_eq!(times.len(), 30);
        assert_eq!(times[1] - times[0], chrono::Duration::days(1));
    }

    #[test]
    fn test_validation() {
        let mut config = GridConfig::default();
        assert!(config.validate().is_ok());

        config.time_steps = 0;
        assert!(config.validate().is_err());

        config = GridConfig::default();
        config.lat_step = 0.0;
        assert!(config.validate().is_err());

        let mut dataset = DatasetConfig::default();
        assert!(dataset.validate().is_ok());
        dataset.download_timeout_secs = 0;
        assert!(dataset.validate().is_err());
    }
}
