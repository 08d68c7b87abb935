//! Synthetic ocean dataset model.
//!
//! This crate owns the gridded data side of ocean-chat:
//!
//! - **Generation**: fabricate a (time, lat, lon) grid for temperature and
//!   salinity from the static region registry, with seasonal modulation and
//!   Gaussian noise. Cells outside every region stay NaN.
//! - **Persistence**: write/read the dataset as Zarr V3 arrays plus a JSON
//!   manifest describing axes and variables.
//! - **Caching**: build the dataset once per process and hand out a shared
//!   handle thereafter.
//! - **Selection**: slice a variable down to a region's bounding box.
//! - **Statistics**: NaN-aware reductions over a slice.
//!
//! ```text
//! user request
//!      │
//!      ▼
//! DatasetCache::get_or_build()
//!      │
//!      ├─► existing Zarr store? open it
//!      ├─► reference download configured? fetch, try to open
//!      └─► otherwise generate synthetically and persist
//!      │
//!      ▼
//! select() ──► GridSlice ──► summarize()
//! ```

pub mod cache;
pub mod config;
pub mod download;
pub mod error;
pub mod generate;
pub mod select;
pub mod stats;
pub mod store;
pub mod types;

pub use cache::DatasetCache;
pub use config::{DatasetConfig, GridConfig};
pub use error::{GridError, Result};
pub use generate::generate_dataset;
pub use select::select;
pub use stats::{summarize, summarize_region, StatsSummary};
pub use store::{open_dataset, write_dataset};
pub use types::{GridSlice, OceanDataset, Variable};
