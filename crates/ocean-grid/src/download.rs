//! Best-effort reference dataset download.
//!
//! A single bounded GET with no retries and no content validation; the
//! caller decides whether the result is a usable container and falls back to
//! the synthetic generator otherwise.

use std::path::Path;
use std::time::Duration;

use tracing::info;

use crate::error::{GridError, Result};

/// Fetch `url` into `dest`, waiting at most `timeout`.
pub fn fetch(url: &str, dest: &Path, timeout: Duration) -> Result<()> {
    info!(url, dest = %dest.display(), "downloading reference dataset");

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| GridError::DownloadFailed(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| GridError::DownloadFailed(e.to_string()))?;

    let body = response
        .bytes()
        .map_err(|e| GridError::DownloadFailed(e.to_string()))?;

    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(dest, &body)?;

    info!(bytes = body.len(), "reference dataset downloaded");
    Ok(())
}
