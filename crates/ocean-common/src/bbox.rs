//! Geographic bounding box types and operations.
//!
//! All coordinates are WGS84 degrees. Ranges are half-open so that adjacent
//! regions sharing a boundary never both claim the boundary cell.

use serde::{Deserialize, Serialize};

/// A half-open latitude band `[min, max)` in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatBand {
    pub min: f64,
    pub max: f64,
}

impl LatBand {
    /// Create a new latitude band from its bounds.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if a latitude falls inside this band.
    pub fn contains(&self, lat: f64) -> bool {
        lat >= self.min && lat < self.max
    }

    /// Height of the band in degrees.
    pub fn height(&self) -> f64 {
        self.max - self.min
    }

    /// Check if this band overlaps another.
    pub fn overlaps(&self, other: &LatBand) -> bool {
        self.min < other.max && other.min < self.max
    }
}

/// Longitude coverage in degrees.
///
/// Boxes that cross the antimeridian cannot be expressed as a single
/// `min <= lon < max` comparison, so they are carried as an explicit
/// disjunction of two half-open ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LonSpan {
    /// A single half-open range `[min, max)`.
    Range { min: f64, max: f64 },
    /// An antimeridian-crossing span: `[east_min, 180) ∪ [-180, west_max)`.
    SplitAtDateline { east_min: f64, west_max: f64 },
}

impl LonSpan {
    /// A single contiguous range `[min, max)`.
    pub fn range(min: f64, max: f64) -> Self {
        Self::Range { min, max }
    }

    /// A span crossing the antimeridian, `[east_min, 180) ∪ [-180, west_max)`.
    pub fn split_at_dateline(east_min: f64, west_max: f64) -> Self {
        Self::SplitAtDateline { east_min, west_max }
    }

    /// Check if a longitude falls inside this span.
    pub fn contains(&self, lon: f64) -> bool {
        match *self {
            Self::Range { min, max } => lon >= min && lon < max,
            Self::SplitAtDateline { east_min, west_max } => {
                (lon >= east_min && lon < 180.0) || (lon >= -180.0 && lon < west_max)
            }
        }
    }

    /// The half-open ranges making up this span.
    pub fn ranges(&self) -> Vec<(f64, f64)> {
        match *self {
            Self::Range { min, max } => vec![(min, max)],
            Self::SplitAtDateline { east_min, west_max } => {
                vec![(east_min, 180.0), (-180.0, west_max)]
            }
        }
    }

    /// Check if this span overlaps another.
    pub fn overlaps(&self, other: &LonSpan) -> bool {
        self.ranges().iter().any(|&(a_min, a_max)| {
            other
                .ranges()
                .iter()
                .any(|&(b_min, b_max)| a_min < b_max && b_min < a_max)
        })
    }
}

/// A rectangular latitude/longitude box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionBox {
    pub lat: LatBand,
    pub lon: LonSpan,
}

impl RegionBox {
    /// Create a new box from a latitude band and longitude span.
    pub fn new(lat: LatBand, lon: LonSpan) -> Self {
        Self { lat, lon }
    }

    /// Check if a point is contained within this box.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.lat.contains(lat) && self.lon.contains(lon)
    }

    /// Check if this box overlaps another.
    pub fn overlaps(&self, other: &RegionBox) -> bool {
        self.lat.overlaps(&other.lat) && self.lon.overlaps(&other.lon)
    }
}
