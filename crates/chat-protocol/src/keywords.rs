//! Keyword tables for intent parsing.
//!
//! Matching is plain substring containment on the lower-cased input, so a
//! keyword may fire from inside a longer word ("this" contains "hi"). That
//! behavior is part of the command surface and is covered by tests; do not
//! "fix" it to word-boundary matching.

pub const HELP: &[&str] = &["help", "what can", "how to", "commands"];

pub const GREETING: &[&str] = &["hello", "hi", "hey", "good morning", "good evening"];

pub const TEMPERATURE: &[&str] = &["temperature", "temp", "warm", "hot", "cold"];

pub const SALINITY: &[&str] = &["salinity", "salt", "salty", "saline"];

/// Any hint that the message is about a place.
pub const REGION_HINTS: &[&str] = &[
    "bengal",
    "bangladesh",
    "kolkata",
    "chennai",
    "arabian",
    "arabia",
    "mumbai",
    "karachi",
    "oman",
    "pacific",
    "atlantic",
    "indian",
    "mediterranean",
    "arctic",
    "ocean",
    "sea",
];

/// Verb-like words that mark a data request.
pub const ACTION: &[&str] = &[
    "show",
    "display",
    "get",
    "find",
    "tell",
    "what",
    "give",
    "trend",
    "stats",
    "statistics",
    "map",
    "heatmap",
    "3d",
    "surface",
    "contour",
    "compare",
    "comparison",
];

// Region extraction tables, checked in this order; first hit wins.
pub const BAY_OF_BENGAL: &[&str] = &["bengal", "bangladesh", "kolkata", "chennai"];
pub const ARABIAN_SEA: &[&str] = &["arabian", "arabia", "mumbai", "karachi", "oman"];
pub const PACIFIC_OCEAN: &[&str] = &["pacific"];
pub const ATLANTIC_OCEAN: &[&str] = &["atlantic"];
/// "indian" only resolves together with "ocean"; see `intent::extract_region`.
pub const INDIAN_OCEAN: &[&str] = &["indian"];
pub const MEDITERRANEAN_SEA: &[&str] = &["mediterranean", "med"];
pub const ARCTIC_OCEAN: &[&str] = &["arctic"];

// Chart-type cascade, checked in this order; first hit wins, default is map.
pub const CHART_LINE: &[&str] = &["trend", "line", "time", "over time", "change", "history"];
pub const CHART_STATS: &[&str] = &["stats", "statistics", "numbers", "average", "min", "max"];
pub const CHART_3D: &[&str] = &["3d", "surface", "three dimensional"];
pub const CHART_CONTOUR: &[&str] = &["contour", "isolines", "levels"];
pub const CHART_COMPARISON: &[&str] = &["compare", "comparison", "both", "versus", "vs"];

/// True when the input contains any of the given keywords.
pub fn contains_any(input: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| input.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_any_is_substring_based() {
        assert!(contains_any("show temperature", TEMPERATURE));
        assert!(contains_any("temp only", TEMPERATURE));
        // "this" contains "hi" — substring semantics, kept deliberately
        assert!(contains_any("this", GREETING));
        assert!(!contains_any("xyzzy", GREETING));
    }
}
