//! Intent extraction from free text.

use serde::Serialize;

use crate::keywords;

/// A physical parameter the user can ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Parameter {
    Temperature,
    Salinity,
}

impl Parameter {
    /// Lower-case name, matching the dataset's variable names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Salinity => "salinity",
        }
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of chart to build for a data request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Map,
    Line,
    Stats,
    Surface3d,
    Contour,
    Comparison,
}

/// The parsed meaning of one user message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Intent {
    Help,
    Greeting,
    /// Nothing in the message looked like a data request.
    Unknown,
    /// Ocean-related words were present but neither a parameter nor a region
    /// could be extracted.
    Unclear,
    /// A parameter without a region.
    NeedRegion { parameter: Parameter, chart: ChartKind },
    /// A region without a parameter.
    NeedParameter {
        region: &'static str,
        chart: ChartKind,
    },
    /// A complete data request.
    ShowData {
        parameter: Parameter,
        region: &'static str,
        chart: ChartKind,
    },
}

/// Parse one user message into an [`Intent`].
///
/// Deterministic, case-insensitive, substring-based; never fails. Empty or
/// whitespace-only input short-circuits to `Unknown` without any keyword
/// scanning.
pub fn parse(input: &str) -> Intent {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return Intent::Unknown;
    }

    if keywords::contains_any(&input, keywords::HELP) {
        return Intent::Help;
    }
    if keywords::contains_any(&input, keywords::GREETING) {
        return Intent::Greeting;
    }

    let has_parameter = keywords::contains_any(&input, keywords::TEMPERATURE)
        || keywords::contains_any(&input, keywords::SALINITY);
    let has_region = keywords::contains_any(&input, keywords::REGION_HINTS);
    let has_action = keywords::contains_any(&input, keywords::ACTION);

    if !(has_parameter || has_region || has_action) {
        return Intent::Unknown;
    }

    let parameter = extract_parameter(&input);
    let region = extract_region(&input);
    let chart = extract_chart(&input);

    match (parameter, region) {
        (Some(parameter), Some(region)) => Intent::ShowData {
            parameter,
            region,
            chart,
        },
        (Some(parameter), None) => Intent::NeedRegion { parameter, chart },
        (None, Some(region)) => Intent::NeedParameter { region, chart },
        (None, None) => Intent::Unclear,
    }
}

/// Temperature family is checked before salinity; at most one parameter is
/// ever returned even when both families appear.
fn extract_parameter(input: &str) -> Option<Parameter> {
    if keywords::contains_any(input, keywords::TEMPERATURE) {
        Some(Parameter::Temperature)
    } else if keywords::contains_any(input, keywords::SALINITY) {
        Some(Parameter::Salinity)
    } else {
        None
    }
}

/// Regions are checked in a fixed order; first match wins. "indian" is the
/// documented asymmetry: it resolves only when "ocean" also appears.
fn extract_region(input: &str) -> Option<&'static str> {
    if keywords::contains_any(input, keywords::BAY_OF_BENGAL) {
        Some("bay of bengal")
    } else if keywords::contains_any(input, keywords::ARABIAN_SEA) {
        Some("arabian sea")
    } else if keywords::contains_any(input, keywords::PACIFIC_OCEAN) {
        Some("pacific ocean")
    } else if keywords::contains_any(input, keywords::ATLANTIC_OCEAN) {
        Some("atlantic ocean")
    } else if keywords::contains_any(input, keywords::INDIAN_OCEAN) && input.contains("ocean") {
        Some("indian ocean")
    } else if keywords::contains_any(input, keywords::MEDITERRANEAN_SEA) {
        Some("mediterranean sea")
    } else if keywords::contains_any(input, keywords::ARCTIC_OCEAN) {
        Some("arctic ocean")
    } else {
        None
    }
}

/// Ordered cascade; the first family that matches decides, default is a map.
fn extract_chart(input: &str) -> ChartKind {
    if keywords::contains_any(input, keywords::CHART_LINE) {
        ChartKind::Line
    } else if keywords::contains_any(input, keywords::CHART_STATS) {
        ChartKind::Stats
    } else if keywords::contains_any(input, keywords::CHART_3D) {
        ChartKind::Surface3d
    } else if keywords::contains_any(input, keywords::CHART_CONTOUR) {
        ChartKind::Contour
    } else if keywords::contains_any(input, keywords::CHART_COMPARISON) {
        ChartKind::Comparison
    } else {
        ChartKind::Map
    }
}
