//! Response assembly.
//!
//! Dispatches a parsed intent to static texts, targeted prompts, or the data
//! path (validate region → load dataset → select → summarize → chart). Any
//! unexpected failure in the data path is caught here and turned into an
//! apology string; nothing propagates out of `respond`.

use anyhow::Result;
use rand::seq::SliceRandom;
use tracing::error;

use chart_builder::{
    comparison_chart, contour_chart, heatmap_chart, line_chart, stats_chart, surface_chart, Chart,
};
use chat_protocol::{ChartKind, Intent, Parameter};
use ocean_common::{find_region, regions};
use ocean_grid::{select, summarize_region, DatasetCache, StatsSummary};

/// One assistant turn: the reply text and, for data requests, a chart.
#[derive(Debug)]
pub struct ChatResponse {
    pub text: String,
    pub chart: Option<Chart>,
}

impl ChatResponse {
    fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            chart: None,
        }
    }
}

/// Stateless per-message orchestrator over the shared dataset cache.
pub struct Responder {
    cache: DatasetCache,
}

impl Responder {
    pub fn new(cache: DatasetCache) -> Self {
        Self { cache }
    }

    /// Answer one user message. Never fails; internal errors become an
    /// apologetic reply and the session continues.
    pub fn respond(&self, input: &str) -> ChatResponse {
        match chat_protocol::parse(input) {
            Intent::Help => ChatResponse::text_only(help_text()),
            Intent::Greeting => ChatResponse::text_only(greeting_text()),
            Intent::Unknown => ChatResponse::text_only(unknown_text()),
            Intent::Unclear => ChatResponse::text_only(unclear_text()),
            Intent::NeedRegion { parameter, .. } => {
                ChatResponse::text_only(need_region_text(parameter))
            }
            Intent::NeedParameter { region, .. } => {
                ChatResponse::text_only(need_parameter_text(region))
            }
            Intent::ShowData {
                parameter,
                region,
                chart,
            } => self
                .data_response(parameter.as_str(), region, chart)
                .unwrap_or_else(|e| {
                    error!(error = %e, "data request failed");
                    ChatResponse::text_only(apology_text(&e))
                }),
        }
    }

    /// The data path. Region names outside the supported set get the
    /// unsupported-region reply; missing data gets a neutral no-data reply.
    pub(crate) fn data_response(
        &self,
        parameter: &str,
        region_name: &str,
        chart_kind: ChartKind,
    ) -> Result<ChatResponse> {
        let Some(region) = find_region(region_name) else {
            return Ok(ChatResponse::text_only(unsupported_region_text(region_name)));
        };

        let ds = self.cache.get_or_build();

        let Some(slice) = select(&ds, parameter, region) else {
            return Ok(ChatResponse::text_only(no_data_text()));
        };
        let Some(stats) = summarize_region(&slice, region_name) else {
            return Ok(ChatResponse::text_only(no_data_text()));
        };

        let region_title = title_case(region_name);
        let parameter_title = title_case(parameter);

        let (chart, mut text) = match chart_kind {
            ChartKind::Line => (
                line_chart(&slice, &format!("{parameter_title} Trend in {region_title}"))?,
                format!("Here's the {parameter} trend for {region_name}."),
            ),
            ChartKind::Stats => (
                stats_chart(&stats, &parameter_title, &slice.units)?,
                format!("Here are the {parameter} statistics for {region_name}."),
            ),
            ChartKind::Surface3d => (
                surface_chart(&slice, &format!("{parameter_title} in {region_title}"))?,
                format!("Here's a 3D surface view of {parameter} in {region_name}."),
            ),
            ChartKind::Contour => (
                contour_chart(&slice, &format!("{parameter_title} in {region_title}"))?,
                format!("Here's a contour map of {parameter} in {region_name}. Lines mark equal values."),
            ),
            ChartKind::Comparison => {
                let temperature = select(&ds, "temperature", region);
                let salinity = select(&ds, "salinity", region);
                match (temperature, salinity) {
                    (Some(temperature), Some(salinity)) => (
                        comparison_chart(&temperature, &salinity, &region_title)?,
                        format!(
                            "Here's a side-by-side comparison of temperature and salinity in {region_name}."
                        ),
                    ),
                    _ => (
                        heatmap_chart(&slice, &format!("{parameter_title} in {region_title}"))?,
                        format!("Comparison unavailable, showing the {parameter} map instead."),
                    ),
                }
            }
            ChartKind::Map => (
                heatmap_chart(&slice, &format!("{parameter_title} in {region_title}"))?,
                format!("Here's the {parameter} distribution map for {region_name}."),
            ),
        };

        text.push_str(&stats_block(&stats, &slice.units, &region_title));

        Ok(ChatResponse {
            text,
            chart: Some(chart),
        })
    }
}

/// Format the region registry as an indented bullet list.
fn region_list() -> String {
    regions()
        .iter()
        .map(|r| format!("  - {}", title_case(r.name)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The welcome/help message, also used to open the session.
pub fn help_text() -> String {
    let mut text = String::from("Welcome to ocean-chat. Here's what I can do:\n\n");
    text.push_str("Available regions:\n");
    text.push_str(&region_list());
    text.push_str("\n\nParameters I understand:\n");
    text.push_str("  - temperature (also: temp, warm, cold)\n");
    text.push_str("  - salinity (also: salt, salty)\n");
    text.push_str("\nChart types:\n");
    text.push_str("  - map: \"show temperature map\"\n");
    text.push_str("  - trend: \"temperature trend over time\"\n");
    text.push_str("  - statistics: \"temperature stats\"\n");
    text.push_str("  - 3d, contour and comparison views\n");
    text.push_str("\nTry:\n");
    text.push_str("  - \"Show temperature in Bay of Bengal\"\n");
    text.push_str("  - \"Arctic temperature trend\"\n");
    text.push_str("  - \"Mediterranean salinity stats\"");
    text
}

fn greeting_text() -> String {
    const GREETINGS: &[&str] = &[
        "Hello! I'm your ocean data assistant. Ask me about temperature or salinity in different ocean regions.",
        "Hi there! Ready to explore ocean data? Try asking about temperature or salinity.",
        "Hey! I can show you ocean temperature and salinity data. What would you like to see?",
    ];
    GREETINGS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(GREETINGS[0])
        .to_string()
}

fn unknown_text() -> String {
    [
        "I didn't understand that. Try asking me about:",
        "  - \"show temperature Bay of Bengal\"",
        "  - \"salinity Arabian Sea\"",
        "  - \"temperature trend\"",
        "Or type \"help\" to see everything I can do.",
    ]
    .join("\n")
}

fn unclear_text() -> String {
    [
        "I can help with ocean data, but I need a bit more detail:",
        "  - which parameter? (temperature or salinity)",
        "  - which region? (e.g. Bay of Bengal, Arabian Sea)",
        "Example: \"Show temperature in Bay of Bengal\"",
    ]
    .join("\n")
}

fn need_region_text(parameter: Parameter) -> String {
    format!(
        "I can show you {parameter} data. Which region would you like?\n{}\nExample: \"Show {parameter} in Bay of Bengal\"",
        region_list()
    )
}

fn need_parameter_text(region: &str) -> String {
    format!(
        "I can show you data for {region}. What would you like to see?\n  - temperature\n  - salinity\nExample: \"Show temperature in {region}\""
    )
}

fn unsupported_region_text(region: &str) -> String {
    format!(
        "I'd love to show you {region} data, but I only have data for:\n{}\nTry asking about one of these regions.",
        region_list()
    )
}

fn no_data_text() -> String {
    "Sorry, I couldn't find any data for that selection right now.".to_string()
}

fn apology_text(error: &anyhow::Error) -> String {
    format!(
        "Oops, something went wrong: {error}.\nTry asking something like \"show temperature Bay of Bengal\" or type \"help\" for examples."
    )
}

/// The quick-stats block appended to every data reply.
fn stats_block(stats: &StatsSummary, units: &str, region_title: &str) -> String {
    let (days, nlat, nlon) = stats.shape;
    let description = stats.description.as_deref().unwrap_or("Ocean region");
    format!(
        "\n\nStats for {region_title}:\n  Average: {mean:.2}{units} (±{std:.2}{units})\n  Range: {min:.2}{units} to {max:.2}{units}\n  Measurements: {count}\n  Region info: {description}\n  Coverage: {days} days, {nlat}×{nlon} grid points",
        mean = stats.mean,
        std = stats.std_dev,
        min = stats.min,
        max = stats.max,
        count = stats.count,
    )
}

/// Capitalize the first letter of each whitespace-separated word.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocean_grid::{DatasetConfig, GridConfig};

    fn responder(dir: &std::path::Path) -> Responder {
        let config = DatasetConfig {
            data_dir: dir.to_path_buf(),
            seed: Some(21),
            source_url: None,
            grid: GridConfig {
                time_steps: 3,
                lat_step: 10.0,
                lon_step: 10.0,
                ..GridConfig::default()
            },
            ..DatasetConfig::default()
        };
        Responder::new(DatasetCache::new(config))
    }

    #[test]
    fn test_show_data_returns_map_and_stats_block() {
        let dir = tempfile::tempdir().expect("tempdir");
        let response = responder(dir.path()).respond("show temperature in Bay of Bengal");

        assert!(matches!(response.chart, Some(Chart::Heatmap(_))));
        assert!(response.text.contains("temperature distribution map"));
        assert!(response.text.contains("Stats for Bay Of Bengal"));
        assert!(response.text.contains("Average:"));
        assert!(response.text.contains("monsoon"));
    }

    #[test]
    fn test_trend_request_returns_line_chart() {
        let dir = tempfile::tempdir().expect("tempdir");
        let response = responder(dir.path()).respond("salinity Arabian Sea trend");

        assert!(matches!(response.chart, Some(Chart::Line(_))));
        assert!(response.text.contains("salinity trend"));
    }

    #[test]
    fn test_comparison_request() {
        let dir = tempfile::tempdir().expect("tempdir");
        let response = responder(dir.path()).respond("compare temperature and salinity in bengal");

        assert!(matches!(response.chart, Some(Chart::Comparison(_))));
        assert!(response.text.contains("side-by-side"));
    }

    #[test]
    fn test_help_and_greeting_have_no_chart() {
        let dir = tempfile::tempdir().expect("tempdir");
        let responder = responder(dir.path());

        let help = responder.respond("help");
        assert!(help.chart.is_none());
        assert!(help.text.contains("Available regions"));

        let greeting = responder.respond("hello");
        assert!(greeting.chart.is_none());
        assert!(!greeting.text.is_empty());
    }

    #[test]
    fn test_need_region_prompt_names_the_parameter() {
        let dir = tempfile::tempdir().expect("tempdir");
        let response = responder(dir.path()).respond("temperature");

        assert!(response.chart.is_none());
        assert!(response.text.contains("temperature data"));
        assert!(response.text.contains("Which region"));
    }

    #[test]
    fn test_unsupported_region_lists_supported_ones() {
        let dir = tempfile::tempdir().expect("tempdir");
        let response = responder(dir.path())
            .data_response("temperature", "sea of tranquility", ChartKind::Map)
            .expect("data_response never errors on unsupported regions");

        assert!(response.chart.is_none());
        assert!(response.text.contains("sea of tranquility"));
        for region in regions() {
            assert!(response.text.contains(&title_case(region.name)));
        }
    }

    #[test]
    fn test_unknown_input_gets_guidance() {
        let dir = tempfile::tempdir().expect("tempdir");
        let response = responder(dir.path()).respond("xyzzy");
        assert!(response.chart.is_none());
        assert!(response.text.contains("didn't understand"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("bay of bengal"), "Bay Of Bengal");
        assert_eq!(title_case("temperature"), "Temperature");
    }
}
