//! ocean-chat REPL.
//!
//! Reads one message per line from stdin, answers via the responder, and
//! optionally writes chart descriptions as JSON files.

mod responder;
mod transcript;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use chart_builder::Chart;
use ocean_grid::{DatasetCache, DatasetConfig};

use responder::Responder;
use transcript::{ChatMessage, Transcript};

#[derive(Parser, Debug)]
#[command(name = "ocean-chat")]
#[command(about = "Conversational explorer for a synthetic ocean dataset")]
struct Args {
    /// Directory for the persisted dataset store
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Seed for the synthetic generator (entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// URL of a reference dataset to try before generating
    #[arg(long)]
    source_url: Option<String>,

    /// Directory to write chart JSON files into
    #[arg(long)]
    chart_dir: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = DatasetConfig::from_env();
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.source_url.is_some() {
        config.source_url = args.source_url;
    }
    config.validate().map_err(anyhow::Error::msg)?;

    info!(data_dir = %config.data_dir.display(), "starting ocean-chat");

    let responder = Responder::new(DatasetCache::new(config));
    let mut transcript = Transcript::new();

    let welcome = responder::help_text();
    println!("{welcome}\n");
    println!("Type \"exit\" or \"quit\" to leave.\n");
    transcript.push(ChatMessage::assistant(welcome, None));

    let stdin = io::stdin();
    loop {
        print!("you> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        transcript.push(ChatMessage::user(input));

        let response = responder.respond(input);
        println!("\n{}\n", response.text);

        if let (Some(dir), Some(chart)) = (&args.chart_dir, &response.chart) {
            match write_chart(dir, transcript.len(), chart) {
                Ok(path) => println!("(chart written to {})\n", path.display()),
                Err(e) => warn!(error = %e, "could not write chart"),
            }
        }

        transcript.push(ChatMessage::assistant(response.text, response.chart));
    }

    println!("Goodbye!");
    Ok(())
}

/// Write one chart description as a numbered JSON file.
fn write_chart(dir: &Path, index: usize, chart: &Chart) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("chart_{index:03}.json"));
    let file = std::fs::File::create(&path)?;
    serde_json::to_writer_pretty(file, chart)?;
    Ok(path)
}
