//! CLI binary for shelf-summary.
//!
//! A thin shim over the library crate: reads text or scraped-book JSON,
//! runs it through the library and prints the result.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use shelf_summary::{
    iso_date, parse_publication_date, sort_name, BookPacket, NormalizerConfig, ScrapedBook,
    StageOutcome, SummaryNormalizer,
};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Clean a summary saved from a book page
  shelf-summary clean summary.txt

  # Clean from stdin and show which stages changed the text
  pbpaste | shelf-summary clean --explain

  # Extra boilerplate phrases from a config file
  shelf-summary clean --config phrases.json summary.txt

  # Sort form of an author name
  shelf-summary sort-name "Ursula K. Le Guin"

  # Publication date as YYYY-MM-DD
  shelf-summary pub-date "First published August 1, 1965"

  # Page-property payload for a scraped book
  shelf-summary packet book.json --genres "Fantasy,Classics"

CONFIG FILE (JSON, every key optional):
  {
    "boilerplate": [
      { "id": "alternate-cover-link",
        "text": "An alternate cover for this ISBN can be found here" }
    ],
    "truncation": { "max_chars": 2000, "keep_chars": 1995, "marker": " ..." }
  }

ENVIRONMENT VARIABLES:
  SHELF_SUMMARY_CONFIG   Default for --config
  RUST_LOG               Overrides the log filter (e.g. shelf_summary=debug)
"#;

/// Normalise scraped book summaries and map book fields to page properties.
#[derive(Parser, Debug)]
#[command(
    name = "shelf-summary",
    version,
    about = "Normalise scraped book summaries into display-ready prose",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, global = true, env = "SHELF_SUMMARY_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true, env = "SHELF_SUMMARY_QUIET")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Clean one raw summary.
    Clean {
        /// Text file to read; stdin when omitted or "-".
        input: Option<PathBuf>,

        /// JSON config with boilerplate phrases and truncation limits.
        #[arg(long, env = "SHELF_SUMMARY_CONFIG")]
        config: Option<PathBuf>,

        /// Override the maximum summary length in characters.
        #[arg(long)]
        max_chars: Option<usize>,

        /// Print a per-stage report to stderr.
        #[arg(long)]
        explain: bool,

        /// Output {"summary", "stages"} as JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },

    /// Print the "Last, First" sort form of an author name.
    SortName { name: String },

    /// Print a publication string as a YYYY-MM-DD date.
    PubDate { text: String },

    /// Map scraped book fields (JSON) to a page-property update payload.
    Packet {
        /// JSON file holding the scraped fields; stdin when omitted or "-".
        input: Option<PathBuf>,

        /// Only the rating properties.
        #[arg(long)]
        refresh: bool,

        /// Comma-separated genre options the database accepts.
        #[arg(long, value_delimiter = ',')]
        genres: Option<Vec<String>>,

        /// JSON config with boilerplate phrases and truncation limits.
        #[arg(long, env = "SHELF_SUMMARY_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct CleanOutput<'a> {
    summary: &'a str,
    stages: &'a [StageOutcome],
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Clean {
            input,
            config,
            max_chars,
            explain,
            json,
        } => {
            let normalizer = build_normalizer(config.as_deref(), max_chars)?;
            let raw = read_input(input.as_deref())?;
            let (summary, stages) = normalizer.process_traced(&raw);

            if explain && !cli.quiet {
                print_stage_report(&stages);
            }
            if json {
                let out = CleanOutput {
                    summary: &summary,
                    stages: &stages,
                };
                let json =
                    serde_json::to_string_pretty(&out).context("Failed to serialise output")?;
                println!("{json}");
            } else {
                write_stdout(&summary)?;
            }
        }
        Command::SortName { name } => println!("{}", sort_name(&name)),
        Command::PubDate { text } => {
            let date = parse_publication_date(&text).context("Failed to parse date")?;
            println!("{}", iso_date(date));
        }
        Command::Packet {
            input,
            refresh,
            genres,
            config,
        } => {
            let normalizer = build_normalizer(config.as_deref(), None)?;
            let raw = read_input(input.as_deref())?;
            let scraped: ScrapedBook =
                serde_json::from_str(&raw).context("Input is not valid scraped-book JSON")?;
            let packet = BookPacket::from_scraped(scraped, &normalizer);
            debug!("Packet for '{}' by {}", packet.title, packet.author);

            let update = if refresh {
                packet.refresh_update()
            } else {
                packet.page_update(genres.as_deref())
            }
            .context("Failed to build page update")?;

            let json =
                serde_json::to_string_pretty(&update).context("Failed to serialise payload")?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Load the config file (if any) and apply CLI overrides.
fn build_normalizer(config: Option<&Path>, max_chars: Option<usize>) -> Result<SummaryNormalizer> {
    let mut config = match config {
        Some(path) => NormalizerConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => NormalizerConfig::default(),
    };

    if let Some(max) = max_chars {
        // Keep the marker inside the new limit.
        let marker_len = config.truncation.marker.chars().count();
        config.truncation.max_chars = max;
        config.truncation.keep_chars = max.saturating_sub(marker_len + 1);
        config.validate().context("Invalid --max-chars")?;
    }

    Ok(SummaryNormalizer::new(config))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read input from {:?}", p)),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn write_stdout(text: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(text.as_bytes())
        .context("Failed to write to stdout")?;
    if !text.ends_with('\n') {
        handle.write_all(b"\n").ok();
    }
    Ok(())
}

fn print_stage_report(stages: &[StageOutcome]) {
    for (i, outcome) in stages.iter().enumerate() {
        let mark = if outcome.changed { green("✓") } else { dim("·") };
        eprintln!(
            "  {} {:>2}. {:<22} {}",
            mark,
            i + 1,
            outcome.stage.name(),
            dim(&format!("{:>5} → {:<5} chars", outcome.chars_before, outcome.chars_after)),
        );
    }
    let changed = stages.iter().filter(|o| o.changed).count();
    eprintln!(
        "{} {} of {} stages changed the text",
        green("✔"),
        bold(&changed.to_string()),
        stages.len()
    );
}
