use anyhow::{Context, Result};
use clap::Parser;
use runfinder::finder;
use runfinder::model::{InputSource, OutputMode, RunConfig, RunReport};
use runfinder::storage;
use runfinder::text_summary::build_text_summary;
use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

pub const PROMPT: &str = "Enter a sequence of integers separated by spaces:";
pub const EMPTY_INPUT_MESSAGE: &str =
    "Please provide a sequence of integers separated by spaces.";

#[derive(Debug, Parser, Clone)]
#[command(
    name = "runfinder",
    version,
    about = "Find the longest contiguous strictly increasing run in a sequence of integers",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Integers to scan (prompts on stdin when omitted)
    #[arg(value_name = "NUMBERS", conflicts_with = "file")]
    pub numbers: Vec<String>,

    /// Read the integers from a file instead
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Print the JSON report instead of text
    #[arg(long, conflicts_with = "text")]
    pub json: bool,

    /// Print text output (default)
    #[arg(long)]
    pub text: bool,

    /// Add token count and run position to the text output
    #[arg(long)]
    pub details: bool,

    /// Export the report as JSON
    #[arg(long)]
    pub export_json: Option<PathBuf>,

    /// Export the run as CSV
    #[arg(long)]
    pub export_csv: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Shorthand for --log-level debug
    #[arg(short, long)]
    pub verbose: bool,
}

/// Build a `RunConfig` from CLI arguments.
pub fn build_config(args: &Cli) -> RunConfig {
    let input = if !args.numbers.is_empty() {
        InputSource::Args(args.numbers.join(" "))
    } else if let Some(path) = args.file.clone() {
        InputSource::File(path)
    } else {
        InputSource::Prompt
    };

    RunConfig {
        input,
        output: if args.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        },
        detailed: args.details,
        export_json: args.export_json.clone(),
        export_csv: args.export_csv.clone(),
    }
}

pub fn run(args: Cli) -> Result<()> {
    let cfg = build_config(&args);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    execute(&cfg, &mut stdin.lock(), &mut stdout.lock(), &mut stderr.lock())
}

/// Acquire the input, scan it and write the result.
///
/// Blank input prints a hint and returns without touching the finder. Anything
/// that is not for a script to read (prompt, hint) goes to `err` in JSON mode
/// so stdout stays valid JSON.
pub fn execute<R: BufRead, W: Write, E: Write>(
    cfg: &RunConfig,
    input: &mut R,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    let text = match &cfg.input {
        InputSource::Args(line) => {
            debug!("reading numbers from arguments");
            line.clone()
        }
        InputSource::File(path) => {
            debug!(path = %path.display(), "reading numbers from file");
            fs::read_to_string(path)
                .with_context(|| format!("read input file {}", path.display()))?
        }
        InputSource::Prompt => {
            match cfg.output {
                OutputMode::Text => writeln!(out, "{PROMPT}")?,
                OutputMode::Json => writeln!(err, "{PROMPT}")?,
            }
            out.flush()?;
            let mut line = String::new();
            input.read_line(&mut line).context("read input line")?;
            line
        }
    };

    if text.trim().is_empty() {
        debug!("blank input, skipping scan");
        match cfg.output {
            OutputMode::Text => writeln!(out, "{EMPTY_INPUT_MESSAGE}")?,
            OutputMode::Json => writeln!(err, "{EMPTY_INPUT_MESSAGE}")?,
        }
        return Ok(());
    }

    let report = finder::analyze(&text).context("failed to parse input")?;
    debug!(tokens = report.token_count, run = ?report.run, "scan complete");

    match cfg.output {
        OutputMode::Text => {
            for line in build_text_summary(&report, cfg.detailed).lines {
                writeln!(out, "{line}")?;
            }
        }
        OutputMode::Json => {
            let json = serde_json::to_string_pretty(&report)?;
            writeln!(out, "{json}")?;
        }
    }

    handle_exports(cfg, &report)
}

/// Handle export operations (JSON and CSV) for both text and JSON modes.
fn handle_exports(cfg: &RunConfig, report: &RunReport) -> Result<()> {
    if let Some(p) = cfg.export_json.as_deref() {
        storage::export_json(p, report)?;
    }
    if let Some(p) = cfg.export_csv.as_deref() {
        storage::export_csv(p, report)?;
    }
    Ok(())
}
