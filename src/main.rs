use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand, ValueEnum};
use medterm::{
    MedTerm,
    lookup::{self, LookupOutcome},
    output::{self, Format},
};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "medterm", version, about = "Find complex medical terms in text")]
struct Cli {
    /// Minimum normalized length for a clickable term.
    #[arg(long, global = true, default_value_t = medterm::context::DEFAULT_MIN_TERM_LEN)]
    min_term_len: usize,

    /// Minimum normalized length for the pattern fallback.
    #[arg(long, global = true, default_value_t = medterm::context::DEFAULT_MIN_PATTERN_LEN)]
    min_pattern_len: usize,

    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Split text into plain runs and clickable terms.
    Segment {
        /// Input file; stdin when omitted.
        file: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Classify individual words.
    Classify {
        #[arg(required = true)]
        words: Vec<String>,
        /// Print the deciding rule as JSON.
        #[arg(long)]
        explain: bool,
    },
    /// Render a markdown-ish analysis into segmented blocks (JSON).
    Render { file: Option<PathBuf> },
    /// Shape a saved dictionary response into at most three definitions.
    Define { file: Option<PathBuf> },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Html,
    Marked,
}

impl From<OutputFormat> for Format {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => Format::Json,
            OutputFormat::Html => Format::Html,
            OutputFormat::Marked => Format::Marked,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "medterm=debug" } else { "medterm=info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .init();
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let detector = MedTerm::builder()
        .min_term_len(cli.min_term_len)
        .min_pattern_len(cli.min_pattern_len)
        .build();
    debug!(ctx = ?detector.context(), "detector ready");

    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::Segment { file, format } => {
            let text = read_input(file.as_ref())?;
            let segments = detector.segment(&text);
            info!(
                terms = segments.iter().filter(|s| s.is_term()).count(),
                "segmented input"
            );
            let out = output::format_segments(&segments, format.into())
                .context("failed to serialize segments")?;
            writeln!(stdout, "{out}")?;
        }
        Command::Classify { words, explain } => {
            for word in &words {
                if explain {
                    let c = detector.explain(word);
                    writeln!(stdout, "{}", serde_json::to_string(&c)?)?;
                } else {
                    writeln!(stdout, "{word}\t{}", detector.classify(word))?;
                }
            }
        }
        Command::Render { file } => {
            let text = read_input(file.as_ref())?;
            let blocks = detector.render(&text);
            let out = output::blocks_to_json(&blocks, detector.context())
                .context("failed to serialize blocks")?;
            writeln!(stdout, "{out}")?;
        }
        Command::Define { file } => {
            let body = read_input(file.as_ref())?;
            let outcome = lookup::parse_response(&body);
            if let LookupOutcome::NotAvailable = outcome {
                info!("no definitions available");
            }
            writeln!(stdout, "{}", serde_json::to_string_pretty(&outcome)?)?;
        }
    }
    Ok(())
}
