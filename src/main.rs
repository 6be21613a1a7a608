//! codonscope - codon usage and protein translation
//!
//! ## Usage
//!
//! ```bash
//! codonscope ATGGCCTAA                 # analyse a sequence given inline
//! codonscope -i sequence.txt -l full   # plain text or single-record FASTA
//! codonscope --example --tui           # interactive chart of the bundled example
//! ```

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use env_logger::Env;
use log::{debug, info};

use codonscope::controller::run_app;
use codonscope::input::{read_input, InputSource};
use codonscope::model::ChartState;
use codonscope::render::{format_invalid_input, write_report, LabelStyle};
use codonscope::{analyze, AnalysisError};

/// Environment variable holding the log filter (e.g. `debug`).
const LOG_ENV: &str = "CODONSCOPE_LOG";

/// codonscope - translate DNA, count codon usage and chart it
///
/// Without -o/--output the report is printed to stdout.
/// With --tui an interactive bar chart is opened instead.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("source").args(["sequence", "input", "example"])))]
struct Args {
    /// DNA sequence to analyse (A, C, G, T; case and whitespace ignored)
    sequence: Option<String>,

    /// Read the sequence from a plain text or single-record FASTA file
    #[arg(short = 'i', long = "input")]
    input: Option<PathBuf>,

    /// Analyse the bundled example sequence (default when no input is given)
    #[arg(long = "example")]
    example: bool,

    /// Codon label mode for the chart and table
    #[arg(short = 'l', long = "labels", value_enum, default_value = "codon")]
    labels: LabelStyle,

    /// Output file for the report. Use "-" for stdout.
    #[arg(short = 'o', long = "output", default_value = "-")]
    output: String,

    /// Open the interactive codon usage chart
    #[arg(long = "tui", conflicts_with = "output")]
    tui: bool,

    /// Verbose logging on stderr (overridden by CODONSCOPE_LOG)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    fn source(&self) -> InputSource {
        if self.example {
            return InputSource::Example;
        }
        match (&self.sequence, &self.input) {
            (Some(text), _) => InputSource::Text(text.clone()),
            (None, Some(path)) => InputSource::File(path.clone()),
            (None, None) => InputSource::Example,
        }
    }
}

fn source_name(source: &InputSource) -> String {
    match source {
        InputSource::Text(_) => "command line".to_string(),
        InputSource::File(path) => path.display().to_string(),
        InputSource::Example => "example".to_string(),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV, default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = args.source();
    info!("reading sequence from {}", source_name(&source));
    let raw = read_input(&source)?;

    let result = match analyze(&raw) {
        Ok(result) => result,
        Err(AnalysisError::InvalidAlphabet { invalid }) => {
            anyhow::bail!("{}", format_invalid_input(&raw, &invalid));
        }
        Err(e) => return Err(e.into()),
    };

    if args.tui {
        debug!("opening chart with {:?} labels", args.labels);
        return run_app(ChartState::new(result, source_name(&source), args.labels));
    }

    if args.output == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_report(&mut handle, &result, args.labels)?;
    } else {
        let file = File::create(&args.output)
            .with_context(|| format!("Failed to create {}", args.output))?;
        let mut writer = BufWriter::new(file);
        write_report(&mut writer, &result, args.labels)?;
        writer.flush()?;
        eprintln!("Wrote report to {}", args.output);
    }

    Ok(())
}
