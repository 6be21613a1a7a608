//! Plain-text presentation of an analysis.
//!
//! Labels and highlighting come straight from the tags carried by
//! [`CodonUsageEntry`]; nothing here consults the genetic code.

use std::io::{self, Write};

use clap::ValueEnum;

use crate::analysis::AnalysisResult;
use crate::error::InvalidBase;
use crate::frequency::CodonUsageEntry;

/// Width of the protein block in the text report.
const WRAP_WIDTH: usize = 60;
/// Longest bar in the text chart.
const TEXT_BAR_WIDTH: usize = 40;
/// Characters shown either side of an invalid base in error messages.
const ERROR_CONTEXT: usize = 30;

/// How codons are labelled on charts and tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LabelStyle {
    /// Codon only, e.g. `ATG`
    #[default]
    Codon,
    /// Codon and three-letter amino acid, e.g. `ATG (Met)`
    #[value(name = "abbrev")]
    Abbreviation,
    /// Codon and amino acid name, e.g. `ATG (Methionine)`
    #[value(name = "full")]
    FullName,
}

impl LabelStyle {
    pub const ALL: [LabelStyle; 3] = [LabelStyle::Codon, LabelStyle::Abbreviation, LabelStyle::FullName];

    pub fn description(self) -> &'static str {
        match self {
            LabelStyle::Codon => "codon",
            LabelStyle::Abbreviation => "codon + abbreviation",
            LabelStyle::FullName => "codon + full name",
        }
    }
}

/// Label for one codon under `style`.
pub fn codon_label(entry: &CodonUsageEntry, style: LabelStyle) -> String {
    match style {
        LabelStyle::Codon => entry.codon.to_string(),
        LabelStyle::Abbreviation => format!("{} ({})", entry.codon, entry.amino_acid.abbreviation()),
        LabelStyle::FullName => format!("{} ({})", entry.codon, entry.amino_acid.full_name()),
    }
}

/// Marker shown next to start and stop codons.
pub fn class_marker(entry: &CodonUsageEntry) -> &'static str {
    if entry.is_start() {
        "start"
    } else if entry.is_stop() {
        "stop"
    } else {
        ""
    }
}

fn percentage(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |p| format!("{:.2}%", p))
}

/// Writes the full text report.
pub fn write_report<W: Write>(out: &mut W, result: &AnalysisResult, style: LabelStyle) -> io::Result<()> {
    let stats = &result.statistics;
    writeln!(out, "Sequence length: {} nt ({} codons)", stats.total_length, result.codons.len())?;
    writeln!(out, "GC content: {} ({} G/C)", percentage(stats.gc_percentage), stats.gc_count)?;
    writeln!(out, "AT content: {} ({} A/T)", percentage(stats.at_percentage), stats.at_count)?;
    if let Some(tail) = &result.incomplete_tail {
        writeln!(out, "Incomplete final codon ignored: {}", tail)?;
    }

    writeln!(out)?;
    writeln!(out, "Protein ({} aa):", result.translation.protein.len())?;
    let protein = result.translation.protein.to_one_letter();
    if protein.is_empty() {
        writeln!(out, "  (none)")?;
    } else {
        for line in textwrap::wrap(&protein, WRAP_WIDTH) {
            writeln!(out, "  {}", line)?;
        }
    }
    match (result.translation.stop_codon_position, result.translation.stop_codon) {
        (Some(position), Some(codon)) => {
            writeln!(out, "Translation stopped at codon {} ({})", position + 1, codon)?;
        }
        _ => writeln!(out, "No in-frame stop codon")?,
    }
    if result.read_through.contains('*') {
        writeln!(out, "Full-frame translation:")?;
        for line in textwrap::wrap(&result.read_through, WRAP_WIDTH) {
            writeln!(out, "  {}", line)?;
        }
    }

    writeln!(out)?;
    write_usage_table(out, result, style)
}

/// Writes the codon usage table with a text bar for each codon.
pub fn write_usage_table<W: Write>(out: &mut W, result: &AnalysisResult, style: LabelStyle) -> io::Result<()> {
    let usage = &result.codon_usage;
    writeln!(out, "Codon usage ({} codons, {} distinct):", usage.total(), usage.distinct())?;
    if usage.is_empty() {
        return writeln!(out, "  (no complete codons)");
    }

    let labels: Vec<String> = usage.iter().map(|e| codon_label(e, style)).collect();
    let label_width = labels.iter().map(|l| l.len()).max().unwrap_or(0);
    let max_count = usage.max_count().max(1);

    for (entry, label) in usage.iter().zip(&labels) {
        let bar_len = (entry.count * TEXT_BAR_WIDTH).div_ceil(max_count);
        let frequency = usage.relative_frequency(entry.codon).unwrap_or(0.0) * 100.0;
        writeln!(
            out,
            "  {:<width$}  {:>5}  {:>6.2}%  {:<bar$}  {}",
            label,
            entry.count,
            frequency,
            "#".repeat(bar_len),
            class_marker(entry),
            width = label_width,
            bar = TEXT_BAR_WIDTH,
        )?;
    }
    Ok(())
}

/// Explains a rejected sequence, pointing at the first invalid character.
///
/// `raw` is the text that was analysed; positions in `invalid` refer to it
/// with whitespace removed.
pub fn format_invalid_input(raw: &str, invalid: &[InvalidBase]) -> String {
    let Some(first) = invalid.first() else {
        return String::new();
    };
    let cleaned: Vec<char> = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let from = first.position.saturating_sub(ERROR_CONTEXT);
    let to = (first.position + ERROR_CONTEXT + 1).min(cleaned.len());
    let excerpt: String = cleaned[from..to].iter().collect();

    let mut message = format!(
        "Invalid character '{}' at position {} (only A, C, G and T are allowed):\n  {}\n  {}^",
        first.character,
        first.position + 1,
        excerpt,
        " ".repeat(first.position - from)
    );
    if invalid.len() > 1 {
        let others: Vec<String> = invalid[1..]
            .iter()
            .take(10)
            .map(|b| format!("'{}'@{}", b.character, b.position + 1))
            .collect();
        message.push_str(&format!("\n{} more invalid: {}", invalid.len() - 1, others.join(", ")));
        if invalid.len() > 11 {
            message.push_str(", ...");
        }
    }
    message
}
