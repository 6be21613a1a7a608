//! Input acquisition.
//!
//! Raw sequence text comes from one of three places:
//! - text given directly (command line argument)
//! - a plain-text or single-record FASTA file
//! - the bundled example sequence
//!
//! This module only fetches text. Validation happens in [`crate::analyze`].
//!
//! ## Accepted file layout
//!
//! ```text
//! >optional_identifier optional description
//! ATGGCCATTGTAATGGGCCGCTGA
//! AAGGGTGCCCGATAG
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

/// A short coding sequence used when no input is given: start codon, a run
/// of sense codons, an in-frame stop, then a few trailing codons.
pub const EXAMPLE_SEQUENCE: &str = "ATGGCCATTGTAATGGGCCGCTGAAAGGGTGCCCGATAG";

/// Where raw sequence text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    File(PathBuf),
    Example,
}

/// Errors that can occur while reading input.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Empty file: {0}")]
    EmptyFile(PathBuf),

    #[error("Multiple FASTA records found (second header at line {line}); only one sequence can be analysed at a time")]
    MultipleRecords { line: usize },
}

/// Result type for input operations.
pub type InputResult<T> = Result<T, InputError>;

/// Returns the raw text for `source`.
pub fn read_input(source: &InputSource) -> InputResult<String> {
    match source {
        InputSource::Text(text) => Ok(text.clone()),
        InputSource::Example => Ok(EXAMPLE_SEQUENCE.to_string()),
        InputSource::File(path) => read_sequence_file(path),
    }
}

/// Reads a sequence file, dropping a leading FASTA header if present.
pub fn read_sequence_file<P: AsRef<Path>>(path: P) -> InputResult<String> {
    let path = path.as_ref();
    let io_error = |source| InputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let file_size = file.metadata().map_err(io_error)?.len() as usize;
    if file_size == 0 {
        return Err(InputError::EmptyFile(path.to_path_buf()));
    }

    let mut reader = BufReader::new(file);
    let mut content = String::with_capacity(file_size);
    reader.read_to_string(&mut content).map_err(io_error)?;

    debug!("read {} bytes from {}", content.len(), path.display());
    strip_fasta_header(&content)
}

/// Removes a single FASTA header line, keeping the sequence lines.
///
/// Only a `>` line ahead of any sequence line counts as the header. Plain
/// text without one is returned unchanged. Any other `>` line starts a
/// second record, which is rejected.
pub fn strip_fasta_header(content: &str) -> InputResult<String> {
    let mut seen_header = false;
    let mut seen_sequence = false;
    let mut sequence = String::with_capacity(content.len());

    for (index, line) in content.lines().enumerate() {
        if line.trim_start().starts_with('>') {
            if seen_header || seen_sequence {
                return Err(InputError::MultipleRecords { line: index + 1 });
            }
            seen_header = true;
            continue;
        }
        if !line.trim().is_empty() {
            seen_sequence = true;
        }
        sequence.push_str(line);
        sequence.push('\n');
    }

    Ok(sequence)
}
