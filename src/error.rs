//! Errors raised by the analysis core.
//!
//! Only the normalizer produces user-facing errors. `UnknownCodon` signals a
//! broken internal contract (a codon that is not three valid bases) and is
//! not expected to reach a caller in normal use.

use std::fmt;

use thiserror::Error;

/// A character rejected by the normalizer, with its position in the
/// whitespace-stripped sequence (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidBase {
    pub character: char,
    pub position: usize,
}

impl fmt::Display for InvalidBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' at position {}", self.character, self.position)
    }
}

/// Errors that can occur while analysing a sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Empty sequence: no nucleotides left after removing whitespace")]
    EmptySequence,

    #[error("Invalid nucleotide {}", describe_invalid(.invalid))]
    InvalidAlphabet { invalid: Vec<InvalidBase> },

    #[error("Unknown codon {0:?}: a codon is exactly three of A, C, G, T")]
    UnknownCodon(String),
}

impl AnalysisError {
    /// Every offending character, in sequence order. Empty for other variants.
    pub fn invalid_bases(&self) -> &[InvalidBase] {
        match self {
            AnalysisError::InvalidAlphabet { invalid } => invalid,
            _ => &[],
        }
    }
}

fn describe_invalid(invalid: &[InvalidBase]) -> String {
    let Some(first) = invalid.first() else {
        return "(none recorded)".to_string();
    };
    let mut message = format!("{} (only A, C, G and T are allowed)", first);
    if invalid.len() > 1 {
        message.push_str(&format!(" and {} more", invalid.len() - 1));
    }
    message
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
