//! Nucleotide alphabet and sequence normalization.
//!
//! Raw input text (any case, with spaces or line breaks) is reduced to a
//! [`NucleotideSequence`]: a non-empty run of A, C, G and T. Anything else
//! is rejected with its position rather than silently dropped.

use std::fmt;

use log::trace;

use crate::error::{AnalysisError, InvalidBase, Result};

/// One of the four DNA bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

impl Nucleotide {
    /// Parses an uppercase base letter.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Nucleotide::A),
            'C' => Some(Nucleotide::C),
            'G' => Some(Nucleotide::G),
            'T' => Some(Nucleotide::T),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }

    /// True for G and C.
    pub fn is_gc(self) -> bool {
        matches!(self, Nucleotide::G | Nucleotide::C)
    }

    /// Position in the NCBI codon ordering (T, C, A, G).
    pub(crate) fn ncbi_index(self) -> usize {
        match self {
            Nucleotide::T => 0,
            Nucleotide::C => 1,
            Nucleotide::A => 2,
            Nucleotide::G => 3,
        }
    }

    pub(crate) const NCBI_ORDER: [Nucleotide; 4] =
        [Nucleotide::T, Nucleotide::C, Nucleotide::A, Nucleotide::G];
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A validated, non-empty DNA sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NucleotideSequence {
    bases: Vec<Nucleotide>,
}

impl NucleotideSequence {
    /// Returns the number of bases.
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    /// Always false: normalization never yields an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn bases(&self) -> &[Nucleotide] {
        &self.bases
    }
}

impl fmt::Display for NucleotideSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.bases {
            write!(f, "{}", base)?;
        }
        Ok(())
    }
}

/// Cleans and validates raw sequence text.
///
/// All whitespace is removed and letters are upper-cased. Every remaining
/// character must be one of A, C, G, T; otherwise the error lists each
/// offending character, upper-cased, with its 0-indexed position in the
/// cleaned text.
///
/// # Examples
///
/// ```
/// use codonscope::sequence::normalize;
///
/// let seq = normalize("atg gcc\ntaa").unwrap();
/// assert_eq!(seq.to_string(), "ATGGCCTAA");
/// ```
pub fn normalize(raw: &str) -> Result<NucleotideSequence> {
    let mut bases = Vec::with_capacity(raw.len());
    let mut invalid = Vec::new();

    let cleaned = raw.chars().filter(|c| !c.is_whitespace());
    for (position, c) in cleaned.enumerate() {
        let upper = c.to_ascii_uppercase();
        match Nucleotide::from_char(upper) {
            Some(base) => bases.push(base),
            None => invalid.push(InvalidBase { character: upper, position }),
        }
    }

    if !invalid.is_empty() {
        return Err(AnalysisError::InvalidAlphabet { invalid });
    }
    if bases.is_empty() {
        return Err(AnalysisError::EmptySequence);
    }

    trace!("normalized {} input chars to {} bases", raw.len(), bases.len());
    Ok(NucleotideSequence { bases })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uppercases_and_strips_whitespace() {
        let seq = normalize(" atg\tGcc\r\ntaa \n").unwrap();
        assert_eq!(seq.to_string(), "ATGGCCTAA");
        assert_eq!(seq.len(), 9);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("acgt acgt").unwrap();
        let twice = normalize(&once.to_string()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(normalize(""), Err(AnalysisError::EmptySequence));
        assert_eq!(normalize("  \n\t "), Err(AnalysisError::EmptySequence));
    }

    #[test]
    fn test_invalid_character_position_in_cleaned_text() {
        let err = normalize("ATGXCC").unwrap_err();
        assert_eq!(
            err.invalid_bases(),
            &[InvalidBase { character: 'X', position: 3 }]
        );

        // Whitespace does not count towards positions
        let err = normalize("A T G X").unwrap_err();
        assert_eq!(err.invalid_bases()[0].position, 3);

        // Reported after upper-casing
        let err = normalize("atgxcc").unwrap_err();
        assert_eq!(
            err.invalid_bases(),
            &[InvalidBase { character: 'X', position: 3 }]
        );
    }

    #[test]
    fn test_all_invalid_characters_reported() {
        let err = normalize("NATGRY").unwrap_err();
        let found: Vec<(char, usize)> = err
            .invalid_bases()
            .iter()
            .map(|b| (b.character, b.position))
            .collect();
        assert_eq!(found, vec![('N', 0), ('R', 4), ('Y', 5)]);
    }

    #[test]
    fn test_rna_and_non_ascii_rejected() {
        assert!(matches!(normalize("AUG"), Err(AnalysisError::InvalidAlphabet { .. })));
        let err = normalize("ATGé").unwrap_err();
        assert_eq!(err.invalid_bases()[0].character, 'é');
    }

    #[test]
    fn test_gc_classification() {
        assert!(Nucleotide::G.is_gc());
        assert!(Nucleotide::C.is_gc());
        assert!(!Nucleotide::A.is_gc());
        assert!(!Nucleotide::T.is_gc());
    }
}
