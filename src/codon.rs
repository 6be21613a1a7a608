//! Codons and the reading-frame splitter.

use std::fmt;
use std::str::FromStr;

use crate::error::AnalysisError;
use crate::sequence::{Nucleotide, NucleotideSequence};

/// Exactly three bases.
///
/// Ordering follows the codon text (`AAA` < `AAC` < ... < `TTT`), which is
/// the order used when listing codon usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codon([Nucleotide; 3]);

impl Codon {
    pub fn new(first: Nucleotide, second: Nucleotide, third: Nucleotide) -> Self {
        Self([first, second, third])
    }

    pub fn bases(&self) -> [Nucleotide; 3] {
        self.0
    }

    /// Index into a 64-entry table laid out in NCBI order (TTT, TTC, TTA, ...).
    pub(crate) fn ncbi_index(&self) -> usize {
        let [b1, b2, b3] = self.0;
        b1.ncbi_index() * 16 + b2.ncbi_index() * 4 + b3.ncbi_index()
    }

    /// All 64 codons in NCBI order.
    pub fn all() -> impl Iterator<Item = Codon> {
        Nucleotide::NCBI_ORDER.into_iter().flat_map(|b1| {
            Nucleotide::NCBI_ORDER.into_iter().flat_map(move |b2| {
                Nucleotide::NCBI_ORDER
                    .into_iter()
                    .map(move |b3| Codon::new(b1, b2, b3))
            })
        })
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [b1, b2, b3] = self.0;
        write!(f, "{}{}{}", b1, b2, b3)
    }
}

impl FromStr for Codon {
    type Err = AnalysisError;

    /// Parses three uppercase bases, e.g. `"ATG"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || AnalysisError::UnknownCodon(s.to_string());
        let mut chars = s.chars().map(Nucleotide::from_char);
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(Some(b1)), Some(Some(b2)), Some(Some(b3)), None) => Ok(Codon::new(b1, b2, b3)),
            _ => Err(unknown()),
        }
    }
}

/// Result of splitting a sequence into frame-0 codons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodonSplit {
    /// Complete codons in reading order.
    pub codons: Vec<Codon>,
    /// The trailing 1 or 2 bases that do not fill a codon, if any.
    pub incomplete_tail: Option<String>,
}

/// Splits a sequence into consecutive, non-overlapping codons starting at
/// position 0.
pub fn split_codons(sequence: &NucleotideSequence) -> CodonSplit {
    let chunks = sequence.bases().chunks_exact(3);
    let remainder = chunks.remainder();

    let incomplete_tail = if remainder.is_empty() {
        None
    } else {
        Some(remainder.iter().map(|b| b.as_char()).collect())
    };

    let codons = chunks.map(|c| Codon::new(c[0], c[1], c[2])).collect();

    CodonSplit {
        codons,
        incomplete_tail,
    }
}
