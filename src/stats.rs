//! Base composition statistics.

use crate::sequence::{Nucleotide, NucleotideSequence};

/// GC / AT composition of a sequence.
///
/// Computed over every base, including an incomplete trailing codon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceStatistics {
    pub gc_count: usize,
    pub at_count: usize,
    pub total_length: usize,
    /// `None` when `total_length` is zero.
    pub gc_percentage: Option<f64>,
    /// `None` when `total_length` is zero.
    pub at_percentage: Option<f64>,
}

impl SequenceStatistics {
    pub fn compute(sequence: &NucleotideSequence) -> Self {
        Self::from_bases(sequence.bases())
    }

    /// Computes statistics over raw bases, which may be empty.
    pub fn from_bases(bases: &[Nucleotide]) -> Self {
        let gc_count = bases.iter().filter(|b| b.is_gc()).count();
        let at_count = bases.len() - gc_count;
        let total_length = gc_count + at_count;

        let (gc_percentage, at_percentage) = if total_length == 0 {
            (None, None)
        } else {
            let total = total_length as f64;
            (
                Some(100.0 * gc_count as f64 / total),
                Some(100.0 * at_count as f64 / total),
            )
        };

        Self {
            gc_count,
            at_count,
            total_length,
            gc_percentage,
            at_percentage,
        }
    }

    /// GC proportion in `[0, 1]`.
    pub fn gc_fraction(&self) -> Option<f64> {
        self.gc_percentage.map(|p| p / 100.0)
    }

    /// AT proportion in `[0, 1]`.
    pub fn at_fraction(&self) -> Option<f64> {
        self.at_percentage.map(|p| p / 100.0)
    }
}
