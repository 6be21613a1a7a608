//! Codon usage counts.
//!
//! Counting covers every complete codon in the frame, including codons after
//! the first stop. Each observed codon is tagged with its amino acid and
//! class so that renderers never need the genetic code themselves.

use std::collections::BTreeMap;

use crate::codon::Codon;
use crate::genetic_code::{AminoAcid, CodonClass, GeneticCode};

/// Count and labels for one observed codon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodonUsageEntry {
    pub codon: Codon,
    pub count: usize,
    pub amino_acid: AminoAcid,
    pub class: CodonClass,
}

impl CodonUsageEntry {
    pub fn is_start(&self) -> bool {
        self.class == CodonClass::Start
    }

    pub fn is_stop(&self) -> bool {
        self.class == CodonClass::Stop
    }
}

/// Sparse codon frequency table, iterated in codon order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodonUsage {
    entries: BTreeMap<Codon, CodonUsageEntry>,
    total: usize,
}

impl CodonUsage {
    /// Counts every codon in `codons`.
    pub fn tally(codons: &[Codon], code: &GeneticCode) -> Self {
        let mut entries: BTreeMap<Codon, CodonUsageEntry> = BTreeMap::new();

        for &codon in codons {
            entries
                .entry(codon)
                .or_insert_with(|| {
                    let info = code.entry(codon);
                    CodonUsageEntry {
                        codon,
                        count: 0,
                        amino_acid: info.amino_acid,
                        class: info.class,
                    }
                })
                .count += 1;
        }

        Self {
            entries,
            total: codons.len(),
        }
    }

    /// Sum of all counts; equals the number of complete codons.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct codons observed.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, codon: Codon) -> Option<&CodonUsageEntry> {
        self.entries.get(&codon)
    }

    /// Count for `codon`, zero when unobserved.
    pub fn count(&self, codon: Codon) -> usize {
        self.get(codon).map_or(0, |e| e.count)
    }

    /// `count / total`, or `None` when no codons were counted.
    pub fn relative_frequency(&self, codon: Codon) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.count(codon) as f64 / self.total as f64)
    }

    /// Entries in codon order (AAA ... TTT).
    pub fn iter(&self) -> impl Iterator<Item = &CodonUsageEntry> {
        self.entries.values()
    }

    pub fn max_count(&self) -> usize {
        self.iter().map(|e| e.count).max().unwrap_or(0)
    }

    /// Occurrences of start codons.
    pub fn start_count(&self) -> usize {
        self.iter().filter(|e| e.is_start()).map(|e| e.count).sum()
    }

    /// Occurrences of stop codons, in frame, anywhere in the sequence.
    pub fn stop_count(&self) -> usize {
        self.iter().filter(|e| e.is_stop()).map(|e| e.count).sum()
    }
}
