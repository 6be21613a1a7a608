//! Codon-to-protein translation.

use std::fmt;

use log::trace;

use crate::codon::Codon;
use crate::genetic_code::{AminoAcid, GeneticCode};

/// Amino acids produced by translation, in order. Never contains `Stop`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProteinSequence {
    residues: Vec<AminoAcid>,
}

impl ProteinSequence {
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn residues(&self) -> &[AminoAcid] {
        &self.residues
    }

    /// One-letter form, e.g. `"MA"`.
    pub fn to_one_letter(&self) -> String {
        self.residues.iter().map(|aa| aa.one_letter()).collect()
    }

    /// Three-letter form joined by dashes, e.g. `"Met-Ala"`.
    pub fn to_three_letter(&self) -> String {
        self.residues
            .iter()
            .map(|aa| aa.abbreviation())
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl fmt::Display for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_one_letter())
    }
}

/// Outcome of translating a codon list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub protein: ProteinSequence,
    /// True when an in-frame stop codon ended translation.
    pub stopped_early: bool,
    /// Codon index (0-based) of the terminating stop codon.
    pub stop_codon_position: Option<usize>,
    /// The terminating stop codon itself.
    pub stop_codon: Option<Codon>,
}

/// Translates codons in order until the first stop codon.
///
/// The stop codon contributes no residue. Without a stop codon every codon
/// is translated.
pub fn translate(codons: &[Codon], code: &GeneticCode) -> Translation {
    let mut residues = Vec::with_capacity(codons.len());

    for (position, &codon) in codons.iter().enumerate() {
        let entry = code.entry(codon);
        if entry.is_stop() {
            trace!("translation stopped at codon {} ({})", position, codon);
            return Translation {
                protein: ProteinSequence { residues },
                stopped_early: true,
                stop_codon_position: Some(position),
                stop_codon: Some(codon),
            };
        }
        residues.push(entry.amino_acid);
    }

    Translation {
        protein: ProteinSequence { residues },
        stopped_early: false,
        stop_codon_position: None,
        stop_codon: None,
    }
}

/// Translates every codon, writing `*` for stop codons.
///
/// This is the unterminated, whole-frame view of the sequence.
pub fn read_through(codons: &[Codon], code: &GeneticCode) -> String {
    codons
        .iter()
        .map(|&codon| code.entry(codon).amino_acid.one_letter())
        .collect()
}
