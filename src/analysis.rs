//! One-call analysis of a raw DNA string.
//!
//! `analyze` runs the whole pipeline:
//! raw text -> normalize -> split -> {translate, tally} and composition stats.

use log::{debug, warn};

use crate::codon::{split_codons, Codon};
use crate::frequency::CodonUsage;
use crate::genetic_code::GeneticCode;
use crate::sequence::{normalize, NucleotideSequence};
use crate::stats::SequenceStatistics;
use crate::translation::{read_through, translate, Translation};

/// Everything derived from one input sequence.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub sequence: NucleotideSequence,
    pub codons: Vec<Codon>,
    pub incomplete_tail: Option<String>,
    pub translation: Translation,
    /// One-letter translation of every codon, `*` at stops.
    pub read_through: String,
    pub codon_usage: CodonUsage,
    pub statistics: SequenceStatistics,
}

/// Analyses raw sequence text with the standard genetic code.
///
/// Invalid or empty input is rejected before any analysis runs.
///
/// # Examples
///
/// ```
/// use codonscope::analyze;
///
/// let result = analyze("atg gcc taa").unwrap();
/// assert_eq!(result.translation.protein.to_string(), "MA");
/// assert!(result.translation.stopped_early);
/// ```
pub fn analyze(raw: &str) -> crate::error::Result<AnalysisResult> {
    let code = GeneticCode::standard();

    let sequence = normalize(raw)?;
    let split = split_codons(&sequence);
    if let Some(tail) = &split.incomplete_tail {
        warn!(
            "sequence length {} is not a multiple of 3; ignoring trailing {:?}",
            sequence.len(),
            tail
        );
    }

    let translation = translate(&split.codons, code);
    let read_through = read_through(&split.codons, code);
    let codon_usage = CodonUsage::tally(&split.codons, code);
    let statistics = SequenceStatistics::compute(&sequence);

    if codon_usage.stop_count() > 1 {
        debug!(
            "{} in-frame stop codons; translation ends at the first",
            codon_usage.stop_count()
        );
    }
    debug!(
        "analysed {} bases: {} codons, {} residues, {} distinct codons",
        sequence.len(),
        split.codons.len(),
        translation.protein.len(),
        codon_usage.distinct()
    );

    Ok(AnalysisResult {
        sequence,
        codons: split.codons,
        incomplete_tail: split.incomplete_tail,
        translation,
        read_through,
        codon_usage,
        statistics,
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::error::{AnalysisError, InvalidBase};
    use crate::genetic_code::AminoAcid;

    fn codon_strings(result: &AnalysisResult) -> Vec<String> {
        result.codons.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_start_stop_sequence() {
        let result = analyze("ATGGCCTAA").unwrap();

        assert_eq!(codon_strings(&result), vec!["ATG", "GCC", "TAA"]);
        assert_eq!(result.incomplete_tail, None);
        assert_eq!(
            result.translation.protein.residues(),
            &[AminoAcid::Met, AminoAcid::Ala]
        );
        assert!(result.translation.stopped_early);
        assert_eq!(result.translation.stop_codon_position, Some(2));
        assert_eq!(result.read_through, "MA*");

        let usage: Vec<(String, usize)> = result
            .codon_usage
            .iter()
            .map(|e| (e.codon.to_string(), e.count))
            .collect();
        assert_eq!(
            usage,
            vec![("ATG".into(), 1), ("GCC".into(), 1), ("TAA".into(), 1)]
        );

        let stats = result.statistics;
        assert_eq!(stats.gc_count, 4);
        assert_eq!(stats.at_count, 5);
        assert_eq!(stats.total_length, 9);
        assert_eq!(format!("{:.2}", stats.gc_percentage.unwrap()), "44.44");
        assert_eq!(format!("{:.2}", stats.at_percentage.unwrap()), "55.56");
    }

    #[test]
    fn test_lowercase_spaced_input_matches() {
        let plain = analyze("ATGGCCTAA").unwrap();
        let spaced = analyze("atg gcc taa").unwrap();

        assert_eq!(plain.sequence, spaced.sequence);
        assert_eq!(plain.codons, spaced.codons);
        assert_eq!(plain.translation, spaced.translation);
        assert_eq!(plain.codon_usage, spaced.codon_usage);
        assert_eq!(plain.statistics, spaced.statistics);
    }

    #[test]
    fn test_incomplete_final_codon() {
        let result = analyze("ATGGC").unwrap();
        assert_eq!(codon_strings(&result), vec!["ATG"]);
        assert_eq!(result.incomplete_tail.as_deref(), Some("GC"));
        assert_eq!(result.translation.protein.to_one_letter(), "M");
        assert!(!result.translation.stopped_early);
        assert_eq!(result.statistics.total_length, 5);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(analyze(""), Err(AnalysisError::EmptySequence)));
        assert!(matches!(analyze(" \n\t"), Err(AnalysisError::EmptySequence)));
    }

    #[test]
    fn test_invalid_character() {
        let err = analyze("ATGXCC").unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InvalidAlphabet {
                invalid: vec![InvalidBase { character: 'X', position: 3 }]
            }
        );
    }

    #[test]
    fn test_no_stop_codon() {
        let result = analyze("ATGGCCGGC").unwrap();
        assert_eq!(result.translation.protein.len(), 3);
        assert_eq!(result.translation.protein.to_three_letter(), "Met-Ala-Gly");
        assert!(!result.translation.stopped_early);
        assert_eq!(result.translation.stop_codon_position, None);
    }

    #[test]
    fn test_usage_counts_codons_after_stop() {
        let result = analyze("ATGTAAGCCGCC").unwrap();
        assert_eq!(result.translation.protein.len(), 1);
        assert_eq!(result.codon_usage.total(), 4);
        assert_eq!(result.codon_usage.count("GCC".parse().unwrap()), 2);
    }

    fn dna() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                Just('A'), Just('C'), Just('G'), Just('T'),
                Just('a'), Just('c'), Just('g'), Just('t'),
                Just(' '), Just('\n'),
            ],
            0..120,
        )
        .prop_map(|chars| chars.into_iter().collect())
    }

    fn has_bases(s: &str) -> bool {
        s.chars().any(|c| !c.is_whitespace())
    }

    proptest! {
        #[test]
        fn valid_input_is_accepted(raw in dna()) {
            prop_assume!(has_bases(&raw));
            let result = analyze(&raw).unwrap();
            prop_assert_eq!(result.statistics.total_length, result.sequence.len());
        }

        #[test]
        fn foreign_character_is_rejected(
            raw in dna(),
            bad in prop::char::any().prop_filter("outside the alphabet", |c| {
                !c.is_whitespace() && !"ACGTacgt".contains(*c)
            }),
            at in any::<prop::sample::Index>(),
        ) {
            let mut chars: Vec<char> = raw.chars().collect();
            let position = at.index(chars.len() + 1);
            chars.insert(position, bad);
            let raw: String = chars.into_iter().collect();
            let is_invalid_alphabet = matches!(analyze(&raw), Err(AnalysisError::InvalidAlphabet { .. }));
            prop_assert!(is_invalid_alphabet);
        }

        #[test]
        fn normalization_is_idempotent(raw in dna()) {
            prop_assume!(has_bases(&raw));
            let once = normalize(&raw).unwrap();
            let twice = normalize(&once.to_string()).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn usage_total_matches_codon_count(raw in dna()) {
            prop_assume!(has_bases(&raw));
            let result = analyze(&raw).unwrap();
            let summed: usize = result.codon_usage.iter().map(|e| e.count).sum();
            prop_assert_eq!(summed, result.codons.len());
            prop_assert_eq!(summed, result.codon_usage.total());
            prop_assert_eq!(summed, result.statistics.total_length / 3);
        }

        #[test]
        fn percentages_sum_to_hundred(raw in dna()) {
            prop_assume!(has_bases(&raw));
            let stats = analyze(&raw).unwrap().statistics;
            let total = stats.gc_percentage.unwrap() + stats.at_percentage.unwrap();
            prop_assert!((total - 100.0).abs() < 1e-9);
        }

        #[test]
        fn translation_ends_at_first_stop(raw in dna()) {
            prop_assume!(has_bases(&raw));
            let result = analyze(&raw).unwrap();
            let code = GeneticCode::standard();
            let first_stop = result.codons.iter().position(|&c| code.is_stop(c));
            match first_stop {
                Some(i) => {
                    prop_assert!(result.translation.stopped_early);
                    prop_assert_eq!(result.translation.stop_codon_position, Some(i));
                    prop_assert_eq!(result.translation.protein.len(), i);
                }
                None => {
                    prop_assert!(!result.translation.stopped_early);
                    prop_assert_eq!(result.translation.protein.len(), result.codons.len());
                }
            }
        }
    }
}
