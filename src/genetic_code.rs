//! The standard genetic code.
//!
//! This module provides:
//! - Amino acid names (one-letter, three-letter, full)
//! - Codon classification (start / stop / ordinary)
//! - A read-only 64-codon lookup table, built once per process

use std::fmt;
use std::sync::OnceLock;

use crate::codon::Codon;
use crate::error::Result;

/// Amino acids of the standard code, plus the stop signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    Ala,
    Arg,
    Asn,
    Asp,
    Cys,
    Gln,
    Glu,
    Gly,
    His,
    Ile,
    Leu,
    Lys,
    Met,
    Phe,
    Pro,
    Ser,
    Thr,
    Trp,
    Tyr,
    Val,
    Stop,
}

impl AminoAcid {
    /// Parses an NCBI one-letter code (`*` for stop).
    pub fn from_one_letter(c: char) -> Option<Self> {
        use AminoAcid::*;
        let aa = match c {
            'A' => Ala,
            'R' => Arg,
            'N' => Asn,
            'D' => Asp,
            'C' => Cys,
            'Q' => Gln,
            'E' => Glu,
            'G' => Gly,
            'H' => His,
            'I' => Ile,
            'L' => Leu,
            'K' => Lys,
            'M' => Met,
            'F' => Phe,
            'P' => Pro,
            'S' => Ser,
            'T' => Thr,
            'W' => Trp,
            'Y' => Tyr,
            'V' => Val,
            '*' => Stop,
            _ => return None,
        };
        Some(aa)
    }

    pub fn one_letter(self) -> char {
        use AminoAcid::*;
        match self {
            Ala => 'A',
            Arg => 'R',
            Asn => 'N',
            Asp => 'D',
            Cys => 'C',
            Gln => 'Q',
            Glu => 'E',
            Gly => 'G',
            His => 'H',
            Ile => 'I',
            Leu => 'L',
            Lys => 'K',
            Met => 'M',
            Phe => 'F',
            Pro => 'P',
            Ser => 'S',
            Thr => 'T',
            Trp => 'W',
            Tyr => 'Y',
            Val => 'V',
            Stop => '*',
        }
    }

    /// Three-letter abbreviation; `"Stop"` for the stop signal.
    pub fn abbreviation(self) -> &'static str {
        use AminoAcid::*;
        match self {
            Ala => "Ala",
            Arg => "Arg",
            Asn => "Asn",
            Asp => "Asp",
            Cys => "Cys",
            Gln => "Gln",
            Glu => "Glu",
            Gly => "Gly",
            His => "His",
            Ile => "Ile",
            Leu => "Leu",
            Lys => "Lys",
            Met => "Met",
            Phe => "Phe",
            Pro => "Pro",
            Ser => "Ser",
            Thr => "Thr",
            Trp => "Trp",
            Tyr => "Tyr",
            Val => "Val",
            Stop => "Stop",
        }
    }

    pub fn full_name(self) -> &'static str {
        use AminoAcid::*;
        match self {
            Ala => "Alanine",
            Arg => "Arginine",
            Asn => "Asparagine",
            Asp => "Aspartic acid",
            Cys => "Cysteine",
            Gln => "Glutamine",
            Glu => "Glutamic acid",
            Gly => "Glycine",
            His => "Histidine",
            Ile => "Isoleucine",
            Leu => "Leucine",
            Lys => "Lysine",
            Met => "Methionine",
            Phe => "Phenylalanine",
            Pro => "Proline",
            Ser => "Serine",
            Thr => "Threonine",
            Trp => "Tryptophan",
            Tyr => "Tyrosine",
            Val => "Valine",
            Stop => "Stop",
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Role of a codon in translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodonClass {
    Start,
    Stop,
    Ordinary,
}

/// What a single codon means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneticCodeEntry {
    pub codon: Codon,
    pub amino_acid: AminoAcid,
    pub class: CodonClass,
}

impl GeneticCodeEntry {
    pub fn is_start(&self) -> bool {
        self.class == CodonClass::Start
    }

    pub fn is_stop(&self) -> bool {
        self.class == CodonClass::Stop
    }
}

/// NCBI translation table 1, amino acids in TTT, TTC, TTA, ... order.
const STANDARD_NCBIEAA: &str = "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// The only initiation codon recognised by this code.
const START_CODON: &str = "ATG";

/// A genetic code table for translating codons to amino acids.
#[derive(Debug, Clone)]
pub struct GeneticCode {
    /// NCBI genetic code ID
    pub id: u8,
    /// Name of the genetic code
    pub name: &'static str,
    /// One entry per codon, indexed in NCBI order
    entries: Vec<GeneticCodeEntry>,
}

impl GeneticCode {
    /// Builds a table from a 64-character NCBI amino-acid string.
    fn new(id: u8, name: &'static str, ncbieaa: &str) -> Self {
        let entries = Codon::all()
            .zip(ncbieaa.chars())
            .map(|(codon, letter)| {
                let amino_acid = AminoAcid::from_one_letter(letter).unwrap_or(AminoAcid::Stop);
                let class = if amino_acid == AminoAcid::Stop {
                    CodonClass::Stop
                } else if codon.to_string() == START_CODON {
                    CodonClass::Start
                } else {
                    CodonClass::Ordinary
                };
                GeneticCodeEntry {
                    codon,
                    amino_acid,
                    class,
                }
            })
            .collect();

        Self { id, name, entries }
    }

    /// The standard code (NCBI table 1), shared for the life of the process.
    pub fn standard() -> &'static GeneticCode {
        static STANDARD: OnceLock<GeneticCode> = OnceLock::new();
        STANDARD.get_or_init(|| GeneticCode::new(1, "Standard", STANDARD_NCBIEAA))
    }

    /// Looks up a typed codon. Total over all 64 codons.
    pub fn entry(&self, codon: Codon) -> &GeneticCodeEntry {
        &self.entries[codon.ncbi_index()]
    }

    /// Looks up a codon given as text, e.g. `"ATG"`.
    ///
    /// Fails with `UnknownCodon` unless the text is exactly three uppercase
    /// bases. Codons produced by the splitter never hit that path.
    pub fn entry_for(&self, codon: &str) -> Result<&GeneticCodeEntry> {
        let codon: Codon = codon.parse()?;
        Ok(self.entry(codon))
    }

    pub fn is_start(&self, codon: Codon) -> bool {
        self.entry(codon).is_start()
    }

    pub fn is_stop(&self, codon: Codon) -> bool {
        self.entry(codon).is_stop()
    }

    /// All 64 entries in NCBI order.
    pub fn entries(&self) -> &[GeneticCodeEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    /// The published standard code, grouped by amino acid.
    const PUBLISHED: &[(&str, &[&str])] = &[
        ("Ala", &["GCT", "GCC", "GCA", "GCG"]),
        ("Arg", &["CGT", "CGC", "CGA", "CGG", "AGA", "AGG"]),
        ("Asn", &["AAT", "AAC"]),
        ("Asp", &["GAT", "GAC"]),
        ("Cys", &["TGT", "TGC"]),
        ("Gln", &["CAA", "CAG"]),
        ("Glu", &["GAA", "GAG"]),
        ("Gly", &["GGT", "GGC", "GGA", "GGG"]),
        ("His", &["CAT", "CAC"]),
        ("Ile", &["ATT", "ATC", "ATA"]),
        ("Leu", &["TTA", "TTG", "CTT", "CTC", "CTA", "CTG"]),
        ("Lys", &["AAA", "AAG"]),
        ("Met", &["ATG"]),
        ("Phe", &["TTT", "TTC"]),
        ("Pro", &["CCT", "CCC", "CCA", "CCG"]),
        ("Ser", &["TCT", "TCC", "TCA", "TCG", "AGT", "AGC"]),
        ("Thr", &["ACT", "ACC", "ACA", "ACG"]),
        ("Trp", &["TGG"]),
        ("Tyr", &["TAT", "TAC"]),
        ("Val", &["GTT", "GTC", "GTA", "GTG"]),
        ("Stop", &["TAA", "TAG", "TGA"]),
    ];

    #[test]
    fn test_matches_published_standard_code() {
        let code = GeneticCode::standard();
        let mut seen = 0;
        for (abbreviation, codons) in PUBLISHED {
            for codon in codons.iter() {
                let entry = code.entry_for(codon).unwrap();
                assert_eq!(entry.amino_acid.abbreviation(), *abbreviation, "codon {}", codon);
                seen += 1;
            }
        }
        assert_eq!(seen, 64);
    }

    #[test]
    fn test_table_is_total() {
        let code = GeneticCode::standard();
        assert_eq!(code.entries().len(), 64);
        for codon in Codon::all() {
            let entry = code.entry(codon);
            assert_eq!(entry.codon, codon);
            assert!(code.entry_for(&codon.to_string()).is_ok());
        }
    }

    #[test]
    fn test_classification() {
        let code = GeneticCode::standard();
        let starts: Vec<String> = code
            .entries()
            .iter()
            .filter(|e| e.is_start())
            .map(|e| e.codon.to_string())
            .collect();
        let mut stops: Vec<String> = code
            .entries()
            .iter()
            .filter(|e| e.is_stop())
            .map(|e| e.codon.to_string())
            .collect();
        stops.sort();

        assert_eq!(starts, vec!["ATG"]);
        assert_eq!(stops, vec!["TAA", "TAG", "TGA"]);

        let atg: Codon = "ATG".parse().unwrap();
        assert!(code.is_start(atg));
        assert!(!code.is_stop(atg));
        assert_eq!(code.entry(atg).amino_acid, AminoAcid::Met);

        let tga: Codon = "TGA".parse().unwrap();
        assert!(code.is_stop(tga));
        assert!(!code.is_start(tga));
    }

    #[test]
    fn test_entry_for_rejects_malformed_codons() {
        let code = GeneticCode::standard();
        assert_eq!(
            code.entry_for("AT"),
            Err(AnalysisError::UnknownCodon("AT".to_string()))
        );
        assert!(code.entry_for("").is_err());
        assert!(code.entry_for("ATGC").is_err());
    }

    #[test]
    fn test_amino_acid_labels() {
        assert_eq!(AminoAcid::Met.abbreviation(), "Met");
        assert_eq!(AminoAcid::Met.full_name(), "Methionine");
        assert_eq!(AminoAcid::Asp.full_name(), "Aspartic acid");
        assert_eq!(AminoAcid::Stop.one_letter(), '*');
        assert_eq!(AminoAcid::Stop.full_name(), "Stop");
        assert_eq!(AminoAcid::from_one_letter('W'), Some(AminoAcid::Trp));
        assert_eq!(AminoAcid::from_one_letter('X'), None);
    }

    #[test]
    fn test_standard_is_shared() {
        let a = GeneticCode::standard();
        let b = GeneticCode::standard();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.id, 1);
        assert_eq!(a.name, "Standard");
    }
}
