//! # codonscope - codon usage and translation
//!
//! Translates a DNA sequence with the standard genetic code, counts codon
//! usage and reports GC/AT composition.
//!
//! ## Architecture
//!
//! The analysis core is pure and has no I/O:
//! - `sequence`: nucleotide alphabet and input normalization
//! - `codon`: codons and the frame-0 splitter
//! - `genetic_code`: the standard codon table
//! - `translation`: codon-to-protein translation up to the first stop
//! - `frequency`: codon usage counts, tagged for display
//! - `stats`: GC / AT composition
//! - `analysis`: the `analyze` entry point tying these together
//!
//! Around it sit thin collaborators:
//! - `input`: text, file or bundled example acquisition
//! - `render`: label modes and the plain-text report
//! - `model`, `event`, `ui`, `controller`: the interactive ratatui chart

pub mod analysis;
pub mod codon;
pub mod controller;
pub mod error;
pub mod event;
pub mod frequency;
pub mod genetic_code;
pub mod input;
pub mod model;
pub mod render;
pub mod sequence;
pub mod stats;
pub mod translation;
pub mod ui;

pub use analysis::{analyze, AnalysisResult};
pub use error::AnalysisError;
