//! View state for the interactive codon usage chart.

use crate::analysis::AnalysisResult;
use crate::render::LabelStyle;

/// The complete chart state.
#[derive(Debug)]
pub struct ChartState {
    /// The analysis being displayed
    pub analysis: AnalysisResult,
    /// Name of the input shown in the title
    pub source_name: String,
    /// Current codon label mode
    pub label_style: LabelStyle,
    /// Index of the first visible codon bar
    pub first_row: usize,
    /// Number of bars that fit in the chart
    pub visible_rows: usize,
    /// Whether the application should quit
    pub should_quit: bool,
}

impl ChartState {
    pub fn new(analysis: AnalysisResult, source_name: impl Into<String>, label_style: LabelStyle) -> Self {
        Self {
            analysis,
            source_name: source_name.into(),
            label_style,
            first_row: 0,
            visible_rows: 0,
            should_quit: false,
        }
    }

    /// Number of bars (distinct codons).
    pub fn row_count(&self) -> usize {
        self.analysis.codon_usage.distinct()
    }

    /// Updates the chart height based on terminal dimensions.
    pub fn update_viewport_size(&mut self, rows: usize) {
        self.visible_rows = rows;
        self.clamp_viewport();
    }

    pub fn set_label_style(&mut self, style: LabelStyle) {
        self.label_style = style;
    }

    /// Switches to the next label mode, wrapping around.
    pub fn next_label_style(&mut self) {
        let index = LabelStyle::ALL
            .iter()
            .position(|&s| s == self.label_style)
            .unwrap_or(0);
        self.label_style = LabelStyle::ALL[(index + 1) % LabelStyle::ALL.len()];
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.first_row = self.first_row.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.first_row += rows;
        self.clamp_viewport();
    }

    pub fn page_size(&self) -> usize {
        self.visible_rows.max(1)
    }

    /// Keeps the last page full instead of scrolling past the end.
    fn clamp_viewport(&mut self) {
        let max_first = self.row_count().saturating_sub(self.visible_rows);
        self.first_row = self.first_row.min(max_first);
    }
}
