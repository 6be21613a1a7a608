//! TUI rendering module.
//!
//! Draws the codon usage bar chart with ratatui:
//! - Summary panel with composition and the translated protein
//! - Horizontal bars, one per observed codon, start/stop highlighted
//! - Status bar with the current label mode and key hints

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::frequency::CodonUsageEntry;
use crate::model::ChartState;
use crate::render::codon_label;

/// Height of the summary panel (including borders).
const SUMMARY_HEIGHT: u16 = 5;
/// Height of the status bar.
const STATUS_BAR_HEIGHT: u16 = 1;

const START_COLOR: Color = Color::Green;
const STOP_COLOR: Color = Color::Red;
const ORDINARY_COLOR: Color = Color::LightBlue;

/// Bar color for a codon, by class.
pub fn bar_color(entry: &CodonUsageEntry) -> Color {
    if entry.is_start() {
        START_COLOR
    } else if entry.is_stop() {
        STOP_COLOR
    } else {
        ORDINARY_COLOR
    }
}

/// Renders the complete UI.
pub fn render(frame: &mut Frame, state: &ChartState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SUMMARY_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_summary(frame, state, layout[0]);
    render_chart(frame, state, layout[1]);
    render_status_bar(frame, state, layout[2]);
}

fn render_summary(frame: &mut Frame, state: &ChartState, area: Rect) {
    let analysis = &state.analysis;
    let stats = &analysis.statistics;
    let percent = |p: Option<f64>| p.map_or_else(|| "n/a".to_string(), |p| format!("{:.2}%", p));

    let composition = format!(
        "Length {} nt | GC {} | AT {}{}",
        stats.total_length,
        percent(stats.gc_percentage),
        percent(stats.at_percentage),
        analysis
            .incomplete_tail
            .as_ref()
            .map(|t| format!(" | trailing {} ignored", t))
            .unwrap_or_default()
    );

    let stop = match (analysis.translation.stop_codon_position, analysis.translation.stop_codon) {
        (Some(position), Some(codon)) => format!("stopped at codon {} ({})", position + 1, codon),
        _ => "no stop codon".to_string(),
    };

    // Protein is truncated to the panel width; the text report has it in full
    let width = area.width.saturating_sub(2) as usize;
    let protein: String = analysis.translation.protein.to_one_letter().chars().take(width).collect();

    let lines = vec![
        Line::from(composition),
        Line::from(format!("Protein {} aa, {}", analysis.translation.protein.len(), stop)),
        Line::from(Span::styled(protein, Style::default().add_modifier(Modifier::BOLD))),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Codon usage: {}", state.source_name));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_chart(frame: &mut Frame, state: &ChartState, area: Rect) {
    let usage = &state.analysis.codon_usage;
    let visible_rows = area.height.saturating_sub(2) as usize;

    let bars: Vec<Bar> = usage
        .iter()
        .skip(state.first_row)
        .take(visible_rows)
        .map(|entry| {
            let color = bar_color(entry);
            Bar::default()
                .value(entry.count as u64)
                .label(Line::from(codon_label(entry, state.label_style)))
                .text_value(entry.count.to_string())
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let end = (state.first_row + bars.len()).min(usage.distinct());
    let title = format!(
        "Frequency [codons {}-{}/{}]",
        if bars.is_empty() { 0 } else { state.first_row + 1 },
        end,
        usage.distinct()
    );

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .max(usage.max_count().max(1) as u64)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

fn render_status_bar(frame: &mut Frame, state: &ChartState, area: Rect) {
    let legend = vec![
        Span::styled(" start ", Style::default().fg(Color::Black).bg(START_COLOR)),
        Span::raw(" "),
        Span::styled(" stop ", Style::default().fg(Color::Black).bg(STOP_COLOR)),
        Span::raw(" "),
    ];

    let hints = format!(
        " Labels: {} | 1/2/3 labels  j/k scroll  q quit ",
        state.label_style.description()
    );

    let mut spans = legend;
    spans.push(Span::styled(hints, Style::default().fg(Color::Black).bg(Color::Cyan)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Number of bars visible for a terminal of the given height.
pub fn calculate_visible_rows(terminal_height: u16) -> usize {
    // Account for summary, status bar and chart borders
    terminal_height.saturating_sub(SUMMARY_HEIGHT + STATUS_BAR_HEIGHT + 2) as usize
}
