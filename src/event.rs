//! Keyboard event handling for the chart view.
//!
//! - `j` / `Down`: scroll down one codon
//! - `k` / `Up`: scroll up one codon
//! - `PageDown` / `Ctrl+D`, `PageUp` / `Ctrl+U`: scroll a page
//! - `1`, `2`, `3`: codon / codon + abbreviation / codon + full name labels
//! - `Tab`: next label mode
//! - `q`, `Esc`, `Ctrl+C`: quit

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::model::ChartState;
use crate::render::LabelStyle;

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No action (key not recognized)
    None,
    Quit,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    /// Select a label mode directly
    SetLabelStyle(LabelStyle),
    NextLabelStyle,
    /// Resize event (terminal resized)
    Resize(u16, u16),
}

/// Polls for keyboard events with a timeout.
///
/// Returns `None` if no event occurred within the timeout.
pub fn poll_event(timeout: Duration) -> Option<Event> {
    if event::poll(timeout).ok()? {
        event::read().ok()
    } else {
        None
    }
}

/// Converts a crossterm event to an Action.
pub fn handle_event(event: Event) -> Action {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => handle_key_event(key_event),
        Event::Resize(width, height) => Action::Resize(width, height),
        _ => Action::None,
    }
}

fn handle_key_event(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            KeyCode::Char('u') => Action::PageUp,
            KeyCode::Char('d') => Action::PageDown,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Char('1') => Action::SetLabelStyle(LabelStyle::Codon),
        KeyCode::Char('2') => Action::SetLabelStyle(LabelStyle::Abbreviation),
        KeyCode::Char('3') => Action::SetLabelStyle(LabelStyle::FullName),
        KeyCode::Tab => Action::NextLabelStyle,
        _ => Action::None,
    }
}

/// Applies an action to the chart state.
pub fn apply_action(state: &mut ChartState, action: Action) {
    match action {
        Action::None | Action::Resize(_, _) => {}
        Action::Quit => state.should_quit = true,
        Action::ScrollUp => state.scroll_up(1),
        Action::ScrollDown => state.scroll_down(1),
        Action::PageUp => state.scroll_up(state.page_size()),
        Action::PageDown => state.scroll_down(state.page_size()),
        Action::SetLabelStyle(style) => state.set_label_style(style),
        Action::NextLabelStyle => state.next_label_style(),
    }
}
