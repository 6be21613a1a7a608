//! Interactive chart session.
//!
//! [`TerminalGuard`] owns the raw-mode, alternate-screen terminal and puts
//! it back on drop, so an early `?` return still leaves a usable shell.
//! [`run_app`] draws the chart and feeds key presses through [`step`].

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::event::{apply_action, handle_event, poll_event, Action};
use crate::model::ChartState;
use crate::ui::{calculate_visible_rows, render};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

type ChartTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode and the alternate screen for as long as the guard lives.
pub struct TerminalGuard {
    terminal: ChartTerminal,
}

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut ChartTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Applies one action to the chart. Returns false once the user has quit.
///
/// A resize recomputes how many bars fit from the new terminal height.
pub fn step(state: &mut ChartState, action: Action) -> bool {
    if let Action::Resize(_, height) = action {
        state.update_viewport_size(calculate_visible_rows(height));
    }
    apply_action(state, action);
    !state.should_quit
}

/// Shows the chart until the user quits.
pub fn run_app(mut state: ChartState) -> Result<()> {
    let mut guard = TerminalGuard::enter()?;
    let terminal = guard.terminal();

    let height = terminal.size()?.height;
    state.update_viewport_size(calculate_visible_rows(height));

    loop {
        terminal.draw(|frame| render(frame, &state))?;

        let Some(event) = poll_event(POLL_INTERVAL) else {
            continue;
        };
        if !step(&mut state, handle_event(event)) {
            break;
        }
    }

    debug!("chart closed");
    Ok(())
}
