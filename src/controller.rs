//! Chart viewer controller.
//!
//! This module runs the viewer loop:
//! - Terminal initialization and cleanup
//! - Event polling and handling
//! - State updates and rendering

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
use crate::model::{AnalysisResult, ViewerState};
use crate::output::chart::bar_width_for;
use crate::ui::{calculate_visible_bars, render};

/// The chart viewer.
pub struct App {
    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: ViewerState,
    /// Event poll timeout
    tick_rate: Duration,
    bar_width: u16,
}

impl App {
    /// Creates a viewer over the given state.
    pub fn new(state: ViewerState) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        let bar_width = bar_width_for(&state.results);

        Ok(Self {
            terminal,
            state,
            tick_rate: Duration::from_millis(50),
            bar_width,
        })
    }

    /// Runs the main loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        self.update_visible_bars()?;

        loop {
            self.terminal.draw(|frame| {
                render(frame, &self.state);
            })?;

            if let Some(event) = poll_event(self.tick_rate) {
                let action = handle_event(event, &self.state.mode, self.state.show_help);

                if let Action::Resize(_, _) = action {
                    self.update_visible_bars()?;
                }

                apply_action(&mut self.state, action);

                if self.state.should_quit {
                    break;
                }
            }
        }

        Ok(())
    }

    fn update_visible_bars(&mut self) -> Result<()> {
        let size = self.terminal.size()?;
        let visible = calculate_visible_bars(size.width, self.bar_width);
        debug!("Viewer width {} fits {} bar(s)", size.width, visible);
        self.state.update_visible_bars(visible);
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Opens the viewer on `results` and blocks until it is closed.
pub fn run_viewer(results: Vec<AnalysisResult>, motif: &str) -> Result<()> {
    let mut app = App::new(ViewerState::new(results, motif))?;
    app.run()
}
