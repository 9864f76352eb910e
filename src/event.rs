//! Keyboard event handling for the chart viewer.
//!
//! - `h` / `Left`: scroll one bar left
//! - `l` / `Right`: scroll one bar right
//! - `PageUp` / `PageDown`: scroll one screen
//! - `0` or `Home`: first sequence
//! - `$` or `End`: last sequence
//! - `?`: show help
//! - `q` or `Esc`: quit
//! - `:`: enter command mode
//!   - `:q` or `:quit`: quit
//!   - `:h` or `:help`: show help
//!   - `:<number>`: jump to the n-th sequence

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::model::{ViewerMode, ViewerState};

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action (key not recognized)
    None,
    Quit,
    ScrollLeft,
    ScrollRight,
    PageLeft,
    PageRight,
    GotoFirst,
    GotoLast,
    ShowHelp,
    /// Dismiss the help overlay
    DismissHelp,
    EnterCommandMode,
    /// Add character to command buffer
    CommandChar(char),
    CommandBackspace,
    ExecuteCommand,
    CancelCommand,
    /// Terminal resized
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

/// Converts a crossterm event to an Action based on current viewer mode.
pub fn handle_event(event: Event, mode: &ViewerMode, show_help: bool) -> Action {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            handle_key_event(key_event, mode, show_help)
        }
        Event::Resize(width, height) => Action::Resize(width, height),
        _ => Action::None,
    }
}

fn handle_key_event(key: KeyEvent, mode: &ViewerMode, show_help: bool) -> Action {
    if show_help {
        return Action::DismissHelp;
    }

    match mode {
        ViewerMode::Normal => handle_normal_mode(key),
        ViewerMode::Command(_) => handle_command_mode(key),
    }
}

fn handle_normal_mode(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('h') | KeyCode::Left => Action::ScrollLeft,
        KeyCode::Char('l') | KeyCode::Right => Action::ScrollRight,
        KeyCode::PageUp => Action::PageLeft,
        KeyCode::PageDown => Action::PageRight,
        KeyCode::Char('0') | KeyCode::Home => Action::GotoFirst,
        KeyCode::Char('$') | KeyCode::End => Action::GotoLast,
        KeyCode::Char('?') => Action::ShowHelp,
        KeyCode::Char(':') => Action::EnterCommandMode,
        _ => Action::None,
    }
}

fn handle_command_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::ExecuteCommand,
        KeyCode::Esc => Action::CancelCommand,
        KeyCode::Backspace => Action::CommandBackspace,
        KeyCode::Char(c) => Action::CommandChar(c),
        _ => Action::None,
    }
}

/// Applies an action to the viewer state.
///
/// `Resize` is left to the controller, which knows the terminal size.
pub fn apply_action(state: &mut ViewerState, action: Action) {
    match action {
        Action::None | Action::Resize(_, _) => {}
        Action::Quit => state.should_quit = true,
        Action::ScrollLeft => state.scroll_left(1),
        Action::ScrollRight => state.scroll_right(1),
        Action::PageLeft => state.scroll_left(state.visible_bars),
        Action::PageRight => state.scroll_right(state.visible_bars),
        Action::GotoFirst => state.scroll_to_start(),
        Action::GotoLast => state.scroll_to_end(),
        Action::ShowHelp => state.show_help = true,
        Action::DismissHelp => state.show_help = false,
        Action::EnterCommandMode => {
            state.mode = ViewerMode::Command(String::new());
            state.status_message = None;
        }
        Action::CommandChar(c) => {
            if let ViewerMode::Command(ref mut buffer) = state.mode {
                buffer.push(c);
            }
        }
        Action::CommandBackspace => {
            if let ViewerMode::Command(ref mut buffer) = state.mode {
                if buffer.pop().is_none() {
                    state.mode = ViewerMode::Normal;
                }
            }
        }
        Action::CancelCommand => state.mode = ViewerMode::Normal,
        Action::ExecuteCommand => {
            if let ViewerMode::Command(command) = std::mem::take(&mut state.mode) {
                execute_command(state, command.trim());
            }
        }
    }
}

fn execute_command(state: &mut ViewerState, command: &str) {
    match command {
        "q" | "quit" => state.should_quit = true,
        "h" | "help" => state.show_help = true,
        "" => {}
        _ => match command.parse::<usize>() {
            Ok(n) if n >= 1 && n <= state.results.len() => {
                state.scroll_to_start();
                state.scroll_right(n - 1);
            }
            Ok(n) => {
                state.status_message = Some(format!(
                    "No sequence {} (have {})",
                    n,
                    state.results.len()
                ));
            }
            Err(_) => state.status_message = Some(format!("Unknown command: {}", command)),
        },
    }
}
