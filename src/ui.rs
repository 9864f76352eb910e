//! TUI rendering of the chart viewer.
//!
//! Layout: the bar chart fills the screen above a one-line status bar.
//! The help text is drawn as a centered overlay.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::{ViewerMode, ViewerState};
use crate::output::chart::{bar_chart, bar_width_for, chart_title, BAR_GAP};

/// Height of the status bar.
const STATUS_BAR_HEIGHT: u16 = 1;

const HELP_LINES: [&str; 7] = [
    "h / Left       previous sequence",
    "l / Right      next sequence",
    "PgUp / PgDn    previous / next screen",
    "0 / $          first / last sequence",
    ":<n>           jump to sequence n",
    "q / Esc / :q   quit",
    "",
];

/// Renders the complete UI.
pub fn render(frame: &mut Frame, state: &ViewerState) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(STATUS_BAR_HEIGHT)])
        .split(area);

    let bar_width = bar_width_for(&state.results);
    let chart = bar_chart(
        state.visible_results(),
        state.first_bar,
        chart_title(&state.motif),
        bar_width,
    );
    frame.render_widget(chart, layout[0]);

    render_status_bar(frame, state, layout[1]);

    if state.show_help {
        render_help(frame, area);
    }
}

fn render_status_bar(frame: &mut Frame, state: &ViewerState, area: Rect) {
    let (mode_str, detail) = match &state.mode {
        ViewerMode::Normal => ("NORMAL", state.status_message.clone().unwrap_or_default()),
        ViewerMode::Command(cmd) => ("COMMAND", format!(":{}", cmd)),
    };

    let shown = state.visible_results().len();
    let position_info = if shown == 0 {
        "Seq 0/0 ".to_string()
    } else {
        format!(
            "Seq {}-{}/{} ",
            state.first_bar + 1,
            state.first_bar + shown,
            state.results.len()
        )
    };

    let left_content = format!(" {} | {} ", mode_str, detail);
    let padding = (area.width as usize).saturating_sub(left_content.len() + position_info.len());

    let status_line = Line::from(vec![
        Span::styled(left_content, Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::styled(" ".repeat(padding), Style::default().bg(Color::Cyan)),
        Span::styled(
            position_info,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(status_line), area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let width = HELP_LINES.iter().map(|l| l.len()).max().unwrap_or(0) as u16 + 4;
    let height = HELP_LINES.len() as u16 + 2;
    let popup = centered_rect(width, height, area);

    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|l| Line::from(*l))
        .chain(std::iter::once(Line::from(Span::styled(
            "press any key",
            Style::default().add_modifier(Modifier::ITALIC),
        ))))
        .collect();

    let block = Block::default().borders(Borders::ALL).title("Help");
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Number of bars that fit in a terminal of the given width.
pub fn calculate_visible_bars(terminal_width: u16, bar_width: u16) -> usize {
    // -2 for the chart borders
    let inner = terminal_width.saturating_sub(2) as usize;
    (inner / (bar_width + BAR_GAP) as usize).max(1)
}
