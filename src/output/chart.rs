//! Bar chart of motif counts.
//!
//! The chart is a ratatui [`BarChart`]: the interactive viewer draws it on
//! the terminal, and [`TextBarChart`] renders it into off-screen buffers
//! and returns them as plain text.

use log::debug;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Widget},
};

use super::{ChartRenderer, OutputResult};
use crate::model::AnalysisResult;

/// Narrowest bar, wide enough for a three digit count.
pub const MIN_BAR_WIDTH: u16 = 3;
/// Widest bar; longer sequence ids are truncated.
pub const MAX_BAR_WIDTH: u16 = 12;
/// Space between bars.
pub const BAR_GAP: u16 = 1;
/// Widest text panel. With the tallest panel this stays well inside the
/// cell count a ratatui `Rect` can hold.
pub const MAX_PANEL_WIDTH: usize = 240;
pub const MIN_PANEL_HEIGHT: u16 = 5;
pub const MAX_PANEL_HEIGHT: u16 = 200;

/// Chart title naming the motif.
pub fn chart_title(motif: &str) -> String {
    format!("Occurrences of Motif \"{}\" in Sequences", motif.to_uppercase())
}

/// X-axis label of a bar. Unnamed sequences are labelled by position.
pub fn bar_label(result: &AnalysisResult, index: usize) -> String {
    if result.sequence_id.is_empty() {
        format!("#{}", index + 1)
    } else {
        result.sequence_id.clone()
    }
}

/// Bar width fitting the longest label, within the min/max bounds.
pub fn bar_width_for(results: &[AnalysisResult]) -> u16 {
    let longest = results
        .iter()
        .enumerate()
        .map(|(i, r)| bar_label(r, i).chars().count())
        .max()
        .unwrap_or(0);
    (longest.min(MAX_BAR_WIDTH as usize) as u16).max(MIN_BAR_WIDTH)
}

/// Builds the bar chart widget; each bar's height is the motif count.
///
/// `first_index` is the position of `results[0]` in the full result set,
/// used for labelling unnamed sequences.
pub fn bar_chart(
    results: &[AnalysisResult],
    first_index: usize,
    title: String,
    bar_width: u16,
) -> BarChart<'static> {
    let bars: Vec<Bar<'static>> = results
        .iter()
        .enumerate()
        .map(|(i, result)| {
            Bar::default()
                .value(result.count as u64)
                .label(Line::from(bar_label(result, first_index + i)))
                .text_value(result.count.to_string())
                .style(Style::default().fg(Color::LightBlue))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::LightBlue)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(title);

    BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(BAR_GAP)
        .data(BarGroup::default().bars(&bars))
}

/// Bars that fit side by side in one text panel.
pub fn panel_capacity(bar_width: u16) -> usize {
    // -2 for the panel borders
    ((MAX_PANEL_WIDTH - 2) / (bar_width + BAR_GAP) as usize).max(1)
}

/// Renders the chart as text.
///
/// Sequences are split into panels of at most [`panel_capacity`] bars,
/// stacked top to bottom and drawn on a common scale. Every panel is
/// `height` rows tall.
#[derive(Debug, Clone, Copy)]
pub struct TextBarChart {
    /// Height of one panel in rows, including borders and labels
    pub height: u16,
}

impl Default for TextBarChart {
    fn default() -> Self {
        Self { height: 20 }
    }
}

impl TextBarChart {
    /// Panel height actually used, within the min/max bounds.
    pub fn panel_height(&self) -> u16 {
        self.height.clamp(MIN_PANEL_HEIGHT, MAX_PANEL_HEIGHT)
    }

    /// Renders the chart and returns it as text, one line per row.
    pub fn render_to_string(&self, results: &[AnalysisResult], motif: &str) -> String {
        let bar_width = bar_width_for(results);
        let height = self.panel_height();
        let capacity = panel_capacity(bar_width);
        let panel_count = results.len().div_ceil(capacity).max(1);
        let scale = results.iter().map(|r| r.count as u64).max().unwrap_or(0).max(1);

        let mut text = String::new();
        for panel in 0..panel_count {
            let start = panel * capacity;
            let end = (start + capacity).min(results.len());
            let bars = &results[start..end];

            let title = if panel_count > 1 {
                format!("{} [{}-{}/{}]", chart_title(motif), start + 1, end, results.len())
            } else {
                chart_title(motif)
            };
            let bars_width = bars.len() * (bar_width + BAR_GAP) as usize;
            let width = bars_width
                .max(title.chars().count().saturating_add(2))
                .saturating_add(2)
                .min(MAX_PANEL_WIDTH);

            let area = Rect::new(0, 0, width as u16, height);
            let mut buffer = Buffer::empty(area);
            bar_chart(bars, start, title, bar_width)
                .max(scale)
                .render(area, &mut buffer);
            text.push_str(&buffer_to_string(&buffer));
        }
        text
    }
}

impl ChartRenderer for TextBarChart {
    fn render_chart(&self, results: &[AnalysisResult], motif: &str) -> OutputResult<String> {
        let text = self.render_to_string(results, motif);
        debug!("Rendered bar chart of {} sequence(s)", results.len());
        Ok(text)
    }
}

/// Flattens a buffer into lines, dropping styling and trailing blanks.
fn buffer_to_string(buffer: &Buffer) -> String {
    let width = buffer.area.width.max(1) as usize;
    let mut text = String::new();
    for row in buffer.content().chunks(width) {
        let line: String = row.iter().map(|cell| cell.symbol()).collect();
        text.push_str(line.trim_end());
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: &str, count: usize) -> AnalysisResult {
        AnalysisResult {
            sequence_id: id.to_string(),
            sequence_length: 9,
            motif: "ATG".to_string(),
            count,
            frequency: 0.0,
        }
    }

    #[test]
    fn test_title() {
        assert_eq!(chart_title("atg"), "Occurrences of Motif \"ATG\" in Sequences");
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width_for(&[]), MIN_BAR_WIDTH);
        assert_eq!(bar_width_for(&[result("s", 1)]), MIN_BAR_WIDTH);
        assert_eq!(bar_width_for(&[result("seq1", 1), result("seq10", 2)]), 5);
        assert_eq!(bar_width_for(&[result(&"x".repeat(40), 1)]), MAX_BAR_WIDTH);
    }

    #[test]
    fn test_unnamed_label() {
        assert_eq!(bar_label(&result("", 1), 4), "#5");
        assert_eq!(bar_label(&result("seq1", 1), 4), "seq1");
    }

    #[test]
    fn test_render_text() {
        let results = vec![result("seq1", 3), result("seq2", 1)];
        let text = TextBarChart::default().render_to_string(&results, "ATG");

        assert_eq!(text.lines().count(), 20);
        assert!(text.contains("Occurrences of Motif \"ATG\" in Sequences"));
        assert!(text.contains("seq1"));
        assert!(text.contains("seq2"));
    }

    #[test]
    fn test_taller_bar_for_higher_count() {
        let results = vec![result("hi", 8), result("lo", 2)];
        let text = TextBarChart { height: 12 }.render_to_string(&results, "ATG");

        // Bar columns start after the left border
        let column_height = |col: usize| {
            text.lines()
                .filter(|line| line.chars().nth(col) == Some('█'))
                .count()
        };
        let width = bar_width_for(&results) as usize;
        let hi_col = 1;
        let lo_col = 1 + width + BAR_GAP as usize;
        assert!(column_height(hi_col) > column_height(lo_col));
    }

    #[test]
    fn test_render_chart_port() {
        let text = TextBarChart::default()
            .render_chart(&[result("seq1", 2)], "atg")
            .unwrap();
        assert!(text.contains("\"ATG\""));
    }

    fn many_results(n: usize) -> Vec<AnalysisResult> {
        (0..n).map(|i| result(&format!("seq{:05}", i), i % 7)).collect()
    }

    #[test]
    fn test_empty_results_single_panel() {
        let text = TextBarChart::default().render_to_string(&[], "ATG");
        assert_eq!(text.lines().count(), 20);
        assert!(text.contains("Occurrences of Motif"));
    }

    #[test]
    fn test_large_input_split_into_panels() {
        let results = many_results(600);
        let chart = TextBarChart::default();
        let text = chart.render_to_string(&results, "ATG");

        let capacity = panel_capacity(bar_width_for(&results));
        let panels = results.len().div_ceil(capacity);
        assert!(panels > 1);
        assert_eq!(text.lines().count(), panels * chart.panel_height() as usize);
        assert!(text.contains("seq00000"));
        assert!(text.contains("seq00599"));
        assert!(text.contains("/600]"));
        assert!(text.lines().all(|line| line.chars().count() <= MAX_PANEL_WIDTH));
    }

    #[test]
    fn test_very_large_input_renders_every_bar() {
        let results = many_results(10_000);
        let text = TextBarChart::default().render_to_string(&results, "ATG");

        for id in ["seq00000", "seq05000", "seq09999"] {
            assert!(text.contains(id), "{} has no bar", id);
        }
    }

    #[test]
    fn test_panel_height_bounds() {
        assert_eq!(TextBarChart { height: 1 }.panel_height(), MIN_PANEL_HEIGHT);
        assert_eq!(TextBarChart { height: u16::MAX }.panel_height(), MAX_PANEL_HEIGHT);
        assert!(MAX_PANEL_WIDTH * MAX_PANEL_HEIGHT as usize <= u16::MAX as usize);
    }
}
