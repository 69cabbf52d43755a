//! Common rendering utilities

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme;

/// Spinner animation frames
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Get the current spinner frame based on tick count
pub fn get_spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick as usize / 2) % SPINNER_FRAMES.len()]
}

/// Vertically centered band of the given height
pub(crate) fn centered_band(area: Rect, height: u16) -> Rect {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);
    chunks[1]
}

/// Render loading screen
pub fn render_loading(frame: &mut Frame, message: &str, tick_count: u64) {
    let area = frame.area();
    let spinner = get_spinner_frame(tick_count);

    let text = vec![
        Line::from(vec![
            Span::styled(spinner, Style::default().fg(theme::ACCENT)),
            Span::styled(format!(" {}", message), Style::default().fg(theme::TEXT)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press q or Ctrl+C to cancel",
            Style::default().fg(theme::TEXT_DIM),
        )),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered_band(area, 3));
}

/// Render the catalog-unavailable screen
pub fn render_catalog_error(frame: &mut Frame, error: &str) {
    let area = frame.area();

    let text = vec![
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(theme::ERROR),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to retry, any other key to exit",
            Style::default().fg(theme::TEXT_DIM),
        )),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered_band(area, 3));
}
