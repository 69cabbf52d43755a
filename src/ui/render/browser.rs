//! Browse view rendering

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::app::state::{BrowseState, SearchState};
use crate::model::{RepoSummary, StatusLevel, StatusMessage};
use crate::ui::theme;
use crate::util::format::{format_count, format_relative};

use super::common::get_spinner_frame;

/// Render the browse view
pub fn render_browser(
    frame: &mut Frame,
    browse: &mut BrowseState,
    status_message: Option<&StatusMessage>,
    tick_count: u64,
) {
    let area = frame.area();
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(7),
        Constraint::Length(3),
    ])
    .split(area);

    render_selector(frame, browse, chunks[0]);
    render_output(frame, browse, chunks[1], tick_count);
    render_help_bar(frame, browse, status_message, chunks[2], tick_count);

    if browse.picker_open {
        render_picker(frame, browse, area);
    }
}

/// Render the language selector line
fn render_selector(frame: &mut Frame, browse: &BrowseState, area: Rect) {
    let title_style = if browse.selected.is_some() {
        Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::TEXT_DIM)
    };

    let line = Line::from(vec![
        Span::styled(browse.selected_title(), title_style),
        Span::styled("  (enter to change)", Style::default().fg(theme::TEXT_DIM)),
    ]);

    let selector = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER))
            .title(" Repository Finder ")
            .title_style(Style::default().fg(theme::TEXT)),
    );

    frame.render_widget(selector, area);
}

/// Render the output panel. Checked in priority order: error, then
/// result, then loading, then the initial prompt.
fn render_output(frame: &mut Frame, browse: &BrowseState, area: Rect, tick_count: u64) {
    match &browse.search {
        SearchState::Failed(msg) => {
            let panel = Paragraph::new(Line::from(msg.as_str()))
                .style(Style::default().fg(theme::ERROR).bg(theme::ERROR_BG))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme::ERROR)),
                );
            frame.render_widget(panel, area);
        }
        SearchState::Loaded(repo) => render_card(frame, repo, area),
        SearchState::Loading => {
            let line = Line::from(vec![
                Span::styled(
                    get_spinner_frame(tick_count),
                    Style::default().fg(theme::ACCENT),
                ),
                Span::styled(
                    " Loading, please wait...",
                    Style::default().fg(theme::TEXT),
                ),
            ]);
            render_panel_text(frame, vec![line], area);
        }
        SearchState::Idle => {
            let line = Line::from(Span::styled(
                "Please select a language",
                Style::default().fg(theme::TEXT_MUTED),
            ));
            render_panel_text(frame, vec![line], area);
        }
    }
}

fn render_panel_text(frame: &mut Frame, lines: Vec<Line>, area: Rect) {
    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER)),
    );
    frame.render_widget(panel, area);
}

/// Render the repository card
fn render_card(frame: &mut Frame, repo: &RepoSummary, area: Rect) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                repo.name.as_str(),
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", repo.full_name),
                Style::default().fg(theme::TEXT_DIM),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            repo.description_or_default().to_string(),
            Style::default().fg(theme::TEXT_MUTED),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Stars ", Style::default().fg(theme::TEXT_DIM)),
            Span::styled(format_count(repo.stars), Style::default().fg(theme::STARS)),
            Span::styled("   Forks ", Style::default().fg(theme::TEXT_DIM)),
            Span::styled(format_count(repo.forks), Style::default().fg(theme::FORKS)),
            Span::styled("   Issues ", Style::default().fg(theme::TEXT_DIM)),
            Span::styled(
                format_count(repo.open_issues),
                Style::default().fg(theme::ISSUES),
            ),
        ]),
    ];

    if let Some(updated) = repo.updated_at {
        lines.push(Line::from(Span::styled(
            format!("Updated {}", format_relative(updated)),
            Style::default().fg(theme::TEXT_DIM),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        repo.url.as_str(),
        Style::default().fg(theme::LINK),
    )));

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER)),
    );

    frame.render_widget(card, area);
}

/// Render the language picker popup
fn render_picker(frame: &mut Frame, browse: &mut BrowseState, area: Rect) {
    let height = (browse.languages.len() as u16 + 2)
        .min(area.height.saturating_sub(4))
        .max(3);
    let width = 40.min(area.width.saturating_sub(4)).max(20);
    let popup = popup_area(area, width, height);

    let items: Vec<ListItem> = browse
        .languages
        .iter()
        .map(|lang| ListItem::new(Span::styled(lang.title.as_str(), Style::default().fg(theme::TEXT))))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::ACCENT))
                .title(" Select a language ")
                .title_style(Style::default().fg(theme::TEXT)),
        )
        .highlight_style(
            Style::default()
                .bg(theme::BG_HIGHLIGHT)
                .fg(theme::CURSOR)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(Clear, popup);
    frame.render_stateful_widget(list, popup, &mut browse.list_state);
}

/// Centered popup rectangle of the given size
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let band = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);
    let cols = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .split(band[1]);
    cols[1]
}

/// Render the help bar
fn render_help_bar(
    frame: &mut Frame,
    browse: &BrowseState,
    status_message: Option<&StatusMessage>,
    area: Rect,
    tick_count: u64,
) {
    let mut spans: Vec<Span> = Vec::new();

    let push_hint = |spans: &mut Vec<Span>, key: &'static str, desc: String, style: Style| {
        spans.push(Span::styled(key, Style::default().fg(theme::KEY_HINT)));
        spans.push(Span::styled(format!(" {} ", desc), style));
    };

    let dim = Style::default().fg(theme::TEXT_DIM);

    if browse.picker_open {
        push_hint(&mut spans, "j/k", "nav".to_string(), dim);
        push_hint(&mut spans, "enter", "select".to_string(), dim);
        push_hint(&mut spans, "esc", "close".to_string(), dim);
    } else {
        push_hint(&mut spans, "enter", "language".to_string(), dim);
        // No refresh affordance until a language has been selected
        if browse.selected.is_some() {
            if matches!(browse.search, SearchState::Failed(_)) {
                push_hint(
                    &mut spans,
                    "r",
                    "Click to retry".to_string(),
                    Style::default().fg(theme::ERROR).add_modifier(Modifier::BOLD),
                );
            } else {
                push_hint(&mut spans, "r", "Refresh".to_string(), dim);
            }
        }
        push_hint(&mut spans, "q", "quit".to_string(), dim);
    }

    if let Some(msg) = status_message {
        let color = match msg.level {
            StatusLevel::Info => theme::INFO,
            StatusLevel::Success => theme::SUCCESS,
            StatusLevel::Warning => theme::WARNING,
        };
        // Spinner for info messages (indicates an in-progress operation)
        let spinner = if msg.level == StatusLevel::Info {
            format!("{} ", get_spinner_frame(tick_count))
        } else {
            String::new()
        };
        spans.push(Span::styled(
            format!(" | {}{}", spinner, msg.text),
            Style::default().fg(color),
        ));
    }

    let help = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER)),
    );

    frame.render_widget(help, area);
}
