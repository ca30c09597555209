use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use strum::IntoEnumIterator;

use crate::app::{App, Mode};

pub fn render_tab_bar(f: &mut Frame, app: &App, area: Rect) {
    let tab_titles: Vec<&str> = Mode::iter().map(Mode::title).collect();
    let selected_tab_index = Mode::iter().position(|m| m == app.mode).unwrap_or(0);

    let tabs = Tabs::new(tab_titles)
        .block(Block::default().borders(Borders::ALL).title("Crypto AI"))
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .select(selected_tab_index)
        .divider("|");

    f.render_widget(tabs, area);
}

/// Validation message and the submit label for the active mode.
pub fn render_submit_bar(f: &mut Frame, app: &App, area: Rect) {
    let label_style = if app.busy {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };
    let mut submit = vec![Span::styled(format!("[Enter] {}", app.submit_label()), label_style)];
    if app.busy {
        submit.push(Span::styled("  (request in progress)", Style::default().fg(Color::Yellow)));
    }

    let selected = if app.selection.is_empty() {
        "Selected: none".to_string()
    } else {
        format!("Selected: {}", app.selection.ids().join(", "))
    };

    let mut lines = vec![Line::from(submit), Line::from(selected)];
    if let Some(ref error) = app.error_message {
        lines.push(Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red))));
    }

    let bar = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(bar, area);
}
