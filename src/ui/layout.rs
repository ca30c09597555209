use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use super::{
    components::{render_submit_bar, render_tab_bar},
    results::render_results,
    selectors::render_coin_selector,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_tab_bar(f, app, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[1]);

    render_coin_selector(f, app, main[0]);

    let submit_height = if app.error_message.is_some() { 5 } else { 4 };
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(submit_height), Constraint::Min(3)])
        .split(main[1]);

    render_submit_bar(f, app, right[0]);
    render_results(f, app, right[1]);

    let footer_text = if app.search_mode {
        format!("Search: {} | ↑↓: Navigate | Enter/Esc: Done | Backspace: Delete", app.search_query)
    } else {
        "↑↓: Navigate | Space: Toggle | Enter: Submit | a/c/Tab: Mode | /: Search | x: Clear | q: Quit"
            .to_string()
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, chunks[2]);
}
