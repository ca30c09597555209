use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::config::LOADING_MESSAGE;
use crate::data::{CoinAnalysis, Comparison, ResultState, ResultView};

pub fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let title = match &app.results {
        ResultState::Ready { received_at, .. } => {
            format!("Results - {}", received_at.format("%H:%M:%S"))
        }
        _ => "Results".to_string(),
    };

    let paragraph = Paragraph::new(result_lines(&app.results))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(paragraph, area);
}

pub fn result_lines(state: &ResultState) -> Vec<Line<'static>> {
    match state {
        ResultState::Empty => vec![Line::from(Span::styled(
            "Pick coins and press Enter",
            Style::default().fg(Color::DarkGray),
        ))],
        ResultState::Loading { since } => vec![Line::from(format!(
            "{LOADING_MESSAGE} ({}s)",
            since.elapsed().as_secs()
        ))],
        ResultState::Failed(message) => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::LightRed),
        ))],
        ResultState::Ready { view, .. } => view_lines(view),
    }
}

fn view_lines(view: &ResultView) -> Vec<Line<'static>> {
    match view {
        ResultView::Analysis(entries) => {
            let mut lines = Vec::new();
            for (i, entry) in entries.iter().enumerate() {
                if i > 0 {
                    lines.push(Line::from(""));
                }
                lines.extend(analysis_lines(entry));
            }
            lines
        }
        ResultView::Comparison(comparison) => comparison_lines(comparison),
    }
}

fn sentiment_color(sentiment: &str) -> Color {
    match sentiment.to_lowercase().as_str() {
        "bullish" | "positive" => Color::Green,
        "bearish" | "negative" => Color::Red,
        _ => Color::Yellow,
    }
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)))
}

fn analysis_lines(entry: &CoinAnalysis) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(entry.coin.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                entry.sentiment.to_uppercase(),
                Style::default().fg(sentiment_color(&entry.sentiment)).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(entry.summary.clone()),
        heading("Key Factors"),
    ];
    for f in &entry.key_factors {
        lines.push(Line::from(vec![
            Span::styled(f.factor.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(": {}", f.impact)),
        ]));
    }
    lines.push(heading("Market Insights"));
    for insight in &entry.insights {
        lines.push(Line::from(vec![
            Span::raw(format!("{} - ", insight.prediction)),
            Span::styled(format!("{}%", insight.confidence), Style::default().add_modifier(Modifier::BOLD)),
        ]));
    }
    lines
}

fn comparison_lines(comparison: &Comparison) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("🏆 Winner: {}", comparison.winner),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(comparison.summary.clone()),
        heading("Key Reasons"),
    ];
    for (i, reason) in comparison.reasons.iter().enumerate() {
        lines.push(Line::from(format!("{}. {reason}", i + 1)));
    }
    lines
}
