//! HTML rendering of result views
//!
//! Produces the fragments the result area is made of. All text coming from the
//! backend is escaped before it is interpolated.

use crate::config::LOADING_MESSAGE;
use crate::data::{CoinAnalysis, Comparison, ResultState, ResultView};

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_results_html(view: &ResultView) -> String {
    match view {
        ResultView::Analysis(entries) => entries
            .iter()
            .map(render_analysis_entry)
            .collect::<Vec<_>>()
            .join("\n"),
        ResultView::Comparison(comparison) => render_comparison(comparison),
    }
}

pub fn render_error_html(message: &str) -> String {
    format!("<p class=\"error\" style=\"color:#f87171\">{}</p>", escape(message))
}

pub fn render_loading_html() -> String {
    format!("<p>{LOADING_MESSAGE}</p>")
}

/// Whatever the result area currently holds, as HTML.
pub fn render_state_html(state: &ResultState) -> String {
    match state {
        ResultState::Empty => String::new(),
        ResultState::Loading { .. } => render_loading_html(),
        ResultState::Ready { view, .. } => render_results_html(view),
        ResultState::Failed(message) => render_error_html(message),
    }
}

fn render_analysis_entry(entry: &CoinAnalysis) -> String {
    let factors: String = entry
        .key_factors
        .iter()
        .map(|f| format!("\n    <div><b>{}</b>: {}</div>", escape(&f.factor), escape(&f.impact)))
        .collect();
    let insights: String = entry
        .insights
        .iter()
        .map(|i| format!("\n    <div>{} - <b>{}%</b></div>", escape(&i.prediction), i.confidence))
        .collect();

    format!(
        r#"<div class="result">
  <div class="result-header">
    <h3>{coin}</h3>
    <span class="sentiment {class}">{label}</span>
  </div>
  <p>{summary}</p>
  <div class="key-factors">
    <h4>Key Factors</h4>{factors}
  </div>
  <div class="insights">
    <h4>Market Insights</h4>{insights}
  </div>
</div>"#,
        coin = escape(&entry.coin),
        class = escape(&entry.sentiment.to_lowercase()),
        label = escape(&entry.sentiment.to_uppercase()),
        summary = escape(&entry.summary),
    )
}

fn render_comparison(comparison: &Comparison) -> String {
    let reasons: String = comparison
        .reasons
        .iter()
        .enumerate()
        .map(|(i, r)| format!("\n    <div>{}. {}</div>", i + 1, escape(r)))
        .collect();

    format!(
        r#"<div class="result">
  <h2>🏆 Winner: {winner}</h2>
  <p>{summary}</p>
  <div class="reasons">
    <h4>Key Reasons</h4>{reasons}
  </div>
</div>"#,
        winner = escape(&comparison.winner),
        summary = escape(&comparison.summary),
    )
}
