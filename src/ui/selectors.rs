use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;

pub fn render_coin_selector(f: &mut Frame, app: &App, area: Rect) {
    let visible_height = area.height.saturating_sub(2) as usize; // Account for borders
    let total_items = app.filtered_coins.len();
    let title = selector_title(app);

    if total_items == 0 {
        let empty_list = List::new(vec![ListItem::new("No coins found")])
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(empty_list, area);
        return;
    }

    // Keep the cursor visible
    let visible_start = if app.selected_coin >= visible_height {
        app.selected_coin - visible_height + 1
    } else {
        0
    };
    let visible_end = std::cmp::min(visible_start + visible_height, total_items);

    let mut items = Vec::with_capacity(visible_height);
    for (i, coin) in app
        .visible_coins()
        .skip(visible_start)
        .take(visible_height)
        .enumerate()
    {
        let global_idx = visible_start + i;
        let is_selected = app.selection.contains(coin.id);

        let mut style = if is_selected {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        if global_idx == app.selected_coin {
            style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
        }

        let marker = if is_selected { "[x]" } else { "[ ]" };
        let text = format!("{marker} {}", coin.label());
        items.push(ListItem::new(Line::from(vec![Span::styled(text, style)])));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(if app.search_mode {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            }),
    );
    f.render_widget(list, area);

    // Show scroll indicator if needed
    if total_items > visible_height {
        let scroll_indicator = format!(" {}-{}/{} ", visible_start + 1, visible_end, total_items);
        let indicator_width = scroll_indicator.len() as u16;
        if indicator_width < area.width {
            let indicator_area = Rect {
                x: area.x + area.width - indicator_width - 1,
                y: area.y,
                width: indicator_width,
                height: 1,
            };
            let indicator = Paragraph::new(scroll_indicator).style(Style::default().fg(Color::Cyan));
            f.render_widget(indicator, indicator_area);
        }
    }
}

fn selector_title(app: &App) -> String {
    if app.search_query.is_empty() {
        format!("Coins ({} total)", app.coins.len())
    } else {
        format!(
            "Coins - Search: '{}' ({}/{})",
            app.search_query,
            app.filtered_coins.len(),
            app.coins.len()
        )
    }
}
