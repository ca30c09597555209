//! Search functionality for the coin list

use super::core::App;

impl App {
    pub fn add_search_char(&mut self, ch: char) {
        self.search_query.push(ch);
        self.refilter();
    }

    pub fn remove_search_char(&mut self) {
        self.search_query.pop();
        self.refilter();
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.refilter();
    }

    /// Entering search keeps the current text; leaving keeps the filter applied.
    pub fn toggle_search_mode(&mut self) {
        self.search_mode = !self.search_mode;
        self.needs_redraw = true;
    }

    fn refilter(&mut self) {
        self.update_filtered_coins();
        self.selected_coin = 0;
        self.needs_redraw = true;
    }
}

#[cfg(test)]
mod tests {
    use crate::app::core::tests::{FakeApi, app_with};

    #[test]
    fn typing_narrows_list_and_resets_cursor() {
        let api = FakeApi::new(Ok(serde_json::Value::Null));
        let mut app = app_with(&api);
        app.selected_coin = 5;

        app.add_search_char('E');
        app.add_search_char('t');
        let ids: Vec<_> = app.visible_coins().map(|c| c.id).collect();
        assert_eq!(ids, vec!["ethereum"]);
        assert_eq!(app.selected_coin, 0);

        app.remove_search_char();
        assert!(app.visible_coins().count() > 1);

        app.clear_search();
        assert_eq!(app.visible_coins().count(), app.coins.len());
    }

    #[test]
    fn search_never_touches_selection() {
        let api = FakeApi::new(Ok(serde_json::Value::Null));
        let mut app = app_with(&api);
        app.toggle_coin("ripple");

        app.add_search_char('z');
        assert_eq!(app.visible_coins().count(), 0);
        assert_eq!(app.selection.ids(), ["ripple"]);
    }
}
