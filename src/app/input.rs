use crossterm::event::KeyCode;

use crate::App;
use super::Mode;

impl App {
    /// Returns `false` when the user asked to quit.
    pub fn handle_key_input(&mut self, key_code: KeyCode) -> bool {
        if self.search_mode {
            self.handle_search_key(key_code);
            return true;
        }

        match key_code {
            KeyCode::Char('q') => return false,
            KeyCode::Char('/') => self.toggle_search_mode(),
            KeyCode::Esc => {
                if !self.search_query.is_empty() {
                    self.clear_search();
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.previous_coin(),
            KeyCode::Down | KeyCode::Char('j') => self.next_coin(),
            KeyCode::Home => self.first_coin(),
            KeyCode::End => self.last_coin(),
            KeyCode::Char(' ') => self.toggle_current_coin(),
            KeyCode::Char('x') => self.clear_selection(),
            KeyCode::Char('a') => self.set_mode(Mode::Analyze),
            KeyCode::Char('c') => self.set_mode(Mode::Compare),
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => self.next_mode(),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => self.previous_mode(),
            KeyCode::Enter => self.spawn_submit(),
            _ => {}
        }
        true
    }

    fn handle_search_key(&mut self, key_code: KeyCode) {
        match key_code {
            KeyCode::Esc | KeyCode::Enter => self.toggle_search_mode(),
            KeyCode::Backspace => self.remove_search_char(),
            KeyCode::Up => self.previous_coin(),
            KeyCode::Down => self.next_coin(),
            KeyCode::Char(ch) => self.add_search_char(ch),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::core::tests::{FakeApi, app_with};

    #[test]
    fn letters_go_to_search_only_in_search_mode() {
        let api = FakeApi::new(Ok(serde_json::Value::Null));
        let mut app = app_with(&api);

        assert!(app.handle_key_input(KeyCode::Char('c')));
        assert_eq!(app.mode, Mode::Compare);

        app.handle_key_input(KeyCode::Char('/'));
        app.handle_key_input(KeyCode::Char('a'));
        app.handle_key_input(KeyCode::Char('d'));
        assert_eq!(app.search_query, "ad");
        assert_eq!(app.mode, Mode::Compare);

        app.handle_key_input(KeyCode::Enter);
        assert!(!app.search_mode);
        assert_eq!(app.search_query, "ad");
    }

    #[test]
    fn space_toggles_and_q_quits() {
        let api = FakeApi::new(Ok(serde_json::Value::Null));
        let mut app = app_with(&api);

        app.handle_key_input(KeyCode::Down);
        app.handle_key_input(KeyCode::Char(' '));
        assert_eq!(app.selection.ids(), ["ethereum"]);
        app.handle_key_input(KeyCode::Char(' '));
        assert!(app.selection.is_empty());

        assert!(!app.handle_key_input(KeyCode::Char('q')));
    }

    #[test]
    fn enter_with_empty_selection_shows_message() {
        let api = FakeApi::new(Ok(serde_json::Value::Null));
        let mut app = app_with(&api);

        app.handle_key_input(KeyCode::Enter);
        assert_eq!(api.call_count(), 0);
        assert_eq!(app.error_message.as_deref(), Some("Please select at least one cryptocurrency"));
    }
}
