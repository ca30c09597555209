//! Cursor navigation over the filtered coin list

use super::core::App;

impl App {
    pub fn next_coin(&mut self) {
        if !self.filtered_coins.is_empty() {
            self.selected_coin = (self.selected_coin + 1) % self.filtered_coins.len();
            self.needs_redraw = true;
        }
    }

    pub fn previous_coin(&mut self) {
        if !self.filtered_coins.is_empty() {
            self.selected_coin = if self.selected_coin == 0 {
                self.filtered_coins.len() - 1
            } else {
                self.selected_coin - 1
            };
            self.needs_redraw = true;
        }
    }

    pub fn first_coin(&mut self) {
        self.selected_coin = 0;
        self.needs_redraw = true;
    }

    pub fn last_coin(&mut self) {
        self.selected_coin = self.filtered_coins.len().saturating_sub(1);
        self.needs_redraw = true;
    }
}
