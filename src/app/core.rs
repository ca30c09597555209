//! Core application state and initialization

use anyhow::Result;
use cli_log::*;
use std::sync::{Arc, Mutex};

use crate::api::CryptoApi;
use crate::data::{COIN_CATALOG, Coin, ResultState};
use super::selection::Selection;
use super::submit::SubmitOutcome;
use super::types::Mode;

pub struct App {
    // Backend client
    pub api: Arc<dyn CryptoApi>,

    // Catalog and filtering state
    pub coins: &'static [Coin],
    pub filtered_coins: Vec<usize>, // Indices into coins for the current search
    pub selected_coin: usize,       // Cursor position within filtered_coins

    // User choices
    pub selection: Selection,
    pub mode: Mode,

    // Search functionality
    pub search_query: String,
    pub search_mode: bool,

    // Submit state
    pub busy: bool,
    pub results: ResultState,
    pub error_message: Option<String>,
    pub pending_outcomes: Arc<Mutex<Vec<SubmitOutcome>>>,

    // UI state
    pub needs_redraw: bool,
}

impl App {
    pub fn new(api: Arc<dyn CryptoApi>) -> Self {
        let mut app = Self {
            api,
            coins: COIN_CATALOG,
            filtered_coins: Vec::new(),
            selected_coin: 0,
            selection: Selection::new(),
            mode: Mode::default(),
            search_query: String::new(),
            search_mode: false,
            busy: false,
            results: ResultState::Empty,
            error_message: None,
            pending_outcomes: Arc::new(Mutex::new(Vec::new())),
            needs_redraw: true,
        };
        app.update_filtered_coins();
        app
    }

    /// Selects the given ids in order, rejecting ids that are not in the catalog.
    pub fn preselect(&mut self, ids: &[String]) -> Result<()> {
        for id in ids {
            if !self.coins.iter().any(|c| c.id == id.as_str()) {
                let known: Vec<_> = self.coins.iter().map(|c| c.id).collect();
                return Err(anyhow::anyhow!(
                    "Unknown coin '{id}'. Known coins: {}",
                    known.join(", ")
                ));
            }
            if !self.selection.contains(id) {
                self.selection.toggle(id);
            }
        }
        self.needs_redraw = true;
        Ok(())
    }

    /// Changes the active mode. The selection is left untouched.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            info!("Switching mode to {mode}");
        }
        self.mode = mode;
        self.needs_redraw = true;
    }

    pub fn next_mode(&mut self) {
        self.set_mode(self.mode.next());
    }

    pub fn previous_mode(&mut self) {
        self.set_mode(self.mode.previous());
    }

    pub fn submit_label(&self) -> &'static str {
        self.mode.submit_label()
    }

    pub fn toggle_coin(&mut self, coin_id: &str) -> bool {
        let selected = self.selection.toggle(coin_id);
        debug!("{coin_id} {}", if selected { "selected" } else { "deselected" });
        self.needs_redraw = true;
        selected
    }

    /// Toggles the coin under the cursor, if any.
    pub fn toggle_current_coin(&mut self) {
        if let Some(coin) = self.current_coin() {
            let id = coin.id;
            self.toggle_coin(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.needs_redraw = true;
    }

    pub fn current_coin(&self) -> Option<&'static Coin> {
        let coins = self.coins;
        self.filtered_coins
            .get(self.selected_coin)
            .and_then(|&idx| coins.get(idx))
    }

    /// Coins matching the current search, in catalog order.
    pub fn visible_coins(&self) -> impl Iterator<Item = &'static Coin> + '_ {
        let coins = self.coins;
        self.filtered_coins.iter().filter_map(move |&idx| coins.get(idx))
    }

    pub fn update_filtered_coins(&mut self) {
        self.filtered_coins.clear();

        let query = self.search_query.to_lowercase();
        for (i, coin) in self.coins.iter().enumerate() {
            if coin.matches(&query) {
                self.filtered_coins.push(i);
            }
        }

        // Reset cursor if it's out of bounds
        if self.selected_coin >= self.filtered_coins.len() {
            self.selected_coin = 0;
        }
    }

    /// Called from the UI loop: applies finished requests.
    pub fn update(&mut self) {
        self.process_submit_outcomes();
    }
}
