//! Ordered set of selected coin ids

/// Selected coin ids in the order they were picked. Ids are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `coin_id` if present, appends it otherwise.
    /// Returns whether the coin is selected afterwards.
    pub fn toggle(&mut self, coin_id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|id| id == coin_id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(coin_id.to_string());
            true
        }
    }

    pub fn contains(&self, coin_id: &str) -> bool {
        self.ids.iter().any(|id| id == coin_id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
