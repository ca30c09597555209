use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::app::Mode;
use crate::error::SubmitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coin {
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

impl Coin {
    pub const fn new(id: &'static str, name: &'static str, symbol: &'static str) -> Self {
        Self { id, name, symbol }
    }

    /// Label shown in the coin selector, e.g. "BTC - Bitcoin".
    pub fn label(&self) -> String {
        format!("{} - {}", self.symbol, self.name)
    }

    /// `query` must already be lowercased.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query) || self.symbol.to_lowercase().contains(query)
    }
}

pub const COIN_CATALOG: &[Coin] = &[
    Coin::new("bitcoin", "Bitcoin", "BTC"),
    Coin::new("ethereum", "Ethereum", "ETH"),
    Coin::new("cardano", "Cardano", "ADA"),
    Coin::new("solana", "Solana", "SOL"),
    Coin::new("ripple", "Ripple", "XRP"),
    Coin::new("polkadot", "Polkadot", "DOT"),
    Coin::new("dogecoin", "Dogecoin", "DOGE"),
    Coin::new("avalanche-2", "Avalanche", "AVAX"),
];

pub fn find_coin(id: &str) -> Option<&'static Coin> {
    COIN_CATALOG.iter().find(|c| c.id == id)
}

/// Catalog entries whose name or symbol contains `search`, ignoring case.
/// Catalog order is preserved; an empty search returns everything.
pub fn filter_catalog<'a>(catalog: &'a [Coin], search: &str) -> Vec<&'a Coin> {
    let query = search.to_lowercase();
    catalog.iter().filter(|coin| coin.matches(&query)).collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct CoinsRequest<'a> {
    pub coins: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeyFactor {
    pub factor: String,
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Insight {
    pub prediction: String,
    /// Percentage; the backend may send integers or fractions.
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoinAnalysis {
    pub coin: String,
    pub sentiment: String,
    pub summary: String,
    #[serde(default)]
    pub key_factors: Vec<KeyFactor>,
    #[serde(default)]
    pub insights: Vec<Insight>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comparison {
    pub winner: String,
    pub summary: String,
    #[serde(default)]
    pub reasons: Vec<String>,
}

/// Raw response body; which field is expected depends on the mode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultPayload {
    #[serde(default)]
    pub analysis: Option<Vec<CoinAnalysis>>,
    #[serde(default)]
    pub comparison: Option<Comparison>,
}

impl ResultPayload {
    pub fn into_view(self, mode: Mode) -> Result<ResultView, SubmitError> {
        match (mode, self.analysis, self.comparison) {
            (Mode::Analyze, Some(analysis), _) => Ok(ResultView::Analysis(analysis)),
            (Mode::Compare, _, Some(comparison)) => Ok(ResultView::Comparison(comparison)),
            (Mode::Analyze, None, _) => Err(SubmitError::MalformedResponse(
                "response has no `analysis` list".to_string(),
            )),
            (Mode::Compare, _, None) => Err(SubmitError::MalformedResponse(
                "response has no `comparison` object".to_string(),
            )),
        }
    }
}

/// Parses a response body for the given mode. A body whose expected field is
/// missing or has the wrong shape is a malformed response.
pub fn parse_result(mode: Mode, body: serde_json::Value) -> Result<ResultView, SubmitError> {
    let payload: ResultPayload = serde_json::from_value(body)
        .map_err(|e| SubmitError::MalformedResponse(e.to_string()))?;
    payload.into_view(mode)
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Analysis(Vec<CoinAnalysis>),
    Comparison(Comparison),
}

#[derive(Debug, Clone, Default)]
pub enum ResultState {
    #[default]
    Empty,
    Loading {
        since: Instant,
    },
    Ready {
        view: ResultView,
        received_at: DateTime<Local>,
    },
    Failed(String),
}

impl ResultState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ResultState::Loading { .. })
    }
}
