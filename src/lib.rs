// Library exports for the crypto analysis client
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod html;
pub mod ui;

// Re-export commonly used types
pub use api::{CryptoApi, HttpApi};
pub use app::{App, Mode, Selection};
pub use cli::Cli;
pub use data::{COIN_CATALOG, Coin, ResultState, ResultView, filter_catalog};
pub use error::{ApiError, SubmitError};
pub use ui::render_ui;
