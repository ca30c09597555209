// Configuration constants for the application

/// API endpoints
pub const DEFAULT_API_HOST: &str = "https://crypto-ai-backend-production.up.railway.app";
pub const ANALYZE_PATH: &str = "/crypto/analyze";
pub const COMPARE_PATH: &str = "/crypto/compare";
pub const API_URL_ENV: &str = "COIN_SCOPE_API_URL";

/// Update intervals (in milliseconds)
pub const TICK_RATE_MS: u64 = 50;
pub const UI_UPDATE_RATE_MS: u64 = 1000;

/// Network settings
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// User-facing messages
pub const EMPTY_SELECTION_MESSAGE: &str = "Please select at least one cryptocurrency";
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";
pub const LOADING_MESSAGE: &str = "Loading...";
pub const ANALYZE_LABEL: &str = "Analyze Selected Coins";
pub const COMPARE_LABEL: &str = "Compare Selected Coins";
