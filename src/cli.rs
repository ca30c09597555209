use clap::Parser;
use crate::app::Mode;
use crate::config::{API_URL_ENV, DEFAULT_API_HOST, DEFAULT_REQUEST_TIMEOUT_SECS};

#[derive(Parser)]
#[command(name = "coin-scope")]
#[command(about = "Pick cryptocurrencies and ask the Crypto AI backend to analyze or compare them")]
pub struct Cli {
    /// Base URL of the analysis backend
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_HOST)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(short, long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Initial mode (analyze or compare)
    #[arg(short, long, default_value_t = Mode::Analyze)]
    pub mode: Mode,

    /// Coin ids to preselect, comma separated (e.g. "bitcoin,ethereum")
    #[arg(short, long, value_delimiter = ',')]
    pub coins: Vec<String>,

    /// Submit the preselected coins once and print the HTML result instead of opening the UI
    #[arg(long)]
    pub once: bool,
}
