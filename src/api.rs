//! HTTP client for the analysis backend

use async_trait::async_trait;
use cli_log::*;
use reqwest::Client;
use std::time::Duration;

use crate::app::Mode;
use crate::data::CoinsRequest;
use crate::error::ApiError;

/// Transport seam between the controller and the backend.
#[async_trait]
pub trait CryptoApi: Send + Sync {
    /// POST the coin ids to the endpoint for `mode` and return the JSON body.
    async fn post_coins(&self, mode: Mode, coins: &[String]) -> Result<serde_json::Value, ApiError>;
}

#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, mode: Mode) -> String {
        format!("{}{}", self.base_url, mode.endpoint())
    }
}

#[async_trait]
impl CryptoApi for HttpApi {
    async fn post_coins(&self, mode: Mode, coins: &[String]) -> Result<serde_json::Value, ApiError> {
        let url = self.endpoint(mode);
        debug!("POST {url} coins={coins:?}");

        let response = self
            .client
            .post(&url)
            .json(&CoinsRequest { coins })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("{url} answered with status {status}");
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.json::<serde_json::Value>().await?;
        Ok(body)
    }
}
