//! Quote feed client

use anyhow::Context;
use serde_json::Value;
use std::future::Future;
use tracing::{debug, warn};
use crate::{
    config::Config,
    errors::{DashboardError, DashboardResult},
};

/// Anything that can deliver one raw quote payload per refresh.
pub trait QuoteSource: Send + Sync + 'static {
    fn fetch_quotes(&self) -> impl Future<Output = DashboardResult<Value>> + Send;
}

/// `GET {base}/arbitrage` over HTTP. One attempt per refresh, no retries.
pub struct HttpQuoteSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpQuoteSource {
    pub fn new(config: &Config) -> DashboardResult<Self> {
        let endpoint = config.arbitrage_endpoint();
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| {
                warn!("⚠️ Failed to initialize HTTP client: {}", e);
                DashboardError::source_unavailable(
                    &endpoint,
                    "failed to build HTTP client",
                    Some(e.into()),
                )
            })?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request(&self) -> anyhow::Result<Value> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .context("HTTP request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("⚠️ Quote feed returned error status {}: {}", status, body);
            return Err(anyhow::anyhow!("server responded with status {}", status));
        }

        let body = response.text().await.context("Failed to read response body")?;
        let json: Value = serde_json::from_str(&body).context("Response is not valid JSON")?;

        debug!(
            endpoint = %self.endpoint,
            records = json.as_array().map(|a| a.len()),
            "Fetched quote payload"
        );

        Ok(json)
    }
}

impl QuoteSource for HttpQuoteSource {
    async fn fetch_quotes(&self) -> DashboardResult<Value> {
        self.request().await.map_err(|e| {
            // `{:#}` keeps the context chain on one line for the user-facing message
            let message = format!("{:#}", e);
            DashboardError::source_unavailable(&self.endpoint, message, Some(e))
        })
    }
}
