use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use url::Url;

/// Quote service contract.
///
/// `Ok(Some(price))` is a usable price; `Ok(None)` means the service answered
/// but carried no price (absent field or unparseable body) and surfaces as
/// "N/A" downstream; `Err` is a transport-level failure and fails the whole
/// request.
pub trait QuoteSource: Clone + Send + Sync + 'static {
    fn latest_price(&self, code: &str) -> impl Future<Output = Result<Option<Decimal>>> + Send;
}

#[derive(Debug, Deserialize)]
struct QuotePayload {
    #[serde(rename = "latestPrice")]
    latest_price: Option<Decimal>,
}

#[derive(Clone)]
pub struct HttpQuoteClient {
    client: reqwest::Client,
    base: Url,
}

impl HttpQuoteClient {
    pub fn new(base: Url, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build quote HTTP client")?;

        Ok(Self { client, base })
    }
}

impl QuoteSource for HttpQuoteClient {
    async fn latest_price(&self, code: &str) -> Result<Option<Decimal>> {
        let url = self
            .base
            .join(&format!("v1/stock/{}/quote", code))
            .with_context(|| format!("invalid quote URL for {}", code))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("quote request for {} failed", code))?
            .error_for_status()
            .with_context(|| format!("quote service rejected {}", code))?;

        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read quote body for {}", code))?;

        // A body that does not parse is treated like a missing price, not a
        // failed request.
        match serde_json::from_str::<QuotePayload>(&body) {
            Ok(payload) => Ok(payload.latest_price),
            Err(err) => {
                tracing::warn!("unparseable quote payload for {}: {}", code, err);
                Ok(None)
            }
        }
    }
}
