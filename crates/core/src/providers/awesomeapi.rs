use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;

use super::traits::ExchangeRateProvider;
use super::wire::{self, Numeric};
use crate::errors::CoreError;

const PROVIDER: &str = "AwesomeAPI";

/// AwesomeAPI (economia.awesomeapi.com.br) provider for USD quotes.
///
/// - **Free**: No API key.
/// - **Endpoint**: `/last/USD-{CUR}` → `{"USD{CUR}": {"bid": "5.80", ...}}`
///
/// The bid is used as the rate. It is usually sent as a string.
pub struct AwesomeApiProvider {
    client: Client,
    url: String,
    /// Key of the quote object, e.g. "USDBRL"
    pair: String,
}

impl AwesomeApiProvider {
    pub fn new(url: impl Into<String>, pair: impl Into<String>) -> Self {
        Self {
            client: wire::build_client(),
            url: url.into(),
            pair: pair.into().to_uppercase(),
        }
    }

    /// Extract the bid for `pair` from a raw `/last` body.
    pub fn parse_rate(body: &str, pair: &str) -> Result<f64, CoreError> {
        let quotes: HashMap<String, RawQuote> =
            serde_json::from_str(body).map_err(|e| CoreError::Api {
                provider: PROVIDER.into(),
                message: format!("Failed to parse quote for {pair}: {e}"),
            })?;

        let bid = quotes
            .get(pair)
            .ok_or_else(|| CoreError::Api {
                provider: PROVIDER.into(),
                message: format!("No quote found for {pair}"),
            })?
            .bid
            .value()
            .ok_or_else(|| CoreError::Api {
                provider: PROVIDER.into(),
                message: format!("Invalid bid format for {pair}"),
            })?;

        if !bid.is_finite() || bid <= 0.0 {
            return Err(CoreError::Api {
                provider: PROVIDER.into(),
                message: format!("Unusable bid {bid} for {pair}"),
            });
        }
        Ok(bid)
    }
}

impl Default for AwesomeApiProvider {
    fn default() -> Self {
        Self::new("https://economia.awesomeapi.com.br/last/USD-BRL", "USDBRL")
    }
}

// ── AwesomeAPI response types ───────────────────────────────────────

#[derive(Deserialize)]
struct RawQuote {
    bid: Numeric,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ExchangeRateProvider for AwesomeApiProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn fetch_rate(&self) -> Result<f64, CoreError> {
        let body = wire::fetch_body(&self.client, PROVIDER, &self.url).await?;
        Self::parse_rate(&body, &self.pair)
    }
}
