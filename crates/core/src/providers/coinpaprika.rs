use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::traits::TickerProvider;
use super::wire::{self, Numeric};
use crate::errors::CoreError;
use crate::models::coin::CoinRecord;

const PROVIDER: &str = "CoinPaprika";

/// CoinPaprika API provider for the ranked coin ticker list.
///
/// - **Free**: No API key required.
/// - **Endpoint**: `/v1/tickers?limit={n}`, already ordered by market-cap rank.
/// - **Quotes**: nested `quotes.USD.{price, percent_change_24h}`.
pub struct CoinPaprikaProvider {
    client: Client,
    url: String,
}

impl CoinPaprikaProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: wire::build_client(),
            url: url.into(),
        }
    }

    /// Normalize a raw `/tickers` body into coin records.
    ///
    /// Entries without a usable USD price are skipped. A missing, null or
    /// non-numeric 24h change becomes 0.
    pub fn parse_tickers(body: &str) -> Result<Vec<CoinRecord>, CoreError> {
        let raw: Vec<RawTicker> = serde_json::from_str(body).map_err(|e| CoreError::Api {
            provider: PROVIDER.into(),
            message: format!("Failed to parse ticker list: {e}"),
        })?;

        let total = raw.len();
        let records: Vec<CoinRecord> = raw.into_iter().filter_map(RawTicker::normalize).collect();
        if records.len() < total {
            log::warn!(
                "{PROVIDER}: skipped {} of {total} ticker entries without a valid USD price",
                total - records.len()
            );
        }
        Ok(records)
    }
}

impl Default for CoinPaprikaProvider {
    fn default() -> Self {
        Self::new("https://api.coinpaprika.com/v1/tickers?limit=100")
    }
}

// ── CoinPaprika API response types ──────────────────────────────────

#[derive(Deserialize)]
struct RawTicker {
    id: String,
    name: String,
    symbol: String,
    #[serde(default)]
    quotes: Option<RawQuotes>,
}

#[derive(Deserialize)]
struct RawQuotes {
    #[serde(rename = "USD")]
    usd: Option<RawQuote>,
}

#[derive(Deserialize)]
struct RawQuote {
    #[serde(default)]
    price: Option<Numeric>,
    #[serde(default)]
    percent_change_24h: Option<Numeric>,
}

impl RawTicker {
    fn normalize(self) -> Option<CoinRecord> {
        let quote = self.quotes?.usd?;
        let price = quote.price.as_ref().and_then(Numeric::value);
        let price_usd = match price {
            Some(p) if p.is_finite() && p >= 0.0 => p,
            _ => {
                log::warn!("{PROVIDER}: dropping {}: invalid USD price", self.id);
                return None;
            }
        };
        let change_percent_24h = quote
            .percent_change_24h
            .as_ref()
            .and_then(Numeric::value)
            .filter(|c| c.is_finite())
            .unwrap_or(0.0);

        Some(CoinRecord {
            id: self.id,
            name: self.name,
            symbol: self.symbol,
            price_usd,
            change_percent_24h,
        })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl TickerProvider for CoinPaprikaProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn fetch_tickers(&self) -> Result<Vec<CoinRecord>, CoreError> {
        let body = wire::fetch_body(&self.client, PROVIDER, &self.url).await?;
        Self::parse_tickers(&body)
    }
}
