use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::coin::CoinRecord;
use crate::models::sentiment::SentimentReading;

/// Source of the coin ticker list.
///
/// Returned records must already be normalized (finite prices, missing
/// change → 0) and in the provider's rank order.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait TickerProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    async fn fetch_tickers(&self) -> Result<Vec<CoinRecord>, CoreError>;
}

/// Source of the USD → local currency exchange rate.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ExchangeRateProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Amount of local currency per 1 USD. Always finite and > 0 on success.
    async fn fetch_rate(&self) -> Result<f64, CoreError>;
}

/// Source of the market sentiment index.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait SentimentProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch_sentiment(&self) -> Result<SentimentReading, CoreError>;
}
