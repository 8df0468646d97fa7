use crate::errors::CoreError;
use crate::models::coin::{CoinRecord, ExchangeRate};
use crate::models::sentiment::SentimentReading;
use crate::providers::registry::ProviderSet;

/// Everything one load cycle fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    pub coins: Vec<CoinRecord>,
    pub rate: ExchangeRate,
    /// `None` when the sentiment fetch failed
    pub sentiment: Option<SentimentReading>,
}

/// Runs the three fetches of a load cycle with per-source fault tolerance.
///
/// Rate and sentiment are fetched concurrently. The ticker list is fetched
/// only after both have settled, so list prices never render against a rate
/// that is still in flight.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketService;

impl MarketService {
    pub fn new() -> Self {
        Self
    }

    /// Fetch a full snapshot.
    ///
    /// - Rate failure → `fallback`'s value stays in effect, reported as
    ///   `RateSource::Fallback` even if it was live before (warning only).
    /// - Sentiment failure → `sentiment: None`.
    /// - Ticker failure or an empty list → `CoreError::InitializationFailed`.
    pub async fn load(
        &self,
        providers: &ProviderSet,
        fallback: ExchangeRate,
    ) -> Result<MarketSnapshot, CoreError> {
        let (rate, sentiment) = futures::join!(
            providers.exchange_rate.fetch_rate(),
            providers.sentiment.fetch_sentiment()
        );

        let rate = match rate {
            Ok(value) => ExchangeRate::live(value),
            Err(e) => {
                log::warn!(
                    "{} unavailable ({e}); using fallback rate {}",
                    providers.exchange_rate.name(),
                    fallback.value
                );
                ExchangeRate::fallback(fallback.value)
            }
        };

        let sentiment = match sentiment {
            Ok(reading) => Some(reading),
            Err(e) => {
                log::warn!("{} unavailable: {e}", providers.sentiment.name());
                None
            }
        };

        let coins = providers.tickers.fetch_tickers().await.map_err(|e| {
            log::error!("{} failed: {e}", providers.tickers.name());
            CoreError::InitializationFailed(CoreError::LOAD_ALERT.to_string())
        })?;
        if coins.is_empty() {
            log::error!("{} returned no usable coins", providers.tickers.name());
            return Err(CoreError::InitializationFailed(CoreError::LOAD_ALERT.to_string()));
        }

        Ok(MarketSnapshot {
            coins,
            rate,
            sentiment,
        })
    }
}
