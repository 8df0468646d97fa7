use crate::models::settings::DashboardConfig;

use super::alternative_me::AlternativeMeProvider;
use super::awesomeapi::AwesomeApiProvider;
use super::coinpaprika::CoinPaprikaProvider;
use super::traits::{ExchangeRateProvider, SentimentProvider, TickerProvider};

/// The three data sources the dashboard loads from.
///
/// Each slot is an independent trait object, so one API can be swapped
/// (or mocked) without touching the other two.
pub struct ProviderSet {
    pub tickers: Box<dyn TickerProvider>,
    pub exchange_rate: Box<dyn ExchangeRateProvider>,
    pub sentiment: Box<dyn SentimentProvider>,
}

impl ProviderSet {
    pub fn new(
        tickers: Box<dyn TickerProvider>,
        exchange_rate: Box<dyn ExchangeRateProvider>,
        sentiment: Box<dyn SentimentProvider>,
    ) -> Self {
        Self {
            tickers,
            exchange_rate,
            sentiment,
        }
    }

    /// Create the default providers pointed at the configured endpoints.
    pub fn new_with_defaults(config: &DashboardConfig) -> Self {
        Self::new(
            // CoinPaprika — ticker list, no API key needed
            Box::new(CoinPaprikaProvider::new(config.ticker_url.clone())),
            // AwesomeAPI — USD quote, no API key needed
            Box::new(AwesomeApiProvider::new(
                config.exchange_rate_url.clone(),
                config.exchange_rate_pair(),
            )),
            // Alternative.me — Fear & Greed index, no API key needed
            Box::new(AlternativeMeProvider::new(config.sentiment_url.clone())),
        )
    }

    /// Provider names in load order: rate, sentiment, tickers.
    pub fn names(&self) -> [&str; 3] {
        [
            self.exchange_rate.name(),
            self.sentiment.name(),
            self.tickers.name(),
        ]
    }
}

impl std::fmt::Debug for ProviderSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSet")
            .field("tickers", &self.tickers.name())
            .field("exchange_rate", &self.exchange_rate.name())
            .field("sentiment", &self.sentiment.name())
            .finish()
    }
}
