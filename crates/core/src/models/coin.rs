use serde::{Deserialize, Serialize};

/// Normalized snapshot of one tradable asset's price and recent change.
///
/// Built once per load cycle from a raw ticker payload and never mutated
/// afterwards; a reload replaces the whole set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinRecord {
    /// Stable provider identifier (e.g., "btc-bitcoin")
    pub id: String,

    /// Human-readable name (e.g., "Bitcoin")
    pub name: String,

    /// Ticker symbol as delivered by the API (e.g., "BTC")
    pub symbol: String,

    /// Current price in USD, always finite and >= 0
    pub price_usd: f64,

    /// Signed 24h change in percent, always finite (missing → 0)
    pub change_percent_24h: f64,
}

impl CoinRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        symbol: impl Into<String>,
        price_usd: f64,
        change_percent_24h: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            symbol: symbol.into(),
            price_usd,
            change_percent_24h,
        }
    }

    /// `true` when the 24h change counts as "up" (zero included).
    pub fn is_up(&self) -> bool {
        self.change_percent_24h >= 0.0
    }

    /// Price converted to local currency at the given rate.
    pub fn price_local(&self, rate: &ExchangeRate) -> f64 {
        self.price_usd * rate.value
    }

    /// Case-insensitive substring match on name or symbol.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.symbol.to_lowercase().contains(needle)
    }
}

/// Where the current exchange rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateSource {
    /// Hardcoded fallback from the configuration
    Fallback,
    /// Successfully fetched from the exchange-rate provider
    Live,
}

/// Amount of local currency per 1 USD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub value: f64,
    pub source: RateSource,
}

impl ExchangeRate {
    pub fn fallback(value: f64) -> Self {
        Self {
            value,
            source: RateSource::Fallback,
        }
    }

    pub fn live(value: f64) -> Self {
        Self {
            value,
            source: RateSource::Live,
        }
    }

    pub fn is_live(&self) -> bool {
        self.source == RateSource::Live
    }
}
