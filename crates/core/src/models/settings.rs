use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Separators and currency symbol used for localized number display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLocale {
    pub grouping_separator: char,
    pub decimal_separator: char,
    /// Prefix for localized currency strings (e.g., "R$")
    pub currency_symbol: String,
}

impl NumberLocale {
    /// Brazilian Portuguese with Brazilian real: `R$ 1.234,56`.
    pub fn pt_br() -> Self {
        Self {
            grouping_separator: '.',
            decimal_separator: ',',
            currency_symbol: "R$".to_string(),
        }
    }

    /// US English with a custom currency symbol: `$ 1,234.56`.
    pub fn en_us(currency_symbol: impl Into<String>) -> Self {
        Self {
            grouping_separator: ',',
            decimal_separator: '.',
            currency_symbol: currency_symbol.into(),
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::pt_br()
    }
}

/// Dashboard configuration. Every field has a default, so a partial JSON
/// file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Coin ticker list endpoint
    pub ticker_url: String,

    /// USD → local currency quote endpoint
    pub exchange_rate_url: String,

    /// Sentiment index endpoint
    pub sentiment_url: String,

    /// ISO code of the local currency (e.g., "BRL")
    pub local_currency: String,

    /// Rate used until (or unless) the exchange-rate fetch succeeds
    pub fallback_exchange_rate: f64,

    pub locale: NumberLocale,

    /// Records shown in the ticker marquee (before duplication)
    pub ticker_limit: usize,

    /// Maximum rows in the coin list
    pub list_limit: usize,

    /// Points in the synthetic price chart
    pub chart_points: usize,

    /// Maximum relative perturbation of each chart point (0.02 = ±2%)
    pub chart_jitter: f64,

    /// Pause before re-running a restored calculation
    pub restore_delay_ms: u64,

    /// Key-value store key holding the saved portfolio entry
    pub storage_key: String,
}

impl DashboardConfig {
    pub fn restore_delay(&self) -> Duration {
        Duration::from_millis(self.restore_delay_ms)
    }

    /// Key of the quote object in the exchange-rate payload (e.g., "USDBRL").
    pub fn exchange_rate_pair(&self) -> String {
        format!("USD{}", self.local_currency.to_uppercase())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            ticker_url: "https://api.coinpaprika.com/v1/tickers?limit=100".to_string(),
            exchange_rate_url: "https://economia.awesomeapi.com.br/last/USD-BRL".to_string(),
            sentiment_url: "https://api.alternative.me/fng/".to_string(),
            local_currency: "BRL".to_string(),
            fallback_exchange_rate: 5.80,
            locale: NumberLocale::default(),
            ticker_limit: 20,
            list_limit: 50,
            chart_points: 6,
            chart_jitter: 0.02,
            restore_delay_ms: 500,
            storage_key: "portfolio".to_string(),
        }
    }
}
