use serde::{Deserialize, Serialize};

use super::view::Tone;

/// The single saved holding used by the profit calculator.
///
/// Stored as JSON `{"coinId", "amount", "buyPriceUsd"}`. Entries saved under
/// the older `{"id", "amount", "buyPrice"}` layout are still readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioEntry {
    #[serde(alias = "id")]
    pub coin_id: String,

    pub amount: f64,

    #[serde(alias = "buyPrice")]
    pub buy_price_usd: f64,
}

impl PortfolioEntry {
    pub fn new(coin_id: impl Into<String>, amount: f64, buy_price_usd: f64) -> Self {
        Self {
            coin_id: coin_id.into(),
            amount,
            buy_price_usd,
        }
    }

    /// Input field values that reproduce this entry.
    pub fn to_inputs(&self) -> CalculatorInputs {
        CalculatorInputs {
            coin_id: self.coin_id.clone(),
            amount: self.amount.to_string(),
            buy_price: self.buy_price_usd.to_string(),
        }
    }
}

/// Raw contents of the calculator's form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    /// Value of the calculator's coin select
    pub coin_id: String,
    /// Amount field, as typed
    pub amount: String,
    /// Buy-price (USD) field, as typed
    pub buy_price: String,
}

impl CalculatorInputs {
    pub fn new(
        coin_id: impl Into<String>,
        amount: impl Into<String>,
        buy_price: impl Into<String>,
    ) -> Self {
        Self {
            coin_id: coin_id.into(),
            amount: amount.into(),
            buy_price: buy_price.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.amount.is_empty() && self.buy_price.is_empty()
    }
}

/// Result panel contents after a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitReport {
    pub coin_id: String,

    /// amount × current price × rate
    pub current_value_local: f64,

    /// amount × buy price × rate
    pub initial_value_local: f64,

    /// current − initial
    pub profit_local: f64,

    /// `current_value_local` as localized currency (e.g., "R$ 188.500,00")
    pub current_value_display: String,

    /// `profit_local` as localized currency
    pub profit_display: String,

    /// Positive when profit >= 0
    pub profit_tone: Tone,
}

/// What `restore` found in storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RestoreOutcome {
    /// No entry was saved
    NothingSaved,
    /// Inputs were repopulated and the calculation re-run
    Restored(ProfitReport),
    /// The saved entry names a coin missing from the current snapshot;
    /// inputs were left alone and the entry kept in storage
    Stale { coin_id: String },
}
