use serde::{Deserialize, Serialize};

use super::coin::ExchangeRate;
use super::portfolio::RestoreOutcome;
use super::sentiment::SentimentBand;

/// Direction arrow shown next to a ticker change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn for_change(change_percent: f64) -> Self {
        if change_percent >= 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
        }
    }
}

/// Positive/negative styling of a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Positive,
    Negative,
}

impl Tone {
    /// Zero counts as positive.
    pub fn for_value(value: f64) -> Self {
        if value >= 0.0 {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }

    pub fn color_hex(&self) -> &'static str {
        match self {
            Tone::Positive => "#10b981",
            Tone::Negative => "#ef4444",
        }
    }
}

/// One item of the scrolling ticker marquee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerItem {
    pub symbol: String,
    /// e.g. "$65000.00"
    pub price_usd: String,
    /// e.g. "(▼ -1.50%)"
    pub change: String,
    pub direction: Direction,
}

/// One row of the ranked coin list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ListRow {
    Coin(CoinRow),
    /// Rendered alone when the (filtered) collection is empty
    NothingFound,
}

impl ListRow {
    pub const NOTHING_FOUND_TEXT: &'static str = "Nothing found.";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinRow {
    /// Coin id emitted when the row is clicked
    pub coin_id: String,
    pub name: String,
    pub symbol: String,
    /// e.g. "R$ 377.000,00"
    pub price_local: String,
    /// e.g. "$65000.00"
    pub price_usd: String,
    /// e.g. "-1.50%"
    pub change: String,
    pub change_tone: Tone,
}

/// An `(id → "name (symbol)")` pair for a coin select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// State of the sentiment widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SentimentDisplay {
    Available {
        /// e.g. "45 (Fear)"
        label: String,
        /// Bar width in percent, equal to the index value
        bar_width_percent: u8,
        band: SentimentBand,
    },
    Unavailable,
}

impl SentimentDisplay {
    pub const UNAVAILABLE_TEXT: &'static str = "N/A";

    pub fn label(&self) -> &str {
        match self {
            SentimentDisplay::Available { label, .. } => label,
            SentimentDisplay::Unavailable => Self::UNAVAILABLE_TEXT,
        }
    }
}

/// All rendered sections of the dashboard except the chart and calculator,
/// which their services own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub ticker: Vec<TickerItem>,
    pub list: Vec<ListRow>,
    pub calculator_options: Vec<SelectOption>,
    pub chart_options: Vec<SelectOption>,
    pub sentiment: SentimentDisplay,
    pub rate: ExchangeRate,
}

impl DashboardView {
    /// The state before any load: nothing listed, sentiment unknown.
    pub fn empty(rate: ExchangeRate) -> Self {
        Self {
            ticker: Vec::new(),
            list: Vec::new(),
            calculator_options: Vec::new(),
            chart_options: Vec::new(),
            sentiment: SentimentDisplay::Unavailable,
            rate,
        }
    }
}

/// Outcome of one successful load cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub coin_count: usize,
    pub rate: ExchangeRate,
    pub sentiment_available: bool,
    pub restore: RestoreOutcome,
}
