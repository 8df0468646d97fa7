use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single point of the synthetic price chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Axis label ("-5h" … "now")
    pub label: String,
    /// Wall-clock time this point stands for
    pub timestamp: DateTime<Utc>,
    pub price_usd: f64,
}

/// A complete chart data set, oldest point first.
///
/// The core generates these; the chart collaborator only draws them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceChart {
    pub coin_id: String,
    pub points: Vec<ChartPoint>,
}

impl PriceChart {
    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price_usd).collect()
    }
}

/// Everything the chart section shows for the selected coin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPanel {
    /// Value the chart's select control must show
    pub selected_coin_id: String,
    /// e.g. "R$ 377.000,00"
    pub price_local: String,
    /// e.g. "$ 65000.00"
    pub price_usd: String,
    pub chart: PriceChart,
}
