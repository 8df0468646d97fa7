use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One reading of the market sentiment index (0 = extreme fear, 100 = extreme greed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReading {
    pub value: u8,
    pub classification: String,
    /// When the index was computed, if the API reported it
    pub timestamp: Option<DateTime<Utc>>,
}

impl SentimentReading {
    pub fn new(value: u8, classification: impl Into<String>) -> Self {
        Self {
            value: value.min(100),
            classification: classification.into(),
            timestamp: None,
        }
    }

    pub fn band(&self) -> SentimentBand {
        SentimentBand::for_value(self.value)
    }
}

/// Color band of the sentiment bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentBand {
    /// value < 25
    Alert,
    /// 25..=49
    Warning,
    /// 50..=74
    Informational,
    /// value >= 75
    Positive,
}

impl SentimentBand {
    pub fn for_value(value: u8) -> Self {
        match value {
            0..=24 => SentimentBand::Alert,
            25..=49 => SentimentBand::Warning,
            50..=74 => SentimentBand::Informational,
            _ => SentimentBand::Positive,
        }
    }

    pub fn color_hex(&self) -> &'static str {
        match self {
            SentimentBand::Alert => "#ef4444",
            SentimentBand::Warning => "#f59e0b",
            SentimentBand::Informational => "#3b82f6",
            SentimentBand::Positive => "#10b981",
        }
    }
}

impl std::fmt::Display for SentimentBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentBand::Alert => write!(f, "Alert"),
            SentimentBand::Warning => write!(f, "Warning"),
            SentimentBand::Informational => write!(f, "Informational"),
            SentimentBand::Positive => write!(f, "Positive"),
        }
    }
}
