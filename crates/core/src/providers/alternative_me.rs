use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::traits::SentimentProvider;
use super::wire::{self, Numeric};
use crate::errors::CoreError;
use crate::models::sentiment::SentimentReading;

const PROVIDER: &str = "Alternative.me";

/// Alternative.me Fear & Greed index provider.
///
/// - **Free**: No API key.
/// - **Endpoint**: `/fng/` → `{"data": [{"value": "45",
///   "value_classification": "Fear", "timestamp": "1700000000"}]}`
///
/// Only the leading (most recent) data entry is used.
pub struct AlternativeMeProvider {
    client: Client,
    url: String,
}

impl AlternativeMeProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: wire::build_client(),
            url: url.into(),
        }
    }

    /// Read the leading entry of a raw `/fng/` body. Values are clamped to 0..=100.
    pub fn parse_sentiment(body: &str) -> Result<SentimentReading, CoreError> {
        let resp: RawResponse = serde_json::from_str(body).map_err(|e| CoreError::Api {
            provider: PROVIDER.into(),
            message: format!("Failed to parse sentiment index: {e}"),
        })?;

        let entry = resp.data.into_iter().next().ok_or_else(|| CoreError::Api {
            provider: PROVIDER.into(),
            message: "Sentiment payload has no data entries".into(),
        })?;

        let value = entry
            .value
            .value()
            .filter(|v| v.is_finite())
            .ok_or_else(|| CoreError::Api {
                provider: PROVIDER.into(),
                message: "Invalid sentiment value".into(),
            })?;

        let timestamp = entry
            .timestamp
            .as_ref()
            .and_then(Numeric::value)
            .and_then(|secs| chrono::DateTime::from_timestamp(secs as i64, 0));

        Ok(SentimentReading {
            value: value.round().clamp(0.0, 100.0) as u8,
            classification: entry.value_classification,
            timestamp,
        })
    }
}

impl Default for AlternativeMeProvider {
    fn default() -> Self {
        Self::new("https://api.alternative.me/fng/")
    }
}

// ── Alternative.me response types ───────────────────────────────────

#[derive(Deserialize)]
struct RawResponse {
    data: Vec<RawEntry>,
}

#[derive(Deserialize)]
struct RawEntry {
    value: Numeric,
    #[serde(default)]
    value_classification: String,
    #[serde(default)]
    timestamp: Option<Numeric>,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl SentimentProvider for AlternativeMeProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn fetch_sentiment(&self) -> Result<SentimentReading, CoreError> {
        let body = wire::fetch_body(&self.client, PROVIDER, &self.url).await?;
        Self::parse_sentiment(&body)
    }
}
