use reqwest::Client;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;

/// Build the HTTP client shared by every provider.
pub(crate) fn build_client() -> Client {
    let builder = Client::builder();
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.timeout(Duration::from_secs(30));
    builder.build().unwrap_or_else(|_| Client::new())
}

/// GET `url` and return the body, rejecting non-2xx responses.
pub(crate) async fn fetch_body(
    client: &Client,
    provider: &str,
    url: &str,
) -> Result<String, CoreError> {
    let resp = client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(CoreError::HttpStatus {
            provider: provider.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(resp.text().await?)
}

/// A numeric JSON field that some APIs send as a string ("5.80").
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    /// Parsed value, or `None` when the text is not a number.
    pub(crate) fn value(&self) -> Option<f64> {
        match self {
            Numeric::Number(n) => Some(*n),
            Numeric::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_accepts_numbers_and_strings() {
        let n: Numeric = serde_json::from_str("5.8").unwrap();
        assert_eq!(n.value(), Some(5.8));
        let s: Numeric = serde_json::from_str("\" 5.80 \"").unwrap();
        assert_eq!(s.value(), Some(5.8));
        let bad: Numeric = serde_json::from_str("\"n/a\"").unwrap();
        assert_eq!(bad.value(), None);
    }
}
