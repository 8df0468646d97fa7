use thiserror::Error;

/// Unified error type for the entire coin-dashboard-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("API error ({provider}): HTTP status {status}")]
    HttpStatus {
        provider: String,
        status: u16,
    },

    // ── Storage / Serialization ─────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Dashboard Logic ─────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Coin not found: {0}")]
    CoinNotFound(String),

    #[error("Coin data has not been loaded yet")]
    NotLoaded,

    #[error("Dashboard initialization failed: {0}")]
    InitializationFailed(String),
}

impl CoreError {
    /// Message shown to the user when the dashboard cannot be populated.
    pub const LOAD_ALERT: &'static str = "Failed to load data. Check your connection.";

    /// Message shown to the user when calculator inputs are not numbers.
    pub const FILL_VALUES_ALERT: &'static str = "Fill in the values!";
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors embed the request URL; keep the path, drop the query.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
