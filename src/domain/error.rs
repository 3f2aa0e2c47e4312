use thiserror::Error;

/// Failures of a single translation round trip.
///
/// Every failure of the provider call is caught at the translator boundary
/// and returned as one of these variants; none of them is fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    #[error("API key is required")]
    MissingCredential,

    #[error("No content returned from the provider")]
    EmptyResponse,

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    ProviderError(String),
}

impl TranslationError {
    /// Whether resubmitting the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::MissingCredential)
    }
}

#[derive(Error, Debug)]
pub enum TransproError {
    #[error("Database error: {0}")]
    Database(#[from] tokio_rusqlite::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
