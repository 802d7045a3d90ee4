use thiserror::Error;
pub use url::ParseError as UrlParseError;

/// Error types for client construction.
///
/// Request-time failures never surface here; the gateway normalizes them
/// into [`Outcome`](crate::Outcome) values. Only configuration mistakes
/// caught while building a client are returned as `Err`.
#[derive(Error, Debug)]
pub enum WelfareError {
    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),

    /// Error parsing the configured base URL.
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] UrlParseError),
}

/// Result type for client construction.
pub type WelfareResult<T> = Result<T, WelfareError>;
