//! Error types for the Palpiteiro application.

use thiserror::Error;

/// The main error type for Palpiteiro.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/TUI related errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Channel communication errors
    #[error("Channel error: {0}")]
    Channel(String),

    /// Network connectivity errors
    #[error("Network error: {0}")]
    Network(String),

    /// The backend did not answer within the client timeout.
    #[error("Tempo limite de conexão excedido")]
    Timeout,

    /// The backend answered with a non-success status code.
    #[error("API error: {status}")]
    Api { status: u16 },
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a new config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new channel error.
    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }

    /// Create a new network error.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Check if this error is recoverable (user can retry).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout | Self::Api { .. } | Self::Channel(_)
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if let Some(status) = err.status() {
            Self::Api {
                status: status.as_u16(),
            }
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(Error::Timeout.is_recoverable());
        assert!(Error::Api { status: 503 }.is_recoverable());
        assert!(Error::network("connection refused").is_recoverable());
        assert!(!Error::config("bad toml").is_recoverable());
        assert!(!Error::terminal("stdout is not a terminal").is_recoverable());
    }

    #[test]
    fn test_api_error_message_carries_status() {
        assert_eq!(Error::Api { status: 404 }.to_string(), "API error: 404");
    }
}
