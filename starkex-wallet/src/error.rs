//! Error types for the starkex-wallet library

use thiserror::Error;

/// Custom error type for starkex-wallet operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Key derivation error: {0}")]
    KeyDerivation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Gateway error ({status}): {body}")]
    Gateway {
        /// HTTP status returned by the gateway
        status: u16,
        /// Raw response body
        body: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Result type for starkex-wallet operations
pub type Result<T> = std::result::Result<T, Error>;
