//! Wallet provider

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Method name used to ask a provider for the account's private key
pub const PRIVATE_KEY_METHOD: &str = "private_key";

/// Arguments of a provider request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestArguments {
    /// Method name
    pub method: String,
    /// Method parameters (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl RequestArguments {
    /// Create request arguments for a method without parameters
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            params: None,
        }
    }

    /// Request for the account's private key
    pub fn private_key() -> Self {
        Self::new(PRIVATE_KEY_METHOD)
    }
}

/// A wallet capability that hands out key material on request
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Handle a request; for `private_key` the result is the key as hex
    async fn request(&self, args: &RequestArguments) -> Result<String>;
}

/// In-memory provider holding a single hex private key
#[derive(Clone)]
pub struct LocalKeyProvider {
    private_key: String,
}

impl LocalKeyProvider {
    /// Create a provider for the given hex private key
    pub fn new(private_key: impl Into<String>) -> Self {
        Self {
            private_key: private_key.into(),
        }
    }
}

impl std::fmt::Debug for LocalKeyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalKeyProvider").finish_non_exhaustive()
    }
}

#[async_trait]
impl WalletProvider for LocalKeyProvider {
    async fn request(&self, args: &RequestArguments) -> Result<String> {
        match args.method.as_str() {
            PRIVATE_KEY_METHOD => Ok(self.private_key.clone()),
            other => Err(Error::Provider(format!("unsupported method: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_provider_returns_key() {
        let provider = LocalKeyProvider::new("0x1");
        let key = provider.request(&RequestArguments::private_key()).await.unwrap();
        assert_eq!(key, "0x1");
    }

    #[tokio::test]
    async fn test_local_provider_rejects_other_methods() {
        let provider = LocalKeyProvider::new("0x1");
        let result = provider.request(&RequestArguments::new("eth_accounts")).await;
        assert!(matches!(result, Err(Error::Provider(msg)) if msg.contains("eth_accounts")));
    }

    #[test]
    fn test_request_arguments_serialization() {
        let json = serde_json::to_value(RequestArguments::private_key()).unwrap();
        assert_eq!(json, serde_json::json!({ "method": "private_key" }));
    }
}
