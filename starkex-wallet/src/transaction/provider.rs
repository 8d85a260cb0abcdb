//! Gateway provider

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use super::types::{GatewayResponse, TransferKind, TransferRequest};

/// StarkEx playground gateway
pub const DEFAULT_GATEWAY_ENDPOINT: &str = "https://gw.playground-v2.starkex.co";

/// Gateway API version path segment
pub const DEFAULT_API_VERSION: &str = "v2";

/// Gateway configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Gateway base URL
    pub endpoint: String,
    /// API version path segment
    pub api_version: String,
    /// API key (if required)
    pub api_key: Option<String>,
    /// Timeout in seconds
    pub timeout: Option<u64>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GATEWAY_ENDPOINT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            api_key: None,
            timeout: Some(30),
        }
    }
}

impl GatewayConfig {
    /// Configuration for a custom endpoint with default settings
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }
}

/// Client for the StarkEx gateway
#[async_trait]
pub trait GatewayClient: Send + Sync {
    /// Get the first transaction ID the gateway has not seen yet
    async fn first_unused_tx_id(&self) -> Result<u64>;

    /// Submit a mint request
    async fn mint(&self, request: &TransferRequest) -> Result<GatewayResponse>;

    /// Submit a deposit request
    async fn deposit(&self, request: &TransferRequest) -> Result<GatewayResponse>;

    /// Submit a withdrawal request
    async fn withdrawal(&self, request: &TransferRequest) -> Result<GatewayResponse>;

    /// Check the gateway is reachable
    async fn is_alive(&self) -> Result<bool>;

    /// Submit a request through the call matching its kind
    async fn submit(
        &self,
        kind: TransferKind,
        request: &TransferRequest,
    ) -> Result<GatewayResponse> {
        match kind {
            TransferKind::Mint => self.mint(request).await,
            TransferKind::Deposit => self.deposit(request).await,
            TransferKind::Withdrawal => self.withdrawal(request).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_playground() {
        let config = GatewayConfig::default();
        assert_eq!(config.endpoint, "https://gw.playground-v2.starkex.co");
        assert_eq!(config.api_version, "v2");
        assert_eq!(config.timeout, Some(30));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: GatewayConfig =
            serde_json::from_str(r#"{"endpoint":"http://localhost:9414","api_key":"k"}"#).unwrap();
        assert_eq!(config.endpoint, "http://localhost:9414");
        assert_eq!(config.api_version, "v2");
        assert_eq!(config.api_key.as_deref(), Some("k"));
    }
}
