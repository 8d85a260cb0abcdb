//! StarkEx gateway HTTP client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use super::provider::{GatewayClient, GatewayConfig};
use super::types::{GatewayResponse, TransferKind, TransferRequest};

/// Body of `add_transaction`
#[derive(Serialize)]
struct AddTransaction<'a> {
    tx_id: u64,
    tx: WireTransfer<'a>,
}

/// Transfer as the gateway expects it inside `add_transaction`
#[derive(Serialize)]
struct WireTransfer<'a> {
    #[serde(rename = "type")]
    kind: TransferKind,
    vault_id: u64,
    stark_key: &'a str,
    token_id: &'a str,
    amount: &'a str,
}

impl<'a> AddTransaction<'a> {
    fn new(kind: TransferKind, request: &'a TransferRequest) -> Self {
        Self {
            tx_id: request.tx_id,
            tx: WireTransfer {
                kind,
                vault_id: request.vault_id,
                stark_key: &request.stark_key,
                token_id: &request.token_id,
                amount: &request.amount,
            },
        }
    }
}

/// HTTP client for the StarkEx gateway API
#[derive(Debug, Clone)]
pub struct StarkExGateway {
    /// Client configuration
    config: GatewayConfig,
    /// `{endpoint}/{version}/gateway`
    base_url: String,
    /// Underlying HTTP client
    client: reqwest::Client,
}

impl StarkExGateway {
    /// Create a new gateway client with the given configuration
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let endpoint = reqwest::Url::parse(&config.endpoint).map_err(|e| {
            Error::Config(format!("Invalid gateway endpoint {}: {}", config.endpoint, e))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "Unsupported gateway scheme: {}",
                endpoint.scheme()
            )));
        }

        let base_url = format!(
            "{}/{}/gateway",
            config.endpoint.trim_end_matches('/'),
            config.api_version.trim_matches('/')
        );

        let mut builder = reqwest::Client::builder().default_headers(Self::build_headers(&config)?);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            base_url,
            client,
        })
    }

    /// Create a client for the public playground gateway
    pub fn playground() -> Result<Self> {
        Self::new(GatewayConfig::default())
    }

    /// Get the configuration
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn build_headers(config: &GatewayConfig) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        if let Some(ref key) = config.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|e| Error::Config(format!("Invalid API key: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    async fn add_transaction(
        &self,
        kind: TransferKind,
        request: &TransferRequest,
    ) -> Result<GatewayResponse> {
        let url = format!("{}/add_transaction", self.base_url);
        info!(%kind, tx_id = request.tx_id, vault_id = request.vault_id, "submitting transfer");

        let resp = self
            .client
            .post(&url)
            .json(&AddTransaction::new(kind, request))
            .send()
            .await?;

        let response: GatewayResponse = Self::read_json(resp).await?;
        info!(%kind, tx_id = request.tx_id, code = %response.code, "gateway answered");
        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "gateway returned an error status");
            return Err(Error::Gateway {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl GatewayClient for StarkExGateway {
    async fn first_unused_tx_id(&self) -> Result<u64> {
        let url = format!("{}/testing/get_first_unused_tx_id", self.base_url);
        let resp = self.client.get(&url).send().await?;
        let tx_id: u64 = Self::read_json(resp).await?;
        debug!(tx_id, "claimed first unused tx id");
        Ok(tx_id)
    }

    async fn mint(&self, request: &TransferRequest) -> Result<GatewayResponse> {
        self.add_transaction(TransferKind::Mint, request).await
    }

    async fn deposit(&self, request: &TransferRequest) -> Result<GatewayResponse> {
        self.add_transaction(TransferKind::Deposit, request).await
    }

    async fn withdrawal(&self, request: &TransferRequest) -> Result<GatewayResponse> {
        self.add_transaction(TransferKind::Withdrawal, request).await
    }

    async fn is_alive(&self) -> Result<bool> {
        let url = format!("{}/is_alive", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_joins_version() {
        let gateway =
            StarkExGateway::new(GatewayConfig::with_endpoint("http://localhost:9414/")).unwrap();
        assert_eq!(gateway.base_url, "http://localhost:9414/v2/gateway");
    }

    #[test]
    fn test_rejects_malformed_endpoint() {
        let result = StarkExGateway::new(GatewayConfig::with_endpoint("not a url"));
        assert!(matches!(result, Err(Error::Config(_))));

        let result = StarkExGateway::new(GatewayConfig::with_endpoint("ftp://gw.example"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_wire_body_shape() {
        let request = TransferRequest {
            tx_id: 7,
            vault_id: 1924014660,
            amount: "8".to_string(),
            token_id: "0x3ef8".to_string(),
            stark_key: "0xabc".to_string(),
        };
        let body =
            serde_json::to_value(AddTransaction::new(TransferKind::Deposit, &request)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "tx_id": 7,
                "tx": {
                    "type": "DepositRequest",
                    "vault_id": 1924014660u64,
                    "stark_key": "0xabc",
                    "token_id": "0x3ef8",
                    "amount": "8"
                }
            })
        );
    }
}
