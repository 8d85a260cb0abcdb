//! Exchange account adapter
//!
//! [`ExchangeAccountAdapter`] pulls the private key from a [`WalletProvider`],
//! derives the account's Stark key and submits transfers through a
//! [`GatewayClient`]. Every call is a linear sequence: claim a transaction ID,
//! derive the key, submit. The first failing step ends the call with its error.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::account::{RequestArguments, StarkAccount, WalletProvider};
use crate::crypto::keys::derive_key_pair;
use crate::error::{Error, Result};
use crate::transaction::{
    GatewayClient, GatewayResponse, TransferKind, TransferParams, TransferRequest,
};

/// Adapter between a wallet provider and the StarkEx gateway
#[derive(Clone)]
pub struct ExchangeAccountAdapter {
    provider: Arc<dyn WalletProvider>,
    gateway: Arc<dyn GatewayClient>,
}

impl ExchangeAccountAdapter {
    /// Create a new adapter
    pub fn new(provider: Arc<dyn WalletProvider>, gateway: Arc<dyn GatewayClient>) -> Self {
        Self { provider, gateway }
    }

    /// Fetch the private key and derive the public-only account
    #[instrument(skip(self))]
    pub async fn get_account(&self) -> Result<StarkAccount> {
        debug!("requesting private key from wallet provider");
        let private_key = self
            .provider
            .request(&RequestArguments::private_key())
            .await
            .map_err(|e| match e {
                e @ Error::Provider(_) => e,
                other => Error::Provider(other.to_string()),
            })?;

        let key_pair = derive_key_pair(&private_key)?;
        let account = StarkAccount::from(&key_pair);
        debug!(stark_key = %account.stark_key(), "derived stark account");
        Ok(account)
    }

    /// Stark key of the account as hex, without `0x`
    #[instrument(skip(self))]
    pub async fn get_stark_key(&self) -> Result<String> {
        Ok(self.get_account().await?.stark_key())
    }

    /// Claim a transaction ID and build a request without submitting it
    pub async fn build_request(
        &self,
        kind: TransferKind,
        params: TransferParams,
    ) -> Result<TransferRequest> {
        params.validate()?;

        let tx_id = self.gateway.first_unused_tx_id().await?;
        let account = self.get_account().await?;
        debug!(%kind, tx_id, "built transfer request");

        Ok(TransferRequest::new(tx_id, params, account.public_key()))
    }

    /// Build and submit a transfer with caller-provided parameters
    #[instrument(skip(self, params), fields(vault_id = params.vault_id))]
    pub async fn submit(
        &self,
        kind: TransferKind,
        params: TransferParams,
    ) -> Result<GatewayResponse> {
        let request = self.build_request(kind, params).await?;
        self.gateway.submit(kind, &request).await
    }

    /// Submit the playground mint request
    #[instrument(skip(self))]
    pub async fn on_mint_request(&self) -> Result<GatewayResponse> {
        self.submit(TransferKind::Mint, TransferParams::mint_fixture()).await
    }

    /// Submit the playground deposit request
    #[instrument(skip(self))]
    pub async fn on_deposit_request(&self) -> Result<GatewayResponse> {
        self.submit(TransferKind::Deposit, TransferParams::deposit_fixture()).await
    }

    /// Submit the playground withdrawal request
    #[instrument(skip(self))]
    pub async fn on_withdrawal_request(&self) -> Result<GatewayResponse> {
        self.submit(TransferKind::Withdrawal, TransferParams::withdrawal_fixture()).await
    }
}

impl std::fmt::Debug for ExchangeAccountAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeAccountAdapter").finish_non_exhaustive()
    }
}
