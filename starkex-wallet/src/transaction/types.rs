//! Common transfer types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::crypto::keys::PublicKey;
use crate::error::{Error, Result};

/// Transfer kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransferKind {
    /// Mint tokens into a vault
    #[serde(rename = "MintRequest")]
    Mint,
    /// Deposit tokens into a vault
    #[serde(rename = "DepositRequest")]
    Deposit,
    /// Withdraw tokens from a vault
    #[serde(rename = "WithdrawalRequest")]
    Withdrawal,
}

impl TransferKind {
    /// Transaction type tag understood by the gateway
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mint => "MintRequest",
            Self::Deposit => "DepositRequest",
            Self::Withdrawal => "WithdrawalRequest",
        }
    }
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vault, token and amount of a transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferParams {
    /// Vault ID
    pub vault_id: u64,
    /// Token ID (0x-prefixed hex)
    pub token_id: String,
    /// Amount in quantized units, as a decimal string
    pub amount: String,
}

impl TransferParams {
    /// Playground mint fixture
    pub fn mint_fixture() -> Self {
        Self {
            vault_id: 1654615998,
            token_id: "0x400de4b5a92118719c78df48f4ff31e78de58575487ce1eaf19922ad9b8a714"
                .to_string(),
            amount: "6".to_string(),
        }
    }

    /// Playground deposit fixture
    pub fn deposit_fixture() -> Self {
        Self {
            vault_id: 1924014660,
            token_id: "0x3ef811e040c4bc9f9eee715441cee470f5d5aff69b9cd9aca7884f5a442a890"
                .to_string(),
            amount: "8".to_string(),
        }
    }

    /// Playground withdrawal fixture
    pub fn withdrawal_fixture() -> Self {
        Self {
            vault_id: 612008755,
            token_id: "0x2dd48fd7a024204f7c1bd874da5e709d4713d60c8a70639eb1167b367a9c378"
                .to_string(),
            amount: "8".to_string(),
        }
    }

    /// Fixture for a transfer kind
    pub fn fixture(kind: TransferKind) -> Self {
        match kind {
            TransferKind::Mint => Self::mint_fixture(),
            TransferKind::Deposit => Self::deposit_fixture(),
            TransferKind::Withdrawal => Self::withdrawal_fixture(),
        }
    }

    /// Check the token ID and amount are well formed
    pub fn validate(&self) -> Result<()> {
        let digits = self.token_id.strip_prefix("0x").ok_or_else(|| {
            Error::InvalidInput(format!("Token ID must be 0x-prefixed: {}", self.token_id))
        })?;
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidInput(format!("Invalid token ID: {}", self.token_id)));
        }

        if self.amount.is_empty() || !self.amount.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::InvalidInput(format!("Invalid amount: {:?}", self.amount)));
        }

        Ok(())
    }
}

/// Transfer request submitted to the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Gateway-issued transaction ID
    pub tx_id: u64,
    /// Vault ID
    pub vault_id: u64,
    /// Amount, as a decimal string
    pub amount: String,
    /// Token ID
    pub token_id: String,
    /// Stark key, 0x-prefixed
    pub stark_key: String,
}

impl TransferRequest {
    /// Build a request for the given transaction ID, parameters and key
    pub fn new(tx_id: u64, params: TransferParams, stark_key: &PublicKey) -> Self {
        Self {
            tx_id,
            vault_id: params.vault_id,
            amount: params.amount,
            token_id: params.token_id,
            stark_key: stark_key.to_prefixed_hex(),
        }
    }
}

/// Gateway answer to a submitted transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayResponse {
    /// Status code, e.g. `TRANSACTION_PENDING`
    pub code: String,
    /// Transaction ID echoed by the gateway
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<u64>,
    /// Additional message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl GatewayResponse {
    /// Whether the gateway accepted the transaction
    pub fn is_accepted(&self) -> bool {
        matches!(self.code.as_str(), "TRANSACTION_PENDING" | "TRANSACTION_RECEIVED")
    }
}
