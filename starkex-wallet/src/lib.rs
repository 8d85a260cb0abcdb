//! StarkEx Wallet - exchange account adapter
//!
//! This library bridges a wallet provider that can hand out a private key to
//! the StarkEx gateway. It derives the Stark key (the public X-coordinate on
//! the Stark curve) for the account and submits mint, deposit and withdrawal
//! requests on its behalf.

pub mod error;
pub mod crypto;
pub mod account;
pub mod transaction;
pub mod adapter;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use account::{LocalKeyProvider, RequestArguments, StarkAccount, WalletProvider};
pub use adapter::ExchangeAccountAdapter;
pub use transaction::{
    GatewayClient, GatewayConfig, GatewayResponse, StarkExGateway, TransferKind, TransferParams,
    TransferRequest,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
