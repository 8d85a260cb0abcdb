//! StarkEx account handle

use crate::crypto::keys::{KeyPair, PublicKey};

/// Public-only view of a StarkEx account
///
/// Holds no private material. The Stark key is the X-coordinate of the
/// account's public point and identifies the account on the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarkAccount {
    public_key: PublicKey,
}

impl StarkAccount {
    /// Create an account from a public key
    pub fn new(public_key: PublicKey) -> Self {
        Self { public_key }
    }

    /// Get the public key
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Stark key as hex, without `0x`
    pub fn stark_key(&self) -> String {
        self.public_key.to_hex()
    }
}

impl From<&KeyPair> for StarkAccount {
    fn from(key_pair: &KeyPair) -> Self {
        Self::new(*key_pair.public_key())
    }
}
