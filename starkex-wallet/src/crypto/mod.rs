//! Cryptographic primitives and operations
//!
//! This module provides Stark-curve key parsing and public key derivation.
//! The curve arithmetic itself lives in `starknet-crypto`.

pub mod keys;

pub use keys::*;
