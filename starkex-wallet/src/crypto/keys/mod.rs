//! Key derivation and management
//!
//! This module provides the key types used for StarkEx accounts.

mod stark;

pub use stark::*;
