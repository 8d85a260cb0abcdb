//! Account management functionality
//!
//! This module provides the wallet provider capability the adapter pulls keys
//! from, and the public-only account handle derived from those keys.

mod provider;
mod stark;

pub use provider::*;
pub use stark::*;
