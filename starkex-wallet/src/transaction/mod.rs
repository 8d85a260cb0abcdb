//! Transaction functionality
//!
//! This module provides the transfer request types and the StarkEx gateway
//! client the requests are submitted through.

pub mod types;
pub mod provider;
mod gateway;

pub use types::*;
pub use provider::*;
pub use gateway::*;
