//! Ports Layer - Trait definitions for external dependencies
//!
//! This module defines the interfaces (ports) at the adapter's boundary.
//! Following hexagonal architecture, these traits abstract:
//! - The swap provider adapter itself (quote + swap)
//! - Transaction signing and broadcast (external collaborators)

pub mod execution;
pub mod mocks;

pub use execution::{
    AdapterError, SubmitError, SubmittedTx, SwapAdapter, SwapParams, TxRequest, TxSender,
    TxSigner,
};
