//! Conveyor Adapter
//!
//! Implementation of the SwapAdapter port for the Conveyor swap aggregator.
//! Handles quote fetching, normalization and swap forwarding.

mod client;
mod request;

pub use client::{get_tx, get_tx_data, normalize_quote, ConveyorClient, ConveyorConfig, NAME};
pub use request::QuoteRequest;
pub use crate::ports::execution::AdapterError;
