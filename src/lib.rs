//! Conveyor - swap aggregator adapter library
//!
//! Queries the Conveyor quote API across seven EVM chains, normalizes quotes
//! into a common shape and forwards the resulting transaction to an external
//! signer/broadcaster.
//!
//! # Modules
//!
//! - `domain`: Chain table, native token sentinel, gas margin, quote records
//! - `ports`: Trait abstractions (SwapAdapter, TxSigner, TxSender)
//! - `adapters`: External implementations (Conveyor API client, CLI)
//! - `config`: Configuration loading and validation

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod config;

pub use adapters::conveyor::{get_tx, get_tx_data, ConveyorClient, ConveyorConfig, NAME};
pub use domain::{chain_config, Chain, NormalizedQuote, QuoteOptions, CHAINS, NATIVE};
pub use ports::{AdapterError, SwapAdapter, SwapParams};
