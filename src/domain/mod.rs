//! Domain Layer - Core types for the Conveyor adapter
//!
//! Pure types and arithmetic with no I/O:
//! - `chain`: Supported chains and the static endpoint/router table
//! - `token`: Native token sentinel translation
//! - `gas`: Gas limit safety margin
//! - `slippage`: Percentage to basis point conversion
//! - `amount`: Exact U256 amount parsing and serde helpers
//! - `quote`: Quote and transaction records returned to callers

pub mod amount;
pub mod chain;
pub mod gas;
pub mod quote;
pub mod slippage;
pub mod token;

pub use amount::{parse_amount, to_hex_amount};
pub use chain::{chain_config, Chain, ChainConfig, UnsupportedChainError, CHAINS, DEFAULT_BASE_URL};
pub use gas::apply_gas_margin;
pub use quote::{NormalizedQuote, ProviderQuote, QuoteOptions, RawQuote, TransactionDescriptor};
pub use slippage::{slippage_to_bps, InvalidSlippageError, DEFAULT_SLIPPAGE_PCT};
pub use token::{is_native, to_provider_token, NATIVE};
