//! Quote and Transaction Records
//!
//! The adapter's output contract. A `NormalizedQuote` carries everything the
//! caller needs to execute the swap without provider-specific knowledge.

use std::collections::HashMap;

use alloy_primitives::{Address, Bytes, U256};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount::u256_decimal;
use super::chain::Chain;

/// Optional per-quote parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteOptions {
    /// Prospective sender. The zero address is sent when absent, which still
    /// yields a valid (less personalized) quote.
    pub user_address: Option<Address>,
    /// Slippage in percent (`0.5` = 0.5%). The client default applies when absent.
    pub slippage_pct: Option<Decimal>,
}

impl QuoteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prospective sender
    pub fn with_user(mut self, user: Address) -> Self {
        self.user_address = Some(user);
        self
    }

    /// Set slippage tolerance in percent
    pub fn with_slippage(mut self, pct: Decimal) -> Self {
        self.slippage_pct = Some(pct);
        self
    }
}

/// Quote fields returned by the Conveyor API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderQuote {
    #[serde(with = "u256_decimal")]
    pub amount_out: U256,
    #[serde(with = "u256_decimal")]
    pub gas_estimate: U256,
    /// Swap calldata for the aggregator contract
    pub tx_calldata: Bytes,
    /// Any other provider fields, passed through untouched
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Ready-to-sign transaction parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDescriptor {
    pub to: Address,
    pub data: Bytes,
    /// Native coin attached (wei); zero unless the input token is native
    #[serde(with = "u256_decimal")]
    pub value: U256,
    /// Provider gas estimate plus margin
    #[serde(with = "u256_decimal")]
    pub gas_limit: U256,
}

/// Provider quote plus the transaction built from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawQuote {
    #[serde(flatten)]
    pub provider: ProviderQuote,
    /// Always set on quotes produced by the adapter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx: Option<TransactionDescriptor>,
}

/// Quote in the aggregator's common shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedQuote {
    #[serde(with = "u256_decimal")]
    pub amount_returned: U256,
    #[serde(with = "u256_decimal")]
    pub amount_in: U256,
    #[serde(with = "u256_decimal")]
    pub estimated_gas: U256,
    /// Address the caller must approve for token spending
    pub token_approval_address: Address,
    pub chain: Chain,
    pub raw_quote: RawQuote,
}

impl NormalizedQuote {
    /// Transaction descriptor, if present
    pub fn tx(&self) -> Option<&TransactionDescriptor> {
        self.raw_quote.tx.as_ref()
    }

    /// Transaction calldata, if present
    pub fn tx_data(&self) -> Option<&Bytes> {
        self.tx().map(|tx| &tx.data)
    }
}
