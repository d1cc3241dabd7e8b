//! Conveyor Quote Request
//!
//! Wire body POSTed to `<base>/<chain>/`.
//!
//! Canonical contract: `amount_in` is a `0x` hex string of the exact integer,
//! `allowed_slippage` is integer basis points (percent * 100).

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::domain::{to_hex_amount, to_provider_token, ChainConfig};

/// Request body for the Conveyor quote endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Input token (native coin as the `0xEeee...` sentinel)
    pub token_in: Address,
    /// Output token (native coin as the `0xEeee...` sentinel)
    pub token_out: Address,
    /// Exact input amount, `0x`-prefixed hex
    pub amount_in: String,
    pub chain_id: u64,
    /// Prospective sender, zero address when unknown
    pub from_address: Address,
    /// Basis points
    pub allowed_slippage: u32,
}

impl QuoteRequest {
    /// Build a request from caller-side values, translating native tokens
    pub fn new(
        chain: &ChainConfig,
        token_in: Address,
        token_out: Address,
        amount_in: U256,
        from_address: Option<Address>,
        allowed_slippage: u32,
    ) -> Self {
        Self {
            token_in: to_provider_token(token_in),
            token_out: to_provider_token(token_out),
            amount_in: to_hex_amount(amount_in),
            chain_id: chain.chain_id,
            from_address: from_address.unwrap_or(Address::ZERO),
            allowed_slippage,
        }
    }
}
