//! Slippage Conversion
//!
//! Callers express slippage as a percentage (`0.5` = 0.5%); the Conveyor API
//! takes integer basis points (`pct * 100`).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use thiserror::Error;

/// Slippage outside `0..=100` percent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid slippage: {0}% (expected 0-100)")]
pub struct InvalidSlippageError(pub Decimal);

/// Slippage applied when the caller does not pass one
pub const DEFAULT_SLIPPAGE_PCT: Decimal = dec!(0.5);

/// Largest accepted slippage percentage
pub const MAX_SLIPPAGE_PCT: Decimal = dec!(100);

/// Convert a percentage to basis points, rounding half away from zero
pub fn slippage_to_bps(pct: Decimal) -> Result<u32, InvalidSlippageError> {
    if pct.is_sign_negative() || pct > MAX_SLIPPAGE_PCT {
        return Err(InvalidSlippageError(pct));
    }

    (pct * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .ok_or(InvalidSlippageError(pct))
}
