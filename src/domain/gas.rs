//! Gas Limit Margin
//!
//! The provider's gas estimate is inflated by a fixed 20% before it is used
//! as the transaction gas limit. Integer arithmetic only.

use alloy_primitives::U256;

/// Margin numerator (120/100 = +20%)
pub const GAS_MARGIN_NUMERATOR: u64 = 120;
/// Margin denominator
pub const GAS_MARGIN_DENOMINATOR: u64 = 100;

/// `floor(estimate * 120 / 100)`
pub fn apply_gas_margin(estimate: U256) -> U256 {
    estimate.saturating_mul(U256::from(GAS_MARGIN_NUMERATOR)) / U256::from(GAS_MARGIN_DENOMINATOR)
}
