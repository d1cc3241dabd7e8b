//! Native Token Handling
//!
//! Callers denote the chain's native coin with the zero address, while the
//! Conveyor API expects the `0xEeee...EEeE` sentinel.

use alloy_primitives::{address, Address};

/// Sentinel the Conveyor API uses for the native coin
pub const NATIVE: Address = address!("EeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE");

/// Returns true if `token` is the caller-side native marker (zero address)
pub fn is_native(token: &Address) -> bool {
    token.is_zero()
}

/// Map a caller token reference to the provider's convention
pub fn to_provider_token(token: Address) -> Address {
    if is_native(&token) {
        NATIVE
    } else {
        token
    }
}
