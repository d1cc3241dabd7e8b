//! Exact Token Amounts
//!
//! Serde helpers for `U256` amounts. Amounts are written as decimal strings
//! and read from decimal strings, `0x` hex strings or JSON integers up to
//! `u64::MAX`, never through floating point. Larger JSON numbers are rejected;
//! providers must send those as strings.

use std::str::FromStr;

use alloy_primitives::U256;
use serde::{Deserialize, Deserializer, Serializer};

/// Parse a decimal or `0x`-prefixed hex amount
pub fn parse_amount(raw: &str) -> Result<U256, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "0x" {
        return Err("empty amount".to_string());
    }
    U256::from_str(trimmed).map_err(|e| format!("invalid amount '{}': {}", raw, e))
}

/// Provider wire form: `0x`-prefixed lowercase hex
pub fn to_hex_amount(amount: U256) -> String {
    format!("0x{:x}", amount)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Text(String),
    // JSON numbers past u64 would arrive as f64 and are refused
    Number(u64),
}

/// `#[serde(with = "u256_decimal")]` for `U256` fields
pub mod u256_decimal {
    use super::*;

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        match AmountRepr::deserialize(deserializer)? {
            AmountRepr::Text(s) => parse_amount(&s).map_err(serde::de::Error::custom),
            AmountRepr::Number(n) => Ok(U256::from(n)),
        }
    }
}
