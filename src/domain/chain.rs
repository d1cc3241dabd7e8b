//! Supported Chains
//!
//! Static per-chain table for the Conveyor API: endpoint path, numeric
//! chain id and the swap aggregator (router/spender) contract address.
//! The table is a compile-time constant and cannot be mutated.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Chain key with no entry in the static table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported chain: '{0}'")]
pub struct UnsupportedChainError(pub String);

/// EVM networks served by the Conveyor API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    /// Ethereum mainnet (chain ID 1)
    Ethereum,
    /// BNB Smart Chain (chain ID 56)
    Bsc,
    /// Polygon PoS (chain ID 137)
    Polygon,
    /// Optimism (chain ID 10)
    Optimism,
    /// Arbitrum One (chain ID 42161)
    Arbitrum,
    /// Avalanche C-Chain (chain ID 43114)
    Avax,
    /// Fantom Opera (chain ID 250)
    Fantom,
}

impl Chain {
    /// Lowercase key used by callers of the aggregator
    pub fn key(&self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Bsc => "bsc",
            Self::Polygon => "polygon",
            Self::Optimism => "optimism",
            Self::Arbitrum => "arbitrum",
            Self::Avax => "avax",
            Self::Fantom => "fantom",
        }
    }

    /// Static configuration for this chain
    pub fn config(&self) -> &'static ChainConfig {
        // CHAINS holds exactly one entry per variant, in declaration order
        &CHAINS[*self as usize]
    }

    /// Numeric EVM chain id
    pub fn chain_id(&self) -> u64 {
        self.config().chain_id
    }

    /// Router/spender contract for this chain
    pub fn router(&self) -> Address {
        self.config().router
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Chain {
    type Err = UnsupportedChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CHAINS
            .iter()
            .find(|c| c.chain.key() == s)
            .map(|c| c.chain)
            .ok_or_else(|| UnsupportedChainError(s.to_string()))
    }
}

/// Per-chain Conveyor configuration entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainConfig {
    pub chain: Chain,
    pub chain_id: u64,
    /// Path segment appended to the API base URL
    pub path: &'static str,
    /// Conveyor swap aggregator contract (approval target and tx recipient)
    pub router: Address,
}

impl ChainConfig {
    /// Full quote endpoint for this chain under `base_url`
    pub fn endpoint(&self, base_url: &str) -> String {
        format!("{}/{}/", base_url.trim_end_matches('/'), self.path)
    }
}

/// Default Conveyor API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.conveyor.finance";

/// Every supported chain, indexed by `Chain as usize`
pub const CHAINS: &[ChainConfig] = &[
    ChainConfig {
        chain: Chain::Ethereum,
        chain_id: 1,
        path: "ethereum",
        router: address!("7B68636A43c9aC79fA0ef423d5094b291ffEFAb9"),
    },
    ChainConfig {
        chain: Chain::Bsc,
        chain_id: 56,
        path: "bsc",
        router: address!("D9230DFA9ee25E007173C4b409F19B516b83066d"),
    },
    ChainConfig {
        chain: Chain::Polygon,
        chain_id: 137,
        path: "polygon",
        router: address!("62eC8d2d797216b2f7784646d0646fe923461806"),
    },
    ChainConfig {
        chain: Chain::Optimism,
        chain_id: 10,
        path: "optimism",
        router: address!("91AE75251Bc0c6654EF0B327D190877B49b21A2E"),
    },
    ChainConfig {
        chain: Chain::Arbitrum,
        chain_id: 42161,
        path: "arbitrum",
        router: address!("85D6592B20a00551493B5264c3d42C0378c9800b"),
    },
    ChainConfig {
        chain: Chain::Avax,
        chain_id: 43114,
        path: "avalanche",
        router: address!("BCbCF359E55EfA0bB9422C4a6aeCF7Ef7998898C"),
    },
    ChainConfig {
        chain: Chain::Fantom,
        chain_id: 250,
        path: "fantom",
        router: address!("5C5482520387E7B9875965fA1dA7888424b6c2E7"),
    },
];

/// Look up a chain by its caller-facing key
pub fn chain_config(key: &str) -> Result<&'static ChainConfig, UnsupportedChainError> {
    key.parse::<Chain>().map(|c| c.config())
}
