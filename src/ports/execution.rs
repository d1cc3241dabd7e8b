use alloy_primitives::{Address, Bytes, B256, U256};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::amount::u256_decimal;
use crate::domain::{
    Chain, InvalidSlippageError, NormalizedQuote, QuoteOptions, RawQuote, UnsupportedChainError,
};

/// Errors surfaced by a swap adapter
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Chain key not in the static chain table; no request was issued
    #[error(transparent)]
    UnsupportedChain(#[from] UnsupportedChainError),
    /// The provider answered, but not with a usable quote
    ///
    /// `status` is always the real HTTP status. A 2xx status means the body
    /// could not be decoded; `body` holds the raw response text either way.
    #[error("Quote provider error (status {status}): {body}")]
    QuoteProvider { status: u16, body: String },
    /// Quote cannot be executed (no transaction, or built for another chain)
    #[error("Invalid quote: {0}")]
    InvalidQuote(String),
    #[error(transparent)]
    InvalidSlippage(#[from] InvalidSlippageError),
    /// Client construction or transport failure; no HTTP status exists
    #[error("HTTP client error: {0}")]
    Http(String),
    /// Signer or broadcaster failure, passed through unchanged
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Errors raised by the signing/broadcast collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Insufficient funds for transaction")]
    InsufficientFunds,
    #[error("Transaction rejected: {0}")]
    Rejected(String),
    #[error("Broadcast failed: {0}")]
    Network(String),
    #[error("Signer error: {0}")]
    Signer(String),
}

/// Transaction handed to the broadcaster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxRequest {
    pub from: Address,
    pub to: Address,
    pub data: Bytes,
    #[serde(with = "u256_decimal")]
    pub value: U256,
    #[serde(with = "u256_decimal")]
    pub gas_limit: U256,
}

/// Handle for a broadcast transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedTx {
    pub hash: B256,
    pub chain: Chain,
    pub submitted_at: DateTime<Utc>,
}

/// Wallet capability: knows its own address
#[async_trait]
pub trait TxSigner: Send + Sync {
    async fn address(&self) -> Result<Address, SubmitError>;
}

/// Signs `tx` with `signer` and broadcasts it on `chain`
#[async_trait]
pub trait TxSender: Send + Sync {
    async fn send_tx(
        &self,
        signer: &dyn TxSigner,
        chain: Chain,
        tx: TxRequest,
    ) -> Result<SubmittedTx, SubmitError>;
}

/// Inputs to `SwapAdapter::swap`
pub struct SwapParams<'a> {
    pub signer: &'a dyn TxSigner,
    pub sender: &'a dyn TxSender,
    /// Raw quote previously returned by `get_quote`
    pub raw_quote: &'a RawQuote,
    /// Chain the quote was obtained for
    pub chain: Chain,
}

/// Common interface of swap provider adapters held by an aggregator
#[async_trait]
pub trait SwapAdapter: Send + Sync {
    /// Registry name of the provider
    fn name(&self) -> &'static str;

    fn supported_chains(&self) -> Vec<Chain>;

    async fn get_quote(
        &self,
        chain: &str,
        token_in: Address,
        token_out: Address,
        amount_in: U256,
        opts: &QuoteOptions,
    ) -> Result<NormalizedQuote, AdapterError>;

    async fn swap(&self, params: SwapParams<'_>) -> Result<SubmittedTx, AdapterError>;

    fn supports(&self, chain: Chain) -> bool {
        self.supported_chains().contains(&chain)
    }
}
