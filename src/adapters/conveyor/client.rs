//! Conveyor API Client
//!
//! HTTP client for the Conveyor swap aggregator API.
//! Fetches quotes, normalizes them and forwards the resulting transaction
//! to the external signer/broadcaster.

use std::time::Duration;

use alloy_primitives::{Address, Bytes, U256};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use rust_decimal::Decimal;

use super::request::QuoteRequest;
use crate::domain::{
    apply_gas_margin, chain_config, is_native, slippage_to_bps, Chain, ChainConfig,
    NormalizedQuote, ProviderQuote, QuoteOptions, RawQuote, TransactionDescriptor, CHAINS,
    DEFAULT_BASE_URL, DEFAULT_SLIPPAGE_PCT,
};
use crate::ports::execution::{AdapterError, SubmittedTx, SwapAdapter, SwapParams, TxRequest};

/// Provider name in a multi-adapter registry
pub const NAME: &str = "Conveyor";

/// Conveyor client configuration
#[derive(Debug, Clone)]
pub struct ConveyorConfig {
    /// Base URL; the chain path is appended per request
    pub api_base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Slippage (percent) used when a quote request doesn't carry one
    pub default_slippage_pct: Decimal,
}

impl Default for ConveyorConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            default_slippage_pct: DEFAULT_SLIPPAGE_PCT,
        }
    }
}

/// Conveyor swap aggregator adapter
#[derive(Debug, Clone)]
pub struct ConveyorClient {
    config: ConveyorConfig,
    http: Client,
}

impl ConveyorClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self, AdapterError> {
        Self::with_config(ConveyorConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ConveyorConfig) -> Result<Self, AdapterError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AdapterError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    /// Quote a swap of `amount_in` (smallest unit) of `token_in` for `token_out`.
    ///
    /// The zero address stands for the chain's native coin on either side.
    /// Fails with `UnsupportedChain` before any request is sent if `chain`
    /// has no table entry.
    pub async fn get_quote(
        &self,
        chain: &str,
        token_in: Address,
        token_out: Address,
        amount_in: U256,
        opts: &QuoteOptions,
    ) -> Result<NormalizedQuote, AdapterError> {
        let cfg = chain_config(chain)?;
        let slippage_bps =
            slippage_to_bps(opts.slippage_pct.unwrap_or(self.config.default_slippage_pct))?;

        let request = QuoteRequest::new(
            cfg,
            token_in,
            token_out,
            amount_in,
            opts.user_address,
            slippage_bps,
        );
        let url = cfg.endpoint(&self.config.api_base_url);

        tracing::debug!(
            chain = %cfg.chain,
            url = %url,
            token_in = %request.token_in,
            token_out = %request.token_out,
            amount_in = %amount_in,
            slippage_bps,
            "Requesting Conveyor quote"
        );

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AdapterError::Http(e.to_string()))?;

        let provider = self.handle_response(response).await?;
        let quote = normalize_quote(cfg, token_in, amount_in, provider);

        tracing::info!(
            chain = %cfg.chain,
            amount_out = %quote.amount_returned,
            estimated_gas = %quote.estimated_gas,
            "Conveyor quote received"
        );

        Ok(quote)
    }

    /// Sign and broadcast the transaction carried by a quote.
    ///
    /// Rejects raw quotes without a transaction or whose recipient is not the
    /// router of `params.chain`; the signer is never consulted in that case.
    /// Broadcast errors are returned as-is, without retries.
    pub async fn swap(&self, params: SwapParams<'_>) -> Result<SubmittedTx, AdapterError> {
        let tx = params
            .raw_quote
            .tx
            .as_ref()
            .ok_or_else(|| AdapterError::InvalidQuote("raw quote carries no transaction".into()))?;

        let router = params.chain.router();
        if tx.to != router {
            return Err(AdapterError::InvalidQuote(format!(
                "transaction targets {} but the {} router is {}",
                tx.to, params.chain, router
            )));
        }

        let from = params.signer.address().await?;
        let request = TxRequest {
            from,
            to: tx.to,
            data: tx.data.clone(),
            value: tx.value,
            gas_limit: tx.gas_limit,
        };

        tracing::info!(
            chain = %params.chain,
            from = %from,
            value = %request.value,
            gas_limit = %request.gas_limit,
            "Submitting Conveyor swap"
        );

        let submitted = params
            .sender
            .send_tx(params.signer, params.chain, request)
            .await
            .inspect_err(|e| tracing::warn!(chain = %params.chain, error = %e, "Swap broadcast failed"))?;

        Ok(submitted)
    }

    /// Read the body and decode it as a provider quote
    async fn handle_response(&self, response: reqwest::Response) -> Result<ProviderQuote, AdapterError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AdapterError::Http(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            tracing::warn!(status = %status, body = %body, "Conveyor API returned an error");
            return Err(AdapterError::QuoteProvider {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(error = %e, "Failed to parse Conveyor quote");
            AdapterError::QuoteProvider {
                status: status.as_u16(),
                body,
            }
        })
    }

    /// Get the configured API base URL
    pub fn api_base_url(&self) -> &str {
        &self.config.api_base_url
    }
}

#[async_trait]
impl SwapAdapter for ConveyorClient {
    fn name(&self) -> &'static str {
        NAME
    }

    fn supported_chains(&self) -> Vec<Chain> {
        CHAINS.iter().map(|c| c.chain).collect()
    }

    async fn get_quote(
        &self,
        chain: &str,
        token_in: Address,
        token_out: Address,
        amount_in: U256,
        opts: &QuoteOptions,
    ) -> Result<NormalizedQuote, AdapterError> {
        ConveyorClient::get_quote(self, chain, token_in, token_out, amount_in, opts).await
    }

    async fn swap(&self, params: SwapParams<'_>) -> Result<SubmittedTx, AdapterError> {
        ConveyorClient::swap(self, params).await
    }
}

/// Build the caller-facing quote from a provider response
pub fn normalize_quote(
    chain: &ChainConfig,
    token_in: Address,
    amount_in: U256,
    mut provider: ProviderQuote,
) -> NormalizedQuote {
    // The adapter-built descriptor is the only `tx` a raw quote carries
    provider.extra.remove("tx");

    // ERC-20 inputs move via approval, never as attached value
    let value = if is_native(&token_in) { amount_in } else { U256::ZERO };

    let tx = TransactionDescriptor {
        to: chain.router,
        data: provider.tx_calldata.clone(),
        value,
        gas_limit: apply_gas_margin(provider.gas_estimate),
    };

    NormalizedQuote {
        amount_returned: provider.amount_out,
        amount_in,
        estimated_gas: provider.gas_estimate,
        token_approval_address: chain.router,
        chain: chain.chain,
        raw_quote: RawQuote {
            provider,
            tx: Some(tx),
        },
    }
}

/// Calldata of a quote's transaction; `None` when the quote isn't ready
pub fn get_tx_data(quote: Option<&NormalizedQuote>) -> Option<&Bytes> {
    quote.and_then(NormalizedQuote::tx_data)
}

/// Transaction descriptor of a quote
pub fn get_tx(quote: &NormalizedQuote) -> Option<&TransactionDescriptor> {
    quote.tx()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::execution::SubmitError;
    use crate::ports::mocks::{MockSigner, MockTxSender};
    use alloy_primitives::address;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    const USDC: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
    const USER: Address = address!("1111111111111111111111111111111111111111");

    fn provider_quote(gas: u64) -> ProviderQuote {
        ProviderQuote {
            amount_out: U256::from(1_850_500_000u64),
            gas_estimate: U256::from(gas),
            tx_calldata: Bytes::from(vec![0xde, 0xad, 0xbe, 0xef]),
            extra: HashMap::new(),
        }
    }

    /// Client pointed at an unroutable address; only for paths that never hit the network
    fn offline_client() -> ConveyorClient {
        ConveyorClient::with_config(ConveyorConfig {
            api_base_url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_millis(200),
            ..ConveyorConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_conveyor_config_default() {
        let config = ConveyorConfig::default();
        assert_eq!(config.api_base_url, "https://api.conveyor.finance");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.default_slippage_pct, dec!(0.5));
    }

    #[test]
    fn test_conveyor_client_creation() {
        let client = ConveyorClient::new().unwrap();
        assert_eq!(client.api_base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.name(), "Conveyor");
        assert_eq!(client.supported_chains().len(), 7);
        assert!(client.supports(Chain::Fantom));
    }

    #[test]
    fn test_normalize_native_input() {
        let amount = U256::from(1_000_000_000_000_000_000u64);
        let quote = normalize_quote(Chain::Ethereum.config(), Address::ZERO, amount, provider_quote(21_000));

        let tx = quote.tx().unwrap();
        assert_eq!(quote.estimated_gas, U256::from(21_000u64));
        assert_eq!(tx.gas_limit, U256::from(25_200u64));
        assert_eq!(tx.value, amount);
        assert_eq!(tx.to, Chain::Ethereum.router());
        assert_eq!(quote.token_approval_address, Chain::Ethereum.router());
        assert_eq!(quote.amount_returned, U256::from(1_850_500_000u64));
        assert_eq!(quote.amount_in, amount);
    }

    #[test]
    fn test_normalize_replaces_provider_tx_field() {
        let mut provider = provider_quote(21_000);
        provider.extra.insert(
            "tx".to_string(),
            serde_json::json!({ "to": "0x0000000000000000000000000000000000000001", "data": "0x" }),
        );
        provider.extra.insert("route".to_string(), serde_json::json!("uniswap-v3"));

        let quote = normalize_quote(Chain::Ethereum.config(), Address::ZERO, U256::from(1u64), provider);
        assert!(!quote.raw_quote.provider.extra.contains_key("tx"));
        assert_eq!(quote.raw_quote.provider.extra["route"], "uniswap-v3");

        let json = serde_json::to_string(&quote).unwrap();
        assert_eq!(json.matches("\"tx\"").count(), 1);

        let decoded: NormalizedQuote = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, quote);
        assert_eq!(decoded.tx().unwrap().to, Chain::Ethereum.router());
    }

    #[test]
    fn test_normalize_token_input_attaches_no_value() {
        let quote = normalize_quote(Chain::Polygon.config(), USDC, U256::from(5_000_000u64), provider_quote(100_000));

        let tx = quote.tx().unwrap();
        assert_eq!(tx.value, U256::ZERO);
        assert_eq!(tx.gas_limit, U256::from(120_000u64));
        assert_eq!(tx.to, Chain::Polygon.router());
        assert_eq!(quote.chain, Chain::Polygon);
    }

    #[test]
    fn test_normalize_native_zero_amount() {
        let quote = normalize_quote(Chain::Bsc.config(), Address::ZERO, U256::ZERO, provider_quote(1));
        let tx = quote.tx().unwrap();
        assert_eq!(tx.value, U256::ZERO);
        assert_eq!(tx.gas_limit, U256::from(1u64));
    }

    #[test]
    fn test_normalize_large_native_amount() {
        let amount: U256 = "1000000000000000000000000".parse().unwrap();
        let quote = normalize_quote(Chain::Ethereum.config(), Address::ZERO, amount, provider_quote(21_000));
        assert_eq!(quote.tx().unwrap().value.to_string(), "1000000000000000000000000");
    }

    #[test]
    fn test_normalize_every_chain_uses_its_router() {
        for cfg in CHAINS {
            let quote = normalize_quote(cfg, USDC, U256::from(1u64), provider_quote(50_000));
            assert_eq!(quote.tx().unwrap().to, cfg.router);
            assert_eq!(quote.token_approval_address, cfg.router);
            assert_eq!(quote.chain, cfg.chain);
        }
    }

    #[test]
    fn test_accessors() {
        let quote = normalize_quote(Chain::Ethereum.config(), USDC, U256::from(1u64), provider_quote(50_000));

        assert_eq!(get_tx_data(Some(&quote)).unwrap().to_vec(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(get_tx(&quote), quote.raw_quote.tx.as_ref());
        assert!(get_tx_data(None).is_none());

        let mut unconfirmed = quote.clone();
        unconfirmed.raw_quote.tx = None;
        assert!(get_tx_data(Some(&unconfirmed)).is_none());
        assert!(get_tx(&unconfirmed).is_none());
    }

    #[tokio::test]
    async fn test_unsupported_chain_fails_before_request() {
        let client = offline_client();
        let result = client
            .get_quote("solana", Address::ZERO, USDC, U256::from(1u64), &QuoteOptions::default())
            .await;

        assert!(matches!(result, Err(AdapterError::UnsupportedChain(_))));
    }

    #[tokio::test]
    async fn test_invalid_slippage_fails_before_request() {
        let client = offline_client();
        let opts = QuoteOptions::new().with_slippage(dec!(150));
        let result = client
            .get_quote("ethereum", Address::ZERO, USDC, U256::from(1u64), &opts)
            .await;

        assert!(matches!(result, Err(AdapterError::InvalidSlippage(_))));
    }

    #[tokio::test]
    async fn test_swap_forwards_transaction() {
        let client = offline_client();
        let amount = U256::from(1_000_000_000_000_000_000u64);
        let quote = normalize_quote(Chain::Ethereum.config(), Address::ZERO, amount, provider_quote(21_000));
        let signer = MockSigner::new(USER);
        let sender = MockTxSender::new();

        let handle = client
            .swap(SwapParams {
                signer: &signer,
                sender: &sender,
                raw_quote: &quote.raw_quote,
                chain: Chain::Ethereum,
            })
            .await
            .unwrap();

        assert_eq!(handle.chain, Chain::Ethereum);
        let calls = sender.get_calls();
        assert_eq!(calls.len(), 1);
        let (chain, tx) = &calls[0];
        assert_eq!(*chain, Chain::Ethereum);
        assert_eq!(tx.from, USER);
        assert_eq!(tx.to, Chain::Ethereum.router());
        assert_eq!(tx.value, amount);
        assert_eq!(tx.gas_limit, U256::from(25_200u64));
        assert_eq!(tx.data.to_vec(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[tokio::test]
    async fn test_swap_without_tx_never_signs() {
        let client = offline_client();
        let mut quote = normalize_quote(Chain::Ethereum.config(), USDC, U256::from(1u64), provider_quote(21_000));
        quote.raw_quote.tx = None;
        let signer = MockSigner::new(USER);
        let sender = MockTxSender::new();

        let result = client
            .swap(SwapParams {
                signer: &signer,
                sender: &sender,
                raw_quote: &quote.raw_quote,
                chain: Chain::Ethereum,
            })
            .await;

        assert!(matches!(result, Err(AdapterError::InvalidQuote(_))));
        assert_eq!(signer.call_count(), 0);
        assert!(sender.get_calls().is_empty());
    }

    #[tokio::test]
    async fn test_swap_rejects_chain_mismatch() {
        let client = offline_client();
        let quote = normalize_quote(Chain::Ethereum.config(), USDC, U256::from(1u64), provider_quote(21_000));
        let signer = MockSigner::new(USER);
        let sender = MockTxSender::new();

        let result = client
            .swap(SwapParams {
                signer: &signer,
                sender: &sender,
                raw_quote: &quote.raw_quote,
                chain: Chain::Polygon,
            })
            .await;

        assert!(matches!(result, Err(AdapterError::InvalidQuote(_))));
        assert!(sender.get_calls().is_empty());
    }

    #[tokio::test]
    async fn test_swap_propagates_broadcast_error() {
        let client = offline_client();
        let quote = normalize_quote(Chain::Optimism.config(), USDC, U256::from(1u64), provider_quote(21_000));
        let signer = MockSigner::new(USER);
        let sender = MockTxSender::new().with_error(SubmitError::InsufficientFunds);

        let result = client
            .swap(SwapParams {
                signer: &signer,
                sender: &sender,
                raw_quote: &quote.raw_quote,
                chain: Chain::Optimism,
            })
            .await;

        assert!(matches!(
            result,
            Err(AdapterError::Submit(SubmitError::InsufficientFunds))
        ));
        assert_eq!(sender.get_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_swap_propagates_signer_error() {
        let client = offline_client();
        let quote = normalize_quote(Chain::Fantom.config(), USDC, U256::from(1u64), provider_quote(21_000));
        let signer = MockSigner::new(USER).with_error(SubmitError::Signer("user rejected".into()));
        let sender = MockTxSender::new();

        let result = client
            .swap(SwapParams {
                signer: &signer,
                sender: &sender,
                raw_quote: &quote.raw_quote,
                chain: Chain::Fantom,
            })
            .await;

        assert!(matches!(result, Err(AdapterError::Submit(SubmitError::Signer(_)))));
        assert!(sender.get_calls().is_empty());
    }
}
