use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use alloy_primitives::{Address, B256};
use async_trait::async_trait;
use chrono::Utc;

use super::execution::{SubmitError, SubmittedTx, TxRequest, TxSender, TxSigner};
use crate::domain::Chain;

/// Mock signer with a fixed address that counts address lookups
#[derive(Debug, Default)]
pub struct MockSigner {
    address: Address,
    calls: AtomicUsize,
    error: Option<SubmitError>,
}

impl MockSigner {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            ..Self::default()
        }
    }

    /// Builder method to make every address lookup fail
    pub fn with_error(mut self, error: SubmitError) -> Self {
        self.error = Some(error);
        self
    }

    /// Number of address lookups so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TxSigner for MockSigner {
    async fn address(&self) -> Result<Address, SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(self.address),
        }
    }
}

/// Mock broadcaster that records calls and allows controlled responses
#[derive(Debug, Default)]
pub struct MockTxSender {
    calls: Arc<Mutex<Vec<(Chain, TxRequest)>>>,
    error: Option<SubmitError>,
}

impl MockTxSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to make every broadcast fail
    pub fn with_error(mut self, error: SubmitError) -> Self {
        self.error = Some(error);
        self
    }

    /// Get all recorded calls
    pub fn get_calls(&self) -> Vec<(Chain, TxRequest)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TxSender for MockTxSender {
    async fn send_tx(
        &self,
        _signer: &dyn TxSigner,
        chain: Chain,
        tx: TxRequest,
    ) -> Result<SubmittedTx, SubmitError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push((chain, tx));

        if let Some(e) = &self.error {
            return Err(e.clone());
        }

        Ok(SubmittedTx {
            hash: B256::with_last_byte(calls.len() as u8),
            chain,
            submitted_at: Utc::now(),
        })
    }
}
