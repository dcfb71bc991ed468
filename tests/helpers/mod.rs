// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for walletscan integration tests
//!
//! Provides a mock [`WalletDataSource`] so scanner behavior can be tested
//! without a real upstream API.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use walletscan::{
    NativeTransaction, TokenTransferEvent, UpstreamError, WalletAddress, WalletDataSource,
    WeiAmount,
};

pub const ME: &str = "0x1111111111111111111111111111111111111111";
pub const OTHER: &str = "0x2222222222222222222222222222222222222222";
pub const ZERO: &str = "0x0000000000000000000000000000000000000000";

/// Which query a failure should be injected into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Balance,
    Transactions,
    Transfers,
}

/// Mock WalletDataSource for testing WalletScanner logic
///
/// Returns fixed data, counts calls per query, and can fail or stall a
/// chosen query.
///
/// # Example
///
/// ```rust,ignore
/// let mock = MockWalletSource::new()
///     .with_balance(WeiAmount::from(1u64))
///     .with_transfers(vec![token_transfer(OTHER, ME, "Dai", "1", "0")])
///     .failing(Query::Transactions, || UpstreamError::rejected("NOTOK", "rate limit"));
/// ```
#[derive(Default)]
pub struct MockWalletSource {
    balance: WeiAmount,
    transactions: Vec<NativeTransaction>,
    transfers: Vec<TokenTransferEvent>,
    failure: Option<(Query, fn() -> UpstreamError)>,
    delay: Option<Duration>,
    balance_calls: AtomicUsize,
    transaction_calls: AtomicUsize,
    transfer_calls: AtomicUsize,
}

impl MockWalletSource {
    /// Create a source that reports an address with no activity
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(mut self, balance: WeiAmount) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_transactions(mut self, transactions: Vec<NativeTransaction>) -> Self {
        self.transactions = transactions;
        self
    }

    pub fn with_transfers(mut self, transfers: Vec<TokenTransferEvent>) -> Self {
        self.transfers = transfers;
        self
    }

    /// Make `query` fail with the error built by `error`
    pub fn failing(mut self, query: Query, error: fn() -> UpstreamError) -> Self {
        self.failure = Some((query, error));
        self
    }

    /// Make every query wait before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn balance_calls(&self) -> usize {
        self.balance_calls.load(Ordering::SeqCst)
    }

    pub fn transaction_calls(&self) -> usize {
        self.transaction_calls.load(Ordering::SeqCst)
    }

    pub fn transfer_calls(&self) -> usize {
        self.transfer_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.balance_calls() + self.transaction_calls() + self.transfer_calls()
    }

    async fn answer<T>(&self, query: Query, value: T) -> Result<T, UpstreamError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match self.failure {
            Some((failing, error)) if failing == query => Err(error()),
            _ => Ok(value),
        }
    }
}

#[async_trait]
impl WalletDataSource for MockWalletSource {
    async fn native_balance(&self, _address: &WalletAddress) -> Result<WeiAmount, UpstreamError> {
        self.balance_calls.fetch_add(1, Ordering::SeqCst);
        self.answer(Query::Balance, self.balance).await
    }

    async fn native_transactions(
        &self,
        _address: &WalletAddress,
    ) -> Result<Vec<NativeTransaction>, UpstreamError> {
        self.transaction_calls.fetch_add(1, Ordering::SeqCst);
        self.answer(Query::Transactions, self.transactions.clone())
            .await
    }

    async fn token_transfers(
        &self,
        _address: &WalletAddress,
    ) -> Result<Vec<TokenTransferEvent>, UpstreamError> {
        self.transfer_calls.fetch_add(1, Ordering::SeqCst);
        self.answer(Query::Transfers, self.transfers.clone()).await
    }
}

/// Create a token transfer with a fixed placeholder contract address
pub fn token_transfer(
    from: &str,
    to: &str,
    name: &str,
    value: &str,
    decimals: &str,
) -> TokenTransferEvent {
    TokenTransferEvent {
        from: from.to_string(),
        to: to.to_string(),
        contract_address: "0x6b175474e89094c44da98b954eedeac495271d0f".to_string(),
        token_name: name.to_string(),
        token_symbol: name.to_uppercase(),
        token_decimal: decimals.to_string(),
        value: value.to_string(),
        time_stamp: "1700000000".to_string(),
        ..Default::default()
    }
}

/// Create a native transaction mined at `timestamp` (unix seconds)
pub fn native_transaction(timestamp: &str) -> NativeTransaction {
    NativeTransaction {
        block_number: "1".to_string(),
        time_stamp: timestamp.to_string(),
        hash: "0xabc".to_string(),
        from: OTHER.to_string(),
        to: ME.to_string(),
        value: "0".to_string(),
    }
}
