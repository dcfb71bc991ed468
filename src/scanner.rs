// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Wallet lookups
//!
//! [`WalletScanner`] is the public entry point. Every operation takes the raw
//! user input, validates it, fetches what it needs from a
//! [`WalletDataSource`] under one deadline, and runs the aggregators.
//!
//! # Example
//!
//! ```rust,no_run
//! use walletscan::{WalletScanner, WalletscanConfig};
//!
//! # async fn example() -> Result<(), walletscan::WalletscanError> {
//! let scanner = WalletScanner::from_config(&WalletscanConfig::with_api_key("YourApiKeyToken"))?;
//! let report = scanner.scan("0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe").await?;
//!
//! for holding in &report.overview.token_holdings {
//!     println!("{} {}", holding.balance.to_fixed(4), holding.symbol);
//! }
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::time::Duration;

use tracing::{info, warn, Instrument};

use crate::address::WalletAddress;
use crate::aggregate::{MovementAggregator, TokenKeyPolicy, TokenMovement};
use crate::config::constants::DEFAULT_REQUEST_TIMEOUT;
use crate::config::WalletscanConfig;
use crate::errors::{UpstreamError, WalletscanError};
use crate::etherscan::EtherscanClient;
use crate::events::{NativeTransaction, TokenTransferEvent};
use crate::overview::{WalletOverview, WalletReport};
use crate::source::WalletDataSource;
use crate::spans;
use crate::types::wei::WeiAmount;

/// Runs wallet lookups against a data source
///
/// One lookup issues its upstream queries concurrently and fails as a whole
/// if any of them fails or the deadline passes. Nothing is cached between
/// lookups. Dropping the returned future cancels in-flight requests.
#[derive(Debug, Clone)]
pub struct WalletScanner<S> {
    source: S,
    timeout: Duration,
    policy: TokenKeyPolicy,
}

impl WalletScanner<EtherscanClient> {
    /// Create a scanner talking to the configured Etherscan endpoint
    pub fn from_config(config: &WalletscanConfig) -> Result<Self, WalletscanError> {
        let client = EtherscanClient::new(config)?;
        Ok(Self::new(client)
            .with_timeout(config.request_timeout)
            .with_key_policy(config.token_key_policy))
    }
}

impl<S: WalletDataSource> WalletScanner<S> {
    /// Create a scanner with the default deadline and token key policy
    pub fn new(source: S) -> Self {
        Self {
            source,
            timeout: DEFAULT_REQUEST_TIMEOUT,
            policy: TokenKeyPolicy::default(),
        }
    }

    /// Set the per-lookup deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the token identity policy used by both aggregators
    pub fn with_key_policy(mut self, policy: TokenKeyPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The underlying data source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The per-lookup deadline
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Overview and movements for `input` from a single fetch
    ///
    /// # Errors
    ///
    /// - [`WalletscanError::InvalidAddress`] before any upstream call
    /// - [`WalletscanError::Upstream`] if any query fails
    /// - [`WalletscanError::NetworkTimeout`] if the deadline passes
    pub async fn scan(&self, input: &str) -> Result<WalletReport, WalletscanError> {
        let address = WalletAddress::parse(input)?;
        self.scan_address(&address).await
    }

    /// Overview and movements for an already validated address
    pub async fn scan_address(
        &self,
        address: &WalletAddress,
    ) -> Result<WalletReport, WalletscanError> {
        let result = self
            .with_deadline(async {
                let (balance, transactions, transfers) = self.fetch_all(address).await?;
                WalletReport::build(address.clone(), balance, &transactions, &transfers, self.policy)
            })
            .instrument(spans::scan(address, self.timeout))
            .await;

        log_outcome("scan", address, &result, |report| {
            info!(
                address = %address,
                transactions = report.overview.total_transactions,
                holdings = report.overview.token_holdings.len(),
                tokens_moved = report.token_movements.len(),
                "Wallet scan complete"
            );
        });
        result
    }

    /// Balance, holdings and activity window for `input`
    ///
    /// # Errors
    ///
    /// Same as [`scan`](Self::scan).
    pub async fn wallet_overview(&self, input: &str) -> Result<WalletOverview, WalletscanError> {
        let address = WalletAddress::parse(input)?;

        let result = self
            .with_deadline(async {
                let (balance, transactions, transfers) = self.fetch_all(&address).await?;
                WalletOverview::build(address.clone(), balance, &transactions, &transfers, self.policy)
            })
            .instrument(spans::wallet_overview(&address, self.timeout))
            .await;

        log_outcome("wallet_overview", &address, &result, |overview| {
            info!(
                address = %address,
                transactions = overview.total_transactions,
                holdings = overview.token_holdings.len(),
                "Wallet overview complete"
            );
        });
        result
    }

    /// Per-token flows for `input`; only the token-transfer list is fetched
    ///
    /// # Errors
    ///
    /// Same as [`scan`](Self::scan).
    pub async fn token_movements(&self, input: &str) -> Result<Vec<TokenMovement>, WalletscanError> {
        let address = WalletAddress::parse(input)?;

        let result = self
            .with_deadline(async {
                let transfers = self.source.token_transfers(&address).await?;
                Ok(MovementAggregator::new(self.policy).aggregate(&transfers, &address))
            })
            .instrument(spans::token_movements(&address, self.timeout))
            .await;

        log_outcome("token_movements", &address, &result, |movements| {
            info!(address = %address, tokens = movements.len(), "Token movements complete");
        });
        result
    }

    async fn fetch_all(
        &self,
        address: &WalletAddress,
    ) -> Result<(WeiAmount, Vec<NativeTransaction>, Vec<TokenTransferEvent>), UpstreamError> {
        futures::try_join!(
            self.source.native_balance(address),
            self.source.native_transactions(address),
            self.source.token_transfers(address),
        )
    }

    /// Run `fetch` under the lookup deadline
    ///
    /// A client-side request timeout is reported the same way as the
    /// deadline itself.
    async fn with_deadline<T>(
        &self,
        fetch: impl Future<Output = Result<T, UpstreamError>>,
    ) -> Result<T, WalletscanError> {
        match tokio::time::timeout(self.timeout, fetch).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) if e.is_timeout() => Err(WalletscanError::network_timeout(self.timeout)),
            Ok(Err(e)) => Err(e.into()),
            Err(_) => Err(WalletscanError::network_timeout(self.timeout)),
        }
    }
}

fn log_outcome<T>(
    operation: &'static str,
    address: &WalletAddress,
    result: &Result<T, WalletscanError>,
    on_success: impl FnOnce(&T),
) {
    match result {
        Ok(value) => on_success(value),
        Err(e) => warn!(operation, address = %address, error = %e, "Wallet lookup failed"),
    }
}
