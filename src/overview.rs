// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Wallet overview and full report
//!
//! Both are computed once per lookup from a single fetch and never mutated
//! afterwards.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::address::WalletAddress;
use crate::aggregate::{HoldingsAggregator, MovementAggregator, TokenHolding, TokenKeyPolicy, TokenMovement};
use crate::errors::UpstreamError;
use crate::events::{to_iso8601, NativeTransaction, TokenTransferEvent};
use crate::types::tokens::HumanAmount;
use crate::types::wei::WeiAmount;

/// Summary of one address at lookup time
///
/// # Examples
///
/// ```
/// use walletscan::aggregate::TokenKeyPolicy;
/// use walletscan::{WalletAddress, WalletOverview, WeiAmount};
///
/// let address = WalletAddress::parse("0x0000000000000000000000000000000000000000").unwrap();
/// let overview = WalletOverview::build(
///     address,
///     WeiAmount::ZERO,
///     &[],
///     &[],
///     TokenKeyPolicy::default(),
/// )
/// .unwrap();
///
/// assert!(overview.eth_balance.is_zero());
/// assert_eq!(overview.total_transactions, 0);
/// assert!(overview.first_transaction.is_none());
/// assert!(!overview.has_activity());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletOverview {
    /// The queried address, as entered
    pub address: WalletAddress,
    /// Native balance in ether
    pub eth_balance: HumanAmount,
    /// Tokens currently held in a positive amount, first-seen order
    pub token_holdings: Vec<TokenHolding>,
    /// Number of native transactions
    pub total_transactions: usize,
    /// Number of token transfers observed (held or not)
    pub token_transfer_count: usize,
    /// Timestamp of the oldest native transaction
    #[serde(serialize_with = "serialize_iso8601")]
    pub first_transaction: Option<DateTime<Utc>>,
    /// Timestamp of the newest native transaction
    #[serde(serialize_with = "serialize_iso8601")]
    pub last_transaction: Option<DateTime<Utc>>,
}

impl WalletOverview {
    /// Assemble an overview from the fetched history
    ///
    /// `transactions` must be oldest first; its first and last entries give
    /// the activity window.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::InvalidValue`] if the first or last native
    /// transaction carries an unparseable timestamp.
    pub fn build(
        address: WalletAddress,
        balance: WeiAmount,
        transactions: &[NativeTransaction],
        transfers: &[TokenTransferEvent],
        policy: TokenKeyPolicy,
    ) -> Result<Self, UpstreamError> {
        let first_transaction = transactions.first().map(NativeTransaction::timestamp).transpose()?;
        let last_transaction = transactions.last().map(NativeTransaction::timestamp).transpose()?;
        let token_holdings = HoldingsAggregator::new(policy).aggregate(transfers, &address);

        Ok(Self {
            eth_balance: balance.to_ether(),
            token_holdings,
            total_transactions: transactions.len(),
            token_transfer_count: transfers.len(),
            first_transaction,
            last_transaction,
            address,
        })
    }

    /// Whether the address has native or token history, or holds ether
    ///
    /// A nonzero balance with no history still counts.
    pub fn has_activity(&self) -> bool {
        self.total_transactions > 0 || self.token_transfer_count > 0 || !self.eth_balance.is_zero()
    }
}

/// Overview plus per-token movements, computed from the same fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletReport {
    /// Balance, holdings and activity window
    pub overview: WalletOverview,
    /// Per-token flows, first-seen order
    pub token_movements: Vec<TokenMovement>,
}

impl WalletReport {
    /// Build the report; the transfer list feeds both aggregators
    pub fn build(
        address: WalletAddress,
        balance: WeiAmount,
        transactions: &[NativeTransaction],
        transfers: &[TokenTransferEvent],
        policy: TokenKeyPolicy,
    ) -> Result<Self, UpstreamError> {
        let token_movements = MovementAggregator::new(policy).aggregate(transfers, &address);
        let overview = WalletOverview::build(address, balance, transactions, transfers, policy)?;
        Ok(Self {
            overview,
            token_movements,
        })
    }

    /// See [`WalletOverview::has_activity`]
    pub fn has_activity(&self) -> bool {
        self.overview.has_activity()
    }
}

fn serialize_iso8601<S: Serializer>(
    timestamp: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match timestamp {
        Some(ts) => serializer.serialize_str(&to_iso8601(ts)),
        None => serializer.serialize_none(),
    }
}
