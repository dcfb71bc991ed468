// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Upstream activity records
//!
//! These types mirror the records returned by the upstream account endpoints
//! (`tokentx` and `txlist`). Numeric fields stay as the upstream decimal
//! strings and are parsed on demand, so one malformed record can be skipped
//! without rejecting the whole response.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::address::WalletAddress;
use crate::errors::AmountError;
use crate::types::tokens::{HumanAmount, TokenAmount, TokenDecimals};

/// One observed ERC-20 token transfer
///
/// Sourced entirely from upstream. Fields use the upstream (camelCase) names
/// on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenTransferEvent {
    /// Source address, as reported upstream
    pub from: String,
    /// Destination address, as reported upstream
    pub to: String,
    /// Token contract address
    pub contract_address: String,
    /// Token display name
    pub token_name: String,
    /// Token ticker symbol
    pub token_symbol: String,
    /// Token decimal exponent (decimal string)
    pub token_decimal: String,
    /// Raw base-unit amount (decimal string)
    pub value: String,
    /// Unix timestamp in seconds (decimal string)
    pub time_stamp: String,
    /// Block the transfer was included in, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<String>,
    /// Transaction hash, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl TokenTransferEvent {
    /// Raw amount in base units
    pub fn amount(&self) -> Result<TokenAmount, AmountError> {
        TokenAmount::parse(&self.value)
    }

    /// Declared decimal exponent
    pub fn decimals(&self) -> Result<TokenDecimals, AmountError> {
        TokenDecimals::parse(&self.token_decimal)
    }

    /// Amount in human units: `value / 10^tokenDecimal`
    pub fn human_amount(&self) -> Result<HumanAmount, AmountError> {
        Ok(self.amount()?.to_human(self.decimals()?))
    }

    /// Time the transfer was mined
    pub fn timestamp(&self) -> Result<DateTime<Utc>, AmountError> {
        parse_unix_timestamp(&self.time_stamp)
    }

    /// Whether `address` is the source (case-insensitive)
    pub fn is_sent_by(&self, address: &WalletAddress) -> bool {
        address.matches(&self.from)
    }

    /// Whether `address` is the destination (case-insensitive)
    pub fn is_received_by(&self, address: &WalletAddress) -> bool {
        address.matches(&self.to)
    }

    /// Whether `address` takes part in the transfer in either direction
    pub fn involves(&self, address: &WalletAddress) -> bool {
        self.is_sent_by(address) || self.is_received_by(address)
    }
}

/// One native-currency transaction
///
/// Only the count and the first/last timestamps feed the overview; the other
/// fields are kept for JSON passthrough.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NativeTransaction {
    /// Block the transaction was included in
    pub block_number: String,
    /// Unix timestamp in seconds (decimal string)
    pub time_stamp: String,
    /// Transaction hash
    pub hash: String,
    /// Sender
    pub from: String,
    /// Recipient (empty for contract creation)
    pub to: String,
    /// Value in wei (decimal string)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
}

impl NativeTransaction {
    /// Time the transaction was mined
    pub fn timestamp(&self) -> Result<DateTime<Utc>, AmountError> {
        parse_unix_timestamp(&self.time_stamp)
    }
}

/// Parse an upstream unix-seconds string into a UTC timestamp.
pub fn parse_unix_timestamp(raw: &str) -> Result<DateTime<Utc>, AmountError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .ok_or_else(|| AmountError::invalid_timestamp(raw))
}

/// Render a timestamp as ISO-8601 UTC with millisecond precision (`2015-08-07T03:30:33.000Z`).
pub fn to_iso8601(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
