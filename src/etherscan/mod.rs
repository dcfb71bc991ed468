// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Etherscan-compatible upstream client
//!
//! Three account queries feed a wallet summary:
//!
//! | Query | Parameters |
//! |-------|------------|
//! | native balance | `action=balance&tag=latest` |
//! | native transactions | `action=txlist&startblock=..&endblock=..&sort=asc` |
//! | token transfers | `action=tokentx&startblock=..&endblock=..&sort=asc` |
//!
//! Responses are unwrapped from the `{status, message, result}` envelope. A
//! `status = "0"` answer meaning "no transactions found" is an empty list;
//! any other `status = "0"` is a [`UpstreamError::Rejected`](crate::UpstreamError::Rejected).

mod client;
mod query;
mod response;

pub use client::EtherscanClient;
pub use query::{SortOrder, TransactionQuery};
