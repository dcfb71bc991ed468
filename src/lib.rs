// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Ethereum wallet activity summaries
//!
//! Given an address, walletscan fetches the native balance, the native
//! transaction list and the ERC-20 transfer list from an Etherscan-compatible
//! API and derives:
//!
//! - a [`WalletOverview`]: balance in ether, tokens currently held, number of
//!   transactions and the first/last activity time
//! - per-token [`TokenMovement`](aggregate::TokenMovement)s: total sent, total
//!   received and unique counterparties
//!
//! # Example
//!
//! ```rust,no_run
//! use walletscan::{LookupState, WalletScanner, WalletscanConfig};
//!
//! # async fn example() -> Result<(), walletscan::WalletscanError> {
//! let scanner = WalletScanner::from_config(&WalletscanConfig::with_api_key("YourApiKeyToken"))?;
//! let state = LookupState::from_result(scanner.scan("0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe").await);
//! print!("{state}");
//! # Ok(())
//! # }
//! ```

mod address;
pub mod aggregate;
pub mod config;
mod display;
mod errors;
pub mod etherscan;
mod events;
mod overview;
mod scanner;
mod source;
mod spans;
mod types;

pub use address::WalletAddress;
pub use config::{WalletscanConfig, WalletscanConfigBuilder};
pub use display::{render_overview, render_report, LookupState};
pub use errors::{AddressError, AmountError, UpstreamError, WalletscanError};
pub use events::{parse_unix_timestamp, to_iso8601, NativeTransaction, TokenTransferEvent};
pub use overview::{WalletOverview, WalletReport};
pub use scanner::WalletScanner;
pub use source::WalletDataSource;
pub use types::tokens::{HumanAmount, TokenAmount, TokenDecimals};
pub use types::wei::WeiAmount;
