// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Terminal presentation of a lookup
//!
//! A lookup is always in exactly one [`LookupState`]. The text view shows
//! balances with four fractional digits and `N/A` for missing timestamps.
//! The holdings and movements sections only appear when non-empty.

use std::fmt::{self, Write as _};

use crate::aggregate::{TokenHolding, TokenMovement};
use crate::config::constants::DISPLAY_DECIMALS;
use crate::errors::WalletscanError;
use crate::events::to_iso8601;
use crate::overview::{WalletOverview, WalletReport};

const NOT_AVAILABLE: &str = "N/A";

/// User-visible state of one lookup
///
/// # Examples
///
/// ```
/// use walletscan::{AddressError, LookupState, WalletscanError};
///
/// let error = WalletscanError::from(AddressError::invalid_format("not-an-address"));
/// let failed = LookupState::from_result(Err(error));
/// let text = failed.to_string();
/// assert!(text.contains("Invalid Ethereum address format: not-an-address"));
/// assert!(text.contains("Please check the wallet address and try again."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupState {
    /// Request in flight
    Loading,
    /// Validation or fetch failed; the message is shown verbatim
    Failed {
        /// Error message
        message: String,
    },
    /// Lookup succeeded but the address has no native or token history
    Empty,
    /// Lookup succeeded with data
    Loaded(Box<WalletReport>),
}

impl LookupState {
    /// Derive the state from a finished lookup
    pub fn from_result(result: Result<WalletReport, WalletscanError>) -> Self {
        match result {
            Ok(report) if !report.has_activity() => LookupState::Empty,
            Ok(report) => LookupState::Loaded(Box::new(report)),
            Err(e) => LookupState::Failed {
                message: e.to_string(),
            },
        }
    }

    /// Whether the lookup is finished
    pub fn is_settled(&self) -> bool {
        !matches!(self, LookupState::Loading)
    }

    /// The report, if the lookup produced data
    pub fn report(&self) -> Option<&WalletReport> {
        match self {
            LookupState::Loaded(report) => Some(report.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Display for LookupState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupState::Loading => writeln!(f, "Loading wallet information..."),
            LookupState::Failed { message } => {
                writeln!(f, "Error")?;
                writeln!(f, "{message}")?;
                writeln!(f, "Please check the wallet address and try again.")
            }
            LookupState::Empty => {
                writeln!(f, "No Data Found")?;
                writeln!(f, "This wallet appears to have no transaction history.")
            }
            LookupState::Loaded(report) => f.write_str(&render_report(report)),
        }
    }
}

/// Render a full report as plain text
pub fn render_report(report: &WalletReport) -> String {
    let mut out = String::new();
    render_overview_into(&mut out, &report.overview);
    if !report.token_movements.is_empty() {
        out.push('\n');
        render_movements_into(&mut out, &report.token_movements);
    }
    out
}

/// Render an overview (with its holdings table) as plain text
pub fn render_overview(overview: &WalletOverview) -> String {
    let mut out = String::new();
    render_overview_into(&mut out, overview);
    out
}

fn render_overview_into(out: &mut String, overview: &WalletOverview) {
    let timestamp = |ts: &Option<chrono::DateTime<chrono::Utc>>| {
        ts.as_ref()
            .map(to_iso8601)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    };

    // Writing to a String cannot fail
    let _ = writeln!(out, "Wallet Details: {}", overview.address);
    let _ = writeln!(out);
    let _ = writeln!(out, "Wallet Overview");
    let _ = writeln!(
        out,
        "  ETH Balance:        {} ETH",
        overview.eth_balance.to_fixed(DISPLAY_DECIMALS)
    );
    let _ = writeln!(out, "  Total Transactions: {}", overview.total_transactions);
    let _ = writeln!(out, "  First Transaction:  {}", timestamp(&overview.first_transaction));
    let _ = writeln!(out, "  Last Transaction:   {}", timestamp(&overview.last_transaction));

    if !overview.token_holdings.is_empty() {
        out.push('\n');
        render_holdings_into(out, &overview.token_holdings);
    }
}

fn render_holdings_into(out: &mut String, holdings: &[TokenHolding]) {
    let balances: Vec<String> = holdings
        .iter()
        .map(|h| h.balance.to_fixed(DISPLAY_DECIMALS))
        .collect();
    let name_width = column_width("Token", holdings.iter().map(|h| h.name.as_str()));
    let symbol_width = column_width("Symbol", holdings.iter().map(|h| h.symbol.as_str()));
    let balance_width = column_width("Balance", balances.iter().map(String::as_str));

    let _ = writeln!(out, "Token Holdings");
    let _ = writeln!(
        out,
        "  {:<name_width$}  {:<symbol_width$}  {:>balance_width$}",
        "Token", "Symbol", "Balance"
    );
    for (holding, balance) in holdings.iter().zip(&balances) {
        let _ = writeln!(
            out,
            "  {:<name_width$}  {:<symbol_width$}  {:>balance_width$}",
            holding.name, holding.symbol, balance
        );
    }
}

fn render_movements_into(out: &mut String, movements: &[TokenMovement]) {
    let _ = writeln!(out, "Token Movements");
    for movement in movements {
        let _ = writeln!(out, "  {}", movement.token_name);
        let _ = writeln!(
            out,
            "    Total Sent:          {}",
            movement.total_sent.to_fixed(DISPLAY_DECIMALS)
        );
        let _ = writeln!(
            out,
            "    Total Received:      {}",
            movement.total_received.to_fixed(DISPLAY_DECIMALS)
        );
        let _ = writeln!(
            out,
            "    Unique Destinations: {}",
            movement.unique_destinations.len()
        );
        let _ = writeln!(out, "    Unique Sources:      {}", movement.unique_sources.len());
        if !movement.unique_destinations.is_empty() {
            let _ = writeln!(out, "    Destinations:");
            for destination in movement.unique_destinations.iter() {
                let _ = writeln!(out, "      {destination}");
            }
        }
    }
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|cell| cell.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.len())
}
