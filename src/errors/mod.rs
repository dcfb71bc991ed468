// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the walletscan library.
//!
//! This module follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling ([`AddressError`],
//!   [`UpstreamError`], [`AmountError`])
//! - **Unified error type** ([`WalletscanError`]) returned by the public lookup
//!   operations, so callers can surface a single message to the user
//!
//! # Examples
//!
//! ```rust,ignore
//! use walletscan::{WalletScanner, WalletscanError};
//!
//! match scanner.wallet_overview("not-an-address").await {
//!     Ok(overview) => println!("{overview:?}"),
//!     Err(WalletscanError::InvalidAddress(e)) => eprintln!("Bad input: {e}"),
//!     Err(WalletscanError::NetworkTimeout { timeout }) => {
//!         eprintln!("Gave up after {timeout:?}");
//!     }
//!     Err(e) => eprintln!("Lookup failed: {e}"),
//! }
//! ```

mod address;
mod amount;
mod upstream;

use std::time::Duration;

pub use address::AddressError;
pub use amount::AmountError;
pub use upstream::UpstreamError;

/// Unified error type for all walletscan lookups.
///
/// Each variant is scoped to a single lookup. Nothing here is fatal to the
/// process; the user may retry by resubmitting the address.
#[derive(Debug, thiserror::Error)]
pub enum WalletscanError {
    /// The submitted string is not a well-formed address. No upstream call was made.
    #[error("{0}")]
    InvalidAddress(#[from] AddressError),

    /// One of the upstream queries failed; all results of the lookup are discarded.
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] UpstreamError),

    /// The lookup did not complete within the configured deadline.
    #[error("Network timeout after {}s", timeout.as_secs())]
    NetworkTimeout {
        /// The deadline that was exceeded
        timeout: Duration,
    },
}

impl WalletscanError {
    /// Create a `NetworkTimeout` error for the given deadline.
    pub fn network_timeout(timeout: Duration) -> Self {
        WalletscanError::NetworkTimeout { timeout }
    }

    /// Whether the failure came from local validation rather than the network.
    pub fn is_invalid_address(&self) -> bool {
        matches!(self, WalletscanError::InvalidAddress(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_address_message_is_surfaced_verbatim() {
        let err: WalletscanError = AddressError::invalid_format("not-an-address").into();
        assert!(err.is_invalid_address());
        assert_eq!(
            err.to_string(),
            "Invalid Ethereum address format: not-an-address"
        );
    }

    #[test]
    fn test_timeout_message() {
        let err = WalletscanError::network_timeout(Duration::from_secs(30));
        assert_eq!(err.to_string(), "Network timeout after 30s");
        assert!(!err.is_invalid_address());
    }

    #[test]
    fn test_upstream_wraps_message() {
        let err: WalletscanError = UpstreamError::rejected("NOTOK", "Invalid API Key").into();
        assert_eq!(
            err.to_string(),
            "Upstream request failed: Upstream rejected request: NOTOK (Invalid API Key)"
        );
    }
}
