//! Span creation helpers for walletscan operations.
//!
//! Telemetry is kept apart from business logic: instead of `#[instrument]`
//! attributes on the operations themselves, each instrumented operation has a
//! corresponding span helper function in this module.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, address: &WalletAddress) -> Result<T> {
//!     async move {
//!         // Business logic here
//!     }
//!     .instrument(spans::my_operation(address))
//!     .await
//! }
//! ```

use std::time::Duration;

use tracing::{Level, Span};

use crate::address::WalletAddress;

/// Create span for a full wallet scan (overview and movements).
///
/// Parent: None (root span for this operation)
/// Children: upstream_request spans (one per query)
#[inline]
pub(crate) fn scan(address: &WalletAddress, timeout: Duration) -> Span {
    tracing::span!(
        Level::INFO,
        "walletscan.scan",
        address = %address,
        timeout_ms = timeout.as_millis() as u64,
    )
}

/// Create span for building a wallet overview.
///
/// Parent: None (root span for this operation)
/// Children: upstream_request spans (balance, txlist, tokentx)
#[inline]
pub(crate) fn wallet_overview(address: &WalletAddress, timeout: Duration) -> Span {
    tracing::span!(
        Level::INFO,
        "walletscan.wallet_overview",
        address = %address,
        timeout_ms = timeout.as_millis() as u64,
    )
}

/// Create span for computing token movements.
///
/// Parent: None (root span for this operation)
/// Children: upstream_request span (tokentx)
#[inline]
pub(crate) fn token_movements(address: &WalletAddress, timeout: Duration) -> Span {
    tracing::span!(
        Level::INFO,
        "walletscan.token_movements",
        address = %address,
        timeout_ms = timeout.as_millis() as u64,
    )
}

/// Create span for one upstream account query.
///
/// The API key is never recorded.
///
/// Parent: scan, wallet_overview or token_movements span
/// Children: None
#[inline]
pub(crate) fn upstream_request(action: &'static str, address: &WalletAddress) -> Span {
    tracing::debug_span!(
        "walletscan.upstream_request",
        action = action,
        address = %address,
    )
}
