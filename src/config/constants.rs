//! Upstream endpoint defaults and well-known constants
//!
//! This module centralizes the magic values used to talk to the upstream
//! account API so they are not scattered across the client and the binary.

use std::time::Duration;

/// Default upstream endpoint (Ethereum mainnet)
pub const DEFAULT_BASE_URL: &str = "https://api.etherscan.io/api";

/// First block of the default history window
pub const DEFAULT_START_BLOCK: u64 = 0;

/// Last block of the default history window
///
/// The upstream API treats this as "up to the chain tip".
pub const DEFAULT_END_BLOCK: u64 = 99_999_999;

/// Default deadline for one lookup (all concurrent requests together)
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the upstream API key (read by the binary only)
pub const API_KEY_ENV: &str = "ETHERSCAN_API_KEY";

/// Environment variable overriding the upstream endpoint (read by the binary only)
pub const BASE_URL_ENV: &str = "ETHERSCAN_BASE_URL";

/// Upstream message prefix meaning "the address has no activity"
pub const NO_TRANSACTIONS_MESSAGE: &str = "No transactions found";

/// Number of fractional digits shown for balances in the text view
pub const DISPLAY_DECIMALS: u8 = 4;
