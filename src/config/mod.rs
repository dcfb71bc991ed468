// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for walletscan lookups
//!
//! This module provides the explicit configuration injected into the upstream
//! client and the scanner. Nothing here reads the environment; the binary
//! assembles a config from flags, `.env` and environment variables.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use walletscan::WalletscanConfig;
//!
//! // Mainnet endpoint, no API key, 30 second deadline
//! let config = WalletscanConfig::default();
//! assert!(config.api_key.is_none());
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use std::time::Duration;
//! use walletscan::aggregate::TokenKeyPolicy;
//! use walletscan::WalletscanConfigBuilder;
//!
//! let config = WalletscanConfigBuilder::new()
//!     .api_key("YourApiKeyToken")
//!     .request_timeout(Duration::from_secs(10))
//!     .token_key_policy(TokenKeyPolicy::ContractAddress)
//!     .build();
//! ```

use std::time::Duration;

use url::Url;

use crate::aggregate::TokenKeyPolicy;
use crate::etherscan::TransactionQuery;

pub mod constants;

use constants::{DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT};

/// Configuration for walletscan lookups
///
/// Use [`WalletscanConfigBuilder`] for a fluent API to construct instances.
#[derive(Clone)]
pub struct WalletscanConfig {
    /// Upstream API key, sent as the `apikey` query parameter
    /// Default: None (parameter omitted; upstream applies its anonymous limits)
    pub api_key: Option<String>,

    /// Upstream endpoint
    /// Default: `https://api.etherscan.io/api`
    pub base_url: Url,

    /// Deadline for one lookup, covering all of its concurrent requests
    /// Default: 30 seconds
    pub request_timeout: Duration,

    /// Block window and ordering for list queries
    /// Default: blocks 0..=99999999, ascending
    pub transaction_query: TransactionQuery,

    /// Token identity used by both aggregators
    /// Default: display name
    pub token_key_policy: TokenKeyPolicy,
}

impl std::fmt::Debug for WalletscanConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletscanConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url.as_str())
            .field("request_timeout", &self.request_timeout)
            .field("transaction_query", &self.transaction_query)
            .field("token_key_policy", &self.token_key_policy)
            .finish()
    }
}

impl Default for WalletscanConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            transaction_query: TransactionQuery::default(),
            token_key_policy: TokenKeyPolicy::default(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL")
}

impl WalletscanConfig {
    /// Create config pointing at the default endpoint with the given key
    ///
    /// # Example
    ///
    /// ```rust
    /// use walletscan::WalletscanConfig;
    ///
    /// let config = WalletscanConfig::with_api_key("YourApiKeyToken");
    /// assert_eq!(config.api_key.as_deref(), Some("YourApiKeyToken"));
    /// assert_eq!(config.base_url.as_str(), "https://api.etherscan.io/api");
    /// ```
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Whether an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

/// Builder for [`WalletscanConfig`]
///
/// Provides a fluent API for constructing walletscan configurations.
///
/// # Example
///
/// ```rust
/// use url::Url;
/// use walletscan::etherscan::{SortOrder, TransactionQuery};
/// use walletscan::WalletscanConfigBuilder;
///
/// let config = WalletscanConfigBuilder::new()
///     .base_url(Url::parse("https://api-sepolia.etherscan.io/api").unwrap())
///     .transaction_query(TransactionQuery::default().with_sort(SortOrder::Asc))
///     .build();
///
/// assert_eq!(config.base_url.host_str(), Some("api-sepolia.etherscan.io"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WalletscanConfigBuilder {
    config: WalletscanConfig,
}

impl WalletscanConfigBuilder {
    /// Create a new builder starting from the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: WalletscanConfig) -> Self {
        Self { config }
    }

    /// Set the upstream API key
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    /// Set the API key if one is available
    ///
    /// Empty strings are treated as absent.
    pub fn maybe_api_key(mut self, api_key: Option<String>) -> Self {
        self.config.api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }

    /// Set the upstream endpoint
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.config.base_url = base_url;
        self
    }

    /// Set the deadline for one lookup
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use walletscan::WalletscanConfigBuilder;
    ///
    /// let config = WalletscanConfigBuilder::new()
    ///     .request_timeout(Duration::from_secs(5))
    ///     .build();
    /// assert_eq!(config.request_timeout, Duration::from_secs(5));
    /// ```
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Set the block window and ordering for list queries
    pub fn transaction_query(mut self, query: TransactionQuery) -> Self {
        self.config.transaction_query = query;
        self
    }

    /// Set the token identity policy
    pub fn token_key_policy(mut self, policy: TokenKeyPolicy) -> Self {
        self.config.token_key_policy = policy;
        self
    }

    /// Build the configuration
    pub fn build(self) -> WalletscanConfig {
        self.config
    }
}
