// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client for the Etherscan account endpoints

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, Instrument};
use url::Url;

use super::response::Envelope;
use super::TransactionQuery;
use crate::address::WalletAddress;
use crate::config::WalletscanConfig;
use crate::errors::UpstreamError;
use crate::events::{NativeTransaction, TokenTransferEvent};
use crate::source::WalletDataSource;
use crate::spans;
use crate::types::wei::WeiAmount;

const MODULE_ACCOUNT: &str = "account";
const ACTION_BALANCE: &str = "balance";
const ACTION_TXLIST: &str = "txlist";
const ACTION_TOKENTX: &str = "tokentx";

/// [`WalletDataSource`] backed by an Etherscan-compatible REST API
///
/// Every query is a `GET {base_url}?module=account&action=...&address=...`
/// with the API key appended as `apikey` when configured. The HTTP client
/// applies the configured request timeout to each call.
///
/// # Examples
///
/// ```rust,no_run
/// use walletscan::etherscan::EtherscanClient;
/// use walletscan::{WalletAddress, WalletDataSource, WalletscanConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = EtherscanClient::new(&WalletscanConfig::with_api_key("YourApiKeyToken"))?;
/// let address = WalletAddress::parse("0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe")?;
///
/// let balance = client.native_balance(&address).await?;
/// println!("{} ETH", balance.to_ether().to_fixed(4));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct EtherscanClient {
    http: Client,
    base_url: Url,
    api_key: Option<String>,
    query: TransactionQuery,
}

impl std::fmt::Debug for EtherscanClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EtherscanClient")
            .field("base_url", &self.base_url.as_str())
            .field("has_api_key", &self.api_key.is_some())
            .field("query", &self.query)
            .finish()
    }
}

impl EtherscanClient {
    /// Create a client from explicit configuration
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::RequestFailed`] if the HTTP client cannot be
    /// initialized (e.g. no TLS backend available).
    pub fn new(config: &WalletscanConfig) -> Result<Self, UpstreamError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| UpstreamError::request_failed("client setup", e))?;

        Ok(Self::with_http_client(http, config))
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_http_client(http: Client, config: &WalletscanConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            query: config.transaction_query,
        }
    }

    /// The endpoint this client talks to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue one account query and decode its envelope
    async fn get_envelope(
        &self,
        action: &'static str,
        address: &WalletAddress,
        extra: &[(&'static str, String)],
    ) -> Result<Envelope, UpstreamError> {
        let mut params: Vec<(&str, &str)> = vec![
            ("module", MODULE_ACCOUNT),
            ("action", action),
            ("address", address.as_str()),
        ];
        params.extend(extra.iter().map(|(k, v)| (*k, v.as_str())));
        if let Some(key) = &self.api_key {
            params.push(("apikey", key.as_str()));
        }

        debug!(action, "Sending upstream request");

        let response = self
            .http
            .get(self.base_url.clone())
            .query(&params)
            .send()
            .await
            .map_err(|e| transport_error(action, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::http_status(action, status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| transport_error(action, e))?;

        serde_json::from_str(&body).map_err(|e| UpstreamError::malformed(action, e.to_string()))
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        action: &'static str,
        address: &WalletAddress,
    ) -> Result<Vec<T>, UpstreamError> {
        async {
            let envelope = self
                .get_envelope(action, address, &self.query.params())
                .await?;
            let items: Vec<T> = envelope.into_list(action)?;
            debug!(action, count = items.len(), "Received upstream list");
            Ok(items)
        }
        .instrument(spans::upstream_request(action, address))
        .await
    }
}

/// Map a `reqwest` failure, keeping client-side timeouts distinguishable
fn transport_error(action: &str, error: reqwest::Error) -> UpstreamError {
    if error.is_timeout() {
        UpstreamError::timed_out(action)
    } else {
        // Strip the URL so the API key never ends up in error messages
        UpstreamError::request_failed(action, error.without_url())
    }
}

#[async_trait]
impl WalletDataSource for EtherscanClient {
    async fn native_balance(&self, address: &WalletAddress) -> Result<WeiAmount, UpstreamError> {
        async {
            let envelope = self
                .get_envelope(ACTION_BALANCE, address, &[("tag", "latest".to_string())])
                .await?;
            let raw = envelope.into_scalar(ACTION_BALANCE)?;
            let balance = WeiAmount::parse(&raw)?;
            debug!(balance = %balance, "Received native balance");
            Ok(balance)
        }
        .instrument(spans::upstream_request(ACTION_BALANCE, address))
        .await
    }

    async fn native_transactions(
        &self,
        address: &WalletAddress,
    ) -> Result<Vec<NativeTransaction>, UpstreamError> {
        self.get_list(ACTION_TXLIST, address).await
    }

    async fn token_transfers(
        &self,
        address: &WalletAddress,
    ) -> Result<Vec<TokenTransferEvent>, UpstreamError> {
        self.get_list(ACTION_TOKENTX, address).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_copies_config() {
        let config = WalletscanConfig::with_api_key("secret");
        let client = EtherscanClient::new(&config).unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.etherscan.io/api");
        assert_eq!(client.query, TransactionQuery::default());
    }

    #[test]
    fn test_debug_hides_api_key() {
        let client = EtherscanClient::new(&WalletscanConfig::with_api_key("secret")).unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("has_api_key: true"));
    }
}
