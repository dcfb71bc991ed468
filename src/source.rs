// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Wallet activity data sources
//!
//! The scanner never talks HTTP directly. It asks a [`WalletDataSource`] for
//! the three pieces of history it needs, so tests (and alternative backends)
//! can plug in their own implementation.
//!
//! # Example: In-memory source
//!
//! ```rust
//! use async_trait::async_trait;
//! use walletscan::{
//!     NativeTransaction, TokenTransferEvent, UpstreamError, WalletAddress, WalletDataSource,
//!     WeiAmount,
//! };
//!
//! struct EmptySource;
//!
//! #[async_trait]
//! impl WalletDataSource for EmptySource {
//!     async fn native_balance(&self, _: &WalletAddress) -> Result<WeiAmount, UpstreamError> {
//!         Ok(WeiAmount::ZERO)
//!     }
//!
//!     async fn native_transactions(
//!         &self,
//!         _: &WalletAddress,
//!     ) -> Result<Vec<NativeTransaction>, UpstreamError> {
//!         Ok(Vec::new())
//!     }
//!
//!     async fn token_transfers(
//!         &self,
//!         _: &WalletAddress,
//!     ) -> Result<Vec<TokenTransferEvent>, UpstreamError> {
//!         Ok(Vec::new())
//!     }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::address::WalletAddress;
use crate::errors::UpstreamError;
use crate::events::{NativeTransaction, TokenTransferEvent};
use crate::types::wei::WeiAmount;

/// Provider of the raw history behind a wallet summary
///
/// Implementations must be `Send + Sync` so the three queries can run
/// concurrently. Lists are expected oldest first. An address with no activity
/// yields empty lists, never an error.
#[async_trait]
pub trait WalletDataSource: Send + Sync {
    /// Current native balance in wei
    async fn native_balance(&self, address: &WalletAddress) -> Result<WeiAmount, UpstreamError>;

    /// Every native transaction involving `address`, oldest first
    async fn native_transactions(
        &self,
        address: &WalletAddress,
    ) -> Result<Vec<NativeTransaction>, UpstreamError>;

    /// Every ERC-20 transfer involving `address`, oldest first
    async fn token_transfers(
        &self,
        address: &WalletAddress,
    ) -> Result<Vec<TokenTransferEvent>, UpstreamError>;
}

#[async_trait]
impl<T: WalletDataSource + ?Sized> WalletDataSource for Arc<T> {
    async fn native_balance(&self, address: &WalletAddress) -> Result<WeiAmount, UpstreamError> {
        (**self).native_balance(address).await
    }

    async fn native_transactions(
        &self,
        address: &WalletAddress,
    ) -> Result<Vec<NativeTransaction>, UpstreamError> {
        (**self).native_transactions(address).await
    }

    async fn token_transfers(
        &self,
        address: &WalletAddress,
    ) -> Result<Vec<TokenTransferEvent>, UpstreamError> {
        (**self).token_transfers(address).await
    }
}
