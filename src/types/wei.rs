// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for native currency amounts
//!
//! This module provides a newtype wrapper for native currency (ETH) in wei
//! to prevent confusion with ERC-20 token amounts.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::errors::AmountError;
use crate::types::tokens::{HumanAmount, TokenAmount, TokenDecimals};

/// Represents an amount of native currency (ETH) in wei
///
/// This type is distinct from [`TokenAmount`] to prevent mixing native
/// currency amounts with ERC-20 token amounts in calculations.
///
/// # Examples
///
/// ```
/// use walletscan::{HumanAmount, WeiAmount};
///
/// let balance = WeiAmount::parse("1500000000000000000").unwrap(); // 1.5 ETH
/// assert_eq!(balance.to_ether(), "1.5".parse::<HumanAmount>().unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct WeiAmount(U256);

impl WeiAmount {
    /// Zero wei amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new wei amount
    pub const fn new(wei: U256) -> Self {
        Self(wei)
    }

    /// Parse the upstream balance field (a base-10 wei string)
    pub fn parse(raw: &str) -> Result<Self, AmountError> {
        TokenAmount::parse(raw).map(|amount| Self(amount.as_u256()))
    }

    /// Get the inner U256 value (in wei)
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Convert to ether (1 ETH = 10^18 wei), exactly
    pub fn to_ether(&self) -> HumanAmount {
        HumanAmount::from_base_units(self.0, TokenDecimals::NATIVE)
    }
}

impl From<u64> for WeiAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for WeiAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for WeiAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wei", self.0)
    }
}
