// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw token amount type

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::decimals::TokenDecimals;
use super::human::HumanAmount;
use crate::errors::AmountError;

/// Raw token amount (not normalized for decimals)
///
/// This represents the raw token amount as reported by the upstream API in the
/// smallest unit (e.g., wei for 18-decimal tokens). To convert to
/// human-readable amounts, use [`to_human`](Self::to_human) with the token's
/// [`TokenDecimals`].
///
/// # Examples
///
/// ```
/// use walletscan::{HumanAmount, TokenAmount, TokenDecimals};
///
/// // 1.5 tokens with 18 decimals
/// let amount = TokenAmount::parse("1500000000000000000").unwrap();
/// let human = amount.to_human(TokenDecimals::STANDARD);
/// assert_eq!(human, "1.5".parse::<HumanAmount>().unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// Zero token amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new token amount from U256
    pub const fn new(amount: U256) -> Self {
        Self(amount)
    }

    /// Parse an upstream base-unit amount: a non-negative base-10 integer string.
    pub fn parse(raw: &str) -> Result<Self, AmountError> {
        let digits = raw.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::invalid_amount(raw, "not a base-10 integer"));
        }
        U256::from_str_radix(digits, 10)
            .map(Self)
            .map_err(|e| AmountError::invalid_amount(raw, e))
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Convert to human units: amount / 10^decimals, exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use walletscan::{TokenAmount, TokenDecimals};
    ///
    /// // 100 USDC (6 decimals)
    /// let raw = TokenAmount::from(100_000_000u64);
    /// assert_eq!(raw.to_human(TokenDecimals::USDC).to_string(), "100.000000");
    /// ```
    pub fn to_human(&self, decimals: TokenDecimals) -> HumanAmount {
        HumanAmount::from_base_units(self.0, decimals)
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for TokenAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
