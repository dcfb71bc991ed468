// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Human-unit (decimal-adjusted) amount type

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use alloy_primitives::U256;
use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::{BigDecimal, RoundingMode, Zero};
use serde::{Deserialize, Serialize, Serializer};

use super::decimals::TokenDecimals;
use crate::errors::AmountError;

/// Token or native amount in human units (base units / 10^decimals)
///
/// Backed by an arbitrary-precision decimal so conversions from base units
/// are exact and the base-unit value can be recovered with
/// [`to_base_units`](Self::to_base_units).
///
/// # Invariant
///
/// Unlike raw amounts, human amounts are **signed**: a running net balance
/// goes negative when more of a token was sent than received in the observed
/// history. Callers that need "currently held" semantics filter with
/// [`is_positive`](Self::is_positive).
///
/// Serializes as a plain decimal string with trailing zeros removed
/// (`"0.05"`, `"0.000000000000000001"`), never in exponent form.
///
/// # Examples
///
/// ```
/// use walletscan::{HumanAmount, TokenAmount, TokenDecimals};
///
/// let received = TokenAmount::from(3_000_000u64).to_human(TokenDecimals::USDC);
/// let sent = TokenAmount::from(5_000_000u64).to_human(TokenDecimals::USDC);
///
/// let net = received - sent;
/// assert_eq!(net, "-2".parse::<HumanAmount>().unwrap());
/// assert!(!net.is_positive());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct HumanAmount(BigDecimal);

impl HumanAmount {
    /// Zero human amount
    pub fn zero() -> Self {
        Self(BigDecimal::zero())
    }

    /// Create from an existing decimal
    pub fn new(value: BigDecimal) -> Self {
        Self(value)
    }

    /// Convert a base-unit value: `value / 10^decimals`, exactly
    pub fn from_base_units(value: U256, decimals: TokenDecimals) -> Self {
        let digits = BigInt::from_bytes_be(Sign::Plus, &value.to_be_bytes::<32>());
        Self(BigDecimal::new(digits, i64::from(decimals.as_u8())))
    }

    /// Convert back to base units: `self * 10^decimals`
    ///
    /// Digits beyond the token's precision are truncated toward zero.
    pub fn to_base_units(&self, decimals: TokenDecimals) -> BigInt {
        let (digits, _) = self
            .0
            .with_scale(i64::from(decimals.as_u8()))
            .as_bigint_and_exponent();
        digits
    }

    /// Get a reference to the inner decimal
    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > BigDecimal::zero()
    }

    /// Exactly zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Shortest plain decimal rendering of the exact value
    pub fn to_plain_string(&self) -> String {
        self.0.normalized().to_plain_string()
    }

    /// Round half-up to a fixed number of fractional digits, for display
    ///
    /// # Examples
    ///
    /// ```
    /// use walletscan::HumanAmount;
    ///
    /// let amount: HumanAmount = "1.23456".parse().unwrap();
    /// assert_eq!(amount.to_fixed(4), "1.2346");
    ///
    /// let zero = HumanAmount::zero();
    /// assert_eq!(zero.to_fixed(4), "0.0000");
    /// ```
    pub fn to_fixed(&self, fractional_digits: u8) -> String {
        self.0
            .with_scale_round(i64::from(fractional_digits), RoundingMode::HalfUp)
            .to_plain_string()
    }
}

impl FromStr for HumanAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigDecimal::from_str(s.trim())
            .map(Self)
            .map_err(|e| AmountError::invalid_amount(s, e))
    }
}

impl From<BigDecimal> for HumanAmount {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl Add for HumanAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign<&HumanAmount> for HumanAmount {
    fn add_assign(&mut self, rhs: &HumanAmount) {
        self.0 += &rhs.0;
    }
}

impl Sub for HumanAmount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign<&HumanAmount> for HumanAmount {
    fn sub_assign(&mut self, rhs: &HumanAmount) {
        self.0 -= &rhs.0;
    }
}

impl Neg for HumanAmount {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl std::iter::Sum for HumanAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl Serialize for HumanAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_plain_string())
    }
}

impl std::fmt::Display for HumanAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_plain_string())
    }
}
