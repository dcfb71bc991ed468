// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token decimal precision type

use serde::{Deserialize, Serialize};

use crate::errors::AmountError;

/// ERC-20 token decimal precision
///
/// Represents the number of decimal places for a token. Most ERC-20 tokens
/// use 18 decimals (like ETH), but some use different values:
/// - USDC: 6 decimals
/// - Standard: 18 decimals
///
/// The upstream API reports decimals as a string per transfer event; use
/// [`parse`](Self::parse) to read it.
///
/// # Examples
///
/// ```
/// use walletscan::TokenDecimals;
///
/// let eth_decimals = TokenDecimals::STANDARD;
/// assert_eq!(eth_decimals.as_u8(), 18);
///
/// let usdc_decimals = TokenDecimals::parse("6").unwrap();
/// assert_eq!(usdc_decimals, TokenDecimals::USDC);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Maximum reasonable decimals (following ERC-20 convention)
    pub const MAX_REASONABLE: u8 = 18;

    /// Standard decimals for ETH-like tokens (18)
    pub const STANDARD: Self = Self(18);

    /// Decimals of the native currency (wei per ether)
    pub const NATIVE: Self = Self(18);

    /// USDC decimals (6)
    pub const USDC: Self = Self(6);

    /// Create a new decimal precision value
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Parse the upstream `tokenDecimal` field
    pub fn parse(raw: &str) -> Result<Self, AmountError> {
        raw.trim()
            .parse::<u8>()
            .map(Self)
            .map_err(|_| AmountError::invalid_decimals(raw))
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Check if decimals are in reasonable range (0-18)
    ///
    /// While the ERC-20 standard allows any u8 value, most tokens
    /// use 18 or fewer decimals. Values over 18 are unusual and
    /// may indicate data errors.
    pub const fn is_reasonable(&self) -> bool {
        self.0 <= Self::MAX_REASONABLE
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_decimals_constants() {
        assert_eq!(TokenDecimals::STANDARD.as_u8(), 18);
        assert_eq!(TokenDecimals::NATIVE.as_u8(), 18);
        assert_eq!(TokenDecimals::USDC.as_u8(), 6);
    }

    #[test]
    fn test_parse_upstream_field() {
        assert_eq!(TokenDecimals::parse("18").unwrap(), TokenDecimals::STANDARD);
        assert_eq!(TokenDecimals::parse(" 0 ").unwrap(), TokenDecimals::new(0));
        assert_eq!(
            TokenDecimals::parse(""),
            Err(AmountError::invalid_decimals(""))
        );
        assert!(TokenDecimals::parse("-1").is_err());
        assert!(TokenDecimals::parse("256").is_err());
        assert!(TokenDecimals::parse("6.0").is_err());
    }

    #[test]
    fn test_token_decimals_reasonable() {
        assert!(TokenDecimals::new(0).is_reasonable());
        assert!(TokenDecimals::new(18).is_reasonable());
        assert!(!TokenDecimals::new(19).is_reasonable());
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(format!("{}", TokenDecimals::USDC), "6 decimals");
    }
}
