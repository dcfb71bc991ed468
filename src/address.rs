// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Validated wallet address
//!
//! [`WalletAddress`] is the only way into a lookup: every public operation
//! parses its input through [`WalletAddress::parse`] before any upstream
//! request is issued.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::Address;
use serde::Serialize;

use crate::errors::AddressError;

/// A user-supplied Ethereum address that passed format validation
///
/// Keeps the text exactly as entered for display, alongside the parsed
/// 20-byte value. Comparisons against upstream address strings are
/// case-insensitive.
///
/// # Examples
///
/// ```
/// use walletscan::WalletAddress;
///
/// let address = WalletAddress::parse("0xAbC0000000000000000000000000000000000001").unwrap();
/// assert!(address.matches("0xabc0000000000000000000000000000000000001"));
/// assert_eq!(address.as_str(), "0xAbC0000000000000000000000000000000000001");
///
/// assert!(WalletAddress::parse("not-an-address").is_err());
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(into = "String")]
pub struct WalletAddress {
    raw: String,
    parsed: Address,
}

impl WalletAddress {
    /// Length of the hex part of an address (20 bytes)
    pub const HEX_DIGITS: usize = 40;

    /// Validate `input` as `0x` followed by exactly 40 hexadecimal digits.
    ///
    /// Blank input is reported as [`AddressError::Empty`]. Anything else is
    /// matched as given, so surrounding whitespace is rejected. Hex digits may
    /// use either case; the prefix must be a lowercase `0x`.
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        if input.trim().is_empty() {
            return Err(AddressError::Empty);
        }

        let well_formed = input.strip_prefix("0x").is_some_and(|hex| {
            hex.len() == Self::HEX_DIGITS && hex.bytes().all(|b| b.is_ascii_hexdigit())
        });
        if !well_formed {
            return Err(AddressError::invalid_format(input));
        }

        let parsed = Address::from_str(input).map_err(|_| AddressError::invalid_format(input))?;

        Ok(Self {
            raw: input.to_string(),
            parsed,
        })
    }

    /// The address as entered
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed 20-byte value
    pub const fn address(&self) -> Address {
        self.parsed
    }

    /// Case-insensitive comparison against an upstream address string
    pub fn matches(&self, other: &str) -> bool {
        self.raw.eq_ignore_ascii_case(other.trim())
    }
}

impl PartialEq for WalletAddress {
    fn eq(&self, other: &Self) -> bool {
        self.parsed == other.parsed
    }
}

impl Eq for WalletAddress {}

impl FromStr for WalletAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<WalletAddress> for String {
    fn from(value: WalletAddress) -> Self {
        value.raw
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
