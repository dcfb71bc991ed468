// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for parsing upstream amount fields.

/// Errors raised when an upstream amount, decimals or timestamp field cannot be parsed.
///
/// Upstream values arrive as decimal strings. These errors carry the
/// offending text so a skipped record can be logged with context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// A raw base-unit amount was not a non-negative base-10 integer that fits in 256 bits.
    #[error("Invalid base-unit amount '{value}': {reason}")]
    InvalidAmount {
        /// The raw upstream text
        value: String,
        /// Parser message
        reason: String,
    },

    /// A token decimal exponent was not an integer in 0..=255.
    #[error("Invalid token decimals '{value}'")]
    InvalidDecimals {
        /// The raw upstream text
        value: String,
    },

    /// A unix timestamp was not a valid number of seconds.
    #[error("Invalid timestamp '{value}'")]
    InvalidTimestamp {
        /// The raw upstream text
        value: String,
    },
}

impl AmountError {
    /// Create an `InvalidAmount` error.
    pub fn invalid_amount(value: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        AmountError::InvalidAmount {
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an `InvalidDecimals` error.
    pub fn invalid_decimals(value: impl Into<String>) -> Self {
        AmountError::InvalidDecimals {
            value: value.into(),
        }
    }

    /// Create an `InvalidTimestamp` error.
    pub fn invalid_timestamp(value: impl Into<String>) -> Self {
        AmountError::InvalidTimestamp {
            value: value.into(),
        }
    }
}
