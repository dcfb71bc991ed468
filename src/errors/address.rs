// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for address validation.

/// Errors raised while validating a user-supplied address.
///
/// Validation is the sole gate before any network I/O, so these errors are
/// always produced locally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// The input was empty or whitespace only.
    #[error("Please enter an Ethereum wallet address")]
    Empty,

    /// The input is not `0x` followed by exactly 40 hexadecimal digits.
    #[error("Invalid Ethereum address format: {input}")]
    InvalidFormat {
        /// The rejected input
        input: String,
    },
}

impl AddressError {
    /// Create an `InvalidFormat` error for the rejected input.
    pub fn invalid_format(input: impl Into<String>) -> Self {
        AddressError::InvalidFormat {
            input: input.into(),
        }
    }
}
