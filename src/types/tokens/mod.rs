// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for token-related values
//!
//! This module provides newtype wrappers for token operations
//! to add type safety and prevent mixing incompatible units.
//!
//! # Type Relationships
//!
//! ```text
//! "1500000" (upstream decimal string)
//!     |
//!     | TokenAmount::parse
//!     ↓
//! TokenAmount (U256, base units)
//!     |
//!     | to_human(TokenDecimals)
//!     ↓
//! HumanAmount (BigDecimal, signed, exact)
//! ```

mod amount;
mod decimals;
mod human;

pub use amount::TokenAmount;
pub use decimals::TokenDecimals;
pub use human::HumanAmount;
