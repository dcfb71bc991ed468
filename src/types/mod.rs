// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across walletscan.
//!
//! This module provides newtype wrappers for amount concepts:
//! - Native currency amounts in wei
//! - Raw token amounts, token decimals and human-unit amounts

pub mod tokens;
pub mod wei;

// Note: Public types are re-exported from lib.rs, not here
