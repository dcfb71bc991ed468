// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token-transfer aggregation
//!
//! Turns the upstream token-transfer history of one address into:
//!
//! 1. [`TokenHolding`]s via [`HoldingsAggregator`]: signed net balance per
//!    token, keeping only tokens currently held in a positive amount
//! 2. [`TokenMovement`]s via [`MovementAggregator`]: total sent, total
//!    received and unique counterparties per token, never netted
//!
//! Both aggregators are pure functions of the event list and the queried
//! address. Direction is decided case-insensitively; counterparty sets
//! compare raw strings (see [`CounterpartySet`]). Token identity is chosen by
//! [`TokenKeyPolicy`]. Output order is the order in which each token key was
//! first seen.
//!
//! # Example
//!
//! ```rust
//! use walletscan::aggregate::{token_holdings, token_movements};
//! use walletscan::{TokenTransferEvent, WalletAddress};
//!
//! let me = WalletAddress::parse("0x1111111111111111111111111111111111111111").unwrap();
//! let events = vec![TokenTransferEvent {
//!     from: "0x2222222222222222222222222222222222222222".to_string(),
//!     to: me.to_string(),
//!     token_name: "USD Coin".to_string(),
//!     token_symbol: "USDC".to_string(),
//!     token_decimal: "6".to_string(),
//!     value: "2500000".to_string(),
//!     ..Default::default()
//! }];
//!
//! let holdings = token_holdings(&events, &me);
//! assert_eq!(holdings[0].balance.to_fixed(4), "2.5000");
//!
//! let movements = token_movements(&events, &me);
//! assert_eq!(movements[0].unique_sources.len(), 1);
//! ```

mod counterparty;
mod holdings;
mod key;
mod movements;

use std::collections::HashMap;

use tracing::warn;

use crate::events::TokenTransferEvent;
use crate::types::tokens::HumanAmount;

pub use counterparty::CounterpartySet;
pub use holdings::{token_holdings, HoldingsAggregator, TokenHolding};
pub use key::TokenKeyPolicy;
pub use movements::{token_movements, MovementAggregator, TokenMovement};

/// Per-key accumulator that remembers first-insertion order
#[derive(Debug)]
struct OrderedAccumulator<V> {
    index: HashMap<String, usize>,
    entries: Vec<V>,
}

impl<V> OrderedAccumulator<V> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Get the entry for `key`, creating it with `init` on first sight
    fn entry(&mut self, key: String, init: impl FnOnce() -> V) -> &mut V {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.entries.push(init());
                self.index.insert(key, slot);
                slot
            }
        };
        &mut self.entries[slot]
    }

    fn into_values(self) -> Vec<V> {
        self.entries
    }
}

/// Human-unit amount of `event`, or `None` (with a warning) when upstream sent garbage
///
/// Decimals above [`TokenDecimals::MAX_REASONABLE`](crate::TokenDecimals::MAX_REASONABLE)
/// are still applied, with a warning.
fn decoded_amount(event: &TokenTransferEvent) -> Option<HumanAmount> {
    let decoded = event
        .decimals()
        .and_then(|decimals| Ok((event.amount()?.to_human(decimals), decimals)));

    match decoded {
        Ok((amount, decimals)) => {
            if !decimals.is_reasonable() {
                warn!(
                    token = %event.token_name,
                    contract = %event.contract_address,
                    decimals = %decimals,
                    "Token transfer declares unusually high decimals"
                );
            }
            Some(amount)
        }
        Err(e) => {
            warn!(
                token = %event.token_name,
                contract = %event.contract_address,
                hash = event.hash.as_deref().unwrap_or_default(),
                error = %e,
                "Skipping token transfer with unparseable amount"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_accumulator_keeps_first_insertion_order() {
        let mut acc = OrderedAccumulator::new();
        *acc.entry("b".to_string(), || 0) += 1;
        *acc.entry("a".to_string(), || 0) += 10;
        *acc.entry("b".to_string(), || 0) += 1;
        assert_eq!(acc.into_values(), vec![2, 10]);
    }

    #[test]
    fn test_decoded_amount_skips_garbage() {
        let bad = TokenTransferEvent {
            value: "NaN".to_string(),
            token_decimal: "18".to_string(),
            ..Default::default()
        };
        assert!(decoded_amount(&bad).is_none());

        let good = TokenTransferEvent {
            value: "5".to_string(),
            token_decimal: "1".to_string(),
            ..Default::default()
        };
        assert_eq!(
            decoded_amount(&good),
            Some("0.5".parse::<HumanAmount>().unwrap())
        );
    }

    #[test]
    fn test_decoded_amount_applies_unusual_decimals() {
        let event = TokenTransferEvent {
            value: "25".to_string(),
            token_decimal: "20".to_string(),
            ..Default::default()
        };
        assert!(!event.decimals().unwrap().is_reasonable());
        assert_eq!(
            decoded_amount(&event),
            Some("0.00000000000000000025".parse::<HumanAmount>().unwrap())
        );

        let bad_decimals = TokenTransferEvent {
            value: "25".to_string(),
            token_decimal: "eighteen".to_string(),
            ..Default::default()
        };
        assert!(decoded_amount(&bad_decimals).is_none());
    }
}
