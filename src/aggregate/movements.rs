// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Per-token sent/received totals and counterparties

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{decoded_amount, CounterpartySet, OrderedAccumulator, TokenKeyPolicy};
use crate::address::WalletAddress;
use crate::events::TokenTransferEvent;
use crate::types::tokens::HumanAmount;

/// Flow summary for one token
///
/// Totals are never netted against each other. `unique_destinations` holds the
/// `to` of every transfer the address sent; `unique_sources` holds the `from`
/// of every transfer it received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMovement {
    /// Display name from the first event seen for the token key
    pub token_name: String,
    /// Sum of outgoing amounts in human units
    pub total_sent: HumanAmount,
    /// Sum of incoming amounts in human units
    pub total_received: HumanAmount,
    /// Distinct recipients of outgoing transfers, first-seen order
    pub unique_destinations: CounterpartySet,
    /// Distinct senders of incoming transfers, first-seen order
    pub unique_sources: CounterpartySet,
}

impl TokenMovement {
    fn empty(token_name: String) -> Self {
        Self {
            token_name,
            total_sent: HumanAmount::zero(),
            total_received: HumanAmount::zero(),
            unique_destinations: CounterpartySet::new(),
            unique_sources: CounterpartySet::new(),
        }
    }

    /// `total_received - total_sent`
    pub fn net(&self) -> HumanAmount {
        self.total_received.clone() - self.total_sent.clone()
    }
}

/// Computes per-token movement summaries from a token-transfer history
///
/// Tokens are emitted only when at least one of their events has the queried
/// address as source or destination; unrelated events never produce an
/// all-zero entry.
///
/// # Examples
///
/// ```rust
/// use walletscan::aggregate::MovementAggregator;
/// use walletscan::{TokenTransferEvent, WalletAddress};
///
/// let me = WalletAddress::parse("0x1111111111111111111111111111111111111111").unwrap();
/// let sent = TokenTransferEvent {
///     from: me.to_string(),
///     to: "0x3333333333333333333333333333333333333333".to_string(),
///     token_name: "Dai".to_string(),
///     token_decimal: "18".to_string(),
///     value: "250000000000000000".to_string(),
///     ..Default::default()
/// };
///
/// let movements = MovementAggregator::default().aggregate(&[sent], &me);
/// assert_eq!(movements[0].total_sent.to_fixed(2), "0.25");
/// assert!(movements[0].total_received.is_zero());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementAggregator {
    policy: TokenKeyPolicy,
}

impl MovementAggregator {
    /// Create an aggregator with the given token key policy
    pub fn new(policy: TokenKeyPolicy) -> Self {
        Self { policy }
    }

    /// Movement summaries for `address`, in first-seen token order
    pub fn aggregate(
        &self,
        events: &[TokenTransferEvent],
        address: &WalletAddress,
    ) -> Vec<TokenMovement> {
        let mut movements = OrderedAccumulator::new();

        for event in events.iter().filter(|event| event.involves(address)) {
            let Some(amount) = decoded_amount(event) else {
                continue;
            };

            let movement = movements.entry(self.policy.key_for(event), || {
                TokenMovement::empty(event.token_name.clone())
            });

            if event.is_sent_by(address) {
                movement.total_sent += &amount;
                movement.unique_destinations.insert(&event.to);
            }
            if event.is_received_by(address) {
                movement.total_received += &amount;
                movement.unique_sources.insert(&event.from);
            }
        }

        let movements = movements.into_values();
        debug!(
            address = %address,
            events = events.len(),
            tokens = movements.len(),
            policy = %self.policy,
            "Aggregated token movements"
        );

        movements
    }
}

/// Movement summaries keyed by token display name
pub fn token_movements(
    events: &[TokenTransferEvent],
    address: &WalletAddress,
) -> Vec<TokenMovement> {
    MovementAggregator::default().aggregate(events, address)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ME: &str = "0x1111111111111111111111111111111111111111";
    const ALICE: &str = "0xa11ce00000000000000000000000000000000000";
    const BOB: &str = "0xb0b0000000000000000000000000000000000000";

    fn transfer(from: &str, to: &str, name: &str, value: &str) -> TokenTransferEvent {
        TokenTransferEvent {
            from: from.to_string(),
            to: to.to_string(),
            contract_address: format!("0x{}", "d".repeat(40)),
            token_name: name.to_string(),
            token_symbol: name.to_string(),
            token_decimal: "0".to_string(),
            value: value.to_string(),
            time_stamp: "1700000000".to_string(),
            ..Default::default()
        }
    }

    fn human(s: &str) -> HumanAmount {
        s.parse().unwrap()
    }

    #[test]
    fn test_sent_and_received_are_not_netted() {
        let me = WalletAddress::parse(ME).unwrap();
        let events = vec![
            transfer(ALICE, ME, "tok", "10"),
            transfer(ME, BOB, "tok", "4"),
            transfer(ME, ALICE, "tok", "1"),
        ];

        let movements = token_movements(&events, &me);
        assert_eq!(movements.len(), 1);
        let m = &movements[0];
        assert_eq!(m.token_name, "tok");
        assert_eq!(m.total_sent, human("5"));
        assert_eq!(m.total_received, human("10"));
        assert_eq!(m.net(), human("5"));
        assert_eq!(m.unique_destinations.as_slice(), [BOB, ALICE]);
        assert_eq!(m.unique_sources.as_slice(), [ALICE]);
    }

    #[test]
    fn test_repeated_counterparty_listed_once() {
        let me = WalletAddress::parse(ME).unwrap();
        let events = vec![
            transfer(ME, BOB, "tok", "1"),
            transfer(ME, BOB, "tok", "2"),
            transfer(ME, BOB, "tok", "3"),
        ];
        let m = &token_movements(&events, &me)[0];
        assert_eq!(m.total_sent, human("6"));
        assert_eq!(m.unique_destinations.len(), 1);
    }

    #[test]
    fn test_counterparties_compare_raw_case() {
        let me = WalletAddress::parse(ME).unwrap();
        let upper_bob = "0xB0B0000000000000000000000000000000000000";
        let events = vec![transfer(ME, BOB, "tok", "1"), transfer(ME, upper_bob, "tok", "1")];
        let m = &token_movements(&events, &me)[0];
        assert_eq!(m.unique_destinations.as_slice(), [BOB, upper_bob]);
    }

    #[test]
    fn test_unrelated_events_produce_no_entry() {
        let me = WalletAddress::parse(ME).unwrap();
        let events = vec![
            transfer(ALICE, BOB, "other", "100"),
            transfer(ALICE, ME, "tok", "1"),
        ];
        let movements = token_movements(&events, &me);
        assert_eq!(movements.len(), 1);
        assert_eq!(movements[0].token_name, "tok");
    }

    #[test]
    fn test_self_transfer_counts_both_directions() {
        let me = WalletAddress::parse(ME).unwrap();
        let m = &token_movements(&[transfer(ME, ME, "tok", "7")], &me)[0];
        assert_eq!(m.total_sent, human("7"));
        assert_eq!(m.total_received, human("7"));
        assert!(m.net().is_zero());
        assert_eq!(m.unique_destinations.as_slice(), [ME]);
        assert_eq!(m.unique_sources.as_slice(), [ME]);
    }

    #[test]
    fn test_contract_policy_splits_same_name() {
        let me = WalletAddress::parse(ME).unwrap();
        let mut a = transfer(ALICE, ME, "USDC", "1");
        a.contract_address = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".to_string();
        let mut b = transfer(ALICE, ME, "USDC", "2");
        b.contract_address = "0x000000000000000000000000000000000000dead".to_string();
        let events = vec![a, b];

        assert_eq!(token_movements(&events, &me).len(), 1);

        let split = MovementAggregator::new(TokenKeyPolicy::ContractAddress).aggregate(&events, &me);
        assert_eq!(split.len(), 2);
        assert_eq!(split[0].token_name, "USDC");
        assert_eq!(split[0].total_received, human("1"));
        assert_eq!(split[1].token_name, "USDC");
        assert_eq!(split[1].total_received, human("2"));
    }

    #[test]
    fn test_serializes_sets_as_lists() {
        let me = WalletAddress::parse(ME).unwrap();
        let m = &token_movements(&[transfer(ME, BOB, "tok", "3")], &me)[0];
        let json = serde_json::to_value(m).unwrap();
        assert_eq!(json["tokenName"], "tok");
        assert_eq!(json["totalSent"], "3");
        assert_eq!(json["uniqueDestinations"], serde_json::json!([BOB]));
        assert_eq!(json["uniqueSources"], serde_json::json!([]));
    }
}
