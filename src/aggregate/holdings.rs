// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Net token holdings

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{decoded_amount, OrderedAccumulator, TokenKeyPolicy};
use crate::address::WalletAddress;
use crate::events::TokenTransferEvent;
use crate::types::tokens::HumanAmount;

/// A token currently held by the queried address
///
/// Name, symbol and contract come from the first event seen for the token key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenHolding {
    /// Token display name
    pub name: String,
    /// Token ticker symbol
    pub symbol: String,
    /// Net balance in human units; always > 0 in aggregator output
    pub balance: HumanAmount,
    /// Token contract address
    pub contract_address: String,
}

/// Computes net balances from a token-transfer history
///
/// For every event the amount is subtracted when the queried address is the
/// source and added when it is the destination (a self-transfer does both).
/// Only tokens whose final balance is strictly positive are returned.
///
/// # Examples
///
/// ```rust
/// use walletscan::aggregate::{HoldingsAggregator, TokenKeyPolicy};
/// use walletscan::WalletAddress;
///
/// let aggregator = HoldingsAggregator::new(TokenKeyPolicy::ContractAddress);
/// let me = WalletAddress::parse("0x1111111111111111111111111111111111111111").unwrap();
/// assert!(aggregator.aggregate(&[], &me).is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldingsAggregator {
    policy: TokenKeyPolicy,
}

impl HoldingsAggregator {
    /// Create an aggregator with the given token key policy
    pub fn new(policy: TokenKeyPolicy) -> Self {
        Self { policy }
    }

    /// Net positive holdings of `address`, in first-seen token order
    pub fn aggregate(
        &self,
        events: &[TokenTransferEvent],
        address: &WalletAddress,
    ) -> Vec<TokenHolding> {
        let mut balances = OrderedAccumulator::new();

        for event in events {
            let Some(amount) = decoded_amount(event) else {
                continue;
            };

            let holding = balances.entry(self.policy.key_for(event), || TokenHolding {
                name: event.token_name.clone(),
                symbol: event.token_symbol.clone(),
                balance: HumanAmount::zero(),
                contract_address: event.contract_address.clone(),
            });

            if event.is_sent_by(address) {
                holding.balance -= &amount;
            }
            if event.is_received_by(address) {
                holding.balance += &amount;
            }
        }

        let holdings: Vec<TokenHolding> = balances
            .into_values()
            .into_iter()
            .filter(|holding| holding.balance.is_positive())
            .collect();

        debug!(
            address = %address,
            events = events.len(),
            holdings = holdings.len(),
            policy = %self.policy,
            "Aggregated token holdings"
        );

        holdings
    }
}

/// Net positive holdings keyed by token display name
pub fn token_holdings(events: &[TokenTransferEvent], address: &WalletAddress) -> Vec<TokenHolding> {
    HoldingsAggregator::default().aggregate(events, address)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ME: &str = "0x1111111111111111111111111111111111111111";
    const OTHER: &str = "0x2222222222222222222222222222222222222222";

    fn transfer(from: &str, to: &str, name: &str, value: &str, decimals: &str) -> TokenTransferEvent {
        TokenTransferEvent {
            from: from.to_string(),
            to: to.to_string(),
            contract_address: format!("0x{}", "c".repeat(40)),
            token_name: name.to_string(),
            token_symbol: name.to_uppercase(),
            token_decimal: decimals.to_string(),
            value: value.to_string(),
            time_stamp: "1700000000".to_string(),
            ..Default::default()
        }
    }

    fn human(s: &str) -> HumanAmount {
        s.parse().unwrap()
    }

    #[test]
    fn test_net_balance_received_minus_sent() {
        let me = WalletAddress::parse(ME).unwrap();
        let events = vec![
            transfer(OTHER, ME, "dai", "5000000000000000000", "18"),
            transfer(ME, OTHER, "dai", "1500000000000000000", "18"),
        ];

        let holdings = token_holdings(&events, &me);
        assert_eq!(holdings.len(), 1);
        assert_eq!(holdings[0].name, "dai");
        assert_eq!(holdings[0].symbol, "DAI");
        assert_eq!(holdings[0].balance, human("3.5"));
    }

    #[test]
    fn test_non_positive_balances_are_dropped() {
        let me = WalletAddress::parse(ME).unwrap();
        let events = vec![
            // Sent more than received
            transfer(ME, OTHER, "short", "1000000000000000000", "18"),
            // Fully spent
            transfer(OTHER, ME, "flat", "7", "0"),
            transfer(ME, OTHER, "flat", "7", "0"),
        ];
        assert!(token_holdings(&events, &me).is_empty());
    }

    #[test]
    fn test_single_outgoing_transfer_credits_receiver_only() {
        let events = vec![transfer(ME, OTHER, "tok", "1000000000000000000", "18")];

        let sender = WalletAddress::parse(ME).unwrap();
        assert!(token_holdings(&events, &sender).is_empty());

        let receiver = WalletAddress::parse(OTHER).unwrap();
        let holdings = token_holdings(&events, &receiver);
        assert_eq!(holdings.len(), 1);
        assert_eq!(holdings[0].balance, human("1"));
    }

    #[test]
    fn test_self_transfer_nets_to_zero() {
        let me = WalletAddress::parse(ME).unwrap();
        let events = vec![
            transfer(OTHER, ME, "tok", "10", "0"),
            transfer(ME, ME, "tok", "4", "0"),
        ];
        let holdings = token_holdings(&events, &me);
        assert_eq!(holdings[0].balance, human("10"));
    }

    #[test]
    fn test_direction_ignores_address_case() {
        let events = vec![transfer(
            OTHER,
            "0xABCDEF0000000000000000000000000000000001",
            "tok",
            "3",
            "0",
        )];
        let me = WalletAddress::parse("0xabcdef0000000000000000000000000000000001").unwrap();
        assert_eq!(token_holdings(&events, &me)[0].balance, human("3"));
    }

    #[test]
    fn test_same_name_different_contracts_merge_by_default() {
        let me = WalletAddress::parse(ME).unwrap();
        let mut first = transfer(OTHER, ME, "USDC", "1000000", "6");
        first.contract_address = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".to_string();
        let mut spoof = transfer(OTHER, ME, "USDC", "2000000", "6");
        spoof.contract_address = "0x000000000000000000000000000000000000dead".to_string();

        let events = vec![first.clone(), spoof.clone()];
        let holdings = token_holdings(&events, &me);
        assert_eq!(holdings.len(), 1);
        assert_eq!(holdings[0].balance, human("3"));
        // First-seen identity wins
        assert_eq!(holdings[0].contract_address, first.contract_address);

        let by_contract =
            HoldingsAggregator::new(TokenKeyPolicy::ContractAddress).aggregate(&events, &me);
        assert_eq!(by_contract.len(), 2);
        assert_eq!(by_contract[0].balance, human("1"));
        assert_eq!(by_contract[1].balance, human("2"));
    }

    #[test]
    fn test_unparseable_events_are_skipped() {
        let me = WalletAddress::parse(ME).unwrap();
        let events = vec![
            transfer(OTHER, ME, "tok", "not-a-number", "18"),
            transfer(OTHER, ME, "tok", "5", ""),
            transfer(OTHER, ME, "tok", "5", "0"),
        ];
        let holdings = token_holdings(&events, &me);
        assert_eq!(holdings.len(), 1);
        assert_eq!(holdings[0].balance, human("5"));
    }

    #[test]
    fn test_output_in_first_seen_order() {
        let me = WalletAddress::parse(ME).unwrap();
        let events = vec![
            transfer(OTHER, ME, "zeta", "1", "0"),
            transfer(OTHER, ME, "alpha", "1", "0"),
            transfer(OTHER, ME, "zeta", "1", "0"),
        ];
        let names: Vec<_> = token_holdings(&events, &me)
            .into_iter()
            .map(|h| h.name)
            .collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let holding = TokenHolding {
            name: "Maker".to_string(),
            symbol: "MKR".to_string(),
            balance: human("1.5"),
            contract_address: "0x9f8f72aa9304c8b593d555f12ef6589cc3a579a2".to_string(),
        };
        let json = serde_json::to_value(&holding).unwrap();
        assert_eq!(json["contractAddress"], "0x9f8f72aa9304c8b593d555f12ef6589cc3a579a2");
        assert_eq!(json["balance"], "1.5");
    }
}
