// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token identity key selection

use serde::{Deserialize, Serialize};

use crate::events::TokenTransferEvent;

/// Chooses which field identifies a token during aggregation
///
/// The upstream API reports both a display name and a contract address per
/// event. Keying by name merges distinct contracts that share a name (e.g. a
/// spoofed "USDC"); keying by contract keeps them apart. Both aggregators
/// receive the policy and otherwise run unchanged.
///
/// # Examples
///
/// ```
/// use walletscan::aggregate::TokenKeyPolicy;
/// use walletscan::TokenTransferEvent;
///
/// let event = TokenTransferEvent {
///     token_name: "Tether USD".to_string(),
///     contract_address: "0xdAC17F958D2ee523a2206206994597C13D831ec7".to_string(),
///     ..Default::default()
/// };
///
/// assert_eq!(TokenKeyPolicy::DisplayName.key_for(&event), "Tether USD");
/// assert_eq!(
///     TokenKeyPolicy::ContractAddress.key_for(&event),
///     "0xdac17f958d2ee523a2206206994597c13d831ec7"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKeyPolicy {
    /// Key by `tokenName` (upstream behavior; same-name contracts merge)
    #[default]
    DisplayName,
    /// Key by lower-cased `contractAddress`
    ContractAddress,
}

impl TokenKeyPolicy {
    /// The aggregation key for `event` under this policy
    pub fn key_for(&self, event: &TokenTransferEvent) -> String {
        match self {
            TokenKeyPolicy::DisplayName => event.token_name.clone(),
            TokenKeyPolicy::ContractAddress => event.contract_address.to_ascii_lowercase(),
        }
    }
}

impl std::fmt::Display for TokenKeyPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKeyPolicy::DisplayName => f.write_str("display-name"),
            TokenKeyPolicy::ContractAddress => f.write_str("contract-address"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys_by_name() {
        assert_eq!(TokenKeyPolicy::default(), TokenKeyPolicy::DisplayName);
    }

    #[test]
    fn test_contract_key_ignores_case() {
        let upper = TokenTransferEvent {
            contract_address: "0xABCDEF0000000000000000000000000000000000".to_string(),
            ..Default::default()
        };
        let lower = TokenTransferEvent {
            contract_address: "0xabcdef0000000000000000000000000000000000".to_string(),
            ..Default::default()
        };
        let policy = TokenKeyPolicy::ContractAddress;
        assert_eq!(policy.key_for(&upper), policy.key_for(&lower));
    }
}
