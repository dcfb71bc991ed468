// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Insertion-ordered set of counterparty addresses

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Represents the unique counterparties seen for one token and direction
///
/// Keeps first-occurrence order and rejects exact duplicates. Membership is
/// decided on the **raw** upstream string: `0xAbC…` and `0xabc…` are two
/// entries. Direction detection elsewhere is case-insensitive; this set
/// deliberately is not, so the displayed addresses are exactly what upstream
/// reported.
///
/// # Examples
///
/// ```
/// use walletscan::aggregate::CounterpartySet;
///
/// let mut set = CounterpartySet::new();
/// assert!(set.insert("0xbbb"));
/// assert!(set.insert("0xaaa"));
/// assert!(!set.insert("0xbbb"));
/// assert!(set.insert("0xBBB"));
///
/// assert_eq!(set.as_slice(), ["0xbbb", "0xaaa", "0xBBB"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CounterpartySet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl CounterpartySet {
    /// Create a new empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an address
    ///
    /// Returns `true` if the address was newly inserted, `false` if it was already present.
    pub fn insert(&mut self, address: &str) -> bool {
        if self.seen.contains(address) {
            return false;
        }
        self.seen.insert(address.to_string());
        self.ordered.push(address.to_string());
        true
    }

    /// Check if an address (exact text) is in the set
    pub fn contains(&self, address: &str) -> bool {
        self.seen.contains(address)
    }

    /// Number of unique addresses
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Iterate in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// Addresses in first-occurrence order
    pub fn as_slice(&self) -> &[String] {
        &self.ordered
    }
}

impl From<Vec<String>> for CounterpartySet {
    fn from(addresses: Vec<String>) -> Self {
        let mut set = Self::new();
        for address in &addresses {
            set.insert(address);
        }
        set
    }
}

impl From<CounterpartySet> for Vec<String> {
    fn from(set: CounterpartySet) -> Self {
        set.ordered
    }
}

impl<'a> FromIterator<&'a str> for CounterpartySet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut set = Self::new();
        for address in iter {
            set.insert(address);
        }
        set
    }
}
