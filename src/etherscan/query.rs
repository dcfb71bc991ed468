// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! History window parameters for list queries

use serde::{Deserialize, Serialize};

use crate::config::constants::{DEFAULT_END_BLOCK, DEFAULT_START_BLOCK};

/// Ordering of list results by block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first
    #[default]
    Asc,
    /// Newest first
    Desc,
}

impl SortOrder {
    /// Query-string value
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Block range and ordering applied to `txlist` and `tokentx`
///
/// The overview reads the first and last entries of the native list as the
/// first and last activity, which only holds with [`SortOrder::Asc`].
///
/// # Examples
///
/// ```
/// use walletscan::etherscan::{SortOrder, TransactionQuery};
///
/// let query = TransactionQuery::default();
/// assert_eq!(query.start_block, 0);
/// assert_eq!(query.end_block, 99_999_999);
/// assert_eq!(query.sort, SortOrder::Asc);
///
/// let recent = TransactionQuery::default().with_start_block(18_000_000);
/// assert_eq!(recent.start_block, 18_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    /// First block (inclusive)
    pub start_block: u64,
    /// Last block (inclusive)
    pub end_block: u64,
    /// Result ordering
    pub sort: SortOrder,
}

impl Default for TransactionQuery {
    fn default() -> Self {
        Self {
            start_block: DEFAULT_START_BLOCK,
            end_block: DEFAULT_END_BLOCK,
            sort: SortOrder::Asc,
        }
    }
}

impl TransactionQuery {
    /// Set the first block
    pub fn with_start_block(mut self, start_block: u64) -> Self {
        self.start_block = start_block;
        self
    }

    /// Set the last block
    pub fn with_end_block(mut self, end_block: u64) -> Self {
        self.end_block = end_block;
        self
    }

    /// Set the ordering
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Query-string pairs for this window
    pub(crate) fn params(&self) -> [(&'static str, String); 3] {
        [
            ("startblock", self.start_block.to_string()),
            ("endblock", self.end_block.to_string()),
            ("sort", self.sort.as_str().to_string()),
        ]
    }
}
