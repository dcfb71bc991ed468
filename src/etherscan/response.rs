// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Upstream response envelope
//!
//! Every account endpoint answers `{"status": "1"|"0", "message": ..., "result": ...}`.
//! `status = "0"` covers both "this address has no activity" and real
//! failures (bad key, rate limit), so the two are told apart here.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::config::constants::NO_TRANSACTIONS_MESSAGE;
use crate::errors::UpstreamError;

const STATUS_OK: &str = "1";

/// Raw envelope as returned by the upstream API
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub result: Value,
}

impl Envelope {
    fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// `status = "0"` that only means the list is empty
    fn is_no_activity(&self) -> bool {
        self.message.starts_with(NO_TRANSACTIONS_MESSAGE)
            || self.result.as_array().is_some_and(Vec::is_empty)
    }

    fn rejection(&self) -> UpstreamError {
        let detail = match &self.result {
            Value::String(text) => text.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        };
        UpstreamError::rejected(self.message.clone(), detail)
    }

    /// Decode a list result; "no activity" becomes an empty list
    pub fn into_list<T: DeserializeOwned>(self, operation: &str) -> Result<Vec<T>, UpstreamError> {
        if !self.is_ok() {
            return if self.is_no_activity() {
                Ok(Vec::new())
            } else {
                Err(self.rejection())
            };
        }

        serde_json::from_value(self.result)
            .map_err(|e| UpstreamError::malformed(operation, e.to_string()))
    }

    /// Decode a scalar string result such as a balance
    pub fn into_scalar(self, operation: &str) -> Result<String, UpstreamError> {
        if !self.is_ok() {
            return Err(self.rejection());
        }

        match self.result {
            Value::String(text) => Ok(text),
            other => Err(UpstreamError::malformed(
                operation,
                format!("expected a string result, got {other}"),
            )),
        }
    }
}
