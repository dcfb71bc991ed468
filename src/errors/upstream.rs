// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the upstream blockchain-data API.
//!
//! Any of these discards the whole lookup: there is no partial-result path.

use super::AmountError;

/// Errors that can occur while querying the upstream REST API.
///
/// # Examples
///
/// ```rust
/// use walletscan::UpstreamError;
///
/// let error = UpstreamError::rejected("NOTOK", "Max rate limit reached");
/// println!("Error: {}", error);
/// ```
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("Request failed during {operation}")]
    RequestFailed {
        /// Which query was in flight (e.g. "tokentx")
        operation: String,
        /// The underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The HTTP client gave up waiting for a response.
    #[error("Request timed out during {operation}")]
    TimedOut {
        /// Which query was in flight
        operation: String,
    },

    /// The upstream answered with a non-success HTTP status.
    #[error("HTTP {status} during {operation}")]
    HttpStatus {
        /// Which query was in flight
        operation: String,
        /// The HTTP status code
        status: u16,
    },

    /// The upstream answered `status = "0"` for a reason other than "no activity".
    #[error("Upstream rejected request: {message} ({detail})")]
    Rejected {
        /// The envelope `message` field (usually `NOTOK`)
        message: String,
        /// The envelope `result` field rendered as text
        detail: String,
    },

    /// The response body did not have the expected shape.
    #[error("Malformed response during {operation}: {details}")]
    MalformedResponse {
        /// Which query was in flight
        operation: String,
        /// What was wrong with the body
        details: String,
    },

    /// A numeric field of the response could not be parsed.
    #[error("Unparseable value in response: {0}")]
    InvalidValue(#[from] AmountError),
}

impl UpstreamError {
    /// Helper to create a `RequestFailed` error from any error type.
    pub fn request_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        UpstreamError::RequestFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `TimedOut` error.
    pub fn timed_out(operation: impl Into<String>) -> Self {
        UpstreamError::TimedOut {
            operation: operation.into(),
        }
    }

    /// Whether the request was abandoned because of a client-side deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, UpstreamError::TimedOut { .. })
    }

    /// Helper to create an `HttpStatus` error.
    pub fn http_status(operation: impl Into<String>, status: u16) -> Self {
        UpstreamError::HttpStatus {
            operation: operation.into(),
            status,
        }
    }

    /// Helper to create a `Rejected` error from the envelope fields.
    pub fn rejected(message: impl Into<String>, detail: impl Into<String>) -> Self {
        UpstreamError::Rejected {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// Helper to create a `MalformedResponse` error.
    pub fn malformed(operation: impl Into<String>, details: impl Into<String>) -> Self {
        UpstreamError::MalformedResponse {
            operation: operation.into(),
            details: details.into(),
        }
    }
}
