//! Error types for the Asaas client.
//!
//! # Design
//! The API reports failures as an envelope of `{code, description}` entries.
//! `ApiError` keeps that list for both remote rejections (`Http`) and
//! failures that never reached the server (`Network`), so callers can branch
//! on `status_code()` and `has_code()` without matching on variants. Transport
//! failures use status `0`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error code attached to failures that never produced an HTTP response.
pub const NETWORK_ERROR: &str = "NETWORK_ERROR";

/// A single `{code, description}` entry of the error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub code: String,
    pub description: String,
}

impl ErrorEntry {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}

/// Wire format of an error response: `{"errors": [{"code", "description"}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub errors: Vec<ErrorEntry>,
}

/// Errors returned by every `AsaasClient` operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, refused
    /// connection, dropped socket).
    #[error("network error: {}", first_description(.errors))]
    Network { errors: Vec<ErrorEntry> },

    /// The server answered with a non-2xx status.
    #[error("Asaas API error: {status} {status_text}")]
    Http {
        status: u16,
        status_text: String,
        errors: Vec<ErrorEntry>,
    },

    /// The request body could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// A 2xx body did not match the type the operation declares.
    #[error("deserialization failed (HTTP {status}): {message}")]
    Deserialization { status: u16, message: String },
}

fn first_description(errors: &[ErrorEntry]) -> &str {
    errors.first().map(|e| e.description.as_str()).unwrap_or("unknown error")
}

impl ApiError {
    /// Transport failure with the single synthesized `NETWORK_ERROR` entry.
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network {
            errors: vec![ErrorEntry::new(NETWORK_ERROR, message)],
        }
    }

    /// HTTP status of the failed call. `0` when no response was received or
    /// the failure happened before the request was sent.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Network { .. } | ApiError::Serialization(_) => 0,
            ApiError::Http { status, .. } | ApiError::Deserialization { status, .. } => *status,
        }
    }

    /// The error entries reported by the server, or the synthesized ones.
    /// Empty for local encode/decode failures.
    pub fn errors(&self) -> &[ErrorEntry] {
        match self {
            ApiError::Network { errors } | ApiError::Http { errors, .. } => errors,
            ApiError::Serialization(_) | ApiError::Deserialization { .. } => &[],
        }
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.errors().iter().any(|e| e.code == code)
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network { .. })
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == 404
    }
}

/// Errors raised while reading client configuration from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid environment {0:?}, expected \"sandbox\" or \"production\"")]
    InvalidEnvironment(String),
}
