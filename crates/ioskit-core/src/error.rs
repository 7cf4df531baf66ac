// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for ioskit.
//
// The binding layer has no failure taxonomy of its own. A native rejection is
// carried through as-is inside `BridgeError::Rejected`; everything else here
// describes a failure of the binding machinery itself.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Top-level error type for all ioskit operations.
#[derive(Debug, Error)]
pub enum BridgeError {
    // -- Native side --
    #[error("native command rejected: {0}")]
    Rejected(NativeError),

    #[error("feature not available on this platform")]
    PlatformUnavailable,

    // -- Transport / marshaling --
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected result from {command}: {source}")]
    Decode {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Events --
    #[error("event channel closed")]
    EventChannelClosed,

    // -- Configuration --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BridgeError {
    /// The native rejection payload, if this error came from the handler.
    pub fn native(&self) -> Option<&NativeError> {
        match self {
            Self::Rejected(native) => Some(native),
            _ => None,
        }
    }
}

impl From<NativeError> for BridgeError {
    fn from(err: NativeError) -> Self {
        Self::Rejected(err)
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Whatever the native handler attached to a rejection.
///
/// Handlers reject with a bare message string, a `{ "message": .. }` /
/// `{ "error": .. }` object, or a `{ "code", "message", "details" }` record.
/// The payload is kept verbatim; the accessors only read from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NativeError(pub Value);

impl NativeError {
    pub fn new(payload: impl Into<Value>) -> Self {
        Self(payload.into())
    }

    /// The raw payload.
    pub fn payload(&self) -> &Value {
        &self.0
    }

    pub fn into_payload(self) -> Value {
        self.0
    }

    /// Human-readable message, if the payload has an obvious one.
    pub fn message(&self) -> Option<&str> {
        match &self.0 {
            Value::String(s) => Some(s),
            Value::Object(map) => map
                .get("message")
                .or_else(|| map.get("error"))
                .and_then(Value::as_str),
            _ => None,
        }
    }

    /// Machine-readable code, when the handler supplied one.
    pub fn code(&self) -> Option<&str> {
        self.0.get("code").and_then(Value::as_str)
    }
}

impl fmt::Display for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(msg) => f.write_str(msg),
            None => write!(f, "{}", self.0),
        }
    }
}
