// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The invoke-by-name seam between plugin clients and the host shell.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Delivers one named command to the native handler and awaits its outcome.
///
/// Implementations are provided by the host application. A rejection by the
/// native handler must come back as `BridgeError::Rejected` with the handler's
/// payload untouched; delivery failures use `BridgeError::Transport`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Invoke `command` (a full `plugin:<ns>|<cmd>` name) with an argument
    /// object and return the resolved value.
    async fn invoke(&self, command: &str, args: Value) -> Result<Value>;

    /// Human-readable platform name (e.g. "iOS 17", "Desktop (stub)").
    fn platform_name(&self) -> &str;
}
