// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub transport for desktop/CI builds where no native handler exists.
//
// Every command fails with `PlatformUnavailable`; real transports are supplied
// by the host shell on device.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{BridgeError, Result};
use crate::transport::Transport;

/// No-op transport used on non-mobile platforms.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableTransport;

#[async_trait]
impl Transport for UnavailableTransport {
    async fn invoke(&self, command: &str, _args: Value) -> Result<Value> {
        tracing::warn!(command, "native command called on stub transport");
        Err(BridgeError::PlatformUnavailable)
    }

    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }
}
