// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Per-plugin command client.
//
// Each call is one round trip: build the full command name, hand the argument
// object to the transport, decode the resolved value. No retries, caching or
// cancellation happen here.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace, warn};
use uuid::Uuid;

use crate::args::Args;
use crate::command::{Namespace, command_name};
use crate::config::BridgeConfig;
use crate::error::{BridgeError, Result};
use crate::transport::Transport;

/// Stateless handle that addresses one plugin namespace over a transport.
#[derive(Clone)]
pub struct PluginClient {
    namespace: String,
    transport: Arc<dyn Transport>,
    trace_payloads: bool,
}

impl PluginClient {
    pub fn new(namespace: Namespace, transport: Arc<dyn Transport>) -> Self {
        Self::with_config(namespace, transport, &BridgeConfig::default())
    }

    pub fn with_config(
        namespace: Namespace,
        transport: Arc<dyn Transport>,
        config: &BridgeConfig,
    ) -> Self {
        Self {
            namespace: config.resolve_namespace(namespace),
            transport,
            trace_payloads: config.trace_payloads,
        }
    }

    /// Namespace this client addresses, after configuration overrides.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Full wire name for `command`.
    pub fn command_name(&self, command: &str) -> String {
        command_name(&self.namespace, command)
    }

    /// Invoke `command` and decode the resolved value as `R`.
    #[instrument(skip(self, command, args), fields(command = %self.command_name(command), call = %Uuid::new_v4()))]
    pub async fn invoke<R: DeserializeOwned>(&self, command: &str, args: Args) -> Result<R> {
        let value = self.dispatch(command, args).await?;
        serde_json::from_value(value).map_err(|source| BridgeError::Decode {
            command: self.command_name(command),
            source,
        })
    }

    /// Invoke a command whose result carries no data.
    #[instrument(skip(self, command, args), fields(command = %self.command_name(command), call = %Uuid::new_v4()))]
    pub async fn send(&self, command: &str, args: Args) -> Result<()> {
        self.dispatch(command, args).await.map(drop)
    }

    async fn dispatch(&self, command: &str, args: Args) -> Result<serde_json::Value> {
        let name = self.command_name(command);
        let payload = args.into_value();
        if self.trace_payloads {
            trace!(args = %payload, "argument payload");
        }

        debug!("dispatching native command");
        match self.transport.invoke(&name, payload).await {
            Ok(value) => {
                debug!("native command resolved");
                Ok(value)
            }
            Err(BridgeError::Rejected(native)) => {
                warn!(error = %native, "native command rejected");
                Err(BridgeError::Rejected(native))
            }
            Err(e) => Err(e),
        }
    }
}

impl std::fmt::Debug for PluginClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginClient")
            .field("namespace", &self.namespace)
            .field("platform", &self.transport.platform_name())
            .finish()
    }
}
