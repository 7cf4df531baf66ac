// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge configuration.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::command::Namespace;
use crate::error::{BridgeError, Result};

/// Settings shared by every plugin client built from one bridge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct BridgeConfig {
    /// Plugin id → namespace to address instead of the compiled-in one.
    /// Used to route a plugin to another contract generation while native
    /// handlers migrate (e.g. `"ios-camera" → "ios-camera-v2"`).
    pub namespace_overrides: BTreeMap<String, String>,
    /// Log argument payloads at TRACE level.
    pub trace_payloads: bool,
}

impl BridgeConfig {
    /// Parse a JSON configuration document.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| BridgeError::Config(e.to_string()))
    }

    /// Load a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&text)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            overrides = config.namespace_overrides.len(),
            "bridge configuration loaded"
        );
        Ok(config)
    }

    /// Namespace to address for `namespace`, after overrides.
    pub fn resolve_namespace(&self, namespace: Namespace) -> String {
        self.namespace_overrides
            .get(namespace.plugin())
            .cloned()
            .unwrap_or_else(|| namespace.to_string())
    }
}
