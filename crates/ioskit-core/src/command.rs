// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command naming.
//
// Native handlers are matched by string name, so the full command name is the
// wire contract: `plugin:<namespace>|<command>`, where the namespace is the
// plugin id plus an optional `-v<N>` contract suffix.

use std::fmt;

/// Prefix every plugin command is addressed under.
pub const COMMAND_PREFIX: &str = "plugin";

/// A plugin id and the contract generation its commands belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Namespace {
    plugin: &'static str,
    version: Option<u32>,
}

impl Namespace {
    /// A namespace without a version suffix (first contract generation).
    pub const fn new(plugin: &'static str) -> Self {
        Self {
            plugin,
            version: None,
        }
    }

    /// A namespace pinned to contract generation `version` (`ios-keychain-v2`).
    pub const fn versioned(plugin: &'static str, version: u32) -> Self {
        Self {
            plugin,
            version: Some(version),
        }
    }

    /// Plugin id without the version suffix.
    pub const fn plugin(&self) -> &'static str {
        self.plugin
    }

    pub const fn version(&self) -> Option<u32> {
        self.version
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version {
            Some(v) => write!(f, "{}-v{v}", self.plugin),
            None => f.write_str(self.plugin),
        }
    }
}

/// Full wire name for `command` inside `namespace`.
pub fn command_name(namespace: &str, command: &str) -> String {
    format!("{COMMAND_PREFIX}:{namespace}|{command}")
}
