// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Permission state shared by every plugin's check/request commands.

use serde::{Deserialize, Serialize};

/// Authorization state for one capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    Granted,
    Denied,
    /// Not yet asked; a request will show the system prompt.
    Prompt,
}

impl PermissionState {
    pub fn is_granted(self) -> bool {
        self == Self::Granted
    }

    pub fn is_denied(self) -> bool {
        self == Self::Denied
    }

    pub fn needs_request(self) -> bool {
        self == Self::Prompt
    }
}
