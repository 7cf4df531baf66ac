// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ioskit: Transport seam, command marshaling and shared types used by every
// plugin client.

pub mod args;
pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod iso8601;
pub mod permission;
pub mod stub;
pub mod transport;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use args::Args;
pub use client::PluginClient;
pub use command::{Namespace, command_name};
pub use config::BridgeConfig;
pub use error::{BridgeError, NativeError, Result};
pub use event::{Event, EventSender, EventStream, decode_event, event_channel};
pub use permission::PermissionState;
pub use stub::UnavailableTransport;
pub use transport::Transport;
