// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Recording transport for tests.
//
// `MockTransport` stores every invocation it receives and answers each command
// from a per-command queue of scripted replies. Unscripted commands resolve to
// `null`.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::error::{BridgeError, NativeError, Result};
use crate::transport::Transport;

/// One recorded call.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub command: String,
    pub args: Value,
}

#[derive(Debug, Clone)]
enum Reply {
    Resolve(Value),
    Reject(Value),
}

#[derive(Debug, Default)]
struct State {
    invocations: Vec<Invocation>,
    replies: HashMap<String, VecDeque<Reply>>,
}

#[derive(Debug, Default)]
pub struct MockTransport {
    state: Mutex<State>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a resolved value for the next call to `command`.
    pub async fn resolve(&self, command: &str, value: Value) {
        self.push(command, Reply::Resolve(value)).await;
    }

    /// Queue a rejection for the next call to `command`.
    pub async fn reject(&self, command: &str, payload: Value) {
        self.push(command, Reply::Reject(payload)).await;
    }

    async fn push(&self, command: &str, reply: Reply) {
        self.state
            .lock()
            .await
            .replies
            .entry(command.to_owned())
            .or_default()
            .push_back(reply);
    }

    /// Every call received so far, oldest first.
    pub async fn invocations(&self) -> Vec<Invocation> {
        self.state.lock().await.invocations.clone()
    }

    /// Command names received so far, oldest first.
    pub async fn commands(&self) -> Vec<String> {
        self.state
            .lock()
            .await
            .invocations
            .iter()
            .map(|i| i.command.clone())
            .collect()
    }

    /// The only call received. Panics if there were zero or several.
    pub async fn single(&self) -> Invocation {
        let mut calls = self.invocations().await;
        assert_eq!(calls.len(), 1, "expected exactly one invocation, got {calls:?}");
        calls.remove(0)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value> {
        let mut state = self.state.lock().await;
        state.invocations.push(Invocation {
            command: command.to_owned(),
            args,
        });
        let reply = state
            .replies
            .get_mut(command)
            .and_then(VecDeque::pop_front);
        match reply {
            Some(Reply::Resolve(value)) => Ok(value),
            Some(Reply::Reject(payload)) => Err(BridgeError::Rejected(NativeError(payload))),
            None => Ok(Value::Null),
        }
    }

    fn platform_name(&self) -> &str {
        "Mock"
    }
}

/// Install a test subscriber honouring `RUST_LOG`. Safe to call repeatedly.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn replies_are_consumed_in_order() {
        init_test_tracing();
        let mock = MockTransport::new();
        mock.resolve("plugin:x|a", json!(1)).await;
        mock.reject("plugin:x|a", json!("nope")).await;

        assert_eq!(mock.invoke("plugin:x|a", json!({})).await.unwrap(), json!(1));
        assert!(mock.invoke("plugin:x|a", json!({})).await.is_err());
        assert_eq!(mock.invoke("plugin:x|a", json!({})).await.unwrap(), Value::Null);
        assert_eq!(mock.invocations().await.len(), 3);
    }
}
