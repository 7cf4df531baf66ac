// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Push-style event payloads.
//
// Streaming plugins emit records shaped `{ eventType, data, timestamp }`. Each
// plugin declares a payload enum tagged by `eventType` with its data under
// `data`, so a consumer matches on the variant instead of inspecting an
// untyped blob. Subscription lifecycle stays native-side; this module only
// decodes and hands events over.

use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::mpsc;

use crate::error::{BridgeError, Result};

/// An event payload and the time the native side emitted it.
///
/// `P` is a plugin's adjacently tagged payload enum
/// (`#[serde(tag = "eventType", content = "data")]`). Some handlers trigger
/// events without a timestamp, so it is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event<P> {
    #[serde(flatten)]
    pub payload: P,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Decode one raw event record.
pub fn decode_event<E: DeserializeOwned>(raw: Value) -> Result<E> {
    Ok(serde_json::from_value(raw)?)
}

/// Sending half held by whatever receives raw events from the host shell.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<Value>,
}

impl EventSender {
    /// Forward a raw event record to the stream.
    pub fn push(&self, raw: Value) -> Result<()> {
        self.tx.send(raw).map_err(|_| BridgeError::EventChannelClosed)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Receiving half; yields typed events in arrival order.
#[derive(Debug)]
pub struct EventStream<E> {
    rx: mpsc::UnboundedReceiver<Value>,
    _event: PhantomData<fn() -> E>,
}

impl<E: DeserializeOwned> EventStream<E> {
    /// Next event, or `None` once every sender is dropped.
    ///
    /// A record that fails to decode is returned as an error; the stream
    /// stays usable.
    pub async fn next(&mut self) -> Option<Result<E>> {
        let raw = self.rx.recv().await?;
        let decoded = decode_event(raw);
        if let Err(e) = &decoded {
            tracing::warn!(error = %e, "malformed event record");
        }
        Some(decoded)
    }

    pub fn close(&mut self) {
        self.rx.close();
    }
}

/// Create a connected sender/stream pair for events of type `E`.
pub fn event_channel<E>() -> (EventSender, EventStream<E>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        EventSender { tx },
        EventStream {
            rx,
            _event: PhantomData,
        },
    )
}
