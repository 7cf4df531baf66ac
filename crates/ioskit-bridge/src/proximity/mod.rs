// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Proximity: the front-facing proximity sensor and display auto-lock.

pub mod models;

use std::sync::Arc;

use ioskit_core::{Args, BridgeConfig, Namespace, PluginClient, Result, Transport};

use crate::manifest::{PackageManifest, SwiftTools};

pub use models::*;

pub const NAMESPACE: Namespace = Namespace::versioned("ios-proximity", 2);

pub const COMMANDS: &[&str] = &[
    "start_proximity_monitoring",
    "stop_proximity_monitoring",
    "get_proximity_state",
    "is_proximity_available",
    "enable_proximity_monitoring",
    "disable_proximity_monitoring",
    "set_display_auto_lock",
    "get_display_auto_lock_state",
];

pub const MANIFEST: PackageManifest = PackageManifest {
    package: "tauri-plugin-ios-proximity",
    min_ios: 13,
    swift_tools: SwiftTools::V5_3,
    namespace: NAMESPACE,
    commands: COMMANDS,
};

#[derive(Debug, Clone)]
pub struct Proximity {
    client: PluginClient,
}

impl Proximity {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, &BridgeConfig::default())
    }

    pub fn with_config(transport: Arc<dyn Transport>, config: &BridgeConfig) -> Self {
        Self {
            client: PluginClient::with_config(NAMESPACE, transport, config),
        }
    }

    pub async fn start_proximity_monitoring(&self) -> Result<()> {
        self.client
            .send("start_proximity_monitoring", Args::new())
            .await
    }

    pub async fn stop_proximity_monitoring(&self) -> Result<()> {
        self.client
            .send("stop_proximity_monitoring", Args::new())
            .await
    }

    pub async fn get_proximity_state(&self) -> Result<ProximityState> {
        self.client.invoke("get_proximity_state", Args::new()).await
    }

    pub async fn is_proximity_available(&self) -> Result<bool> {
        self.client
            .invoke("is_proximity_available", Args::new())
            .await
    }

    pub async fn enable_proximity_monitoring(&self) -> Result<()> {
        self.client
            .send("enable_proximity_monitoring", Args::new())
            .await
    }

    pub async fn disable_proximity_monitoring(&self) -> Result<()> {
        self.client
            .send("disable_proximity_monitoring", Args::new())
            .await
    }

    pub async fn set_display_auto_lock(&self, enabled: bool) -> Result<()> {
        let args = Args::new().with("enabled", &enabled)?;
        self.client.send("set_display_auto_lock", args).await
    }

    pub async fn get_display_auto_lock_state(&self) -> Result<DisplayAutoLockState> {
        self.client
            .invoke("get_display_auto_lock_state", Args::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ioskit_core::mock::MockTransport;
    use ioskit_core::{decode_event, event_channel};
    use serde_json::json;

    use crate::testing::assert_wire_table;

    fn setup() -> (Arc<MockTransport>, Proximity) {
        let mock = Arc::new(MockTransport::new());
        (mock.clone(), Proximity::new(mock))
    }

    #[tokio::test]
    async fn state_query() {
        let (mock, proximity) = setup();
        mock.resolve(
            "plugin:ios-proximity-v2|get_proximity_state",
            json!({ "isClose": true, "timestamp": "2024-08-08T08:08:08Z" }),
        )
        .await;

        let state = proximity.get_proximity_state().await.unwrap();

        assert!(state.is_close);
        assert_eq!(mock.single().await.args, json!({}));
    }

    #[tokio::test]
    async fn auto_lock_toggle() {
        let (mock, proximity) = setup();

        proximity.set_display_auto_lock(false).await.unwrap();

        let call = mock.single().await;
        assert_eq!(call.command, "plugin:ios-proximity-v2|set_display_auto_lock");
        assert_eq!(call.args, json!({ "enabled": false }));
    }

    #[test]
    fn event_without_top_level_timestamp() {
        let event: ProximityEvent = decode_event(json!({
            "eventType": "proximityDetected",
            "state": { "isClose": true, "timestamp": "2024-08-08T08:08:08Z" }
        }))
        .unwrap();

        assert_eq!(event.event_type, ProximityEventType::ProximityDetected);
        assert!(event.state.is_close);
        assert_eq!(event.timestamp, None);
    }

    #[tokio::test]
    async fn events_flow_through_channel() {
        let (tx, mut rx) = event_channel::<ProximityEvent>();

        tx.push(json!({
            "eventType": "monitoringStarted",
            "state": { "isClose": false, "timestamp": "2024-08-08T08:00:00Z" }
        }))
        .unwrap();
        tx.push(json!({
            "eventType": "proximityCleared",
            "state": { "isClose": false, "timestamp": "2024-08-08T08:00:05Z" }
        }))
        .unwrap();

        let first = rx.next().await.unwrap().unwrap();
        let second = rx.next().await.unwrap().unwrap();
        assert_eq!(first.event_type, ProximityEventType::MonitoringStarted);
        assert_eq!(second.event_type, ProximityEventType::ProximityCleared);
    }

    #[tokio::test]
    async fn every_command_reaches_the_wire() {
        let (mock, proximity) = setup();

        let _ = proximity.start_proximity_monitoring().await;
        let _ = proximity.stop_proximity_monitoring().await;
        let _ = proximity.get_proximity_state().await;
        let _ = proximity.is_proximity_available().await;
        let _ = proximity.enable_proximity_monitoring().await;
        let _ = proximity.disable_proximity_monitoring().await;
        let _ = proximity.set_display_auto_lock(false).await;
        let _ = proximity.get_display_auto_lock_state().await;

        assert_wire_table(
            &mock,
            &MANIFEST,
            &[
                ("start_proximity_monitoring", json!({})),
                ("stop_proximity_monitoring", json!({})),
                ("get_proximity_state", json!({})),
                ("is_proximity_available", json!({})),
                ("enable_proximity_monitoring", json!({})),
                ("disable_proximity_monitoring", json!({})),
                ("set_display_auto_lock", json!({ "enabled": false })),
                ("get_display_auto_lock_state", json!({})),
            ],
        )
        .await;
    }
}
