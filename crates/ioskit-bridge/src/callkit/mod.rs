// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// CallKit: system call UI for VoIP apps: reporting calls, call actions,
// audio session/route control and PushKit registration.

pub mod models;

use std::sync::Arc;

use ioskit_core::{Args, BridgeConfig, Namespace, PluginClient, Result, Transport};

use crate::manifest::{PackageManifest, SwiftTools};

pub use models::*;

pub const NAMESPACE: Namespace = Namespace::versioned("ios-callkit", 2);

pub const COMMANDS: &[&str] = &[
    "configure_audio_session",
    "report_incoming_call",
    "report_outgoing_call",
    "end_call",
    "set_held",
    "set_muted",
    "set_group",
    "set_on_hold",
    "start_call_audio",
    "answer_call",
    "report_call_update",
    "get_active_calls",
    "get_call_state",
    "request_transaction",
    "report_audio_route_change",
    "set_provider_configuration",
    "register_for_voip_notifications",
    "invalidate_push_token",
    "report_new_incoming_voip_push",
    "check_call_capability",
    "get_audio_routes",
    "set_audio_route",
];

pub const MANIFEST: PackageManifest = PackageManifest {
    package: "tauri-plugin-ios-callkit",
    min_ios: 13,
    swift_tools: SwiftTools::V5_7,
    namespace: NAMESPACE,
    commands: COMMANDS,
};

#[derive(Debug, Clone)]
pub struct CallKit {
    client: PluginClient,
}

impl CallKit {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, &BridgeConfig::default())
    }

    pub fn with_config(transport: Arc<dyn Transport>, config: &BridgeConfig) -> Self {
        Self {
            client: PluginClient::with_config(NAMESPACE, transport, config),
        }
    }

    pub async fn configure_audio_session(&self, config: &AudioSessionConfiguration) -> Result<()> {
        let args = Args::new().with("config", config)?;
        self.client.send("configure_audio_session", args).await
    }

    pub async fn set_provider_configuration(&self, config: &ProviderConfiguration) -> Result<()> {
        let args = Args::new().with("config", config)?;
        self.client.send("set_provider_configuration", args).await
    }

    pub async fn report_incoming_call(&self, info: &IncomingCallInfo) -> Result<()> {
        let args = Args::new().with("info", info)?;
        self.client.send("report_incoming_call", args).await
    }

    pub async fn report_outgoing_call(&self, info: &OutgoingCallInfo) -> Result<()> {
        let args = Args::new().with("info", info)?;
        self.client.send("report_outgoing_call", args).await
    }

    pub async fn end_call(&self, uuid: &str, reason: Option<CallFailureReason>) -> Result<()> {
        let args = Args::new()
            .with("uuid", uuid)?
            .maybe("reason", reason.as_ref())?;
        self.client.send("end_call", args).await
    }

    pub async fn set_held(&self, uuid: &str, on_hold: bool) -> Result<()> {
        let args = Args::new().with("uuid", uuid)?.with("onHold", &on_hold)?;
        self.client.send("set_held", args).await
    }

    pub async fn set_muted(&self, uuid: &str, muted: bool) -> Result<()> {
        let args = Args::new().with("uuid", uuid)?.with("muted", &muted)?;
        self.client.send("set_muted", args).await
    }

    /// Merge into `group_uuid`, or ungroup when `None`.
    pub async fn set_group(&self, uuid: &str, group_uuid: Option<&str>) -> Result<()> {
        let args = Args::new()
            .with("uuid", uuid)?
            .maybe("groupUuid", group_uuid)?;
        self.client.send("set_group", args).await
    }

    pub async fn set_on_hold(&self, uuid: &str, on_hold: bool) -> Result<()> {
        let args = Args::new().with("uuid", uuid)?.with("onHold", &on_hold)?;
        self.client.send("set_on_hold", args).await
    }

    pub async fn start_call_audio(&self, uuid: &str) -> Result<()> {
        let args = Args::new().with("uuid", uuid)?;
        self.client.send("start_call_audio", args).await
    }

    pub async fn answer_call(&self, uuid: &str) -> Result<()> {
        let args = Args::new().with("uuid", uuid)?;
        self.client.send("answer_call", args).await
    }

    pub async fn report_call_update(&self, uuid: &str, update: &CallUpdate) -> Result<()> {
        let args = Args::new().with("uuid", uuid)?.with("update", update)?;
        self.client.send("report_call_update", args).await
    }

    pub async fn get_active_calls(&self) -> Result<Vec<Call>> {
        self.client.invoke("get_active_calls", Args::new()).await
    }

    pub async fn get_call_state(&self, uuid: &str) -> Result<CallState> {
        let args = Args::new().with("uuid", uuid)?;
        self.client.invoke("get_call_state", args).await
    }

    pub async fn request_transaction(&self, transaction: &Transaction) -> Result<()> {
        let args = Args::new().with("transaction", transaction)?;
        self.client.send("request_transaction", args).await
    }

    pub async fn report_audio_route_change(&self, route: &AudioRoute) -> Result<()> {
        let args = Args::new().with("route", route)?;
        self.client.send("report_audio_route_change", args).await
    }

    /// Returns the hex-encoded PushKit token.
    pub async fn register_for_voip_notifications(&self) -> Result<String> {
        self.client
            .invoke("register_for_voip_notifications", Args::new())
            .await
    }

    pub async fn invalidate_push_token(&self) -> Result<()> {
        self.client.send("invalidate_push_token", Args::new()).await
    }

    pub async fn report_new_incoming_voip_push(&self, payload: &VoipPushPayload) -> Result<()> {
        let args = Args::new().with("payload", payload)?;
        self.client.send("report_new_incoming_voip_push", args).await
    }

    pub async fn check_call_capability(&self) -> Result<CallCapability> {
        self.client.invoke("check_call_capability", Args::new()).await
    }

    pub async fn get_audio_routes(&self) -> Result<Vec<AudioRoute>> {
        self.client.invoke("get_audio_routes", Args::new()).await
    }

    pub async fn set_audio_route(&self, route_type: AudioRouteType) -> Result<()> {
        let args = Args::new().with("routeType", &route_type)?;
        self.client.send("set_audio_route", args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ioskit_core::decode_event;
    use ioskit_core::mock::MockTransport;
    use serde_json::json;

    use crate::testing::assert_wire_table;

    fn setup() -> (Arc<MockTransport>, CallKit) {
        let mock = Arc::new(MockTransport::new());
        (mock.clone(), CallKit::new(mock))
    }

    #[tokio::test]
    async fn report_incoming_call_wraps_info() {
        let (mock, callkit) = setup();
        let info = IncomingCallInfo {
            uuid: "C-1".into(),
            handle: CallHandle::phone_number("+441234567890"),
            has_video: Some(false),
            caller_name: Some("Ada".into()),
            supports_dtmf: None,
            supports_holding: None,
            supports_grouping: None,
            supports_ungrouping: None,
        };

        callkit.report_incoming_call(&info).await.unwrap();

        let call = mock.single().await;
        assert_eq!(call.command, "plugin:ios-callkit-v2|report_incoming_call");
        assert_eq!(
            call.args,
            json!({ "info": {
                "uuid": "C-1",
                "handle": { "handleType": "phoneNumber", "value": "+441234567890" },
                "hasVideo": false,
                "callerName": "Ada"
            }})
        );
    }

    #[tokio::test]
    async fn end_call_reason_is_optional() {
        let (mock, callkit) = setup();

        callkit.end_call("C-1", None).await.unwrap();
        callkit
            .end_call("C-2", Some(CallFailureReason::RemoteEnded))
            .await
            .unwrap();

        let calls = mock.invocations().await;
        assert_eq!(calls[0].args, json!({ "uuid": "C-1" }));
        assert_eq!(calls[1].args, json!({ "uuid": "C-2", "reason": "remoteEnded" }));
    }

    #[tokio::test]
    async fn set_group_without_group_ungroups() {
        let (mock, callkit) = setup();

        callkit.set_group("C-1", None).await.unwrap();

        assert_eq!(mock.single().await.args, json!({ "uuid": "C-1" }));
    }

    #[tokio::test]
    async fn active_calls_decode() {
        let (mock, callkit) = setup();
        mock.resolve(
            "plugin:ios-callkit-v2|get_active_calls",
            json!([{
                "uuid": "C-1",
                "handle": { "handleType": "generic", "value": "ada" },
                "outgoing": true,
                "hasConnected": true,
                "hasEnded": false,
                "onHold": false,
                "isMuted": true,
                "startTime": "2024-03-01T08:30:00Z"
            }]),
        )
        .await;

        let calls = callkit.get_active_calls().await.unwrap();

        assert!(calls[0].is_muted);
        assert!(calls[0].start_time.is_some());
        assert_eq!(calls[0].failure_reason, None);
    }

    #[tokio::test]
    async fn set_audio_route_sends_route_tag() {
        let (mock, callkit) = setup();

        callkit
            .set_audio_route(AudioRouteType::BuiltInSpeaker)
            .await
            .unwrap();

        assert_eq!(
            mock.single().await.args,
            json!({ "routeType": "builtInSpeaker" })
        );
    }

    #[test]
    fn hold_event_takes_uuid_from_payload() {
        let event: CallEvent = decode_event(json!({
            "eventType": "callHeld",
            "data": { "uuid": "C-1", "onHold": true }
        }))
        .unwrap();

        assert_eq!(event.payload.event_type(), CallEventType::CallHeld);
        assert_eq!(event.call_uuid(), Some("C-1"));
    }

    #[test]
    fn envelope_uuid_wins() {
        let event: CallEvent = decode_event(json!({
            "eventType": "callFailed",
            "callUuid": "C-9",
            "timestamp": "2024-03-01T08:31:00Z",
            "data": { "reason": "unanswered" }
        }))
        .unwrap();

        assert_eq!(event.call_uuid(), Some("C-9"));
        assert!(event.timestamp.is_some());
    }

    #[test]
    fn provider_reset_has_no_call() {
        let event: CallEvent = decode_event(json!({ "eventType": "providerReset", "data": {} })).unwrap();
        assert_eq!(event.payload, CallEventData::ProviderReset {});
        assert_eq!(event.call_uuid(), None);
    }

    #[tokio::test]
    async fn every_command_reaches_the_wire() {
        let (mock, callkit) = setup();
        let session = AudioSessionConfiguration {
            category: AudioSessionCategory::PlayAndRecord,
            mode: AudioSessionMode::VoiceChat,
            options: Some(vec![AudioSessionOption::AllowBluetooth]),
        };
        let provider = ProviderConfiguration {
            localized_name: "ioskit".into(),
            supports_video: Some(true),
            ..ProviderConfiguration::default()
        };
        let incoming = IncomingCallInfo {
            uuid: "C-1".into(),
            handle: CallHandle::phone_number("+441234567890"),
            has_video: None,
            caller_name: None,
            supports_dtmf: None,
            supports_holding: None,
            supports_grouping: None,
            supports_ungrouping: None,
        };
        let outgoing = OutgoingCallInfo {
            uuid: "C-2".into(),
            handle: CallHandle::phone_number("+449876543210"),
            has_video: Some(false),
            contact_identifier: None,
        };
        let update = CallUpdate {
            localized_caller_name: Some("Ada".into()),
            ..CallUpdate::default()
        };
        let transaction = Transaction {
            action: TransactionAction::SetHeld,
            call_uuid: "C-1".into(),
            timestamp: "2024-07-01T09:15:00Z".parse().unwrap(),
        };
        let route = AudioRoute {
            name: "Speaker".into(),
            route_type: AudioRouteType::BuiltInSpeaker,
            is_selected: true,
        };
        let push = VoipPushPayload {
            uuid: "C-3".into(),
            handle: "ada@example.com".into(),
            has_video: None,
            caller_name: None,
            custom_data: None,
        };

        let _ = callkit.configure_audio_session(&session).await;
        let _ = callkit.report_incoming_call(&incoming).await;
        let _ = callkit.report_outgoing_call(&outgoing).await;
        let _ = callkit.end_call("C-1", Some(CallFailureReason::RemoteEnded)).await;
        let _ = callkit.set_held("C-1", true).await;
        let _ = callkit.set_muted("C-1", false).await;
        let _ = callkit.set_group("C-1", None).await;
        let _ = callkit.set_on_hold("C-1", false).await;
        let _ = callkit.start_call_audio("C-1").await;
        let _ = callkit.answer_call("C-1").await;
        let _ = callkit.report_call_update("C-1", &update).await;
        let _ = callkit.get_active_calls().await;
        let _ = callkit.get_call_state("C-1").await;
        let _ = callkit.request_transaction(&transaction).await;
        let _ = callkit.report_audio_route_change(&route).await;
        let _ = callkit.set_provider_configuration(&provider).await;
        let _ = callkit.register_for_voip_notifications().await;
        let _ = callkit.invalidate_push_token().await;
        let _ = callkit.report_new_incoming_voip_push(&push).await;
        let _ = callkit.check_call_capability().await;
        let _ = callkit.get_audio_routes().await;
        let _ = callkit.set_audio_route(AudioRouteType::BluetoothHfp).await;

        assert_wire_table(
            &mock,
            &MANIFEST,
            &[
                (
                    "configure_audio_session",
                    json!({ "config": {
                        "category": "playAndRecord",
                        "mode": "voiceChat",
                        "options": ["allowBluetooth"]
                    }}),
                ),
                (
                    "report_incoming_call",
                    json!({ "info": {
                        "uuid": "C-1",
                        "handle": { "handleType": "phoneNumber", "value": "+441234567890" }
                    }}),
                ),
                (
                    "report_outgoing_call",
                    json!({ "info": {
                        "uuid": "C-2",
                        "handle": { "handleType": "phoneNumber", "value": "+449876543210" },
                        "hasVideo": false
                    }}),
                ),
                ("end_call", json!({ "uuid": "C-1", "reason": "remoteEnded" })),
                ("set_held", json!({ "uuid": "C-1", "onHold": true })),
                ("set_muted", json!({ "uuid": "C-1", "muted": false })),
                ("set_group", json!({ "uuid": "C-1" })),
                ("set_on_hold", json!({ "uuid": "C-1", "onHold": false })),
                ("start_call_audio", json!({ "uuid": "C-1" })),
                ("answer_call", json!({ "uuid": "C-1" })),
                ("report_call_update", json!({ "uuid": "C-1", "update": { "localizedCallerName": "Ada" } })),
                ("get_active_calls", json!({})),
                ("get_call_state", json!({ "uuid": "C-1" })),
                (
                    "request_transaction",
                    json!({ "transaction": {
                        "action": "setHeld",
                        "callUuid": "C-1",
                        "timestamp": "2024-07-01T09:15:00.000Z"
                    }}),
                ),
                (
                    "report_audio_route_change",
                    json!({ "route": { "name": "Speaker", "routeType": "builtInSpeaker", "isSelected": true } }),
                ),
                (
                    "set_provider_configuration",
                    json!({ "config": { "localizedName": "ioskit", "supportsVideo": true } }),
                ),
                ("register_for_voip_notifications", json!({})),
                ("invalidate_push_token", json!({})),
                ("report_new_incoming_voip_push", json!({ "payload": { "uuid": "C-3", "handle": "ada@example.com" } })),
                ("check_call_capability", json!({})),
                ("get_audio_routes", json!({})),
                ("set_audio_route", json!({ "routeType": "bluetoothHfp" })),
            ],
        )
        .await;
    }
}
