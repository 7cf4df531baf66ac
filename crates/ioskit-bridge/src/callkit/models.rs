// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// CallKit types: provider setup, call descriptions, audio routing, VoIP push.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use ioskit_core::iso8601;
use ioskit_core::NativeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HandleType {
    Generic,
    PhoneNumber,
    EmailAddress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CallFailureReason {
    Failed,
    RemoteEnded,
    Unanswered,
    AnsweredElsewhere,
    DeclinedElsewhere,
    CallerFiltered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CallState {
    Idle,
    Dialing,
    Incoming,
    Connecting,
    Connected,
    Held,
    Disconnecting,
    Disconnected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AudioRouteType {
    BuiltInReceiver,
    BuiltInSpeaker,
    Bluetooth,
    BluetoothHfp,
    BluetoothA2dp,
    BluetoothLe,
    CarAudio,
    Wired,
    AirPlay,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionAction {
    Start,
    Answer,
    End,
    SetHeld,
    SetMuted,
    SetGroup,
    PlayDtmf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AudioSessionCategory {
    Ambient,
    SoloAmbient,
    Playback,
    Record,
    PlayAndRecord,
    MultiRoute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AudioSessionMode {
    Default,
    VoiceChat,
    VideoChat,
    GameChat,
    VideoRecording,
    Measurement,
    MoviePlayback,
    SpokenAudio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AudioSessionOption {
    MixWithOthers,
    DuckOthers,
    AllowBluetooth,
    DefaultToSpeaker,
    InterruptSpokenAudioAndMixWithOthers,
    AllowBluetoothA2dp,
    AllowAirPlay,
    OverrideMutedMicrophoneInterruption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CallEventType {
    IncomingCall,
    OutgoingCall,
    CallStarted,
    CallAnswered,
    CallEnded,
    CallHeld,
    CallResumed,
    CallMuted,
    CallUnmuted,
    CallFailed,
    AudioRouteChanged,
    DtmfReceived,
    ProviderReset,
    VoipTokenUpdated,
    VoipPushReceived,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfiguration {
    pub localized_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ringtone_sound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_template_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_call_groups: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_calls_per_group: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_video: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_calls_in_recents: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_handle_types: Option<Vec<HandleType>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallHandle {
    pub handle_type: HandleType,
    pub value: String,
}

impl CallHandle {
    pub fn phone_number(value: impl Into<String>) -> Self {
        Self {
            handle_type: HandleType::PhoneNumber,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingCallInfo {
    pub uuid: String,
    pub handle: CallHandle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_video: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_dtmf: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_holding: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_grouping: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_ungrouping: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingCallInfo {
    pub uuid: String,
    pub handle: CallHandle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_video: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_identifier: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_handle: Option<CallHandle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized_caller_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_dtmf: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_holding: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_grouping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_ungrouping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_video: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub uuid: String,
    pub handle: CallHandle,
    pub outgoing: bool,
    pub has_connected: bool,
    pub has_ended: bool,
    pub on_hold: bool,
    pub is_muted: bool,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub failure_reason: Option<CallFailureReason>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioRoute {
    pub name: String,
    pub route_type: AudioRouteType,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub action: TransactionAction,
    pub call_uuid: String,
    #[serde(with = "iso8601::millis")]
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// A transaction stamped with the current time.
    pub fn now(action: TransactionAction, call_uuid: impl Into<String>) -> Self {
        Self {
            action,
            call_uuid: call_uuid.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallCapability {
    pub can_make_calls: bool,
    pub can_receive_calls: bool,
    pub supports_video: bool,
    pub supports_voip: bool,
    pub cellular_provider: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoipPushPayload {
    pub uuid: String,
    pub handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_video: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSessionConfiguration {
    pub category: AudioSessionCategory,
    pub mode: AudioSessionMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<AudioSessionOption>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRef {
    #[serde(default)]
    pub uuid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldChange {
    #[serde(default)]
    pub uuid: Option<String>,
    pub on_hold: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuteChange {
    #[serde(default)]
    pub uuid: Option<String>,
    pub muted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallFailure {
    #[serde(default)]
    pub uuid: Option<String>,
    pub reason: CallFailureReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DtmfTones {
    #[serde(default)]
    pub uuid: Option<String>,
    pub digits: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoipToken {
    /// Hex-encoded PushKit token.
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoipPush {
    pub payload: Value,
}

/// Payload of a call event, keyed by [`CallEventType`]. Events without data
/// arrive with an empty `data` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "eventType", content = "data", rename_all = "camelCase")]
pub enum CallEventData {
    IncomingCall(IncomingCallInfo),
    OutgoingCall(OutgoingCallInfo),
    CallStarted(CallRef),
    CallAnswered(CallRef),
    CallEnded(CallRef),
    CallHeld(HoldChange),
    CallResumed(CallRef),
    CallMuted(MuteChange),
    CallUnmuted(CallRef),
    CallFailed(CallFailure),
    AudioRouteChanged(AudioRoute),
    DtmfReceived(DtmfTones),
    ProviderReset {},
    VoipTokenUpdated(VoipToken),
    VoipPushReceived(VoipPush),
    Error(NativeError),
}

impl CallEventData {
    pub fn event_type(&self) -> CallEventType {
        match self {
            Self::IncomingCall(_) => CallEventType::IncomingCall,
            Self::OutgoingCall(_) => CallEventType::OutgoingCall,
            Self::CallStarted(_) => CallEventType::CallStarted,
            Self::CallAnswered(_) => CallEventType::CallAnswered,
            Self::CallEnded(_) => CallEventType::CallEnded,
            Self::CallHeld(_) => CallEventType::CallHeld,
            Self::CallResumed(_) => CallEventType::CallResumed,
            Self::CallMuted(_) => CallEventType::CallMuted,
            Self::CallUnmuted(_) => CallEventType::CallUnmuted,
            Self::CallFailed(_) => CallEventType::CallFailed,
            Self::AudioRouteChanged(_) => CallEventType::AudioRouteChanged,
            Self::DtmfReceived(_) => CallEventType::DtmfReceived,
            Self::ProviderReset {} => CallEventType::ProviderReset,
            Self::VoipTokenUpdated(_) => CallEventType::VoipTokenUpdated,
            Self::VoipPushReceived(_) => CallEventType::VoipPushReceived,
            Self::Error(_) => CallEventType::Error,
        }
    }

    fn uuid(&self) -> Option<&str> {
        match self {
            Self::IncomingCall(info) => Some(&info.uuid),
            Self::OutgoingCall(info) => Some(&info.uuid),
            Self::CallStarted(r)
            | Self::CallAnswered(r)
            | Self::CallEnded(r)
            | Self::CallResumed(r)
            | Self::CallUnmuted(r) => r.uuid.as_deref(),
            Self::CallHeld(change) => change.uuid.as_deref(),
            Self::CallMuted(change) => change.uuid.as_deref(),
            Self::CallFailed(failure) => failure.uuid.as_deref(),
            Self::DtmfReceived(tones) => tones.uuid.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallEvent {
    #[serde(flatten)]
    pub payload: CallEventData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    call_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl CallEvent {
    /// The call this event concerns, from the envelope or else the payload.
    pub fn call_uuid(&self) -> Option<&str> {
        self.call_uuid.as_deref().or_else(|| self.payload.uuid())
    }
}
