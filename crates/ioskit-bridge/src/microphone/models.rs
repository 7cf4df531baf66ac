// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Audio recording types.

use chrono::{DateTime, Utc};
use ioskit_core::{Event, NativeError, PermissionState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    M4a,
    Wav,
    Caf,
    Aiff,
    Mp3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioQuality {
    Low,
    Medium,
    High,
    Lossless,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PortType {
    BuiltInMic,
    HeadsetMic,
    UsbAudio,
    BluetoothHfp,
    CarAudio,
    LineIn,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingState {
    Idle,
    Recording,
    Paused,
    Stopping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordingEventType {
    Started,
    Paused,
    Resumed,
    Stopped,
    LevelUpdate,
    SilenceDetected,
    Error,
    InputChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionStatus {
    pub microphone: PermissionState,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<AudioFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<AudioQuality>,
    /// Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<u32>,
    /// Bits per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bit_rate: Option<u32>,
    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silence_detection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_suppression: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub echo_cancellation: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingSession {
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub format: AudioFormat,
    pub sample_rate: u32,
    pub channels: u32,
    pub bit_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingResult {
    pub path: String,
    /// Seconds.
    pub duration: f64,
    /// Bytes.
    pub size: u64,
    pub format: AudioFormat,
    pub sample_rate: u32,
    pub channels: u32,
    pub bit_rate: u32,
    pub peak_level: f64,
    pub average_level: f64,
}

/// Normalised 0.0–1.0 meter readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioLevels {
    pub peak_level: f64,
    pub average_level: f64,
    pub is_clipping: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioInput {
    pub id: String,
    pub name: String,
    pub port_type: PortType,
    pub is_default: bool,
    pub channels: u32,
    pub sample_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputChange {
    pub input_id: String,
}

/// Recording event payload. The native recorder also emits the longer
/// `recording*` names, accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "eventType", content = "data", rename_all = "camelCase")]
pub enum RecordingEventData {
    #[serde(alias = "recordingStarted")]
    Started(RecordingSession),
    #[serde(alias = "recordingPaused")]
    Paused {},
    #[serde(alias = "recordingResumed")]
    Resumed {},
    #[serde(alias = "recordingStopped")]
    Stopped(RecordingResult),
    LevelUpdate(AudioLevels),
    SilenceDetected {},
    #[serde(alias = "recordingError")]
    Error(NativeError),
    InputChanged(InputChange),
}

impl RecordingEventData {
    pub fn event_type(&self) -> RecordingEventType {
        match self {
            Self::Started(_) => RecordingEventType::Started,
            Self::Paused {} => RecordingEventType::Paused,
            Self::Resumed {} => RecordingEventType::Resumed,
            Self::Stopped(_) => RecordingEventType::Stopped,
            Self::LevelUpdate(_) => RecordingEventType::LevelUpdate,
            Self::SilenceDetected {} => RecordingEventType::SilenceDetected,
            Self::Error(_) => RecordingEventType::Error,
            Self::InputChanged(_) => RecordingEventType::InputChanged,
        }
    }
}

pub type RecordingEvent = Event<RecordingEventData>;
