// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Microphone: audio recording sessions, metering and input selection.

pub mod models;

use std::sync::Arc;

use ioskit_core::{Args, BridgeConfig, Namespace, PluginClient, Result, Transport};

use crate::manifest::{PackageManifest, SwiftTools};

pub use models::*;

pub const NAMESPACE: Namespace = Namespace::versioned("ios-microphone", 2);

pub const COMMANDS: &[&str] = &[
    "check_permissions",
    "request_permissions",
    "start_recording",
    "stop_recording",
    "pause_recording",
    "resume_recording",
    "get_recording_state",
    "get_audio_levels",
    "get_available_inputs",
    "set_audio_input",
    "get_recording_duration",
];

pub const MANIFEST: PackageManifest = PackageManifest {
    package: "tauri-plugin-ios-microphone",
    min_ios: 13,
    swift_tools: SwiftTools::V5_7,
    namespace: NAMESPACE,
    commands: COMMANDS,
};

#[derive(Debug, Clone)]
pub struct Microphone {
    client: PluginClient,
}

impl Microphone {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, &BridgeConfig::default())
    }

    pub fn with_config(transport: Arc<dyn Transport>, config: &BridgeConfig) -> Self {
        Self {
            client: PluginClient::with_config(NAMESPACE, transport, config),
        }
    }

    pub async fn check_permissions(&self) -> Result<PermissionStatus> {
        self.client.invoke("check_permissions", Args::new()).await
    }

    pub async fn request_permissions(&self) -> Result<PermissionStatus> {
        self.client.invoke("request_permissions", Args::new()).await
    }

    pub async fn start_recording(
        &self,
        options: Option<&RecordingOptions>,
    ) -> Result<RecordingSession> {
        let args = Args::new().maybe("options", options)?;
        self.client.invoke("start_recording", args).await
    }

    pub async fn stop_recording(&self) -> Result<RecordingResult> {
        self.client.invoke("stop_recording", Args::new()).await
    }

    pub async fn pause_recording(&self) -> Result<()> {
        self.client.send("pause_recording", Args::new()).await
    }

    pub async fn resume_recording(&self) -> Result<()> {
        self.client.send("resume_recording", Args::new()).await
    }

    pub async fn get_recording_state(&self) -> Result<RecordingState> {
        self.client.invoke("get_recording_state", Args::new()).await
    }

    pub async fn get_audio_levels(&self) -> Result<AudioLevels> {
        self.client.invoke("get_audio_levels", Args::new()).await
    }

    pub async fn get_available_inputs(&self) -> Result<Vec<AudioInput>> {
        self.client.invoke("get_available_inputs", Args::new()).await
    }

    pub async fn set_audio_input(&self, input_id: &str) -> Result<()> {
        let args = Args::new().with("inputId", input_id)?;
        self.client.send("set_audio_input", args).await
    }

    /// Seconds recorded in the current session.
    pub async fn get_recording_duration(&self) -> Result<f64> {
        self.client.invoke("get_recording_duration", Args::new()).await
    }
}
