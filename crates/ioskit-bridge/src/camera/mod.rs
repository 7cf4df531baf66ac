// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Camera capture and photo-library picking.

pub mod models;

use std::sync::Arc;

use ioskit_core::{Args, BridgeConfig, Namespace, PluginClient, Result, Transport};

use crate::manifest::{PackageManifest, SwiftTools};

pub use models::*;

/// First contract generation; no version suffix.
pub const NAMESPACE: Namespace = Namespace::new("ios-camera");

pub const COMMANDS: &[&str] = &[
    "check_permissions",
    "request_permissions",
    "take_photo",
    "record_video",
    "pick_image",
    "pick_video",
    "pick_media",
    "get_camera_info",
];

pub const MANIFEST: PackageManifest = PackageManifest {
    package: "tauri-plugin-ios-camera",
    min_ios: 13,
    swift_tools: SwiftTools::V5_7,
    namespace: NAMESPACE,
    commands: COMMANDS,
};

#[derive(Debug, Clone)]
pub struct Camera {
    client: PluginClient,
}

impl Camera {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, &BridgeConfig::default())
    }

    pub fn with_config(transport: Arc<dyn Transport>, config: &BridgeConfig) -> Self {
        Self {
            client: PluginClient::with_config(NAMESPACE, transport, config),
        }
    }

    pub async fn check_permissions(&self) -> Result<CameraPermissions> {
        self.client.invoke("check_permissions", Args::new()).await
    }

    pub async fn request_permissions(
        &self,
        permissions: &PermissionRequest,
    ) -> Result<CameraPermissions> {
        let args = Args::new().with("permissions", permissions)?;
        self.client.invoke("request_permissions", args).await
    }

    pub async fn take_photo(&self, options: Option<&PhotoOptions>) -> Result<CaptureResult> {
        let args = Args::new().maybe("options", options)?;
        self.client.invoke("take_photo", args).await
    }

    pub async fn record_video(&self, options: Option<&VideoOptions>) -> Result<CaptureResult> {
        let args = Args::new().maybe("options", options)?;
        self.client.invoke("record_video", args).await
    }

    pub async fn pick_image(&self, options: Option<&PickerOptions>) -> Result<Vec<MediaItem>> {
        self.pick("pick_image", options).await
    }

    pub async fn pick_video(&self, options: Option<&PickerOptions>) -> Result<Vec<MediaItem>> {
        self.pick("pick_video", options).await
    }

    /// Images or videos.
    pub async fn pick_media(&self, options: Option<&PickerOptions>) -> Result<Vec<MediaItem>> {
        self.pick("pick_media", options).await
    }

    pub async fn get_camera_info(&self) -> Result<Vec<CameraInfo>> {
        self.client.invoke("get_camera_info", Args::new()).await
    }

    async fn pick(&self, command: &str, options: Option<&PickerOptions>) -> Result<Vec<MediaItem>> {
        let args = Args::new().maybe("options", options)?;
        self.client.invoke(command, args).await
    }
}
