// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Files: document picker, reading and writing, iCloud Drive state and
// directory monitoring.
//
// The three picker commands always send an `options` object; leaving the
// options out sends `{}` so the native side applies its own defaults.

pub mod models;

use std::sync::Arc;

use ioskit_core::{Args, BridgeConfig, Namespace, PluginClient, Result, Transport};

use crate::manifest::{PackageManifest, SwiftTools};

pub use models::*;

pub const NAMESPACE: Namespace = Namespace::versioned("ios-files", 2);

pub const COMMANDS: &[&str] = &[
    "pick_file",
    "pick_multiple_files",
    "pick_folder",
    "save_file",
    "open_in_files",
    "import_from_files",
    "export_to_files",
    "list_documents",
    "read_file",
    "write_file",
    "delete_file",
    "move_file",
    "copy_file",
    "create_folder",
    "get_file_info",
    "share_file",
    "preview_file",
    "get_cloud_status",
    "download_from_cloud",
    "evict_from_local",
    "start_monitoring",
    "stop_monitoring",
];

pub const MANIFEST: PackageManifest = PackageManifest {
    package: "tauri-plugin-ios-files",
    min_ios: 13,
    swift_tools: SwiftTools::V5_7,
    namespace: NAMESPACE,
    commands: COMMANDS,
};

#[derive(Debug, Clone)]
pub struct Files {
    client: PluginClient,
}

impl Files {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, &BridgeConfig::default())
    }

    pub fn with_config(transport: Arc<dyn Transport>, config: &BridgeConfig) -> Self {
        Self {
            client: PluginClient::with_config(NAMESPACE, transport, config),
        }
    }

    pub async fn pick_file(&self, options: Option<&FilePickerOptions>) -> Result<PickedFile> {
        let args = Args::new().or_empty("options", options)?;
        self.client.invoke("pick_file", args).await
    }

    pub async fn pick_multiple_files(
        &self,
        options: Option<&FilePickerOptions>,
    ) -> Result<Vec<PickedFile>> {
        let args = Args::new().or_empty("options", options)?;
        self.client.invoke("pick_multiple_files", args).await
    }

    pub async fn pick_folder(&self) -> Result<PickedFile> {
        self.client.invoke("pick_folder", Args::new()).await
    }

    /// Returns the URL the file was saved to.
    pub async fn save_file(&self, options: &SaveFileOptions) -> Result<String> {
        let args = Args::new().with("options", options)?;
        self.client.invoke("save_file", args).await
    }

    pub async fn open_in_files(&self, url: &str) -> Result<()> {
        let args = Args::new().with("url", url)?;
        self.client.send("open_in_files", args).await
    }

    pub async fn import_from_files(
        &self,
        options: Option<&ImportOptions>,
    ) -> Result<Vec<PickedFile>> {
        let args = Args::new().or_empty("options", options)?;
        self.client.invoke("import_from_files", args).await
    }

    pub async fn export_to_files(&self, options: &ExportOptions) -> Result<()> {
        let args = Args::new().with("options", options)?;
        self.client.send("export_to_files", args).await
    }

    pub async fn list_documents(&self, options: Option<&ListOptions>) -> Result<Vec<DocumentInfo>> {
        let args = Args::new().maybe("options", options)?;
        self.client.invoke("list_documents", args).await
    }

    pub async fn read_file(&self, url: &str) -> Result<FileData> {
        let args = Args::new().with("url", url)?;
        self.client.invoke("read_file", args).await
    }

    pub async fn write_file(&self, url: &str, data: &FileData) -> Result<()> {
        let args = Args::new().with("url", url)?.with("data", data)?;
        self.client.send("write_file", args).await
    }

    pub async fn delete_file(&self, url: &str) -> Result<()> {
        let args = Args::new().with("url", url)?;
        self.client.send("delete_file", args).await
    }

    /// Returns the destination URL.
    pub async fn move_file(&self, operation: &FileOperation) -> Result<String> {
        let args = Args::new().with("operation", operation)?;
        self.client.invoke("move_file", args).await
    }

    /// Returns the destination URL.
    pub async fn copy_file(&self, operation: &FileOperation) -> Result<String> {
        let args = Args::new().with("operation", operation)?;
        self.client.invoke("copy_file", args).await
    }

    /// Creates `name` inside the directory at `url` and returns its URL.
    pub async fn create_folder(&self, url: &str, name: &str) -> Result<String> {
        let args = Args::new().with("url", url)?.with("name", name)?;
        self.client.invoke("create_folder", args).await
    }

    pub async fn get_file_info(&self, url: &str) -> Result<DocumentInfo> {
        let args = Args::new().with("url", url)?;
        self.client.invoke("get_file_info", args).await
    }

    pub async fn share_file(&self, options: &ShareOptions) -> Result<()> {
        let args = Args::new().with("options", options)?;
        self.client.send("share_file", args).await
    }

    pub async fn preview_file(&self, options: &PreviewOptions) -> Result<()> {
        let args = Args::new().with("options", options)?;
        self.client.send("preview_file", args).await
    }

    pub async fn get_cloud_status(&self, url: &str) -> Result<CloudStatus> {
        let args = Args::new().with("url", url)?;
        self.client.invoke("get_cloud_status", args).await
    }

    pub async fn download_from_cloud(&self, url: &str) -> Result<()> {
        let args = Args::new().with("url", url)?;
        self.client.send("download_from_cloud", args).await
    }

    pub async fn evict_from_local(&self, url: &str) -> Result<()> {
        let args = Args::new().with("url", url)?;
        self.client.send("evict_from_local", args).await
    }

    pub async fn start_monitoring(&self, options: &MonitoringOptions) -> Result<()> {
        let args = Args::new().with("options", options)?;
        self.client.send("start_monitoring", args).await
    }

    pub async fn stop_monitoring(&self) -> Result<()> {
        self.client.send("stop_monitoring", Args::new()).await
    }
}
