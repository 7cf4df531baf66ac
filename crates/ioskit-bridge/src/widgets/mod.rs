// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Widgets: shared widget data, timeline reloads, deep links and refresh
// schedules for the app's WidgetKit extension.

pub mod models;

use std::sync::Arc;

use ioskit_core::{Args, BridgeConfig, Namespace, PluginClient, Result, Transport};

use crate::manifest::{PackageManifest, SwiftTools};

pub use models::*;

pub const NAMESPACE: Namespace = Namespace::versioned("ios-widgets", 2);

pub const COMMANDS: &[&str] = &[
    "reload_all_timelines",
    "reload_timelines",
    "get_current_configurations",
    "set_widget_data",
    "get_widget_data",
    "clear_widget_data",
    "request_widget_update",
    "get_widget_info",
    "set_widget_url",
    "get_widget_url",
    "preview_widget_data",
    "get_widget_families",
    "schedule_widget_refresh",
    "cancel_widget_refresh",
];

pub const MANIFEST: PackageManifest = PackageManifest {
    package: "tauri-plugin-ios-widgets",
    min_ios: 14,
    swift_tools: SwiftTools::V5_3,
    namespace: NAMESPACE,
    commands: COMMANDS,
};

#[derive(Debug, Clone)]
pub struct Widgets {
    client: PluginClient,
}

impl Widgets {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, &BridgeConfig::default())
    }

    pub fn with_config(transport: Arc<dyn Transport>, config: &BridgeConfig) -> Self {
        Self {
            client: PluginClient::with_config(NAMESPACE, transport, config),
        }
    }

    pub async fn reload_all_timelines(&self) -> Result<()> {
        self.client.send("reload_all_timelines", Args::new()).await
    }

    pub async fn reload_timelines(&self, widget_kinds: &[String]) -> Result<()> {
        let args = Args::new().with("widgetKinds", widget_kinds)?;
        self.client.send("reload_timelines", args).await
    }

    pub async fn get_current_configurations(&self) -> Result<Vec<WidgetConfiguration>> {
        self.client
            .invoke("get_current_configurations", Args::new())
            .await
    }

    pub async fn set_widget_data(&self, data: &WidgetData) -> Result<()> {
        let args = Args::new().with("data", data)?;
        self.client.send("set_widget_data", args).await
    }

    /// `None` when nothing is stored for `kind`.
    pub async fn get_widget_data(
        &self,
        kind: &str,
        family: Option<WidgetFamily>,
    ) -> Result<Option<WidgetData>> {
        let args = Args::new()
            .with("kind", kind)?
            .maybe("family", family.as_ref())?;
        self.client.invoke("get_widget_data", args).await
    }

    pub async fn clear_widget_data(&self, kind: &str) -> Result<()> {
        let args = Args::new().with("kind", kind)?;
        self.client.send("clear_widget_data", args).await
    }

    pub async fn request_widget_update(&self, kind: &str) -> Result<()> {
        let args = Args::new().with("kind", kind)?;
        self.client.send("request_widget_update", args).await
    }

    pub async fn get_widget_info(&self, kind: &str) -> Result<WidgetInfo> {
        let args = Args::new().with("kind", kind)?;
        self.client.invoke("get_widget_info", args).await
    }

    pub async fn set_widget_url(&self, kind: &str, url: &WidgetUrl) -> Result<()> {
        let args = Args::new().with("kind", kind)?.with("url", url)?;
        self.client.send("set_widget_url", args).await
    }

    pub async fn get_widget_url(&self, kind: &str) -> Result<Option<WidgetUrl>> {
        let args = Args::new().with("kind", kind)?;
        self.client.invoke("get_widget_url", args).await
    }

    pub async fn preview_widget_data(&self, data: &WidgetData) -> Result<Vec<WidgetPreview>> {
        let args = Args::new().with("data", data)?;
        self.client.invoke("preview_widget_data", args).await
    }

    pub async fn get_widget_families(&self, kind: &str) -> Result<Vec<WidgetFamily>> {
        let args = Args::new().with("kind", kind)?;
        self.client.invoke("get_widget_families", args).await
    }

    /// Returns the schedule id to pass to [`Self::cancel_widget_refresh`].
    pub async fn schedule_widget_refresh(&self, schedule: &WidgetRefreshSchedule) -> Result<String> {
        let args = Args::new().with("schedule", schedule)?;
        self.client.invoke("schedule_widget_refresh", args).await
    }

    pub async fn cancel_widget_refresh(&self, schedule_id: &str) -> Result<()> {
        let args = Args::new().with("scheduleId", schedule_id)?;
        self.client.send("cancel_widget_refresh", args).await
    }
}
