// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Location: fixes, continuous updates, region monitoring, heading and
// geocoding.

pub mod models;

use std::sync::Arc;

use ioskit_core::{Args, BridgeConfig, Namespace, PluginClient, Result, Transport};

use crate::manifest::{PackageManifest, SwiftTools};

pub use models::*;

pub const NAMESPACE: Namespace = Namespace::versioned("ios-location", 2);

pub const COMMANDS: &[&str] = &[
    "check_permissions",
    "request_permissions",
    "get_current_location",
    "start_location_updates",
    "stop_location_updates",
    "start_significant_location_updates",
    "stop_significant_location_updates",
    "start_monitoring_region",
    "stop_monitoring_region",
    "get_monitored_regions",
    "start_heading_updates",
    "stop_heading_updates",
    "geocode_address",
    "reverse_geocode",
    "get_distance",
];

pub const MANIFEST: PackageManifest = PackageManifest {
    package: "tauri-plugin-ios-location",
    min_ios: 13,
    swift_tools: SwiftTools::V5_7,
    namespace: NAMESPACE,
    commands: COMMANDS,
};

#[derive(Debug, Clone)]
pub struct Location {
    client: PluginClient,
}

impl Location {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, &BridgeConfig::default())
    }

    pub fn with_config(transport: Arc<dyn Transport>, config: &BridgeConfig) -> Self {
        Self {
            client: PluginClient::with_config(NAMESPACE, transport, config),
        }
    }

    pub async fn check_permissions(&self) -> Result<LocationPermissions> {
        self.client.invoke("check_permissions", Args::new()).await
    }

    pub async fn request_permissions(
        &self,
        request: &PermissionRequest,
    ) -> Result<LocationPermissions> {
        let args = Args::new().with("request", request)?;
        self.client.invoke("request_permissions", args).await
    }

    pub async fn get_current_location(
        &self,
        options: Option<&LocationOptions>,
    ) -> Result<LocationData> {
        let args = Args::new().maybe("options", options)?;
        self.client.invoke("get_current_location", args).await
    }

    /// Begin emitting `locationUpdate` events.
    pub async fn start_location_updates(&self, options: Option<&LocationOptions>) -> Result<()> {
        let args = Args::new().maybe("options", options)?;
        self.client.send("start_location_updates", args).await
    }

    pub async fn stop_location_updates(&self) -> Result<()> {
        self.client.send("stop_location_updates", Args::new()).await
    }

    pub async fn start_significant_location_updates(&self) -> Result<()> {
        self.client
            .send("start_significant_location_updates", Args::new())
            .await
    }

    pub async fn stop_significant_location_updates(&self) -> Result<()> {
        self.client
            .send("stop_significant_location_updates", Args::new())
            .await
    }

    pub async fn start_monitoring_region(&self, region: &Region) -> Result<()> {
        let args = Args::new().with("region", region)?;
        self.client.send("start_monitoring_region", args).await
    }

    pub async fn stop_monitoring_region(&self, identifier: &str) -> Result<()> {
        let args = Args::new().with("identifier", identifier)?;
        self.client.send("stop_monitoring_region", args).await
    }

    pub async fn get_monitored_regions(&self) -> Result<Vec<Region>> {
        self.client.invoke("get_monitored_regions", Args::new()).await
    }

    pub async fn start_heading_updates(&self) -> Result<()> {
        self.client.send("start_heading_updates", Args::new()).await
    }

    pub async fn stop_heading_updates(&self) -> Result<()> {
        self.client.send("stop_heading_updates", Args::new()).await
    }

    pub async fn geocode_address(&self, address: &str) -> Result<Vec<GeocodingResult>> {
        let args = Args::new().with("address", address)?;
        self.client.invoke("geocode_address", args).await
    }

    pub async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<Vec<Placemark>> {
        let args = Args::new().with("coordinates", &coordinates)?;
        self.client.invoke("reverse_geocode", args).await
    }

    /// Great-circle distance in metres.
    pub async fn get_distance(&self, from: Coordinates, to: Coordinates) -> Result<f64> {
        let args = Args::new().with("from", &from)?.with("to", &to)?;
        self.client.invoke("get_distance", args).await
    }
}
