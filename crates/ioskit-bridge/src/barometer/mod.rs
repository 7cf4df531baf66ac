// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Barometer: atmospheric pressure, relative altitude and a coarse weather
// trend from the device altimeter.

pub mod models;

use std::sync::Arc;

use ioskit_core::{Args, BridgeConfig, Namespace, PluginClient, Result, Transport};

use crate::manifest::{PackageManifest, SwiftTools};

pub use models::*;

pub const NAMESPACE: Namespace = Namespace::versioned("ios-barometer", 2);

pub const COMMANDS: &[&str] = &[
    "start_pressure_updates",
    "stop_pressure_updates",
    "get_pressure_data",
    "is_barometer_available",
    "set_update_interval",
    "get_reference_pressure",
    "set_reference_pressure",
    "get_altitude_from_pressure",
    "start_altitude_updates",
    "stop_altitude_updates",
    "get_weather_data",
    "calibrate_barometer",
];

pub const MANIFEST: PackageManifest = PackageManifest {
    package: "tauri-plugin-ios-barometer",
    min_ios: 13,
    swift_tools: SwiftTools::V5_3,
    namespace: NAMESPACE,
    commands: COMMANDS,
};

#[derive(Debug, Clone)]
pub struct Barometer {
    client: PluginClient,
}

impl Barometer {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, &BridgeConfig::default())
    }

    pub fn with_config(transport: Arc<dyn Transport>, config: &BridgeConfig) -> Self {
        Self {
            client: PluginClient::with_config(NAMESPACE, transport, config),
        }
    }

    /// Begin emitting `pressureUpdate` events.
    pub async fn start_pressure_updates(&self) -> Result<()> {
        self.client.send("start_pressure_updates", Args::new()).await
    }

    pub async fn stop_pressure_updates(&self) -> Result<()> {
        self.client.send("stop_pressure_updates", Args::new()).await
    }

    /// One-shot pressure reading.
    pub async fn get_pressure_data(&self) -> Result<PressureData> {
        self.client.invoke("get_pressure_data", Args::new()).await
    }

    pub async fn is_barometer_available(&self) -> Result<bool> {
        self.client.invoke("is_barometer_available", Args::new()).await
    }

    /// Interval between readings, in seconds.
    pub async fn set_update_interval(&self, interval: f64) -> Result<()> {
        let args = Args::new().with("interval", &interval)?;
        self.client.send("set_update_interval", args).await
    }

    pub async fn get_reference_pressure(&self) -> Result<f64> {
        self.client.invoke("get_reference_pressure", Args::new()).await
    }

    pub async fn set_reference_pressure(&self, pressure: f64) -> Result<()> {
        let args = Args::new().with("pressure", &pressure)?;
        self.client.send("set_reference_pressure", args).await
    }

    /// Altitude in metres for `pressure` relative to the reference pressure.
    pub async fn get_altitude_from_pressure(&self, pressure: f64) -> Result<f64> {
        let args = Args::new().with("pressure", &pressure)?;
        self.client.invoke("get_altitude_from_pressure", args).await
    }

    pub async fn start_altitude_updates(&self) -> Result<()> {
        self.client.send("start_altitude_updates", Args::new()).await
    }

    pub async fn stop_altitude_updates(&self) -> Result<()> {
        self.client.send("stop_altitude_updates", Args::new()).await
    }

    pub async fn get_weather_data(&self) -> Result<WeatherData> {
        self.client.invoke("get_weather_data", Args::new()).await
    }

    pub async fn calibrate_barometer(&self, calibration: &BarometerCalibration) -> Result<()> {
        let args = Args::new().with("calibration", calibration)?;
        self.client.send("calibrate_barometer", args).await
    }
}
