// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Barometer data types.

use chrono::{DateTime, Utc};
use ioskit_core::iso8601;
use ioskit_core::{Event, NativeError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PressureTrend {
    Rising,
    Falling,
    #[default]
    Steady,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeatherCondition {
    Fair,
    Changing,
    Stormy,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BarometerEventType {
    PressureUpdate,
    AltitudeUpdate,
    WeatherChange,
    CalibrationComplete,
    Error,
}

/// A single pressure reading in kPa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PressureData {
    pub pressure: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_altitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AltitudeData {
    /// Metres above the reference pressure level.
    pub altitude: f64,
    pub pressure: f64,
    pub reference_pressure: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherData {
    pub pressure: f64,
    pub pressure_trend: PressureTrend,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    pub weather_condition: WeatherCondition,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarometerCalibration {
    pub reference_pressure: f64,
    pub reference_altitude: f64,
    #[serde(with = "iso8601::seconds")]
    pub calibration_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarometerConfiguration {
    /// Seconds between readings.
    pub update_interval: f64,
    pub use_calibration: bool,
    pub enable_weather_prediction: bool,
    pub altitude_smoothing: bool,
}

impl Default for BarometerConfiguration {
    fn default() -> Self {
        Self {
            update_interval: 1.0,
            use_calibration: true,
            enable_weather_prediction: true,
            altitude_smoothing: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PressureEntry {
    pub pressure: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PressureHistory {
    pub entries: Vec<PressureEntry>,
    pub duration_hours: f64,
    pub average_pressure: f64,
    pub min_pressure: f64,
    pub max_pressure: f64,
}

/// Payload of a barometer event, keyed by [`BarometerEventType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "eventType", content = "data", rename_all = "camelCase")]
pub enum BarometerEventData {
    PressureUpdate(PressureData),
    AltitudeUpdate(AltitudeData),
    WeatherChange(WeatherData),
    CalibrationComplete(BarometerCalibration),
    Error(NativeError),
}

impl BarometerEventData {
    pub fn event_type(&self) -> BarometerEventType {
        match self {
            Self::PressureUpdate(_) => BarometerEventType::PressureUpdate,
            Self::AltitudeUpdate(_) => BarometerEventType::AltitudeUpdate,
            Self::WeatherChange(_) => BarometerEventType::WeatherChange,
            Self::CalibrationComplete(_) => BarometerEventType::CalibrationComplete,
            Self::Error(_) => BarometerEventType::Error,
        }
    }
}

pub type BarometerEvent = Event<BarometerEventData>;
