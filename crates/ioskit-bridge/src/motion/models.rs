// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core Motion types.

use chrono::{DateTime, Utc};
use ioskit_core::iso8601;
use ioskit_core::{Event, NativeError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MagneticFieldAccuracy {
    Uncalibrated,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityConfidence {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MotionEventType {
    AccelerometerUpdate,
    GyroscopeUpdate,
    MagnetometerUpdate,
    DeviceMotionUpdate,
    ActivityUpdate,
    PedometerUpdate,
    AltimeterUpdate,
    Error,
}

/// Acceleration in g.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccelerometerData {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub timestamp: DateTime<Utc>,
}

/// Rotation rate in rad/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GyroscopeData {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub timestamp: DateTime<Utc>,
}

/// Raw field in µT.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagnetometerData {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub accuracy: MagneticFieldAccuracy,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationMatrix {
    pub m11: f64,
    pub m12: f64,
    pub m13: f64,
    pub m21: f64,
    pub m22: f64,
    pub m23: f64,
    pub m31: f64,
    pub m32: f64,
    pub m33: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

/// Orientation; angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attitude {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
    pub rotation_matrix: RotationMatrix,
    pub quaternion: Quaternion,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibratedMagneticField {
    pub field: Vector3D,
    pub accuracy: MagneticFieldAccuracy,
}

/// Sensor-fused motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceMotionData {
    pub attitude: Attitude,
    pub rotation_rate: Vector3D,
    pub gravity: Vector3D,
    pub user_acceleration: Vector3D,
    pub magnetic_field: Option<CalibratedMagneticField>,
    /// Degrees from north, when a reference frame with heading is in use.
    pub heading: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionActivity {
    pub stationary: bool,
    pub walking: bool,
    pub running: bool,
    pub automotive: bool,
    pub cycling: bool,
    pub unknown: bool,
    pub start_date: DateTime<Utc>,
    pub confidence: ActivityConfidence,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PedometerData {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub number_of_steps: u64,
    /// Metres.
    pub distance: Option<f64>,
    pub floors_ascended: Option<u32>,
    pub floors_descended: Option<u32>,
    /// Seconds per metre.
    pub current_pace: Option<f64>,
    /// Steps per second.
    pub current_cadence: Option<f64>,
    pub average_active_pace: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AltimeterData {
    /// Metres since updates started.
    pub relative_altitude: f64,
    /// kPa.
    pub pressure: f64,
    pub timestamp: DateTime<Utc>,
}

/// Per-sensor update intervals in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionUpdateInterval {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accelerometer: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gyroscope: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magnetometer: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_motion: Option<f64>,
}

impl MotionUpdateInterval {
    /// The same interval for every sensor.
    pub fn uniform(seconds: f64) -> Self {
        Self {
            accelerometer: Some(seconds),
            gyroscope: Some(seconds),
            magnetometer: Some(seconds),
            device_motion: Some(seconds),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityQuery {
    #[serde(with = "iso8601::seconds")]
    pub start_date: DateTime<Utc>,
    #[serde(with = "iso8601::seconds")]
    pub end_date: DateTime<Utc>,
}

/// Payload of a motion event, keyed by [`MotionEventType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "eventType", content = "data", rename_all = "camelCase")]
pub enum MotionEventData {
    AccelerometerUpdate(AccelerometerData),
    GyroscopeUpdate(GyroscopeData),
    MagnetometerUpdate(MagnetometerData),
    DeviceMotionUpdate(DeviceMotionData),
    ActivityUpdate(MotionActivity),
    PedometerUpdate(PedometerData),
    AltimeterUpdate(AltimeterData),
    Error(NativeError),
}

impl MotionEventData {
    pub fn event_type(&self) -> MotionEventType {
        match self {
            Self::AccelerometerUpdate(_) => MotionEventType::AccelerometerUpdate,
            Self::GyroscopeUpdate(_) => MotionEventType::GyroscopeUpdate,
            Self::MagnetometerUpdate(_) => MotionEventType::MagnetometerUpdate,
            Self::DeviceMotionUpdate(_) => MotionEventType::DeviceMotionUpdate,
            Self::ActivityUpdate(_) => MotionEventType::ActivityUpdate,
            Self::PedometerUpdate(_) => MotionEventType::PedometerUpdate,
            Self::AltimeterUpdate(_) => MotionEventType::AltimeterUpdate,
            Self::Error(_) => MotionEventType::Error,
        }
    }
}

pub type MotionEvent = Event<MotionEventData>;
