// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HealthKit sample and characteristic types.

use chrono::{DateTime, Utc};
use ioskit_core::iso8601;
use ioskit_core::PermissionState;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HealthKitDataType {
    Steps,
    HeartRate,
    ActiveEnergyBurned,
    DistanceWalkingRunning,
    FlightsClimbed,
    Height,
    Weight,
    BodyMassIndex,
    BodyFatPercentage,
    SleepAnalysis,
    BiologicalSex,
    DateOfBirth,
    BloodType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkoutActivityType {
    Running,
    Walking,
    Cycling,
    Swimming,
    Yoga,
    Strength,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BiologicalSex {
    NotSet,
    Female,
    Male,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BloodType {
    NotSet,
    APositive,
    ANegative,
    BPositive,
    BNegative,
    #[serde(rename = "abPositive")]
    AbPositive,
    #[serde(rename = "abNegative")]
    AbNegative,
    OPositive,
    ONegative,
}

/// Per-type authorization, for the types that can be read or shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthKitPermissions {
    pub steps: PermissionState,
    pub heart_rate: PermissionState,
    pub active_energy_burned: PermissionState,
    pub distance_walking_running: PermissionState,
    pub flights_climbed: PermissionState,
    pub height: PermissionState,
    pub weight: PermissionState,
    pub body_mass_index: PermissionState,
    pub body_fat_percentage: PermissionState,
    pub sleep_analysis: PermissionState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionStatus {
    pub read: HealthKitPermissions,
    pub write: HealthKitPermissions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRequest {
    pub read: Vec<HealthKitDataType>,
    pub write: Vec<HealthKitDataType>,
}

/// Date-bounded query, also used for category samples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityQuery {
    pub data_type: HealthKitDataType,
    #[serde(with = "iso8601::millis")]
    pub start_date: DateTime<Utc>,
    #[serde(with = "iso8601::millis")]
    pub end_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitySample {
    pub data_type: HealthKitDataType,
    pub value: f64,
    /// HealthKit unit string (`"count"`, `"count/min"`, `"kg"`, …).
    pub unit: String,
    #[serde(with = "iso8601::millis")]
    pub start_date: DateTime<Utc>,
    #[serde(with = "iso8601::millis")]
    pub end_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySample {
    pub data_type: HealthKitDataType,
    pub value: i64,
    #[serde(with = "iso8601::millis")]
    pub start_date: DateTime<Utc>,
    #[serde(with = "iso8601::millis")]
    pub end_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSample {
    pub activity_type: WorkoutActivityType,
    #[serde(with = "iso8601::millis")]
    pub start_date: DateTime<Utc>,
    #[serde(with = "iso8601::millis")]
    pub end_date: DateTime<Utc>,
    /// Seconds.
    pub duration: f64,
    /// Kilocalories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_energy_burned: Option<f64>,
    /// Metres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}
