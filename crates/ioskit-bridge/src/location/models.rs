// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Location, region and geocoding types.

use chrono::{DateTime, Utc};
use ioskit_core::{NativeError, PermissionState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocationAccuracy {
    Best,
    BestForNavigation,
    NearestTenMeters,
    HundredMeters,
    Kilometer,
    ThreeKilometers,
    Reduced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocationEventType {
    LocationUpdate,
    HeadingUpdate,
    RegionEntered,
    RegionExited,
    AuthorizationChanged,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPermissions {
    pub when_in_use: PermissionState,
    pub always: PermissionState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRequest {
    pub accuracy: LocationAccuracy,
    /// Ask for "always" rather than "when in use".
    pub background: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<LocationAccuracy>,
    /// Metres moved before a new update is delivered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_filter: Option<f64>,
    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    /// Milliseconds a cached fix may be reused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_age: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_high_accuracy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_background_location_indicator: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    pub level: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationData {
    pub coordinates: Coordinates,
    pub altitude: Option<f64>,
    /// Horizontal accuracy in metres.
    pub accuracy: f64,
    pub altitude_accuracy: Option<f64>,
    pub heading: Option<f64>,
    pub speed: Option<f64>,
    pub timestamp: DateTime<Utc>,
    pub floor: Option<Floor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub identifier: String,
    pub center: Coordinates,
    /// Metres.
    pub radius: f64,
    pub notify_on_entry: bool,
    pub notify_on_exit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
    pub magnetic_heading: f64,
    pub true_heading: f64,
    pub heading_accuracy: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placemark {
    pub name: Option<String>,
    pub thoroughfare: Option<String>,
    pub sub_thoroughfare: Option<String>,
    pub locality: Option<String>,
    pub sub_locality: Option<String>,
    pub administrative_area: Option<String>,
    pub sub_administrative_area: Option<String>,
    pub postal_code: Option<String>,
    pub iso_country_code: Option<String>,
    pub country: Option<String>,
    pub inland_water: Option<String>,
    pub ocean: Option<String>,
    #[serde(default)]
    pub areas_of_interest: Vec<String>,
    pub formatted_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodingResult {
    pub coordinates: Coordinates,
    pub placemark: Placemark,
}

/// Identifies the monitored region an entry/exit event refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCrossing {
    pub identifier: String,
}

/// Location event. Unlike other plugins these carry no envelope timestamp;
/// location and heading payloads hold their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "eventType", content = "data", rename_all = "camelCase")]
pub enum LocationEvent {
    LocationUpdate(LocationData),
    HeadingUpdate(Heading),
    RegionEntered(RegionCrossing),
    RegionExited(RegionCrossing),
    AuthorizationChanged(LocationPermissions),
    Error(NativeError),
}

impl LocationEvent {
    pub fn event_type(&self) -> LocationEventType {
        match self {
            Self::LocationUpdate(_) => LocationEventType::LocationUpdate,
            Self::HeadingUpdate(_) => LocationEventType::HeadingUpdate,
            Self::RegionEntered(_) => LocationEventType::RegionEntered,
            Self::RegionExited(_) => LocationEventType::RegionExited,
            Self::AuthorizationChanged(_) => LocationEventType::AuthorizationChanged,
            Self::Error(_) => LocationEventType::Error,
        }
    }
}
