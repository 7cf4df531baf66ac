// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Screen Time types: usage reports, limits, downtime, communication safety.
//
// Durations are seconds.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use ioskit_core::iso8601;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppCategory {
    Social,
    Entertainment,
    Productivity,
    Education,
    Games,
    Health,
    Finance,
    Shopping,
    News,
    Travel,
    Utilities,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeviceEventType {
    ScreenOn,
    ScreenOff,
    AppOpen,
    AppClose,
    NotificationReceived,
    NotificationInteracted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    pub const WEEKDAYS: [DayOfWeek; 5] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
    ];

    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendPeriod {
    Week,
    Month,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Pdf,
    Csv,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUsageInfo {
    pub bundle_id: String,
    pub display_name: String,
    pub duration: f64,
    pub number_of_pickups: u32,
    pub number_of_notifications: u32,
    pub category: AppCategory,
    /// Base64 PNG.
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUsageInfo {
    pub category: AppCategory,
    pub duration: f64,
    pub number_of_apps: u32,
    /// Bundle ids.
    #[serde(default)]
    pub apps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenTimeSummary {
    pub date: DateTime<Utc>,
    pub total_screen_time: f64,
    pub total_pickups: u32,
    pub first_pickup: Option<DateTime<Utc>>,
    pub most_used_app: Option<AppUsageInfo>,
    pub most_used_category: Option<CategoryUsageInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebUsageInfo {
    pub domain: String,
    pub duration: f64,
    pub number_of_visits: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceActivity {
    pub timestamp: DateTime<Utc>,
    pub event_type: DeviceEventType,
    pub associated_app: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsSummary {
    pub total_notifications: u32,
    /// Bundle id → count.
    #[serde(default)]
    pub notifications_by_app: BTreeMap<String, u32>,
    /// Hour of day (0–23) → count.
    #[serde(default)]
    pub notifications_by_hour: BTreeMap<u8, u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupsSummary {
    pub total_pickups: u32,
    #[serde(default)]
    pub pickups_by_hour: BTreeMap<u8, u32>,
    pub average_time_between_pickups: f64,
    pub longest_session: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppLimit {
    pub id: String,
    pub bundle_ids: Vec<String>,
    pub time_limit: f64,
    pub days_of_week: Vec<DayOfWeek>,
    pub enabled: bool,
}

/// Wall-clock times are `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DowntimeSchedule {
    pub id: String,
    pub start_time: String,
    pub end_time: String,
    pub days_of_week: Vec<DayOfWeek>,
    #[serde(default)]
    pub allowed_apps: Vec<String>,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationNotificationSettings {
    pub notify_child: bool,
    pub notify_parent: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationSafetySettings {
    pub check_photos_and_videos: bool,
    pub communication_safety_enabled: bool,
    pub notification_settings: CommunicationNotificationSettings,
}

/// Distances in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenDistance {
    pub current_distance: f64,
    pub is_too_close: bool,
    pub recommended_distance: f64,
    pub duration_too_close: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageDataPoint {
    pub date: DateTime<Utc>,
    pub screen_time: f64,
    pub pickups: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageTrend {
    pub period: TrendPeriod,
    pub screen_time_trend: TrendDirection,
    pub pickups_trend: TrendDirection,
    /// Percent change over the period.
    pub screen_time_change: f64,
    pub pickups_change: f64,
    #[serde(default)]
    pub data_points: Vec<UsageDataPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    #[serde(with = "iso8601::millis")]
    pub start: DateTime<Utc>,
    #[serde(with = "iso8601::millis")]
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAppLimitRequest {
    pub bundle_ids: Vec<String>,
    pub time_limit: f64,
    pub days_of_week: Vec<DayOfWeek>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDowntimeRequest {
    pub start_time: String,
    pub end_time: String,
    pub days_of_week: Vec<DayOfWeek>,
    pub allowed_apps: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFormat {
    pub format: ReportFormat,
    pub include_charts: bool,
}
