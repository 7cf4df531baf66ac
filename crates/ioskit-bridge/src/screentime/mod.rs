// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Screen Time: usage summaries and trends, app limits, downtime, app
// blocking and communication safety. Requires iOS 16 (FamilyControls).

pub mod models;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use ioskit_core::{iso8601, Args, BridgeConfig, Namespace, PluginClient, Result, Transport};

use crate::manifest::{PackageManifest, SwiftTools};

pub use models::*;

pub const NAMESPACE: Namespace = Namespace::versioned("ios-screentime", 2);

pub const COMMANDS: &[&str] = &[
    "request_authorization",
    "get_screen_time_summary",
    "get_app_usage",
    "get_category_usage",
    "get_web_usage",
    "get_device_activity",
    "get_notifications_summary",
    "get_pickups_summary",
    "set_app_limit",
    "get_app_limits",
    "remove_app_limit",
    "set_downtime_schedule",
    "get_downtime_schedule",
    "remove_downtime_schedule",
    "block_app",
    "unblock_app",
    "get_blocked_apps",
    "set_communication_safety",
    "get_communication_safety_settings",
    "get_screen_distance",
    "get_usage_trends",
    "export_usage_report",
];

pub const MANIFEST: PackageManifest = PackageManifest {
    package: "tauri-plugin-ios-screentime",
    min_ios: 16,
    swift_tools: SwiftTools::V5_7,
    namespace: NAMESPACE,
    commands: COMMANDS,
};

#[derive(Debug, Clone)]
pub struct ScreenTime {
    client: PluginClient,
}

impl ScreenTime {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, &BridgeConfig::default())
    }

    pub fn with_config(transport: Arc<dyn Transport>, config: &BridgeConfig) -> Self {
        Self {
            client: PluginClient::with_config(NAMESPACE, transport, config),
        }
    }

    /// `true` once FamilyControls authorization is granted.
    pub async fn request_authorization(&self) -> Result<bool> {
        self.client.invoke("request_authorization", Args::new()).await
    }

    /// Summary for the day containing `date`, today when `None`.
    pub async fn get_screen_time_summary(
        &self,
        date: Option<DateTime<Utc>>,
    ) -> Result<ScreenTimeSummary> {
        let args = Args::new().maybe("date", date.map(|d| iso8601::millis::format(&d)).as_deref())?;
        self.client.invoke("get_screen_time_summary", args).await
    }

    pub async fn get_app_usage(&self, range: Option<&TimeRange>) -> Result<Vec<AppUsageInfo>> {
        let args = Args::new().maybe("range", range)?;
        self.client.invoke("get_app_usage", args).await
    }

    pub async fn get_category_usage(
        &self,
        range: Option<&TimeRange>,
    ) -> Result<Vec<CategoryUsageInfo>> {
        let args = Args::new().maybe("range", range)?;
        self.client.invoke("get_category_usage", args).await
    }

    pub async fn get_web_usage(&self, range: Option<&TimeRange>) -> Result<Vec<WebUsageInfo>> {
        let args = Args::new().maybe("range", range)?;
        self.client.invoke("get_web_usage", args).await
    }

    pub async fn get_device_activity(
        &self,
        range: Option<&TimeRange>,
    ) -> Result<Vec<DeviceActivity>> {
        let args = Args::new().maybe("range", range)?;
        self.client.invoke("get_device_activity", args).await
    }

    pub async fn get_notifications_summary(
        &self,
        date: Option<DateTime<Utc>>,
    ) -> Result<NotificationsSummary> {
        let args = Args::new().maybe("date", date.map(|d| iso8601::millis::format(&d)).as_deref())?;
        self.client.invoke("get_notifications_summary", args).await
    }

    pub async fn get_pickups_summary(&self, date: Option<DateTime<Utc>>) -> Result<PickupsSummary> {
        let args = Args::new().maybe("date", date.map(|d| iso8601::millis::format(&d)).as_deref())?;
        self.client.invoke("get_pickups_summary", args).await
    }

    /// Returns the new limit's id.
    pub async fn set_app_limit(&self, request: &SetAppLimitRequest) -> Result<String> {
        let args = Args::new().with("request", request)?;
        self.client.invoke("set_app_limit", args).await
    }

    pub async fn get_app_limits(&self) -> Result<Vec<AppLimit>> {
        self.client.invoke("get_app_limits", Args::new()).await
    }

    pub async fn remove_app_limit(&self, limit_id: &str) -> Result<()> {
        let args = Args::new().with("limitId", limit_id)?;
        self.client.send("remove_app_limit", args).await
    }

    /// Returns the schedule id.
    pub async fn set_downtime_schedule(&self, request: &SetDowntimeRequest) -> Result<String> {
        let args = Args::new().with("request", request)?;
        self.client.invoke("set_downtime_schedule", args).await
    }

    pub async fn get_downtime_schedule(&self) -> Result<Option<DowntimeSchedule>> {
        self.client
            .invoke("get_downtime_schedule", Args::new())
            .await
    }

    pub async fn remove_downtime_schedule(&self, schedule_id: &str) -> Result<()> {
        let args = Args::new().with("scheduleId", schedule_id)?;
        self.client.send("remove_downtime_schedule", args).await
    }

    pub async fn block_app(&self, bundle_id: &str) -> Result<()> {
        let args = Args::new().with("bundleId", bundle_id)?;
        self.client.send("block_app", args).await
    }

    pub async fn unblock_app(&self, bundle_id: &str) -> Result<()> {
        let args = Args::new().with("bundleId", bundle_id)?;
        self.client.send("unblock_app", args).await
    }

    pub async fn get_blocked_apps(&self) -> Result<Vec<String>> {
        self.client.invoke("get_blocked_apps", Args::new()).await
    }

    pub async fn set_communication_safety(&self, settings: &CommunicationSafetySettings) -> Result<()> {
        let args = Args::new().with("settings", settings)?;
        self.client.send("set_communication_safety", args).await
    }

    pub async fn get_communication_safety_settings(&self) -> Result<CommunicationSafetySettings> {
        self.client
            .invoke("get_communication_safety_settings", Args::new())
            .await
    }

    pub async fn get_screen_distance(&self) -> Result<ScreenDistance> {
        self.client.invoke("get_screen_distance", Args::new()).await
    }

    pub async fn get_usage_trends(&self, period: TrendPeriod) -> Result<UsageTrend> {
        let args = Args::new().with("period", &period)?;
        self.client.invoke("get_usage_trends", args).await
    }

    /// Returns the path of the written report.
    pub async fn export_usage_report(
        &self,
        range: &TimeRange,
        format: &ExportFormat,
    ) -> Result<String> {
        let args = Args::new().with("range", range)?.with("format", format)?;
        self.client.invoke("export_usage_report", args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ioskit_core::mock::MockTransport;
    use serde_json::json;

    use crate::testing::assert_wire_table;

    fn setup() -> (Arc<MockTransport>, ScreenTime) {
        let mock = Arc::new(MockTransport::new());
        (mock.clone(), ScreenTime::new(mock))
    }

    #[tokio::test]
    async fn summary_defaults_to_today() {
        let (mock, screentime) = setup();
        mock.resolve(
            "plugin:ios-screentime-v2|get_screen_time_summary",
            json!({
                "date": "2024-09-09T00:00:00Z",
                "totalScreenTime": 14400.0,
                "totalPickups": 87,
                "mostUsedApp": {
                    "bundleId": "com.apple.mobilesafari",
                    "displayName": "Safari",
                    "duration": 3600.0,
                    "numberOfPickups": 12,
                    "numberOfNotifications": 0,
                    "category": "utilities"
                }
            }),
        )
        .await;

        let summary = screentime.get_screen_time_summary(None).await.unwrap();

        assert_eq!(summary.total_pickups, 87);
        assert_eq!(
            summary.most_used_app.map(|a| a.category),
            Some(AppCategory::Utilities)
        );
        assert_eq!(mock.single().await.args, json!({}));
    }

    #[tokio::test]
    async fn app_limit_request() {
        let (mock, screentime) = setup();
        mock.resolve("plugin:ios-screentime-v2|set_app_limit", json!("limit-1")).await;
        let request = SetAppLimitRequest {
            bundle_ids: vec!["com.example.game".into()],
            time_limit: 3600.0,
            days_of_week: DayOfWeek::WEEKDAYS.to_vec(),
        };

        let id = screentime.set_app_limit(&request).await.unwrap();

        assert_eq!(id, "limit-1");
        assert_eq!(
            mock.single().await.args,
            json!({ "request": {
                "bundleIds": ["com.example.game"],
                "timeLimit": 3600.0,
                "daysOfWeek": ["monday", "tuesday", "wednesday", "thursday", "friday"]
            }})
        );
    }

    #[tokio::test]
    async fn no_downtime_schedule() {
        let (mock, screentime) = setup();
        mock.resolve("plugin:ios-screentime-v2|get_downtime_schedule", json!(null))
            .await;

        assert_eq!(screentime.get_downtime_schedule().await.unwrap(), None);
    }

    #[tokio::test]
    async fn hourly_maps_use_numeric_keys() {
        let (mock, screentime) = setup();
        mock.resolve(
            "plugin:ios-screentime-v2|get_notifications_summary",
            json!({
                "totalNotifications": 5,
                "notificationsByApp": { "com.apple.MobileSMS": 5 },
                "notificationsByHour": { "9": 3, "17": 2 }
            }),
        )
        .await;

        let summary = screentime.get_notifications_summary(None).await.unwrap();

        assert_eq!(summary.notifications_by_hour[&9], 3);
        assert_eq!(summary.notifications_by_hour[&17], 2);
    }

    #[tokio::test]
    async fn export_report_sends_range_and_format() {
        let (mock, screentime) = setup();
        mock.resolve("plugin:ios-screentime-v2|export_usage_report", json!("/tmp/report.csv"))
            .await;
        let range = TimeRange {
            start: Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 9, 8, 0, 0, 0).unwrap(),
        };
        let format = ExportFormat {
            format: ReportFormat::Csv,
            include_charts: false,
        };

        screentime.export_usage_report(&range, &format).await.unwrap();

        assert_eq!(
            mock.single().await.args,
            json!({
                "range": { "start": "2024-09-01T00:00:00.000Z", "end": "2024-09-08T00:00:00.000Z" },
                "format": { "format": "csv", "includeCharts": false }
            })
        );
    }

    #[tokio::test]
    async fn every_command_reaches_the_wire() {
        let (mock, screentime) = setup();
        let day = Utc.with_ymd_and_hms(2024, 9, 9, 0, 0, 0).unwrap();
        let week = TimeRange {
            start: "2024-09-02T00:00:00Z".parse().unwrap(),
            end: "2024-09-08T23:59:59.25Z".parse().unwrap(),
        };
        let limit = SetAppLimitRequest {
            bundle_ids: vec!["com.example.game".into()],
            time_limit: 1800.0,
            days_of_week: vec![DayOfWeek::Saturday],
        };
        let downtime = SetDowntimeRequest {
            start_time: "22:00".into(),
            end_time: "07:00".into(),
            days_of_week: vec![DayOfWeek::Sunday],
            allowed_apps: vec!["com.apple.mobilephone".into()],
        };
        let safety = CommunicationSafetySettings {
            check_photos_and_videos: true,
            communication_safety_enabled: true,
            notification_settings: CommunicationNotificationSettings::default(),
        };
        let format = ExportFormat {
            format: ReportFormat::Json,
            include_charts: true,
        };

        let _ = screentime.request_authorization().await;
        let _ = screentime.get_screen_time_summary(Some(day)).await;
        let _ = screentime.get_app_usage(Some(&week)).await;
        let _ = screentime.get_category_usage(None).await;
        let _ = screentime.get_web_usage(None).await;
        let _ = screentime.get_device_activity(Some(&week)).await;
        let _ = screentime.get_notifications_summary(Some(day)).await;
        let _ = screentime.get_pickups_summary(None).await;
        let _ = screentime.set_app_limit(&limit).await;
        let _ = screentime.get_app_limits().await;
        let _ = screentime.remove_app_limit("limit-1").await;
        let _ = screentime.set_downtime_schedule(&downtime).await;
        let _ = screentime.get_downtime_schedule().await;
        let _ = screentime.remove_downtime_schedule("dt-1").await;
        let _ = screentime.block_app("com.example.game").await;
        let _ = screentime.unblock_app("com.example.game").await;
        let _ = screentime.get_blocked_apps().await;
        let _ = screentime.set_communication_safety(&safety).await;
        let _ = screentime.get_communication_safety_settings().await;
        let _ = screentime.get_screen_distance().await;
        let _ = screentime.get_usage_trends(TrendPeriod::Month).await;
        let _ = screentime.export_usage_report(&week, &format).await;

        let range = json!({ "start": "2024-09-02T00:00:00.000Z", "end": "2024-09-08T23:59:59.250Z" });
        assert_wire_table(
            &mock,
            &MANIFEST,
            &[
                ("request_authorization", json!({})),
                ("get_screen_time_summary", json!({ "date": "2024-09-09T00:00:00.000Z" })),
                ("get_app_usage", json!({ "range": range })),
                ("get_category_usage", json!({})),
                ("get_web_usage", json!({})),
                ("get_device_activity", json!({ "range": range })),
                ("get_notifications_summary", json!({ "date": "2024-09-09T00:00:00.000Z" })),
                ("get_pickups_summary", json!({})),
                (
                    "set_app_limit",
                    json!({ "request": {
                        "bundleIds": ["com.example.game"],
                        "timeLimit": 1800.0,
                        "daysOfWeek": ["saturday"]
                    } }),
                ),
                ("get_app_limits", json!({})),
                ("remove_app_limit", json!({ "limitId": "limit-1" })),
                (
                    "set_downtime_schedule",
                    json!({ "request": {
                        "startTime": "22:00",
                        "endTime": "07:00",
                        "daysOfWeek": ["sunday"],
                        "allowedApps": ["com.apple.mobilephone"]
                    } }),
                ),
                ("get_downtime_schedule", json!({})),
                ("remove_downtime_schedule", json!({ "scheduleId": "dt-1" })),
                ("block_app", json!({ "bundleId": "com.example.game" })),
                ("unblock_app", json!({ "bundleId": "com.example.game" })),
                ("get_blocked_apps", json!({})),
                (
                    "set_communication_safety",
                    json!({ "settings": {
                        "checkPhotosAndVideos": true,
                        "communicationSafetyEnabled": true,
                        "notificationSettings": { "notifyChild": false, "notifyParent": false }
                    } }),
                ),
                ("get_communication_safety_settings", json!({})),
                ("get_screen_distance", json!({})),
                ("get_usage_trends", json!({ "period": "month" })),
                (
                    "export_usage_report",
                    json!({ "range": range, "format": { "format": "json", "includeCharts": true } }),
                ),
            ],
        )
        .await;
    }
}
