// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Motion: accelerometer, gyroscope, magnetometer, device motion, activity
// recognition, pedometer and altimeter.

pub mod models;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use ioskit_core::{iso8601, Args, BridgeConfig, Namespace, PluginClient, Result, Transport};

use crate::manifest::{PackageManifest, SwiftTools};

pub use models::*;

pub const NAMESPACE: Namespace = Namespace::versioned("ios-motion", 2);

pub const COMMANDS: &[&str] = &[
    "start_accelerometer_updates",
    "stop_accelerometer_updates",
    "get_accelerometer_data",
    "start_gyroscope_updates",
    "stop_gyroscope_updates",
    "get_gyroscope_data",
    "start_magnetometer_updates",
    "stop_magnetometer_updates",
    "get_magnetometer_data",
    "start_device_motion_updates",
    "stop_device_motion_updates",
    "get_device_motion_data",
    "set_update_interval",
    "is_accelerometer_available",
    "is_gyroscope_available",
    "is_magnetometer_available",
    "is_device_motion_available",
    "get_motion_activity",
    "start_activity_updates",
    "stop_activity_updates",
    "query_activity_history",
    "start_pedometer_updates",
    "stop_pedometer_updates",
    "get_pedometer_data",
    "is_pedometer_available",
    "is_step_counting_available",
    "is_distance_available",
    "is_floor_counting_available",
    "get_altimeter_data",
    "start_altimeter_updates",
    "stop_altimeter_updates",
    "is_relative_altitude_available",
];

pub const MANIFEST: PackageManifest = PackageManifest {
    package: "tauri-plugin-ios-motion",
    min_ios: 13,
    swift_tools: SwiftTools::V5_7,
    namespace: NAMESPACE,
    commands: COMMANDS,
};

#[derive(Debug, Clone)]
pub struct Motion {
    client: PluginClient,
}

impl Motion {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, &BridgeConfig::default())
    }

    pub fn with_config(transport: Arc<dyn Transport>, config: &BridgeConfig) -> Self {
        Self {
            client: PluginClient::with_config(NAMESPACE, transport, config),
        }
    }

    async fn control(&self, command: &str) -> Result<()> {
        self.client.send(command, Args::new()).await
    }

    async fn availability(&self, command: &str) -> Result<bool> {
        self.client.invoke(command, Args::new()).await
    }

    // -- Accelerometer --------------------------------------------------------

    pub async fn start_accelerometer_updates(&self) -> Result<()> {
        self.control("start_accelerometer_updates").await
    }

    pub async fn stop_accelerometer_updates(&self) -> Result<()> {
        self.control("stop_accelerometer_updates").await
    }

    pub async fn get_accelerometer_data(&self) -> Result<AccelerometerData> {
        self.client
            .invoke("get_accelerometer_data", Args::new())
            .await
    }

    pub async fn is_accelerometer_available(&self) -> Result<bool> {
        self.availability("is_accelerometer_available").await
    }

    // -- Gyroscope ------------------------------------------------------------

    pub async fn start_gyroscope_updates(&self) -> Result<()> {
        self.control("start_gyroscope_updates").await
    }

    pub async fn stop_gyroscope_updates(&self) -> Result<()> {
        self.control("stop_gyroscope_updates").await
    }

    pub async fn get_gyroscope_data(&self) -> Result<GyroscopeData> {
        self.client.invoke("get_gyroscope_data", Args::new()).await
    }

    pub async fn is_gyroscope_available(&self) -> Result<bool> {
        self.availability("is_gyroscope_available").await
    }

    // -- Magnetometer ---------------------------------------------------------

    pub async fn start_magnetometer_updates(&self) -> Result<()> {
        self.control("start_magnetometer_updates").await
    }

    pub async fn stop_magnetometer_updates(&self) -> Result<()> {
        self.control("stop_magnetometer_updates").await
    }

    pub async fn get_magnetometer_data(&self) -> Result<MagnetometerData> {
        self.client
            .invoke("get_magnetometer_data", Args::new())
            .await
    }

    pub async fn is_magnetometer_available(&self) -> Result<bool> {
        self.availability("is_magnetometer_available").await
    }

    // -- Device motion --------------------------------------------------------

    pub async fn start_device_motion_updates(&self) -> Result<()> {
        self.control("start_device_motion_updates").await
    }

    pub async fn stop_device_motion_updates(&self) -> Result<()> {
        self.control("stop_device_motion_updates").await
    }

    pub async fn get_device_motion_data(&self) -> Result<DeviceMotionData> {
        self.client
            .invoke("get_device_motion_data", Args::new())
            .await
    }

    pub async fn is_device_motion_available(&self) -> Result<bool> {
        self.availability("is_device_motion_available").await
    }

    pub async fn set_update_interval(&self, intervals: &MotionUpdateInterval) -> Result<()> {
        let args = Args::new().with("intervals", intervals)?;
        self.client.send("set_update_interval", args).await
    }

    // -- Activity -------------------------------------------------------------

    pub async fn get_motion_activity(&self) -> Result<MotionActivity> {
        self.client.invoke("get_motion_activity", Args::new()).await
    }

    pub async fn start_activity_updates(&self) -> Result<()> {
        self.control("start_activity_updates").await
    }

    pub async fn stop_activity_updates(&self) -> Result<()> {
        self.control("stop_activity_updates").await
    }

    pub async fn query_activity_history(&self, query: &ActivityQuery) -> Result<Vec<MotionActivity>> {
        let args = Args::new().with("query", query)?;
        self.client.invoke("query_activity_history", args).await
    }

    // -- Pedometer ------------------------------------------------------------

    pub async fn start_pedometer_updates(&self) -> Result<()> {
        self.control("start_pedometer_updates").await
    }

    pub async fn stop_pedometer_updates(&self) -> Result<()> {
        self.control("stop_pedometer_updates").await
    }

    pub async fn get_pedometer_data(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<PedometerData> {
        let args = Args::new()
            .with("startDate", &iso8601::seconds::format(&start_date))?
            .with("endDate", &iso8601::seconds::format(&end_date))?;
        self.client.invoke("get_pedometer_data", args).await
    }

    pub async fn is_pedometer_available(&self) -> Result<bool> {
        self.availability("is_pedometer_available").await
    }

    pub async fn is_step_counting_available(&self) -> Result<bool> {
        self.availability("is_step_counting_available").await
    }

    pub async fn is_distance_available(&self) -> Result<bool> {
        self.availability("is_distance_available").await
    }

    pub async fn is_floor_counting_available(&self) -> Result<bool> {
        self.availability("is_floor_counting_available").await
    }

    // -- Altimeter ------------------------------------------------------------

    pub async fn get_altimeter_data(&self) -> Result<AltimeterData> {
        self.client.invoke("get_altimeter_data", Args::new()).await
    }

    pub async fn start_altimeter_updates(&self) -> Result<()> {
        self.control("start_altimeter_updates").await
    }

    pub async fn stop_altimeter_updates(&self) -> Result<()> {
        self.control("stop_altimeter_updates").await
    }

    pub async fn is_relative_altitude_available(&self) -> Result<bool> {
        self.availability("is_relative_altitude_available").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ioskit_core::decode_event;
    use ioskit_core::mock::MockTransport;
    use serde_json::json;

    use crate::testing::assert_wire_table;

    fn setup() -> (Arc<MockTransport>, Motion) {
        let mock = Arc::new(MockTransport::new());
        (mock.clone(), Motion::new(mock))
    }

    #[tokio::test]
    async fn control_commands_send_empty_object() {
        let (mock, motion) = setup();

        motion.start_accelerometer_updates().await.unwrap();
        motion.stop_accelerometer_updates().await.unwrap();

        let commands = mock.commands().await;
        assert_eq!(
            commands,
            vec![
                "plugin:ios-motion-v2|start_accelerometer_updates",
                "plugin:ios-motion-v2|stop_accelerometer_updates",
            ]
        );
        assert!(mock.invocations().await.iter().all(|c| c.args == json!({})));
    }

    #[tokio::test]
    async fn pedometer_range_drops_fractional_seconds() {
        let (mock, motion) = setup();
        mock.resolve(
            "plugin:ios-motion-v2|get_pedometer_data",
            json!({
                "startDate": "2024-07-01T00:00:00Z",
                "endDate": "2024-07-01T23:59:59Z",
                "numberOfSteps": 10234,
                "distance": 7420.5
            }),
        )
        .await;

        let data = motion
            .get_pedometer_data(
                Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap(),
                "2024-07-01T23:59:59.999Z".parse().unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(data.number_of_steps, 10234);
        assert_eq!(data.floors_ascended, None);
        assert_eq!(
            mock.single().await.args,
            json!({ "startDate": "2024-07-01T00:00:00Z", "endDate": "2024-07-01T23:59:59Z" })
        );
    }

    #[tokio::test]
    async fn partial_update_interval() {
        let (mock, motion) = setup();
        let intervals = MotionUpdateInterval {
            gyroscope: Some(0.01),
            ..Default::default()
        };

        motion.set_update_interval(&intervals).await.unwrap();

        assert_eq!(
            mock.single().await.args,
            json!({ "intervals": { "gyroscope": 0.01 } })
        );
    }

    #[tokio::test]
    async fn availability_queries_decode_flags() {
        let (mock, motion) = setup();
        mock.resolve("plugin:ios-motion-v2|is_floor_counting_available", json!(false))
            .await;

        assert!(!motion.is_floor_counting_available().await.unwrap());
    }

    #[test]
    fn accelerometer_event_decodes() {
        let event: MotionEvent = decode_event(json!({
            "eventType": "accelerometerUpdate",
            "data": { "x": 0.01, "y": -0.98, "z": 0.12, "timestamp": "2024-07-01T10:00:00Z" }
        }))
        .unwrap();

        match event.payload {
            MotionEventData::AccelerometerUpdate(data) => assert_eq!(data.y, -0.98),
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn error_event_keeps_message() {
        let event: MotionEvent = decode_event(json!({
            "eventType": "error",
            "data": "Accelerometer not available"
        }))
        .unwrap();

        match event.payload {
            MotionEventData::Error(err) => assert_eq!(err.payload(), &json!("Accelerometer not available")),
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[tokio::test]
    async fn every_command_reaches_the_wire() {
        let (mock, motion) = setup();
        let query = ActivityQuery {
            start_date: "2024-07-01T06:00:00.250Z".parse().unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 7, 1, 18, 0, 0).unwrap(),
        };
        let day_start = Utc.with_ymd_and_hms(2024, 7, 2, 0, 0, 0).unwrap();
        let day_end = Utc.with_ymd_and_hms(2024, 7, 3, 0, 0, 0).unwrap();

        let _ = motion.start_accelerometer_updates().await;
        let _ = motion.stop_accelerometer_updates().await;
        let _ = motion.get_accelerometer_data().await;
        let _ = motion.start_gyroscope_updates().await;
        let _ = motion.stop_gyroscope_updates().await;
        let _ = motion.get_gyroscope_data().await;
        let _ = motion.start_magnetometer_updates().await;
        let _ = motion.stop_magnetometer_updates().await;
        let _ = motion.get_magnetometer_data().await;
        let _ = motion.start_device_motion_updates().await;
        let _ = motion.stop_device_motion_updates().await;
        let _ = motion.get_device_motion_data().await;
        let _ = motion.set_update_interval(&MotionUpdateInterval::uniform(0.1)).await;
        let _ = motion.is_accelerometer_available().await;
        let _ = motion.is_gyroscope_available().await;
        let _ = motion.is_magnetometer_available().await;
        let _ = motion.is_device_motion_available().await;
        let _ = motion.get_motion_activity().await;
        let _ = motion.start_activity_updates().await;
        let _ = motion.stop_activity_updates().await;
        let _ = motion.query_activity_history(&query).await;
        let _ = motion.start_pedometer_updates().await;
        let _ = motion.stop_pedometer_updates().await;
        let _ = motion.get_pedometer_data(day_start, day_end).await;
        let _ = motion.is_pedometer_available().await;
        let _ = motion.is_step_counting_available().await;
        let _ = motion.is_distance_available().await;
        let _ = motion.is_floor_counting_available().await;
        let _ = motion.get_altimeter_data().await;
        let _ = motion.start_altimeter_updates().await;
        let _ = motion.stop_altimeter_updates().await;
        let _ = motion.is_relative_altitude_available().await;

        assert_wire_table(
            &mock,
            &MANIFEST,
            &[
                ("start_accelerometer_updates", json!({})),
                ("stop_accelerometer_updates", json!({})),
                ("get_accelerometer_data", json!({})),
                ("start_gyroscope_updates", json!({})),
                ("stop_gyroscope_updates", json!({})),
                ("get_gyroscope_data", json!({})),
                ("start_magnetometer_updates", json!({})),
                ("stop_magnetometer_updates", json!({})),
                ("get_magnetometer_data", json!({})),
                ("start_device_motion_updates", json!({})),
                ("stop_device_motion_updates", json!({})),
                ("get_device_motion_data", json!({})),
                (
                    "set_update_interval",
                    json!({ "intervals": {
                        "accelerometer": 0.1,
                        "gyroscope": 0.1,
                        "magnetometer": 0.1,
                        "deviceMotion": 0.1
                    }}),
                ),
                ("is_accelerometer_available", json!({})),
                ("is_gyroscope_available", json!({})),
                ("is_magnetometer_available", json!({})),
                ("is_device_motion_available", json!({})),
                ("get_motion_activity", json!({})),
                ("start_activity_updates", json!({})),
                ("stop_activity_updates", json!({})),
                (
                    "query_activity_history",
                    json!({ "query": {
                        "startDate": "2024-07-01T06:00:00Z",
                        "endDate": "2024-07-01T18:00:00Z"
                    }}),
                ),
                ("start_pedometer_updates", json!({})),
                ("stop_pedometer_updates", json!({})),
                (
                    "get_pedometer_data",
                    json!({ "startDate": "2024-07-02T00:00:00Z", "endDate": "2024-07-03T00:00:00Z" }),
                ),
                ("is_pedometer_available", json!({})),
                ("is_step_counting_available", json!({})),
                ("is_distance_available", json!({})),
                ("is_floor_counting_available", json!({})),
                ("get_altimeter_data", json!({})),
                ("start_altimeter_updates", json!({})),
                ("stop_altimeter_updates", json!({})),
                ("is_relative_altitude_available", json!({})),
            ],
        )
        .await;
    }
}
