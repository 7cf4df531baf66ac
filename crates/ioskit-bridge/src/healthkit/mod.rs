// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HealthKit: quantity, category and workout samples plus user
// characteristics.

pub mod models;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use ioskit_core::{iso8601, Args, BridgeConfig, Namespace, PluginClient, Result, Transport};

use crate::manifest::{PackageManifest, SwiftTools};

pub use models::*;

pub const NAMESPACE: Namespace = Namespace::new("ios-healthkit");

pub const COMMANDS: &[&str] = &[
    "check_permissions",
    "request_permissions",
    "query_quantity_samples",
    "query_category_samples",
    "query_workout_samples",
    "write_quantity_sample",
    "write_category_sample",
    "write_workout",
    "get_biological_sex",
    "get_date_of_birth",
    "get_blood_type",
];

pub const MANIFEST: PackageManifest = PackageManifest {
    package: "tauri-plugin-ios-healthkit",
    min_ios: 13,
    swift_tools: SwiftTools::V5_7,
    namespace: NAMESPACE,
    commands: COMMANDS,
};

#[derive(Debug, Clone)]
pub struct HealthKit {
    client: PluginClient,
}

impl HealthKit {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, &BridgeConfig::default())
    }

    pub fn with_config(transport: Arc<dyn Transport>, config: &BridgeConfig) -> Self {
        Self {
            client: PluginClient::with_config(NAMESPACE, transport, config),
        }
    }

    pub async fn check_permissions(&self) -> Result<PermissionStatus> {
        self.client.invoke("check_permissions", Args::new()).await
    }

    pub async fn request_permissions(
        &self,
        permissions: &PermissionRequest,
    ) -> Result<PermissionStatus> {
        let args = Args::new().with("permissions", permissions)?;
        self.client.invoke("request_permissions", args).await
    }

    pub async fn query_quantity_samples(&self, query: &QuantityQuery) -> Result<Vec<QuantitySample>> {
        let args = Args::new().with("query", query)?;
        self.client.invoke("query_quantity_samples", args).await
    }

    pub async fn query_category_samples(&self, query: &QuantityQuery) -> Result<Vec<CategorySample>> {
        let args = Args::new().with("query", query)?;
        self.client.invoke("query_category_samples", args).await
    }

    pub async fn query_workout_samples(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        limit: Option<u32>,
    ) -> Result<Vec<WorkoutSample>> {
        let args = Args::new()
            .with("startDate", &iso8601::millis::format(&start_date))?
            .with("endDate", &iso8601::millis::format(&end_date))?
            .maybe("limit", limit.as_ref())?;
        self.client.invoke("query_workout_samples", args).await
    }

    pub async fn write_quantity_sample(&self, sample: &QuantitySample) -> Result<()> {
        let args = Args::new().with("sample", sample)?;
        self.client.send("write_quantity_sample", args).await
    }

    pub async fn write_category_sample(&self, sample: &CategorySample) -> Result<()> {
        let args = Args::new().with("sample", sample)?;
        self.client.send("write_category_sample", args).await
    }

    pub async fn write_workout(&self, workout: &WorkoutSample) -> Result<()> {
        let args = Args::new().with("workout", workout)?;
        self.client.send("write_workout", args).await
    }

    pub async fn get_biological_sex(&self) -> Result<BiologicalSex> {
        self.client.invoke("get_biological_sex", Args::new()).await
    }

    /// Date of birth as the native side formats it (`YYYY-MM-DD`).
    pub async fn get_date_of_birth(&self) -> Result<String> {
        self.client.invoke("get_date_of_birth", Args::new()).await
    }

    pub async fn get_blood_type(&self) -> Result<BloodType> {
        self.client.invoke("get_blood_type", Args::new()).await
    }
}
