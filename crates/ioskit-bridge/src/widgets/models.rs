// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Home-screen widget types.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use ioskit_core::iso8601;
use ioskit_core::NativeError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetFamily {
    SystemSmall,
    SystemMedium,
    SystemLarge,
    SystemExtraLarge,
    AccessoryCircular,
    AccessoryRectangular,
    AccessoryInline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    UltraLight,
    Thin,
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontDesign {
    Default,
    Serif,
    Rounded,
    Monospaced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetEventType {
    Appeared,
    Disappeared,
    Tapped,
    TimelineReloaded,
    ConfigurationChanged,
    Error,
}

/// When WidgetKit should ask for the next timeline.
///
/// Wire form is a single-key object: `{ "atEnd": true }`,
/// `{ "after": "<ISO-8601>" }` or `{ "never": true }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "PolicyRepr", try_from = "PolicyRepr")]
pub enum TimelineReloadPolicy {
    AtEnd,
    After(DateTime<Utc>),
    Never,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
enum PolicyRepr {
    AtEnd(bool),
    After(#[serde(with = "iso8601::seconds")] DateTime<Utc>),
    Never(bool),
}

impl From<TimelineReloadPolicy> for PolicyRepr {
    fn from(policy: TimelineReloadPolicy) -> Self {
        match policy {
            TimelineReloadPolicy::AtEnd => Self::AtEnd(true),
            TimelineReloadPolicy::After(date) => Self::After(date),
            TimelineReloadPolicy::Never => Self::Never(true),
        }
    }
}

impl TryFrom<PolicyRepr> for TimelineReloadPolicy {
    type Error = String;

    fn try_from(repr: PolicyRepr) -> Result<Self, Self::Error> {
        match repr {
            PolicyRepr::AtEnd(true) => Ok(Self::AtEnd),
            PolicyRepr::After(date) => Ok(Self::After(date)),
            PolicyRepr::Never(true) => Ok(Self::Never),
            PolicyRepr::AtEnd(false) | PolicyRepr::Never(false) => {
                Err("reload policy flag must be true".to_owned())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfiguration {
    pub kind: String,
    pub family: WidgetFamily,
    pub intent_configuration: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetFont {
    pub size: f64,
    pub weight: FontWeight,
    pub design: FontDesign,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Base64 or asset name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    /// Hex colour, e.g. `#FF9500`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tint_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<WidgetFont>,
    #[serde(default)]
    pub custom_data: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetRelevance {
    pub score: f64,
    /// Seconds.
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetData {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<WidgetFamily>,
    pub content: WidgetContent,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "iso8601::seconds::option")]
    pub refresh_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "iso8601::seconds::option")]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance: Option<WidgetRelevance>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetInfo {
    pub bundle_identifier: String,
    pub display_name: String,
    pub description: String,
    pub supported_families: Vec<WidgetFamily>,
    pub configuration_display_name: Option<String>,
    #[serde(default)]
    pub custom_intents: Vec<String>,
}

/// Deep link opened when the widget is tapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetUrl {
    pub scheme: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default)]
    pub query_parameters: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetPreview {
    pub family: WidgetFamily,
    pub display_name: String,
    pub description: String,
    /// Base64 PNG.
    pub preview_image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshInterval {
    #[serde(with = "iso8601::seconds")]
    pub start_date: DateTime<Utc>,
    pub interval_seconds: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetRefreshSchedule {
    pub widget_kind: String,
    pub refresh_intervals: Vec<RefreshInterval>,
}

/// Widget lifecycle payload, keyed by [`WidgetEventType`]. Lifecycle events
/// carry no data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "eventType", content = "data", rename_all = "camelCase")]
pub enum WidgetEventData {
    Appeared,
    Disappeared,
    Tapped,
    TimelineReloaded,
    ConfigurationChanged(WidgetConfiguration),
    Error(NativeError),
}

impl WidgetEventData {
    pub fn event_type(&self) -> WidgetEventType {
        match self {
            Self::Appeared => WidgetEventType::Appeared,
            Self::Disappeared => WidgetEventType::Disappeared,
            Self::Tapped => WidgetEventType::Tapped,
            Self::TimelineReloaded => WidgetEventType::TimelineReloaded,
            Self::ConfigurationChanged(_) => WidgetEventType::ConfigurationChanged,
            Self::Error(_) => WidgetEventType::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetEvent {
    #[serde(flatten)]
    pub payload: WidgetEventData,
    pub widget_kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget_family: Option<WidgetFamily>,
    pub timestamp: DateTime<Utc>,
}
