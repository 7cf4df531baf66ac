// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Siri Shortcuts and App Intents types.

use chrono::{DateTime, Utc};
use ioskit_core::iso8601;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form dictionary carried through `NSUserActivity.userInfo` and intent
/// outputs.
pub type UserInfo = Map<String, Value>;

/// Known categories travel as a bare string; [`IntentCategory::Custom`] is
/// `{ "custom": "<name>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntentCategory {
    Information,
    Play,
    Order,
    Message,
    Call,
    Search,
    Create,
    Share,
    Toggle,
    Download,
    Custom(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterType {
    String,
    Number,
    Boolean,
    Date,
    Duration,
    Location,
    Person,
    File,
    Custom(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PredictionReason {
    TimeOfDay,
    Location,
    UserBehavior,
    RecentUsage,
    ContextualRelevance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShortcutEventType {
    Invoked,
    Added,
    Updated,
    Deleted,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortcut {
    pub identifier: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_invocation_phrase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_eligible_for_search: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_eligible_for_prediction: Option<bool>,
    pub user_activity_type: String,
    #[serde(default)]
    pub user_info: UserInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent_identifier: Option<String>,
}

impl Shortcut {
    pub fn new(
        identifier: impl Into<String>,
        title: impl Into<String>,
        activity_type: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            suggested_invocation_phrase: None,
            is_eligible_for_search: None,
            is_eligible_for_prediction: None,
            user_activity_type: activity_type.into(),
            user_info: UserInfo::new(),
            persistent_identifier: None,
        }
    }
}

/// One of an SF Symbol name, a bundled template image, or base64 data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentParameter {
    pub name: String,
    pub value: Value,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub identifier: String,
    pub display_name: String,
    pub category: IntentCategory,
    #[serde(default)]
    pub parameters: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_invocation_phrase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<IntentImage>,
}

impl Intent {
    /// Decodes the named parameter, `None` if absent or malformed.
    pub fn parameter(&self, name: &str) -> Option<IntentParameter> {
        self.parameters
            .get(name)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    pub fn set_parameter(&mut self, parameter: IntentParameter) -> serde_json::Result<()> {
        let value = serde_json::to_value(&parameter)?;
        self.parameters.insert(parameter.name, value);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub intent: Intent,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "iso8601::seconds::option")]
    pub donation_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<Shortcut>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceShortcut {
    pub identifier: String,
    pub invocation_phrase: String,
    pub shortcut: Shortcut,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserActivity {
    pub activity_type: String,
    pub title: String,
    #[serde(default)]
    pub user_info: UserInfo,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_eligible_for_search: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_eligible_for_public_indexing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_eligible_for_handoff: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_eligible_for_prediction: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_attributes: Option<ContentAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_user_info_keys: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutSuggestion {
    pub intent: Intent,
    pub suggested_phrase: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterOption {
    pub identifier: String,
    pub display_name: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDefinition {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub parameter_type: ParameterType,
    pub is_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default)]
    pub options: Vec<ParameterOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppIntent {
    pub identifier: String,
    pub display_name: String,
    pub description: String,
    pub category: IntentCategory,
    #[serde(default)]
    pub parameter_definitions: Vec<ParameterDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_template: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentResponse {
    pub success: bool,
    pub user_activity: Option<UserActivity>,
    #[serde(default)]
    pub output: Map<String, Value>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonatedIntent {
    pub identifier: String,
    pub intent: Intent,
    pub donation_date: DateTime<Utc>,
    pub interaction_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentPrediction {
    pub intent: Intent,
    /// 0.0 to 1.0.
    pub confidence: f64,
    pub reason: PredictionReason,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutEvent {
    pub event_type: ShortcutEventType,
    pub shortcut_identifier: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub user_info: UserInfo,
}
