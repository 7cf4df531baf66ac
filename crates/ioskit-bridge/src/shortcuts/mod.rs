// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shortcuts: Siri shortcut donation, voice shortcuts, App Intents and
// prediction.

pub mod models;

use std::sync::Arc;

use ioskit_core::{Args, BridgeConfig, Namespace, PluginClient, Result, Transport};
use serde_json::{Map, Value};

use crate::manifest::{PackageManifest, SwiftTools};

pub use models::*;

pub const NAMESPACE: Namespace = Namespace::versioned("ios-shortcuts", 2);

pub const COMMANDS: &[&str] = &[
    "donate_interaction",
    "donate_shortcut",
    "get_all_shortcuts",
    "delete_shortcut",
    "delete_all_shortcuts",
    "get_voice_shortcuts",
    "suggest_phrase",
    "handle_user_activity",
    "update_shortcut",
    "get_shortcut_suggestions",
    "set_shortcut_suggestions",
    "create_app_intent",
    "register_app_intents",
    "handle_intent",
    "get_donated_intents",
    "delete_donated_intents",
    "set_eligible_for_prediction",
    "get_predictions",
];

pub const MANIFEST: PackageManifest = PackageManifest {
    package: "tauri-plugin-ios-shortcuts",
    min_ios: 13,
    swift_tools: SwiftTools::V5_7,
    namespace: NAMESPACE,
    commands: COMMANDS,
};

#[derive(Debug, Clone)]
pub struct Shortcuts {
    client: PluginClient,
}

impl Shortcuts {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, &BridgeConfig::default())
    }

    pub fn with_config(transport: Arc<dyn Transport>, config: &BridgeConfig) -> Self {
        Self {
            client: PluginClient::with_config(NAMESPACE, transport, config),
        }
    }

    pub async fn donate_interaction(&self, interaction: &Interaction) -> Result<()> {
        let args = Args::new().with("interaction", interaction)?;
        self.client.send("donate_interaction", args).await
    }

    pub async fn donate_shortcut(&self, shortcut: &Shortcut) -> Result<()> {
        let args = Args::new().with("shortcut", shortcut)?;
        self.client.send("donate_shortcut", args).await
    }

    pub async fn get_all_shortcuts(&self) -> Result<Vec<Shortcut>> {
        self.client.invoke("get_all_shortcuts", Args::new()).await
    }

    pub async fn delete_shortcut(&self, identifier: &str) -> Result<()> {
        let args = Args::new().with("identifier", identifier)?;
        self.client.send("delete_shortcut", args).await
    }

    pub async fn delete_all_shortcuts(&self) -> Result<()> {
        self.client.send("delete_all_shortcuts", Args::new()).await
    }

    pub async fn get_voice_shortcuts(&self) -> Result<Vec<VoiceShortcut>> {
        self.client.invoke("get_voice_shortcuts", Args::new()).await
    }

    pub async fn suggest_phrase(&self, shortcut_identifier: &str) -> Result<String> {
        let args = Args::new().with("shortcutIdentifier", shortcut_identifier)?;
        self.client.invoke("suggest_phrase", args).await
    }

    pub async fn handle_user_activity(&self, activity: &UserActivity) -> Result<()> {
        let args = Args::new().with("activity", activity)?;
        self.client.send("handle_user_activity", args).await
    }

    pub async fn update_shortcut(&self, shortcut: &Shortcut) -> Result<()> {
        let args = Args::new().with("shortcut", shortcut)?;
        self.client.send("update_shortcut", args).await
    }

    pub async fn get_shortcut_suggestions(&self) -> Result<Vec<ShortcutSuggestion>> {
        self.client
            .invoke("get_shortcut_suggestions", Args::new())
            .await
    }

    pub async fn set_shortcut_suggestions(&self, suggestions: &[ShortcutSuggestion]) -> Result<()> {
        let args = Args::new().with("suggestions", suggestions)?;
        self.client.send("set_shortcut_suggestions", args).await
    }

    /// Returns the registered intent identifier.
    pub async fn create_app_intent(&self, intent: &AppIntent) -> Result<String> {
        let args = Args::new().with("intent", intent)?;
        self.client.invoke("create_app_intent", args).await
    }

    pub async fn register_app_intents(&self, intents: &[AppIntent]) -> Result<()> {
        let args = Args::new().with("intents", intents)?;
        self.client.send("register_app_intents", args).await
    }

    pub async fn handle_intent(
        &self,
        intent_id: &str,
        parameters: &Map<String, Value>,
    ) -> Result<IntentResponse> {
        let args = Args::new()
            .with("intentId", intent_id)?
            .with("parameters", parameters)?;
        self.client.invoke("handle_intent", args).await
    }

    pub async fn get_donated_intents(&self) -> Result<Vec<DonatedIntent>> {
        self.client.invoke("get_donated_intents", Args::new()).await
    }

    pub async fn delete_donated_intents(&self, identifiers: &[String]) -> Result<()> {
        let args = Args::new().with("identifiers", identifiers)?;
        self.client.send("delete_donated_intents", args).await
    }

    pub async fn set_eligible_for_prediction(
        &self,
        intent_ids: &[String],
        eligible: bool,
    ) -> Result<()> {
        let args = Args::new()
            .with("intentIds", intent_ids)?
            .with("eligible", &eligible)?;
        self.client.send("set_eligible_for_prediction", args).await
    }

    pub async fn get_predictions(&self, limit: Option<u32>) -> Result<Vec<IntentPrediction>> {
        let args = Args::new().maybe("limit", limit.as_ref())?;
        self.client.invoke("get_predictions", args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ioskit_core::mock::MockTransport;
    use ioskit_core::{decode_event, BridgeError};
    use serde_json::json;

    use crate::testing::assert_wire_table;

    fn setup() -> (Arc<MockTransport>, Shortcuts) {
        let mock = Arc::new(MockTransport::new());
        (mock.clone(), Shortcuts::new(mock))
    }

    fn order_intent() -> Intent {
        Intent {
            identifier: "order-coffee".into(),
            display_name: "Order Coffee".into(),
            category: IntentCategory::Order,
            parameters: Map::new(),
            suggested_invocation_phrase: None,
            image: None,
        }
    }

    #[tokio::test]
    async fn donate_shortcut_omits_unset_fields() {
        let (mock, shortcuts) = setup();
        let shortcut = Shortcut::new("fav", "Favourite Order", "com.example.order");

        shortcuts.donate_shortcut(&shortcut).await.unwrap();

        let call = mock.single().await;
        assert_eq!(call.command, "plugin:ios-shortcuts-v2|donate_shortcut");
        assert_eq!(
            call.args,
            json!({ "shortcut": {
                "identifier": "fav",
                "title": "Favourite Order",
                "userActivityType": "com.example.order",
                "userInfo": {}
            }})
        );
    }

    #[test]
    fn custom_category_wire_form() {
        let mut intent = order_intent();
        intent.category = IntentCategory::Custom("brewing".into());

        let value = serde_json::to_value(&intent).unwrap();

        assert_eq!(value["category"], json!({ "custom": "brewing" }));
        assert_eq!(
            serde_json::to_value(IntentCategory::Download).unwrap(),
            json!("download")
        );
        let decoded: ParameterType = serde_json::from_value(json!({ "custom": "colour" })).unwrap();
        assert_eq!(decoded, ParameterType::Custom("colour".into()));
    }

    #[test]
    fn intent_parameters_round_trip() {
        let mut intent = order_intent();
        intent
            .set_parameter(IntentParameter {
                name: "size".into(),
                value: json!("large"),
                display_name: "Size".into(),
                prompt: None,
            })
            .unwrap();

        let size = intent.parameter("size").unwrap();
        assert_eq!(size.value, json!("large"));
        assert!(intent.parameter("milk").is_none());
    }

    #[tokio::test]
    async fn handle_intent_args_and_response() {
        let (mock, shortcuts) = setup();
        mock.resolve(
            "plugin:ios-shortcuts-v2|handle_intent",
            json!({ "success": true, "output": { "orderId": 17 } }),
        )
        .await;
        let mut parameters = Map::new();
        parameters.insert("size".into(), json!("large"));

        let response = shortcuts
            .handle_intent("order-coffee", &parameters)
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.output["orderId"], json!(17));
        assert_eq!(
            mock.single().await.args,
            json!({ "intentId": "order-coffee", "parameters": { "size": "large" } })
        );
    }

    #[tokio::test]
    async fn prediction_eligibility_and_limit() {
        let (mock, shortcuts) = setup();
        let ids = vec!["a".to_string(), "b".to_string()];

        shortcuts.set_eligible_for_prediction(&ids, true).await.unwrap();
        shortcuts.get_predictions(None).await.unwrap_or_default();
        shortcuts.get_predictions(Some(3)).await.unwrap_or_default();

        let calls = mock.invocations().await;
        assert_eq!(calls[0].args, json!({ "intentIds": ["a", "b"], "eligible": true }));
        assert_eq!(calls[1].args, json!({}));
        assert_eq!(calls[2].args, json!({ "limit": 3 }));
    }

    #[tokio::test]
    async fn rejection_is_passed_through() {
        let (mock, shortcuts) = setup();
        mock.reject(
            "plugin:ios-shortcuts-v2|suggest_phrase",
            json!({ "message": "Shortcut not found" }),
        )
        .await;

        let err = shortcuts.suggest_phrase("missing").await.unwrap_err();

        match err {
            BridgeError::Rejected(native) => {
                assert_eq!(native.payload(), &json!({ "message": "Shortcut not found" }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn shortcut_event_decodes() {
        let event: ShortcutEvent = decode_event(json!({
            "eventType": "invoked",
            "shortcutIdentifier": "fav",
            "timestamp": "2024-10-01T07:30:00Z",
            "userInfo": { "source": "siri" }
        }))
        .unwrap();

        assert_eq!(event.event_type, ShortcutEventType::Invoked);
        assert_eq!(event.user_info["source"], json!("siri"));
    }

    #[tokio::test]
    async fn every_command_reaches_the_wire() {
        let (mock, shortcuts) = setup();
        let intent = json!({
            "identifier": "order-coffee",
            "displayName": "Order Coffee",
            "category": "order",
            "parameters": {}
        });
        let shortcut = Shortcut::new("fav", "Favourite Order", "com.example.order");
        let shortcut_json = json!({
            "identifier": "fav",
            "title": "Favourite Order",
            "userActivityType": "com.example.order",
            "userInfo": {}
        });
        let interaction = Interaction {
            intent: order_intent(),
            donation_date: Some("2024-10-05T08:15:30.999Z".parse().unwrap()),
            shortcut: None,
        };
        let activity = UserActivity {
            activity_type: "com.example.view".into(),
            title: "View order".into(),
            user_info: Map::new(),
            keywords: vec!["coffee".into()],
            persistent_identifier: None,
            is_eligible_for_search: Some(true),
            is_eligible_for_public_indexing: None,
            is_eligible_for_handoff: None,
            is_eligible_for_prediction: None,
            content_attributes: None,
            required_user_info_keys: None,
        };
        let suggestion = ShortcutSuggestion {
            intent: order_intent(),
            suggested_phrase: "Coffee time".into(),
        };
        let app_intent = AppIntent {
            identifier: "reorder".into(),
            display_name: "Reorder".into(),
            description: "Repeat the last order".into(),
            category: IntentCategory::Order,
            parameter_definitions: Vec::new(),
            response_template: None,
        };
        let app_intent_json = json!({
            "identifier": "reorder",
            "displayName": "Reorder",
            "description": "Repeat the last order",
            "category": "order",
            "parameterDefinitions": []
        });

        let _ = shortcuts.donate_interaction(&interaction).await;
        let _ = shortcuts.donate_shortcut(&shortcut).await;
        let _ = shortcuts.get_all_shortcuts().await;
        let _ = shortcuts.delete_shortcut("fav").await;
        let _ = shortcuts.delete_all_shortcuts().await;
        let _ = shortcuts.get_voice_shortcuts().await;
        let _ = shortcuts.suggest_phrase("fav").await;
        let _ = shortcuts.handle_user_activity(&activity).await;
        let _ = shortcuts.update_shortcut(&shortcut).await;
        let _ = shortcuts.get_shortcut_suggestions().await;
        let _ = shortcuts.set_shortcut_suggestions(&[suggestion]).await;
        let _ = shortcuts.create_app_intent(&app_intent).await;
        let _ = shortcuts.register_app_intents(&[app_intent.clone()]).await;
        let _ = shortcuts.handle_intent("reorder", &Map::new()).await;
        let _ = shortcuts.get_donated_intents().await;
        let _ = shortcuts.delete_donated_intents(&["d-1".to_string()]).await;
        let _ = shortcuts.set_eligible_for_prediction(&["reorder".to_string()], true).await;
        let _ = shortcuts.get_predictions(Some(3)).await;

        assert_wire_table(
            &mock,
            &MANIFEST,
            &[
                (
                    "donate_interaction",
                    json!({ "interaction": {
                        "intent": intent,
                        "donationDate": "2024-10-05T08:15:30Z"
                    } }),
                ),
                ("donate_shortcut", json!({ "shortcut": shortcut_json })),
                ("get_all_shortcuts", json!({})),
                ("delete_shortcut", json!({ "identifier": "fav" })),
                ("delete_all_shortcuts", json!({})),
                ("get_voice_shortcuts", json!({})),
                ("suggest_phrase", json!({ "shortcutIdentifier": "fav" })),
                (
                    "handle_user_activity",
                    json!({ "activity": {
                        "activityType": "com.example.view",
                        "title": "View order",
                        "userInfo": {},
                        "keywords": ["coffee"],
                        "isEligibleForSearch": true
                    } }),
                ),
                ("update_shortcut", json!({ "shortcut": shortcut_json })),
                ("get_shortcut_suggestions", json!({})),
                (
                    "set_shortcut_suggestions",
                    json!({ "suggestions": [{ "intent": intent, "suggestedPhrase": "Coffee time" }] }),
                ),
                ("create_app_intent", json!({ "intent": app_intent_json })),
                ("register_app_intents", json!({ "intents": [app_intent_json] })),
                ("handle_intent", json!({ "intentId": "reorder", "parameters": {} })),
                ("get_donated_intents", json!({})),
                ("delete_donated_intents", json!({ "identifiers": ["d-1"] })),
                (
                    "set_eligible_for_prediction",
                    json!({ "intentIds": ["reorder"], "eligible": true }),
                ),
                ("get_predictions", json!({ "limit": 3 })),
            ],
        )
        .await;
    }
}
