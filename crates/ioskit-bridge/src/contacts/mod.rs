// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Contacts: address book records and groups.

pub mod models;

use std::sync::Arc;

use ioskit_core::{Args, BridgeConfig, Namespace, PluginClient, Result, Transport};

use crate::manifest::{PackageManifest, SwiftTools};

pub use models::*;

pub const NAMESPACE: Namespace = Namespace::new("ios-contacts");

pub const COMMANDS: &[&str] = &[
    "check_permissions",
    "request_permissions",
    "get_contacts",
    "get_contact",
    "create_contact",
    "update_contact",
    "delete_contact",
    "get_groups",
    "create_group",
    "add_contact_to_group",
    "remove_contact_from_group",
    "update_group",
    "delete_group",
];

pub const MANIFEST: PackageManifest = PackageManifest {
    package: "tauri-plugin-ios-contacts",
    min_ios: 13,
    swift_tools: SwiftTools::V5_7,
    namespace: NAMESPACE,
    commands: COMMANDS,
};

#[derive(Debug, Clone)]
pub struct Contacts {
    client: PluginClient,
}

impl Contacts {
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

    pub async fn request_permissions(&self) -> Result<PermissionStatus> {
        self.client.invoke("request_permissions", Args::new()).await
    }

    pub async fn get_contacts(&self, query: Option<&ContactQuery>) -> Result<Vec<Contact>> {
        let args = Args::new().maybe("query", query)?;
        self.client.invoke("get_contacts", args).await
    }

    pub async fn get_contact(&self, id: &str) -> Result<Contact> {
        let args = Args::new().with("id", id)?;
        self.client.invoke("get_contact", args).await
    }

    /// Returns the stored contact with its new id.
    pub async fn create_contact(&self, contact: &NewContact) -> Result<Contact> {
        let args = Args::new().with("contact", contact)?;
        self.client.invoke("create_contact", args).await
    }

    pub async fn update_contact(&self, contact: &Contact) -> Result<Contact> {
        let args = Args::new().with("contact", contact)?;
        self.client.invoke("update_contact", args).await
    }

    pub async fn delete_contact(&self, id: &str) -> Result<()> {
        let args = Args::new().with("id", id)?;
        self.client.send("delete_contact", args).await
    }

    pub async fn get_groups(&self) -> Result<Vec<ContactGroup>> {
        self.client.invoke("get_groups", Args::new()).await
    }

    pub async fn create_group(&self, name: &str) -> Result<ContactGroup> {
        let args = Args::new().with("name", name)?;
        self.client.invoke("create_group", args).await
    }

    pub async fn add_contact_to_group(&self, contact_id: &str, group_id: &str) -> Result<()> {
        let args = Args::new()
            .with("contactId", contact_id)?
            .with("groupId", group_id)?;
        self.client.send("add_contact_to_group", args).await
    }

    pub async fn remove_contact_from_group(&self, contact_id: &str, group_id: &str) -> Result<()> {
        let args = Args::new()
            .with("contactId", contact_id)?
            .with("groupId", group_id)?;
        self.client.send("remove_contact_from_group", args).await
    }

    /// Rename a group.
    pub async fn update_group(&self, group_id: &str, name: &str) -> Result<ContactGroup> {
        let args = Args::new().with("groupId", group_id)?.with("name", name)?;
        self.client.invoke("update_group", args).await
    }

    pub async fn delete_group(&self, group_id: &str) -> Result<()> {
        let args = Args::new().with("groupId", group_id)?;
        self.client.send("delete_group", args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ioskit_core::mock::MockTransport;
    use serde_json::json;

    use crate::testing::assert_wire_table;

    fn setup() -> (Arc<MockTransport>, Contacts) {
        let mock = Arc::new(MockTransport::new());
        (mock.clone(), Contacts::new(mock))
    }

    fn stored_contact() -> serde_json::Value {
        json!({
            "id": "410FE041-5C4E-48DA-B4DE-04C15EA3DBAC:ABPerson",
            "givenName": "Ada",
            "familyName": "Lovelace",
            "birthday": "--12-10",
            "phoneNumbers": [{ "label": "mobile", "value": "+44 20 7946 0000" }],
            "emailAddresses": [],
            "postalAddresses": [],
            "urlAddresses": [],
            "socialProfiles": [],
            "instantMessages": []
        })
    }

    #[tokio::test]
    async fn identifiers_are_passed_through() {
        let (mock, contacts) = setup();
        mock.resolve("plugin:ios-contacts|get_contact", stored_contact()).await;

        let contact = contacts
            .get_contact("410FE041-5C4E-48DA-B4DE-04C15EA3DBAC:ABPerson")
            .await
            .unwrap();

        assert_eq!(contact.id, "410FE041-5C4E-48DA-B4DE-04C15EA3DBAC:ABPerson");
        assert_eq!(contact.fields.given_name.as_deref(), Some("Ada"));
        assert_eq!(contact.fields.birthday.as_deref(), Some("--12-10"));
        assert_eq!(
            mock.single().await.args,
            json!({ "id": "410FE041-5C4E-48DA-B4DE-04C15EA3DBAC:ABPerson" })
        );
    }

    #[tokio::test]
    async fn update_round_trips_stored_contact() {
        let (mock, contacts) = setup();
        mock.resolve("plugin:ios-contacts|update_contact", stored_contact()).await;
        let contact: Contact = serde_json::from_value(stored_contact()).unwrap();

        let updated = contacts.update_contact(&contact).await.unwrap();

        assert_eq!(updated, contact);
        assert_eq!(mock.single().await.args, json!({ "contact": stored_contact() }));
    }

    #[tokio::test]
    async fn group_membership_uses_camel_case_keys() {
        let (mock, contacts) = setup();

        contacts.add_contact_to_group("c1", "g1").await.unwrap();
        contacts.remove_contact_from_group("c1", "g1").await.unwrap();

        let calls = mock.invocations().await;
        assert_eq!(calls[0].command, "plugin:ios-contacts|add_contact_to_group");
        assert_eq!(calls[0].args, json!({ "contactId": "c1", "groupId": "g1" }));
        assert_eq!(calls[1].command, "plugin:ios-contacts|remove_contact_from_group");
    }

    #[tokio::test]
    async fn query_serializes_sort_order_tag() {
        let (mock, contacts) = setup();
        mock.resolve("plugin:ios-contacts|get_contacts", json!([])).await;
        let query = ContactQuery {
            search_text: Some("Ada".into()),
            sort_order: Some(ContactSortOrder::FamilyName),
            ..Default::default()
        };

        contacts.get_contacts(Some(&query)).await.unwrap();

        assert_eq!(
            mock.single().await.args,
            json!({ "query": { "searchText": "Ada", "sortOrder": "familyName", "includeImages": false } })
        );
    }

    #[tokio::test]
    async fn new_contact_has_no_id() {
        let (mock, contacts) = setup();
        let mut created = stored_contact();
        created["id"] = json!("new-id");
        mock.resolve("plugin:ios-contacts|create_contact", created).await;
        let new_contact = NewContact {
            given_name: Some("Grace".into()),
            ..Default::default()
        };

        let contact = contacts.create_contact(&new_contact).await.unwrap();

        assert_eq!(contact.id, "new-id");
        let args = mock.single().await.args;
        assert!(args["contact"].get("id").is_none());
        assert_eq!(args["contact"]["givenName"], json!("Grace"));
        assert_eq!(args["contact"]["phoneNumbers"], json!([]));
    }

    #[tokio::test]
    async fn every_command_reaches_the_wire() {
        let (mock, contacts) = setup();
        let query = ContactQuery {
            search_text: Some("Ada".into()),
            include_images: false,
            ..ContactQuery::default()
        };
        let new_contact = NewContact {
            given_name: Some("Grace".into()),
            ..NewContact::default()
        };
        let stored: Contact = serde_json::from_value(stored_contact()).unwrap();

        let _ = contacts.check_permissions().await;
        let _ = contacts.request_permissions().await;
        let _ = contacts.get_contacts(Some(&query)).await;
        let _ = contacts.get_contact("c-1").await;
        let _ = contacts.create_contact(&new_contact).await;
        let _ = contacts.update_contact(&stored).await;
        let _ = contacts.delete_contact("c-1").await;
        let _ = contacts.get_groups().await;
        let _ = contacts.create_group("Family").await;
        let _ = contacts.add_contact_to_group("c-1", "g-1").await;
        let _ = contacts.remove_contact_from_group("c-1", "g-1").await;
        let _ = contacts.update_group("g-1", "Friends").await;
        let _ = contacts.delete_group("g-1").await;

        assert_wire_table(
            &mock,
            &MANIFEST,
            &[
                ("check_permissions", json!({})),
                ("request_permissions", json!({})),
                ("get_contacts", json!({ "query": { "searchText": "Ada", "includeImages": false } })),
                ("get_contact", json!({ "id": "c-1" })),
                (
                    "create_contact",
                    json!({ "contact": {
                        "givenName": "Grace",
                        "phoneNumbers": [],
                        "emailAddresses": [],
                        "postalAddresses": [],
                        "urlAddresses": [],
                        "socialProfiles": [],
                        "instantMessages": []
                    }}),
                ),
                ("update_contact", json!({ "contact": stored_contact() })),
                ("delete_contact", json!({ "id": "c-1" })),
                ("get_groups", json!({})),
                ("create_group", json!({ "name": "Family" })),
                ("add_contact_to_group", json!({ "contactId": "c-1", "groupId": "g-1" })),
                ("remove_contact_from_group", json!({ "contactId": "c-1", "groupId": "g-1" })),
                ("update_group", json!({ "groupId": "g-1", "name": "Friends" })),
                ("delete_group", json!({ "groupId": "g-1" })),
            ],
        )
        .await;
    }
}
