// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Messages: compose sheets, SMS sending, conversation and message queries,
// attachments and blocking.

pub mod models;

use std::sync::Arc;

use ioskit_core::{Args, BridgeConfig, Namespace, PluginClient, Result, Transport};

use crate::manifest::{PackageManifest, SwiftTools};

pub use models::*;

pub const NAMESPACE: Namespace = Namespace::versioned("ios-messages", 2);

pub const COMMANDS: &[&str] = &[
    "compose_message",
    "compose_imessage",
    "send_sms",
    "can_send_text",
    "can_send_subject",
    "can_send_attachments",
    "get_conversation_list",
    "get_conversation",
    "get_messages",
    "mark_as_read",
    "delete_message",
    "search_messages",
    "get_attachments",
    "save_attachment",
    "get_message_status",
    "register_for_notifications",
    "unregister_notifications",
    "check_imessage_availability",
    "get_blocked_contacts",
    "block_contact",
    "unblock_contact",
];

pub const MANIFEST: PackageManifest = PackageManifest {
    package: "tauri-plugin-ios-messages",
    min_ios: 13,
    swift_tools: SwiftTools::V5_7,
    namespace: NAMESPACE,
    commands: COMMANDS,
};

#[derive(Debug, Clone)]
pub struct Messages {
    client: PluginClient,
}

impl Messages {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, &BridgeConfig::default())
    }

    pub fn with_config(transport: Arc<dyn Transport>, config: &BridgeConfig) -> Self {
        Self {
            client: PluginClient::with_config(NAMESPACE, transport, config),
        }
    }

    pub async fn compose_message(&self, request: &ComposeMessageRequest) -> Result<ComposeResult> {
        let args = Args::new().with("request", request)?;
        self.client.invoke("compose_message", args).await
    }

    pub async fn compose_imessage(&self, request: &ComposeMessageRequest) -> Result<ComposeResult> {
        let args = Args::new().with("request", request)?;
        self.client.invoke("compose_imessage", args).await
    }

    /// Returns the sent message's id.
    pub async fn send_sms(&self, request: &SendSmsRequest) -> Result<String> {
        let args = Args::new().with("request", request)?;
        self.client.invoke("send_sms", args).await
    }

    pub async fn can_send_text(&self) -> Result<bool> {
        self.client.invoke("can_send_text", Args::new()).await
    }

    pub async fn can_send_subject(&self) -> Result<bool> {
        self.client.invoke("can_send_subject", Args::new()).await
    }

    pub async fn can_send_attachments(&self) -> Result<bool> {
        self.client.invoke("can_send_attachments", Args::new()).await
    }

    pub async fn get_conversation_list(
        &self,
        filter: Option<&ConversationFilter>,
    ) -> Result<Vec<Conversation>> {
        let args = Args::new().maybe("filter", filter)?;
        self.client.invoke("get_conversation_list", args).await
    }

    pub async fn get_conversation(&self, conversation_id: &str) -> Result<Conversation> {
        let args = Args::new().with("conversationId", conversation_id)?;
        self.client.invoke("get_conversation", args).await
    }

    /// Page backwards through a conversation; `before` is the id of the
    /// oldest message already held.
    pub async fn get_messages(
        &self,
        conversation_id: &str,
        limit: Option<u32>,
        before: Option<&str>,
    ) -> Result<Vec<Message>> {
        let args = Args::new()
            .with("conversationId", conversation_id)?
            .maybe("limit", limit.as_ref())?
            .maybe("before", before)?;
        self.client.invoke("get_messages", args).await
    }

    pub async fn mark_as_read(&self, message_ids: &[String]) -> Result<()> {
        let args = Args::new().with("messageIds", message_ids)?;
        self.client.send("mark_as_read", args).await
    }

    pub async fn delete_message(&self, message_id: &str) -> Result<()> {
        let args = Args::new().with("messageId", message_id)?;
        self.client.send("delete_message", args).await
    }

    pub async fn search_messages(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
        let args = Args::new().with("query", query)?;
        self.client.invoke("search_messages", args).await
    }

    pub async fn get_attachments(&self, message_id: &str) -> Result<Vec<MessageAttachmentInfo>> {
        let args = Args::new().with("messageId", message_id)?;
        self.client.invoke("get_attachments", args).await
    }

    /// Returns the path the attachment was written to.
    pub async fn save_attachment(&self, attachment_id: &str, destination: &str) -> Result<String> {
        let args = Args::new()
            .with("attachmentId", attachment_id)?
            .with("destination", destination)?;
        self.client.invoke("save_attachment", args).await
    }

    pub async fn get_message_status(&self, message_id: &str) -> Result<MessageStatus> {
        let args = Args::new().with("messageId", message_id)?;
        self.client.invoke("get_message_status", args).await
    }

    pub async fn register_for_notifications(&self) -> Result<()> {
        self.client
            .send("register_for_notifications", Args::new())
            .await
    }

    pub async fn unregister_notifications(&self) -> Result<()> {
        self.client
            .send("unregister_notifications", Args::new())
            .await
    }

    pub async fn check_imessage_availability(&self) -> Result<ImessageCapabilities> {
        self.client
            .invoke("check_imessage_availability", Args::new())
            .await
    }

    pub async fn get_blocked_contacts(&self) -> Result<Vec<BlockedContact>> {
        self.client.invoke("get_blocked_contacts", Args::new()).await
    }

    pub async fn block_contact(&self, contact_id: &str, reason: Option<&str>) -> Result<()> {
        let args = Args::new()
            .with("contactId", contact_id)?
            .maybe("reason", reason)?;
        self.client.send("block_contact", args).await
    }

    pub async fn unblock_contact(&self, contact_id: &str) -> Result<()> {
        let args = Args::new().with("contactId", contact_id)?;
        self.client.send("unblock_contact", args).await
    }
}
