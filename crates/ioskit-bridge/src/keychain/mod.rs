// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Keychain: generic passwords, authentication-gated secrets and internet
// passwords.
//
// SECURITY: secrets pass through this layer only as call arguments and
// results. Nothing is cached or logged unless `trace_payloads` is enabled in
// the bridge configuration, which must stay off in release builds.

pub mod models;

use std::sync::Arc;

use ioskit_core::{Args, BridgeConfig, Namespace, PluginClient, Result, Transport};

use crate::manifest::{PackageManifest, SwiftTools};

pub use models::*;

pub const NAMESPACE: Namespace = Namespace::versioned("ios-keychain", 2);

pub const COMMANDS: &[&str] = &[
    "set_item",
    "get_item",
    "delete_item",
    "has_item",
    "update_item",
    "get_all_keys",
    "delete_all",
    "set_access_group",
    "get_access_group",
    "set_secure_item",
    "get_secure_item",
    "generate_password",
    "check_authentication",
    "set_internet_password",
    "get_internet_password",
];

pub const MANIFEST: PackageManifest = PackageManifest {
    package: "tauri-plugin-ios-keychain",
    min_ios: 13,
    swift_tools: SwiftTools::V5_7,
    namespace: NAMESPACE,
    commands: COMMANDS,
};

#[derive(Debug, Clone)]
pub struct Keychain {
    client: PluginClient,
}

impl Keychain {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, &BridgeConfig::default())
    }

    pub fn with_config(transport: Arc<dyn Transport>, config: &BridgeConfig) -> Self {
        Self {
            client: PluginClient::with_config(NAMESPACE, transport, config),
        }
    }

    pub async fn set_item(&self, item: &KeychainItem) -> Result<()> {
        let args = Args::new().with("item", item)?;
        self.client.send("set_item", args).await
    }

    pub async fn get_item(&self, query: &KeychainQuery) -> Result<KeychainItem> {
        let args = Args::new().with("query", query)?;
        self.client.invoke("get_item", args).await
    }

    pub async fn delete_item(&self, query: &KeychainQuery) -> Result<()> {
        let args = Args::new().with("query", query)?;
        self.client.send("delete_item", args).await
    }

    pub async fn has_item(&self, query: &KeychainQuery) -> Result<bool> {
        let args = Args::new().with("query", query)?;
        self.client.invoke("has_item", args).await
    }

    pub async fn update_item(&self, query: &KeychainQuery, updates: &KeychainUpdate) -> Result<()> {
        let args = Args::new().with("query", query)?.with("updates", updates)?;
        self.client.send("update_item", args).await
    }

    /// Keys stored for `service`, or for every service when `None`.
    pub async fn get_all_keys(&self, service: Option<&str>) -> Result<Vec<String>> {
        let args = Args::new().maybe("service", service.as_ref())?;
        self.client.invoke("get_all_keys", args).await
    }

    pub async fn delete_all(&self, service: Option<&str>) -> Result<()> {
        let args = Args::new().maybe("service", service.as_ref())?;
        self.client.send("delete_all", args).await
    }

    pub async fn set_access_group(&self, group: &str) -> Result<()> {
        let args = Args::new().with("group", group)?;
        self.client.send("set_access_group", args).await
    }

    pub async fn get_access_group(&self) -> Result<Option<String>> {
        self.client.invoke("get_access_group", Args::new()).await
    }

    pub async fn set_secure_item(&self, item: &SecureKeychainItem) -> Result<()> {
        let args = Args::new().with("item", item)?;
        self.client.send("set_secure_item", args).await
    }

    /// May present the system authentication sheet before resolving.
    pub async fn get_secure_item(&self, query: &SecureKeychainQuery) -> Result<SecureKeychainItem> {
        let args = Args::new().with("query", query)?;
        self.client.invoke("get_secure_item", args).await
    }

    pub async fn generate_password(&self, options: Option<&PasswordOptions>) -> Result<String> {
        let args = Args::new().maybe("options", options)?;
        self.client.invoke("generate_password", args).await
    }

    pub async fn check_authentication(&self, reason: &str) -> Result<AuthenticationResult> {
        let args = Args::new().with("reason", reason)?;
        self.client.invoke("check_authentication", args).await
    }

    pub async fn set_internet_password(&self, item: &InternetPasswordItem) -> Result<()> {
        let args = Args::new().with("item", item)?;
        self.client.send("set_internet_password", args).await
    }

    pub async fn get_internet_password(
        &self,
        query: &InternetPasswordQuery,
    ) -> Result<InternetPasswordItem> {
        let args = Args::new().with("query", query)?;
        self.client.invoke("get_internet_password", args).await
    }
}
