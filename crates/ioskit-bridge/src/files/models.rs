// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document picker, file system and iCloud Drive types.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use ioskit_core::iso8601;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CloudStatus {
    Current,
    Downloading,
    Downloaded,
    NotDownloaded,
    NotInCloud,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    Name,
    Date,
    Size,
    Type,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MonitoringEvent {
    Created,
    Modified,
    Deleted,
    Renamed,
    AttributesChanged,
}

/// Content category for picking and filtering.
///
/// Known categories travel as a bare string; [`FileType::Custom`] is
/// `{ "custom": [<UTI>, ...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FileType {
    Image,
    Video,
    Audio,
    Pdf,
    Text,
    Spreadsheet,
    Presentation,
    Archive,
    Custom(Vec<String>),
}

/// File contents in one of three encodings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FileData {
    Base64(String),
    Text(String),
    Url(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePickerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<FileType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_multiple: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_directory: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickedFile {
    pub url: String,
    pub name: String,
    /// Bytes.
    pub size: u64,
    pub mime_type: Option<String>,
    pub uti_type: String,
    pub is_directory: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFileOptions {
    pub suggested_name: String,
    pub types: Vec<FileType>,
    pub data: FileData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    pub url: String,
    pub name: String,
    pub size: u64,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
    pub accessed_date: Option<DateTime<Utc>>,
    pub mime_type: Option<String>,
    pub uti_type: String,
    pub is_directory: bool,
    pub is_package: bool,
    pub is_hidden: bool,
    pub is_alias: bool,
    pub cloud_status: CloudStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<FileType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_multiple: Option<bool>,
    /// Copy into the app container instead of referencing in place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_to_app: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    pub file_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<FileType>>,
    /// Glob matched against file names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "iso8601::seconds::option")]
    pub modified_after: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "iso8601::seconds::option")]
    pub modified_before: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOptions {
    /// Defaults to the app's Documents directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_packages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FileFilter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOperation {
    pub source_url: String,
    pub destination_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareOptions {
    pub file_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_activity_types: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewOptions {
    pub file_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_edit: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringOptions {
    pub directory_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<MonitoringEvent>>,
}

/// Record pushed on the `fileChanged` channel while monitoring is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileChange {
    pub file_url: String,
    pub event_type: MonitoringEvent,
    #[serde(default)]
    pub old_url: Option<String>,
    pub timestamp: DateTime<Utc>,
}
