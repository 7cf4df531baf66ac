// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Photos: albums, assets, saving, export and search in the photo library.

pub mod models;

use std::sync::Arc;

use ioskit_core::{Args, BridgeConfig, Namespace, PluginClient, Result, Transport};

use crate::manifest::{PackageManifest, SwiftTools};

pub use models::*;

pub const NAMESPACE: Namespace = Namespace::versioned("ios-photos", 2);

pub const COMMANDS: &[&str] = &[
    "check_permissions",
    "request_permissions",
    "get_albums",
    "get_album",
    "create_album",
    "delete_album",
    "get_assets",
    "get_asset",
    "delete_assets",
    "save_image",
    "save_video",
    "export_asset",
    "get_asset_metadata",
    "search_assets",
];

pub const MANIFEST: PackageManifest = PackageManifest {
    package: "tauri-plugin-ios-photos",
    min_ios: 13,
    swift_tools: SwiftTools::V5_7,
    namespace: NAMESPACE,
    commands: COMMANDS,
};

#[derive(Debug, Clone)]
pub struct Photos {
    client: PluginClient,
}

impl Photos {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, &BridgeConfig::default())
    }

    pub fn with_config(transport: Arc<dyn Transport>, config: &BridgeConfig) -> Self {
        Self {
            client: PluginClient::with_config(NAMESPACE, transport, config),
        }
    }

    pub async fn check_permissions(&self) -> Result<PhotosPermissions> {
        self.client.invoke("check_permissions", Args::new()).await
    }

    pub async fn request_permissions(&self, access_level: AccessLevel) -> Result<PhotosPermissions> {
        let args = Args::new().with("accessLevel", &access_level)?;
        self.client.invoke("request_permissions", args).await
    }

    pub async fn get_albums(&self, options: Option<&AlbumQuery>) -> Result<Vec<Album>> {
        let args = Args::new().maybe("options", options)?;
        self.client.invoke("get_albums", args).await
    }

    pub async fn get_album(&self, id: &str) -> Result<Album> {
        let args = Args::new().with("id", id)?;
        self.client.invoke("get_album", args).await
    }

    pub async fn create_album(&self, title: &str) -> Result<Album> {
        let args = Args::new().with("title", title)?;
        self.client.invoke("create_album", args).await
    }

    pub async fn delete_album(&self, id: &str) -> Result<()> {
        let args = Args::new().with("id", id)?;
        self.client.send("delete_album", args).await
    }

    pub async fn get_assets(&self, query: Option<&AssetQuery>) -> Result<Vec<Asset>> {
        let args = Args::new().maybe("query", query)?;
        self.client.invoke("get_assets", args).await
    }

    pub async fn get_asset(&self, id: &str) -> Result<Asset> {
        let args = Args::new().with("id", id)?;
        self.client.invoke("get_asset", args).await
    }

    pub async fn delete_assets(&self, ids: &[String]) -> Result<()> {
        let args = Args::new().with("ids", ids)?;
        self.client.send("delete_assets", args).await
    }

    /// Returns the new asset's local identifier.
    pub async fn save_image(&self, data: &SaveImageData) -> Result<String> {
        let args = Args::new().with("data", data)?;
        self.client.invoke("save_image", args).await
    }

    /// Returns the new asset's local identifier.
    pub async fn save_video(&self, path: &str, to_album: Option<&str>) -> Result<String> {
        let args = Args::new()
            .with("path", path)?
            .maybe("toAlbum", to_album.as_ref())?;
        self.client.invoke("save_video", args).await
    }

    /// Returns the path of the exported file.
    pub async fn export_asset(&self, id: &str, options: Option<&ExportOptions>) -> Result<String> {
        let args = Args::new().with("id", id)?.maybe("options", options)?;
        self.client.invoke("export_asset", args).await
    }

    pub async fn get_asset_metadata(&self, id: &str) -> Result<AssetMetadata> {
        let args = Args::new().with("id", id)?;
        self.client.invoke("get_asset_metadata", args).await
    }

    pub async fn search_assets(&self, query: &SearchQuery) -> Result<Vec<Asset>> {
        let args = Args::new().with("query", query)?;
        self.client.invoke("search_assets", args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ioskit_core::mock::MockTransport;
    use serde_json::json;

    use crate::testing::assert_wire_table;

    fn setup() -> (Arc<MockTransport>, Photos) {
        let mock = Arc::new(MockTransport::new());
        (mock.clone(), Photos::new(mock))
    }

    #[tokio::test]
    async fn request_permissions_sends_access_level_tag() {
        let (mock, photos) = setup();
        mock.resolve(
            "plugin:ios-photos-v2|request_permissions",
            json!({ "readWrite": "prompt", "addOnly": "granted" }),
        )
        .await;

        let permissions = photos.request_permissions(AccessLevel::AddOnly).await.unwrap();

        assert!(permissions.add_only.is_granted());
        assert_eq!(mock.single().await.args, json!({ "accessLevel": "addOnly" }));
    }

    #[tokio::test]
    async fn save_video_omits_album_when_absent() {
        let (mock, photos) = setup();
        mock.resolve("plugin:ios-photos-v2|save_video", json!("ABC/L0/001")).await;
        mock.resolve("plugin:ios-photos-v2|save_video", json!("ABC/L0/002")).await;

        photos.save_video("/tmp/clip.mov", None).await.unwrap();
        let id = photos.save_video("/tmp/clip.mov", Some("Trips")).await.unwrap();

        assert_eq!(id, "ABC/L0/002");
        let calls = mock.invocations().await;
        assert_eq!(calls[0].args, json!({ "path": "/tmp/clip.mov" }));
        assert_eq!(calls[1].args, json!({ "path": "/tmp/clip.mov", "toAlbum": "Trips" }));
    }

    #[tokio::test]
    async fn delete_assets_sends_id_list() {
        let (mock, photos) = setup();

        photos
            .delete_assets(&["a".to_owned(), "b".to_owned()])
            .await
            .unwrap();

        assert_eq!(mock.single().await.args, json!({ "ids": ["a", "b"] }));
    }

    #[tokio::test]
    async fn asset_decodes_subtypes() {
        let (mock, photos) = setup();
        mock.resolve(
            "plugin:ios-photos-v2|get_asset",
            json!({
                "id": "ABC/L0/001",
                "mediaType": "image",
                "mediaSubtype": ["photoHdr", "photoLive"],
                "creationDate": "2023-08-14T17:22:05Z",
                "modificationDate": "2023-08-14T17:22:05Z",
                "width": 4032,
                "height": 3024,
                "isFavorite": true,
                "isHidden": false,
                "representsBurst": false
            }),
        )
        .await;

        let asset = photos.get_asset("ABC/L0/001").await.unwrap();

        assert_eq!(asset.media_type, MediaType::Image);
        assert_eq!(asset.media_subtype, vec![MediaSubtype::PhotoHdr, MediaSubtype::PhotoLive]);
        assert_eq!(asset.location, None);
    }

    #[tokio::test]
    async fn export_with_options() {
        let (mock, photos) = setup();
        mock.resolve("plugin:ios-photos-v2|export_asset", json!("/tmp/export.heic")).await;
        let options = ExportOptions {
            image_format: Some(ImageFormat::Heif),
            quality: Some(0.8),
            ..Default::default()
        };

        photos.export_asset("ABC/L0/001", Some(&options)).await.unwrap();

        assert_eq!(
            mock.single().await.args,
            json!({ "id": "ABC/L0/001", "options": { "imageFormat": "heif", "quality": 0.8 } })
        );
    }

    #[tokio::test]
    async fn every_command_reaches_the_wire() {
        let (mock, photos) = setup();
        let albums = AlbumQuery {
            album_types: Some(vec![AlbumType::SmartAlbum]),
            ..AlbumQuery::default()
        };
        let assets = AssetQuery {
            start_date: Some("2024-05-01T00:00:00Z".parse().unwrap()),
            media_types: Some(vec![MediaType::Video]),
            limit: Some(10),
            ..AssetQuery::default()
        };
        let image = SaveImageData {
            image_data: "aGk=".into(),
            to_album: Some("al-1".into()),
            metadata: None,
        };
        let export = ExportOptions {
            image_format: Some(ImageFormat::Png),
            ..ExportOptions::default()
        };
        let search = SearchQuery {
            text: Some("beach".into()),
            date_range: Some(DateRange {
                start_date: "2024-08-01T00:00:00Z".parse().unwrap(),
                end_date: "2024-08-31T23:59:59.5Z".parse().unwrap(),
            }),
            ..SearchQuery::default()
        };

        let _ = photos.check_permissions().await;
        let _ = photos.request_permissions(AccessLevel::AddOnly).await;
        let _ = photos.get_albums(Some(&albums)).await;
        let _ = photos.get_album("al-1").await;
        let _ = photos.create_album("Trips").await;
        let _ = photos.delete_album("al-2").await;
        let _ = photos.get_assets(Some(&assets)).await;
        let _ = photos.get_asset("as-1").await;
        let _ = photos.delete_assets(&["as-2".to_string(), "as-3".to_string()]).await;
        let _ = photos.save_image(&image).await;
        let _ = photos.save_video("/tmp/clip.mov", None).await;
        let _ = photos.export_asset("as-1", Some(&export)).await;
        let _ = photos.get_asset_metadata("as-1").await;
        let _ = photos.search_assets(&search).await;

        assert_wire_table(
            &mock,
            &MANIFEST,
            &[
                ("check_permissions", json!({})),
                ("request_permissions", json!({ "accessLevel": "addOnly" })),
                ("get_albums", json!({ "options": { "albumTypes": ["smartAlbum"] } })),
                ("get_album", json!({ "id": "al-1" })),
                ("create_album", json!({ "title": "Trips" })),
                ("delete_album", json!({ "id": "al-2" })),
                (
                    "get_assets",
                    json!({ "query": {
                        "mediaTypes": ["video"],
                        "startDate": "2024-05-01T00:00:00.000Z",
                        "limit": 10
                    } }),
                ),
                ("get_asset", json!({ "id": "as-1" })),
                ("delete_assets", json!({ "ids": ["as-2", "as-3"] })),
                ("save_image", json!({ "data": { "imageData": "aGk=", "toAlbum": "al-1" } })),
                ("save_video", json!({ "path": "/tmp/clip.mov" })),
                ("export_asset", json!({ "id": "as-1", "options": { "imageFormat": "png" } })),
                ("get_asset_metadata", json!({ "id": "as-1" })),
                (
                    "search_assets",
                    json!({ "query": {
                        "text": "beach",
                        "dateRange": {
                            "startDate": "2024-08-01T00:00:00.000Z",
                            "endDate": "2024-08-31T23:59:59.500Z"
                        }
                    } }),
                ),
            ],
        )
        .await;
    }
}
