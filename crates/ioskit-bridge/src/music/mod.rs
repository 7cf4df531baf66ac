// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Music: library browsing, playlists, system player control and catalog
// search.

pub mod models;

use std::sync::Arc;

use ioskit_core::{Args, BridgeConfig, Namespace, PluginClient, Result, Transport};

use crate::manifest::{PackageManifest, SwiftTools};

pub use models::*;

pub const NAMESPACE: Namespace = Namespace::versioned("ios-music", 2);

pub const COMMANDS: &[&str] = &[
    "check_permissions",
    "request_permissions",
    "get_library_status",
    "get_playlists",
    "get_playlist",
    "create_playlist",
    "get_songs",
    "get_albums",
    "get_artists",
    "play_item",
    "pause",
    "resume",
    "get_playback_state",
    "get_now_playing",
    "search_catalog",
    "skip_to_next",
    "skip_to_previous",
    "set_playback_time",
    "set_repeat_mode",
    "set_shuffle_mode",
];

pub const MANIFEST: PackageManifest = PackageManifest {
    package: "tauri-plugin-ios-music",
    min_ios: 13,
    swift_tools: SwiftTools::V5_7,
    namespace: NAMESPACE,
    commands: COMMANDS,
};

#[derive(Debug, Clone)]
pub struct Music {
    client: PluginClient,
}

impl Music {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, &BridgeConfig::default())
    }

    pub fn with_config(transport: Arc<dyn Transport>, config: &BridgeConfig) -> Self {
        Self {
            client: PluginClient::with_config(NAMESPACE, transport, config),
        }
    }

    pub async fn check_permissions(&self) -> Result<MusicPermissions> {
        self.client.invoke("check_permissions", Args::new()).await
    }

    pub async fn request_permissions(&self) -> Result<MusicPermissions> {
        self.client.invoke("request_permissions", Args::new()).await
    }

    pub async fn get_library_status(&self) -> Result<LibraryStatus> {
        self.client.invoke("get_library_status", Args::new()).await
    }

    pub async fn get_playlists(&self, query: Option<&PlaylistQuery>) -> Result<Vec<Playlist>> {
        let args = Args::new().maybe("query", query)?;
        self.client.invoke("get_playlists", args).await
    }

    pub async fn get_playlist(&self, id: &str) -> Result<Playlist> {
        let args = Args::new().with("id", id)?;
        self.client.invoke("get_playlist", args).await
    }

    pub async fn create_playlist(&self, data: &CreatePlaylistData) -> Result<Playlist> {
        let args = Args::new().with("data", data)?;
        self.client.invoke("create_playlist", args).await
    }

    pub async fn get_songs(&self, query: Option<&SongQuery>) -> Result<Vec<Song>> {
        let args = Args::new().maybe("query", query)?;
        self.client.invoke("get_songs", args).await
    }

    pub async fn get_albums(&self, query: Option<&AlbumQuery>) -> Result<Vec<Album>> {
        let args = Args::new().maybe("query", query)?;
        self.client.invoke("get_albums", args).await
    }

    pub async fn get_artists(&self, query: Option<&ArtistQuery>) -> Result<Vec<Artist>> {
        let args = Args::new().maybe("query", query)?;
        self.client.invoke("get_artists", args).await
    }

    pub async fn play_item(&self, item: &PlayableItem) -> Result<()> {
        let args = Args::new().with("item", item)?;
        self.client.send("play_item", args).await
    }

    pub async fn pause(&self) -> Result<()> {
        self.client.send("pause", Args::new()).await
    }

    pub async fn resume(&self) -> Result<()> {
        self.client.send("resume", Args::new()).await
    }

    pub async fn get_playback_state(&self) -> Result<PlaybackState> {
        self.client.invoke("get_playback_state", Args::new()).await
    }

    /// `None` when the player has no current item.
    pub async fn get_now_playing(&self) -> Result<Option<NowPlaying>> {
        self.client.invoke("get_now_playing", Args::new()).await
    }

    pub async fn search_catalog(&self, query: &SearchQuery) -> Result<SearchResults> {
        let args = Args::new().with("query", query)?;
        self.client.invoke("search_catalog", args).await
    }

    pub async fn skip_to_next(&self) -> Result<()> {
        self.client.send("skip_to_next", Args::new()).await
    }

    pub async fn skip_to_previous(&self) -> Result<()> {
        self.client.send("skip_to_previous", Args::new()).await
    }

    /// Seek to `time` seconds into the current item.
    pub async fn set_playback_time(&self, time: f64) -> Result<()> {
        let args = Args::new().with("time", &time)?;
        self.client.send("set_playback_time", args).await
    }

    pub async fn set_repeat_mode(&self, mode: RepeatMode) -> Result<()> {
        let args = Args::new().with("mode", &mode)?;
        self.client.send("set_repeat_mode", args).await
    }

    pub async fn set_shuffle_mode(&self, mode: ShuffleMode) -> Result<()> {
        let args = Args::new().with("mode", &mode)?;
        self.client.send("set_shuffle_mode", args).await
    }
}
