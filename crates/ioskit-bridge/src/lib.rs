// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ioskit: typed clients for the native iOS plugins.
//
// One module per plugin, each exporting its wire namespace, the commands it
// issues, its native package manifest, its model types and a client. The
// `Bridge` facade hands out clients that share one transport and one
// configuration.

pub mod manifest;

pub mod barometer;
pub mod bluetooth;
pub mod callkit;
pub mod camera;
pub mod contacts;
pub mod files;
pub mod healthkit;
pub mod keychain;
pub mod location;
pub mod messages;
pub mod microphone;
pub mod motion;
pub mod music;
pub mod photos;
pub mod proximity;
pub mod screentime;
pub mod shortcuts;
pub mod widgets;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use ioskit_core::{BridgeConfig, Transport, UnavailableTransport};

pub use ioskit_core::{BridgeError, NativeError, Result};

/// Entry point grouping every plugin client over one transport.
///
/// Clients are stateless; each accessor builds a fresh one.
#[derive(Clone)]
pub struct Bridge {
    transport: Arc<dyn Transport>,
    config: BridgeConfig,
}

impl Bridge {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, BridgeConfig::default())
    }

    pub fn with_config(transport: Arc<dyn Transport>, config: BridgeConfig) -> Self {
        tracing::info!(
            platform = transport.platform_name(),
            overrides = config.namespace_overrides.len(),
            "ioskit bridge initialised"
        );
        Self { transport, config }
    }

    /// Bridge over the stub transport, for desktop and CI builds where no
    /// native handler exists. Every command fails with `PlatformUnavailable`.
    pub fn unavailable() -> Self {
        tracing::debug!("using stub transport");
        Self::new(Arc::new(UnavailableTransport))
    }

    pub fn platform_name(&self) -> &str {
        self.transport.platform_name()
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn barometer(&self) -> barometer::Barometer {
        barometer::Barometer::with_config(self.transport.clone(), &self.config)
    }

    pub fn bluetooth(&self) -> bluetooth::Bluetooth {
        bluetooth::Bluetooth::with_config(self.transport.clone(), &self.config)
    }

    pub fn callkit(&self) -> callkit::CallKit {
        callkit::CallKit::with_config(self.transport.clone(), &self.config)
    }

    pub fn camera(&self) -> camera::Camera {
        camera::Camera::with_config(self.transport.clone(), &self.config)
    }

    pub fn contacts(&self) -> contacts::Contacts {
        contacts::Contacts::with_config(self.transport.clone(), &self.config)
    }

    pub fn files(&self) -> files::Files {
        files::Files::with_config(self.transport.clone(), &self.config)
    }

    pub fn healthkit(&self) -> healthkit::HealthKit {
        healthkit::HealthKit::with_config(self.transport.clone(), &self.config)
    }

    pub fn keychain(&self) -> keychain::Keychain {
        keychain::Keychain::with_config(self.transport.clone(), &self.config)
    }

    pub fn location(&self) -> location::Location {
        location::Location::with_config(self.transport.clone(), &self.config)
    }

    pub fn messages(&self) -> messages::Messages {
        messages::Messages::with_config(self.transport.clone(), &self.config)
    }

    pub fn microphone(&self) -> microphone::Microphone {
        microphone::Microphone::with_config(self.transport.clone(), &self.config)
    }

    pub fn motion(&self) -> motion::Motion {
        motion::Motion::with_config(self.transport.clone(), &self.config)
    }

    pub fn music(&self) -> music::Music {
        music::Music::with_config(self.transport.clone(), &self.config)
    }

    pub fn photos(&self) -> photos::Photos {
        photos::Photos::with_config(self.transport.clone(), &self.config)
    }

    pub fn proximity(&self) -> proximity::Proximity {
        proximity::Proximity::with_config(self.transport.clone(), &self.config)
    }

    pub fn screentime(&self) -> screentime::ScreenTime {
        screentime::ScreenTime::with_config(self.transport.clone(), &self.config)
    }

    pub fn shortcuts(&self) -> shortcuts::Shortcuts {
        shortcuts::Shortcuts::with_config(self.transport.clone(), &self.config)
    }

    pub fn widgets(&self) -> widgets::Widgets {
        widgets::Widgets::with_config(self.transport.clone(), &self.config)
    }
}

impl std::fmt::Debug for Bridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bridge")
            .field("platform", &self.transport.platform_name())
            .field("config", &self.config)
            .finish()
    }
}
