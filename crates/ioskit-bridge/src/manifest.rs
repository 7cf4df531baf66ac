// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Native package manifests.
//
// Each plugin's native half is a Swift package that links its `Sources`
// target against the host runtime's bridge library. The manifest also records
// the namespace and command names the native plugin must register, so the two
// halves can be checked against each other.

use std::fmt::{self, Write as _};

use ioskit_core::Namespace;

/// Name of the host bridge library product every native package links.
pub const HOST_LIBRARY: &str = "Tauri";

/// Path of the host bridge library relative to the package root.
pub const HOST_LIBRARY_PATH: &str = "../.tauri/tauri-api";

/// `swift-tools-version` a native package is written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SwiftTools {
    V5_3,
    V5_7,
}

impl SwiftTools {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V5_3 => "5.3",
            Self::V5_7 => "5.7",
        }
    }

    /// Whether target dependencies are declared with `.product(name:package:)`.
    /// Older manifests name the library as a bare string.
    pub const fn product_dependencies(self) -> bool {
        match self {
            Self::V5_3 => false,
            Self::V5_7 => true,
        }
    }
}

impl fmt::Display for SwiftTools {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageManifest {
    /// Swift package, library product and target name.
    pub package: &'static str,
    /// Minimum iOS major version.
    pub min_ios: u32,
    /// `swift-tools-version` the manifest is written against.
    pub swift_tools: SwiftTools,
    pub namespace: Namespace,
    /// Command names the native plugin registers.
    pub commands: &'static [&'static str],
}

impl PackageManifest {
    /// Whether the native plugin is expected to register `command`.
    pub fn declares(&self, command: &str) -> bool {
        self.commands.contains(&command)
    }

    /// Render `Package.swift` for this plugin.
    pub fn render_package_swift(&self) -> String {
        let name = self.package;
        let mut out = String::new();
        let _ = writeln!(out, "// swift-tools-version:{}", self.swift_tools);
        out.push_str("import PackageDescription\n\n");
        out.push_str("let package = Package(\n");
        let _ = writeln!(out, "    name: \"{name}\",");
        let _ = writeln!(out, "    platforms: [\n        .iOS(.v{})\n    ],", self.min_ios);
        let _ = writeln!(
            out,
            "    products: [\n        .library(\n            name: \"{name}\",\n            targets: [\"{name}\"])\n    ],"
        );
        let _ = writeln!(
            out,
            "    dependencies: [\n        .package(name: \"{HOST_LIBRARY}\", path: \"{HOST_LIBRARY_PATH}\")\n    ],"
        );
        out.push_str("    targets: [\n        .target(\n");
        let _ = writeln!(out, "            name: \"{name}\",");
        if self.swift_tools.product_dependencies() {
            let _ = writeln!(
                out,
                "            dependencies: [\n                .product(name: \"{HOST_LIBRARY}\", package: \"{HOST_LIBRARY}\")\n            ],"
            );
            out.push_str("            path: \"Sources\")\n");
        } else {
            let _ = writeln!(out, "            dependencies: [\"{HOST_LIBRARY}\"],");
            out.push_str("            path: \"Sources\"\n        )\n");
        }
        out.push_str("    ]\n)\n");
        out
    }
}

/// Every plugin's native package.
pub const ALL: &[PackageManifest] = &[
    crate::barometer::MANIFEST,
    crate::bluetooth::MANIFEST,
    crate::callkit::MANIFEST,
    crate::camera::MANIFEST,
    crate::contacts::MANIFEST,
    crate::files::MANIFEST,
    crate::healthkit::MANIFEST,
    crate::keychain::MANIFEST,
    crate::location::MANIFEST,
    crate::messages::MANIFEST,
    crate::microphone::MANIFEST,
    crate::motion::MANIFEST,
    crate::music::MANIFEST,
    crate::photos::MANIFEST,
    crate::proximity::MANIFEST,
    crate::screentime::MANIFEST,
    crate::shortcuts::MANIFEST,
    crate::widgets::MANIFEST,
];

/// Look up a manifest by package name.
pub fn find(package: &str) -> Option<&'static PackageManifest> {
    ALL.iter().find(|m| m.package == package)
}
