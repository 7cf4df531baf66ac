// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared assertions for plugin client tests.

use std::collections::BTreeSet;

use ioskit_core::command_name;
use ioskit_core::mock::MockTransport;
use serde_json::Value;

use crate::manifest::PackageManifest;

/// Checks that `mock` recorded exactly `expected`, in order, each under the
/// manifest's namespace, and that the expected commands are the full set the
/// manifest declares.
pub async fn assert_wire_table(
    mock: &MockTransport,
    manifest: &PackageManifest,
    expected: &[(&str, Value)],
) {
    let namespace = manifest.namespace.to_string();
    let calls = mock.invocations().await;
    assert_eq!(
        calls.len(),
        expected.len(),
        "{}: recorded {:?}",
        manifest.package,
        mock.commands().await
    );

    for (call, (command, args)) in calls.iter().zip(expected) {
        assert!(manifest.declares(command), "{command} is not declared by {}", manifest.package);
        assert_eq!(call.command, command_name(&namespace, command));
        assert_eq!(&call.args, args, "arguments of {command}");
    }

    let sent: BTreeSet<&str> = expected.iter().map(|(command, _)| *command).collect();
    let declared: BTreeSet<&str> = manifest.commands.iter().copied().collect();
    let missing: Vec<_> = declared.difference(&sent).collect();
    assert!(missing.is_empty(), "{}: never sent {missing:?}", manifest.package);
}
