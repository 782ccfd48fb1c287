// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in preset catalog.
//!
//! Returns hardcoded [`Preset`] records for the presets compiled into the
//! neotool binary. No filesystem or network access.

use std::collections::BTreeMap;

use crate::manifest::Preset;

/// Returns all built-in presets.
///
/// The catalog contains 2 presets:
/// - standard-web (full-stack web application)
/// - api-service (headless API service, no UI scaffolds)
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset {
            name: "standard-web".to_string(),
            plugins: vec!["neotool-plugin-sample".to_string()],
            scaffold_mapping: BTreeMap::from([
                ("ui.page".to_string(), "react-page".to_string()),
                ("ui.form".to_string(), "react-form".to_string()),
                ("api.endpoint".to_string(), "rest-endpoint".to_string()),
                ("data.entity".to_string(), "sql-migration".to_string()),
                ("ci.workflow".to_string(), "ci-workflow".to_string()),
            ]),
        },
        Preset {
            name: "api-service".to_string(),
            plugins: vec!["neotool-plugin-sample".to_string()],
            scaffold_mapping: BTreeMap::from([
                ("api.endpoint".to_string(), "rest-endpoint".to_string()),
                ("data.entity".to_string(), "sql-migration".to_string()),
                ("ci.workflow".to_string(), "ci-workflow".to_string()),
            ]),
        },
    ]
}

/// Finds a built-in preset by name.
pub fn find_preset(name: &str) -> Option<Preset> {
    builtin_presets().into_iter().find(|p| p.name == name)
}
