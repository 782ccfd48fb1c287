// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Preset records and `preset.toml` parsing.
//!
//! A preset declares which plugin packages to load and how abstract
//! generation intents (e.g. `"ui.page"`) map to concrete scaffold ids.

use std::collections::BTreeMap;

use neotool_core::NeotoolError;
use serde::{Deserialize, Serialize};

/// A preset: plugin packages to load plus the intent-to-scaffold mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// Preset name (e.g. "standard-web").
    pub name: String,
    /// Plugin package names, in load order.
    pub plugins: Vec<String>,
    /// Mapping from intent key (e.g. "ui.page") to scaffold id.
    pub scaffold_mapping: BTreeMap<String, String>,
}

/// Intermediate TOML deserialization struct for `preset.toml`.
#[derive(Debug, Deserialize)]
struct PresetFile {
    preset: PresetSection,
}

/// The `[preset]` section of a `preset.toml` file.
#[derive(Debug, Deserialize)]
struct PresetSection {
    name: String,
    #[serde(default)]
    plugins: Vec<String>,
    #[serde(default)]
    scaffolds: BTreeMap<String, String>,
}

/// Parse a preset from TOML content.
///
/// Validates that the name is non-empty, every plugin package name is
/// non-empty, and every scaffold mapping value is non-empty.
pub fn parse_preset(toml_content: &str) -> Result<Preset, NeotoolError> {
    let file: PresetFile = toml::from_str(toml_content)
        .map_err(|e| NeotoolError::Config(format!("invalid preset: {e}")))?;

    let section = file.preset;

    if section.name.is_empty() {
        return Err(NeotoolError::Config(
            "preset: name must not be empty".to_string(),
        ));
    }

    if section.plugins.iter().any(|p| p.is_empty()) {
        return Err(NeotoolError::Config(format!(
            "preset `{}`: plugin package names must not be empty",
            section.name
        )));
    }

    for (intent, scaffold_id) in &section.scaffolds {
        if scaffold_id.is_empty() {
            return Err(NeotoolError::Config(format!(
                "preset `{}`: scaffold id for intent `{intent}` must not be empty",
                section.name
            )));
        }
    }

    Ok(Preset {
        name: section.name,
        plugins: section.plugins,
        scaffold_mapping: section.scaffolds,
    })
}
