// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Neotool generator.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Neotool configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NeotoolConfig {
    /// Generator identity and preset selection.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Output tree settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Generator identity and preset selection.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Machine name of the application to generate.
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Human-readable title of the application.
    #[serde(default = "default_app_title")]
    pub app_title: String,

    /// Name of the preset that selects plugins and scaffold mappings.
    #[serde(default = "default_preset")]
    pub preset: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            app_title: default_app_title(),
            preset: default_preset(),
            log_level: default_log_level(),
        }
    }
}

fn default_app_name() -> String {
    "app".to_string()
}

fn default_app_title() -> String {
    "Application".to_string()
}

fn default_preset() -> String {
    "standard-web".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Output tree settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Root directory generated files are written under.
    #[serde(default = "default_output_root")]
    pub root: String,

    /// Overwrite files that already exist under the output root.
    #[serde(default)]
    pub overwrite: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: default_output_root(),
            overwrite: false,
        }
    }
}

fn default_output_root() -> String {
    "./generated".to_string()
}
