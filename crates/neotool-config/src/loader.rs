// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./neotool.toml` > `~/.config/neotool/neotool.toml`
//! > `/etc/neotool/neotool.toml` with environment variable overrides via the
//! `NEOTOOL_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::NeotoolConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/neotool/neotool.toml` (system-wide)
/// 3. `~/.config/neotool/neotool.toml` (user XDG config)
/// 4. `./neotool.toml` (local directory)
/// 5. `NEOTOOL_*` environment variables
pub fn load_config() -> Result<NeotoolConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NeotoolConfig::default()))
        .merge(Toml::file("/etc/neotool/neotool.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("neotool/neotool.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("neotool.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<NeotoolConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NeotoolConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<NeotoolConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NeotoolConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `NEOTOOL_GENERATOR_APP_NAME` must map to
/// `generator.app_name`, not `generator.app.name`.
fn env_provider() -> Env {
    Env::prefixed("NEOTOOL_").map(|key| {
        // `key` is the lowercased env var name with the prefix stripped.
        // Example: NEOTOOL_GENERATOR_APP_NAME -> "generator_app_name"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("generator_", "generator.", 1)
            .replacen("output_", "output.", 1);
        mapped.into()
    })
}
