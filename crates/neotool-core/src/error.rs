// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Neotool generator.

use thiserror::Error;

/// The primary error type used across all Neotool crates.
///
/// Registry lookups do not produce errors -- `get` returns `Option` and the
/// caller decides. Only the preset resolver promotes a miss to
/// `MappingMiss`/`ScaffoldNotFound`.
#[derive(Debug, Error)]
pub enum NeotoolError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Plugin registration or lifecycle-hook failure.
    #[error("plugin `{name}` failed: {message}")]
    Plugin {
        name: String,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A scaffold's render call failed.
    #[error("scaffold `{id}` failed: {message}")]
    Scaffold {
        id: String,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The preset has no scaffold mapping for the requested intent.
    #[error("no scaffold mapping for intent `{intent}` in preset `{preset}`{}",
        .suggestion.as_ref().map(|s| format!(" (did you mean `{s}`?)")).unwrap_or_default())]
    MappingMiss {
        preset: String,
        intent: String,
        suggestion: Option<String>,
    },

    /// A mapped scaffold id is absent from the scaffold registry.
    #[error("scaffold not found: {id}")]
    ScaffoldNotFound { id: String },

    /// A preset named a plugin package that is not compiled in.
    #[error("plugin package not found: {package}")]
    PluginPackageNotFound { package: String },

    /// Filesystem failure while writing generated files.
    #[error("io error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
