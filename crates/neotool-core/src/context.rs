// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generation context records passed to scaffolds and lifecycle hooks.
//!
//! Both contexts are explicit tagged records rather than open-ended
//! dictionaries. Truly open-ended data flows through the `extra` side
//! channel as a JSON value.

use serde::{Deserialize, Serialize};

/// The application being generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSpec {
    /// Machine name of the application (used in paths and identifiers).
    pub name: String,
    /// Human-readable title.
    pub title: String,
}

/// A feature within the application that a scaffold targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSpec {
    pub name: String,
    pub description: String,
}

/// UI blueprint fragment: the views the application exposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiBlueprint {
    #[serde(default)]
    pub views: Vec<String>,
}

/// API blueprint fragment: operation ids the application exposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiBlueprint {
    #[serde(default)]
    pub operations: Vec<String>,
}

/// Data blueprint fragment: entity names the application persists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataBlueprint {
    #[serde(default)]
    pub entities: Vec<String>,
}

/// Context handed to [`Scaffold::render`](crate::Scaffold::render).
///
/// The app spec is always present; the feature and blueprint fragments are
/// optional and a scaffold must tolerate their absence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldContext {
    pub app: AppSpec,
    #[serde(default)]
    pub feature: Option<FeatureSpec>,
    #[serde(default)]
    pub ui: Option<UiBlueprint>,
    #[serde(default)]
    pub api: Option<ApiBlueprint>,
    #[serde(default)]
    pub data: Option<DataBlueprint>,
    /// Open-ended side channel for data outside the typed fields.
    #[serde(default)]
    pub extra: serde_json::Value,
}

impl ScaffoldContext {
    /// Creates a context with only the app spec populated.
    pub fn new(app: AppSpec) -> Self {
        Self {
            app,
            feature: None,
            ui: None,
            api: None,
            data: None,
            extra: serde_json::Value::Null,
        }
    }
}

/// Shared mutable context threaded through plugin lifecycle hooks.
///
/// Hooks run sequentially in registration order, so notes appended by an
/// earlier plugin are visible to every later plugin in the same phase.
#[derive(Debug, Clone)]
pub struct HookContext {
    pub app: AppSpec,
    /// Name of the preset driving this generation run.
    pub preset: String,
    /// Notes accumulated across hooks, in append order.
    pub notes: Vec<String>,
    /// Open-ended side channel, mirroring [`ScaffoldContext::extra`].
    pub extra: serde_json::Value,
}

impl HookContext {
    pub fn new(app: AppSpec, preset: impl Into<String>) -> Self {
        Self {
            app,
            preset: preset.into(),
            notes: Vec::new(),
            extra: serde_json::Value::Null,
        }
    }

    /// Appends a note observable by later hooks in the run.
    pub fn note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }
}
