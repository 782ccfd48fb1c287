// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common value types used across the Neotool generator.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The application layer a scaffold generates code for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ScaffoldKind {
    Ui,
    Api,
    Data,
    Infra,
    Ci,
}

/// File permission mode for a generated file.
///
/// `Executable` ("755") is reserved for executable files; an absent mode on
/// [`GeneratedFile`] implies default, non-executable permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileMode {
    #[serde(rename = "644")]
    Regular,
    #[serde(rename = "755")]
    Executable,
}

impl std::fmt::Display for FileMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileMode::Regular => write!(f, "644"),
            FileMode::Executable => write!(f, "755"),
        }
    }
}

/// One file produced by a scaffold render, to be written under the target
/// project root. The path is relative to that root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
    #[serde(default)]
    pub mode: Option<FileMode>,
}

/// The kind of region a UI template exposes for slotting content.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    Page,
    Menu,
    Panel,
    Slot,
}

/// A named region within a template manifest. Region order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRegion {
    pub id: String,
    pub kind: RegionKind,
}

/// Describes a UI page/layout template and the regions it exposes.
///
/// Pure metadata -- consumed by a UI-composition layer, never rendered here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Unique template id within a registry instance.
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// Ordered list of regions the template exposes.
    pub regions: Vec<TemplateRegion>,
    /// Optional JSON Schema for the template's props.
    #[serde(default)]
    pub props_schema: Option<serde_json::Value>,
    /// Optional entry path for the template's implementation.
    #[serde(default)]
    pub entry: Option<String>,
}

/// Behaviour-driven step kind.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum StepKind {
    Given,
    When,
    Then,
}

/// HTTP method for an API operation hint.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// A single field on a data entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

/// A structured instruction describing one change to an application's UI,
/// API, or data blueprint.
///
/// Consumers must match exhaustively so a new hint kind is a compile-time
/// visible change everywhere hints are consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BlueprintHint {
    /// Wire a UI interaction (e.g. a button click) to an action.
    Interaction {
        component: String,
        event: String,
        action: String,
    },
    /// Change what a view displays.
    ViewChange { view: String, description: String },
    /// Add an operation to the API blueprint.
    ApiOperationAdd {
        method: HttpMethod,
        path: String,
        operation_id: String,
    },
    /// Add an entity to the data blueprint.
    DataEntityAdd {
        entity: String,
        fields: Vec<FieldSpec>,
    },
}
