// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Neotool application generator.
//!
//! This crate provides the error type, the shared value types (scaffold
//! kinds, generated files, template manifests, blueprint hints, generation
//! contexts), and the `Scaffold` trait implemented by every code-generation
//! unit. Registries and the plugin trait live in `neotool-registry`.

pub mod context;
pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use context::{
    ApiBlueprint, AppSpec, DataBlueprint, FeatureSpec, HookContext, ScaffoldContext, UiBlueprint,
};
pub use error::NeotoolError;
pub use traits::Scaffold;
pub use types::{
    BlueprintHint, FieldSpec, FileMode, GeneratedFile, HttpMethod, RegionKind, ScaffoldKind,
    StepKind, TemplateManifest, TemplateRegion,
};
