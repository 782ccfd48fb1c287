// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Preset handling and the generation pipeline for the Neotool generator.
//!
//! A preset names the plugin packages to load and maps abstract intents to
//! scaffold ids. This crate parses presets, ships the built-in preset
//! catalog, loads plugin packages from the compiled-in table, resolves
//! intents, and drives the sequential generation pipeline.

pub mod catalog;
pub mod loader;
pub mod manifest;
pub mod pipeline;
pub mod resolve;
pub mod write;

pub use catalog::{builtin_presets, find_preset};
pub use loader::{load_plugins, PackageTable};
pub use manifest::{parse_preset, Preset};
pub use pipeline::GenerationPipeline;
pub use resolve::resolve_intent;
pub use write::write_files;
