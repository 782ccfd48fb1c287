// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registries for the Neotool application generator.
//!
//! Four registries with two storage disciplines, kept deliberately distinct:
//! keyed registries (scaffolds, templates) overwrite on duplicate id, while
//! list registries (plugins, steps) append and retain duplicates in
//! registration order. All `list()` methods return snapshots.

pub mod plugin;
pub mod scaffold;
pub mod set;
pub mod step;
pub mod template;

pub use plugin::{run_hook, HookPhase, Plugin, PluginRegistry};
pub use scaffold::ScaffoldRegistry;
pub use set::RegistrySet;
pub use step::{match_step, StepDefinition, StepMatch, StepPattern, StepRegistry};
pub use template::TemplateRegistry;
