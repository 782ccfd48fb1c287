// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin trait, lifecycle phases, and the plugin registry.
//!
//! A plugin package bundles registration (scaffolds, templates, steps) with
//! optional asynchronous lifecycle hooks. Every hook has a default no-op
//! body, so a plugin overrides only the phases it cares about. The registry
//! stores plugins in an ordered, append-only sequence and never invokes
//! hooks itself -- invocation order and error policy belong to the
//! generation pipeline.

use std::sync::Arc;

use async_trait::async_trait;
use neotool_core::{HookContext, NeotoolError};
use strum::{Display, EnumString};
use tracing::debug;

use crate::set::RegistrySet;

/// The seven lifecycle phases a plugin may hook into.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum HookPhase {
    Setup,
    PreValidate,
    PostValidate,
    PreCompile,
    PostCompile,
    PreBuild,
    PostBuild,
}

impl HookPhase {
    /// All phases in pipeline execution order.
    pub const ALL: [HookPhase; 7] = [
        HookPhase::Setup,
        HookPhase::PreValidate,
        HookPhase::PostValidate,
        HookPhase::PreCompile,
        HookPhase::PostCompile,
        HookPhase::PreBuild,
        HookPhase::PostBuild,
    ];
}

/// A plugin package: registration entry point plus optional lifecycle hooks.
///
/// Hooks take the shared mutable [`HookContext`] so a later plugin can
/// observe side effects of an earlier one within the same phase.
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Package name of the plugin (e.g. "neotool-plugin-sample").
    fn name(&self) -> &str;

    /// Semantic version of the plugin package.
    fn version(&self) -> semver::Version;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// Populates the shared registries with this plugin's scaffolds,
    /// templates, and step definitions. Called once per generation run,
    /// in plugin registration order.
    fn register(&self, set: &mut RegistrySet);

    /// Runs before any validation or compilation.
    async fn setup(&self, _ctx: &mut HookContext) -> Result<(), NeotoolError> {
        Ok(())
    }

    async fn pre_validate(&self, _ctx: &mut HookContext) -> Result<(), NeotoolError> {
        Ok(())
    }

    async fn post_validate(&self, _ctx: &mut HookContext) -> Result<(), NeotoolError> {
        Ok(())
    }

    async fn pre_compile(&self, _ctx: &mut HookContext) -> Result<(), NeotoolError> {
        Ok(())
    }

    async fn post_compile(&self, _ctx: &mut HookContext) -> Result<(), NeotoolError> {
        Ok(())
    }

    async fn pre_build(&self, _ctx: &mut HookContext) -> Result<(), NeotoolError> {
        Ok(())
    }

    /// Runs after generated files have been produced.
    async fn post_build(&self, _ctx: &mut HookContext) -> Result<(), NeotoolError> {
        Ok(())
    }
}

/// Dispatches a single lifecycle phase on a plugin.
///
/// The match is exhaustive so a new phase is a compile-time visible change.
pub async fn run_hook(
    plugin: &dyn Plugin,
    phase: HookPhase,
    ctx: &mut HookContext,
) -> Result<(), NeotoolError> {
    match phase {
        HookPhase::Setup => plugin.setup(ctx).await,
        HookPhase::PreValidate => plugin.pre_validate(ctx).await,
        HookPhase::PostValidate => plugin.post_validate(ctx).await,
        HookPhase::PreCompile => plugin.pre_compile(ctx).await,
        HookPhase::PostCompile => plugin.post_compile(ctx).await,
        HookPhase::PreBuild => plugin.pre_build(ctx).await,
        HookPhase::PostBuild => plugin.post_build(ctx).await,
    }
}

/// Ordered, append-only registry of plugin packages.
///
/// Registration performs no uniqueness check: a plugin with a duplicate name
/// is accepted and both entries remain in sequence. `list()` returns a copy,
/// so callers cannot mutate internal state through the returned value.
pub struct PluginRegistry {
    plugins: Vec<Arc<dyn Plugin>>,
}

impl PluginRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Appends a plugin to the sequence.
    pub fn register(&mut self, plugin: Arc<dyn Plugin>) {
        debug!(name = %plugin.name(), "plugin registered");
        self.plugins.push(plugin);
    }

    /// Returns a snapshot of the registered plugins, in registration order.
    pub fn list(&self) -> Vec<Arc<dyn Plugin>> {
        self.plugins.clone()
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("len", &self.plugins.len())
            .finish()
    }
}
