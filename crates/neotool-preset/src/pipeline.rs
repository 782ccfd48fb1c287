// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The sequential generation pipeline.
//!
//! Plugins are loaded and registered in preset order, lifecycle hooks run
//! sequentially in registration order (one phase at a time, awaiting each
//! hook before the next plugin), and rendering happens between the
//! pre-build and post-build phases. Sequential execution keeps generated
//! file ordering deterministic and lets later plugins observe earlier
//! plugins' side effects through the shared hook context.

use neotool_core::{AppSpec, GeneratedFile, HookContext, NeotoolError, ScaffoldContext};
use neotool_registry::{run_hook, HookPhase, PluginRegistry, RegistrySet};
use tracing::{debug, info};

use crate::loader::{load_plugins, PackageTable};
use crate::manifest::Preset;
use crate::resolve::resolve_intent;

/// Drives plugin loading, hook execution, and scaffold rendering for one
/// generation run.
#[derive(Debug)]
pub struct GenerationPipeline {
    plugins: PluginRegistry,
    registries: RegistrySet,
    ctx: HookContext,
}

impl GenerationPipeline {
    /// Loads the preset's plugin packages and runs every plugin's
    /// registration entry point, in preset order.
    pub fn new(
        app: AppSpec,
        preset: &Preset,
        table: &PackageTable,
    ) -> Result<Self, NeotoolError> {
        let mut plugins = PluginRegistry::new();
        load_plugins(preset, table, &mut plugins)?;

        let mut registries = RegistrySet::new();
        for plugin in plugins.list() {
            debug!(plugin = %plugin.name(), "running plugin registration");
            plugin.register(&mut registries);
        }

        let ctx = HookContext::new(app, preset.name.clone());
        Ok(Self {
            plugins,
            registries,
            ctx,
        })
    }

    /// The shared registries populated by plugin registration.
    pub fn registries(&self) -> &RegistrySet {
        &self.registries
    }

    /// The loaded plugin packages.
    pub fn plugins(&self) -> &PluginRegistry {
        &self.plugins
    }

    /// The shared hook context accumulated so far.
    pub fn context(&self) -> &HookContext {
        &self.ctx
    }

    /// Runs one lifecycle phase across all plugins, in registration order.
    ///
    /// The first hook failure aborts the phase and propagates.
    pub async fn run_phase(&mut self, phase: HookPhase) -> Result<(), NeotoolError> {
        for plugin in self.plugins.list() {
            debug!(plugin = %plugin.name(), phase = %phase, "running hook");
            run_hook(plugin.as_ref(), phase, &mut self.ctx).await?;
        }
        Ok(())
    }

    /// Resolves an intent against the preset and renders the scaffold.
    ///
    /// No hooks run here; use [`run`](Self::run) for the full phase
    /// sequence around a render.
    pub async fn generate(
        &self,
        preset: &Preset,
        intent: &str,
        ctx: &ScaffoldContext,
    ) -> Result<Vec<GeneratedFile>, NeotoolError> {
        let scaffold = resolve_intent(preset, &self.registries.scaffolds, intent)?;
        info!(intent, scaffold = %scaffold.id(), "rendering scaffold");
        scaffold.render(ctx).await
    }

    /// Full generation run: all pre phases, render, then post-build.
    pub async fn run(
        &mut self,
        preset: &Preset,
        intent: &str,
        ctx: &ScaffoldContext,
    ) -> Result<Vec<GeneratedFile>, NeotoolError> {
        for phase in [
            HookPhase::Setup,
            HookPhase::PreValidate,
            HookPhase::PostValidate,
            HookPhase::PreCompile,
            HookPhase::PostCompile,
            HookPhase::PreBuild,
        ] {
            self.run_phase(phase).await?;
        }

        let files = self.generate(preset, intent, ctx).await?;

        self.run_phase(HookPhase::PostBuild).await?;
        Ok(files)
    }
}
