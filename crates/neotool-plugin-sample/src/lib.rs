// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sample plugin package for the Neotool generator.
//!
//! Registers the built-in template manifests, scaffolds, and step
//! definitions, and hooks the setup and post-build phases to record notes
//! in the shared generation context.

use std::sync::Arc;

use async_trait::async_trait;
use neotool_core::{HookContext, NeotoolError};
use neotool_registry::{Plugin, RegistrySet};
use tracing::debug;

pub mod scaffolds;
pub mod steps;
pub mod templates;

pub use scaffolds::{
    CiWorkflowScaffold, ReactFormScaffold, ReactPageScaffold, RestEndpointScaffold,
    SqlMigrationScaffold,
};
pub use steps::sample_steps;
pub use templates::sample_templates;

/// The package name presets use to select this plugin.
pub const PACKAGE_NAME: &str = "neotool-plugin-sample";

/// Sample plugin: a full set of UI, API, data, and CI generation units.
pub struct SamplePlugin;

#[async_trait]
impl Plugin for SamplePlugin {
    fn name(&self) -> &str {
        PACKAGE_NAME
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn description(&self) -> &str {
        "Built-in templates, scaffolds, and steps for standard web applications"
    }

    fn register(&self, set: &mut RegistrySet) {
        for template in sample_templates() {
            set.templates.register(template);
        }

        set.scaffolds.register(Arc::new(ReactPageScaffold));
        set.scaffolds.register(Arc::new(ReactFormScaffold));
        set.scaffolds.register(Arc::new(RestEndpointScaffold));
        set.scaffolds.register(Arc::new(SqlMigrationScaffold));
        set.scaffolds.register(Arc::new(CiWorkflowScaffold));

        for step in sample_steps() {
            set.steps.register(step);
        }

        debug!(package = PACKAGE_NAME, "sample plugin registered");
    }

    async fn setup(&self, ctx: &mut HookContext) -> Result<(), NeotoolError> {
        ctx.note(format!("{PACKAGE_NAME}: ready for preset {}", ctx.preset));
        Ok(())
    }

    async fn post_build(&self, ctx: &mut HookContext) -> Result<(), NeotoolError> {
        ctx.note(format!("{PACKAGE_NAME}: build finished for {}", ctx.app.name));
        Ok(())
    }
}
