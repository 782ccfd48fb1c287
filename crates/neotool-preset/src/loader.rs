// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin package loading against the compiled-in package table.

use std::collections::HashMap;
use std::sync::Arc;

use neotool_core::NeotoolError;
use neotool_registry::{Plugin, PluginRegistry};
use tracing::info;

use crate::manifest::Preset;

/// Table of compiled-in plugin packages, keyed by package name.
///
/// The binary assembles this once at startup; presets then select packages
/// from it by name.
#[derive(Default)]
pub struct PackageTable {
    packages: HashMap<String, Arc<dyn Plugin>>,
}

impl PackageTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a package, keyed by its `name()`.
    pub fn insert(&mut self, plugin: Arc<dyn Plugin>) {
        self.packages.insert(plugin.name().to_string(), plugin);
    }

    /// Looks up a package by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Plugin>> {
        self.packages.get(name).cloned()
    }

    /// Returns the number of packages in the table.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl std::fmt::Debug for PackageTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackageTable")
            .field("len", &self.packages.len())
            .finish()
    }
}

/// Loads the plugin packages named by a preset into the plugin registry.
///
/// Packages are appended in the preset's declared order, so hook execution
/// later follows that order. An unknown package name fails the whole load --
/// a preset naming a package that is not compiled in is a configuration
/// mistake, not something to skip silently.
pub fn load_plugins(
    preset: &Preset,
    table: &PackageTable,
    registry: &mut PluginRegistry,
) -> Result<(), NeotoolError> {
    for package in &preset.plugins {
        let plugin =
            table
                .get(package)
                .ok_or_else(|| NeotoolError::PluginPackageNotFound {
                    package: package.clone(),
                })?;
        registry.register(plugin);
    }
    info!(
        preset = %preset.name,
        count = registry.len(),
        "plugin packages loaded"
    );
    Ok(())
}
