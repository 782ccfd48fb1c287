// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The registry bundle handed to plugin registration calls.

use crate::scaffold::ScaffoldRegistry;
use crate::step::StepRegistry;
use crate::template::TemplateRegistry;

/// Shared registry instances populated during plugin loading.
///
/// The plugin registry itself is not part of the set: plugins are appended
/// by the loader, not by other plugins.
#[derive(Debug, Default)]
pub struct RegistrySet {
    pub scaffolds: ScaffoldRegistry,
    pub templates: TemplateRegistry,
    pub steps: StepRegistry,
}

impl RegistrySet {
    /// Creates a set of empty registries.
    pub fn new() -> Self {
        Self::default()
    }
}
