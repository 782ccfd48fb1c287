// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Template manifest registry keyed by template id.

use std::collections::HashMap;

use neotool_core::TemplateManifest;
use tracing::debug;

/// Registry of UI template manifests, keyed by id.
///
/// Same storage and retrieval shape as the scaffold registry (register with
/// overwrite, get returns `Option`, list returns a snapshot), but the values
/// are pure metadata -- there is no render step here.
#[derive(Debug)]
pub struct TemplateRegistry {
    templates: HashMap<String, TemplateManifest>,
}

impl TemplateRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Stores the manifest under its id, replacing any prior entry.
    pub fn register(&mut self, manifest: TemplateManifest) {
        let id = manifest.id.clone();
        if self.templates.insert(id.clone(), manifest).is_some() {
            debug!(id = %id, "template overwritten");
        } else {
            debug!(id = %id, "template registered");
        }
    }

    /// Looks up a template manifest by id.
    pub fn get(&self, id: &str) -> Option<&TemplateManifest> {
        self.templates.get(id)
    }

    /// Returns a snapshot of all registered manifests, sorted by id.
    pub fn list(&self) -> Vec<TemplateManifest> {
        let mut entries: Vec<TemplateManifest> = self.templates.values().cloned().collect();
        entries.sort_by(|a, b| a.id.cmp(&b.id));
        entries
    }

    /// Returns the number of registered manifests.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if no manifests are registered.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neotool_core::{RegionKind, TemplateRegion};

    fn manifest(id: &str, label: &str) -> TemplateManifest {
        TemplateManifest {
            id: id.to_string(),
            label: label.to_string(),
            regions: vec![TemplateRegion {
                id: "main".to_string(),
                kind: RegionKind::Page,
            }],
            props_schema: None,
            entry: None,
        }
    }

    #[test]
    fn register_and_get_roundtrip() {
        let mut registry = TemplateRegistry::new();
        registry.register(manifest("dashboard-shell", "Dashboard shell"));

        let found = registry.get("dashboard-shell").unwrap();
        assert_eq!(found.label, "Dashboard shell");
        assert_eq!(found.regions[0].kind, RegionKind::Page);
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        let registry = TemplateRegistry::new();
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn duplicate_id_last_registration_wins() {
        let mut registry = TemplateRegistry::new();
        registry.register(manifest("shell", "First"));
        registry.register(manifest("shell", "Second"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("shell").unwrap().label, "Second");
    }

    #[test]
    fn list_is_sorted_and_a_snapshot() {
        let mut registry = TemplateRegistry::new();
        registry.register(manifest("zeta", "Z"));
        registry.register(manifest("alpha", "A"));

        let mut listed = registry.list();
        assert_eq!(listed[0].id, "alpha");
        assert_eq!(listed[1].id, "zeta");

        // Mutating the snapshot must not affect the registry.
        listed[0].label = "mutated".to_string();
        listed.pop();
        assert_eq!(registry.get("alpha").unwrap().label, "A");
        assert_eq!(registry.list().len(), 2);
    }
}
