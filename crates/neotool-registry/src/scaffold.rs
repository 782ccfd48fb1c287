// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scaffold registry keyed by scaffold id.

use std::collections::HashMap;
use std::sync::Arc;

use neotool_core::Scaffold;
use tracing::debug;

/// Registry of code-generation scaffolds, keyed by id.
///
/// Registration for an already-present id replaces the prior scaffold
/// (last write wins) -- this doubles as the plugin override mechanism and is
/// surfaced through a debug event rather than an error. Lookup misses return
/// `None`; callers decide whether that is fatal.
pub struct ScaffoldRegistry {
    scaffolds: HashMap<String, Arc<dyn Scaffold>>,
}

impl ScaffoldRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            scaffolds: HashMap::new(),
        }
    }

    /// Stores the scaffold under its `id()`, replacing any prior entry.
    pub fn register(&mut self, scaffold: Arc<dyn Scaffold>) {
        let id = scaffold.id().to_string();
        if self.scaffolds.insert(id.clone(), scaffold).is_some() {
            debug!(id = %id, "scaffold overwritten");
        } else {
            debug!(id = %id, "scaffold registered");
        }
    }

    /// Looks up a scaffold by id.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Scaffold>> {
        self.scaffolds.get(id).cloned()
    }

    /// Returns a snapshot of all registered scaffolds, sorted by id.
    ///
    /// Key order is identity, not position: the only ordering promise is
    /// determinism for a fixed registration sequence.
    pub fn list(&self) -> Vec<Arc<dyn Scaffold>> {
        let mut entries: Vec<Arc<dyn Scaffold>> = self.scaffolds.values().cloned().collect();
        entries.sort_by(|a, b| a.id().cmp(b.id()));
        entries
    }

    /// Returns the number of registered scaffolds.
    pub fn len(&self) -> usize {
        self.scaffolds.len()
    }

    /// Returns true if no scaffolds are registered.
    pub fn is_empty(&self) -> bool {
        self.scaffolds.is_empty()
    }
}

impl Default for ScaffoldRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ScaffoldRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScaffoldRegistry")
            .field("len", &self.scaffolds.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use neotool_core::{GeneratedFile, NeotoolError, ScaffoldContext, ScaffoldKind};

    #[derive(Debug)]
    struct FixedScaffold {
        id: &'static str,
        path: &'static str,
    }

    #[async_trait]
    impl Scaffold for FixedScaffold {
        fn id(&self) -> &str {
            self.id
        }

        fn applies_to(&self) -> ScaffoldKind {
            ScaffoldKind::Ui
        }

        async fn render(
            &self,
            _ctx: &ScaffoldContext,
        ) -> Result<Vec<GeneratedFile>, NeotoolError> {
            Ok(vec![GeneratedFile {
                path: self.path.to_string(),
                content: "// generated".to_string(),
                mode: None,
            }])
        }
    }

    #[test]
    fn register_and_get_roundtrip() {
        let mut registry = ScaffoldRegistry::new();
        registry.register(Arc::new(FixedScaffold {
            id: "react-page",
            path: "a.tsx",
        }));

        let scaffold = registry.get("react-page").unwrap();
        assert_eq!(scaffold.id(), "react-page");
        assert_eq!(scaffold.applies_to(), ScaffoldKind::Ui);
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        let registry = ScaffoldRegistry::new();
        assert!(registry.get("nonexistent").is_none());
    }

    #[tokio::test]
    async fn duplicate_id_last_registration_wins() {
        let mut registry = ScaffoldRegistry::new();
        registry.register(Arc::new(FixedScaffold {
            id: "react-page",
            path: "first.tsx",
        }));
        registry.register(Arc::new(FixedScaffold {
            id: "react-page",
            path: "second.tsx",
        }));

        assert_eq!(registry.len(), 1);
        let ctx = ScaffoldContext::new(neotool_core::AppSpec {
            name: "shop".to_string(),
            title: "Shop".to_string(),
        });
        let files = registry.get("react-page").unwrap().render(&ctx).await.unwrap();
        assert_eq!(files[0].path, "second.tsx");
    }

    #[test]
    fn list_is_sorted_and_a_snapshot() {
        let mut registry = ScaffoldRegistry::new();
        registry.register(Arc::new(FixedScaffold {
            id: "zeta",
            path: "z.tsx",
        }));
        registry.register(Arc::new(FixedScaffold {
            id: "alpha",
            path: "a.tsx",
        }));

        let mut listed = registry.list();
        assert_eq!(listed[0].id(), "alpha");
        assert_eq!(listed[1].id(), "zeta");

        listed.clear();
        assert_eq!(registry.list().len(), 2);
        assert!(registry.get("alpha").is_some());
    }
}
