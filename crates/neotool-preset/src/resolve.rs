// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intent resolution: abstract intent key to concrete scaffold.

use std::sync::Arc;

use neotool_core::{NeotoolError, Scaffold};
use neotool_registry::ScaffoldRegistry;

use crate::manifest::Preset;

/// Minimum Jaro-Winkler similarity score to suggest an intent correction.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Resolves an abstract intent key against a preset and scaffold registry.
///
/// Two distinct, recoverable failures:
/// - the intent key is absent from the preset's mapping (`MappingMiss`,
///   with a "did you mean" suggestion when a close key exists);
/// - the mapped scaffold id is absent from the registry
///   (`ScaffoldNotFound`).
///
/// A miss is never folded into an empty file list -- callers must be able
/// to distinguish "nothing mapped" from "rendered zero files".
pub fn resolve_intent(
    preset: &Preset,
    scaffolds: &ScaffoldRegistry,
    intent: &str,
) -> Result<Arc<dyn Scaffold>, NeotoolError> {
    let Some(scaffold_id) = preset.scaffold_mapping.get(intent) else {
        return Err(NeotoolError::MappingMiss {
            preset: preset.name.clone(),
            intent: intent.to_string(),
            suggestion: suggest_intent(intent, preset),
        });
    };

    scaffolds
        .get(scaffold_id)
        .ok_or_else(|| NeotoolError::ScaffoldNotFound {
            id: scaffold_id.clone(),
        })
}

/// Suggest a similar intent key from the preset's mapping.
fn suggest_intent(unknown: &str, preset: &Preset) -> Option<String> {
    let mut best_score = SUGGESTION_THRESHOLD;
    let mut best_match = None;

    for key in preset.scaffold_mapping.keys() {
        let score = strsim::jaro_winkler(unknown, key);
        if score > best_score {
            best_score = score;
            best_match = Some(key.clone());
        }
    }

    best_match
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use neotool_core::{GeneratedFile, ScaffoldContext, ScaffoldKind};
    use std::collections::BTreeMap;

    #[derive(Debug)]
    struct PageScaffold;

    #[async_trait]
    impl Scaffold for PageScaffold {
        fn id(&self) -> &str {
            "react-page"
        }

        fn applies_to(&self) -> ScaffoldKind {
            ScaffoldKind::Ui
        }

        async fn render(
            &self,
            _ctx: &ScaffoldContext,
        ) -> Result<Vec<GeneratedFile>, NeotoolError> {
            Ok(vec![GeneratedFile {
                path: "app/web/src/pages/ExamplePage.tsx".to_string(),
                content: "// generated page".to_string(),
                mode: Some(neotool_core::FileMode::Regular),
            }])
        }
    }

    fn test_preset() -> Preset {
        Preset {
            name: "standard-web".to_string(),
            plugins: vec![],
            scaffold_mapping: BTreeMap::from([
                ("ui.page".to_string(), "react-page".to_string()),
                ("api.endpoint".to_string(), "rest-endpoint".to_string()),
            ]),
        }
    }

    #[tokio::test]
    async fn resolving_mapped_intent_renders_expected_file() {
        let preset = test_preset();
        let mut registry = ScaffoldRegistry::new();
        registry.register(Arc::new(PageScaffold));

        let scaffold = resolve_intent(&preset, &registry, "ui.page").unwrap();
        let ctx = ScaffoldContext::new(neotool_core::AppSpec {
            name: "shop".to_string(),
            title: "Shop".to_string(),
        });
        let files = scaffold.render(&ctx).await.unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "app/web/src/pages/ExamplePage.tsx");
        assert_eq!(files[0].content, "// generated page");
    }

    #[test]
    fn unmapped_intent_is_a_mapping_miss_not_an_empty_list() {
        let preset = test_preset();
        let registry = ScaffoldRegistry::new();

        let err = resolve_intent(&preset, &registry, "ui.unknown").unwrap_err();
        assert!(matches!(
            err,
            NeotoolError::MappingMiss { ref intent, .. } if intent == "ui.unknown"
        ));
    }

    #[test]
    fn near_miss_intent_gets_a_suggestion() {
        let preset = test_preset();
        let registry = ScaffoldRegistry::new();

        let err = resolve_intent(&preset, &registry, "ui.pge").unwrap_err();
        match err {
            NeotoolError::MappingMiss { suggestion, .. } => {
                assert_eq!(suggestion.as_deref(), Some("ui.page"));
            }
            other => panic!("expected MappingMiss, got {other:?}"),
        }
    }

    #[test]
    fn mapped_but_unregistered_scaffold_is_scaffold_not_found() {
        let preset = test_preset();
        let registry = ScaffoldRegistry::new();

        let err = resolve_intent(&preset, &registry, "api.endpoint").unwrap_err();
        assert!(matches!(
            err,
            NeotoolError::ScaffoldNotFound { ref id } if id == "rest-endpoint"
        ));
    }
}
