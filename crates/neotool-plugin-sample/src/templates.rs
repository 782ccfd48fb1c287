// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in template manifests registered by the sample plugin.

use neotool_core::{RegionKind, TemplateManifest, TemplateRegion};

/// Returns the sample plugin's template manifests.
///
/// Two templates:
/// - dashboard-shell (page/menu/panel/slot regions, typed props)
/// - blank-page (single page region)
pub fn sample_templates() -> Vec<TemplateManifest> {
    vec![
        TemplateManifest {
            id: "dashboard-shell".to_string(),
            label: "Dashboard shell".to_string(),
            regions: vec![
                TemplateRegion {
                    id: "main".to_string(),
                    kind: RegionKind::Page,
                },
                TemplateRegion {
                    id: "sidebar".to_string(),
                    kind: RegionKind::Menu,
                },
                TemplateRegion {
                    id: "detail".to_string(),
                    kind: RegionKind::Panel,
                },
                TemplateRegion {
                    id: "footer".to_string(),
                    kind: RegionKind::Slot,
                },
            ],
            props_schema: Some(serde_json::json!({
                "type": "object",
                "properties": {
                    "title": { "type": "string", "description": "Heading shown in the shell" },
                    "collapsed": { "type": "boolean", "description": "Start with the sidebar collapsed" }
                },
                "required": ["title"]
            })),
            entry: Some("app/web/src/templates/DashboardShell.tsx".to_string()),
        },
        TemplateManifest {
            id: "blank-page".to_string(),
            label: "Blank page".to_string(),
            regions: vec![TemplateRegion {
                id: "main".to_string(),
                kind: RegionKind::Page,
            }],
            props_schema: None,
            entry: None,
        },
    ]
}
