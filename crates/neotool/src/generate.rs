// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `neotool generate` command implementation.
//!
//! Runs the full pipeline for one intent: lifecycle phases, intent
//! resolution, scaffold rendering, and writing the generated files under
//! the output root.

use std::path::PathBuf;

use neotool_config::NeotoolConfig;
use neotool_core::{FeatureSpec, NeotoolError, ScaffoldContext};
use neotool_preset::{write_files, GenerationPipeline, Preset};
use tracing::info;

/// Runs a full generation for the given intent and writes the results.
pub async fn run_generate(
    config: &NeotoolConfig,
    mut pipeline: GenerationPipeline,
    preset: &Preset,
    intent: &str,
    feature: Option<String>,
    out: Option<PathBuf>,
) -> Result<(), NeotoolError> {
    let mut ctx = ScaffoldContext::new(neotool_core::AppSpec {
        name: config.generator.app_name.clone(),
        title: config.generator.app_title.clone(),
    });
    ctx.feature = feature.map(|name| FeatureSpec {
        description: format!("{name} feature of {}", config.generator.app_name),
        name,
    });

    let files = pipeline.run(preset, intent, &ctx).await?;

    let root = out.unwrap_or_else(|| PathBuf::from(&config.output.root));
    write_files(&root, &files, config.output.overwrite)?;

    info!(
        intent,
        count = files.len(),
        root = %root.display(),
        "generation complete"
    );
    println!(
        "generated {} file(s) under {} for intent `{intent}`",
        files.len(),
        root.display()
    );
    for file in &files {
        println!("  {}", file.path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_pipeline, package_table};
    use neotool_preset::find_preset;

    #[tokio::test]
    async fn generate_ui_page_writes_files_under_out_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let config = NeotoolConfig::default();
        let (pipeline, preset) = build_pipeline(&config).unwrap();

        run_generate(
            &config,
            pipeline,
            &preset,
            "ui.page",
            Some("orders".to_string()),
            Some(tmp.path().to_path_buf()),
        )
        .await
        .unwrap();

        assert!(tmp
            .path()
            .join("app/web/src/pages/OrdersPage.tsx")
            .exists());
        assert!(tmp.path().join("app/web/src/routes/orders.tsx").exists());
    }

    #[tokio::test]
    async fn generate_unknown_intent_fails_without_writing() {
        let tmp = tempfile::tempdir().unwrap();
        let config = NeotoolConfig::default();
        let (pipeline, preset) = build_pipeline(&config).unwrap();

        let err = run_generate(
            &config,
            pipeline,
            &preset,
            "ui.unknown",
            None,
            Some(tmp.path().to_path_buf()),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, NeotoolError::MappingMiss { .. }));
        assert!(std::fs::read_dir(tmp.path()).unwrap().next().is_none());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn generate_ci_workflow_writes_executable_script() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let config = NeotoolConfig::default();
        let (pipeline, preset) = build_pipeline(&config).unwrap();

        run_generate(
            &config,
            pipeline,
            &preset,
            "ci.workflow",
            None,
            Some(tmp.path().to_path_buf()),
        )
        .await
        .unwrap();

        let script = tmp.path().join("scripts/ci/run-checks.sh");
        let mode = std::fs::metadata(&script).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn package_table_round_trips_through_pipeline() {
        let preset = find_preset("api-service").unwrap();
        let app = neotool_core::AppSpec {
            name: "svc".to_string(),
            title: "Service".to_string(),
        };
        let pipeline = GenerationPipeline::new(app, &preset, &package_table()).unwrap();
        // The api-service preset loads the same sample package; UI scaffolds
        // are registered but simply unmapped.
        assert!(pipeline.registries().scaffolds.get("rest-endpoint").is_some());
    }
}
