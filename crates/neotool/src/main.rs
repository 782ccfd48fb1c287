// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Neotool - a preset-driven application scaffolding generator.
//!
//! This is the binary entry point for the neotool CLI.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use neotool_config::NeotoolConfig;
use neotool_core::{AppSpec, NeotoolError};
use neotool_plugin_sample::SamplePlugin;
use neotool_preset::{builtin_presets, find_preset, GenerationPipeline, PackageTable, Preset};
use tracing::error;

mod generate;
mod list;

/// Neotool - a preset-driven application scaffolding generator.
#[derive(Parser, Debug)]
#[command(name = "neotool", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List plugin packages loaded by the configured preset.
    Plugins,
    /// List scaffolds registered by the configured preset's plugins.
    Scaffolds,
    /// List template manifests.
    Templates,
    /// List step definitions.
    Steps,
    /// Resolve an intent, render its scaffold, and write the files.
    Generate {
        /// Intent key to resolve (e.g. "ui.page").
        #[arg(long)]
        intent: String,

        /// Feature name the scaffold targets.
        #[arg(long)]
        feature: Option<String>,

        /// Output root (overrides output.root from config).
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match neotool_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            neotool_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.generator.log_level);

    let result = run(cli, &config).await;
    if let Err(err) = result {
        error!("{err}");
        eprintln!("neotool: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &NeotoolConfig) -> Result<(), NeotoolError> {
    match cli.command {
        Some(Commands::Plugins) => {
            let (pipeline, _) = build_pipeline(config)?;
            list::print_plugins(&pipeline);
        }
        Some(Commands::Scaffolds) => {
            let (pipeline, _) = build_pipeline(config)?;
            list::print_scaffolds(&pipeline);
        }
        Some(Commands::Templates) => {
            let (pipeline, _) = build_pipeline(config)?;
            list::print_templates(&pipeline);
        }
        Some(Commands::Steps) => {
            let (pipeline, _) = build_pipeline(config)?;
            list::print_steps(&pipeline);
        }
        Some(Commands::Generate {
            intent,
            feature,
            out,
        }) => {
            let (pipeline, preset) = build_pipeline(config)?;
            generate::run_generate(config, pipeline, &preset, &intent, feature, out).await?;
        }
        None => {
            println!("neotool: use --help for available commands");
        }
    }
    Ok(())
}

/// The compiled-in plugin package table.
fn package_table() -> PackageTable {
    let mut table = PackageTable::new();
    table.insert(Arc::new(SamplePlugin));
    table
}

/// Resolves the configured preset and builds the generation pipeline.
fn build_pipeline(config: &NeotoolConfig) -> Result<(GenerationPipeline, Preset), NeotoolError> {
    let preset = find_preset(&config.generator.preset).ok_or_else(|| {
        let available: Vec<String> = builtin_presets().into_iter().map(|p| p.name).collect();
        NeotoolError::Config(format!(
            "unknown preset `{}` (available: {})",
            config.generator.preset,
            available.join(", ")
        ))
    })?;

    let app = AppSpec {
        name: config.generator.app_name.clone(),
        title: config.generator.app_title.clone(),
    };

    let pipeline = GenerationPipeline::new(app, &preset, &package_table())?;
    Ok((pipeline, preset))
}

/// Initializes the tracing subscriber from the configured log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("neotool={log_level},warn")));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
