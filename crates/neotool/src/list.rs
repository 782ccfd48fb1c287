// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Listing subcommands: plugins, scaffolds, templates, steps.

use neotool_preset::GenerationPipeline;

/// Prints the loaded plugin packages.
pub fn print_plugins(pipeline: &GenerationPipeline) {
    let plugins = pipeline.plugins().list();
    if plugins.is_empty() {
        println!("no plugin packages loaded");
        return;
    }
    for plugin in plugins {
        println!(
            "{:<28} {:<8} {}",
            plugin.name(),
            plugin.version().to_string(),
            plugin.description()
        );
    }
}

/// Prints the registered scaffolds.
pub fn print_scaffolds(pipeline: &GenerationPipeline) {
    let scaffolds = pipeline.registries().scaffolds.list();
    if scaffolds.is_empty() {
        println!("no scaffolds registered");
        return;
    }
    for scaffold in scaffolds {
        println!("{:<20} {}", scaffold.id(), scaffold.applies_to());
    }
}

/// Prints the registered template manifests.
pub fn print_templates(pipeline: &GenerationPipeline) {
    let templates = pipeline.registries().templates.list();
    if templates.is_empty() {
        println!("no templates registered");
        return;
    }
    for template in templates {
        println!(
            "{:<20} {:<24} {} region(s)",
            template.id,
            template.label,
            template.regions.len()
        );
    }
}

/// Prints the registered step definitions, in registration order.
pub fn print_steps(pipeline: &GenerationPipeline) {
    let steps = pipeline.registries().steps.list();
    if steps.is_empty() {
        println!("no steps registered");
        return;
    }
    for step in steps {
        println!(
            "{:<6} {:<48} {}",
            step.kind.to_string(),
            step.pattern.to_string(),
            step.description.as_deref().unwrap_or("-")
        );
    }
}
