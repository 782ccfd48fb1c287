// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as recognized log levels and well-formed app names.

use crate::diagnostic::ConfigError;
use crate::model::NeotoolConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &NeotoolConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let app_name = config.generator.app_name.trim();
    if app_name.is_empty() {
        errors.push(ConfigError::Validation {
            message: "generator.app_name must not be empty".to_string(),
        });
    } else if !app_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        errors.push(ConfigError::Validation {
            message: format!(
                "generator.app_name `{app_name}` contains invalid characters \
                 (only alphanumeric, hyphens, underscores allowed)"
            ),
        });
    }

    if config.generator.preset.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "generator.preset must not be empty".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&config.generator.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "generator.log_level must be one of {}, got `{}`",
                LOG_LEVELS.join(", "),
                config.generator.log_level
            ),
        });
    }

    if config.output.root.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "output.root must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
