// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Writes generated files into the target project tree.

use std::path::{Component, Path};

use neotool_core::{FileMode, GeneratedFile, NeotoolError};
use tracing::info;

/// Writes each generated file under `root`, creating parent directories.
///
/// Generated paths are relative to the project root; absolute paths and
/// `..` components are rejected so a scaffold cannot write outside the
/// output tree. Existing files fail the run unless `overwrite` is set.
/// `FileMode::Executable` maps to `0o755` on Unix and is ignored elsewhere.
pub fn write_files(
    root: &Path,
    files: &[GeneratedFile],
    overwrite: bool,
) -> Result<(), NeotoolError> {
    for file in files {
        let rel = Path::new(&file.path);
        if rel.is_absolute()
            || rel
                .components()
                .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(NeotoolError::Internal(format!(
                "generated path escapes the output root: {}",
                file.path
            )));
        }

        let target = root.join(rel);
        if target.exists() && !overwrite {
            return Err(NeotoolError::Io {
                path: target.display().to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    "file exists (set output.overwrite to replace)",
                ),
            });
        }

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|e| NeotoolError::Io {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        std::fs::write(&target, &file.content).map_err(|e| NeotoolError::Io {
            path: target.display().to_string(),
            source: e,
        })?;

        if file.mode == Some(FileMode::Executable) {
            set_executable(&target)?;
        }

        info!(path = %target.display(), "file written");
    }
    Ok(())
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<(), NeotoolError> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).map_err(|e| {
        NeotoolError::Io {
            path: path.display().to_string(),
            source: e,
        }
    })
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<(), NeotoolError> {
    Ok(())
}
