// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The scaffold trait: a unit of code generation.

use async_trait::async_trait;

use crate::context::ScaffoldContext;
use crate::error::NeotoolError;
use crate::types::{GeneratedFile, ScaffoldKind};

/// A unit that, given a generation context, asynchronously produces a list
/// of files to write into the target application tree.
///
/// A render may produce zero files. Failure propagates to the caller; the
/// scaffold registry never catches or retries.
#[async_trait]
pub trait Scaffold: Send + Sync + std::fmt::Debug {
    /// Unique id of this scaffold within a registry instance.
    fn id(&self) -> &str;

    /// The application layer this scaffold generates code for.
    fn applies_to(&self) -> ScaffoldKind;

    /// Renders the scaffold against the given context.
    async fn render(&self, ctx: &ScaffoldContext) -> Result<Vec<GeneratedFile>, NeotoolError>;
}
