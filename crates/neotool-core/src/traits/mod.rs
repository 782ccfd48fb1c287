// SPDX-FileCopyrightText: 2026 Neotool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for code-generation units.

pub mod scaffold;

pub use scaffold::Scaffold;
