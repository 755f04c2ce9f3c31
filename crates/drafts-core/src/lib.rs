//! Drafts Core - Shared library for the playground-drafts scaffolding CLI
//!
//! This library provides the core functionality for scaffolding demo packages
//! from local templates into a drafts workspace. It is designed so the binary
//! crate (`drafts-tools`) stays a thin shell around it.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Manifest I/O, template discovery, recursive
//!   copying, workspace bootstrap
//! - **Layer 2: Validation** - Prompt input validators and their combinator
//! - **Layer 3: TUI Interface** - cliclack-based prompt sequence (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt module

pub mod templates;
pub mod validate;
pub mod workspace;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use templates::{
    list_packages, list_templates, materialize_package, read_package, ManifestPatch, PackageInfo,
    PackageManifest,
};
pub use workspace::{
    in_drafts_workspace, init_drafts_workspace, is_drafts_workspace, DRAFTS_WORKSPACE_NAME,
};

#[cfg(feature = "tui")]
pub use tui::run;

/// Raised when the user aborts the interactive prompt sequence.
///
/// Caught by the binary's blanket handler, which prints the message and
/// exits; steps already committed to disk are not rolled back.
#[derive(Debug, thiserror::Error)]
#[error("Operation cancelled")]
pub struct Cancelled;
