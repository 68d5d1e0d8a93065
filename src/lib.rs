//! Crate entry point for **readme-ls**.
//!
//! This library provides the internal implementation for the `readme-ls`
//! CLI. Each submodule encapsulates one responsibility: configuration,
//! the update pipeline (GitHub fetch → listing → README patch → publish),
//! and the banner service. The `pub use` re-exports make the commands and
//! the patching primitives accessible from the crate root.

mod banner;
mod config;
mod publish;
mod readme;
mod shell;
mod update;

pub use banner::cmd_banner;
pub use config::Config;
pub use readme::{Document, END_MARKER, PatchOutcome, START_MARKER};
pub use update::cmd_update;
