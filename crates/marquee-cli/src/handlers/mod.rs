//! Command handlers that delegate to `MovieService`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that call the core and format output for the terminal

pub mod genres;
pub mod search;
pub mod serve;
pub mod show;
