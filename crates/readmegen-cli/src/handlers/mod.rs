//! Command handlers that drive the core workflows.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call the workflow
//!   3. Render the resulting state for the terminal
//!
//! Handlers should NOT build HTTP requests or touch the preference file
//! directly.

pub mod config;
pub mod generate;
pub mod pick;
pub mod publish;
