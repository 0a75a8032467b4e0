//! Command-line front end for the README generation service.
//!
//! `main.rs` parses arguments, calls [`bootstrap`] and hands the resulting
//! [`CliContext`] to one of the [`handlers`].

#![deny(unsafe_code)]

pub mod adapters;
pub mod bootstrap;
pub mod commands;
pub mod config_commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use config_commands::{ApiKeyCommand, ConfigCommand};
pub use error::CliError;
pub use parser::Cli;
