//! Preference management subcommands.

use clap::Subcommand;
use readmegen_core::Theme;

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the saved preferences (the API key is masked)
    Show,
    /// Show, set or toggle the colour theme
    Theme {
        /// Theme to save: light or dark
        #[arg(conflicts_with = "toggle")]
        theme: Option<Theme>,
        /// Switch between light and dark
        #[arg(long)]
        toggle: bool,
    },
    /// Manage the saved `OpenAI` API key
    ApiKey {
        #[command(subcommand)]
        command: ApiKeyCommand,
    },
}

#[derive(Subcommand)]
pub enum ApiKeyCommand {
    /// Save an API key (prompted for when omitted)
    Set {
        key: Option<String>,
    },
    /// Forget the saved API key
    Clear,
}
