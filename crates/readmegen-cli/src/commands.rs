//! Main commands enum and primary subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use readmegen_core::GenerationMethod;

use crate::config_commands::ConfigCommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a README for a GitHub repository
    Generate(GenerateArgs),

    /// Choose one of your GitHub repositories and print its URL
    Pick,

    /// Publish an existing README file to a repository branch
    Publish(PublishArgs),

    /// View or change local preferences
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Keep copied text on the clipboard after the copying command exits
    #[command(name = "serve-clipboard", hide = true)]
    ServeClipboard,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Repository URL (prompted for when omitted)
    #[arg(conflicts_with = "pick")]
    pub repo_url: Option<String>,

    /// Choose the repository from your GitHub account instead
    #[arg(long)]
    pub pick: bool,

    /// How the README is produced
    #[arg(short, long, default_value_t = GenerationMethod::Template)]
    pub method: GenerationMethod,

    /// Buy Me a Coffee username to link
    #[arg(long = "buy-me-a-coffee", value_name = "USER")]
    pub buy_me_a_coffee: Option<String>,

    /// Twitter username to link
    #[arg(long, value_name = "USER")]
    pub twitter: Option<String>,

    /// LinkedIn username to link
    #[arg(long, value_name = "USER")]
    pub linkedin: Option<String>,

    /// `OpenAI` API key for the ai method (defaults to the saved key)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Save the README as README.md in this directory
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Copy the README to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Publish the README to the repository afterwards
    #[arg(long)]
    pub publish: bool,

    /// Branch to publish to
    #[arg(long, requires = "publish")]
    pub branch: Option<String>,

    /// Commit message for the publish
    #[arg(long, requires = "publish")]
    pub message: Option<String>,
}

#[derive(Args)]
pub struct PublishArgs {
    /// Target repository, `owner/name` or a GitHub URL
    #[arg(long)]
    pub repo: String,

    /// README file to publish
    #[arg(long, default_value = "README.md")]
    pub file: PathBuf,

    /// Branch to publish to (defaults to main)
    #[arg(long)]
    pub branch: Option<String>,

    /// Commit message
    #[arg(long)]
    pub message: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}
