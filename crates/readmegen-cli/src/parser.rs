//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the README generation service.
///
/// Global options configure the service connection; subcommands run the
/// generation, picker, publish and preference flows.
#[derive(Parser)]
#[command(name = "readmegen")]
#[command(about = "Generate, copy and publish README files for GitHub repositories")]
#[command(version)]
pub struct Cli {
    /// Base URL of the README service
    #[arg(long, env = "READMEGEN_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, env = "READMEGEN_TIMEOUT_MS", global = true)]
    pub timeout_ms: Option<u64>,

    /// Session cookie for the service, e.g. `session=...`
    #[arg(long, env = "READMEGEN_SESSION", hide_env_values = true, global = true)]
    pub session: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Commands, GenerateArgs};
    use crate::config_commands::{ApiKeyCommand, ConfigCommand};
    use clap::CommandFactory;
    use readmegen_core::{GenerationMethod, Theme};

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "readmegen",
            "--verbose",
            "--base-url",
            "http://127.0.0.1:9000",
            "--timeout-ms",
            "5000",
            "config",
            "show",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:9000"));
        assert_eq!(cli.timeout_ms, Some(5000));
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommand::Show
            })
        ));
    }

    #[test]
    fn test_generate_args() {
        let cli = Cli::parse_from([
            "readmegen",
            "generate",
            "https://github.com/octo/hello",
            "--method",
            "ai",
            "--twitter",
            "octo",
            "--output",
            "docs",
            "--copy",
            "--publish",
            "--branch",
            "docs",
        ]);
        let Some(Commands::Generate(GenerateArgs {
            repo_url,
            method,
            twitter,
            output,
            copy,
            publish,
            branch,
            pick,
            ..
        })) = cli.command
        else {
            panic!("expected generate");
        };
        assert_eq!(repo_url.as_deref(), Some("https://github.com/octo/hello"));
        assert_eq!(method, GenerationMethod::Ai);
        assert_eq!(twitter.as_deref(), Some("octo"));
        assert_eq!(output.as_deref(), Some(std::path::Path::new("docs")));
        assert!(copy && publish && !pick);
        assert_eq!(branch.as_deref(), Some("docs"));
    }

    #[test]
    fn test_generate_defaults_to_template() {
        let cli = Cli::parse_from(["readmegen", "generate", "--pick"]);
        let Some(Commands::Generate(args)) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.method, GenerationMethod::Template);
        assert!(args.pick);
        assert!(args.repo_url.is_none());
    }

    #[test]
    fn test_pick_conflicts_with_url() {
        let result = Cli::try_parse_from([
            "readmegen",
            "generate",
            "https://github.com/octo/hello",
            "--pick",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_commands() {
        let cli = Cli::parse_from(["readmegen", "config", "theme", "dark"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommand::Theme {
                    theme: Some(Theme::Dark),
                    toggle: false
                }
            })
        ));

        let cli = Cli::parse_from(["readmegen", "config", "theme", "--toggle"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommand::Theme {
                    theme: None,
                    toggle: true
                }
            })
        ));

        assert!(Cli::try_parse_from(["readmegen", "config", "theme", "dark", "--toggle"]).is_err());
        assert!(Cli::try_parse_from(["readmegen", "config", "theme", "sepia"]).is_err());

        let cli = Cli::parse_from(["readmegen", "config", "api-key", "clear"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommand::ApiKey {
                    command: ApiKeyCommand::Clear
                }
            })
        ));
    }

    #[test]
    fn test_clipboard_helper_command_is_hidden() {
        let cli = Cli::parse_from(["readmegen", crate::adapters::SERVE_CLIPBOARD_COMMAND]);
        assert!(matches!(cli.command, Some(Commands::ServeClipboard)));

        let command = Cli::command();
        let helper = command
            .find_subcommand(crate::adapters::SERVE_CLIPBOARD_COMMAND)
            .unwrap();
        assert!(helper.is_hide_set());
    }
}
