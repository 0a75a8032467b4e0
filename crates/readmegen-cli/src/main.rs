//! CLI entry point.
//!
//! Parses arguments, wires infrastructure via bootstrap and dispatches to
//! the handlers. Errors not already rendered by a handler are printed here.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use readmegen_cli::error::{exit_code_for, needs_report};
use readmegen_cli::{Cli, CliConfig, CliError, Commands, adapters, bootstrap, handlers};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        if needs_report(&e) {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(exit_code_for(&e));
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli);

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    // The clipboard helper needs neither the service nor the preferences
    if matches!(command, Commands::ServeClipboard) {
        return adapters::serve_clipboard()
            .map_err(|e| CliError::Io(e.to_string()).into());
    }

    // Bootstrap the CLI context (composition root)
    let mut ctx = bootstrap(config).await?;

    match command {
        Commands::Generate(args) => handlers::generate::execute(&mut ctx, args).await,
        Commands::Pick => handlers::pick::execute(&ctx).await,
        Commands::Publish(args) => handlers::publish::execute(&ctx, args).await,
        Commands::Config { command } => handlers::config::execute(&mut ctx, command).await,
        Commands::ServeClipboard => Ok(()),
    }
}
