//! Config command handler.
//!
//! Reads and updates the local preferences: colour theme and API key.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::config_commands::{ApiKeyCommand, ConfigCommand};
use crate::error::CliError;
use crate::utils::input::prompt_secret;
use readmegen_core::Theme;

/// Execute the config command.
pub async fn execute(ctx: &mut CliContext, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            show(ctx);
            Ok(())
        }
        ConfigCommand::Theme { theme, toggle } => handle_theme(ctx, theme, toggle).await,
        ConfigCommand::ApiKey { command } => handle_api_key(ctx, command).await,
    }
}

fn show(ctx: &CliContext) {
    let palette = ctx.palette();
    let prefs = ctx.preferences.current();
    println!("{}", palette.heading("Preferences"));
    println!("  Theme:       {}", prefs.theme);
    println!(
        "  API key:     {}",
        prefs
            .masked_api_key()
            .unwrap_or_else(|| palette.muted("(not set)"))
    );
    println!("  File:        {}", ctx.preferences_path.display());
    println!("  Service:     {}", ctx.base_url);
}

async fn handle_theme(ctx: &mut CliContext, theme: Option<Theme>, toggle: bool) -> Result<()> {
    let theme = if toggle {
        ctx.preferences
            .toggle_theme()
            .await
            .map_err(CliError::from)?
    } else if let Some(theme) = theme {
        ctx.preferences
            .set_theme(theme)
            .await
            .map_err(CliError::from)?;
        theme
    } else {
        println!("Theme: {}", ctx.preferences.theme());
        return Ok(());
    };
    println!("{}", ctx.palette().success(&format!("✓ Theme set to {theme}")));
    Ok(())
}

async fn handle_api_key(ctx: &mut CliContext, command: ApiKeyCommand) -> Result<()> {
    match command {
        ApiKeyCommand::Set { key } => {
            let key = match key {
                Some(key) => key,
                None => prompt_secret("OpenAI API key")?,
            };
            if key.trim().is_empty() {
                return Err(CliError::Arguments("API key must not be empty".to_string()).into());
            }
            ctx.preferences
                .set_api_key(&key)
                .await
                .map_err(CliError::from)?;
            let masked = ctx.preferences.current().masked_api_key().unwrap_or_default();
            println!("{}", ctx.palette().success(&format!("✓ API key saved ({masked})")));
        }
        ApiKeyCommand::Clear => {
            ctx.preferences
                .clear_api_key()
                .await
                .map_err(CliError::from)?;
            println!("{}", ctx.palette().success("✓ API key cleared"));
        }
    }
    Ok(())
}
