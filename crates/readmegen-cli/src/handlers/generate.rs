//! Generate command handler.
//!
//! Builds the form from flags (or the picker), submits it, renders the
//! result and runs the optional save/copy/publish follow-ups.

use std::sync::Arc;

use anyhow::Result;
use console::Term;
use readmegen_core::services::{GENERATING_MESSAGE, ResultActionError};
use readmegen_core::{
    GenerationError, GenerationForm, GenerationWorkflow, PublishDialog, RepoRef,
};
use tokio::time::Instant;

use crate::bootstrap::CliContext;
use crate::commands::GenerateArgs;
use crate::error::CliError;
use crate::handlers::{pick, publish};
use crate::presentation::{Spinner, copy_label, render_for_stdout, render_generation};
use crate::utils::input::{prompt_secret, prompt_string};

fn build_form(args: &GenerateArgs) -> GenerationForm {
    GenerationForm {
        repo_url: args.repo_url.clone().unwrap_or_default(),
        buy_me_a_coffee_user: args.buy_me_a_coffee.clone().unwrap_or_default(),
        twitter_user: args.twitter.clone().unwrap_or_default(),
        linkedin_user: args.linkedin.clone().unwrap_or_default(),
        method: args.method,
        api_key: args.api_key.clone().unwrap_or_default(),
    }
}

async fn submit(
    workflow: &GenerationWorkflow,
    form: &GenerationForm,
    saved_api_key: Option<&str>,
) -> Result<String, GenerationError> {
    let _spinner = Spinner::start(GENERATING_MESSAGE);
    workflow.submit(form, saved_api_key).await
}

/// Execute the generate command.
pub async fn execute(ctx: &mut CliContext, args: GenerateArgs) -> Result<()> {
    let mut form = build_form(&args);
    if args.pick {
        if !pick::choose_repository(ctx, &mut form).await? {
            eprintln!("No repository selected.");
            return Ok(());
        }
    } else if form.repo_url.trim().is_empty() {
        form.repo_url = prompt_string("Repository URL")?;
    }

    let palette = ctx.palette();
    let workflow = GenerationWorkflow::new(Arc::clone(&ctx.backend), ctx.preferences.theme());

    let mut result = submit(&workflow, &form, ctx.preferences.api_key()).await;
    if matches!(&result, Err(e) if e.needs_api_key()) {
        let key = prompt_secret("OpenAI API key")?;
        if !key.is_empty() {
            ctx.preferences
                .set_api_key(&key)
                .await
                .map_err(CliError::from)?;
            result = submit(&workflow, &form, ctx.preferences.api_key()).await;
        }
    }

    let state = workflow.state();
    let readme = match result {
        Ok(readme) => {
            let is_terminal = Term::stdout().is_term();
            print!("{}", render_for_stdout(&state, &palette, Instant::now(), is_terminal));
            readme
        }
        Err(e) => {
            eprintln!("{}", render_generation(&state, &palette, Instant::now()));
            return Err(CliError::from(e).into());
        }
    };

    // Status lines go to stderr so redirected stdout holds only the README.
    if let Some(dir) = &args.output {
        let path = workflow.download(dir).await.map_err(CliError::from)?;
        eprintln!("{}", palette.success(&format!("✓ Saved {}", path.display())));
    }

    if args.copy {
        match workflow.copy_to_clipboard(ctx.clipboard.as_ref()) {
            Ok(()) => {
                let label = copy_label(&workflow.state(), Instant::now());
                eprintln!("{}", palette.success(&format!("✓ {label}")));
            }
            Err(ResultActionError::Clipboard(e)) => {
                eprintln!("{}", palette.error(&format!("✗ Could not copy: {e}")));
            }
            Err(e) => return Err(CliError::from(e).into()),
        }
    }

    if args.publish {
        let repo = RepoRef::from_github_url(&form.repo_url).ok_or_else(|| {
            CliError::Arguments(format!(
                "cannot publish to {}: not a github.com repository URL",
                form.repo_url
            ))
        })?;
        let mut dialog = PublishDialog::default();
        dialog.open_for(repo.full_name(), args.branch.as_deref());
        if let Some(message) = args.message {
            dialog.commit_message = message;
        }
        publish::publish_dialog(ctx, &mut dialog, &readme).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Commands;
    use crate::parser::Cli;
    use clap::Parser;
    use readmegen_core::GenerationMethod;

    fn generate_args(args: &[&str]) -> GenerateArgs {
        let cli = Cli::parse_from(std::iter::once("readmegen").chain(args.iter().copied()));
        match cli.command {
            Some(Commands::Generate(args)) => args,
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_build_form_from_flags() {
        let args = generate_args(&[
            "generate",
            "https://github.com/octo/hello",
            "--method",
            "ai",
            "--twitter",
            "octo",
            "--api-key",
            "sk-flag",
        ]);
        let form = build_form(&args);
        assert_eq!(form.repo_url, "https://github.com/octo/hello");
        assert_eq!(form.method, GenerationMethod::Ai);
        assert_eq!(form.twitter_user, "octo");
        assert_eq!(form.api_key, "sk-flag");
        assert!(form.linkedin_user.is_empty());
        assert!(form.buy_me_a_coffee_user.is_empty());
    }

    #[test]
    fn test_build_form_without_url_leaves_it_empty() {
        let args = generate_args(&["generate", "--pick"]);
        let form = build_form(&args);
        assert!(form.repo_url.is_empty());
        assert_eq!(form.method, GenerationMethod::Template);
    }
}
