//! Publish command handler.

use std::sync::Arc;

use anyhow::{Context, Result};
use readmegen_core::services::{PUBLISHED_MESSAGE, PUBLISHING_MESSAGE};
use readmegen_core::{PublishDialog, PublishOutcome, PublishWorkflow, RepoRef};

use crate::bootstrap::CliContext;
use crate::commands::PublishArgs;
use crate::error::CliError;
use crate::presentation::Spinner;
use crate::utils::input::prompt_confirmation;

/// Accept either `owner/name` or a GitHub repository URL.
fn resolve_repo(input: &str) -> Option<RepoRef> {
    RepoRef::from_github_url(input).or_else(|| RepoRef::parse(input))
}

/// Execute the publish command for an existing README file.
pub async fn execute(ctx: &CliContext, args: PublishArgs) -> Result<()> {
    let repo = resolve_repo(&args.repo).ok_or_else(|| {
        CliError::Arguments(format!(
            "'{}' is neither owner/name nor a GitHub repository URL",
            args.repo
        ))
    })?;
    let content = tokio::fs::read_to_string(&args.file)
        .await
        .map_err(CliError::from)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let mut dialog = PublishDialog::default();
    dialog.open_for(repo.full_name(), args.branch.as_deref());
    if let Some(message) = args.message {
        dialog.commit_message = message;
    }

    if !args.yes {
        let question = format!(
            "Publish {} to {} ({})?",
            args.file.display(),
            dialog.full_name,
            dialog.branch
        );
        if !prompt_confirmation(&question)? {
            println!("Publish cancelled.");
            return Ok(());
        }
    }

    publish_dialog(ctx, &mut dialog, &content).await
}

/// Confirm an open dialog and report the outcome on stderr.
pub async fn publish_dialog(ctx: &CliContext, dialog: &mut PublishDialog, content: &str) -> Result<()> {
    let palette = ctx.palette();
    let workflow = PublishWorkflow::new(Arc::clone(&ctx.backend), Arc::clone(&ctx.redirect));

    let result = {
        let _spinner = Spinner::start(PUBLISHING_MESSAGE);
        workflow.confirm(dialog, content).await
    };

    match result {
        Ok(PublishOutcome::Published) => {
            let message = dialog.acknowledgement.as_deref().unwrap_or(PUBLISHED_MESSAGE);
            eprintln!("{}", palette.success(&format!("✓ {message}")));
            Ok(())
        }
        Ok(PublishOutcome::RedirectedToLogin) => Err(CliError::AuthRequired.into()),
        Err(e) => {
            if let Some(message) = &dialog.error {
                eprintln!("{}", palette.error(&format!("✗ {message}")));
            }
            Err(CliError::from(e).into())
        }
    }
}
