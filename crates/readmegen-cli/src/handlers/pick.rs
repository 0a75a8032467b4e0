//! Pick command handler.
//!
//! Runs one repository picker session: identity check, list fetch, then an
//! interactive filter/select loop.

use std::sync::Arc;

use anyhow::Result;
use readmegen_core::{GenerationForm, PickerState, RepositoryList, RepositoryPicker};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{Spinner, render_picker};
use crate::utils::input::prompt_string;

const LOADING_MESSAGE: &str = "Loading your repositories...";
const PROMPT: &str =
    "Number to select, text or /text to filter, '*' to clear the filter, Enter to cancel";

/// What the user typed at the picker prompt.
#[derive(Debug, PartialEq, Eq)]
enum Selection {
    Cancel,
    /// Zero-based index into the visible list.
    Choose(usize),
    Filter(String),
}

/// A number within the visible list selects; anything else filters. A
/// leading `/` forces a filter, so `/2048` finds `octo/2048`.
fn parse_selection(input: &str, visible: usize) -> Selection {
    let input = input.trim();
    if input.is_empty() {
        return Selection::Cancel;
    }
    if input == "*" {
        return Selection::Filter(String::new());
    }
    if let Some(query) = input.strip_prefix('/') {
        return Selection::Filter(query.to_string());
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=visible).contains(&n) => Selection::Choose(n - 1),
        _ => Selection::Filter(input.to_string()),
    }
}

/// Execute the pick command: print the chosen repository's URL.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let mut form = GenerationForm::default();
    if choose_repository(ctx, &mut form).await? {
        println!("{}", form.repo_url);
    } else {
        eprintln!("No repository selected.");
    }
    Ok(())
}

/// Let the user pick a repository and write its URL into `form`.
///
/// Returns `false` when the user cancels.
pub async fn choose_repository(ctx: &CliContext, form: &mut GenerationForm) -> Result<bool> {
    let palette = ctx.palette();
    let mut picker = RepositoryPicker::new(Arc::clone(&ctx.backend), Arc::clone(&ctx.redirect));

    let opened = {
        let _spinner = Spinner::start(LOADING_MESSAGE);
        picker.open().await
    };
    opened.map_err(CliError::from)?;

    if let PickerState::Open(RepositoryList::Failed(message)) = picker.state() {
        eprintln!("{}", palette.error(&format!("✗ {message}")));
        return Err(CliError::Failed(message.clone()).into());
    }

    while let Some(visible) = picker.visible() {
        println!("{}", render_picker(&visible, picker.query(), &palette));
        let input = prompt_string(PROMPT)?;
        match parse_selection(&input, visible.len()) {
            Selection::Cancel => {
                picker.close();
                return Ok(false);
            }
            Selection::Choose(index) => {
                if let Some(repo) = visible.get(index) {
                    picker.select(&repo.full_name, form).map_err(CliError::from)?;
                    return Ok(true);
                }
            }
            Selection::Filter(query) => picker.set_query(query),
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("", 3), Selection::Cancel);
        assert_eq!(parse_selection("  ", 3), Selection::Cancel);
        assert_eq!(parse_selection("1", 3), Selection::Choose(0));
        assert_eq!(parse_selection(" 3 ", 3), Selection::Choose(2));
        assert_eq!(parse_selection("rust", 3), Selection::Filter("rust".to_string()));
        assert_eq!(parse_selection("*", 3), Selection::Filter(String::new()));
    }

    #[test]
    fn test_numeric_names_can_be_filtered() {
        assert_eq!(parse_selection("/2048", 3), Selection::Filter("2048".to_string()));
        assert_eq!(parse_selection("/1", 3), Selection::Filter("1".to_string()));
        assert_eq!(parse_selection("2048", 3), Selection::Filter("2048".to_string()));
        assert_eq!(parse_selection("0", 3), Selection::Filter("0".to_string()));
        assert_eq!(parse_selection("1", 0), Selection::Filter("1".to_string()));
    }
}
