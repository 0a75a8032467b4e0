//! Rendering of the generation form state.

use readmegen_core::services::GENERATING_MESSAGE;
use readmegen_core::{Phase, UiState};
use tokio::time::Instant;

use super::Palette;

/// Label of the copy action at `now`.
pub fn copy_label(state: &UiState, now: Instant) -> &'static str {
    if state.copy_feedback_active_at(now) {
        "Copied!"
    } else {
        "Copy"
    }
}

/// Render the form state.
///
/// Idle renders nothing; loading shows the busy text; error shows the
/// message; success shows the README under a header with the copy label.
pub fn render_generation(state: &UiState, palette: &Palette, now: Instant) -> String {
    match state.phase {
        Phase::Idle => String::new(),
        Phase::Loading => palette.muted(GENERATING_MESSAGE),
        Phase::Error => palette.error(&format!("✗ {}", state.error_message)),
        Phase::Success => {
            let header = format!(
                "{} {}",
                palette.heading("Generated README"),
                palette.muted(&format!("[{}]", copy_label(state, now)))
            );
            let rule = palette.muted(&"─".repeat(60));
            format!("{header}\n{rule}\n{}\n{rule}", state.readme_text.trim_end())
        }
    }
}

/// What the generate command writes to stdout.
///
/// A terminal gets the decorated view. Redirected output gets the bare
/// README, so `readmegen generate URL > README.md` produces a usable file.
pub fn render_for_stdout(
    state: &UiState,
    palette: &Palette,
    now: Instant,
    is_terminal: bool,
) -> String {
    let mut out = if !is_terminal && state.phase == Phase::Success {
        state.readme_text.clone()
    } else {
        render_generation(state, palette, now)
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;
    use readmegen_core::Theme;

    fn plain(state: &UiState) -> String {
        let palette = Palette::for_theme(Theme::Light);
        strip_ansi_codes(&render_generation(state, &palette, Instant::now())).into_owned()
    }

    #[test]
    fn test_idle_renders_nothing() {
        assert!(plain(&UiState::default()).is_empty());
    }

    #[test]
    fn test_loading_shows_busy_text() {
        let mut state = UiState::default();
        state.phase = Phase::Loading;
        assert_eq!(plain(&state), "Generating README...");
    }

    #[test]
    fn test_error_shows_message() {
        let mut state = UiState::default();
        state.phase = Phase::Error;
        state.error_message = "Error: repository not found".to_string();
        assert_eq!(plain(&state), "✗ Error: repository not found");
    }

    #[test]
    fn test_success_shows_readme_and_copy_label() {
        let mut state = UiState::default();
        state.phase = Phase::Success;
        state.readme_text = "# hello\n".to_string();
        let text = plain(&state);
        assert!(text.starts_with("Generated README [Copy]"));
        assert!(text.contains("\n# hello\n"));
    }

    #[test]
    fn test_redirected_output_is_the_bare_readme() {
        let palette = Palette::for_theme(Theme::Dark);
        let mut state = UiState::default();
        state.phase = Phase::Success;
        state.readme_text = "# hello\n\nBody\n".to_string();

        let out = render_for_stdout(&state, &palette, Instant::now(), false);
        assert_eq!(out, "# hello\n\nBody\n");

        state.readme_text = "# no newline".to_string();
        let out = render_for_stdout(&state, &palette, Instant::now(), false);
        assert_eq!(out, "# no newline\n");
    }

    #[test]
    fn test_terminal_output_keeps_the_header() {
        let palette = Palette::for_theme(Theme::Light);
        let mut state = UiState::default();
        state.phase = Phase::Success;
        state.readme_text = "# hello".to_string();

        let out = render_for_stdout(&state, &palette, Instant::now(), true);
        let out = strip_ansi_codes(&out);
        assert!(out.starts_with("Generated README [Copy]\n"));
        assert!(out.ends_with('\n'));
    }
}
