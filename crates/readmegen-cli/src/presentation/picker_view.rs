//! Rendering of the repository picker.

use readmegen_core::RepositorySummary;

use super::Palette;

const EMPTY_STATE: &str = "No repositories found.";

/// Numbered list of the visible repositories, or the empty state.
pub fn render_picker(visible: &[RepositorySummary], query: &str, palette: &Palette) -> String {
    let mut out = String::new();
    if !query.is_empty() {
        out.push_str(&palette.muted(&format!("Filter: {query}")));
        out.push('\n');
    }
    if visible.is_empty() {
        out.push_str(&palette.muted(EMPTY_STATE));
        return out;
    }

    let width = visible.len().to_string().len();
    for (index, repo) in visible.iter().enumerate() {
        out.push_str(&format!(
            "{:>width$}. {} {}",
            index + 1,
            palette.heading(&repo.full_name),
            palette.badge(repo.badge_label(), repo.is_private),
        ));
        if let Some(description) = &repo.description {
            out.push_str(&format!("\n{:width$}  {}", "", palette.muted(description)));
        }
        out.push('\n');
    }
    out.truncate(out.trim_end().len());
    out
}
