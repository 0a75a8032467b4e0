//! Theme colour palettes.

use console::Style;
use readmegen_core::Theme;

/// Styles used for one theme.
#[derive(Debug, Clone)]
pub struct Palette {
    pub theme: Theme,
    heading: Style,
    error: Style,
    success: Style,
    muted: Style,
    badge_private: Style,
    badge_public: Style,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                theme,
                heading: Style::new().blue().bold(),
                error: Style::new().red().bold(),
                success: Style::new().green(),
                muted: Style::new().black().dim(),
                badge_private: Style::new().black().on_yellow(),
                badge_public: Style::new().white().on_green(),
            },
            Theme::Dark => Self {
                theme,
                heading: Style::new().cyan().bright().bold(),
                error: Style::new().red().bright().bold(),
                success: Style::new().green().bright(),
                muted: Style::new().white().dim(),
                badge_private: Style::new().black().on_yellow().bright(),
                badge_public: Style::new().black().on_green().bright(),
            },
        }
    }

    pub fn heading(&self, text: &str) -> String {
        self.heading.apply_to(text).to_string()
    }

    pub fn error(&self, text: &str) -> String {
        self.error.apply_to(text).to_string()
    }

    pub fn success(&self, text: &str) -> String {
        self.success.apply_to(text).to_string()
    }

    pub fn muted(&self, text: &str) -> String {
        self.muted.apply_to(text).to_string()
    }

    pub fn badge(&self, label: &str, private: bool) -> String {
        let style = if private {
            &self.badge_private
        } else {
            &self.badge_public
        };
        style.apply_to(format!(" {label} ")).to_string()
    }
}
