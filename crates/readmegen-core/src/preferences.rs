//! Typed view of the persisted preferences.

use std::fmt;

use crate::domain::Theme;

/// Storage key of the colour theme.
pub const THEME_KEY: &str = "theme";

/// Storage key of the cached `OpenAI` API key.
pub const API_KEY_KEY: &str = "openai_api_key";

/// Everything the client persists locally.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub api_key: Option<String>,
}

impl Preferences {
    /// The API key with everything but the last four characters hidden.
    pub fn masked_api_key(&self) -> Option<String> {
        self.api_key.as_deref().map(mask_secret)
    }
}

impl fmt::Debug for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preferences")
            .field("theme", &self.theme)
            .field("api_key", &self.masked_api_key())
            .finish()
    }
}

/// Mask a secret for display, keeping a short suffix when it is long enough.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{tail}", "*".repeat(chars.len() - 4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(""), "");
        assert_eq!(mask_secret("short"), "*****");
        assert_eq!(mask_secret("sk-abcdef123456"), "***********3456");
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let prefs = Preferences {
            theme: Theme::Dark,
            api_key: Some("sk-very-secret-key".to_string()),
        };
        let debug = format!("{prefs:?}");
        assert!(!debug.contains("sk-very-secret"));
        assert!(debug.contains("Dark"));
    }
}
