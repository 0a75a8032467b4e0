//! Preference store - typed access to the persisted preferences.

use std::sync::Arc;

use crate::domain::Theme;
use crate::ports::{PreferenceError, PreferenceRepository};
use crate::preferences::{API_KEY_KEY, Preferences, THEME_KEY};

/// Loads preferences once at startup and writes each change through.
pub struct PreferenceStore {
    repo: Arc<dyn PreferenceRepository>,
    current: Preferences,
}

impl PreferenceStore {
    /// Read the stored preferences.
    ///
    /// An unreadable or unknown theme value falls back to light; a blank API
    /// key counts as absent.
    pub async fn load(repo: Arc<dyn PreferenceRepository>) -> Result<Self, PreferenceError> {
        let theme = match repo.get(THEME_KEY).await? {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Ignoring unknown stored theme");
                Theme::default()
            }),
            None => Theme::default(),
        };
        let api_key = repo
            .get(API_KEY_KEY)
            .await?
            .filter(|key| !key.trim().is_empty());

        Ok(Self {
            repo,
            current: Preferences { theme, api_key },
        })
    }

    pub const fn current(&self) -> &Preferences {
        &self.current
    }

    pub const fn theme(&self) -> Theme {
        self.current.theme
    }

    pub fn api_key(&self) -> Option<&str> {
        self.current.api_key.as_deref()
    }

    pub async fn set_theme(&mut self, theme: Theme) -> Result<(), PreferenceError> {
        self.repo.set(THEME_KEY, theme.as_str()).await?;
        self.current.theme = theme;
        Ok(())
    }

    /// Flip between light and dark, returning the new theme.
    pub async fn toggle_theme(&mut self) -> Result<Theme, PreferenceError> {
        let next = self.current.theme.toggled();
        self.set_theme(next).await?;
        Ok(next)
    }

    /// Save the API key. A blank key clears it instead; a key containing a
    /// line break is rejected.
    pub async fn set_api_key(&mut self, key: &str) -> Result<(), PreferenceError> {
        let key = key.trim();
        if key.is_empty() {
            return self.clear_api_key().await;
        }
        PreferenceError::check_single_line(API_KEY_KEY, key)?;
        self.repo.set(API_KEY_KEY, key).await?;
        self.current.api_key = Some(key.to_string());
        Ok(())
    }

    pub async fn clear_api_key(&mut self) -> Result<(), PreferenceError> {
        self.repo.remove(API_KEY_KEY).await?;
        self.current.api_key = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryPreferenceRepository;

    #[tokio::test]
    async fn test_defaults_when_nothing_is_stored() {
        let store = PreferenceStore::load(Arc::new(MemoryPreferenceRepository::new()))
            .await
            .unwrap();
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.api_key(), None);
    }

    #[tokio::test]
    async fn test_invalid_theme_falls_back_to_light() {
        let repo = MemoryPreferenceRepository::with_values([(THEME_KEY, "sepia")]);
        let store = PreferenceStore::load(Arc::new(repo)).await.unwrap();
        assert_eq!(store.theme(), Theme::Light);
    }

    #[tokio::test]
    async fn test_toggle_theme_is_written_through() {
        let repo = Arc::new(MemoryPreferenceRepository::with_values([(THEME_KEY, "light")]));
        let mut store = PreferenceStore::load(repo.clone()).await.unwrap();

        assert_eq!(store.toggle_theme().await.unwrap(), Theme::Dark);
        assert_eq!(repo.get(THEME_KEY).await.unwrap().as_deref(), Some("dark"));

        let reloaded = PreferenceStore::load(repo).await.unwrap();
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[tokio::test]
    async fn test_api_key_set_and_clear() {
        let repo = Arc::new(MemoryPreferenceRepository::new());
        let mut store = PreferenceStore::load(repo.clone()).await.unwrap();

        store.set_api_key("  sk-123  ").await.unwrap();
        assert_eq!(store.api_key(), Some("sk-123"));
        assert_eq!(repo.get(API_KEY_KEY).await.unwrap().as_deref(), Some("sk-123"));

        store.set_api_key("").await.unwrap();
        assert_eq!(store.api_key(), None);
        assert_eq!(repo.get(API_KEY_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_api_key_with_line_break_is_rejected() {
        let repo = Arc::new(MemoryPreferenceRepository::with_values([(THEME_KEY, "light")]));
        let mut store = PreferenceStore::load(repo.clone()).await.unwrap();
        store.set_api_key("sk-old").await.unwrap();

        let result = store.set_api_key("sk\ntheme=dark").await;
        assert!(matches!(result, Err(PreferenceError::InvalidValue { .. })));
        assert_eq!(store.api_key(), Some("sk-old"));
        assert_eq!(repo.get(API_KEY_KEY).await.unwrap().as_deref(), Some("sk-old"));
        assert_eq!(repo.get(THEME_KEY).await.unwrap().as_deref(), Some("light"));
    }

    #[tokio::test]
    async fn test_blank_stored_key_counts_as_absent() {
        let repo = MemoryPreferenceRepository::with_values([(API_KEY_KEY, "   ")]);
        let store = PreferenceStore::load(Arc::new(repo)).await.unwrap();
        assert_eq!(store.api_key(), None);
    }
}
