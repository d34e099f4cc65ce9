use std::sync::Arc;

use vf_core::Theme;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Key holding the `dark`/`light` preference.
pub const THEME_KEY: &str = "verifact-theme";

/// Theme preference persisted in the same store as the history.
pub struct ThemeStore {
    store: Arc<dyn KeyValueStore>,
}

impl ThemeStore {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Current preference. Read failures fall back to [`Theme::Light`].
    #[must_use]
    pub fn get(&self) -> Theme {
        match self.store.get(THEME_KEY) {
            Ok(raw) => Theme::from_stored(raw.as_deref()),
            Err(error) => {
                tracing::warn!(%error, "failed to read theme preference");
                Theme::default()
            }
        }
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the preference cannot be written.
    pub fn set(&self, theme: Theme) -> Result<(), StoreError> {
        self.store.set(THEME_KEY, theme.as_str())
    }

    /// Flip the preference and return the new value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the preference cannot be written.
    pub fn toggle(&self) -> Result<Theme, StoreError> {
        let next = self.get().toggled();
        self.set(next)?;
        Ok(next)
    }
}
