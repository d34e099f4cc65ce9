//! Session context: controller, history, and theme over one store.

use std::sync::Arc;
use std::time::Duration;

use vf_config::VfConfig;
use vf_core::{
    ArticleInput, CoreError, Notice, PredictionResult, Theme, ValidationErrors, validate,
};
use vf_gateway::{ClassifierGateway, Gateway};
use vf_store::{FileStore, HistoryStore, KeyValueStore, ThemeStore};

use crate::controller::{SubmissionController, SubmissionOutcome};
use crate::error::SessionError;
use crate::state::SubmissionState;

/// Result of [`Session::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The form did not validate; nothing was sent.
    Invalid(ValidationErrors),
    Submitted(SubmissionOutcome),
}

/// Everything one user interaction needs, loaded from the persisted store.
pub struct Session<G> {
    controller: SubmissionController<G>,
    history: HistoryStore,
    theme: ThemeStore,
}

impl Session<Gateway> {
    /// Open a session with the gateway and file store named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Gateway`] if the HTTP client cannot be built.
    pub fn from_config(config: &VfConfig) -> Result<Self, SessionError> {
        let gateway = Gateway::from_config(&config.gateway)?;
        let path = config.storage.store_path();
        tracing::debug!(store = %path.display(), gateway = %config.gateway.url, "opening session");
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(path));
        Ok(Self::open(gateway, config.gateway.timeout(), store))
    }
}

impl<G: ClassifierGateway> Session<G> {
    /// Build a session over `store`, loading the history snapshot.
    #[must_use]
    pub fn open(gateway: G, timeout: Duration, store: Arc<dyn KeyValueStore>) -> Self {
        let history = HistoryStore::load(Arc::clone(&store));
        tracing::debug!(entries = history.len(), "history loaded");
        Self {
            controller: SubmissionController::new(gateway, timeout),
            history,
            theme: ThemeStore::new(store),
        }
    }

    /// Validate `input` and submit it when it is clean.
    pub async fn check(&mut self, input: ArticleInput) -> CheckOutcome {
        let errors = validate(&input);
        if !errors.is_empty() {
            tracing::debug!(fields = errors.len(), "article failed validation");
            return CheckOutcome::Invalid(errors);
        }
        CheckOutcome::Submitted(self.controller.submit(input, &mut self.history).await)
    }

    #[must_use]
    pub const fn state(&self) -> &SubmissionState {
        self.controller.state()
    }

    pub fn acknowledge(&mut self) {
        self.controller.acknowledge();
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.controller.take_notices()
    }

    #[must_use]
    pub const fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Remove every stored result and the snapshot key.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] if the key cannot be removed.
    pub fn clear_history(&mut self) -> Result<usize, SessionError> {
        let removed = self.history.clear()?;
        tracing::info!(removed, "history cleared");
        self.controller.notify(Notice::history_cleared());
        Ok(removed)
    }

    /// Shareable summary of the stored result `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no stored result has that id.
    pub fn share(&self, id: &str) -> Result<String, SessionError> {
        self.find(id).map(PredictionResult::share_text)
    }

    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no stored result has that id.
    pub fn find(&self, id: &str) -> Result<&PredictionResult, SessionError> {
        self.history
            .find(id)
            .ok_or_else(|| CoreError::NotFound { id: id.to_string() }.into())
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// # Errors
    ///
    /// Returns [`SessionError::Store`] if the preference cannot be written.
    pub fn set_theme(&self, theme: Theme) -> Result<Theme, SessionError> {
        self.theme.set(theme)?;
        Ok(theme)
    }

    /// # Errors
    ///
    /// Returns [`SessionError::Store`] if the preference cannot be written.
    pub fn toggle_theme(&self) -> Result<Theme, SessionError> {
        Ok(self.theme.toggle()?)
    }
}
