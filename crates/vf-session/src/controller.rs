//! The submission state machine.

use std::time::Duration;

use chrono::Utc;
use vf_core::{ArticleInput, FIXED_CONFIDENCE, FailureKind, Notice, PredictionResult, ids};
use vf_gateway::{ClassifierGateway, GatewayError};
use vf_store::HistoryStore;

use crate::state::{SubmissionPhase, SubmissionState};

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded(PredictionResult),
    Failed(FailureKind),
}

impl SubmissionOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }
}

/// Sends validated articles to the classifier and records the results.
///
/// Takes `&mut self` for every transition, so a single owner drives it and at
/// most one request is in flight. Nothing is retried.
pub struct SubmissionController<G> {
    gateway: G,
    timeout: Duration,
    state: SubmissionState,
    notices: Vec<Notice>,
}

impl<G: ClassifierGateway> SubmissionController<G> {
    #[must_use]
    pub const fn new(gateway: G, timeout: Duration) -> Self {
        Self {
            gateway,
            timeout,
            state: SubmissionState::Idle,
            notices: Vec::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SubmissionState {
        &self.state
    }

    #[must_use]
    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Classify `input` and, on success, prepend the result to `history`.
    ///
    /// `input` must already have passed validation. Exactly one of
    /// `Analysis Complete` or `Analysis Failed` is queued per call; a
    /// `History Not Saved` warning follows a success whose snapshot write
    /// failed.
    pub async fn submit(
        &mut self,
        input: ArticleInput,
        history: &mut HistoryStore,
    ) -> SubmissionOutcome {
        self.transition(SubmissionState::Submitting);
        tracing::debug!(
            title = %input.title,
            text_chars = input.text_length(),
            "submitting article for classification"
        );

        let verdict = match tokio::time::timeout(self.timeout, self.gateway.classify(&input)).await
        {
            Ok(Ok(verdict)) => verdict,
            Ok(Err(error)) => return self.fail(&error),
            Err(_) => {
                let error = GatewayError::Timeout {
                    secs: self.timeout.as_secs(),
                };
                return self.fail(&error);
            }
        };

        let now = ids::to_millis_precision(Utc::now());
        let id = ids::next_result_id(now, history.newest().map(|r| r.id.as_str()));
        let confidence = verdict.confidence.unwrap_or(FIXED_CONFIDENCE);
        let result = PredictionResult::new(id, input, verdict.verdict, confidence, now);

        tracing::info!(
            id = %result.id,
            verdict = %result.prediction,
            confidence = result.confidence,
            "article classified"
        );

        self.notices.push(Notice::analysis_complete(result.prediction));
        if let Err(error) = history.prepend(result.clone()) {
            tracing::warn!(%error, id = %result.id, "failed to persist history snapshot");
            self.notices.push(Notice::history_not_saved());
        }

        self.transition(SubmissionState::Succeeded(result.clone()));
        SubmissionOutcome::Succeeded(result)
    }

    /// Dismiss a terminal state and return to `Idle`.
    pub fn acknowledge(&mut self) {
        if self.state.phase() == SubmissionPhase::Idle {
            return;
        }
        self.transition(SubmissionState::Idle);
    }

    /// Drain queued notices, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub(crate) fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn fail(&mut self, error: &GatewayError) -> SubmissionOutcome {
        let kind = error.kind();
        tracing::warn!(%error, %kind, "classification failed");
        self.notices.push(Notice::analysis_failed());
        self.transition(SubmissionState::Failed(kind));
        SubmissionOutcome::Failed(kind)
    }

    fn transition(&mut self, next: SubmissionState) {
        let from = self.state.phase();
        let to = next.phase();
        if !from.can_transition_to(to) {
            tracing::debug!(%from, %to, "unexpected submission transition");
        }
        self.state = next;
    }
}
