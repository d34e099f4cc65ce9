use std::fmt;

use vf_core::{FailureKind, PredictionResult};

/// Where the controller currently is, without the payload.
///
/// ```text
/// idle → submitting → succeeded
///                   → failed
/// succeeded | failed → idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle => &[Self::Submitting],
            Self::Submitting => &[Self::Succeeded, Self::Failed],
            Self::Succeeded | Self::Failed => &[Self::Idle, Self::Submitting],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Controller state with the data each terminal state carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(PredictionResult),
    Failed(FailureKind),
}

impl SubmissionState {
    #[must_use]
    pub const fn phase(&self) -> SubmissionPhase {
        match self {
            Self::Idle => SubmissionPhase::Idle,
            Self::Submitting => SubmissionPhase::Submitting,
            Self::Succeeded(_) => SubmissionPhase::Succeeded,
            Self::Failed(_) => SubmissionPhase::Failed,
        }
    }

    #[must_use]
    pub const fn result(&self) -> Option<&PredictionResult> {
        match self {
            Self::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub const fn failure(&self) -> Option<FailureKind> {
        match self {
            Self::Failed(kind) => Some(*kind),
            _ => None,
        }
    }
}
