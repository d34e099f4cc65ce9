//! # vf-session
//!
//! Drives one article from a validated form to a stored result.
//!
//! [`SubmissionController`] owns the `Idle → Submitting → {Succeeded, Failed}`
//! state machine and the user-visible notices. [`Session`] is the context
//! object tying the controller to the persisted history and theme.

mod controller;
mod error;
mod session;
mod state;

pub use controller::{SubmissionController, SubmissionOutcome};
pub use error::SessionError;
pub use session::{CheckOutcome, Session};
pub use state::{SubmissionPhase, SubmissionState};
