//! Signup pipeline: payload assembly, HTTP client, submission controller
//! and the session redirect guard

mod client;
mod controller;
mod error;
mod guard;
mod payload;
mod session;
mod traits;

pub use client::SignupClient;
pub use controller::{PendingSubmission, SubmissionController, SubmitOutcome};
pub use error::SignupError;
pub use guard::RedirectGuard;
pub use payload::SubmissionPayload;
pub use session::FileSession;
pub use traits::{Navigator, Notifier, SessionAccessor, SignupResponse, SignupService};

#[cfg(test)]
pub use traits::{MockSessionAccessor, MockSignupService};
