//! Submission controller
//!
//! Owns the in-flight flag. A submission is started with
//! [`SubmissionController::begin`], the returned [`PendingSubmission`] makes
//! the one network call, and [`SubmissionController::finish`] turns its
//! result into exactly one notification (plus navigation on success).
//! `finish` always returns the flag to idle.

use super::error::SignupError;
use super::payload::SubmissionPayload;
use super::traits::{Navigator, Notifier, SignupResponse, SignupService};
use crate::state::{ImageSelection, ValidatedForm, View};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Shown when the server sends no message of its own
pub const GENERIC_SUCCESS: &str = "Signup successful!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
}

/// What a finished attempt did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Success notification shown and sign-in navigation requested
    Succeeded(String),
    /// Error notification shown with this message
    Failed(String),
    /// Screen went away mid-flight; no side effects applied
    Cancelled,
    /// No submission was in flight; result dropped
    Ignored,
}

/// A started submission holding everything the network call needs
pub struct PendingSubmission {
    service: Arc<dyn SignupService>,
    payload: SubmissionPayload,
}

impl PendingSubmission {
    pub fn payload(&self) -> &SubmissionPayload {
        &self.payload
    }

    /// Make the signup call. Consumes the submission so it runs once.
    pub async fn send(self) -> Result<SignupResponse, SignupError> {
        self.service.signup(self.payload).await
    }
}

pub struct SubmissionController {
    service: Arc<dyn SignupService>,
    state: SubmissionState,
}

impl SubmissionController {
    pub fn new(service: Arc<dyn SignupService>) -> Self {
        Self {
            service,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.state() == SubmissionState::InFlight
    }

    /// Start a submission. Returns `None` while another one is in flight.
    pub fn begin(
        &mut self,
        form: &ValidatedForm,
        image: &ImageSelection,
    ) -> Option<PendingSubmission> {
        if self.is_in_flight() {
            debug!("Signup already in flight; ignoring submit");
            return None;
        }
        let payload = SubmissionPayload::build(form, image);
        self.state = SubmissionState::InFlight;
        info!(
            has_image = !image.is_empty(),
            "Submitting signup"
        );
        Some(PendingSubmission {
            service: Arc::clone(&self.service),
            payload,
        })
    }

    /// Apply the outcome of the in-flight submission
    pub fn finish(
        &mut self,
        result: Result<SignupResponse, SignupError>,
        cancel: &CancellationToken,
        notifier: &mut dyn Notifier,
        navigator: &mut dyn Navigator,
    ) -> SubmitOutcome {
        if !self.is_in_flight() {
            warn!("Signup result arrived with nothing in flight");
            return SubmitOutcome::Ignored;
        }
        self.state = SubmissionState::Idle;

        if cancel.is_cancelled() {
            info!("Signup screen closed before the response; dropping outcome");
            return SubmitOutcome::Cancelled;
        }

        match result {
            Ok(response) => {
                let message = response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| GENERIC_SUCCESS.to_string());
                info!("Signup succeeded");
                notifier.success(&message);
                navigator.navigate_to(View::SignIn);
                SubmitOutcome::Succeeded(message)
            }
            Err(err) => {
                warn!("Signup failed: {err}");
                let message = err.user_message();
                notifier.error(&message);
                SubmitOutcome::Failed(message)
            }
        }
    }
}
