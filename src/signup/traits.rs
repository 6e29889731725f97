//! Collaborator traits for the signup pipeline, mockable in tests

use super::error::SignupError;
use super::payload::SubmissionPayload;
use crate::state::View;
use async_trait::async_trait;
use serde::Deserialize;

/// Body of a successful signup response
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Remote signup operation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignupService: Send + Sync {
    /// Send one registration request
    async fn signup(&self, payload: SubmissionPayload) -> Result<SignupResponse, SignupError>;
}

/// Routing collaborator
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn navigate_to(&mut self, view: View);
}

/// Ephemeral user-facing feedback
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn success(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Read-only view of the shared session
#[cfg_attr(test, mockall::automock)]
pub trait SessionAccessor: Send + Sync {
    /// Current session token, if any
    fn token(&self) -> Option<String>;
}
