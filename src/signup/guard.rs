//! Session redirect guard
//!
//! Sends the user to their profile when a session already exists. The first
//! observation is the mount check; afterwards only changes of the token are
//! acted on. The token is only read.

use super::traits::{Navigator, SessionAccessor};
use crate::state::View;
use tracing::info;

#[derive(Debug, Default)]
pub struct RedirectGuard {
    /// Token seen at the last observation; `None` before mount
    last_seen: Option<Option<String>>,
}

impl RedirectGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the session and redirect if a token is present. Returns whether
    /// a redirect was issued.
    pub fn observe(&mut self, session: &dyn SessionAccessor, navigator: &mut dyn Navigator) -> bool {
        let token = session.token().filter(|t| !t.trim().is_empty());
        if self.last_seen.as_ref() == Some(&token) {
            return false;
        }
        let present = token.is_some();
        self.last_seen = Some(token);

        if present {
            info!("Existing session found; leaving signup for profile");
            navigator.navigate_to(View::Profile);
        }
        present
    }

    /// Forget the last observation so the next one counts as a fresh mount
    pub fn reset(&mut self) {
        self.last_seen = None;
    }
}
