//! Application state definitions

use super::forms::SignupForm;
use crate::signup::{Navigator, Notifier};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a notification stays on screen
pub const TOAST_TTL: Duration = Duration::from_secs(4);
/// Oldest notifications are dropped beyond this
const MAX_TOASTS: usize = 3;
/// Oldest history entries are dropped beyond this
const MAX_HISTORY: usize = 16;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    SignUp,
    SignIn,
    Profile,
}

impl View {
    /// Route the view lives at
    pub fn path(&self) -> &'static str {
        match self {
            Self::SignUp => "/auth/signup",
            Self::SignIn => "/auth/signin",
            Self::Profile => "/profile",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::SignUp => "Sign Up",
            Self::SignIn => "Sign In",
            Self::Profile => "Profile",
        }
    }
}

/// View navigation with history
#[derive(Debug, Default)]
pub struct Router {
    current: View,
    history: Vec<View>,
}

impl Router {
    pub fn current(&self) -> View {
        self.current
    }

    /// Return to the previous view. Returns false when there is none.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(view) => {
                self.current = view;
                true
            }
            None => false,
        }
    }
}

impl Navigator for Router {
    fn navigate_to(&mut self, view: View) {
        if view == self.current {
            return;
        }
        // Going to the view we came from unwinds instead of stacking
        if self.history.last() == Some(&view) {
            self.history.pop();
        } else {
            self.history.push(self.current);
            if self.history.len() > MAX_HISTORY {
                self.history.remove(0);
            }
        }
        self.current = view;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: Instant,
}

/// Transient notifications, newest last
#[derive(Debug, Default)]
pub struct Toasts {
    items: VecDeque<Notification>,
}

impl Toasts {
    fn push(&mut self, kind: NotificationKind, message: &str) {
        self.items.push_back(Notification {
            kind,
            message: message.to_string(),
            created_at: Instant::now(),
        });
        while self.items.len() > MAX_TOASTS {
            self.items.pop_front();
        }
    }

    /// Drop notifications older than `TOAST_TTL`
    pub fn expire(&mut self, now: Instant) {
        self.items
            .retain(|n| now.saturating_duration_since(n.created_at) < TOAST_TTL);
    }

    pub fn dismiss_latest(&mut self) -> bool {
        self.items.pop_back().is_some()
    }

    #[cfg(test)]
    pub fn latest(&self) -> Option<&Notification> {
        self.items.back()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notification> {
        self.items.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Notifier for Toasts {
    fn success(&mut self, message: &str) {
        self.push(NotificationKind::Success, message);
    }

    fn error(&mut self, message: &str) {
        self.push(NotificationKind::Error, message);
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub router: Router,
    pub toasts: Toasts,
    pub form: SignupForm,
}

impl AppState {
    pub fn current_view(&self) -> View {
        self.router.current()
    }

    /// Fresh form for a new visit to the signup screen
    pub fn reset_form(&mut self) {
        self.form = SignupForm::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SignupField;
    use pretty_assertions::assert_eq;

    mod router {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_on_signup() {
            let router = Router::default();
            assert_eq!(router.current(), View::SignUp);
        }

        #[test]
        fn test_navigate_and_back() {
            let mut router = Router::default();
            router.navigate_to(View::SignIn);
            assert_eq!(router.current(), View::SignIn);
            assert!(router.back());
            assert_eq!(router.current(), View::SignUp);
            assert!(!router.back());
        }

        #[test]
        fn test_navigate_to_current_is_noop() {
            let mut router = Router::default();
            router.navigate_to(View::SignUp);
            assert!(!router.back());
        }

        #[test]
        fn test_returning_to_previous_view_unwinds_history() {
            let mut router = Router::default();
            for _ in 0..50 {
                router.navigate_to(View::SignIn);
                router.navigate_to(View::SignUp);
            }
            assert!(router.history.is_empty());
            router.navigate_to(View::SignIn);
            assert!(router.back());
            assert_eq!(router.current(), View::SignUp);
        }

        #[test]
        fn test_history_is_bounded() {
            let mut router = Router::default();
            for _ in 0..50 {
                router.navigate_to(View::SignIn);
                router.navigate_to(View::Profile);
                router.navigate_to(View::SignUp);
            }
            assert!(router.history.len() <= MAX_HISTORY);
        }

        #[test]
        fn test_paths() {
            assert_eq!(View::SignUp.path(), "/auth/signup");
            assert_eq!(View::SignIn.path(), "/auth/signin");
            assert_eq!(View::Profile.path(), "/profile");
        }
    }

    mod toasts {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_success_and_error_kinds() {
            let mut toasts = Toasts::default();
            toasts.success("ok");
            toasts.error("bad");
            let kinds: Vec<_> = toasts.iter().map(|n| n.kind).collect();
            assert_eq!(kinds, vec![NotificationKind::Success, NotificationKind::Error]);
            let newest_first: Vec<_> = toasts.iter().rev().map(|n| n.message.as_str()).collect();
            assert_eq!(newest_first, vec!["bad", "ok"]);
            assert_eq!(toasts.latest().map(|n| n.message.as_str()), Some("bad"));
        }

        #[test]
        fn test_oldest_dropped_past_capacity() {
            let mut toasts = Toasts::default();
            for i in 0..5 {
                toasts.success(&format!("n{i}"));
            }
            assert_eq!(toasts.len(), MAX_TOASTS);
            assert_eq!(toasts.iter().next().map(|n| n.message.as_str()), Some("n2"));
        }

        #[test]
        fn test_expire_after_ttl() {
            let mut toasts = Toasts::default();
            toasts.error("bad");
            let created = toasts.latest().map(|n| n.created_at).unwrap();
            toasts.expire(created + Duration::from_secs(1));
            assert_eq!(toasts.len(), 1);
            toasts.expire(created + TOAST_TTL);
            assert!(toasts.is_empty());
        }

        #[test]
        fn test_dismiss_latest() {
            let mut toasts = Toasts::default();
            assert!(!toasts.dismiss_latest());
            toasts.success("a");
            toasts.success("b");
            assert!(toasts.dismiss_latest());
            assert_eq!(toasts.latest().map(|n| n.message.as_str()), Some("a"));
        }
    }

    #[test]
    fn test_reset_form_clears_values() {
        let mut state = AppState::default();
        state.form.set_value(SignupField::Name, "Ada");
        state.reset_form();
        assert_eq!(state.form.values().name, "");
    }
}
