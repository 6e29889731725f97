//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::is_shortcut;
use crate::signup::{
    FileSession, Navigator, PendingSubmission, RedirectGuard, SessionAccessor, SignupClient,
    SignupError, SignupResponse, SignupService, SubmissionController, SubmitOutcome,
};
use crate::state::{AppState, Form, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// How often the session is re-read while the signup screen is shown
const SESSION_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Result of one submission, tagged with the token of the screen visit that
/// started it
type SubmissionResult = (CancellationToken, Result<SignupResponse, SignupError>);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    config: TuiConfig,
    controller: SubmissionController,
    session: Box<dyn SessionAccessor>,
    guard: RedirectGuard,
    /// Cancelled when the signup screen is left
    screen_cancel: CancellationToken,
    outcome_tx: mpsc::UnboundedSender<SubmissionResult>,
    outcome_rx: mpsc::UnboundedReceiver<SubmissionResult>,
    last_session_check: Option<Instant>,
    /// View seen by the last screen sync
    last_view: View,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured endpoint
    pub fn new(config: TuiConfig) -> Result<Self> {
        let client = SignupClient::from_config(&config)?;
        info!("Signup endpoint: {}", client.url());
        let session = FileSession::new(config.session_file());
        Ok(Self::with_collaborators(
            config,
            Arc::new(client),
            Box::new(session),
        ))
    }

    /// Create an App around explicit collaborators. Performs the mount-time
    /// session check.
    pub fn with_collaborators(
        config: TuiConfig,
        service: Arc<dyn SignupService>,
        session: Box<dyn SessionAccessor>,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            state: AppState::default(),
            config,
            controller: SubmissionController::new(service),
            session,
            guard: RedirectGuard::new(),
            screen_cancel: CancellationToken::new(),
            outcome_tx,
            outcome_rx,
            last_session_check: None,
            last_view: View::SignUp,
            quit: false,
        };
        app.check_session(Instant::now());
        app.sync_screen();
        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a signup request is in flight
    pub fn is_submitting(&self) -> bool {
        self.controller.is_in_flight()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        match self.state.current_view() {
            View::SignUp => self.handle_signup_key(key),
            View::SignIn | View::Profile => self.handle_landing_key(key),
        }

        self.sync_screen();
        Ok(())
    }

    /// Handle keys on the signup form
    fn handle_signup_key(&mut self, key: KeyEvent) {
        let shortcut = is_shortcut(key.modifiers);
        let on_image = self.state.form.is_on_image_input();

        match key.code {
            KeyCode::Esc => {
                self.state.toasts.dismiss_latest();
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_signup();
            }
            KeyCode::Char('l') if shortcut => {
                self.state.router.navigate_to(View::SignIn);
            }
            KeyCode::Char('u') if shortcut && on_image => {
                self.state.form.clear_image();
                debug!("Profile image selection cleared");
            }
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter if self.state.form.is_on_submit_button() => self.submit_signup(),
            KeyCode::Enter if on_image => self.select_image(),
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Backspace => self.state.form.backspace(),
            KeyCode::Char(c) if !shortcut => self.state.form.input_char(c),
            _ => {}
        }
    }

    fn select_image(&mut self) {
        let max_bytes = self.config.max_image_bytes();
        match self.state.form.select_image(max_bytes) {
            Ok(()) => {
                if let Some(image) = self.state.form.image().latest() {
                    info!(size = image.size(), "Profile image selected");
                }
            }
            Err(err) => warn!("Profile image rejected: {err}"),
        }
    }

    /// Handle keys on the sign-in and profile panels
    fn handle_landing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                if !self.state.toasts.dismiss_latest() {
                    self.state.router.back();
                }
            }
            KeyCode::Enter if self.state.current_view() == View::SignIn => {
                self.state.router.navigate_to(View::SignUp);
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Validate and, if valid, start the signup request in the background
    fn submit_signup(&mut self) {
        if self.controller.is_in_flight() {
            debug!("Submit ignored while a request is in flight");
            return;
        }

        let validated = match self.state.form.attempt_submit() {
            Ok(validated) => validated,
            Err(report) => {
                let failing: Vec<&str> = report.failing_fields().map(|f| f.key()).collect();
                info!(
                    count = report.error_count(),
                    "Signup blocked by validation: {failing:?}"
                );
                return;
            }
        };

        if let Some(pending) = self.controller.begin(&validated, self.state.form.image()) {
            self.spawn_submission(pending);
        }
    }

    /// Run the request on the runtime. Leaving the screen aborts it; either
    /// way exactly one result is sent back.
    fn spawn_submission(&self, pending: PendingSubmission) {
        let tx = self.outcome_tx.clone();
        let cancel = self.screen_cancel.clone();
        debug!(
            fields = pending.payload().fields().len(),
            "Dispatching signup request"
        );
        let request = tokio::spawn(pending.send());
        let abort = request.abort_handle();

        tokio::spawn(async move {
            let result = tokio::select! {
                joined = request => {
                    joined.unwrap_or_else(|err| Err(SignupError::Task(err.to_string())))
                }
                () = cancel.cancelled() => {
                    abort.abort();
                    Err(SignupError::Cancelled)
                }
            };
            if tx.send((cancel, result)).is_err() {
                debug!("App gone before the signup result was delivered");
            }
        });
    }

    /// Apply any finished submission. Returns the outcome when one was applied.
    pub fn poll_submission(&mut self) -> Option<SubmitOutcome> {
        let (cancel, result) = self.outcome_rx.try_recv().ok()?;
        Some(self.apply_result(&cancel, result))
    }

    fn apply_result(
        &mut self,
        cancel: &CancellationToken,
        result: Result<SignupResponse, SignupError>,
    ) -> SubmitOutcome {
        let outcome = self.controller.finish(
            result,
            cancel,
            &mut self.state.toasts,
            &mut self.state.router,
        );
        self.sync_screen();
        outcome
    }

    /// Periodic work: expire notifications, apply results, watch the session
    pub fn tick(&mut self, now: Instant) {
        self.state.toasts.expire(now);
        while self.poll_submission().is_some() {}

        let due = self.last_session_check.map_or(true, |last| {
            now.saturating_duration_since(last) >= SESSION_POLL_INTERVAL
        });
        if due {
            self.check_session(now);
        }
        self.sync_screen();
    }

    fn check_session(&mut self, now: Instant) {
        if self.state.current_view() != View::SignUp {
            return;
        }
        self.last_session_check = Some(now);
        self.guard.observe(self.session.as_ref(), &mut self.state.router);
    }

    /// React to view changes. Leaving signup cancels its pending work;
    /// returning starts a fresh visit, whose mount check may redirect again.
    fn sync_screen(&mut self) {
        loop {
            let current = self.state.current_view();
            if current == self.last_view {
                return;
            }
            let previous = std::mem::replace(&mut self.last_view, current);
            info!(from = previous.path(), to = current.path(), "Navigated");

            if previous == View::SignUp {
                self.screen_cancel.cancel();
            }
            if current == View::SignUp {
                self.screen_cancel = CancellationToken::new();
                self.state.reset_form();
                self.guard.reset();
                self.check_session(Instant::now());
            }
        }
    }
}
