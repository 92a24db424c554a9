//! The waitlist submission controller.
//!
//! Owns the field state, derives validity, and runs the submit protocol as a
//! small state machine: `Idle → Submitting → Ok | Fail`. The synchronous half
//! ([`WaitlistController::begin_submit`]) performs validation and decides the
//! transport path; the asynchronous half is whatever drives that path and
//! reports back through [`WaitlistController::finish_submit`]. Splitting the
//! two keeps the machine usable from a wasm event handler (where the timer
//! and fetch live in the view layer) and from a plain async test alike.
//!
//! Single-threaded by construction: the only suspension point is the
//! in-flight transport/delay future, during which the state is `Submitting`
//! and further submits are rejected, not queued. There is no cancellation and
//! no timeout beyond what the transport itself enforces.

use tracing::{debug, warn};

use crate::email::is_valid_email;
use crate::error::{TransportError, ValidationError};
use crate::form::{FormFields, FormUpdate};
use crate::mode::Mode;
use crate::payload::SubmissionPayload;
use crate::spam::SpamGuard;

/// Simulated latency of the demo path, in milliseconds.
pub const DEMO_LATENCY_MS: u64 = 700;

/// Shown for transport failures that carry no message of their own.
const GENERIC_FAILURE: &str = "Something went wrong.";

/// Lifecycle of one submission attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Ok,
    Fail,
}

/// What [`WaitlistController::begin_submit`] asks the caller to drive next.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitStep {
    /// Validation failed or no submit is possible right now; nothing to do.
    Rejected,
    /// Demo mode: wait [`DEMO_LATENCY_MS`] locally, then report success.
    /// No network or process I/O happens on this path.
    Simulate,
    /// Live mode: deliver the payload to the waitlist endpoint.
    Send(SubmissionPayload),
}

/// The remote endpoint collaborator. The core never constructs one; the
/// landing crate provides a `fetch`-backed implementation and the tests a
/// recording mock.
pub trait SubmissionTransport {
    fn submit(
        &self,
        payload: &SubmissionPayload,
    ) -> impl Future<Output = Result<(), TransportError>>;
}

/// Form state + submit protocol for one waitlist form instance.
#[derive(Clone, Debug)]
pub struct WaitlistController {
    mode: Mode,
    pub fields: FormFields,
    guard: SpamGuard,
    state: SubmissionState,
    error: Option<String>,
}

impl WaitlistController {
    /// `mounted_at_ms` is the creation timestamp of the form (browser:
    /// `Date.now()`); the spam guard measures dwell time against it.
    pub fn new(mode: Mode, mounted_at_ms: f64) -> Self {
        Self {
            mode,
            fields: FormFields::default(),
            guard: SpamGuard::new(mounted_at_ms),
            state: SubmissionState::Idle,
            error: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notes_left(&self) -> i64 {
        self.fields.notes_left()
    }

    /// The only way mode changes after initial resolution.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn apply(&mut self, update: FormUpdate) {
        self.fields.apply(update);
    }

    /// Mirror the hidden honeypot input into the spam guard.
    pub fn set_honeypot(&mut self, value: String) {
        self.guard.set_honeypot(value);
    }

    /// Whether the submit trigger should be enabled. The UI derives the
    /// button state from this and nothing else.
    pub fn can_submit(&self) -> bool {
        is_valid_email(&self.fields.email)
            && self.fields.agree
            && self.state != SubmissionState::Submitting
            && self.fields.notes_left() >= 0
            && self.guard.is_clean()
    }

    /// Synchronous half of the submit protocol.
    ///
    /// Rejects re-entrant submits while one is in flight and anything after a
    /// success. Otherwise clears the inline error, runs the four validation
    /// checks (email, terms, honeypot, dwell time — short-circuiting, each
    /// with its own message), and on success moves to `Submitting` and
    /// returns the transport path for the caller to drive. A failed `Fail`
    /// outcome is retryable: calling this again starts a fresh attempt.
    pub fn begin_submit(&mut self, now_ms: f64) -> SubmitStep {
        match self.state {
            SubmissionState::Submitting => {
                warn!("waitlist submit ignored: previous attempt still in flight");
                return SubmitStep::Rejected;
            }
            SubmissionState::Ok => return SubmitStep::Rejected,
            SubmissionState::Idle | SubmissionState::Fail => {}
        }

        self.error = None;
        self.state = SubmissionState::Idle;

        if let Err(err) = self.validate(now_ms) {
            self.error = Some(err.to_string());
            return SubmitStep::Rejected;
        }

        self.state = SubmissionState::Submitting;
        match self.mode {
            Mode::Demo => SubmitStep::Simulate,
            Mode::Live => {
                let payload = SubmissionPayload::from_fields(&self.fields);
                debug!(email = %payload.email, "waitlist submit dispatched");
                SubmitStep::Send(payload)
            }
        }
    }

    /// Asynchronous half: record the transport outcome.
    pub fn finish_submit(&mut self, result: Result<(), TransportError>) {
        match result {
            Ok(()) => {
                debug!("waitlist submission accepted");
                self.state = SubmissionState::Ok;
            }
            Err(err) => {
                let message = err.to_string();
                self.error = Some(if message.is_empty() {
                    GENERIC_FAILURE.to_string()
                } else {
                    message
                });
                self.state = SubmissionState::Fail;
            }
        }
    }

    /// Full submit protocol for native embeddings and tests. The demo path
    /// awaits `delay(DEMO_LATENCY_MS)` so the core stays timer-free; browsers
    /// drive [`begin_submit`](Self::begin_submit) /
    /// [`finish_submit`](Self::finish_submit) directly instead.
    pub async fn submit<T, D, Fut>(&mut self, now_ms: f64, transport: &T, delay: D)
    where
        T: SubmissionTransport,
        D: FnOnce(u64) -> Fut,
        Fut: Future<Output = ()>,
    {
        match self.begin_submit(now_ms) {
            SubmitStep::Rejected => {}
            SubmitStep::Simulate => {
                delay(DEMO_LATENCY_MS).await;
                self.finish_submit(Ok(()));
            }
            SubmitStep::Send(payload) => {
                let result = transport.submit(&payload).await;
                self.finish_submit(result);
            }
        }
    }

    /// Explicit retry path out of a terminal outcome: back to `Idle` with the
    /// error cleared. Field values are preserved.
    pub fn reset(&mut self) {
        if matches!(self.state, SubmissionState::Ok | SubmissionState::Fail) {
            self.state = SubmissionState::Idle;
            self.error = None;
        }
    }

    fn validate(&self, now_ms: f64) -> Result<(), ValidationError> {
        if !is_valid_email(&self.fields.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !self.fields.agree {
            return Err(ValidationError::TermsNotAccepted);
        }
        self.guard.check(now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormUpdate;
    use crate::spam::MIN_DWELL_MS;

    fn ready_controller(mode: Mode) -> WaitlistController {
        let mut ctl = WaitlistController::new(mode, 0.0);
        ctl.apply(FormUpdate::Email("a@b.com".into()));
        ctl.apply(FormUpdate::ToggleAgree);
        ctl
    }

    fn past_dwell() -> f64 {
        MIN_DWELL_MS + 800.0
    }

    #[test]
    fn demo_submit_asks_for_simulation() {
        let mut ctl = ready_controller(Mode::Demo);
        assert_eq!(ctl.begin_submit(past_dwell()), SubmitStep::Simulate);
        assert_eq!(ctl.state(), SubmissionState::Submitting);
    }

    #[test]
    fn live_submit_carries_the_payload() {
        let mut ctl = ready_controller(Mode::Live);
        ctl.apply(FormUpdate::ToggleInterest("Rust".into()));
        match ctl.begin_submit(past_dwell()) {
            SubmitStep::Send(payload) => {
                assert_eq!(payload.email, "a@b.com");
                assert_eq!(payload.interests, ["Rust"]);
                assert_eq!(payload.name, None);
            }
            other => panic!("expected Send, got {other:?}"),
        }
    }

    #[test]
    fn invalid_email_sets_message_and_stays_idle() {
        let mut ctl = ready_controller(Mode::Live);
        ctl.apply(FormUpdate::Email("not-an-email".into()));
        assert_eq!(ctl.begin_submit(past_dwell()), SubmitStep::Rejected);
        assert_eq!(ctl.state(), SubmissionState::Idle);
        assert_eq!(ctl.error(), Some("Please enter a valid email."));
    }

    #[test]
    fn unchecked_terms_are_rejected() {
        let mut ctl = ready_controller(Mode::Demo);
        ctl.apply(FormUpdate::ToggleAgree);
        assert_eq!(ctl.begin_submit(past_dwell()), SubmitStep::Rejected);
        assert_eq!(ctl.error(), Some("Please accept the terms to continue."));
    }

    #[test]
    fn reentrant_submit_is_rejected_not_queued() {
        let mut ctl = ready_controller(Mode::Demo);
        assert_eq!(ctl.begin_submit(past_dwell()), SubmitStep::Simulate);
        assert_eq!(ctl.begin_submit(past_dwell()), SubmitStep::Rejected);
        // Still submitting; the rejection did not clobber the state.
        assert_eq!(ctl.state(), SubmissionState::Submitting);
    }

    #[test]
    fn submit_after_success_is_inert() {
        let mut ctl = ready_controller(Mode::Demo);
        ctl.begin_submit(past_dwell());
        ctl.finish_submit(Ok(()));
        assert_eq!(ctl.state(), SubmissionState::Ok);
        assert_eq!(ctl.begin_submit(past_dwell()), SubmitStep::Rejected);
        assert_eq!(ctl.state(), SubmissionState::Ok);
    }

    #[test]
    fn failure_is_retryable() {
        let mut ctl = ready_controller(Mode::Live);
        ctl.begin_submit(past_dwell());
        ctl.finish_submit(Err(TransportError::Status { status: 503 }));
        assert_eq!(ctl.state(), SubmissionState::Fail);
        assert_eq!(ctl.error(), Some("API 503"));

        // A new attempt clears the message and re-enters the protocol.
        assert!(matches!(
            ctl.begin_submit(past_dwell()),
            SubmitStep::Send(_)
        ));
        assert_eq!(ctl.error(), None);
    }

    #[test]
    fn empty_transport_message_falls_back_to_generic() {
        let mut ctl = ready_controller(Mode::Live);
        ctl.begin_submit(past_dwell());
        ctl.finish_submit(Err(TransportError::Network {
            message: String::new(),
        }));
        assert_eq!(ctl.error(), Some("Something went wrong."));
    }

    #[test]
    fn reset_returns_to_idle_and_keeps_fields() {
        let mut ctl = ready_controller(Mode::Demo);
        ctl.begin_submit(past_dwell());
        ctl.finish_submit(Ok(()));
        ctl.reset();
        assert_eq!(ctl.state(), SubmissionState::Idle);
        assert_eq!(ctl.error(), None);
        assert_eq!(ctl.fields.email, "a@b.com");
    }

    #[test]
    fn reset_is_a_noop_while_idle_or_submitting() {
        let mut ctl = ready_controller(Mode::Demo);
        ctl.reset();
        assert_eq!(ctl.state(), SubmissionState::Idle);
        ctl.begin_submit(past_dwell());
        ctl.reset();
        assert_eq!(ctl.state(), SubmissionState::Submitting);
    }

    #[test]
    fn can_submit_tracks_every_gate() {
        let mut ctl = ready_controller(Mode::Demo);
        assert!(ctl.can_submit());

        ctl.apply(FormUpdate::Notes("x".repeat(281)));
        assert!(!ctl.can_submit(), "over-cap notes must disable the trigger");
        ctl.apply(FormUpdate::Notes(String::new()));

        ctl.set_honeypot("bot".into());
        assert!(!ctl.can_submit());
        ctl.set_honeypot(String::new());

        ctl.begin_submit(past_dwell());
        assert!(!ctl.can_submit(), "in-flight submit disables the trigger");
    }

    #[test]
    fn mode_toggle_switches_paths() {
        let mut ctl = ready_controller(Mode::Demo);
        ctl.toggle_mode();
        assert_eq!(ctl.mode(), Mode::Live);
        assert!(matches!(
            ctl.begin_submit(past_dwell()),
            SubmitStep::Send(_)
        ));
    }
}
