//! # openboard
//!
//! Core logic for the OpenBoard waitlist: mode resolution, field validation,
//! spam mitigation, and the submission state machine. Everything in this crate
//! is rendering-free and compiles for both native targets and
//! `wasm32-unknown-unknown`, so the landing page and the test suite drive the
//! exact same code.
//!
//! ## Quick start
//!
//! ```rust
//! use openboard::{FormUpdate, Mode, SubmitStep, WaitlistController};
//!
//! let mut ctl = WaitlistController::new(Mode::Demo, 0.0);
//! ctl.apply(FormUpdate::Email("ada@example.com".into()));
//! ctl.apply(FormUpdate::ToggleAgree);
//!
//! // 2s after mount: the spam guard is satisfied, demo mode simulates locally.
//! assert_eq!(ctl.begin_submit(2_000.0), SubmitStep::Simulate);
//! ctl.finish_submit(Ok(()));
//! ```
//!
//! The landing crate wires [`WaitlistController`] into Leptos signals and
//! supplies a `fetch`-backed [`SubmissionTransport`] for live mode; nothing
//! here touches the DOM.

pub mod controller;
pub mod email;
pub mod error;
pub mod form;
pub mod mode;
pub mod payload;
pub mod spam;

pub use controller::{
    DEMO_LATENCY_MS, SubmissionState, SubmissionTransport, SubmitStep, WaitlistController,
};
pub use email::is_valid_email;
pub use error::{TransportError, ValidationError};
pub use form::{
    FormFields, FormUpdate, INTEREST_TAGS, NOTES_HARD_CAP, NOTES_SOFT_CAP, Role, toggle_interest,
};
pub use mode::{Mode, ModeContext, resolve_initial_mode};
pub use payload::SubmissionPayload;
pub use spam::{MIN_DWELL_MS, SpamGuard};
