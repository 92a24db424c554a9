//! Error taxonomy for the waitlist flow.
//!
//! Validation errors are user-correctable and surface inline before any
//! transport work happens; transport errors mark a failed submission attempt
//! and are recoverable by resubmitting. The `#[error]` strings are exactly
//! what the UI shows.

use thiserror::Error;

/// Rejections detected synchronously before any transport call.
///
/// These never move the controller to the `Fail` state; they set an inline
/// message and leave the form idle.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid email.")]
    InvalidEmail,

    #[error("Please accept the terms to continue.")]
    TermsNotAccepted,

    /// The hidden honeypot field was filled in. Shares its message with
    /// [`ValidationError::SubmittedTooFast`] so an automated submitter cannot
    /// tell which spam guard fired.
    #[error("Something went wrong. Please wait a moment and try again.")]
    SpamSuspected,

    /// Submit arrived before the minimum dwell time since form mount.
    #[error("Something went wrong. Please wait a moment and try again.")]
    SubmittedTooFast,
}

/// Failures from the live submission path.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The waitlist endpoint answered with a non-success HTTP status.
    #[error("API {status}")]
    Status { status: u16 },

    /// Transport-level failure: network down, fetch rejected, bad response.
    /// The message may be empty when the underlying error had none; callers
    /// fall back to a generic string in that case.
    #[error("{message}")]
    Network { message: String },
}
