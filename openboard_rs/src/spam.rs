//! Lightweight bot mitigation: honeypot field + minimum dwell time.
//!
//! Both checks run only at submit time. Their user-facing messages are
//! deliberately identical so a bot author cannot tell which one tripped.

use tracing::warn;

use crate::error::ValidationError;

/// Minimum elapsed time between form mount and submit, in milliseconds.
/// Anything faster is treated as a programmatic submission.
pub const MIN_DWELL_MS: f64 = 1200.0;

/// Submit-time spam checks for one form instance.
///
/// Timestamps are `f64` milliseconds so the browser can feed `Date.now()`
/// straight in; tests pass arbitrary numbers.
#[derive(Clone, Debug)]
pub struct SpamGuard {
    honeypot: String,
    mounted_at_ms: f64,
}

impl SpamGuard {
    /// Capture the mount timestamp once, when the form is created.
    pub fn new(mounted_at_ms: f64) -> Self {
        Self {
            honeypot: String::new(),
            mounted_at_ms,
        }
    }

    /// Record the hidden field's value. Legitimate users never type here.
    pub fn set_honeypot(&mut self, value: String) {
        self.honeypot = value;
    }

    pub fn is_clean(&self) -> bool {
        self.honeypot.is_empty()
    }

    /// Run both checks against the submit timestamp.
    pub fn check(&self, now_ms: f64) -> Result<(), ValidationError> {
        if !self.honeypot.is_empty() {
            warn!("waitlist submit rejected: honeypot filled");
            return Err(ValidationError::SpamSuspected);
        }
        let elapsed = now_ms - self.mounted_at_ms;
        if elapsed < MIN_DWELL_MS {
            warn!(elapsed_ms = elapsed, "waitlist submit rejected: too fast");
            return Err(ValidationError::SubmittedTooFast);
        }
        Ok(())
    }
}
