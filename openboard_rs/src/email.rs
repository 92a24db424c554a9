//! Liberal email syntax check.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Returns true for `local@domain.tld`-shaped strings: a non-whitespace,
/// non-`@` run, an `@`, then a non-whitespace run containing at least one `.`.
///
/// Intentionally permissive — this is a typo catcher, not an RFC 5322
/// validator, and it will accept some addresses no mail server would. The
/// endpoint owns real verification.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}
