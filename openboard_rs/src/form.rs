//! The form-field aggregate and its pure update transitions.
//!
//! Every field change goes through [`FormFields::apply`], so the controller
//! (and the tests) never depend on a rendering surface. The notes field has
//! two limits on purpose: input is hard-truncated at [`NOTES_HARD_CAP`] while
//! the visible counter is computed against [`NOTES_SOFT_CAP`] and may go
//! negative — an over-limit note can exist but can never be submitted.

use serde::Serialize;

/// Soft cap the remaining-characters counter is computed against.
pub const NOTES_SOFT_CAP: usize = 280;
/// Hard cap enforced at input time; the reducer truncates beyond this.
pub const NOTES_HARD_CAP: usize = 320;

/// Fixed catalog of interest tags shown on the form.
pub const INTEREST_TAGS: [&str; 8] = [
    "TypeScript",
    "Python",
    "Rust",
    "React Native",
    "Next.js",
    "AI/ML",
    "DevOps",
    "Design/Docs",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Maintainer,
    #[default]
    Contributor,
}

/// All user-editable form state. The honeypot lives in the spam guard, not
/// here — it is not a field a legitimate user ever sees.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormFields {
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Selected tags in insertion order, for stable rendering.
    pub interests: Vec<String>,
    pub notes: String,
    pub agree: bool,
}

/// A single field transition.
#[derive(Clone, Debug, PartialEq)]
pub enum FormUpdate {
    Email(String),
    Name(String),
    Role(Role),
    ToggleInterest(String),
    Notes(String),
    ToggleAgree,
}

impl FormFields {
    pub fn apply(&mut self, update: FormUpdate) {
        match update {
            FormUpdate::Email(v) => self.email = v,
            FormUpdate::Name(v) => self.name = v,
            FormUpdate::Role(r) => self.role = r,
            FormUpdate::ToggleInterest(tag) => {
                self.interests = toggle_interest(&self.interests, &tag);
            }
            FormUpdate::Notes(v) => self.notes = truncate_chars(&v, NOTES_HARD_CAP),
            FormUpdate::ToggleAgree => self.agree = !self.agree,
        }
    }

    /// Characters left against the soft cap. Negative once the note runs past
    /// [`NOTES_SOFT_CAP`]; submission stays blocked while negative.
    pub fn notes_left(&self) -> i64 {
        NOTES_SOFT_CAP as i64 - self.notes.chars().count() as i64
    }
}

/// Remove `tag` if present, else append it. Toggling twice with the same tag
/// returns the original selection; insertion order of the rest is preserved.
pub fn toggle_interest(current: &[String], tag: &str) -> Vec<String> {
    if current.iter().any(|t| t.as_str() == tag) {
        current
            .iter()
            .filter(|t| t.as_str() != tag)
            .cloned()
            .collect()
    } else {
        let mut next = current.to_vec();
        next.push(tag.to_string());
        next
    }
}

/// Truncate to at most `max` characters, respecting char boundaries.
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
