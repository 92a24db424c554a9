//! Wire shape sent to the waitlist endpoint.

use serde::Serialize;

use crate::form::{FormFields, Role};

/// JSON body of the live submission POST. `name` and `notes` are omitted
/// entirely (not sent as `""`) when blank after trimming.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubmissionPayload {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: Role,
    pub interests: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SubmissionPayload {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            email: fields.email.clone(),
            name: non_empty(&fields.name),
            role: fields.role,
            interests: fields.interests.clone(),
            notes: non_empty(&fields.notes),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
