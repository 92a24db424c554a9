//! Demo/live mode resolution.
//!
//! The mode decides whether a submit is simulated locally or POSTed to the
//! waitlist endpoint. It is resolved exactly once at component init from an
//! explicit [`ModeContext`] (query string first, document marker second,
//! `Demo` as the default) and afterward changes only through the user-facing
//! toggle — the ambient page state is never re-read.

/// Submission mode for the waitlist form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Simulate the submit locally; no network I/O.
    #[default]
    Demo,
    /// POST the payload to the waitlist endpoint.
    Live,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Demo => Mode::Live,
            Mode::Live => Mode::Demo,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Demo => "Demo",
            Mode::Live => "Live",
        }
    }
}

/// Ambient inputs to mode resolution, captured once by the caller.
///
/// Passing these explicitly (instead of reaching for window/document inside
/// the resolver) keeps the function pure and callable where no browser
/// context exists.
#[derive(Clone, Debug, Default)]
pub struct ModeContext {
    /// Raw query string of the current location, with or without a leading `?`.
    pub query: Option<String>,
    /// Value of the `data-openboard-mode` attribute on the document element.
    pub document_marker: Option<String>,
}

/// Resolve the initial mode: `?mode=live|demo` wins, then a `"live"` document
/// marker, then [`Mode::Demo`]. Total — missing context yields the default.
pub fn resolve_initial_mode(ctx: &ModeContext) -> Mode {
    if let Some(query) = ctx.query.as_deref() {
        match query_param(query, "mode") {
            Some("live") => return Mode::Live,
            Some("demo") => return Mode::Demo,
            _ => {}
        }
    }
    if ctx.document_marker.as_deref() == Some("live") {
        return Mode::Live;
    }
    Mode::Demo
}

fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| match pair.split_once('=') {
            Some((k, v)) if k == key => Some(v),
            _ => None,
        })
}
