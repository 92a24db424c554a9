//! End-to-end submit protocol: controller + transport, no rendering surface.

use std::cell::{Cell, RefCell};

use openboard::{
    DEMO_LATENCY_MS, FormUpdate, Mode, SubmissionPayload, SubmissionState, SubmissionTransport,
    TransportError, WaitlistController,
};

/// Records every payload it receives and answers with a canned result.
#[derive(Default)]
struct MockTransport {
    calls: RefCell<Vec<SubmissionPayload>>,
    response: Option<TransportError>,
}

impl MockTransport {
    fn failing(err: TransportError) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            response: Some(err),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl SubmissionTransport for MockTransport {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), TransportError> {
        self.calls.borrow_mut().push(payload.clone());
        match &self.response {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

fn ready_controller(mode: Mode) -> WaitlistController {
    let mut ctl = WaitlistController::new(mode, 0.0);
    ctl.apply(FormUpdate::Email("a@b.com".into()));
    ctl.apply(FormUpdate::ToggleAgree);
    ctl
}

const SUBMIT_AT: f64 = 2_000.0;

#[tokio::test]
async fn demo_submit_simulates_latency_and_succeeds() {
    let mut ctl = ready_controller(Mode::Demo);
    let transport = MockTransport::default();
    let slept = Cell::new(None);

    ctl.submit(SUBMIT_AT, &transport, |ms| {
        slept.set(Some(ms));
        async {}
    })
    .await;

    assert_eq!(ctl.state(), SubmissionState::Ok);
    assert_eq!(ctl.error(), None);
    assert_eq!(slept.get(), Some(DEMO_LATENCY_MS));
    assert_eq!(transport.call_count(), 0, "demo mode must not touch the wire");
}

#[tokio::test]
async fn live_submit_posts_the_payload() {
    let mut ctl = ready_controller(Mode::Live);
    ctl.apply(FormUpdate::Name("Ada".into()));
    ctl.apply(FormUpdate::ToggleInterest("Rust".into()));
    let transport = MockTransport::default();

    ctl.submit(SUBMIT_AT, &transport, |_| async {}).await;

    assert_eq!(ctl.state(), SubmissionState::Ok);
    let calls = transport.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].email, "a@b.com");
    assert_eq!(calls[0].name.as_deref(), Some("Ada"));
    assert_eq!(calls[0].interests, ["Rust"]);
}

#[tokio::test]
async fn live_http_500_surfaces_fail_with_status() {
    let mut ctl = ready_controller(Mode::Live);
    let transport = MockTransport::failing(TransportError::Status { status: 500 });

    ctl.submit(SUBMIT_AT, &transport, |_| async {}).await;

    assert_eq!(ctl.state(), SubmissionState::Fail);
    let message = ctl.error().expect("failure message");
    assert!(message.contains("500"), "message was {message:?}");
}

#[tokio::test]
async fn invalid_email_never_reaches_the_transport() {
    let mut ctl = ready_controller(Mode::Live);
    ctl.apply(FormUpdate::Email("not-an-email".into()));
    let transport = MockTransport::default();

    ctl.submit(SUBMIT_AT, &transport, |_| async {}).await;

    assert_eq!(ctl.state(), SubmissionState::Idle);
    assert_eq!(ctl.error(), Some("Please enter a valid email."));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn filled_honeypot_never_reaches_the_transport() {
    let mut ctl = ready_controller(Mode::Live);
    ctl.set_honeypot("https://spam.example".into());
    let transport = MockTransport::default();

    ctl.submit(SUBMIT_AT, &transport, |_| async {}).await;

    assert_eq!(ctl.state(), SubmissionState::Idle);
    assert!(ctl.error().is_some());
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn instant_submit_never_reaches_the_transport() {
    let mut ctl = ready_controller(Mode::Live);
    let transport = MockTransport::default();

    // 100ms after mount: under the dwell threshold.
    ctl.submit(100.0, &transport, |_| async {}).await;

    assert_eq!(ctl.state(), SubmissionState::Idle);
    assert_eq!(transport.call_count(), 0);

    // The message must not reveal which spam guard tripped.
    let timing_message = ctl.error().expect("message").to_string();
    let mut honeypot_ctl = ready_controller(Mode::Live);
    honeypot_ctl.set_honeypot("bot".into());
    honeypot_ctl.submit(SUBMIT_AT, &transport, |_| async {}).await;
    assert_eq!(honeypot_ctl.error(), Some(timing_message.as_str()));
}

#[tokio::test]
async fn failed_attempt_can_be_retried_after_reset() {
    let mut ctl = ready_controller(Mode::Live);
    let failing = MockTransport::failing(TransportError::Network {
        message: "connection refused".into(),
    });
    ctl.submit(SUBMIT_AT, &failing, |_| async {}).await;
    assert_eq!(ctl.state(), SubmissionState::Fail);
    assert_eq!(ctl.error(), Some("connection refused"));

    ctl.reset();
    assert_eq!(ctl.state(), SubmissionState::Idle);

    let transport = MockTransport::default();
    ctl.submit(SUBMIT_AT + 500.0, &transport, |_| async {}).await;
    assert_eq!(ctl.state(), SubmissionState::Ok);
    assert_eq!(transport.call_count(), 1);
}
