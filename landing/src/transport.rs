//! Live submission transport: `fetch` POST to the waitlist endpoint.

use openboard::{SubmissionPayload, SubmissionTransport, TransportError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

pub const WAITLIST_ENDPOINT: &str = "/api/waitlist";

/// POSTs the payload as JSON; any non-2xx status comes back as
/// `TransportError::Status` so the controller can show `API {status}`.
#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

impl SubmissionTransport for FetchTransport {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), TransportError> {
        let body = serde_json::to_string(payload).map_err(|e| TransportError::Network {
            message: e.to_string(),
        })?;

        let headers = Headers::new().map_err(js_error)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(WAITLIST_ENDPOINT, &init).map_err(js_error)?;
        let window = web_sys::window().ok_or_else(|| TransportError::Network {
            message: "no window".into(),
        })?;

        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let response: Response = response.dyn_into().map_err(|_| TransportError::Network {
            message: "unexpected fetch response".into(),
        })?;

        if response.ok() {
            Ok(())
        } else {
            Err(TransportError::Status {
                status: response.status(),
            })
        }
    }
}

fn js_error(value: JsValue) -> TransportError {
    // Rejections are usually Error objects; fall back to the generic message
    // in the controller when nothing stringifies.
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_default();
    TransportError::Network { message }
}
