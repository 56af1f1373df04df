//! Client for the hosted form-processing service.
//!
//! The contact form is delegated wholesale to Formspree: field values are
//! read off the live form element at submit time, serialized to JSON, and
//! POSTed to the project endpoint. Validation and mail delivery happen on
//! the service side; this module only classifies what comes back.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, HtmlFormElement, Request, RequestInit, RequestMode, Response};

/// Formspree project endpoint for the support inbox.
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/mbddozwn";

/// Lifecycle of one submission attempt. There is no local retry; a failed
/// attempt returns to `Idle` and the user resubmits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

/// Wire payload. The serialized keys are the field names the service
/// forwards in the notification email, so they must not drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    /// Optional licensing identifier, passed through unvalidated.
    pub hwid: String,
    pub subject: String,
    pub message: String,
    #[serde(rename = "g-recaptcha-response")]
    pub captcha_token: String,
}

impl ContactPayload {
    /// Read every field off the form element. Fields stay uncontrolled;
    /// this is the only point where their values enter Rust.
    pub fn from_form(form: &HtmlFormElement) -> Option<Self> {
        let data = FormData::new_with_form(form).ok()?;
        let field = |name: &str| data.get(name).as_string().unwrap_or_default();
        Some(Self {
            first_name: field("firstName"),
            last_name: field("lastName"),
            email: field("email"),
            hwid: field("hwid"),
            subject: field("subject"),
            message: field("message"),
            captcha_token: field("g-recaptcha-response"),
        })
    }
}

/// One entry of the service's 422 error body. The service also sends a
/// `code` per entry; only the field name and message are surfaced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<FieldError>,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to encode payload: {0}")]
    Encode(String),
    #[error("network failure: {0}")]
    Network(String),
    #[error("form service returned HTTP {0}")]
    Status(u16),
    #[error("submission rejected by field validation")]
    Validation(Vec<FieldError>),
}

/// POST the payload; resolves once the service has accepted or rejected it.
/// No timeout: a hung request keeps the submit control disabled until the
/// user reloads.
pub async fn submit(payload: &ContactPayload) -> Result<(), SubmitError> {
    let body =
        serde_json::to_string(payload).map_err(|e| SubmitError::Encode(e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(FORM_ENDPOINT, &opts).map_err(as_network)?;
    let headers = request.headers();
    headers
        .set("Content-Type", "application/json")
        .map_err(as_network)?;
    headers.set("Accept", "application/json").map_err(as_network)?;

    let window = web_sys::window().ok_or_else(|| SubmitError::Network("no window".into()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(as_network)?
        .dyn_into()
        .map_err(|_| SubmitError::Network("fetch returned a non-Response value".into()))?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    let text = match response.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };
    Err(classify_rejection(status, &text))
}

fn as_network(err: JsValue) -> SubmitError {
    let detail = err.as_string().unwrap_or_else(|| format!("{err:?}"));
    SubmitError::Network(detail)
}

/// Map a non-2xx response onto the error surface the form renders. The
/// service reports field problems as a JSON `errors` array; anything else
/// collapses to a bare status error.
pub fn classify_rejection(status: u16, body: &str) -> SubmitError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.errors.is_empty() => SubmitError::Validation(parsed.errors),
        _ => SubmitError::Status(status),
    }
}

/// The submit control stays disabled while a submission is in flight or the
/// CAPTCHA has not issued a token, regardless of field completeness.
pub fn submit_disabled(state: SubmitState, captcha_token: &str) -> bool {
    state == SubmitState::Submitting || captcha_token.is_empty()
}

/// Inline message for one field, if the service rejected it.
pub fn field_error<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field.as_deref() == Some(field))
        .map(|e| e.message.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ContactPayload {
        ContactPayload {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john@example.com".into(),
            hwid: String::new(),
            subject: "License Activation Issue".into(),
            message: "My key stopped working after a motherboard swap.".into(),
            captcha_token: "tok-123".into(),
        }
    }

    #[test]
    fn test_payload_uses_service_field_names() {
        let json = serde_json::to_value(payload()).expect("serialize");
        for key in [
            "firstName",
            "lastName",
            "email",
            "hwid",
            "subject",
            "message",
            "g-recaptcha-response",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["firstName"], "John");
        assert_eq!(json["g-recaptcha-response"], "tok-123");
    }

    #[test]
    fn test_validation_body_maps_to_field_errors() {
        let body = r#"{"errors":[{"field":"email","code":"TYPE_EMAIL","message":"should be an email"}]}"#;
        match classify_rejection(422, body) {
            SubmitError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(field_error(&errors, "email"), Some("should be an email"));
                assert_eq!(field_error(&errors, "message"), None);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_opaque_failure_keeps_status() {
        match classify_rejection(502, "<html>bad gateway</html>") {
            SubmitError::Status(502) => {}
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_error_list_collapses_to_status() {
        match classify_rejection(422, r#"{"errors":[]}"#) {
            SubmitError::Status(422) => {}
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_gate() {
        // No token: disabled no matter the lifecycle state.
        assert!(submit_disabled(SubmitState::Idle, ""));
        // In flight: disabled even with a token.
        assert!(submit_disabled(SubmitState::Submitting, "tok"));
        // Idle with a token is the only enabled combination the form reaches.
        assert!(!submit_disabled(SubmitState::Idle, "tok"));
    }
}
