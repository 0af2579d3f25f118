use serde::{Deserialize, Serialize};

/// A plain content dialog: GET `url` with `params` and show the body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DialogRequest {
    pub title: String,
    pub url: String,
    pub params: String,
    pub width: u32,
    pub height: u32,
}

/// An edit dialog: GET a form fragment, show it with Confirm/Cancel, and on
/// Confirm submit `form_id` asynchronously to `submit_url`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditDialogRequest {
    pub title: String,
    pub url: String,
    pub params: String,
    pub width: u32,
    pub height: u32,
    pub form_id: String,
    pub submit_url: String,
}

/// Completion of an edit-form submission as reported by the transport.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum SubmitOutcome {
    /// The server answered; `body` is the raw response text.
    Response(String),
    /// Network or server failure.
    TransportFailure,
}

/// The `{code, msg}` response envelope, classified once.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Parsed { code: i64, msg: String },
    Unparsed { raw: String },
}

impl Envelope {
    /// Classifies a response body. `code` may be a JSON number or a numeric
    /// string; anything without a usable `code` is kept verbatim.
    pub fn classify(body: &str) -> Self {
        let unparsed = || Envelope::Unparsed {
            raw: body.to_string(),
        };
        let value: serde_json::Value = match serde_json::from_str(body) {
            Ok(v) => v,
            Err(_) => return unparsed(),
        };
        let code = match value.get("code") {
            Some(serde_json::Value::Number(n)) => n.as_i64(),
            Some(serde_json::Value::String(s)) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        let Some(code) = code else {
            return unparsed();
        };
        let msg = match value.get("msg") {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        Envelope::Parsed { code, msg }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Parsed { code: 0, .. })
    }
}
