use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Detail reported when the server could not be reached or did not answer with a usable body.
pub const UNKNOWN_ERROR_DETAIL: &str = "An unknown error occurred";

/// Body of a rejected `POST /api/login`, or the fallback used when no such body exists.
///
/// Any JSON object the server answers with is accepted and serializes back to the same object,
/// so field-level errors such as `{"non_field_errors": [...]}` survive untouched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LoginFailureResponse {
    /// The server's `detail` field, usually a human readable reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
    /// Every other field of the server's error body
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LoginFailureResponse {
    /// Creates a failure carrying only a string `detail`.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(Value::String(detail.into())),
            extra: Map::new(),
        }
    }

    /// The generic failure used when the transport produced no structured error body.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_ERROR_DETAIL)
    }

    /// A one-line description for logs and terminals.
    ///
    /// A string `detail` is returned as is. Otherwise the body is shown as compact JSON.
    pub fn message(&self) -> String {
        match &self.detail {
            Some(Value::String(detail)) => detail.clone(),
            Some(detail) => detail.to_string(),
            None => Value::Object(self.extra.clone()).to_string(),
        }
    }
}
