use serde::{Deserialize, Serialize};

use super::{LoginFailureResponse, LoginSuccessResponse};

/// `type` tag of [`LoginAction::Pending`].
pub const LOGIN_PENDING: &str = "LOGIN_PENDING";
/// `type` tag of [`LoginAction::Success`].
pub const LOGIN_SUCCESS: &str = "LOGIN_SUCCESS";
/// `type` tag of [`LoginAction::Failure`].
pub const LOGIN_FAILURE: &str = "LOGIN_FAILURE";

/// Lifecycle notification of a login flow.
///
/// Serialized as `{ "type": "LOGIN_...", "payload": ... }`, the shape the web app's store
/// consumes. `Pending` has no payload.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", content = "payload")]
pub enum LoginAction {
    /// The request is in flight.
    #[serde(rename = "LOGIN_PENDING")]
    Pending,
    /// The server accepted the credentials.
    #[serde(rename = "LOGIN_SUCCESS")]
    Success(LoginSuccessResponse),
    /// The attempt failed, either rejected by the server or lost in transport.
    #[serde(rename = "LOGIN_FAILURE")]
    Failure(LoginFailureResponse),
}

impl LoginAction {
    /// The `type` tag of this action.
    pub fn action_type(&self) -> &'static str {
        match self {
            Self::Pending => LOGIN_PENDING,
            Self::Success(_) => LOGIN_SUCCESS,
            Self::Failure(_) => LOGIN_FAILURE,
        }
    }

    /// Whether this action ends a flow.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_serialize_pending_has_no_payload() {
        assert_eq!(
            serde_json::to_value(LoginAction::Pending).unwrap(),
            json!({ "type": "LOGIN_PENDING" })
        );
    }

    #[test]
    fn test_serialize_success() {
        let action = LoginAction::Success(LoginSuccessResponse {
            token: "abc".to_string(),
            username: "alice".to_string(),
        });

        assert_eq!(
            serde_json::to_value(action).unwrap(),
            json!({
                "type": "LOGIN_SUCCESS",
                "payload": { "token": "abc", "username": "alice" }
            })
        );
    }

    #[test]
    fn test_serialize_failure() {
        let action = LoginAction::Failure(LoginFailureResponse::new("bad credentials"));

        assert_eq!(
            serde_json::to_value(action).unwrap(),
            json!({
                "type": "LOGIN_FAILURE",
                "payload": { "detail": "bad credentials" }
            })
        );
    }

    #[test]
    fn test_deserialize_store_shapes() {
        let pending: LoginAction = serde_json::from_str(r#"{ "type": "LOGIN_PENDING" }"#).unwrap();
        assert_eq!(pending, LoginAction::Pending);

        let failure: LoginAction = serde_json::from_str(
            r#"{ "type": "LOGIN_FAILURE", "payload": { "detail": "nope" } }"#,
        )
        .unwrap();
        assert_eq!(
            failure,
            LoginAction::Failure(LoginFailureResponse::new("nope"))
        );
    }

    #[test]
    fn test_action_type_and_terminal() {
        assert_eq!(LoginAction::Pending.action_type(), LOGIN_PENDING);
        assert!(!LoginAction::Pending.is_terminal());

        let failure = LoginAction::Failure(LoginFailureResponse::unknown());
        assert_eq!(failure.action_type(), LOGIN_FAILURE);
        assert!(failure.is_terminal());
    }
}
