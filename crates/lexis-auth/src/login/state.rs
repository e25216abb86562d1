use lexis_state::{Reducer, Store};
use serde::{Deserialize, Serialize};

use crate::login::{LoginAction, LoginFailureResponse, LoginSuccessResponse};

/// Session state derived from login actions.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginState {
    /// A login request is in flight
    pub pending: bool,
    /// The authenticated user, set by the last successful login
    pub user: Option<LoginSuccessResponse>,
    /// The reason the last login failed
    pub error: Option<LoginFailureResponse>,
}

impl LoginState {
    /// Applies a single action.
    ///
    /// A pending login keeps the current user until the attempt completes; a failed login
    /// logs the user out.
    pub fn reduce(&self, action: &LoginAction) -> Self {
        match action {
            LoginAction::Pending => Self {
                pending: true,
                user: self.user.clone(),
                error: None,
            },
            LoginAction::Success(user) => Self {
                pending: false,
                user: Some(user.clone()),
                error: None,
            },
            LoginAction::Failure(error) => Self {
                pending: false,
                user: None,
                error: Some(error.clone()),
            },
        }
    }

    /// Whether a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Token of the logged in user.
    pub fn token(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.token.as_str())
    }
}

/// [`Reducer`] for [`LoginState`].
pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginState;
    type Action = LoginAction;

    fn reduce(state: &LoginState, action: &LoginAction) -> LoginState {
        state.reduce(action)
    }
}

/// Store holding the login slice of the app state.
pub type LoginStore = Store<LoginReducer>;

#[cfg(test)]
mod tests {
    use lexis_state::Dispatch;

    use super::*;

    fn alice() -> LoginSuccessResponse {
        LoginSuccessResponse {
            token: "abc".to_string(),
            username: "alice".to_string(),
        }
    }

    #[test]
    fn test_default_is_logged_out() {
        let state = LoginState::default();
        assert!(!state.pending);
        assert!(!state.is_authenticated());
        assert_eq!(state.token(), None);
    }

    #[test]
    fn test_pending_then_success() {
        let state = LoginState::default().reduce(&LoginAction::Pending);
        assert!(state.pending);

        let state = state.reduce(&LoginAction::Success(alice()));
        assert!(!state.pending);
        assert!(state.is_authenticated());
        assert_eq!(state.token(), Some("abc"));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_pending_clears_previous_error_and_keeps_user() {
        let state = LoginState {
            pending: false,
            user: Some(alice()),
            error: Some(LoginFailureResponse::new("stale")),
        };

        let state = state.reduce(&LoginAction::Pending);

        assert!(state.pending);
        assert_eq!(state.user, Some(alice()));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_failure_logs_out() {
        let state = LoginState {
            pending: true,
            user: Some(alice()),
            error: None,
        };

        let state = state.reduce(&LoginAction::Failure(LoginFailureResponse::new("bad")));

        assert!(!state.pending);
        assert!(!state.is_authenticated());
        assert_eq!(state.error, Some(LoginFailureResponse::new("bad")));
    }

    #[test]
    fn test_store_dispatch() {
        let store = LoginStore::default();

        store.dispatch(LoginAction::Pending);
        assert!(store.state().pending);

        store.dispatch(LoginAction::Success(alice()));
        assert_eq!(store.state().token(), Some("abc"));
    }

    #[test]
    fn test_serialize_state() {
        let state = LoginState::default().reduce(&LoginAction::Pending);
        assert_eq!(
            serde_json::to_value(state).unwrap(),
            serde_json::json!({ "pending": true, "user": null, "error": null })
        );
    }
}
