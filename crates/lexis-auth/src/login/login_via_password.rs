use lexis_core::{ApiError, http::RequestBuilderExt};
use lexis_state::Dispatch;
use reqwest::StatusCode;
use thiserror::Error;

use crate::login::{
    Credentials, LoginAction, LoginClient, LoginFailureResponse, LoginSuccessResponse,
    api::{LOGIN_PATH, LoginApiRequest},
};

/// Why a login attempt did not succeed.
///
/// Only used to pick the failure payload; callers observe [`LoginAction::Failure`] instead.
#[derive(Debug, Error)]
pub(crate) enum LoginError {
    /// The server could not be reached, or answered with a body we cannot use.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The server answered with a JSON error body.
    #[error("Login rejected by server: [{status}] {}", .body.message())]
    Rejected {
        status: StatusCode,
        body: LoginFailureResponse,
    },
}

impl LoginError {
    fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api(error) => error.status(),
            Self::Rejected { status, .. } => Some(*status),
        }
    }
}

impl From<LoginError> for LoginFailureResponse {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::Rejected { body, .. } => body,
            LoginError::Api(_) => LoginFailureResponse::unknown(),
        }
    }
}

impl LoginClient {
    /// Attempts to log in with `username` and `password`, reporting progress to `dispatch`.
    ///
    /// `dispatch` receives [`LoginAction::Pending`] immediately, then exactly one of
    /// [`LoginAction::Success`] or [`LoginAction::Failure`] once the server answered or the
    /// transport gave up. Nothing is retried and no error is returned: every outcome is
    /// reported through `dispatch`.
    pub async fn login<D>(&self, username: String, password: String, dispatch: &D)
    where
        D: Dispatch<LoginAction> + ?Sized,
    {
        self.login_with(Credentials { username, password }, dispatch)
            .await
    }

    /// Same as [`LoginClient::login`], taking the credentials as a single value.
    pub async fn login_with<D>(&self, credentials: Credentials, dispatch: &D)
    where
        D: Dispatch<LoginAction> + ?Sized,
    {
        tracing::debug!(username = %credentials.username, "Starting login");
        dispatch.dispatch(LoginAction::Pending);

        let action = match self.send_login_request(&credentials).await {
            Ok(success) => {
                tracing::info!(username = %success.username, "Login succeeded");
                LoginAction::Success(success)
            }
            Err(error) => {
                tracing::warn!(
                    username = %credentials.username,
                    status = ?error.status(),
                    %error,
                    "Login failed"
                );
                LoginAction::Failure(error.into())
            }
        };

        dispatch.dispatch(action);
    }

    async fn send_login_request(
        &self,
        credentials: &Credentials,
    ) -> Result<LoginSuccessResponse, LoginError> {
        let internal = &self.client.internal;

        let response = internal
            .http_client()
            .post(internal.url(LOGIN_PATH))
            .json(&LoginApiRequest::from(credentials))
            .with_credentials()
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        let body = response.bytes().await.map_err(ApiError::from)?;

        if status.is_success() {
            let success: LoginSuccessResponse =
                serde_json::from_slice(&body).map_err(ApiError::from)?;
            return Ok(success);
        }

        match serde_json::from_slice::<LoginFailureResponse>(&body) {
            Ok(body) => Err(LoginError::Rejected { status, body }),
            Err(_) => Err(ApiError::ResponseContent {
                status,
                message: String::from_utf8_lossy(&body).into_owned(),
            }
            .into()),
        }
    }
}
