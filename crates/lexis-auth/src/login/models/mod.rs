mod credentials;
mod login_action;
mod login_failure_response;
mod login_success_response;

pub use credentials::Credentials;
pub use login_action::{LOGIN_FAILURE, LOGIN_PENDING, LOGIN_SUCCESS, LoginAction};
pub use login_failure_response::{LoginFailureResponse, UNKNOWN_ERROR_DETAIL};
pub use login_success_response::LoginSuccessResponse;
