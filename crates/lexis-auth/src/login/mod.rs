//! Login client module
//! The LoginClient is used to authenticate a Lexis user with a username and password.
//! Progress is reported through a [`Dispatch`] observer rather than returned, mirroring how the
//! web app feeds its state store.
mod login_client;

pub use login_client::LoginClient;

/// Models used by the login module
pub mod models;
pub use models::{
    Credentials, LOGIN_FAILURE, LOGIN_PENDING, LOGIN_SUCCESS, LoginAction, LoginFailureResponse,
    LoginSuccessResponse,
};

mod login_via_password;

/// Reducer slice turning login actions into session state
pub mod state;
pub use state::{LoginReducer, LoginState, LoginStore};

pub use lexis_state::Dispatch;

// API models should be private to the login module as they are only used internally.
pub(crate) mod api;
