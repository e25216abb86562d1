mod login_api_request;
pub(crate) use login_api_request::LoginApiRequest;

/// Path of the login endpoint, relative to the server base url.
pub(crate) const LOGIN_PATH: &str = "/api/login";
