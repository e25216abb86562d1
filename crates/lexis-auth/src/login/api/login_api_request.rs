use serde::Serialize;

use crate::login::Credentials;

/// JSON body of `POST /api/login`.
#[derive(Serialize)]
pub(crate) struct LoginApiRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a Credentials> for LoginApiRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            username: &credentials.username,
            password: &credentials.password,
        }
    }
}
