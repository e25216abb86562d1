use lexis_core::Client;

use crate::login::LoginClient;

/// Subclient containing auth functionality.
#[derive(Clone)]
pub struct AuthClient {
    pub(crate) client: Client,
}

impl AuthClient {
    /// Constructs a new `AuthClient` with the given `Client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl AuthClient {
    /// Client for the login flow. It shares the cookie jar of the underlying `Client`, so a
    /// session established by a login is visible to every other subclient.
    pub fn login(&self) -> LoginClient {
        LoginClient::new(self.client.clone())
    }
}

/// Extension trait for `Client` to provide access to the `AuthClient`.
pub trait AuthClientExt {
    /// Creates a new `AuthClient` instance.
    fn auth(&self) -> AuthClient;
}

impl AuthClientExt for Client {
    fn auth(&self) -> AuthClient {
        AuthClient::new(self.clone())
    }
}
