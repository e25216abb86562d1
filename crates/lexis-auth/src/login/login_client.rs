use lexis_core::Client;

/// Client for authenticating Lexis users.
///
/// # Example
///
/// ```rust,no_run
/// # use lexis_auth::{AuthClientExt, login::LoginStore};
/// # use lexis_core::{Client, ClientSettings};
/// # async fn example() {
/// let client = Client::new(Some(ClientSettings::with_base_url("https://lexis.example.com")));
/// let store = LoginStore::default();
///
/// client
///     .auth()
///     .login()
///     .login("alice".to_string(), "hunter2".to_string(), &store)
///     .await;
///
/// if let Some(user) = store.state().user {
///     println!("Logged in as {}", user.username);
/// }
/// # }
/// ```
#[derive(Clone)]
pub struct LoginClient {
    pub(crate) client: Client,
}

impl LoginClient {
    /// Creates a new `LoginClient` on top of the given core client.
    ///
    /// # Note
    ///
    /// This method is `pub(crate)` because `LoginClient` instances should be obtained through
    /// the AuthClient. Direct instantiation is internal to the crate.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }
}
