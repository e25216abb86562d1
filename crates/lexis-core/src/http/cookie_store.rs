use super::{Cookie, CookieError};

/// Where a [`Client`](crate::Client) keeps the session cookies of its server.
///
/// The cookie middleware only talks to this trait, so a jar can live in memory or be
/// persisted elsewhere. Expired cookies must never be returned.
#[async_trait::async_trait]
pub trait CookieStore: Send + Sync {
    /// Looks up a live cookie by name.
    async fn get_cookie(&self, name: &str) -> Result<Option<Cookie>, CookieError>;

    /// Inserts or replaces the cookie with the same name.
    ///
    /// Cookies breaking prefix rules are refused with [`CookieError::SecurityViolation`].
    async fn set_cookie(&self, cookie: Cookie) -> Result<(), CookieError>;

    /// Drops the cookie with this name. Removing an absent cookie is not an error.
    async fn remove_cookie(&self, name: &str) -> Result<(), CookieError>;

    /// Empties the jar.
    async fn clear(&self) -> Result<(), CookieError>;

    /// Names of all live cookies, sorted.
    async fn list_cookies(&self) -> Result<Vec<String>, CookieError>;

    /// All live cookies, ordered by name.
    async fn cookies(&self) -> Result<Vec<Cookie>, CookieError>;
}
