//! Cookie handling for credential-bearing requests.
//!
//! Requests built with [`RequestBuilderExt::with_credentials`] carry the cookies held in the
//! client's [`CookieStore`], and any `Set-Cookie` headers in their responses are written back
//! to it.

/// Cookie data model and security validation.
pub mod cookie;
/// Cookie error types.
pub mod cookie_error;
mod cookie_middleware;
mod cookie_store;
mod in_memory_cookie_store;

pub use cookie::{Cookie, SameSite};
pub use cookie_error::CookieError;
pub use cookie_middleware::{CookieMiddleware, IncludeCredentials, RequestBuilderExt};
pub use cookie_store::CookieStore;
pub use in_memory_cookie_store::InMemoryCookieStore;
