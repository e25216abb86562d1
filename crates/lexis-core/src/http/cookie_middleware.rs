use std::sync::Arc;

use async_trait::async_trait;
use http::Extensions;
use reqwest::{Request, Response, header};
use reqwest_middleware::{Middleware, Next, Result};

use super::{Cookie, CookieStore};

/// Request extension marking a request as credential-bearing.
///
/// Only requests carrying this marker get cookies injected and have their `Set-Cookie`
/// responses persisted. Set it with [`RequestBuilderExt::with_credentials`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IncludeCredentials;

/// Extension methods for [`reqwest_middleware::RequestBuilder`].
pub trait RequestBuilderExt {
    /// Sends the stored session cookies with this request and stores the cookies the server
    /// sets in its response.
    fn with_credentials(self) -> Self;
}

impl RequestBuilderExt for reqwest_middleware::RequestBuilder {
    fn with_credentials(self) -> Self {
        self.with_extension(IncludeCredentials)
    }
}

/// Middleware that attaches cookies from a [`CookieStore`] to credential-bearing requests and
/// stores the cookies returned in their responses.
pub struct CookieMiddleware {
    store: Arc<dyn CookieStore>,
}

impl CookieMiddleware {
    /// Creates a new cookie middleware backed by the given store
    pub fn new(store: Arc<dyn CookieStore>) -> Self {
        Self { store }
    }

    async fn inject_cookies(&self, req: &mut Request) {
        let host = req.url().host_str().unwrap_or_default().to_string();

        let cookies = match self.store.cookies().await {
            Ok(cookies) => cookies,
            Err(error) => {
                tracing::warn!(
                    %error,
                    "Failed to read cookie store, sending request without cookies"
                );
                return;
            }
        };

        let header_value = cookies
            .iter()
            .filter(|cookie| domain_matches(cookie, &host))
            .map(Cookie::to_cookie_header)
            .collect::<Vec<_>>()
            .join("; ");

        if header_value.is_empty() {
            return;
        }

        match header::HeaderValue::from_str(&header_value) {
            Ok(value) => {
                req.headers_mut().insert(header::COOKIE, value);
            }
            Err(_) => {
                tracing::warn!("Stored cookies do not form a valid Cookie header, skipping");
            }
        }
    }

    async fn store_cookies(&self, response: &Response) {
        for value in response.headers().get_all(header::SET_COOKIE) {
            let Ok(value) = value.to_str() else {
                tracing::warn!("Ignoring non-ASCII Set-Cookie header");
                continue;
            };

            let cookie = match Cookie::parse_set_cookie(value) {
                Ok(cookie) => cookie,
                Err(error) => {
                    tracing::warn!(%error, "Ignoring invalid Set-Cookie header");
                    continue;
                }
            };

            let result = if cookie.is_expired() {
                self.store.remove_cookie(&cookie.name).await
            } else {
                self.store.set_cookie(cookie).await
            };

            if let Err(error) = result {
                tracing::warn!(%error, "Failed to store cookie from response");
            }
        }
    }
}

#[async_trait]
impl Middleware for CookieMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        if extensions.get::<IncludeCredentials>().is_none() {
            return next.run(req, extensions).await;
        }

        self.inject_cookies(&mut req).await;

        let response = next.run(req, extensions).await?;

        self.store_cookies(&response).await;

        Ok(response)
    }
}

fn domain_matches(cookie: &Cookie, host: &str) -> bool {
    match &cookie.domain {
        None => true,
        Some(domain) => {
            host.eq_ignore_ascii_case(domain)
                || host
                    .to_ascii_lowercase()
                    .ends_with(&format!(".{}", domain.to_ascii_lowercase()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_matches_host_only_cookie() {
        let cookie = Cookie::new("sessionid", "abc");
        assert!(domain_matches(&cookie, "127.0.0.1"));
    }

    #[test]
    fn test_domain_matches_subdomain() {
        let mut cookie = Cookie::new("sessionid", "abc");
        cookie.domain = Some("lexis.app".to_string());

        assert!(domain_matches(&cookie, "lexis.app"));
        assert!(domain_matches(&cookie, "api.lexis.app"));
        assert!(!domain_matches(&cookie, "notlexis.app"));
        assert!(!domain_matches(&cookie, "example.com"));
    }
}
