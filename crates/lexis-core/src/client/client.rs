use std::sync::Arc;

use reqwest::header::{self, HeaderMap, HeaderValue};

use super::internal::InternalClient;
use crate::{
    client::ClientSettings,
    http::{CookieMiddleware, CookieStore, InMemoryCookieStore},
};

/// The main struct to interact with the Lexis SDK.
#[derive(Debug, Clone)]
pub struct Client {
    // Important: The [`Client`] struct requires its `Clone` implementation to return an owned
    // reference to the same instance, so that every clone shares the same cookie jar. Any
    // mutable state needs to live behind the `Arc`.
    #[doc(hidden)]
    pub internal: Arc<InternalClient>,
}

impl Client {
    /// Create a new Lexis client with an in-memory cookie jar.
    pub fn new(settings: Option<ClientSettings>) -> Self {
        Self::new_with_cookie_store(settings, Arc::new(InMemoryCookieStore::new()))
    }

    /// Create a new Lexis client whose credential-bearing requests read and write the provided
    /// cookie store.
    pub fn new_with_cookie_store(
        settings: Option<ClientSettings>,
        cookie_store: Arc<dyn CookieStore>,
    ) -> Self {
        let settings = settings.unwrap_or_default();

        let headers = build_default_headers(&settings);

        let http_client = new_http_client_builder(&settings)
            .default_headers(headers)
            .build()
            .expect("HTTP Client build should not fail");

        let http_client = reqwest_middleware::ClientBuilder::new(http_client)
            .with(CookieMiddleware::new(Arc::clone(&cookie_store)))
            .build();

        Self {
            internal: Arc::new(InternalClient {
                settings,
                http_client,
                cookie_store,
            }),
        }
    }
}

fn new_http_client_builder(settings: &ClientSettings) -> reqwest::ClientBuilder {
    if !settings.https_only && settings.base_url.starts_with("http://") {
        tracing::debug!(base_url = %settings.base_url, "Sending requests over plain HTTP");
    }

    reqwest::Client::builder().https_only(settings.https_only)
}

fn build_default_headers(settings: &ClientSettings) -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.append(header::ACCEPT, HeaderValue::from_static("application/json"));

    match HeaderValue::from_str(&settings.user_agent) {
        Ok(user_agent) => {
            headers.append(header::USER_AGENT, user_agent);
        }
        Err(_) => {
            tracing::warn!(
                user_agent = %settings.user_agent,
                "User agent is not a valid header value, sending requests without it"
            );
        }
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Cookie;

    #[test]
    fn test_default_headers() {
        let headers = build_default_headers(&ClientSettings::default());

        assert_eq!(headers[header::ACCEPT], "application/json");
        assert_eq!(headers[header::USER_AGENT], "Lexis Rust-SDK");
    }

    #[test]
    fn test_invalid_user_agent_is_skipped() {
        let settings = ClientSettings {
            user_agent: "bad\nagent".to_string(),
            ..Default::default()
        };
        let headers = build_default_headers(&settings);

        assert!(headers.get(header::USER_AGENT).is_none());
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = Client::new(Some(ClientSettings::with_base_url("http://localhost:8000/")));

        assert_eq!(
            client.internal.url("/api/login"),
            "http://localhost:8000/api/login"
        );
    }

    #[tokio::test]
    async fn test_plain_http_base_url_is_reachable() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::path("/api/ping"))
            .respond_with(wiremock::ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = Client::new(Some(ClientSettings::with_base_url(server.uri())));
        let response = client
            .internal
            .http_client()
            .get(client.internal.url("/api/ping"))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_https_only_refuses_plain_http() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::path("/api/ping"))
            .respond_with(wiremock::ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let client = Client::new(Some(ClientSettings {
            https_only: true,
            ..ClientSettings::with_base_url(server.uri())
        }));
        let result = client
            .internal
            .http_client()
            .get(client.internal.url("/api/ping"))
            .send()
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_clones_share_cookie_store() {
        let client = Client::new(None);
        let clone = client.clone();

        client
            .internal
            .cookie_store()
            .set_cookie(Cookie::new("sessionid", "abc"))
            .await
            .unwrap();

        let names = clone.internal.cookie_store().list_cookies().await.unwrap();
        assert_eq!(names, vec!["sessionid".to_string()]);
    }
}
