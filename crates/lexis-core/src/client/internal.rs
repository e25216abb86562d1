use std::sync::Arc;

use reqwest_middleware::ClientWithMiddleware;

use crate::{client::ClientSettings, http::CookieStore};

/// Shared state behind every clone of a [`Client`](crate::Client).
pub struct InternalClient {
    pub(crate) settings: ClientSettings,
    pub(crate) http_client: ClientWithMiddleware,
    pub(crate) cookie_store: Arc<dyn CookieStore>,
}

impl std::fmt::Debug for InternalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InternalClient")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl InternalClient {
    /// Settings the client was created with.
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// HTTP client with the cookie middleware installed.
    pub fn http_client(&self) -> &ClientWithMiddleware {
        &self.http_client
    }

    /// Cookie jar backing credential-bearing requests.
    pub fn cookie_store(&self) -> Arc<dyn CookieStore> {
        Arc::clone(&self.cookie_store)
    }

    /// Resolves an absolute API path (e.g. `/api/login`) against the configured base url.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.settings.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
