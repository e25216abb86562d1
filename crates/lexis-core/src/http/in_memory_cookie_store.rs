use std::collections::BTreeMap;

use tokio::sync::RwLock;

use super::{Cookie, CookieError, CookieStore};

/// Cookie jar kept in process memory, keyed by cookie name.
///
/// A fresh process starts logged out. Expired entries stay in the map until they are
/// overwritten or removed, but are never returned.
#[derive(Default)]
pub struct InMemoryCookieStore {
    jar: RwLock<BTreeMap<String, Cookie>>,
}

impl InMemoryCookieStore {
    /// Creates an empty jar.
    pub fn new() -> Self {
        Self::default()
    }
}

fn live(jar: &BTreeMap<String, Cookie>) -> impl Iterator<Item = &Cookie> {
    jar.values().filter(|cookie| !cookie.is_expired())
}

#[async_trait::async_trait]
impl CookieStore for InMemoryCookieStore {
    async fn get_cookie(&self, name: &str) -> Result<Option<Cookie>, CookieError> {
        let jar = self.jar.read().await;
        Ok(jar.get(name).filter(|cookie| !cookie.is_expired()).cloned())
    }

    async fn set_cookie(&self, cookie: Cookie) -> Result<(), CookieError> {
        cookie.validate_security_attributes()?;
        self.jar.write().await.insert(cookie.name.clone(), cookie);
        Ok(())
    }

    async fn remove_cookie(&self, name: &str) -> Result<(), CookieError> {
        self.jar.write().await.remove(name);
        Ok(())
    }

    async fn clear(&self) -> Result<(), CookieError> {
        self.jar.write().await.clear();
        Ok(())
    }

    async fn list_cookies(&self) -> Result<Vec<String>, CookieError> {
        let jar = self.jar.read().await;
        Ok(live(&jar).map(|cookie| cookie.name.clone()).collect())
    }

    async fn cookies(&self) -> Result<Vec<Cookie>, CookieError> {
        let jar = self.jar.read().await;
        Ok(live(&jar).cloned().collect())
    }
}
