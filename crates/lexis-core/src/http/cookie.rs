use std::time::{Duration, SystemTime};

use ::cookie::{Cookie as SetCookie, SameSite as SetCookieSameSite};

use super::CookieError;

/// Represents an HTTP cookie with security attributes.
///
/// Security attributes include HttpOnly (prevents JavaScript access), Secure (HTTPS-only) and
/// SameSite (CSRF protection).
#[derive(Clone, Debug, PartialEq)]
pub struct Cookie {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
    /// Cookie domain
    pub domain: Option<String>,
    /// Cookie path
    pub path: Option<String>,
    /// Cookie expiration timestamp
    pub expires: Option<SystemTime>,
    /// Secure attribute (HTTPS-only)
    pub secure: bool,
    /// HttpOnly attribute (prevents JavaScript access)
    pub http_only: bool,
    /// SameSite attribute (CSRF protection)
    pub same_site: SameSite,
}

/// SameSite cookie attribute for cross-site request policy.
#[derive(Clone, Debug, PartialEq)]
pub enum SameSite {
    /// Cookie only sent to same-site requests
    Strict,
    /// Cookie sent to same-site and top-level navigation
    Lax,
    /// Cookie sent to all requests (requires Secure=true in most browsers)
    None,
}

impl Cookie {
    /// Creates a new cookie with secure defaults.
    ///
    /// Defaults: path="/", same_site=Lax, secure=false, http_only=false, no expiration.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: None,
            path: Some("/".to_string()),
            expires: None,
            secure: false,
            http_only: false,
            same_site: SameSite::Lax,
        }
    }

    /// Parses the value of a `Set-Cookie` response header.
    ///
    /// `Max-Age` takes precedence over `Expires`, and a non-positive `Max-Age` yields an
    /// already expired cookie.
    pub fn parse_set_cookie(header: &str) -> Result<Self, CookieError> {
        let parsed = SetCookie::parse(header)?;

        let mut cookie = Cookie::new(parsed.name(), parsed.value_trimmed());
        cookie.domain = parsed.domain().map(str::to_string);
        if let Some(path) = parsed.path().filter(|path| path.starts_with('/')) {
            cookie.path = Some(path.to_string());
        }
        cookie.secure = parsed.secure().unwrap_or(false);
        cookie.http_only = parsed.http_only().unwrap_or(false);
        cookie.same_site = match parsed.same_site() {
            Some(SetCookieSameSite::Strict) => SameSite::Strict,
            Some(SetCookieSameSite::None) => SameSite::None,
            _ => SameSite::Lax,
        };

        cookie.expires = match parsed.max_age() {
            Some(max_age) => Some(match u64::try_from(max_age.whole_seconds()) {
                Ok(secs) if secs > 0 => SystemTime::now() + Duration::from_secs(secs),
                _ => SystemTime::UNIX_EPOCH,
            }),
            None => parsed.expires_datetime().map(SystemTime::from),
        };

        Ok(cookie)
    }

    /// Returns true if the cookie has expired (past its expiration timestamp).
    pub fn is_expired(&self) -> bool {
        self.expires.is_some_and(|exp| SystemTime::now() > exp)
    }

    /// Validates cookie security attributes.
    ///
    /// Logs warnings for missing recommended attributes (HttpOnly, Secure, strict SameSite).
    /// Returns SecurityViolation error for policy violations (e.g., __Host- prefix violations).
    pub fn validate_security_attributes(&self) -> Result<(), CookieError> {
        if !self.http_only {
            tracing::warn!(
                cookie_name = %self.name,
                "Cookie missing HttpOnly attribute - vulnerable to JavaScript access"
            );
        }

        if !self.secure {
            tracing::warn!(
                cookie_name = %self.name,
                "Cookie missing Secure attribute - vulnerable to non-HTTPS transmission"
            );
        }

        if matches!(self.same_site, SameSite::None) {
            tracing::warn!(
                cookie_name = %self.name,
                "Cookie using SameSite=None - vulnerable to cross-site requests"
            );
        }

        // Enforce __Host- prefix requirements (RFC 6265bis)
        if self.name.starts_with("__Host-") {
            if self.path.as_deref() != Some("/") {
                return Err(CookieError::SecurityViolation(format!(
                    "Cookie with __Host- prefix must have path=/ (got {:?})",
                    self.path
                )));
            }
            if self.domain.is_some() {
                return Err(CookieError::SecurityViolation(
                    "__Host- prefix cookies cannot specify domain attribute".to_string(),
                ));
            }
            if !self.secure {
                return Err(CookieError::SecurityViolation(
                    "__Host- prefix cookies must have Secure=true".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Formats cookie as "name=value" for HTTP Cookie header injection.
    pub fn to_cookie_header(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}
