/// Why a cookie could not be read from a response or kept in the jar.
#[derive(Debug, thiserror::Error)]
pub enum CookieError {
    /// A `Set-Cookie` header the server sent is not a valid cookie
    #[error("Malformed Set-Cookie header: {0}")]
    InvalidSetCookie(#[from] ::cookie::ParseError),

    /// The cookie breaks a prefix rule (e.g., a `__Host-` cookie without Secure)
    #[error("Cookie rejected by prefix rules: {0}")]
    SecurityViolation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_is_wrapped() {
        let err: CookieError = ::cookie::Cookie::parse("no-pair").unwrap_err().into();

        assert!(matches!(err, CookieError::InvalidSetCookie(_)));
        assert!(err.to_string().starts_with("Malformed Set-Cookie header: "));
    }

    #[test]
    fn test_security_violation_display() {
        let err = CookieError::SecurityViolation("__Host- cookies need Secure".to_string());
        assert_eq!(
            err.to_string(),
            "Cookie rejected by prefix rules: __Host- cookies need Secure"
        );
    }
}
