use std::fmt;

/// Username and password for a single login attempt.
///
/// Values are forwarded to the server untouched; no client side validation happens. The
/// `Debug` output never contains the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Username as typed by the user
    pub username: String,
    /// Plain text password
    pub password: String,
}

impl Credentials {
    #[allow(missing_docs)]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::new("alice", "hunter2");
        let debug = format!("{credentials:?}");

        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }
}
