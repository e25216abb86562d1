use serde::{Deserialize, Serialize};

/// Basic client behavior settings. These settings specify the target server and behavior of the
/// Lexis Client. They are optional and uneditable once the client is initialized.
///
/// Defaults to
///
/// ```
/// # use lexis_core::ClientSettings;
/// let settings = ClientSettings {
///     base_url: "http://localhost:8000".to_string(),
///     user_agent: "Lexis Rust-SDK".to_string(),
///     https_only: false,
/// };
/// let default = ClientSettings::default();
/// assert_eq!(settings, default);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// The base url of the targeted Lexis server. API paths such as `/api/login` are resolved
    /// against it. Defaults to `http://localhost:8000`
    pub base_url: String,
    /// The user_agent to send to the server. Defaults to `Lexis Rust-SDK`
    pub user_agent: String,
    /// Refuse to send requests over plain `http://`. Defaults to `false`, since the default
    /// server is the local development server
    pub https_only: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".into(),
            user_agent: "Lexis Rust-SDK".into(),
            https_only: false,
        }
    }
}

impl ClientSettings {
    /// Creates settings pointing at `base_url`, keeping the remaining defaults.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial_settings_uses_defaults() {
        let settings: ClientSettings =
            serde_json::from_str(r#"{ "baseUrl": "https://lexis.example.com" }"#).unwrap();

        assert_eq!(settings.base_url, "https://lexis.example.com");
        assert_eq!(settings.user_agent, "Lexis Rust-SDK");
        assert!(!settings.https_only);
    }

    #[test]
    fn test_deserialize_https_only() {
        let settings: ClientSettings = serde_json::from_str(
            r#"{ "baseUrl": "https://lexis.example.com", "httpsOnly": true }"#,
        )
        .unwrap();

        assert!(settings.https_only);
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result = serde_json::from_str::<ClientSettings>(r#"{ "apiUrl": "https://x" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_with_base_url() {
        let settings = ClientSettings::with_base_url("http://127.0.0.1:9000");
        assert_eq!(settings.base_url, "http://127.0.0.1:9000");
        assert_eq!(settings.user_agent, ClientSettings::default().user_agent);
    }
}
