//! Connection settings: where the server lives and how to authenticate.

use std::fmt;

use crate::Error;

/// How requests authenticate against TeamCity.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Credentials {
    /// Anonymous access through the `/guestAuth` prefix.
    #[default]
    Guest,
    /// HTTP basic authentication through the `/httpAuth` prefix.
    Basic { username: String, password: String },
    /// Access token sent as a bearer header, no path prefix.
    Token(String),
}

impl Credentials {
    /// Path prefix the server expects in front of `/app/rest` for this mode.
    pub fn path_prefix(&self) -> &'static str {
        match self {
            Credentials::Guest => "/guestAuth",
            Credentials::Basic { .. } => "/httpAuth",
            Credentials::Token(_) => "",
        }
    }
}

// Secrets never reach logs or panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Guest => f.write_str("Guest"),
            Credentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            Credentials::Token(_) => f.debug_tuple("Token").field(&"***").finish(),
        }
    }
}

/// Resolved connection details for a TeamCity server.
#[derive(Clone, Default)]
pub struct ConnectionConfig {
    /// Host name, optionally with port (e.g. `teamcity.local:8111`). A value
    /// that already carries a scheme is used as-is.
    pub host: Option<String>,
    pub use_ssl: bool,
    pub credentials: Credentials,
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("use_ssl", &self.use_ssl)
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl ConnectionConfig {
    pub fn to_host(mut self, host: &str) -> Self {
        self.host = Some(host.to_string());
        self
    }

    pub fn use_ssl(mut self) -> Self {
        self.use_ssl = true;
        self
    }

    pub fn as_guest(mut self) -> Self {
        self.credentials = Credentials::Guest;
        self
    }

    pub fn as_user(mut self, username: &str, password: &str) -> Self {
        self.credentials = Credentials::Basic {
            username: username.to_string(),
            password: password.to_string(),
        };
        self
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.credentials = Credentials::Token(token.to_string());
        self
    }

    /// Reads `TEAMCITY_HOST`, `TEAMCITY_USE_SSL`, `TEAMCITY_TOKEN`,
    /// `TEAMCITY_USERNAME` and `TEAMCITY_PASSWORD`.
    ///
    /// A token takes precedence over a username/password pair; with neither
    /// the connection is anonymous.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = ConnectionConfig {
            host: non_empty("TEAMCITY_HOST"),
            use_ssl: non_empty("TEAMCITY_USE_SSL")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            credentials: Credentials::Guest,
        };

        if let Some(token) = non_empty("TEAMCITY_TOKEN") {
            config.credentials = Credentials::Token(token);
        } else if let (Some(username), Some(password)) =
            (non_empty("TEAMCITY_USERNAME"), non_empty("TEAMCITY_PASSWORD"))
        {
            config.credentials = Credentials::Basic { username, password };
        }
        config
    }

    /// Scheme and host without a trailing slash, e.g. `https://tc.example.com`.
    pub fn base_url(&self) -> Result<String, Error> {
        let host = self
            .host
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .ok_or(Error::MissingHost)?;
        let host = host.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            return Ok(host.to_string());
        }
        let scheme = if self.use_ssl { "https" } else { "http" };
        Ok(format!("{}://{}", scheme, host))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn base_url_uses_scheme_from_ssl_flag() {
        let plain = ConnectionConfig::default().to_host("tc.local:8111");
        assert_eq!(plain.base_url().unwrap(), "http://tc.local:8111");

        let secure = ConnectionConfig::default().to_host("tc.local/").use_ssl();
        assert_eq!(secure.base_url().unwrap(), "https://tc.local");
    }

    #[test]
    fn base_url_keeps_explicit_scheme() {
        let config = ConnectionConfig::default().to_host("http://127.0.0.1:9000/");
        assert_eq!(config.base_url().unwrap(), "http://127.0.0.1:9000");
    }

    #[test]
    fn missing_host_is_an_error() {
        assert!(matches!(
            ConnectionConfig::default().base_url(),
            Err(Error::MissingHost)
        ));
        assert!(matches!(
            ConnectionConfig::default().to_host("  ").base_url(),
            Err(Error::MissingHost)
        ));
    }

    #[test]
    fn builder_credentials_replace_each_other() {
        let config = ConnectionConfig::default()
            .as_user("admin", "secret")
            .with_token("abc");
        assert_eq!(config.credentials, Credentials::Token("abc".to_string()));
        assert_eq!(config.credentials.path_prefix(), "");
        assert_eq!(
            ConnectionConfig::default().as_guest().credentials.path_prefix(),
            "/guestAuth"
        );
    }

    #[test]
    fn env_token_beats_user_and_password() {
        let config = ConnectionConfig::from_lookup(lookup(&[
            ("TEAMCITY_HOST", "tc.local"),
            ("TEAMCITY_TOKEN", "tok"),
            ("TEAMCITY_USERNAME", "admin"),
            ("TEAMCITY_PASSWORD", "secret"),
        ]));
        assert_eq!(config.host.as_deref(), Some("tc.local"));
        assert_eq!(config.credentials, Credentials::Token("tok".to_string()));
    }

    #[test]
    fn env_user_and_password() {
        let config = ConnectionConfig::from_lookup(lookup(&[
            ("TEAMCITY_HOST", "tc.local"),
            ("TEAMCITY_USE_SSL", "true"),
            ("TEAMCITY_USERNAME", "admin"),
            ("TEAMCITY_PASSWORD", "secret"),
        ]));
        assert!(config.use_ssl);
        assert_eq!(config.credentials.path_prefix(), "/httpAuth");
    }

    #[test]
    fn env_without_credentials_is_guest() {
        let config = ConnectionConfig::from_lookup(lookup(&[
            ("TEAMCITY_HOST", "tc.local"),
            ("TEAMCITY_USERNAME", "admin"),
        ]));
        assert_eq!(config.credentials, Credentials::Guest);
        assert!(!config.use_ssl);
    }

    #[test]
    fn debug_output_hides_secrets() {
        let basic = ConnectionConfig::default()
            .to_host("tc.local")
            .as_user("admin", "hunter2");
        let rendered = format!("{:?}", basic);
        assert!(rendered.contains("admin"));
        assert!(rendered.contains("tc.local"));
        assert!(!rendered.contains("hunter2"));

        let token = ConnectionConfig::default().with_token("tok-abc123");
        assert_eq!(
            format!("{:?}", token.credentials),
            r#"Token("***")"#
        );
        assert!(!format!("{:#?}", token).contains("tok-abc123"));
    }
}
