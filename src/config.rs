use serde::{Deserialize, Serialize};

use crate::level::LogLevel;

/// Per-instance filter configuration.
///
/// Created once when a filter is constructed and never mutated afterward;
/// concurrent request invocations share it read-only. Field names
/// (de)serialize in the PascalCase form the host's configuration file uses
/// (`UsernameQueryParam`, `CookieName`, …), and every field has a default so
/// an empty config section yields a working filter.
///
/// A malformed `LogLevel` value is a hard deserialization error: the filter
/// does not start with a configuration it cannot interpret.
///
/// # Examples
///
/// ```
/// use auth_relay::{Config, LogLevel};
///
/// let config = Config::default();
/// assert_eq!(config.username_query_param, "username");
/// assert_eq!(config.cookie_name, "traefik-authhack");
/// assert_eq!(config.log_level, LogLevel::Warning);
///
/// let config: Config = serde_json::from_str(
///     r#"{"AuthorizationQueryParam": "auth", "LogLevel": "Debug"}"#,
/// ).unwrap();
/// assert_eq!(config.authorization_query_param, "auth");
/// assert_eq!(config.log_level, LogLevel::Debug);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Config {
    /// Verbosity threshold for this instance's log output.
    pub log_level: LogLevel,

    /// Query parameter carrying a plaintext username.
    pub username_query_param: String,
    /// Query parameter carrying a plaintext password; only consumed together
    /// with the username parameter.
    pub password_query_param: String,
    /// Query parameter carrying an already-encoded credential, with or
    /// without the `Basic ` prefix.
    pub authorization_query_param: String,

    /// Name of the credential cookie.
    pub cookie_name: String,
    /// `Domain` attribute for the credential cookie; empty means host-only.
    pub cookie_domain: String,
    /// `Path` attribute for the credential cookie; empty falls back to `/`.
    pub cookie_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warning,
            username_query_param: "username".to_string(),
            password_query_param: "password".to_string(),
            authorization_query_param: "authorization".to_string(),
            cookie_name: "traefik-authhack".to_string(),
            cookie_domain: String::new(),
            cookie_path: "/".to_string(),
        }
    }
}
