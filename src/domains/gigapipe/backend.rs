//! Backend connection settings and transport selection.
//!
//! All three query APIs (metrics, logs, traces) live behind one Gigapipe
//! host. The settings are read from the environment; whether TLS and basic
//! auth are used is derived from the credentials alone.

use serde::{Deserialize, Serialize};

/// Host used when `GIGAPIPE_HOST` is unset or empty.
pub const DEFAULT_HOST: &str = "localhost:3100";

pub const HOST_VAR: &str = "GIGAPIPE_HOST";
pub const USERNAME_VAR: &str = "GIGAPIPE_USERNAME";
pub const PASSWORD_VAR: &str = "GIGAPIPE_PASSWORD";

/// URL scheme used to reach the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete username/password pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Connection settings for the Gigapipe backend.
///
/// Missing username or password are stored as empty strings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// `host[:port]`, optionally followed by a path prefix. No scheme.
    pub host: String,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing)]
    pub password: String,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("host", &self.host)
            .field("username", &self.username)
            .field(
                "password",
                &(!self.password.is_empty()).then_some("[REDACTED]"),
            )
            .finish()
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            username: String::new(),
            password: String::new(),
        }
    }
}

impl BackendConfig {
    /// Create a configuration for the given host without credentials.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Default::default()
        }
    }

    /// Attach a username and password.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Resolve settings from the process environment. Never fails.
    pub fn resolve() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_VAR)
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        Self {
            host,
            username: lookup(USERNAME_VAR).unwrap_or_default(),
            password: lookup(PASSWORD_VAR).unwrap_or_default(),
        }
    }

    /// Credentials to send, present only when both halves are non-empty.
    pub fn credentials(&self) -> Option<Credentials> {
        if self.username.is_empty() || self.password.is_empty() {
            return None;
        }
        Some(Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    /// HTTPS iff both username and password are non-empty.
    ///
    /// A username without a password falls back to plain HTTP with no
    /// authentication at all.
    pub fn scheme(&self) -> Scheme {
        if self.credentials().is_some() {
            Scheme::Https
        } else {
            Scheme::Http
        }
    }

    /// `scheme://host` for this backend.
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme(), self.host)
    }
}
