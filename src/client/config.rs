//! Client configuration options.

use std::time::Duration;

use secrecy::SecretString;

use crate::models::ApiVersion;

/// Configuration for an IEX client.
///
/// # Example
///
/// ```
/// use iexcloud_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// API version path segment (`stable` by default)
    pub api_version: ApiVersion,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("iexcloud-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            api_version: ApiVersion::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Pin to a specific API version path segment.
    pub fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }
}

/// API tokens for IEX Cloud.
///
/// The publishable token rides along on every request as the `token`
/// query parameter. The secret token is held for completeness of the
/// credential pair; no GET endpoint in this crate requires it.
pub struct Credentials {
    pub(crate) publishable: SecretString,
    #[allow(dead_code)]
    pub(crate) secret: Option<SecretString>,
}

impl Credentials {
    /// Credentials from a publishable token only.
    pub fn publishable(token: impl Into<String>) -> Self {
        Self {
            publishable: SecretString::from(token.into()),
            secret: None,
        }
    }

    /// Credentials from a publishable/secret token pair.
    pub fn pair(publishable: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            publishable: SecretString::from(publishable.into()),
            secret: Some(SecretString::from(secret.into())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Token material stays out of logs.
        f.debug_struct("Credentials")
            .field("publishable", &"[REDACTED]")
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
