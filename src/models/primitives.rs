//! Primitive types and newtypes for type-safe API interactions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stock ticker symbol (e.g., "AAPL", "SPY").
///
/// The primary key for most endpoints. Case is preserved as given; the
/// API treats symbols case-insensitively.
///
/// # Example
///
/// ```
/// use iexcloud_rs::Symbol;
///
/// let symbol = Symbol::new("AAPL");
/// assert_eq!(symbol.as_str(), "AAPL");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new symbol.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Environment configuration for the IEX Cloud API.
///
/// Determines which host requests go to. Sandbox tokens only work
/// against the sandbox host and return scrambled data.
///
/// # Example
///
/// ```
/// use iexcloud_rs::Environment;
///
/// let env = Environment::Sandbox;
/// println!("API host: {}", env.api_base_url());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Production environment - live data, billed message usage.
    #[default]
    Production,
    /// Sandbox environment - scrambled test data, free.
    Sandbox,
}

impl Environment {
    /// Get the host address for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://cloud.iexapis.com",
            Environment::Sandbox => "https://sandbox.iexapis.com",
        }
    }

    /// Returns `true` if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Returns `true` if this is the sandbox environment.
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Sandbox => write!(f, "sandbox"),
        }
    }
}

/// API version path segment for IEX Cloud.
///
/// Every request URL carries a version segment between the host and the
/// endpoint path. `stable` tracks the current major version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    /// Current stable version (default).
    #[default]
    Stable,
    /// Beta version - endpoints under test.
    Beta,
    /// Pinned major version 1.
    V1,
}

impl ApiVersion {
    /// Get the version as its URL path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::Stable => "stable",
            ApiVersion::Beta => "beta",
            ApiVersion::V1 => "v1",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
