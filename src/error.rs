//! Error types for the IEX API clients.
//!
//! Every operation in this crate returns [`Result`]. The [`Error`] enum
//! covers the four failure classes a caller can observe: invalid arguments
//! (raised before any network I/O), transport failures, non-success HTTP
//! statuses, and response bodies that do not match the expected shape.

use thiserror::Error;

/// A specialized `Result` type for IEX API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all IEX API operations.
///
/// Errors propagate directly to the caller of the endpoint method; the
/// client performs no retries, no fallback, and no partial-result
/// assembly.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failed (connection, TLS, timeout, cancellation).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error: status={status}, body={body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body for debugging
        body: String,
    },

    /// Response body could not be parsed into the expected shape.
    #[error("deserialization error: {source}")]
    Deserialize {
        /// Raw response body that failed to parse
        body: String,
        /// Parse failure detail
        #[source]
        source: serde_json::Error,
    },

    /// Invalid input provided to an endpoint method (empty symbol list,
    /// empty batch type set, out-of-range argument).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A path template referenced a placeholder with no matching entry in
    /// the placeholder map. This is a bug in the calling wrapper, not a
    /// runtime condition.
    #[error("template {template:?} references placeholder [{name}] with no value")]
    MissingPlaceholder {
        /// The offending path template
        template: String,
        /// The unmatched placeholder name
        name: String,
    },

    /// URL parsing error.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error during client construction.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if this error indicates a client-side issue
    /// (invalid arguments, template misuse, 4xx status).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::InvalidInput(_) | Error::MissingPlaceholder { .. } | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if the failure happened in the transport layer
    /// before a status code was received.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// The HTTP status code, if the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let not_found = Error::Api {
            status: 404,
            body: "Unknown symbol".into(),
        };
        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());
        assert_eq!(not_found.status(), Some(404));

        let unavailable = Error::Api {
            status: 503,
            body: String::new(),
        };
        assert!(unavailable.is_server_error());

        assert!(Error::InvalidInput("no symbols".into()).is_client_error());
        assert!(Error::MissingPlaceholder {
            template: "stock/[symbol]/quote".into(),
            name: "symbol".into(),
        }
        .is_client_error());
    }

    #[test]
    fn test_deserialize_error_keeps_body() {
        let source = serde_json::from_str::<i64>("not json").unwrap_err();
        let err = Error::Deserialize {
            body: "not json".into(),
            source,
        };
        match err {
            Error::Deserialize { body, .. } => assert_eq!(body, "not json"),
            _ => panic!("expected Deserialize error"),
        }
    }
}
