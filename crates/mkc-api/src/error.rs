use thiserror::Error;

/// Top-level error type for the `mkc-api` crate.
///
/// Covers transport failures, URL problems, and registry payloads that
/// cannot be interpreted. `mkc-core` maps these into entity-level errors.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, non-2xx status, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing or joining error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A request was about to leave over plain HTTP while HTTPS is required.
    #[error("Refusing non-HTTPS URL: {url}")]
    InsecureScheme { url: String },

    /// TLS setup or HTTP client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Registry ────────────────────────────────────────────────────
    /// The registry has no resource with this id (HTTP 404 or an empty body).
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: u64 },

    /// The registry answered with its own error indicator instead of data.
    #[error("Registry error: {message}")]
    Registry { message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the registry reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }

    /// Returns `true` if this is a transient error worth retrying.
    ///
    /// Nothing in this crate retries; the hint is for callers.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => {
                e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
            }
            _ => false,
        }
    }

    /// Returns `true` for malformed URIs or bodies (as opposed to connection failures).
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl(_) | Self::InsecureScheme { .. } | Self::Deserialization { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_classified() {
        let err = Error::NotFound {
            resource: "player",
            id: 42,
        };
        assert!(err.is_not_found());
        assert!(!err.is_format_error());
        assert_eq!(err.to_string(), "player 42 not found");
    }

    #[test]
    fn format_errors_are_classified() {
        let insecure = Error::InsecureScheme {
            url: "http://example.com".into(),
        };
        assert!(insecure.is_format_error());
        assert!(!insecure.is_transient());

        let body = Error::Deserialization {
            message: "expected value".into(),
            body: "<html>".into(),
        };
        assert!(body.is_format_error());
    }

    #[test]
    fn registry_error_is_neither_format_nor_not_found() {
        let err = Error::Registry {
            message: "maintenance".into(),
        };
        assert!(!err.is_format_error());
        assert!(!err.is_not_found());
    }
}
