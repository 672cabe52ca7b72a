// ── Core error types ──
//
// Entity-level errors from mkc-core. Consumers see connection, format and
// not-found failures as distinct variants; the `From<mkc_api::Error>` impl
// translates transport-layer errors into them.

use thiserror::Error;

use crate::model::EntityKind;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach the registry at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Registry request timed out: {url}")]
    Timeout { url: String },

    #[error("Registry answered HTTP {status} for {url}")]
    Http { status: u16, url: String },

    // ── Format errors ────────────────────────────────────────────────
    #[error("Malformed request or response: {message}")]
    Format { message: String },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: u64 },

    #[error("Asked for {entity} {requested} but the registry returned {received}")]
    IdMismatch {
        entity: EntityKind,
        requested: u64,
        received: u64,
    },

    #[error("Registry error: {message}")]
    Api { message: String },
}

impl CoreError {
    /// DNS, TLS, reset, timeout, or a non-2xx status.
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed { .. } | Self::Timeout { .. } | Self::Http { .. }
        )
    }

    /// Non-HTTPS URI or an unparseable body.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<mkc_api::Error> for CoreError {
    fn from(err: mkc_api::Error) -> Self {
        match err {
            mkc_api::Error::Transport(ref e) => {
                let url = e.url().map(ToString::to_string).unwrap_or_else(|| "<unknown>".into());
                if e.is_timeout() {
                    CoreError::Timeout { url }
                } else if let Some(status) = e.status() {
                    CoreError::Http {
                        status: status.as_u16(),
                        url,
                    }
                } else if e.is_decode() {
                    CoreError::Format {
                        message: e.to_string(),
                    }
                } else {
                    CoreError::ConnectionFailed {
                        url,
                        reason: e.to_string(),
                    }
                }
            }
            mkc_api::Error::Tls(reason) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {reason}"),
            },
            mkc_api::Error::InvalidUrl(e) => CoreError::Format {
                message: format!("Invalid URL: {e}"),
            },
            mkc_api::Error::InsecureScheme { url } => CoreError::Format {
                message: format!("Refusing non-HTTPS URL: {url}"),
            },
            mkc_api::Error::Deserialization { message, body: _ } => CoreError::Format {
                message: format!("Deserialization error: {message}"),
            },
            mkc_api::Error::NotFound { resource, id } => CoreError::NotFound {
                entity: EntityKind::from_resource(resource),
                id,
            },
            mkc_api::Error::Registry { message } => CoreError::Api { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_not_found_keeps_entity_and_id() {
        let err = CoreError::from(mkc_api::Error::NotFound {
            resource: "team",
            id: 1064,
        });
        assert!(err.is_not_found());
        assert!(matches!(
            err,
            CoreError::NotFound {
                entity: EntityKind::Team,
                id: 1064
            }
        ));
    }

    #[test]
    fn api_format_failures_become_format_errors() {
        let insecure = CoreError::from(mkc_api::Error::InsecureScheme {
            url: "http://x".into(),
        });
        assert!(insecure.is_format_error());

        let body = CoreError::from(mkc_api::Error::Deserialization {
            message: "missing field `id`".into(),
            body: "{}".into(),
        });
        assert!(body.is_format_error());
        assert!(!body.is_connection_error());
    }

    #[test]
    fn tls_failures_are_connection_errors() {
        let err = CoreError::from(mkc_api::Error::Tls("bad cert".into()));
        assert!(err.is_connection_error());
    }

    #[test]
    fn id_mismatch_message() {
        let err = CoreError::IdMismatch {
            entity: EntityKind::Player,
            requested: 1,
            received: 2,
        };
        assert_eq!(
            err.to_string(),
            "Asked for player 1 but the registry returned 2"
        );
    }
}
