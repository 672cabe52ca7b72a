//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with help text.

use miette::Diagnostic;
use thiserror::Error;

use mkc_config::ConfigError;
use mkc_core::{CoreError, EntityKind};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the registry at {url}")]
    #[diagnostic(
        code(mkc::connection_failed),
        help("Check your network connection, or the --base-url you passed.\nCause: {reason}")
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Registry answered HTTP {status}")]
    #[diagnostic(
        code(mkc::http_status),
        help("The registry may be down for maintenance.\nURL: {url}")
    )]
    Http { status: u16, url: String },

    #[error("Request timed out: {url}")]
    #[diagnostic(
        code(mkc::timeout),
        help("Increase the timeout with --timeout or `mkc config set timeout_secs <SECS>`.")
    )]
    Timeout { url: String },

    // ── Data ─────────────────────────────────────────────────────────
    #[error("{entity} {id} not found")]
    #[diagnostic(
        code(mkc::not_found),
        help("Run: mkc {list_command} --search <NAME> to look up the id")
    )]
    NotFound {
        entity: EntityKind,
        id: u64,
        list_command: &'static str,
    },

    #[error("Unexpected registry response: {message}")]
    #[diagnostic(code(mkc::format))]
    Format { message: String },

    #[error("Registry error: {message}")]
    #[diagnostic(code(mkc::api_error))]
    Api { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(mkc::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(mkc::config),
        help("Fix or remove the file printed by `mkc config path`.")
    )]
    Config { message: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render output: {message}")]
    #[diagnostic(code(mkc::render))]
    Render { message: String },
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::Http { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    pub fn invalid(field: &str, reason: impl std::fmt::Display) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.to_string(),
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => Self::ConnectionFailed { url, reason },
            CoreError::Timeout { url } => Self::Timeout { url },
            CoreError::Http { status, url } => Self::Http { status, url },
            CoreError::NotFound { entity, id } => Self::NotFound {
                entity,
                id,
                list_command: match entity {
                    EntityKind::Player => "players",
                    EntityKind::Team => "teams",
                },
            },
            CoreError::Format { message } => Self::Format { message },
            err @ CoreError::IdMismatch { .. } => Self::Format {
                message: err.to_string(),
            },
            CoreError::Api { message } => Self::Api { message },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Client(core) => core.into(),
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::Io(e) => Self::Io(e),
            other => Self::Config {
                message: other.to_string(),
            },
        }
    }
}
