//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use mselkit_core::CoreError;

/// Exit codes per the CLI contract.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const PERMISSION: i32 = 5;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to MSEL server at {url}")]
    #[diagnostic(
        code(mselkit::connection_failed),
        help(
            "Check that the server is running and accessible.\n\
             URL: {url}\n\
             Reason: {reason}"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Server request timed out")]
    #[diagnostic(
        code(mselkit::timeout),
        help("The server did not respond in time. Try --timeout with a larger value.")
    )]
    Timeout,

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(mselkit::auth_failed),
        help(
            "Your access token was rejected. Tokens are minted by the identity\n\
             provider; fetch a fresh one and store it with:\n\
             mselkit config set-token"
        )
    )]
    AuthFailed { message: String },

    #[error("No access token configured for profile '{profile}'")]
    #[diagnostic(
        code(mselkit::no_token),
        help(
            "Configure a token with: mselkit config set-token --profile {profile}\n\
             Or set the MSEL_TOKEN environment variable."
        )
    )]
    NoToken { profile: String },

    #[error("Permission denied: {message}")]
    #[diagnostic(
        code(mselkit::permission_denied),
        help("Ask an administrator for the content-developer permission.")
    )]
    PermissionDenied { message: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(mselkit::not_found),
        help("List available items with: mselkit {list_command}")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Configuration ────────────────────────────────────────────────
    #[error("No configuration found (looked at {path})")]
    #[diagnostic(
        code(mselkit::no_config),
        help("Create a profile with: mselkit config init\nOr pass --server and --token.")
    )]
    NoConfig { path: String },

    #[error("Invalid {field}: {reason}")]
    #[diagnostic(code(mselkit::validation))]
    Validation { field: String, reason: String },

    // ── Operations ───────────────────────────────────────────────────
    #[error("Server rejected the request: {message}")]
    #[diagnostic(code(mselkit::api_error))]
    Api { message: String },

    #[error("Download failed: {reason}")]
    #[diagnostic(
        code(mselkit::download_failed),
        help("The workbook could not be retrieved. Check the MSEL id and try again.")
    )]
    DownloadFailed { reason: String },

    #[error("IO error: {0}")]
    #[diagnostic(code(mselkit::io))]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    #[diagnostic(code(mselkit::internal))]
    Internal(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::AuthFailed { .. } | Self::NoToken { .. } => exit_code::AUTH,
            Self::PermissionDenied { .. } => exit_code::PERMISSION,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::NoConfig { .. } | Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => Self::ConnectionFailed { url, reason },
            CoreError::AuthenticationFailed { message } => Self::AuthFailed { message },
            CoreError::PermissionDenied { message } => Self::PermissionDenied { message },
            CoreError::Timeout { .. } => Self::Timeout,
            CoreError::NotFound {
                entity_type,
                identifier,
            } => Self::NotFound {
                resource_type: entity_type,
                identifier,
                list_command: "msel list".into(),
            },
            CoreError::Rejected { message }
            | CoreError::ValidationFailed { message }
            | CoreError::Api { message, .. } => Self::Api { message },
            CoreError::Config { message } => Self::Validation {
                field: "config".into(),
                reason: message,
            },
            CoreError::Internal(message) => Self::Internal(message),
        }
    }
}

impl From<mselkit_config::ConfigError> for CliError {
    fn from(err: mselkit_config::ConfigError) -> Self {
        match err {
            mselkit_config::ConfigError::NoToken { profile } => Self::NoToken { profile },
            mselkit_config::ConfigError::Validation { field, reason } => {
                Self::Validation { field, reason }
            }
            mselkit_config::ConfigError::Io(e) => Self::Io(e),
            other => Self::Internal(other.to_string()),
        }
    }
}
