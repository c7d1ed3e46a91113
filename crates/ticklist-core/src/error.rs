//! Error types for the Ticklist core library.

/// Errors that can occur across the checklist store, the Sheets
/// integration, and the HTTP surface.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A checklist name failed path confinement
    #[error("Invalid checklist name: {name}")]
    InvalidName {
        /// The offending name as supplied by the caller
        name: String,
    },

    /// No checklist document exists for the given name
    #[error("Checklist not found: {name}")]
    ChecklistNotFound {
        /// Name that was looked up
        name: String,
    },

    /// The spreadsheet has no row for the effective date
    #[error("Could not find date {date_key} in spreadsheet")]
    RowNotFound {
        /// Date key that was searched for in column A
        date_key: String,
    },

    /// A required request field is missing or malformed
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// What is missing or wrong
        message: String,
    },

    /// Credentials or configuration are absent, or the external client
    /// could not be constructed
    #[error("Service unavailable: {message}")]
    ServiceUnavailable {
        /// What configuration is problematic
        message: String,
    },

    /// The external spreadsheet API failed at the transport or protocol level
    #[error("Spreadsheet API error: {message}")]
    Upstream {
        /// Upstream failure description, surfaced verbatim
        message: String,
    },

    /// An unexpected internal fault (e.g. a malformed stored document)
    #[error("Internal error: {message}")]
    Internal {
        /// What went wrong
        message: String,
    },

    /// I/O error (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for Ticklist operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error was caused by the caller's input
    /// rather than by the server or an upstream service.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidName { .. }
                | Error::ChecklistNotFound { .. }
                | Error::RowNotFound { .. }
                | Error::InvalidRequest { .. }
        )
    }

    /// Creates a new invalid-name error.
    pub fn invalid_name<S: Into<String>>(name: S) -> Self {
        Error::InvalidName { name: name.into() }
    }

    /// Creates a new invalid-request error.
    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Error::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates a new service-unavailable error.
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Error::ServiceUnavailable {
            message: message.into(),
        }
    }

    /// Creates a new upstream error.
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Error::Upstream {
            message: message.into(),
        }
    }

    /// Creates a new internal error.
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Error::Internal {
            message: message.into(),
        }
    }
}
