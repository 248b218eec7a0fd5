//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps them to status
//! codes and the `{status, message, timestamp}` envelope in
//! `inbound::http::error`.

use std::fmt;

use crate::domain::EngineerId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested engineer does not exist, or there are none at all.
    NotFound,
    /// The resource exists but does not accept the request method.
    MethodNotAllowed,
    /// An unexpected error occurred inside the service or its adapters.
    InternalError,
}

impl ErrorCode {
    fn fallback_message(self) -> &'static str {
        match self {
            Self::InvalidRequest => "Invalid request",
            Self::NotFound => "Not found",
            Self::MethodNotAllowed => "Method not allowed",
            Self::InternalError => "Internal server error",
        }
    }
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` is non-empty once trimmed of whitespace. Blank messages are
///   replaced with a generic message for the error code.
///
/// # Examples
/// ```
/// use engineers::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("missing");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "missing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
}

impl Error {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            code.fallback_message().to_owned()
        } else {
            message
        };
        Self {
            code,
            message,
            trace_id: None,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Trace identifier of the request that raised the error, if known.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Attach a trace identifier to the error.
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::MethodNotAllowed`].
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MethodNotAllowed, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// No engineer is stored under `id`.
    ///
    /// # Examples
    /// ```
    /// use engineers::domain::{EngineerId, Error};
    ///
    /// let err = Error::engineer_not_found(EngineerId::new(7));
    /// assert_eq!(err.message(), "Engineer not found with id: 7");
    /// ```
    pub fn engineer_not_found(id: EngineerId) -> Self {
        Self::not_found(format!("Engineer not found with id: {id}"))
    }

    /// The engineer collection is empty.
    pub fn no_engineers() -> Self {
        Self::not_found("There is NO engineer available. No engineers found!")
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    //! Regression coverage for domain error construction.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ErrorCode::InvalidRequest, "Invalid request")]
    #[case(ErrorCode::NotFound, "Not found")]
    #[case(ErrorCode::MethodNotAllowed, "Method not allowed")]
    #[case(ErrorCode::InternalError, "Internal server error")]
    fn blank_messages_fall_back_to_code_default(#[case] code: ErrorCode, #[case] expected: &str) {
        let err = Error::new(code, "   ");
        assert_eq!(err.message(), expected);
        assert_eq!(err.code(), code);
    }

    #[rstest]
    fn engineer_not_found_names_the_id() {
        let err = Error::engineer_not_found(EngineerId::new(42));
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.to_string(), "Engineer not found with id: 42");
    }

    #[rstest]
    fn no_engineers_is_not_found() {
        let err = Error::no_engineers();
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert!(err.message().starts_with("There is NO engineer available."));
    }

    #[rstest]
    fn trace_id_is_absent_until_attached() {
        let err = Error::internal("boom");
        assert!(err.trace_id().is_none());
        let err = err.with_trace_id("00000000-0000-0000-0000-000000000000");
        assert_eq!(
            err.trace_id(),
            Some("00000000-0000-0000-0000-000000000000")
        );
    }
}
