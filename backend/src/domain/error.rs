//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses or any other protocol-specific envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::TraceId;

/// Stable machine-readable error code describing the failure category.
///
/// The request contract distinguishes exactly two outcomes: the caller sent
/// something unacceptable, or the persistence collaborator failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidInput,
    /// The persistence collaborator failed while serving the request.
    UpstreamFailure,
}

/// API error payload.
///
/// ## Invariants
/// - `message` must be non-empty once trimmed of whitespace.
/// - `trace_id`, when present, must be non-empty.
///
/// # Examples
/// ```
/// use visits_service::domain::{Error, ErrorCode};
///
/// let err = Error::invalid_input("Invalid pet ID");
/// assert_eq!(err.code(), ErrorCode::InvalidInput);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
#[serde(try_from = "ErrorDto", into = "ErrorDto")]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
    details: Option<Value>,
}

/// Validation errors emitted by the constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorValidationError {
    EmptyMessage,
    EmptyTraceId,
}

impl std::fmt::Display for ErrorValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "error message must not be empty"),
            Self::EmptyTraceId => write!(f, "trace identifier must not be empty"),
        }
    }
}

impl std::error::Error for ErrorValidationError {}

impl Error {
    /// Create a new error, panicking if validation fails.
    ///
    /// Prefer the convenience constructors for the fixed contract messages;
    /// use [`Error::try_new`] when the message comes from untrusted input.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(value) => value,
            Err(err) => panic!("error messages must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the message content and captures
    /// any ambient trace identifier.
    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            code,
            message,
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        })
    }

    /// Convenience constructor for [`ErrorCode::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Convenience constructor for [`ErrorCode::UpstreamFailure`].
    pub fn upstream_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamFailure, message)
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use visits_service::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_input("Invalid pet ID")
    ///     .with_details(json!({ "field": "petId" }));
    /// assert!(err.details().is_some());
    /// ```
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Override the captured trace identifier.
    ///
    /// Middleware normally installs the identifier before handlers run; this
    /// exists for callers that construct errors outside a request scope.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to clients.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Trace identifier propagated into the response header.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary error details for clients.
    #[must_use]
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorDto {
    code: ErrorCode,
    message: String,
    #[serde(alias = "trace_id")]
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl From<Error> for ErrorDto {
    fn from(value: Error) -> Self {
        Self {
            code: value.code,
            message: value.message,
            trace_id: value.trace_id,
            details: value.details,
        }
    }
}

impl TryFrom<ErrorDto> for Error {
    type Error = ErrorValidationError;

    fn try_from(value: ErrorDto) -> Result<Self, Self::Error> {
        let ErrorDto {
            code,
            message,
            trace_id,
            details,
        } = value;

        let mut error = Error::try_new(code, message)?;
        if let Some(trace_id) = trace_id {
            if trace_id.trim().is_empty() {
                return Err(ErrorValidationError::EmptyTraceId);
            }
            error.trace_id = Some(trace_id);
        } else {
            error.trace_id = None;
        }
        error.details = details;
        Ok(error)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case(ErrorCode::InvalidInput, "invalid_input")]
    #[case(ErrorCode::UpstreamFailure, "upstream_failure")]
    fn error_code_serialises_snake_case(#[case] code: ErrorCode, #[case] expected: &str) {
        let serialised = serde_json::to_value(code).expect("serialise code");
        assert_eq!(serialised, json!(expected));
    }

    #[test]
    fn try_new_rejects_blank_message() {
        let err = Error::try_new(ErrorCode::InvalidInput, "   ");
        assert_eq!(err, Err(ErrorValidationError::EmptyMessage));
    }

    #[test]
    fn envelope_omits_absent_optional_fields() {
        let error = Error::invalid_input("Invalid pet ID");
        let value = serde_json::to_value(&error).expect("serialise error");
        assert_eq!(
            value,
            json!({ "code": "invalid_input", "message": "Invalid pet ID" })
        );
    }

    #[test]
    fn envelope_carries_details_and_trace_id() {
        let error = Error::upstream_failure("Database error")
            .with_trace_id("00000000-0000-0000-0000-000000000000")
            .with_details(json!({ "cause": "connection refused" }));
        let value = serde_json::to_value(&error).expect("serialise error");
        assert_eq!(value.get("code"), Some(&json!("upstream_failure")));
        assert_eq!(value.get("message"), Some(&json!("Database error")));
        assert_eq!(
            value.get("traceId"),
            Some(&json!("00000000-0000-0000-0000-000000000000"))
        );
        assert_eq!(
            value.get("details"),
            Some(&json!({ "cause": "connection refused" }))
        );
    }

    #[tokio::test]
    async fn constructor_captures_scoped_trace_id() {
        let trace_id = "11111111-1111-1111-1111-111111111111"
            .parse::<TraceId>()
            .expect("valid UUID");
        let error = TraceId::scope(trace_id, async {
            Error::upstream_failure("Database error")
        })
        .await;
        assert_eq!(error.trace_id(), Some(trace_id.to_string().as_str()));
    }

    #[test]
    fn deserialise_rejects_empty_trace_id() {
        let raw = json!({
            "code": "invalid_input",
            "message": "Invalid pet ID",
            "traceId": "  "
        });
        let parsed = serde_json::from_value::<Error>(raw);
        assert!(parsed.is_err());
    }

    #[test]
    fn deserialise_round_trips() {
        let error = Error::invalid_input("Visit date is required")
            .with_details(json!({ "field": "date" }));
        let raw = serde_json::to_string(&error).expect("serialise error");
        let parsed: Error = serde_json::from_str(&raw).expect("deserialise error");
        assert_eq!(parsed, error);
    }
}
