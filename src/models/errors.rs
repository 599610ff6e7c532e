//! Centralized error handling for the remote validation path
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - CFG_xxx: configuration errors
//! - REMOTE_xxx: transport/protocol errors talking to the backend or Gemini
//!
//! Geometric outcomes are NEVER errors: a shape that fails its rule is a
//! normal `ValidationResult` with `is_valid == false`. Only transport and
//! configuration problems flow through `AppError`.

use std::fmt;

/// Application-wide error type for transport/configuration faults
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message (user-facing, Bahasa Indonesia for remote faults)
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Configuration Errors
    // ============================================
    /// HTTP client could not be constructed
    ConfigClientBuild,
    /// Invalid configuration value
    ConfigInvalidValue,

    // ============================================
    // Remote Validation Errors
    // ============================================
    /// Endpoint unreachable (connect error, DNS, timeout)
    RemoteUnreachable,
    /// Endpoint answered with a non-2xx status
    RemoteBadStatus,
    /// Model returned an empty response body
    RemoteEmptyBody,
    /// Response body could not be parsed as a ValidationResult
    RemoteMalformedBody,

    /// Unknown error
    Unknown,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigClientBuild => "CFG_CLIENT_BUILD",
            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",
            Self::RemoteUnreachable => "REMOTE_UNREACHABLE",
            Self::RemoteBadStatus => "REMOTE_BAD_STATUS",
            Self::RemoteEmptyBody => "REMOTE_EMPTY_BODY",
            Self::RemoteMalformedBody => "REMOTE_MALFORMED_BODY",
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// Check if error is retryable. The crate itself never retries (one-shot
    /// calls); this is a hint for callers that own the retry policy.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RemoteUnreachable | Self::RemoteBadStatus)
    }
}

// ============================================
// Conversion from common error types
// ============================================

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            Self::with_source(ErrorCode::RemoteUnreachable, "Connection failed", err)
        } else {
            Self::new(ErrorCode::Unknown, err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorCode::RemoteMalformedBody, "JSON parse error", err)
    }
}

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AppError::new(ErrorCode::RemoteEmptyBody, "API mengembalikan respons kosong.");
        assert_eq!(err.code, ErrorCode::RemoteEmptyBody);
        assert_eq!(err.code_str(), "REMOTE_EMPTY_BODY");
    }

    #[test]
    fn test_display_includes_code() {
        let err = AppError::new(ErrorCode::RemoteBadStatus, "Server Error: boom");
        let text = err.to_string();
        assert!(text.contains("REMOTE_BAD_STATUS"));
        assert!(text.contains("boom"));
    }

    #[test]
    fn test_retryable() {
        assert!(ErrorCode::RemoteUnreachable.is_retryable());
        assert!(!ErrorCode::RemoteMalformedBody.is_retryable());
        assert!(!ErrorCode::ConfigClientBuild.is_retryable());
    }

    #[test]
    fn test_serde_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: AppError = parse_err.into();
        assert_eq!(err.code, ErrorCode::RemoteMalformedBody);
        assert!(err.source.is_some());
    }
}
