//! Error types for the FreshService client.
//!
//! This module defines `FreshserviceError`, the single error type returned by
//! the transport and by every resource service.
//!
//! # Security
//!
//! The API key is never part of an error message. Response bodies captured
//! into [`FreshserviceError::Api`] are passed through `sanitize_message()`
//! and truncated before they are stored.

use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Maximum length of a response body excerpt kept in an API error.
pub const MAX_ERROR_BODY_LEN: usize = 500;

/// Unified error type for all FreshService operations.
///
/// Variants fall into four groups: configuration errors and encoding errors
/// (both raised before any I/O), transport errors, and API errors for
/// responses outside `200..=204`.
#[derive(Error, Debug)]
pub enum FreshserviceError {
    /// Configuration error - missing domain or key, bad user agent or base URL.
    #[error("configuration error: {0}")]
    Config(String),

    /// The transport only speaks GET, POST, PUT and DELETE.
    #[error("configuration error: unsupported HTTP method {0}")]
    UnsupportedMethod(Method),

    /// The relative path could not be percent-decoded.
    #[error("invalid path {path:?}: {reason}")]
    InvalidPath {
        /// The offending path, as passed by the caller.
        path: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Query options could not be encoded into a query string.
    #[error("query encoding error: {0}")]
    Encoding(String),

    /// JSON body encoding or response decoding failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The server answered with a status outside `200..=204`.
    #[error("{message}")]
    Api {
        /// The HTTP status code returned.
        status: StatusCode,
        /// `request returned non-success status <code>: <reason>`.
        message: String,
        /// Sanitized and truncated response body.
        body: String,
    },

    /// The caller's context was cancelled.
    #[error("context cancelled")]
    Cancelled,

    /// The caller's context deadline passed.
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

impl FreshserviceError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        FreshserviceError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        FreshserviceError::Config(message.into())
    }

    /// Creates a path error.
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        FreshserviceError::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates an API error from a non-success status and its body.
    ///
    /// The body is sanitized against `api_key` and cut to
    /// [`MAX_ERROR_BODY_LEN`] bytes.
    pub fn api(status: StatusCode, body: &str, api_key: &str) -> Self {
        let body = Self::sanitize_message(body, api_key);
        FreshserviceError::Api {
            status,
            message: format!(
                "request returned non-success status {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ),
            body: truncate(body, MAX_ERROR_BODY_LEN),
        }
    }

    /// Returns the HTTP status carried by an API error.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FreshserviceError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true for errors raised before any network I/O was attempted.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            FreshserviceError::Config(_) | FreshserviceError::UnsupportedMethod(_)
        )
    }

    /// Returns true if the status would have triggered another attempt.
    ///
    /// This mirrors the transport's retry predicate: only 429 and 5xx
    /// responses qualify. Transport failures are never retried.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            FreshserviceError::Api { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            }
            _ => false,
        }
    }

    /// Returns true if this is a rate limit error.
    #[must_use]
    pub fn is_rate_limit(&self) -> bool {
        self.status() == Some(StatusCode::TOO_MANY_REQUESTS)
    }

    /// Returns true if the caller's context ended the call.
    #[must_use]
    pub fn is_context(&self) -> bool {
        matches!(
            self,
            FreshserviceError::Cancelled | FreshserviceError::DeadlineExceeded
        )
    }

    /// Sanitizes a message to remove any occurrence of the API key.
    ///
    /// Every occurrence of `api_key` is replaced with `[REDACTED]`. An empty
    /// key leaves the message untouched.
    #[must_use]
    pub fn sanitize_message(message: &str, api_key: &str) -> String {
        if api_key.is_empty() {
            return message.to_string();
        }
        message.replace(api_key, "[REDACTED]")
    }

    /// Creates a sanitized version of this error's display message.
    #[must_use]
    pub fn sanitized_display(&self, api_key: &str) -> String {
        Self::sanitize_message(&self.to_string(), api_key)
    }
}

fn truncate(body: String, max: usize) -> String {
    if body.len() <= max {
        return body;
    }
    let mut end = max;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_error() {
        let err = FreshserviceError::missing_env("FRESHSERVICE_API_KEY");
        assert!(err.to_string().contains("FRESHSERVICE_API_KEY"));
        assert!(err.to_string().contains("missing"));
        assert!(err.is_config());
    }

    #[test]
    fn test_unsupported_method_is_config_error() {
        let err = FreshserviceError::UnsupportedMethod(Method::PATCH);
        assert!(err.is_config());
        assert!(err.to_string().contains("PATCH"));
    }

    #[test]
    fn test_api_error_message() {
        let err = FreshserviceError::api(StatusCode::NOT_FOUND, "{}", "key");
        assert_eq!(
            err.to_string(),
            "request returned non-success status 404: Not Found"
        );
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_api_error_body_is_sanitized() {
        let err = FreshserviceError::api(
            StatusCode::UNAUTHORIZED,
            "bad key super_secret_key_12345",
            "super_secret_key_12345",
        );
        match err {
            FreshserviceError::Api { body, .. } => {
                assert!(!body.contains("super_secret_key_12345"));
                assert!(body.contains("[REDACTED]"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_api_error_body_is_truncated() {
        let long = "é".repeat(MAX_ERROR_BODY_LEN);
        let err = FreshserviceError::api(StatusCode::BAD_REQUEST, &long, "");
        match err {
            FreshserviceError::Api { body, .. } => {
                assert!(body.ends_with("...[truncated]"));
                assert!(body.len() <= MAX_ERROR_BODY_LEN + "...[truncated]".len());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_is_retryable() {
        let limited = FreshserviceError::api(StatusCode::TOO_MANY_REQUESTS, "", "");
        assert!(limited.is_retryable());
        assert!(limited.is_rate_limit());

        let unavailable = FreshserviceError::api(StatusCode::SERVICE_UNAVAILABLE, "", "");
        assert!(unavailable.is_retryable());
        assert!(!unavailable.is_rate_limit());

        assert!(!FreshserviceError::Cancelled.is_retryable());
        assert!(!FreshserviceError::invalid_config("x").is_retryable());
    }

    #[test]
    fn test_context_errors() {
        assert!(FreshserviceError::Cancelled.is_context());
        assert!(FreshserviceError::DeadlineExceeded.is_context());
        assert!(!FreshserviceError::Encoding("x".into()).is_context());
    }

    #[test]
    fn test_sanitize_message_removes_api_key() {
        let api_key = "super_secret_key_12345";
        let message = format!("Error connecting with key {} to server", api_key);
        let sanitized = FreshserviceError::sanitize_message(&message, api_key);
        assert!(!sanitized.contains(api_key));
        assert!(sanitized.contains("[REDACTED]"));
    }

    #[test]
    fn test_sanitize_message_empty_key() {
        let message = "Some error message";
        let sanitized = FreshserviceError::sanitize_message(message, "");
        assert_eq!(sanitized, message);
    }

    #[test]
    fn test_invalid_path_display() {
        let err = FreshserviceError::invalid_path("tickets/%zz", "bad escape");
        let msg = err.to_string();
        assert!(msg.contains("tickets/%zz"));
        assert!(msg.contains("bad escape"));
    }
}
