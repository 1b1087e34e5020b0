/*
[INPUT]:  Error sources (HTTP, API envelope, deserialization, URL, configuration)
[OUTPUT]: Structured error types that keep network and domain failures apart
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing the API error envelope
*/

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::types::ErrorCategory;

/// Error envelope returned by the Balanced API inside a JSON body.
///
/// Only treated as an error when `status` is non-empty; see
/// [`crate::http::response::classify`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiError {
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status_code: u16,
    pub request_id: Option<String>,
    pub description: Option<String>,
    pub additional: Option<String>,
    pub category_type: Option<String>,
    pub category_code: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub extras: HashMap<String, serde_json::Value>,
}

impl ApiError {
    /// Parsed `category_type`
    pub fn category(&self) -> ErrorCategory {
        self.category_type
            .as_deref()
            .map(ErrorCategory::from)
            .unwrap_or(ErrorCategory::Other(String::new()))
    }

    /// Field-level detail for `key`, if the server supplied one
    pub fn extra(&self, key: &str) -> Option<&serde_json::Value> {
        self.extras.get(key)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status_code, self.status)?;
        if let Some(code) = &self.category_code {
            write!(f, " [{code}]")?;
        }
        if let Some(description) = &self.description {
            write!(f, ": {description}")?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request {request_id})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Main error type for the Balanced adapter
#[derive(Error, Debug)]
pub enum BalancedError {
    /// HTTP request could not be built, sent, or its body read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request deadline exceeded before the response body was read
    #[error("Request timed out after {duration}s")]
    Timeout { duration: u64 },

    /// API answered with an error envelope
    #[error("Balanced API error: {0}")]
    Api(Box<ApiError>),

    /// Success body did not match the expected schema
    #[error("Unable to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BalancedError {
    /// The operation never produced a response from the server
    pub fn is_network_error(&self) -> bool {
        matches!(self, BalancedError::Http(_) | BalancedError::Timeout { .. })
    }

    /// Check if the error is worth retrying by the caller
    pub fn is_retryable(&self) -> bool {
        match self {
            BalancedError::Http(_) | BalancedError::Timeout { .. } => true,
            BalancedError::Api(err) => err.status_code == 429 || err.status_code >= 500,
            _ => false,
        }
    }

    /// The API error envelope, if this is a domain error
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            BalancedError::Api(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<ApiError> for BalancedError {
    fn from(err: ApiError) -> Self {
        BalancedError::Api(Box::new(err))
    }
}

/// Result type alias for Balanced operations
pub type Result<T> = std::result::Result<T, BalancedError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status_code: u16, category: &str) -> ApiError {
        ApiError {
            status: "Bad Request".to_string(),
            status_code,
            category_type: Some(category.to_string()),
            category_code: Some("invalid-amount".to_string()),
            description: Some("Amount must be positive".to_string()),
            request_id: Some("OHM123".to_string()),
            ..ApiError::default()
        }
    }

    #[test]
    fn test_error_retryable() {
        let timeout_err = BalancedError::Timeout { duration: 30 };
        assert!(timeout_err.is_retryable());
        assert!(timeout_err.is_network_error());

        let validation: BalancedError = api_error(400, "request").into();
        assert!(!validation.is_retryable());
        assert!(!validation.is_network_error());

        let throttled: BalancedError = api_error(429, "request").into();
        assert!(throttled.is_retryable());

        let config = BalancedError::Config("missing marketplace".to_string());
        assert!(!config.is_retryable());
    }

    #[test]
    fn test_api_error_keeps_structure() {
        let err: BalancedError = api_error(400, "logical").into();
        let envelope = err.api_error().expect("api envelope");
        assert_eq!(envelope.status_code, 400);
        assert_eq!(envelope.category(), ErrorCategory::Logical);
        assert_eq!(envelope.category_code.as_deref(), Some("invalid-amount"));
    }

    #[test]
    fn test_api_error_display() {
        let rendered = api_error(400, "request").to_string();
        assert_eq!(
            rendered,
            "400 Bad Request [invalid-amount]: Amount must be positive (request OHM123)"
        );
    }

    #[test]
    fn test_missing_category_is_other() {
        let err = ApiError {
            status: "Conflict".to_string(),
            ..ApiError::default()
        };
        assert_eq!(err.category(), ErrorCategory::Other(String::new()));
    }
}
