/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new enum values are added
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BankAccountType {
    Checking,
    Savings,
}

impl BankAccountType {
    pub fn as_str(self) -> &'static str {
        match self {
            BankAccountType::Checking => "checking",
            BankAccountType::Savings => "savings",
        }
    }
}

/// Underwriting subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MerchantType {
    Person,
    Business,
}

impl MerchantType {
    pub fn as_str(self) -> &'static str {
        match self {
            MerchantType::Person => "person",
            MerchantType::Business => "business",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationState {
    Pending,
    Verified,
    Failed,
    #[serde(other)]
    Unknown,
}

/// Coarse classification carried by API error envelopes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed or invalid request
    Request,
    /// Request was valid but breaks a business rule
    Logical,
    /// Processor or bank declined the operation
    Banking,
    Other(String),
}

impl From<&str> for ErrorCategory {
    fn from(value: &str) -> Self {
        match value {
            "request" => ErrorCategory::Request,
            "logical" => ErrorCategory::Logical,
            "banking" => ErrorCategory::Banking,
            other => ErrorCategory::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_from_str() {
        assert_eq!(ErrorCategory::from("request"), ErrorCategory::Request);
        assert_eq!(ErrorCategory::from("banking"), ErrorCategory::Banking);
        assert_eq!(
            ErrorCategory::from("server"),
            ErrorCategory::Other("server".to_string())
        );
    }

    #[test]
    fn test_unknown_verification_state() {
        let state: VerificationState = serde_json::from_str(r#""deposit_failed""#).unwrap();
        assert_eq!(state, VerificationState::Unknown);
    }
}
