//! Error types
//!
//! Defines the failure taxonomy of the login flow.

use std::fmt;
use std::time::Duration;

/// Failures of the collaborators themselves, as opposed to business answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfrastructureError {
    LookupUnavailable(String),
    LookupTimeout(Duration),
    LookupDropped,
    TokenIssuance(String),
}

impl fmt::Display for InfrastructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfrastructureError::LookupUnavailable(msg) => {
                write!(f, "Credential lookup unavailable: {}", msg)
            }
            InfrastructureError::LookupTimeout(after) => {
                write!(f, "Credential lookup timed out after {:?}", after)
            }
            InfrastructureError::LookupDropped => {
                write!(f, "Credential lookup responder dropped the request")
            }
            InfrastructureError::TokenIssuance(msg) => write!(f, "Token issuance failed: {}", msg),
        }
    }
}

impl std::error::Error for InfrastructureError {}

/// Terminal failure of a login attempt. Each kind is raised once, by the stage
/// that detects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    Validation(Vec<String>),
    NotFound(String),
    Forbidden,
    Infrastructure(InfrastructureError),
}

impl LoginError {
    /// Short machine-friendly name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            LoginError::Validation(_) => "validation",
            LoginError::NotFound(_) => "not_found",
            LoginError::Forbidden => "forbidden",
            LoginError::Infrastructure(_) => "infrastructure",
        }
    }
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::Validation(messages) => {
                write!(f, "Invalid login request: {}", messages.join("; "))
            }
            LoginError::NotFound(msg) => write!(f, "{}", msg),
            LoginError::Forbidden => write!(f, "credentials do not match"),
            LoginError::Infrastructure(e) => write!(f, "Infrastructure failure: {}", e),
        }
    }
}

impl std::error::Error for LoginError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoginError::Infrastructure(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InfrastructureError> for LoginError {
    fn from(error: InfrastructureError) -> Self {
        LoginError::Infrastructure(error)
    }
}
