//! Error handlers
//!
//! Maps login failures onto log records and transport-level responses.

use crate::error::types::LoginError;
use log::{error, info, warn};

/// Message used for both denial kinds when they are collapsed outward.
pub const GENERIC_DENIAL: &str = "Authentication failed";

/// Log a login failure once, at a level matching its kind.
pub fn handle_error(login_data: &str, err: &LoginError) {
    let kind = err.kind();
    match err {
        LoginError::Validation(messages) => {
            info!("[{}] Rejected malformed login for '{}': {:?}", kind, login_data, messages)
        }
        LoginError::NotFound(msg) => warn!("[{}] Login denied for '{}': {}", kind, login_data, msg),
        LoginError::Forbidden => {
            warn!("[{}] Login denied for '{}': password mismatch", kind, login_data)
        }
        LoginError::Infrastructure(e) => {
            error!("[{}] Login for '{}' failed: {}", kind, login_data, e)
        }
    }
}

/// Convert error to an HTTP-style status code
pub fn error_to_status_code(err: &LoginError) -> u16 {
    match err {
        LoginError::Validation(_) => 400,
        LoginError::NotFound(_) => 401,
        LoginError::Forbidden => 401,
        LoginError::Infrastructure(_) => 503,
    }
}

/// Message safe to return to the caller.
///
/// With `collapse_denials` set, an unknown login and a wrong password are
/// indistinguishable from outside.
pub fn public_message(err: &LoginError, collapse_denials: bool) -> String {
    match err {
        LoginError::NotFound(_) | LoginError::Forbidden if collapse_denials => {
            GENERIC_DENIAL.to_string()
        }
        LoginError::Infrastructure(_) => "Service temporarily unavailable".to_string(),
        other => other.to_string(),
    }
}
