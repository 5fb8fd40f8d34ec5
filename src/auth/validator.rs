//! Login request validator
//!
//! Structural checks run before any credential lookup, so a malformed request
//! never reaches the credential store.

use super::models::LoginRequest;
use super::results::ValidationOutcome;
use crate::config::ValidationConfig;
use crate::utils::validation::{char_len, has_control_chars, is_blank};

/// Checks the shape of a login request.
pub trait LoginValidator: Send + Sync {
    fn validate(&self, request: &LoginRequest) -> ValidationOutcome;
}

/// Validator driven by the configured length bounds.
#[derive(Debug, Clone)]
pub struct RuleValidator {
    rules: ValidationConfig,
}

impl RuleValidator {
    pub fn new(rules: ValidationConfig) -> Self {
        Self { rules }
    }
}

impl Default for RuleValidator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

impl LoginValidator for RuleValidator {
    fn validate(&self, request: &LoginRequest) -> ValidationOutcome {
        let mut errors = Vec::new();

        check_field(
            &mut errors,
            "Login",
            request.login_data(),
            is_blank(request.login_data()),
            self.rules.min_login_length,
            self.rules.max_login_length,
        );
        check_field(
            &mut errors,
            "Password",
            request.password(),
            request.password().is_empty(),
            self.rules.min_password_length,
            self.rules.max_password_length,
        );

        ValidationOutcome::from_errors(errors)
    }
}

/// Appends every failing rule for one field. Length rules are skipped for an
/// empty field so it reports a single message.
fn check_field(
    errors: &mut Vec<String>,
    name: &str,
    value: &str,
    empty: bool,
    min: usize,
    max: usize,
) {
    if empty {
        errors.push(format!("{name} must not be empty"));
        return;
    }

    let len = char_len(value);
    if len < min {
        errors.push(format!("{name} must be at least {min} characters"));
    }
    if len > max {
        errors.push(format!("{name} must be at most {max} characters"));
    }
    if has_control_chars(value) {
        errors.push(format!("{name} contains invalid characters"));
    }
}
