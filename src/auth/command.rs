//! Login command
//!
//! Runs one login attempt through validation, credential lookup, password
//! verification and token issuance. Any stage can end the attempt with its own
//! failure kind; no stage is retried.

use std::fmt;
use std::sync::Arc;

use log::debug;

use super::lookup::CredentialLookup;
use super::models::{LoginRequest, LoginResult};
use super::password::PasswordHasher;
use super::token::TokenIssuer;
use super::validator::LoginValidator;
use crate::error::LoginError;

/// Used when the store reports a failure without saying why.
const DEFAULT_NOT_FOUND: &str = "Login not found";

/// Stages of a login attempt, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStage {
    Validating,
    LookingUp,
    Verifying,
    Issuing,
    Succeeded,
}

impl fmt::Display for LoginStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoginStage::Validating => "validating",
            LoginStage::LookingUp => "looking up",
            LoginStage::Verifying => "verifying",
            LoginStage::Issuing => "issuing",
            LoginStage::Succeeded => "succeeded",
        };
        f.write_str(name)
    }
}

/// End-to-end login flow over injected collaborators.
///
/// Holds no per-request state, so one instance can serve concurrent attempts.
pub struct LoginCommand {
    validator: Arc<dyn LoginValidator>,
    lookup: Arc<dyn CredentialLookup>,
    hasher: PasswordHasher,
    tokens: Arc<dyn TokenIssuer>,
}

impl LoginCommand {
    pub fn new(
        validator: Arc<dyn LoginValidator>,
        lookup: Arc<dyn CredentialLookup>,
        hasher: PasswordHasher,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            validator,
            lookup,
            hasher,
            tokens,
        }
    }

    pub async fn execute(&self, request: &LoginRequest) -> Result<LoginResult, LoginError> {
        let login = request.login_data();

        enter(login, LoginStage::Validating);
        let validation = self.validator.validate(request);
        if !validation.is_valid() {
            return Err(LoginError::Validation(validation.into_errors()));
        }

        enter(login, LoginStage::LookingUp);
        let stored = self
            .lookup
            .fetch(login)
            .await?
            .into_result()
            .map_err(|errors| {
                LoginError::NotFound(
                    errors
                        .into_iter()
                        .next()
                        .unwrap_or_else(|| DEFAULT_NOT_FOUND.to_string()),
                )
            })?;

        enter(login, LoginStage::Verifying);
        if !self.hasher.verify(request, &stored) {
            return Err(LoginError::Forbidden);
        }

        enter(login, LoginStage::Issuing);
        let token = self.tokens.issue(stored.user_id)?;

        enter(login, LoginStage::Succeeded);
        Ok(LoginResult {
            user_id: stored.user_id,
            token,
        })
    }
}

fn enter(login: &str, stage: LoginStage) {
    debug!("Login '{}': {}", login, stage);
}
