//! Login data model
//!
//! Request, stored credential and result types passed between the stages.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A login attempt as received from the transport layer.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    login_data: String,
    password: String,
}

impl LoginRequest {
    pub fn new(login_data: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login_data: login_data.into(),
            password: password.into(),
        }
    }

    pub fn login_data(&self) -> &str {
        &self.login_data
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("login_data", &self.login_data)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Credential material owned by the credential store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCredential {
    pub user_id: Uuid,
    pub password_hash: String,
    pub salt: String,
    pub login_data: String,
}

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    pub user_id: Uuid,
    pub token: String,
}
