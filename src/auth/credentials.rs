//! Credential storage
//!
//! In-process credential source answering lookup requests. Entries are fixed
//! at construction; the store is never mutated while serving.

use std::collections::HashMap;

use log::debug;
use uuid::Uuid;

use super::models::StoredCredential;
use super::password::PasswordHasher;
use super::results::OperationOutcome;
use crate::config::SeedUser;

pub const NOT_FOUND_MESSAGE: &str = "User login not found";

/// Anything able to answer a credential request for a login identifier.
pub trait CredentialSource: Send + Sync {
    fn find(&self, login_data: &str) -> OperationOutcome<StoredCredential>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryCredentialStore {
    credentials: HashMap<String, StoredCredential>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an already-hashed credential, keyed by its login identifier.
    pub fn with_credential(mut self, credential: StoredCredential) -> Self {
        self.credentials.insert(credential.login_data.clone(), credential);
        self
    }

    /// Hashes a plaintext password and adds the resulting credential.
    pub fn with_user(
        self,
        user_id: Uuid,
        login_data: &str,
        password: &str,
        salt: &str,
        hasher: &PasswordHasher,
    ) -> Self {
        self.with_credential(StoredCredential {
            user_id,
            password_hash: hasher.hash(login_data, salt, password),
            salt: salt.to_string(),
            login_data: login_data.to_string(),
        })
    }

    /// Builds a store from configured users. Users without an id get a fresh one.
    pub fn from_seed(users: &[SeedUser], hasher: &PasswordHasher) -> Self {
        users.iter().fold(Self::new(), |store, user| {
            store.with_user(
                user.user_id.unwrap_or_else(Uuid::new_v4),
                &user.login,
                &user.password,
                &user.salt,
                hasher,
            )
        })
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

impl CredentialSource for InMemoryCredentialStore {
    fn find(&self, login_data: &str) -> OperationOutcome<StoredCredential> {
        match self.credentials.get(login_data) {
            Some(credential) => OperationOutcome::success(credential.clone()),
            None => {
                debug!("No credential stored for '{}'", login_data);
                OperationOutcome::failure(vec![NOT_FOUND_MESSAGE.to_string()])
            }
        }
    }
}
