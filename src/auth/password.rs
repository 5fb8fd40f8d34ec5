//! Password hashing and verification
//!
//! Hash = lower-case hex SHA-512 of `salt ‖ login ‖ password ‖ pepper`.

use sha2::{Digest, Sha512};
use subtle::ConstantTimeEq;

use super::models::{LoginRequest, StoredCredential};

/// Salted password hasher. Stateless apart from the service-wide pepper.
#[derive(Clone, Default)]
pub struct PasswordHasher {
    pepper: String,
}

impl PasswordHasher {
    pub fn new(pepper: impl Into<String>) -> Self {
        Self {
            pepper: pepper.into(),
        }
    }

    /// Deterministic hash of a password for one login and salt.
    pub fn hash(&self, login_data: &str, salt: &str, password: &str) -> String {
        let mut hasher = Sha512::new();
        hasher.update(salt.as_bytes());
        hasher.update(login_data.as_bytes());
        hasher.update(password.as_bytes());
        hasher.update(self.pepper.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Recomputes the hash with the stored salt and compares in constant time.
    pub fn verify(&self, request: &LoginRequest, stored: &StoredCredential) -> bool {
        let computed = self.hash(request.login_data(), &stored.salt, request.password());
        computed
            .as_bytes()
            .ct_eq(stored.password_hash.as_bytes())
            .into()
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn stored(hasher: &PasswordHasher) -> StoredCredential {
        StoredCredential {
            user_id: Uuid::new_v4(),
            password_hash: hasher.hash("User_login_example", "Example_Salt1", "Example_1234"),
            salt: "Example_Salt1".to_string(),
            login_data: "User_login_example".to_string(),
        }
    }

    #[test]
    fn test_hash_is_deterministic() {
        let hasher = PasswordHasher::default();
        let a = hasher.hash("User_login_example", "Example_Salt1", "Example_1234");
        let b = hasher.hash("User_login_example", "Example_Salt1", "Example_1234");
        assert_eq!(a, b);
        assert_eq!(a.len(), 128);
    }

    #[test]
    fn test_each_input_changes_hash() {
        let hasher = PasswordHasher::default();
        let base = hasher.hash("login", "salt", "password");
        assert_ne!(base, hasher.hash("login2", "salt", "password"));
        assert_ne!(base, hasher.hash("login", "salt2", "password"));
        assert_ne!(base, hasher.hash("login", "salt", "password2"));
    }

    #[test]
    fn test_pepper_changes_hash() {
        let plain = PasswordHasher::default().hash("login", "salt", "password");
        let peppered = PasswordHasher::new("pepper").hash("login", "salt", "password");
        assert_ne!(plain, peppered);
    }

    #[test]
    fn test_verify_matching_password() {
        let hasher = PasswordHasher::default();
        let request = LoginRequest::new("User_login_example", "Example_1234");
        assert!(hasher.verify(&request, &stored(&hasher)));
    }

    #[test]
    fn test_verify_wrong_password() {
        let hasher = PasswordHasher::default();
        let request = LoginRequest::new("User_login_example", "Example");
        assert!(!hasher.verify(&request, &stored(&hasher)));
    }

    #[test]
    fn test_verify_uses_stored_salt() {
        let hasher = PasswordHasher::default();
        let mut credential = stored(&hasher);
        credential.salt = "Other_Salt".to_string();
        let request = LoginRequest::new("User_login_example", "Example_1234");
        assert!(!hasher.verify(&request, &credential));
    }
}
