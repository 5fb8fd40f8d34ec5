//! Session token issuance

use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use crate::error::InfrastructureError;

type HmacSha256 = Hmac<Sha256>;

/// Mints an opaque session token for a verified user.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user_id: Uuid) -> Result<String, InfrastructureError>;
}

/// Issues `<nonce>.<hmac-sha256(secret; user, nonce)>` tokens.
pub struct DigestTokenIssuer {
    secret: String,
}

impl DigestTokenIssuer {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Hex HMAC tag binding a user to a nonce.
    fn sign(&self, user_id: Uuid, nonce: &str) -> Result<String, InfrastructureError> {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|e| InfrastructureError::TokenIssuance(e.to_string()))?;
        mac.update(user_id.as_bytes());
        mac.update(nonce.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

impl TokenIssuer for DigestTokenIssuer {
    fn issue(&self, user_id: Uuid) -> Result<String, InfrastructureError> {
        let nonce = Uuid::new_v4().simple().to_string();
        let tag = self.sign(user_id, &nonce)?;
        Ok(format!("{}.{}", nonce, tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issues_distinct_tokens() {
        let issuer = DigestTokenIssuer::new("secret");
        let user = Uuid::new_v4();
        let first = issuer.issue(user).unwrap();
        let second = issuer.issue(user).unwrap();
        assert_ne!(first, second);
        assert!(first.contains('.'));
    }

    #[test]
    fn test_token_does_not_embed_secret() {
        let issuer = DigestTokenIssuer::new("top-secret");
        let token = issuer.issue(Uuid::new_v4()).unwrap();
        assert!(!token.contains("top-secret"));
    }

    #[test]
    fn test_tag_depends_on_secret() {
        let user = Uuid::new_v4();
        let nonce = "0123456789abcdef";
        let a = DigestTokenIssuer::new("secret-a").sign(user, nonce).unwrap();
        let b = DigestTokenIssuer::new("secret-b").sign(user, nonce).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, DigestTokenIssuer::new("secret-a").sign(user, nonce).unwrap());
    }

    #[test]
    fn test_token_tag_verifies_against_nonce() {
        let issuer = DigestTokenIssuer::new("secret");
        let user = Uuid::new_v4();
        let token = issuer.issue(user).unwrap();
        let (nonce, tag) = token.split_once('.').unwrap();
        assert_eq!(tag, issuer.sign(user, nonce).unwrap());
        assert_eq!(tag.len(), 64);
    }
}
