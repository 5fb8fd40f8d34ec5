//! Authentication system
//!
//! Login flow: request validation, credential lookup, password verification
//! and session token issuance.

pub mod command;
pub mod credentials;
pub mod lookup;
pub mod models;
pub mod password;
pub mod results;
pub mod token;
pub mod validator;

pub use command::{LoginCommand, LoginStage};
pub use credentials::{CredentialSource, InMemoryCredentialStore};
pub use lookup::{
    ChannelCredentialClient, CredentialLookup, CredentialRequest, credential_channel,
    serve_credentials,
};
pub use models::{LoginRequest, LoginResult, StoredCredential};
pub use password::PasswordHasher;
pub use results::{OperationOutcome, ValidationOutcome};
pub use token::{DigestTokenIssuer, TokenIssuer};
pub use validator::{LoginValidator, RuleValidator};
