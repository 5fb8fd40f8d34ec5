pub mod auth;
pub mod config;
pub mod error;
pub mod utils;

pub use auth::{LoginCommand, LoginRequest, LoginResult};
pub use config::AuthConfig;
pub use error::{InfrastructureError, LoginError};
