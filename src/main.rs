//! RAX Login - Entry Point
//!
//! Runs one login attempt against the credential store seeded from config.toml.

use std::process::ExitCode;
use std::sync::Arc;

use log::{error, info};

use rax_login::auth::{
    ChannelCredentialClient, DigestTokenIssuer, InMemoryCredentialStore, LoginCommand,
    LoginRequest, PasswordHasher, RuleValidator, credential_channel, serve_credentials,
};
use rax_login::config::AuthConfig;
use rax_login::error::handlers::{error_to_status_code, handle_error, public_message};
use rax_login::utils::logging::setup_logging;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AuthConfig::load() {
        Ok(config) => config,
        Err(e) => {
            setup_logging("info");
            error!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    setup_logging(&config.log_level);

    let mut args = std::env::args().skip(1);
    let (Some(login), Some(password)) = (args.next(), args.next()) else {
        eprintln!("usage: rax-login <login> <password>");
        return ExitCode::from(2);
    };

    let hasher = PasswordHasher::new(config.hashing.pepper.clone());
    let store = InMemoryCredentialStore::from_seed(&config.users, &hasher);
    info!("Serving {} configured credential(s)", store.len());

    let (requests, receiver) = credential_channel(config.lookup.channel_capacity);
    let _responder = serve_credentials(Arc::new(store), receiver);

    let command = LoginCommand::new(
        Arc::new(RuleValidator::new(config.validation.clone())),
        Arc::new(ChannelCredentialClient::new(requests, config.lookup.request_timeout())),
        hasher,
        Arc::new(DigestTokenIssuer::new(config.token.secret.clone())),
    );

    let request = LoginRequest::new(login, password);
    match command.execute(&request).await {
        Ok(result) => {
            info!("Login '{}' succeeded", request.login_data());
            println!("user_id={} token={}", result.user_id, result.token);
            ExitCode::SUCCESS
        }
        Err(err) => {
            handle_error(request.login_data(), &err);
            println!(
                "{} {}",
                error_to_status_code(&err),
                public_message(&err, config.exposure.collapse_denials)
            );
            ExitCode::FAILURE
        }
    }
}
