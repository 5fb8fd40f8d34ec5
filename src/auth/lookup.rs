//! Credential lookup client
//!
//! One request/response exchange per lookup: the request goes onto a bounded
//! queue together with a reply channel, and a responder task answers it from a
//! [`CredentialSource`]. Transport failures are reported, never retried.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::timeout;

use super::credentials::{CredentialSource, InMemoryCredentialStore};
use super::models::StoredCredential;
use super::results::OperationOutcome;
use crate::error::InfrastructureError;

/// Fetches stored credential material for a login identifier.
///
/// `Ok` carries the store's answer, found or not; `Err` means the exchange
/// itself failed.
#[async_trait]
pub trait CredentialLookup: Send + Sync {
    async fn fetch(
        &self,
        login_data: &str,
    ) -> Result<OperationOutcome<StoredCredential>, InfrastructureError>;
}

/// Request message sent to the credential responder.
#[derive(Debug)]
pub struct CredentialRequest {
    pub login_data: String,
    pub reply: oneshot::Sender<OperationOutcome<StoredCredential>>,
}

/// Creates the request queue shared by clients and the responder.
pub fn credential_channel(
    capacity: usize,
) -> (
    mpsc::Sender<CredentialRequest>,
    mpsc::Receiver<CredentialRequest>,
) {
    mpsc::channel(capacity)
}

/// Spawns the responder answering queued requests until every sender is gone.
pub fn serve_credentials<S>(
    source: Arc<S>,
    mut requests: mpsc::Receiver<CredentialRequest>,
) -> JoinHandle<()>
where
    S: CredentialSource + 'static,
{
    tokio::spawn(async move {
        while let Some(request) = requests.recv().await {
            let outcome = source.find(&request.login_data);
            if request.reply.send(outcome).is_err() {
                debug!(
                    "Requester for '{}' went away before the reply",
                    request.login_data
                );
            }
        }
        info!("Credential responder stopped");
    })
}

/// Lookup client speaking to a responder over the request queue.
#[derive(Debug, Clone)]
pub struct ChannelCredentialClient {
    requests: mpsc::Sender<CredentialRequest>,
    timeout: Duration,
}

impl ChannelCredentialClient {
    pub fn new(requests: mpsc::Sender<CredentialRequest>, timeout: Duration) -> Self {
        Self { requests, timeout }
    }
}

#[async_trait]
impl CredentialLookup for ChannelCredentialClient {
    async fn fetch(
        &self,
        login_data: &str,
    ) -> Result<OperationOutcome<StoredCredential>, InfrastructureError> {
        let (reply, response) = oneshot::channel();
        let request = CredentialRequest {
            login_data: login_data.to_string(),
            reply,
        };

        let exchange = async {
            self.requests.send(request).await.map_err(|_| {
                InfrastructureError::LookupUnavailable("credential request queue closed".into())
            })?;
            response.await.map_err(|_| InfrastructureError::LookupDropped)
        };

        match timeout(self.timeout, exchange).await {
            Ok(result) => result,
            Err(_) => Err(InfrastructureError::LookupTimeout(self.timeout)),
        }
    }
}

/// Direct in-process lookup, for wiring without a responder task.
#[async_trait]
impl CredentialLookup for InMemoryCredentialStore {
    async fn fetch(
        &self,
        login_data: &str,
    ) -> Result<OperationOutcome<StoredCredential>, InfrastructureError> {
        Ok(self.find(login_data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::PasswordHasher;
    use uuid::Uuid;

    const TIMEOUT: Duration = Duration::from_millis(50);

    #[tokio::test]
    async fn test_fetch_through_responder() {
        let id = Uuid::new_v4();
        let store = InMemoryCredentialStore::new().with_user(
            id,
            "alice",
            "alice123",
            "s1",
            &PasswordHasher::default(),
        );
        let (tx, rx) = credential_channel(4);
        let _responder = serve_credentials(Arc::new(store), rx);
        let client = ChannelCredentialClient::new(tx, TIMEOUT);

        let found = client.fetch("alice").await.unwrap();
        assert_eq!(found.body().unwrap().user_id, id);

        let missing = client.fetch("bob").await.unwrap();
        assert!(!missing.is_success());
    }

    #[tokio::test]
    async fn test_sends_exactly_one_request() {
        let (tx, mut rx) = credential_channel(4);
        let client = ChannelCredentialClient::new(tx, TIMEOUT);

        let responder = tokio::spawn(async move {
            let request = rx.recv().await.unwrap();
            assert_eq!(request.login_data, "alice");
            let _ = request
                .reply
                .send(OperationOutcome::failure(vec!["nope".into()]));
            // Nothing else may arrive for this fetch.
            tokio::time::sleep(Duration::from_millis(10)).await;
            assert!(rx.try_recv().is_err());
        });

        let outcome = client.fetch("alice").await.unwrap();
        assert_eq!(outcome.errors(), ["nope"]);
        responder.await.unwrap();
    }

    #[tokio::test]
    async fn test_closed_queue_is_unavailable() {
        let (tx, rx) = credential_channel(4);
        drop(rx);
        let client = ChannelCredentialClient::new(tx, TIMEOUT);

        let err = client.fetch("alice").await.unwrap_err();
        assert!(matches!(err, InfrastructureError::LookupUnavailable(_)));
    }

    #[tokio::test]
    async fn test_dropped_reply() {
        let (tx, mut rx) = credential_channel(4);
        tokio::spawn(async move {
            let request = rx.recv().await.unwrap();
            drop(request);
        });
        let client = ChannelCredentialClient::new(tx, TIMEOUT);

        let err = client.fetch("alice").await.unwrap_err();
        assert_eq!(err, InfrastructureError::LookupDropped);
    }

    #[tokio::test]
    async fn test_silent_responder_times_out() {
        let (tx, _rx) = credential_channel(4);
        let client = ChannelCredentialClient::new(tx, TIMEOUT);

        let err = client.fetch("alice").await.unwrap_err();
        assert_eq!(err, InfrastructureError::LookupTimeout(TIMEOUT));
    }
}
