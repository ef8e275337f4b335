pub mod arkesel;

use async_trait::async_trait;

use crate::models::Credentials;

#[async_trait]
pub trait MessagingProvider: Send + Sync {
    /// Sends one SMS. `Ok` only when the gateway accepted the message.
    async fn send_message(
        &self,
        credentials: &Credentials,
        to: &str,
        body: &str,
    ) -> anyhow::Result<()>;
}
