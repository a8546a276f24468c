//! Driving port for client creation.

use async_trait::async_trait;

use crate::domain::{Client, Error, NewClient};

/// Use-case port for registering a new client.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientCommand: Send + Sync {
    /// Create a client; fails with `Conflict` when the pesel is taken.
    async fn create_client(&self, client: NewClient) -> Result<Client, Error>;
}
