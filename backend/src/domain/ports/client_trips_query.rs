//! Driving port for listing a client's trips.

use async_trait::async_trait;

use crate::domain::{ClientId, ClientTrip, Error};

/// Use-case port for reading the trips a client is registered for.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientTripsQuery: Send + Sync {
    /// List the client's trips; fails with `NotFound` for unknown clients.
    async fn list_client_trips(&self, client_id: ClientId) -> Result<Vec<ClientTrip>, Error>;
}
