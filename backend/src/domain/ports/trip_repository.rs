//! Port for trip catalogue reads.

use async_trait::async_trait;

use crate::domain::{ClientId, ClientTrip, TripCountry, TripId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by trip repository adapters.
    pub enum TripRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "trip repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "trip repository query failed: {message}",
    }
}

/// Read-only access to trips, their countries and client registrations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Report whether a trip with this identifier exists.
    async fn exists(&self, id: TripId) -> Result<bool, TripRepositoryError>;

    /// Every (trip, country) pair of the inner join, ordered by trip start
    /// date, latest first. Trips without a country do not appear.
    async fn list_with_countries(&self) -> Result<Vec<TripCountry>, TripRepositoryError>;

    /// Trips the client is registered for, with registration metadata.
    async fn list_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<ClientTrip>, TripRepositoryError>;
}
