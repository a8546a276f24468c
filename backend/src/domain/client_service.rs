//! Client domain services.
//!
//! Implements client creation and the per-client trip listing on top of the
//! client and trip repository ports.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    ClientCommand, ClientRepository, ClientRepositoryError, ClientTripsQuery, TripRepository,
    TripRepositoryError,
};
use crate::domain::{Client, ClientId, ClientTrip, Error, NewClient};

fn map_client_repository_error(error: ClientRepositoryError) -> Error {
    match error {
        ClientRepositoryError::Connection { message } => {
            Error::internal(format!("client repository unavailable: {message}"))
        }
        ClientRepositoryError::Query { message } => {
            Error::internal(format!("client repository error: {message}"))
        }
        ClientRepositoryError::DuplicatePesel { pesel } => {
            Error::conflict(format!("a client with pesel {pesel} already exists"))
        }
    }
}

pub(crate) fn map_trip_repository_error(error: TripRepositoryError) -> Error {
    match error {
        TripRepositoryError::Connection { message } => {
            Error::internal(format!("trip repository unavailable: {message}"))
        }
        TripRepositoryError::Query { message } => {
            Error::internal(format!("trip repository error: {message}"))
        }
    }
}

/// Client service implementing [`ClientCommand`] and [`ClientTripsQuery`].
#[derive(Clone)]
pub struct ClientService<C, T> {
    clients: Arc<C>,
    trips: Arc<T>,
}

impl<C, T> ClientService<C, T> {
    /// Create a service over the client and trip repositories.
    pub fn new(clients: Arc<C>, trips: Arc<T>) -> Self {
        Self { clients, trips }
    }
}

#[async_trait]
impl<C, T> ClientCommand for ClientService<C, T>
where
    C: ClientRepository,
    T: TripRepository,
{
    async fn create_client(&self, client: NewClient) -> Result<Client, Error> {
        let existing = self
            .clients
            .find_by_pesel(client.pesel())
            .await
            .map_err(map_client_repository_error)?;
        if existing.is_some() {
            return Err(Error::conflict(format!(
                "a client with pesel {} already exists",
                client.pesel()
            )));
        }

        // A concurrent insert of the same pesel surfaces as DuplicatePesel.
        let created = self
            .clients
            .insert(&client)
            .await
            .map_err(map_client_repository_error)?;
        info!(client_id = %created.id(), "client created");
        Ok(created)
    }
}

#[async_trait]
impl<C, T> ClientTripsQuery for ClientService<C, T>
where
    C: ClientRepository,
    T: TripRepository,
{
    async fn list_client_trips(&self, client_id: ClientId) -> Result<Vec<ClientTrip>, Error> {
        let known = self
            .clients
            .exists(client_id)
            .await
            .map_err(map_client_repository_error)?;
        if !known {
            return Err(Error::not_found(format!("client {client_id} not found")));
        }

        self.trips
            .list_for_client(client_id)
            .await
            .map_err(map_trip_repository_error)
    }
}

#[cfg(test)]
#[path = "client_service_tests.rs"]
mod tests;
