//! Registration domain service.
//!
//! Both operations first confirm that the client and the trip exist so the
//! caller receives `NotFound` before any write is attempted. The capacity
//! check itself runs inside the repository, atomically with the insert.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{info, warn};

use crate::domain::client_service::map_trip_repository_error;
use crate::domain::ports::{
    ClientRepository, ClientRepositoryError, RegistrationCommand, RegistrationRepository,
    RegistrationRepositoryError, TripRepository,
};
use crate::domain::{Error, Registration, RegistrationDate, RegistrationKey};

fn map_client_lookup_error(error: ClientRepositoryError) -> Error {
    Error::internal(format!("client lookup failed: {error}"))
}

fn map_registration_error(key: RegistrationKey, error: RegistrationRepositoryError) -> Error {
    match error {
        RegistrationRepositoryError::Connection { message } => {
            Error::internal(format!("registration repository unavailable: {message}"))
        }
        RegistrationRepositoryError::Query { message } => {
            Error::internal(format!("registration repository error: {message}"))
        }
        RegistrationRepositoryError::TripNotFound { trip_id } => {
            Error::not_found(format!("trip {trip_id} not found"))
        }
        RegistrationRepositoryError::CapacityReached {
            max_people,
            registered,
        } => Error::capacity_exceeded(format!(
            "trip {} is full: {registered} of {max_people} places taken",
            key.trip_id
        )),
        RegistrationRepositoryError::AlreadyRegistered { client_id, trip_id } => Error::conflict(
            format!("client {client_id} is already registered for trip {trip_id}"),
        ),
    }
}

/// Service implementing [`RegistrationCommand`].
#[derive(Clone)]
pub struct RegistrationService<C, T, R> {
    clients: Arc<C>,
    trips: Arc<T>,
    registrations: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<C, T, R> RegistrationService<C, T, R> {
    /// Create a registration service.
    ///
    /// `clock` supplies the registration date.
    pub fn new(
        clients: Arc<C>,
        trips: Arc<T>,
        registrations: Arc<R>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            clients,
            trips,
            registrations,
            clock,
        }
    }

    fn today(&self) -> Result<RegistrationDate, Error> {
        RegistrationDate::from_date(self.clock.utc().date_naive())
            .map_err(|err| Error::internal(format!("cannot encode registration date: {err}")))
    }
}

impl<C, T, R> RegistrationService<C, T, R>
where
    C: ClientRepository,
    T: TripRepository,
{
    async fn ensure_parties_exist(&self, key: RegistrationKey) -> Result<(), Error> {
        let client_known = self
            .clients
            .exists(key.client_id)
            .await
            .map_err(map_client_lookup_error)?;
        if !client_known {
            return Err(Error::not_found(format!("client {} not found", key.client_id)));
        }

        let trip_known = self
            .trips
            .exists(key.trip_id)
            .await
            .map_err(map_trip_repository_error)?;
        if !trip_known {
            return Err(Error::not_found(format!("trip {} not found", key.trip_id)));
        }
        Ok(())
    }
}

#[async_trait]
impl<C, T, R> RegistrationCommand for RegistrationService<C, T, R>
where
    C: ClientRepository,
    T: TripRepository,
    R: RegistrationRepository,
{
    async fn register(&self, key: RegistrationKey) -> Result<Registration, Error> {
        self.ensure_parties_exist(key).await?;

        let registration = Registration::unpaid(key, self.today()?);
        self.registrations
            .insert_within_capacity(&registration)
            .await
            .map_err(|err| map_registration_error(key, err))?;

        info!(%key, registered_at = %registration.registered_at, "registration created");
        Ok(registration)
    }

    async fn cancel(&self, key: RegistrationKey) -> Result<(), Error> {
        self.ensure_parties_exist(key).await?;

        let registered = self
            .registrations
            .exists(key)
            .await
            .map_err(|err| map_registration_error(key, err))?;
        if !registered {
            return Err(Error::not_found(format!("registration for {key} not found")));
        }

        let removed = self
            .registrations
            .delete(key)
            .await
            .map_err(|err| map_registration_error(key, err))?;
        if removed == 0 {
            // Lost a race with a concurrent cancel between the check and the
            // delete.
            warn!(%key, "registration disappeared before delete");
            return Err(Error::internal(format!(
                "failed to delete registration for {key}"
            )));
        }

        info!(%key, "registration cancelled");
        Ok(())
    }
}

#[cfg(test)]
#[path = "registration_service_tests.rs"]
mod tests;
