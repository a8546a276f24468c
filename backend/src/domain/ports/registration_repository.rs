//! Port for registration persistence.
//!
//! Adapters own atomicity: [`RegistrationRepository::insert_within_capacity`]
//! must read the trip limit, count registrations and insert as one unit so
//! two concurrent registrations cannot both take the last place.

use async_trait::async_trait;

use crate::domain::{CapacityReached, Registration, RegistrationKey};

use super::define_port_error;

define_port_error! {
    /// Errors raised by registration repository adapters.
    pub enum RegistrationRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "registration repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "registration repository query failed: {message}",
        /// The trip vanished between the existence check and the insert.
        TripNotFound { trip_id: i32 } => "trip {trip_id} not found",
        /// The trip is already full.
        CapacityReached { max_people: u32, registered: u64 } =>
            "trip is full: {registered} of {max_people} places taken",
        /// The client already holds a registration for the trip.
        AlreadyRegistered { client_id: i32, trip_id: i32 } =>
            "client {client_id} is already registered for trip {trip_id}",
    }
}

impl From<CapacityReached> for RegistrationRepositoryError {
    fn from(value: CapacityReached) -> Self {
        Self::capacity_reached(value.max_people, value.registered)
    }
}

/// Port for creating, checking and removing registrations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Report whether a registration exists for the pair.
    async fn exists(&self, key: RegistrationKey) -> Result<bool, RegistrationRepositoryError>;

    /// Insert `registration` if the trip still has a free place.
    ///
    /// The capacity check uses [`crate::domain::TripCapacity::try_admit`]
    /// and runs atomically with the insert.
    async fn insert_within_capacity(
        &self,
        registration: &Registration,
    ) -> Result<(), RegistrationRepositoryError>;

    /// Delete the registration and return the number of rows removed.
    async fn delete(&self, key: RegistrationKey) -> Result<u64, RegistrationRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TripCapacity;
    use rstest::rstest;

    #[rstest]
    fn capacity_reached_converts_from_domain_check() {
        let reached = TripCapacity::new(2).try_admit(2).expect_err("full");
        assert_eq!(
            RegistrationRepositoryError::from(reached),
            RegistrationRepositoryError::CapacityReached {
                max_people: 2,
                registered: 2
            }
        );
    }
}
