//! Driving port for registering clients on trips and cancelling
//! registrations.

use async_trait::async_trait;

use crate::domain::{Error, Registration, RegistrationKey};

/// Use-case port for the registration lifecycle.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationCommand: Send + Sync {
    /// Register the client for the trip, enforcing the trip's capacity.
    async fn register(&self, key: RegistrationKey) -> Result<Registration, Error>;

    /// Remove an existing registration.
    async fn cancel(&self, key: RegistrationKey) -> Result<(), Error>;
}
