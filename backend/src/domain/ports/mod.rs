//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`*Command`, `*Query`) are the use cases inbound adapters
//! call. Driven ports (`*Repository`) are implemented by outbound adapters
//! and expose typed errors instead of `anyhow`-style catch-alls.

mod macros;
pub(crate) use macros::define_port_error;

mod client_command;
mod client_repository;
mod client_trips_query;
mod registration_command;
mod registration_repository;
mod trip_catalog_query;
mod trip_repository;

pub use client_command::ClientCommand;
#[cfg(test)]
pub use client_command::MockClientCommand;
#[cfg(test)]
pub use client_repository::MockClientRepository;
pub use client_repository::{ClientRepository, ClientRepositoryError};
pub use client_trips_query::ClientTripsQuery;
#[cfg(test)]
pub use client_trips_query::MockClientTripsQuery;
#[cfg(test)]
pub use registration_command::MockRegistrationCommand;
pub use registration_command::RegistrationCommand;
#[cfg(test)]
pub use registration_repository::MockRegistrationRepository;
pub use registration_repository::{RegistrationRepository, RegistrationRepositoryError};
#[cfg(test)]
pub use trip_catalog_query::MockTripCatalogQuery;
pub use trip_catalog_query::TripCatalogQuery;
#[cfg(test)]
pub use trip_repository::MockTripRepository;
pub use trip_repository::{TripRepository, TripRepositoryError};
