//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the booking repository ports backed by
//! PostgreSQL through `diesel-async` and `bb8` pooling.
//!
//! - **Thin adapters**: repositories translate between Diesel rows and domain
//!   types. The only rule enforced here is the transactional capacity check,
//!   which must run next to the insert.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: database failures become port error variants.
//!
//! # Example
//!
//! ```no_run
//! use booking::outbound::persistence::{DbPool, DieselClientRepository, PoolConfig};
//!
//! # async fn build() -> Result<(), booking::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/booking")).await?;
//! let clients = DieselClientRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_client_repository;
mod diesel_error_mapping;
mod diesel_registration_repository;
mod diesel_trip_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_client_repository::DieselClientRepository;
pub use diesel_registration_repository::DieselRegistrationRepository;
pub use diesel_trip_repository::DieselTripRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
