//! Domain primitives, services and ports.
//!
//! Purpose: define the booking model (clients, trips, registrations) and the
//! use cases that operate on it. Types validate on construction so adapters
//! and services can rely on their invariants.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Client, NewClient, Pesel, EmailAddress: client model.
//! - Trip, TripCapacity, TripWithCountries, ClientTrip: trip catalogue.
//! - Registration, RegistrationKey, RegistrationDate: registration records.
//! - ClientService, TripCatalogService, RegistrationService: driving port
//!   implementations.

pub mod client;
pub mod client_service;
pub mod error;
pub mod ports;
pub mod registration;
pub mod registration_service;
pub mod trace_id;
pub mod trip;
pub mod trip_catalog_service;

pub use self::client::{
    Client, ClientId, ClientValidationError, EmailAddress, MAX_TEXT_LENGTH, NewClient, PESEL_LENGTH,
    Pesel,
};
pub use self::client_service::ClientService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::registration::{
    Registration, RegistrationDate, RegistrationDateError, RegistrationKey,
};
pub use self::registration_service::RegistrationService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::trip::{
    CapacityReached, ClientTrip, Trip, TripCapacity, TripCountry, TripId, TripWithCountries,
    group_trip_countries,
};
pub use self::trip_catalog_service::TripCatalogService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use booking::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("client 7 not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
