//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    ClientCommand, ClientRepository, ClientTripsQuery, RegistrationCommand,
    RegistrationRepository, TripCatalogQuery, TripRepository,
};
use crate::domain::{ClientService, RegistrationService, TripCatalogService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub clients: Arc<dyn ClientCommand>,
    pub client_trips: Arc<dyn ClientTripsQuery>,
    pub trips: Arc<dyn TripCatalogQuery>,
    pub registrations: Arc<dyn RegistrationCommand>,
}

impl HttpState {
    /// Construct state from the driving ports.
    pub fn new(
        clients: Arc<dyn ClientCommand>,
        client_trips: Arc<dyn ClientTripsQuery>,
        trips: Arc<dyn TripCatalogQuery>,
        registrations: Arc<dyn RegistrationCommand>,
    ) -> Self {
        Self {
            clients,
            client_trips,
            trips,
            registrations,
        }
    }

    /// Wire the domain services over a set of driven adapters.
    ///
    /// The same repositories back every service; `clock` dates new
    /// registrations.
    pub fn from_repositories<C, T, R>(
        clients: Arc<C>,
        trips: Arc<T>,
        registrations: Arc<R>,
        clock: Arc<dyn Clock>,
    ) -> Self
    where
        C: ClientRepository + 'static,
        T: TripRepository + 'static,
        R: RegistrationRepository + 'static,
    {
        let client_service = Arc::new(ClientService::new(clients.clone(), trips.clone()));
        Self::new(
            client_service.clone(),
            client_service,
            Arc::new(TripCatalogService::new(trips.clone())),
            Arc::new(RegistrationService::new(
                clients,
                trips,
                registrations,
                clock,
            )),
        )
    }
}
