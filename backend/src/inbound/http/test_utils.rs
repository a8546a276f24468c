//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;

use crate::domain::ports::{
    MockClientCommand, MockClientTripsQuery, MockRegistrationCommand, MockTripCatalogQuery,
};
use crate::inbound::http::state::HttpState;

/// Mocked driving ports; set expectations on the fields you need.
#[derive(Default)]
pub struct MockPorts {
    pub clients: MockClientCommand,
    pub client_trips: MockClientTripsQuery,
    pub trips: MockTripCatalogQuery,
    pub registrations: MockRegistrationCommand,
}

impl MockPorts {
    /// Wrap the mocks into handler state.
    pub fn into_state(self) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(
            Arc::new(self.clients),
            Arc::new(self.client_trips),
            Arc::new(self.trips),
            Arc::new(self.registrations),
        ))
    }
}
