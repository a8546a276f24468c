//! Builds the HTTP state from the Diesel-backed repositories.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use booking::inbound::http::state::HttpState;
use booking::outbound::persistence::{
    DbPool, DieselClientRepository, DieselRegistrationRepository, DieselTripRepository,
};

/// Wire every service over repositories sharing `pool`.
pub(super) fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    web::Data::new(HttpState::from_repositories(
        Arc::new(DieselClientRepository::new(pool.clone())),
        Arc::new(DieselTripRepository::new(pool.clone())),
        Arc::new(DieselRegistrationRepository::new(pool.clone())),
        Arc::new(DefaultClock),
    ))
}
