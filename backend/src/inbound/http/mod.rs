//! HTTP inbound adapter exposing the booking REST endpoints.
//!
//! ```text
//! POST   /api/clients
//! GET    /api/clients/{id}/trips
//! PUT    /api/clients/{id}/trips/{tripId}
//! DELETE /api/clients/{id}/trips/{tripId}
//! GET    /api/trips
//! ```

use actix_web::web;

pub mod clients;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod trips;
pub mod validation;

pub use error::ApiResult;

/// Register the `/api` scope with its handlers and extractor error handlers.
///
/// The caller supplies [`state::HttpState`] as app data.
///
/// # Examples
/// ```no_run
/// use actix_web::{App, web};
/// use booking::inbound::http::{configure_api, state::HttpState};
///
/// fn app(state: web::Data<HttpState>) {
///     let _app = App::new().app_data(state).configure(configure_api);
/// }
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(validation::json_error_handler))
            .app_data(web::PathConfig::default().error_handler(validation::path_error_handler))
            .service(clients::create_client)
            .service(clients::list_client_trips)
            .service(clients::register_for_trip)
            .service(clients::cancel_registration)
            .service(trips::list_trips),
    );
}
