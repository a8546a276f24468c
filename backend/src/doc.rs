//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every booking endpoint together with the request and
//! response bodies they exchange. Domain errors are described through the
//! wrapper schemas in [`crate::inbound::http::schemas`] so the domain stays
//! free of utoipa derives.
//!
//! The document backs Swagger UI in debug builds and is printed by the
//! `openapi-dump` binary.

use crate::inbound::http::clients::{
    AcknowledgementBody, ClientResponseBody, ClientTripResponseBody, CreateClientRequestBody,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::trips::TripResponseBody;
use utoipa::OpenApi;

/// OpenAPI document for the booking REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trip booking API",
        description = "Clients, trips with their countries, and capacity-checked registrations."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::clients::create_client,
        crate::inbound::http::clients::list_client_trips,
        crate::inbound::http::clients::register_for_trip,
        crate::inbound::http::clients::cancel_registration,
        crate::inbound::http::trips::list_trips,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateClientRequestBody,
        ClientResponseBody,
        ClientTripResponseBody,
        AcknowledgementBody,
        TripResponseBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "clients", description = "Client creation and client trip listings"),
        (name = "registrations", description = "Registering for and cancelling trips"),
        (name = "trips", description = "Trip catalogue"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
