//! Client HTTP handlers.
//!
//! ```text
//! POST   /api/clients
//! GET    /api/clients/{id}/trips
//! PUT    /api/clients/{id}/trips/{tripId}
//! DELETE /api/clients/{id}/trips/{tripId}
//! ```

use actix_web::{delete, get, post, put, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Client, ClientId, ClientTrip, NewClient, RegistrationKey, TripId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, client_validation_error, require_field};

/// Request payload for creating a client.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequestBody {
    #[schema(example = "Ann")]
    pub first_name: Option<String>,
    #[schema(example = "Lee")]
    pub last_name: Option<String>,
    #[schema(format = "email")]
    pub email: Option<String>,
    pub telephone: Option<String>,
    #[schema(example = "12345678901", min_length = 11, max_length = 11)]
    pub pesel: Option<String>,
}

/// Created client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponseBody {
    pub id_client: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub pesel: String,
}

impl From<Client> for ClientResponseBody {
    fn from(value: Client) -> Self {
        Self {
            id_client: value.id().get(),
            first_name: value.first_name().to_owned(),
            last_name: value.last_name().to_owned(),
            email: value.email().map(|email| email.as_str().to_owned()),
            telephone: value.telephone().map(str::to_owned),
            pesel: value.pesel().as_str().to_owned(),
        }
    }
}

/// Trip a client is registered for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientTripResponseBody {
    pub id_trip: i32,
    pub name: String,
    pub description: String,
    #[schema(value_type = String, format = "date")]
    pub date_from: NaiveDate,
    #[schema(value_type = String, format = "date")]
    pub date_to: NaiveDate,
    pub max_people: u32,
    /// Registration day encoded as `YYYYMMDD`.
    #[schema(example = 20261019)]
    pub registered_at: i32,
    /// Payment day encoded as `YYYYMMDD`, if paid.
    pub payment_date: Option<i32>,
}

impl From<ClientTrip> for ClientTripResponseBody {
    fn from(value: ClientTrip) -> Self {
        let ClientTrip {
            trip,
            registered_at,
            payment_date,
        } = value;
        Self {
            id_trip: trip.id.get(),
            name: trip.name,
            description: trip.description,
            date_from: trip.date_from,
            date_to: trip.date_to,
            max_people: trip.capacity.max_people(),
            registered_at: registered_at.get(),
            payment_date: payment_date.map(|date| date.get()),
        }
    }
}

/// Plain confirmation returned by registration endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct AcknowledgementBody {
    pub message: String,
}

fn parse_new_client(payload: CreateClientRequestBody) -> ApiResult<NewClient> {
    let first_name = require_field(payload.first_name, FieldName::new("firstName"))?;
    let last_name = require_field(payload.last_name, FieldName::new("lastName"))?;
    let pesel = require_field(payload.pesel, FieldName::new("pesel"))?;
    NewClient::try_from_parts(
        &first_name,
        &last_name,
        payload.email.as_deref(),
        payload.telephone.as_deref(),
        &pesel,
    )
    .map_err(client_validation_error)
}

fn registration_key(path: (i32, i32)) -> RegistrationKey {
    let (client_id, trip_id) = path;
    RegistrationKey::new(ClientId::new(client_id), TripId::new(trip_id))
}

/// Create a client.
///
/// Fails with `conflict` when another client already holds the pesel.
#[utoipa::path(
    post,
    path = "/api/clients",
    request_body = CreateClientRequestBody,
    responses(
        (status = 200, description = "Client created", body = ClientResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Pesel already registered", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["clients"],
    operation_id = "createClient"
)]
#[post("/clients")]
pub async fn create_client(
    state: web::Data<HttpState>,
    payload: web::Json<CreateClientRequestBody>,
) -> ApiResult<web::Json<ClientResponseBody>> {
    let client = parse_new_client(payload.into_inner())?;
    let created = state.clients.create_client(client).await?;
    Ok(web::Json(ClientResponseBody::from(created)))
}

/// List the trips a client is registered for.
#[utoipa::path(
    get,
    path = "/api/clients/{id}/trips",
    params(("id" = i32, Path, description = "Client identifier")),
    responses(
        (status = 200, description = "Client trips", body = [ClientTripResponseBody]),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Client not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["clients"],
    operation_id = "listClientTrips"
)]
#[get("/clients/{id}/trips")]
pub async fn list_client_trips(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Vec<ClientTripResponseBody>>> {
    let client_id = ClientId::new(path.into_inner());
    let trips = state.client_trips.list_client_trips(client_id).await?;
    Ok(web::Json(
        trips.into_iter().map(ClientTripResponseBody::from).collect(),
    ))
}

/// Register a client for a trip.
#[utoipa::path(
    put,
    path = "/api/clients/{id}/trips/{tripId}",
    params(
        ("id" = i32, Path, description = "Client identifier"),
        ("tripId" = i32, Path, description = "Trip identifier")
    ),
    responses(
        (status = 200, description = "Client registered", body = AcknowledgementBody),
        (status = 400, description = "Trip is full or identifier invalid", body = ErrorSchema),
        (status = 404, description = "Client or trip not found", body = ErrorSchema),
        (status = 409, description = "Client already registered", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["registrations"],
    operation_id = "registerForTrip"
)]
#[put("/clients/{id}/trips/{tripId}")]
pub async fn register_for_trip(
    state: web::Data<HttpState>,
    path: web::Path<(i32, i32)>,
) -> ApiResult<web::Json<AcknowledgementBody>> {
    let key = registration_key(path.into_inner());
    state.registrations.register(key).await?;
    Ok(web::Json(AcknowledgementBody {
        message: format!("registered {key}"),
    }))
}

/// Cancel a registration.
#[utoipa::path(
    delete,
    path = "/api/clients/{id}/trips/{tripId}",
    params(
        ("id" = i32, Path, description = "Client identifier"),
        ("tripId" = i32, Path, description = "Trip identifier")
    ),
    responses(
        (status = 200, description = "Registration cancelled", body = AcknowledgementBody),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Client, trip or registration not found", body = ErrorSchema),
        (status = 500, description = "Delete failed unexpectedly", body = ErrorSchema)
    ),
    tags = ["registrations"],
    operation_id = "cancelRegistration"
)]
#[delete("/clients/{id}/trips/{tripId}")]
pub async fn cancel_registration(
    state: web::Data<HttpState>,
    path: web::Path<(i32, i32)>,
) -> ApiResult<web::Json<AcknowledgementBody>> {
    let key = registration_key(path.into_inner());
    state.registrations.cancel(key).await?;
    Ok(web::Json(AcknowledgementBody {
        message: format!("cancelled registration of {key}"),
    }))
}

#[cfg(test)]
#[path = "clients_tests.rs"]
mod tests;
