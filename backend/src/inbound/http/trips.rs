//! Trip catalogue HTTP handler.

use actix_web::{get, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::TripWithCountries;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Trip with the names of the countries it visits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripResponseBody {
    pub id_trip: i32,
    pub name: String,
    pub description: String,
    #[schema(value_type = String, format = "date")]
    pub date_from: NaiveDate,
    #[schema(value_type = String, format = "date")]
    pub date_to: NaiveDate,
    pub max_people: u32,
    pub countries: Vec<String>,
}

impl From<TripWithCountries> for TripResponseBody {
    fn from(value: TripWithCountries) -> Self {
        let TripWithCountries { trip, countries } = value;
        Self {
            id_trip: trip.id.get(),
            name: trip.name,
            description: trip.description,
            date_from: trip.date_from,
            date_to: trip.date_to,
            max_people: trip.capacity.max_people(),
            countries,
        }
    }
}

/// List trips with their countries, latest start date first.
#[utoipa::path(
    get,
    path = "/api/trips",
    responses(
        (status = 200, description = "Trips", body = [TripResponseBody]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["trips"],
    operation_id = "listTrips"
)]
#[get("/trips")]
pub async fn list_trips(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<TripResponseBody>>> {
    let trips = state.trips.list_trips().await?;
    Ok(web::Json(trips.into_iter().map(TripResponseBody::from).collect()))
}
