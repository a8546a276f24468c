//! Diesel row types.
//!
//! Rows stay inside the persistence adapter; repositories convert them into
//! validated domain values before returning.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::{
    Client, ClientId, NewClient, Registration, RegistrationDate, RegistrationDateError, Trip,
    TripCapacity, TripId,
};

use super::schema::{client, client_trip, trip};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = client)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ClientRow {
    pub id_client: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub pesel: String,
}

impl TryFrom<ClientRow> for Client {
    type Error = crate::domain::ClientValidationError;

    fn try_from(row: ClientRow) -> Result<Self, Self::Error> {
        let draft = NewClient::try_from_parts(
            &row.first_name,
            &row.last_name,
            row.email.as_deref(),
            row.telephone.as_deref(),
            &row.pesel,
        )?;
        Ok(draft.into_client(ClientId::new(row.id_client)))
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = client)]
pub(crate) struct NewClientRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: Option<&'a str>,
    pub telephone: Option<&'a str>,
    pub pesel: &'a str,
}

impl<'a> From<&'a NewClient> for NewClientRow<'a> {
    fn from(value: &'a NewClient) -> Self {
        Self {
            first_name: value.first_name(),
            last_name: value.last_name(),
            email: value.email().map(|email| email.as_str()),
            telephone: value.telephone(),
            pesel: value.pesel().as_str(),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = trip)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TripRow {
    pub id_trip: i32,
    pub name: String,
    pub description: String,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub max_people: i32,
}

impl From<TripRow> for Trip {
    fn from(row: TripRow) -> Self {
        Self {
            id: TripId::new(row.id_trip),
            name: row.name,
            description: row.description,
            date_from: row.date_from,
            date_to: row.date_to,
            capacity: TripCapacity::from_stored(row.max_people),
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = client_trip)]
pub(crate) struct NewClientTripRow {
    pub id_client: i32,
    pub id_trip: i32,
    pub registered_at: i32,
    pub payment_date: Option<i32>,
}

impl From<&Registration> for NewClientTripRow {
    fn from(value: &Registration) -> Self {
        Self {
            id_client: value.key.client_id.get(),
            id_trip: value.key.trip_id.get(),
            registered_at: value.registered_at.get(),
            payment_date: value.payment_date.map(RegistrationDate::get),
        }
    }
}

/// Decode a nullable `YYYYMMDD` column.
pub(crate) fn decode_optional_date(
    value: Option<i32>,
) -> Result<Option<RegistrationDate>, RegistrationDateError> {
    value.map(RegistrationDate::try_from_encoded).transpose()
}
