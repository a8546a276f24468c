//! PostgreSQL-backed `TripRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{TripRepository, TripRepositoryError};
use crate::domain::{ClientId, ClientTrip, RegistrationDate, Trip, TripCountry, TripId};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{TripRow, decode_optional_date};
use super::pool::{DbPool, PoolError};
use super::schema::{client_trip, country, country_trip, trip};

/// Diesel-backed implementation of the trip repository port.
#[derive(Clone)]
pub struct DieselTripRepository {
    pool: DbPool,
}

impl DieselTripRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TripRepositoryError {
    map_basic_pool_error(error, TripRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> TripRepositoryError {
    map_basic_diesel_error(
        error,
        TripRepositoryError::query,
        TripRepositoryError::connection,
    )
}

fn row_to_client_trip(
    (row, registered_at, payment_date): (TripRow, i32, Option<i32>),
) -> Result<ClientTrip, TripRepositoryError> {
    let trip_id = row.id_trip;
    let invalid =
        |err| TripRepositoryError::query(format!("invalid registration date on trip {trip_id}: {err}"));
    Ok(ClientTrip {
        trip: Trip::from(row),
        registered_at: RegistrationDate::try_from_encoded(registered_at).map_err(invalid)?,
        payment_date: decode_optional_date(payment_date).map_err(invalid)?,
    })
}

#[async_trait]
impl TripRepository for DieselTripRepository {
    async fn exists(&self, id: TripId) -> Result<bool, TripRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(diesel::dsl::exists(
            trip::table.filter(trip::id_trip.eq(id.get())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn list_with_countries(&self) -> Result<Vec<TripCountry>, TripRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<(TripRow, String)> = trip::table
            .inner_join(country_trip::table.inner_join(country::table))
            .select((TripRow::as_select(), country::name))
            .order_by((
                trip::date_from.desc(),
                trip::id_trip.asc(),
                country::name.asc(),
            ))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|(row, country)| TripCountry {
                trip: Trip::from(row),
                country,
            })
            .collect())
    }

    async fn list_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<ClientTrip>, TripRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<(TripRow, i32, Option<i32>)> = client_trip::table
            .inner_join(trip::table)
            .filter(client_trip::id_client.eq(client_id.get()))
            .select((
                TripRow::as_select(),
                client_trip::registered_at,
                client_trip::payment_date,
            ))
            .order_by((trip::date_from.desc(), trip::id_trip.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_client_trip).collect()
    }
}
