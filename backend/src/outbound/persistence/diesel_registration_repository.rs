//! PostgreSQL-backed `RegistrationRepository` implementation using Diesel ORM.
//!
//! Registration runs as a single transaction: the trip row is locked with
//! `SELECT ... FOR UPDATE`, registrations are counted, and the new row is
//! inserted only when the count is below the trip maximum. Concurrent
//! registrations for the same trip therefore serialise on the lock.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{RegistrationRepository, RegistrationRepositoryError};
use crate::domain::{CapacityReached, Registration, RegistrationKey, TripCapacity};

use super::diesel_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::NewClientTripRow;
use super::pool::{DbPool, PoolError};
use super::schema::{client_trip, trip};

/// Diesel-backed implementation of the registration repository port.
#[derive(Clone)]
pub struct DieselRegistrationRepository {
    pool: DbPool,
}

impl DieselRegistrationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Failures raised inside the registration transaction.
#[derive(Debug, thiserror::Error)]
enum RegisterTxError {
    #[error(transparent)]
    Diesel(#[from] diesel::result::Error),
    #[error("trip {0} not found")]
    TripMissing(i32),
    #[error(transparent)]
    Full(#[from] CapacityReached),
}

fn map_pool_error(error: PoolError) -> RegistrationRepositoryError {
    map_basic_pool_error(error, RegistrationRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> RegistrationRepositoryError {
    map_basic_diesel_error(
        error,
        RegistrationRepositoryError::query,
        RegistrationRepositoryError::connection,
    )
}

fn map_register_error(key: RegistrationKey, error: RegisterTxError) -> RegistrationRepositoryError {
    match error {
        RegisterTxError::Diesel(err) if is_unique_violation(&err) => {
            RegistrationRepositoryError::already_registered(key.client_id.get(), key.trip_id.get())
        }
        RegisterTxError::Diesel(err) => map_diesel_error(err),
        RegisterTxError::TripMissing(trip_id) => RegistrationRepositoryError::trip_not_found(trip_id),
        RegisterTxError::Full(reached) => RegistrationRepositoryError::from(reached),
    }
}

fn key_filter(
    key: RegistrationKey,
) -> diesel::dsl::And<
    diesel::dsl::Eq<client_trip::id_client, i32>,
    diesel::dsl::Eq<client_trip::id_trip, i32>,
> {
    client_trip::id_client
        .eq(key.client_id.get())
        .and(client_trip::id_trip.eq(key.trip_id.get()))
}

#[async_trait]
impl RegistrationRepository for DieselRegistrationRepository {
    async fn exists(&self, key: RegistrationKey) -> Result<bool, RegistrationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(diesel::dsl::exists(
            client_trip::table.filter(key_filter(key)),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn insert_within_capacity(
        &self,
        registration: &Registration,
    ) -> Result<(), RegistrationRepositoryError> {
        let key = registration.key;
        let trip_id = key.trip_id.get();
        let row = NewClientTripRow::from(registration);
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction::<_, RegisterTxError, _>(|conn| {
            async move {
                let max_people: i32 = trip::table
                    .filter(trip::id_trip.eq(trip_id))
                    .select(trip::max_people)
                    .for_update()
                    .first(conn)
                    .await
                    .optional()?
                    .ok_or(RegisterTxError::TripMissing(trip_id))?;

                let registered: i64 = client_trip::table
                    .filter(client_trip::id_trip.eq(trip_id))
                    .count()
                    .get_result(conn)
                    .await?;
                let registered = u64::try_from(registered).unwrap_or(0);
                TripCapacity::from_stored(max_people).try_admit(registered)?;

                diesel::insert_into(client_trip::table)
                    .values(&row)
                    .execute(conn)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(|err| map_register_error(key, err))
    }

    async fn delete(&self, key: RegistrationKey) -> Result<u64, RegistrationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(client_trip::table.filter(key_filter(key)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(u64::try_from(removed).unwrap_or(u64::MAX))
    }
}
