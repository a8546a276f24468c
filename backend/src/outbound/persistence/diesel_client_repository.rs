//! PostgreSQL-backed `ClientRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ClientRepository, ClientRepositoryError};
use crate::domain::{Client, ClientId, NewClient, Pesel};

use super::diesel_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{ClientRow, NewClientRow};
use super::pool::{DbPool, PoolError};
use super::schema::client;

/// Diesel-backed implementation of the client repository port.
#[derive(Clone)]
pub struct DieselClientRepository {
    pool: DbPool,
}

impl DieselClientRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ClientRepositoryError {
    map_basic_pool_error(error, ClientRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ClientRepositoryError {
    map_basic_diesel_error(
        error,
        ClientRepositoryError::query,
        ClientRepositoryError::connection,
    )
}

fn row_to_client(row: ClientRow) -> Result<Client, ClientRepositoryError> {
    let id = row.id_client;
    Client::try_from(row)
        .map_err(|err| ClientRepositoryError::query(format!("invalid client row {id}: {err}")))
}

#[async_trait]
impl ClientRepository for DieselClientRepository {
    async fn exists(&self, id: ClientId) -> Result<bool, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(diesel::dsl::exists(
            client::table.filter(client::id_client.eq(id.get())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn find_by_pesel(&self, pesel: &Pesel) -> Result<Option<Client>, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<ClientRow> = client::table
            .filter(client::pesel.eq(pesel.as_str()))
            .select(ClientRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_client).transpose()
    }

    async fn insert(&self, new_client: &NewClient) -> Result<Client, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: ClientRow = diesel::insert_into(client::table)
            .values(NewClientRow::from(new_client))
            .returning(ClientRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    ClientRepositoryError::duplicate_pesel(new_client.pesel().as_str())
                } else {
                    map_diesel_error(err)
                }
            })?;
        row_to_client(row)
    }
}
