//! Trip catalogue service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::client_service::map_trip_repository_error;
use crate::domain::ports::{TripCatalogQuery, TripRepository};
use crate::domain::{Error, TripWithCountries, group_trip_countries};

/// Service implementing [`TripCatalogQuery`].
#[derive(Clone)]
pub struct TripCatalogService<T> {
    trips: Arc<T>,
}

impl<T> TripCatalogService<T> {
    /// Create a catalogue service over the trip repository.
    pub fn new(trips: Arc<T>) -> Self {
        Self { trips }
    }
}

#[async_trait]
impl<T> TripCatalogQuery for TripCatalogService<T>
where
    T: TripRepository,
{
    async fn list_trips(&self) -> Result<Vec<TripWithCountries>, Error> {
        let rows = self
            .trips
            .list_with_countries()
            .await
            .map_err(map_trip_repository_error)?;
        Ok(group_trip_countries(rows))
    }
}
