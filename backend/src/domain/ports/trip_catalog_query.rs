//! Driving port for the trip catalogue.

use async_trait::async_trait;

use crate::domain::{Error, TripWithCountries};

/// Use-case port for listing trips with their countries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TripCatalogQuery: Send + Sync {
    /// Every trip that has at least one country, latest start date first.
    async fn list_trips(&self) -> Result<Vec<TripWithCountries>, Error>;
}
