//! In-memory implementation of every booking repository port.
//!
//! One store backs all three ports so a test can hand the same `Arc` to each
//! service. A single mutex guards the whole state, which makes the capacity
//! check and the insert atomic just like the row lock in the Diesel adapter.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::ports::{
    ClientRepository, ClientRepositoryError, RegistrationRepository,
    RegistrationRepositoryError, TripRepository, TripRepositoryError,
};
use crate::domain::{
    Client, ClientId, ClientTrip, NewClient, Pesel, Registration, RegistrationKey, Trip,
    TripCapacity, TripCountry, TripId,
};

#[derive(Default)]
struct StoreState {
    last_client_id: i32,
    last_trip_id: i32,
    clients: Vec<Client>,
    trips: Vec<Trip>,
    trip_countries: Vec<(TripId, String)>,
    registrations: Vec<Registration>,
    drop_deletes: bool,
}

/// Mutex-guarded booking store.
#[derive(Default)]
pub struct InMemoryBookingStore {
    state: Mutex<StoreState>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("booking store mutex"),
        }
    }

    /// Seed a trip visiting `countries` and return its identifier.
    pub fn add_trip(
        &self,
        name: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
        max_people: u32,
        countries: &[&str],
    ) -> TripId {
        let mut state = self.lock();
        state.last_trip_id += 1;
        let id = TripId::new(state.last_trip_id);
        state.trips.push(Trip {
            id,
            name: name.to_owned(),
            description: format!("{name} itinerary"),
            date_from,
            date_to,
            capacity: TripCapacity::new(max_people),
        });
        state
            .trip_countries
            .extend(countries.iter().map(|country| (id, (*country).to_owned())));
        id
    }

    /// Add another country to an existing trip.
    pub fn add_country(&self, trip_id: TripId, country: &str) {
        self.lock().trip_countries.push((trip_id, country.to_owned()));
    }

    /// Number of registrations currently held for `trip_id`.
    pub fn registration_count(&self, trip_id: TripId) -> usize {
        self.lock()
            .registrations
            .iter()
            .filter(|registration| registration.key.trip_id == trip_id)
            .count()
    }

    /// Make every later delete report zero affected rows.
    pub fn drop_deletes(&self) {
        self.lock().drop_deletes = true;
    }
}

#[async_trait]
impl ClientRepository for InMemoryBookingStore {
    async fn exists(&self, id: ClientId) -> Result<bool, ClientRepositoryError> {
        Ok(self.lock().clients.iter().any(|client| client.id() == id))
    }

    async fn find_by_pesel(&self, pesel: &Pesel) -> Result<Option<Client>, ClientRepositoryError> {
        Ok(self
            .lock()
            .clients
            .iter()
            .find(|client| client.pesel() == pesel)
            .cloned())
    }

    async fn insert(&self, client: &NewClient) -> Result<Client, ClientRepositoryError> {
        let mut state = self.lock();
        if state.clients.iter().any(|existing| existing.pesel() == client.pesel()) {
            return Err(ClientRepositoryError::duplicate_pesel(client.pesel().as_str()));
        }
        state.last_client_id += 1;
        let created = client.clone().into_client(ClientId::new(state.last_client_id));
        state.clients.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl TripRepository for InMemoryBookingStore {
    async fn exists(&self, id: TripId) -> Result<bool, TripRepositoryError> {
        Ok(self.lock().trips.iter().any(|trip| trip.id == id))
    }

    async fn list_with_countries(&self) -> Result<Vec<TripCountry>, TripRepositoryError> {
        let state = self.lock();
        let mut trips: Vec<&Trip> = state.trips.iter().collect();
        trips.sort_by(|a, b| b.date_from.cmp(&a.date_from).then(a.id.cmp(&b.id)));

        Ok(trips
            .into_iter()
            .flat_map(|trip| {
                state
                    .trip_countries
                    .iter()
                    .filter(move |(trip_id, _)| *trip_id == trip.id)
                    .map(move |(_, country)| TripCountry {
                        trip: trip.clone(),
                        country: country.clone(),
                    })
            })
            .collect())
    }

    async fn list_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<ClientTrip>, TripRepositoryError> {
        let state = self.lock();
        let mut trips: Vec<ClientTrip> = state
            .registrations
            .iter()
            .filter(|registration| registration.key.client_id == client_id)
            .filter_map(|registration| {
                state
                    .trips
                    .iter()
                    .find(|trip| trip.id == registration.key.trip_id)
                    .map(|trip| ClientTrip {
                        trip: trip.clone(),
                        registered_at: registration.registered_at,
                        payment_date: registration.payment_date,
                    })
            })
            .collect();
        trips.sort_by(|a, b| {
            b.trip
                .date_from
                .cmp(&a.trip.date_from)
                .then(a.trip.id.cmp(&b.trip.id))
        });
        Ok(trips)
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryBookingStore {
    async fn exists(&self, key: RegistrationKey) -> Result<bool, RegistrationRepositoryError> {
        Ok(self
            .lock()
            .registrations
            .iter()
            .any(|registration| registration.key == key))
    }

    async fn insert_within_capacity(
        &self,
        registration: &Registration,
    ) -> Result<(), RegistrationRepositoryError> {
        let mut state = self.lock();
        let key = registration.key;
        let capacity = state
            .trips
            .iter()
            .find(|trip| trip.id == key.trip_id)
            .map(|trip| trip.capacity)
            .ok_or_else(|| RegistrationRepositoryError::trip_not_found(key.trip_id.get()))?;

        let registered = state
            .registrations
            .iter()
            .filter(|existing| existing.key.trip_id == key.trip_id)
            .count();
        capacity.try_admit(u64::try_from(registered).unwrap_or(u64::MAX))?;

        if state.registrations.iter().any(|existing| existing.key == key) {
            return Err(RegistrationRepositoryError::already_registered(
                key.client_id.get(),
                key.trip_id.get(),
            ));
        }
        state.registrations.push(*registration);
        Ok(())
    }

    async fn delete(&self, key: RegistrationKey) -> Result<u64, RegistrationRepositoryError> {
        let mut state = self.lock();
        if state.drop_deletes {
            return Ok(0);
        }
        let before = state.registrations.len();
        state.registrations.retain(|registration| registration.key != key);
        Ok(u64::try_from(before - state.registrations.len()).unwrap_or(u64::MAX))
    }
}
