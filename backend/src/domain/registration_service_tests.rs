//! Tests for the registration service.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::rstest;

use super::*;
use crate::domain::ports::{
    MockClientRepository, MockRegistrationRepository, MockTripRepository, TripRepositoryError,
};
use crate::domain::{ClientId, ErrorCode, TripId};

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: Utc
            .with_ymd_and_hms(2026, 10, 19, 23, 30, 0)
            .single()
            .expect("valid fixture timestamp"),
    })
}

fn key() -> RegistrationKey {
    RegistrationKey::new(ClientId::new(1), TripId::new(2))
}

type Service =
    RegistrationService<MockClientRepository, MockTripRepository, MockRegistrationRepository>;

fn service(
    clients: MockClientRepository,
    trips: MockTripRepository,
    registrations: MockRegistrationRepository,
) -> Service {
    RegistrationService::new(
        Arc::new(clients),
        Arc::new(trips),
        Arc::new(registrations),
        fixture_clock(),
    )
}

fn clients_known(known: bool) -> MockClientRepository {
    let mut clients = MockClientRepository::new();
    clients.expect_exists().return_once(move |_| Ok(known));
    clients
}

fn trips_known(known: bool) -> MockTripRepository {
    let mut trips = MockTripRepository::new();
    trips.expect_exists().return_once(move |_| Ok(known));
    trips
}

#[tokio::test]
async fn register_inserts_unpaid_registration_dated_today() {
    let mut registrations = MockRegistrationRepository::new();
    registrations
        .expect_insert_within_capacity()
        .withf(|registration: &Registration| {
            registration.key == key()
                && registration.registered_at.get() == 20261019
                && registration.payment_date.is_none()
        })
        .times(1)
        .return_once(|_| Ok(()));

    let registration = service(clients_known(true), trips_known(true), registrations)
        .register(key())
        .await
        .expect("registration succeeds");

    assert_eq!(registration.registered_at.get(), 20261019);
}

#[rstest]
#[case(false, true, "client 1 not found")]
#[case(true, false, "trip 2 not found")]
#[tokio::test]
async fn register_requires_both_parties(
    #[case] client: bool,
    #[case] trip: bool,
    #[case] message: &str,
) {
    let mut registrations = MockRegistrationRepository::new();
    registrations.expect_insert_within_capacity().times(0);

    let error = service(clients_known(client), trips_known(trip), registrations)
        .register(key())
        .await
        .expect_err("missing party");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), message);
}

#[tokio::test]
async fn register_skips_trip_lookup_for_unknown_client() {
    let mut trips = MockTripRepository::new();
    trips.expect_exists().times(0);

    let error = service(
        clients_known(false),
        trips,
        MockRegistrationRepository::new(),
    )
    .register(key())
    .await
    .expect_err("unknown client");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[case(
    RegistrationRepositoryError::capacity_reached(2_u32, 2_u64),
    ErrorCode::CapacityExceeded
)]
#[case(RegistrationRepositoryError::already_registered(1, 2), ErrorCode::Conflict)]
#[case(RegistrationRepositoryError::trip_not_found(2), ErrorCode::NotFound)]
#[case(RegistrationRepositoryError::connection("pool closed"), ErrorCode::InternalError)]
#[case(RegistrationRepositoryError::query("deadlock"), ErrorCode::InternalError)]
#[tokio::test]
async fn register_maps_repository_failures(
    #[case] failure: RegistrationRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut registrations = MockRegistrationRepository::new();
    registrations
        .expect_insert_within_capacity()
        .times(1)
        .return_once(move |_| Err(failure));

    let error = service(clients_known(true), trips_known(true), registrations)
        .register(key())
        .await
        .expect_err("repository failure");

    assert_eq!(error.code(), expected);
}

#[tokio::test]
async fn register_reports_capacity_in_message() {
    let mut registrations = MockRegistrationRepository::new();
    registrations
        .expect_insert_within_capacity()
        .return_once(|_| Err(RegistrationRepositoryError::capacity_reached(2_u32, 2_u64)));

    let error = service(clients_known(true), trips_known(true), registrations)
        .register(key())
        .await
        .expect_err("full trip");

    assert_eq!(error.message(), "trip 2 is full: 2 of 2 places taken");
}

#[tokio::test]
async fn trip_lookup_failure_is_internal() {
    let mut trips = MockTripRepository::new();
    trips
        .expect_exists()
        .return_once(|_| Err(TripRepositoryError::connection("refused")));

    let error = service(clients_known(true), trips, MockRegistrationRepository::new())
        .register(key())
        .await
        .expect_err("trip lookup failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[tokio::test]
async fn cancel_deletes_existing_registration() {
    let mut registrations = MockRegistrationRepository::new();
    registrations
        .expect_exists()
        .times(1)
        .return_once(|_| Ok(true));
    registrations
        .expect_delete()
        .withf(|candidate: &RegistrationKey| *candidate == key())
        .times(1)
        .return_once(|_| Ok(1));

    service(clients_known(true), trips_known(true), registrations)
        .cancel(key())
        .await
        .expect("cancel succeeds");
}

#[tokio::test]
async fn cancel_without_registration_is_not_found() {
    let mut registrations = MockRegistrationRepository::new();
    registrations.expect_exists().return_once(|_| Ok(false));
    registrations.expect_delete().times(0);

    let error = service(clients_known(true), trips_known(true), registrations)
        .cancel(key())
        .await
        .expect_err("no registration");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(
        error.message(),
        "registration for client 1 on trip 2 not found"
    );
}

#[tokio::test]
async fn cancel_reports_internal_when_nothing_was_deleted() {
    let mut registrations = MockRegistrationRepository::new();
    registrations.expect_exists().return_once(|_| Ok(true));
    registrations.expect_delete().return_once(|_| Ok(0));

    let error = service(clients_known(true), trips_known(true), registrations)
        .cancel(key())
        .await
        .expect_err("lost race");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[rstest]
#[case(false, true)]
#[case(true, false)]
#[tokio::test]
async fn cancel_requires_both_parties(#[case] client: bool, #[case] trip: bool) {
    let mut registrations = MockRegistrationRepository::new();
    registrations.expect_exists().times(0);
    registrations.expect_delete().times(0);

    let error = service(clients_known(client), trips_known(trip), registrations)
        .cancel(key())
        .await
        .expect_err("missing party");

    assert_eq!(error.code(), ErrorCode::NotFound);
}
