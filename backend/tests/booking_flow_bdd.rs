//! Behaviour tests for the booking flow.
//!
//! Steps stay synchronous and drive the handlers on a single actix system
//! owned by the world.

#[expect(
    dead_code,
    reason = "Shared harness exposes the clock and dates used by other suites."
)]
mod booking_support;

use std::cell::RefCell;

use actix_web::http::Method;
use actix_web::rt::System;
use actix_web::rt::SystemRunner;
use booking::domain::TripId;
use booking_support::{Booking, Reply, client_payload, day, init_app, send};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;

struct BookingWorld {
    system: SystemRunner,
    booking: Booking,
    trip: RefCell<Option<TripId>>,
    clients: RefCell<Vec<i64>>,
    replies: RefCell<Vec<Reply>>,
}

impl BookingWorld {
    fn new() -> Self {
        Self {
            system: System::new(),
            booking: Booking::new(),
            trip: RefCell::new(None),
            clients: RefCell::new(Vec::new()),
            replies: RefCell::new(Vec::new()),
        }
    }

    fn call(&self, method: Method, path: &str, payload: Option<Value>) -> Reply {
        let state = self.booking.state.clone();
        self.system.block_on(async move {
            let app = init_app(state).await;
            send(&app, method, path, payload).await
        })
    }

    fn trip(&self) -> TripId {
        self.trip.borrow().expect("a trip was seeded")
    }

    fn registration_path(&self, client_id: i64) -> String {
        format!("/api/clients/{client_id}/trips/{}", self.trip())
    }

    fn last_code(&self) -> Value {
        let replies = self.replies.borrow();
        replies.last().expect("a reply was recorded").body["code"].clone()
    }
}

#[fixture]
fn world() -> BookingWorld {
    BookingWorld::new()
}

#[given("a trip {name} for {max_people} people visiting {country}")]
fn a_trip_for_people_visiting(world: &BookingWorld, name: String, max_people: u32, country: String) {
    let name = name.trim_matches('"');
    let country = country.trim_matches('"');
    let id = world.booking.trip(name, day(7, 1), max_people, &[country]);
    *world.trip.borrow_mut() = Some(id);
}

#[given("the trip also visits {country}")]
fn the_trip_also_visits(world: &BookingWorld, country: String) {
    let trip = world.trip();
    world
        .booking
        .store
        .add_country(trip, country.trim_matches('"'));
}

#[given("{count} registered clients")]
fn registered_clients(world: &BookingWorld, count: usize) {
    for index in 0..count {
        let pesel = format!("{:011}", index + 1);
        let reply = world.call(Method::POST, "/api/clients", Some(client_payload(&pesel)));
        let id = reply.body["idClient"].as_i64().expect("client id");
        world.clients.borrow_mut().push(id);
    }
}

#[when("every client registers for the trip")]
fn every_client_registers(world: &BookingWorld) {
    let clients = world.clients.borrow().clone();
    for client_id in clients {
        let reply = world.call(Method::PUT, &world.registration_path(client_id), None);
        world.replies.borrow_mut().push(reply);
    }
}

#[when("the first client cancels twice")]
fn the_first_client_cancels_twice(world: &BookingWorld) {
    let client_id = *world.clients.borrow().first().expect("a client");
    let path = world.registration_path(client_id);
    world.replies.borrow_mut().clear();
    for _ in 0..2 {
        let reply = world.call(Method::DELETE, &path, None);
        world.replies.borrow_mut().push(reply);
    }
}

#[when("another client registers with the same pesel")]
fn another_client_registers_with_the_same_pesel(world: &BookingWorld) {
    let reply = world.call(Method::POST, "/api/clients", Some(client_payload("00000000001")));
    world.replies.borrow_mut().push(reply);
}

#[when("the catalogue is requested")]
fn the_catalogue_is_requested(world: &BookingWorld) {
    let reply = world.call(Method::GET, "/api/trips", None);
    world.replies.borrow_mut().push(reply);
}

#[then("{count} registrations succeed")]
fn registrations_succeed(world: &BookingWorld, count: usize) {
    let succeeded = world
        .replies
        .borrow()
        .iter()
        .filter(|reply| reply.status.is_success())
        .count();
    assert_eq!(succeeded, count);
    assert_eq!(world.booking.store.registration_count(world.trip()), count);
}

#[then("the last registration is rejected with {code}")]
fn the_last_registration_is_rejected(world: &BookingWorld, code: String) {
    assert_eq!(world.last_code(), code.trim_matches('"'));
}

#[then("the second cancel is rejected with {code}")]
fn the_second_cancel_is_rejected(world: &BookingWorld, code: String) {
    let replies = world.replies.borrow();
    assert_eq!(replies.len(), 2);
    assert!(replies[0].status.is_success());
    assert_eq!(replies[1].body["code"], code.trim_matches('"'));
}

#[then("the trip has {count} registrations")]
fn the_trip_has_registrations(world: &BookingWorld, count: usize) {
    assert_eq!(world.booking.store.registration_count(world.trip()), count);
}

#[then("the client creation is rejected with {code}")]
fn the_client_creation_is_rejected(world: &BookingWorld, code: String) {
    assert_eq!(world.last_code(), code.trim_matches('"'));
}

#[then("the catalogue lists {count} trips")]
fn the_catalogue_lists_trips(world: &BookingWorld, count: usize) {
    let replies = world.replies.borrow();
    let body = &replies.last().expect("catalogue reply").body;
    assert_eq!(body.as_array().map(Vec::len), Some(count));
}

#[then("the first trip lists {count} countries")]
fn the_first_trip_lists_countries(world: &BookingWorld, count: usize) {
    let replies = world.replies.borrow();
    let body = &replies.last().expect("catalogue reply").body;
    assert_eq!(body[0]["countries"].as_array().map(Vec::len), Some(count));
}

#[scenario(
    path = "tests/features/booking_flow.feature",
    name = "Registrations stop once a trip is full"
)]
fn registrations_stop_once_a_trip_is_full(world: BookingWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/booking_flow.feature",
    name = "Cancelling twice reports a missing registration"
)]
fn cancelling_twice_reports_a_missing_registration(world: BookingWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/booking_flow.feature",
    name = "A pesel can only be used once"
)]
fn a_pesel_can_only_be_used_once(world: BookingWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/booking_flow.feature",
    name = "The catalogue shows each trip once"
)]
fn the_catalogue_shows_each_trip_once(world: BookingWorld) {
    drop(world);
}
