//! Shared harness for the booking HTTP suites.
//!
//! Every suite wires the real domain services over one
//! [`InMemoryBookingStore`] and a fixed clock, then drives the `/api` scope
//! through `actix_web::test`.

use std::sync::Arc;

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{Method, StatusCode};
use actix_web::{App, test, web};
use booking::Trace;
use booking::domain::{TRACE_ID_HEADER, TripId};
use booking::inbound::http::configure_api;
use booking::inbound::http::state::HttpState;
use booking::test_support::{InMemoryBookingStore, MutableClock};
use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::{Value, json};

/// Registration date reported by the fixture clock.
pub(crate) const TODAY: i32 = 20261019;

pub(crate) fn day(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2027, month, day).expect("valid fixture date")
}

pub(crate) struct Booking {
    pub(crate) store: Arc<InMemoryBookingStore>,
    pub(crate) clock: Arc<MutableClock>,
    pub(crate) state: web::Data<HttpState>,
}

impl Booking {
    pub(crate) fn new() -> Self {
        let store = Arc::new(InMemoryBookingStore::new());
        let now = Utc
            .with_ymd_and_hms(2026, 10, 19, 9, 30, 0)
            .single()
            .expect("valid fixture instant");
        let clock = Arc::new(MutableClock::new(now));
        let state = web::Data::new(HttpState::from_repositories(
            store.clone(),
            store.clone(),
            store.clone(),
            clock.clone(),
        ));
        Self {
            store,
            clock,
            state,
        }
    }

    /// Seed a trip visiting `countries`.
    pub(crate) fn trip(&self, name: &str, starts: NaiveDate, max_people: u32, countries: &[&str]) -> TripId {
        self.store.add_trip(name, starts, starts, max_people, countries)
    }
}

pub(crate) async fn init_app(
    state: web::Data<HttpState>,
) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(App::new().app_data(state).wrap(Trace).configure(configure_api)).await
}

/// Status, trace header and JSON body of one response.
#[derive(Debug)]
pub(crate) struct Reply {
    pub(crate) status: StatusCode,
    pub(crate) trace_id: Option<String>,
    pub(crate) body: Value,
}

pub(crate) async fn send<S>(app: &S, method: Method, path: &str, payload: Option<Value>) -> Reply
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let request = test::TestRequest::default().method(method).uri(path);
    let request = match payload {
        Some(payload) => request.set_json(payload),
        None => request,
    };
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body = test::read_body_json(response).await;
    Reply {
        status,
        trace_id,
        body,
    }
}

/// Valid client payload using `pesel`.
pub(crate) fn client_payload(pesel: &str) -> Value {
    json!({
        "firstName": "Ann",
        "lastName": "Lee",
        "email": "ann@example.com",
        "telephone": "+48 600 700 800",
        "pesel": pesel,
    })
}
