//! Tests for server bootstrap and readiness signalling.

use super::*;
use actix_web::test;
use booking::outbound::persistence::{DbPool, PoolConfig};
use rstest::{fixture, rstest};

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

// No idle connections, so the pool builds without a reachable database.
async fn lazy_pool() -> DbPool {
    DbPool::new(PoolConfig::new("postgres://booking@localhost/booking").with_min_idle(None))
        .await
        .expect("lazy pool builds")
}

#[rstest]
#[actix_web::test]
async fn create_server_marks_ready(health_state: web::Data<HealthState>) {
    assert!(!health_state.is_ready(), "state should start unready");
    let config = ServerConfig::new(
        "127.0.0.1:0".parse().expect("loopback address"),
        lazy_pool().await,
    );
    assert_eq!(config.bind_addr().port(), 0);

    let _server = create_server(health_state.clone(), config).expect("server should bind");

    assert!(health_state.is_ready(), "server creation should mark readiness");
}

#[rstest]
#[actix_web::test]
async fn app_serves_health_and_api_routes(health_state: web::Data<HealthState>) {
    health_state.mark_ready();
    let http_state = build_http_state(&lazy_pool().await);
    let app = test::init_service(build_app(health_state, http_state)).await;

    let ready_res = test::call_service(&app, test::TestRequest::get().uri("/health/ready").to_request()).await;
    assert!(ready_res.status().is_success());
    assert!(ready_res.headers().contains_key("trace-id"));

    let bad_path = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/clients/abc/trips").to_request(),
    )
    .await;
    assert_eq!(bad_path.status(), actix_web::http::StatusCode::BAD_REQUEST);
}
