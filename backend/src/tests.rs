//! Tests for the application bootstrap, covering server construction and
//! readiness signalling.

use super::{HealthState, ServerConfig, create_server};
use actix_web::web;
use rstest::{fixture, rstest};
use std::net::SocketAddr;
use std::sync::Arc;
use visits_service::outbound::persistence::InMemoryVisitStore;

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn bind_address() -> SocketAddr {
    // Port zero lets the listener pick a free ephemeral port.
    "127.0.0.1:0".parse().expect("loopback socket address")
}

#[rstest]
fn server_config_reports_bind_addr(bind_address: SocketAddr) {
    let config = ServerConfig::new(bind_address);
    assert_eq!(config.bind_addr(), bind_address);
}

#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready(
    health_state: web::Data<HealthState>,
    bind_address: SocketAddr,
) {
    assert!(!health_state.is_ready(), "state should start unready");

    let _server = create_server(health_state.clone(), ServerConfig::new(bind_address))
        .expect("server should build");

    assert!(
        health_state.is_ready(),
        "server creation should mark readiness"
    );
}

#[rstest]
#[actix_rt::test]
async fn create_server_accepts_configured_store(
    health_state: web::Data<HealthState>,
    bind_address: SocketAddr,
) {
    let config =
        ServerConfig::new(bind_address).with_store(Arc::new(InMemoryVisitStore::new()));

    let _server =
        create_server(health_state.clone(), config).expect("server should build with store");

    assert!(
        health_state.is_ready(),
        "server creation should mark readiness"
    );
}
