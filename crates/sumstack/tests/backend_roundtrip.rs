//! End-to-end tests against an in-process stand-in backend.
//!
//! The stand-in implements the two real routes (`GET /api/calculations`,
//! `POST /api/calculate`) over an in-memory store, so a real `CalcClient`
//! and `Session` can be driven through the full submit/refresh cycle.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;

use sumstack::prelude::*;

#[derive(Default)]
struct Store {
    records: Mutex<Vec<CalculationRecord>>,
}

async fn list_calculations(State(store): State<Arc<Store>>) -> Json<HistoryResponse> {
    let records = store.records.lock().unwrap().clone();
    Json(HistoryResponse {
        success: true,
        data: records,
    })
}

async fn calculate(
    State(store): State<Arc<Store>>,
    Json(req): Json<CalculateRequest>,
) -> Json<CalculateResponse> {
    let result = req.num1 + req.num2;
    let mut records = store.records.lock().unwrap();
    let record = CalculationRecord {
        id: RecordId::Int(records.len() as i64 + 1),
        num1: req.num1,
        num2: req.num2,
        result,
        timestamp: Utc::now(),
    };
    records.push(record);
    Json(CalculateResponse {
        success: true,
        message: "Calculation completed".to_string(),
        data: Some(CalculateData { result }),
    })
}

async fn reject_calculation(Json(_req): Json<CalculateRequest>) -> Json<CalculateResponse> {
    Json(CalculateResponse {
        success: false,
        message: "bad input".to_string(),
        data: None,
    })
}

async fn broken_calculation() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "backend exploded")
}

/// Serves the given router on an ephemeral port, returning its address.
async fn spawn_backend(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stand-in backend");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}

async fn spawn_working_backend() -> SocketAddr {
    let store = Arc::new(Store::default());
    let app = Router::new()
        .route("/api/calculations", get(list_calculations))
        .route("/api/calculate", post(calculate))
        .with_state(store);
    spawn_backend(app).await
}

#[tokio::test]
async fn submit_then_refresh_round_trip() {
    let addr = spawn_working_backend().await;
    let client = CalcClient::new(format!("http://{addr}"));
    let mut session = Session::new(client);

    session.activate().await;
    assert!(session.history().is_empty());

    session.set_num1("2");
    session.set_num2("3");
    session.submit().await;

    assert_eq!(session.result(), 5.0);
    assert!(session.message().starts_with(SUCCESS_PREFIX));
    assert!(!session.is_loading());
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history()[0].display(), "2 + 3 = 5");
}

#[tokio::test]
async fn history_is_displayed_newest_first() {
    let addr = spawn_working_backend().await;
    let client = CalcClient::new(format!("http://{addr}"));
    let mut session = Session::new(client);

    session.set_num1("1");
    session.set_num2("1");
    session.submit().await;
    session.set_num1("10");
    session.set_num2("20");
    session.submit().await;

    assert_eq!(session.history().len(), 2);
    let newest: Vec<String> = session
        .history_newest_first()
        .map(CalculationRecord::display)
        .collect();
    assert_eq!(newest, vec!["10 + 20 = 30", "1 + 1 = 2"]);
}

#[tokio::test]
async fn service_rejection_shows_failure_annotation() {
    let app = Router::new().route("/api/calculate", post(reject_calculation));
    let addr = spawn_backend(app).await;
    let client = CalcClient::new(format!("http://{addr}"));
    let mut session = Session::new(client);

    session.submit().await;

    assert_eq!(session.message(), "❌ bad input");
    assert_eq!(session.result(), 3.0);
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn http_error_status_becomes_connectivity_message() {
    let app = Router::new().route("/api/calculate", post(broken_calculation));
    let addr = spawn_backend(app).await;
    let client = CalcClient::new(format!("http://{addr}"));
    let mut session = Session::new(client);

    session.submit().await;

    assert!(session.message().starts_with(CONNECT_FAILED_PREFIX));
    assert!(session.message().contains("500"));
    assert_eq!(session.result(), 3.0);
    assert!(!session.is_loading());
}

#[tokio::test]
async fn unreachable_backend_sets_history_notice() {
    // Bind and drop to get a port with nothing listening on it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = CalcClient::new(format!("http://{addr}"));
    let mut session = Session::new(client);

    session.activate().await;

    assert_eq!(session.message(), HISTORY_UNAVAILABLE);
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn client_reports_status_and_body_on_error() {
    let app = Router::new().route("/api/calculate", post(broken_calculation));
    let addr = spawn_backend(app).await;
    let client = CalcClient::new(format!("http://{addr}"));

    let err = client.calculate(1.0, 2.0).await.expect_err("must fail");
    match err {
        ClientError::Api { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "backend exploded");
        }
        ClientError::Http(_) => panic!("expected an API status error"),
    }
}
