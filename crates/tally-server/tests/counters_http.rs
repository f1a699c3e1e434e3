//! End-to-end HTTP tests against the in-process router.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    response::IntoResponse,
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use tally_core::TallyError;
use tally_server::{
    app_state::AppState, config, router::build_router, transport::error::ApiError,
};

fn app_with(yaml: &str) -> (Router, AppState) {
    let state = AppState::new(config::load_from_str(yaml).unwrap());
    (build_router(state.clone()), state)
}

fn app() -> Router {
    app_with("version: 1\n").0
}

async fn call(app: &Router, method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn json_of(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn full_lifecycle_scenario() {
    let app = app();

    let (s, b) = call(&app, Method::POST, "/counters/foo").await;
    assert_eq!(s, StatusCode::CREATED);
    assert_eq!(json_of(&b), json!({"foo": 0}));

    let (s, b) = call(&app, Method::PUT, "/counters/foo").await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(json_of(&b), json!({"foo": 1}));

    let (s, b) = call(&app, Method::GET, "/counters/foo").await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(json_of(&b), json!({"foo": 1}));

    let (s, b) = call(&app, Method::DELETE, "/counters/foo").await;
    assert_eq!(s, StatusCode::NO_CONTENT);
    assert!(b.is_empty());

    let (s, _) = call(&app, Method::GET, "/counters/foo").await;
    assert_eq!(s, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_create_is_conflict() {
    let app = app();
    assert_eq!(call(&app, Method::POST, "/counters/bar").await.0, StatusCode::CREATED);
    call(&app, Method::PUT, "/counters/bar").await;

    let (s, b) = call(&app, Method::POST, "/counters/bar").await;
    assert_eq!(s, StatusCode::CONFLICT);
    assert_eq!(json_of(&b)["error"], "CONFLICT");

    let (_, b) = call(&app, Method::GET, "/counters/bar").await;
    assert_eq!(json_of(&b), json!({"bar": 1}));
}

#[tokio::test]
async fn absent_counter_is_not_found() {
    let app = app();
    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let (s, b) = call(&app, method, "/counters/DNE").await;
        assert_eq!(s, StatusCode::NOT_FOUND);
        assert_eq!(json_of(&b)["error"], "NOT_FOUND");
    }
    // PUT must not have created it
    assert_eq!(call(&app, Method::GET, "/counters/DNE").await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn second_delete_is_not_found() {
    let app = app();
    call(&app, Method::POST, "/counters/deletecounter").await;
    assert_eq!(
        call(&app, Method::DELETE, "/counters/deletecounter").await.0,
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        call(&app, Method::DELETE, "/counters/deletecounter").await.0,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn increments_accumulate() {
    let app = app();
    call(&app, Method::POST, "/counters/baz").await;
    for _ in 0..10 {
        call(&app, Method::PUT, "/counters/baz").await;
    }
    let (_, b) = call(&app, Method::GET, "/counters/baz").await;
    assert_eq!(json_of(&b), json!({"baz": 10}));
}

#[tokio::test]
async fn percent_encoded_name_is_decoded() {
    let app = app();
    let (s, b) = call(&app, Method::POST, "/counters/hello%20world").await;
    assert_eq!(s, StatusCode::CREATED);
    assert_eq!(json_of(&b), json!({"hello world": 0}));
}

#[tokio::test]
async fn long_names_are_accepted_and_absent_ones_are_not_found() {
    let app = app();
    let absent = format!("/counters/{}", "m".repeat(300));
    assert_eq!(call(&app, Method::GET, &absent).await.0, StatusCode::NOT_FOUND);
    assert_eq!(call(&app, Method::PUT, &absent).await.0, StatusCode::NOT_FOUND);
    assert_eq!(call(&app, Method::DELETE, &absent).await.0, StatusCode::NOT_FOUND);

    let name = "n".repeat(300);
    let (s, b) = call(&app, Method::POST, &format!("/counters/{name}")).await;
    assert_eq!(s, StatusCode::CREATED);
    let mut expected = serde_json::Map::new();
    expected.insert(name, json!(0));
    assert_eq!(json_of(&b), Value::Object(expected));
}

#[test]
fn error_status_mapping() {
    let cases = [
        (TallyError::NotFound("a".into()), StatusCode::NOT_FOUND),
        (TallyError::Conflict("a".into()), StatusCode::CONFLICT),
        (TallyError::Overflow("a".into()), StatusCode::CONFLICT),
        (TallyError::BadRequest("a".into()), StatusCode::BAD_REQUEST),
        (TallyError::Internal("a".into()), StatusCode::INTERNAL_SERVER_ERROR),
    ];
    for (err, status) in cases {
        assert_eq!(ApiError(err).status(), status);
    }
}

#[tokio::test]
async fn overflow_body_carries_code() {
    let resp = ApiError(TallyError::Overflow("edge".into())).into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(json_of(&bytes)["error"], "OVERFLOW");
}

#[tokio::test]
async fn path_prefix_is_applied() {
    let (app, _) = app_with("version: 1\nserver:\n  path_prefix: \"/api\"\n");
    assert_eq!(call(&app, Method::POST, "/api/counters/x").await.0, StatusCode::CREATED);
    assert_eq!(call(&app, Method::GET, "/counters/x").await.0, StatusCode::NOT_FOUND);
    assert_eq!(call(&app, Method::GET, "/healthz").await.0, StatusCode::OK);
}

#[tokio::test]
async fn unsupported_verb_is_method_not_allowed() {
    let app = app();
    assert_eq!(
        call(&app, Method::PATCH, "/counters/foo").await.0,
        StatusCode::METHOD_NOT_ALLOWED
    );
}

#[tokio::test]
async fn ops_endpoints() {
    let (app, state) = app_with("version: 1\n");
    call(&app, Method::POST, "/counters/m").await;
    call(&app, Method::GET, "/counters/nope").await;

    let (s, b) = call(&app, Method::GET, "/metrics").await;
    assert_eq!(s, StatusCode::OK);
    let text = String::from_utf8(b).unwrap();
    assert!(text.contains("tally_counters_live 1"));
    assert!(text.contains(r#"tally_http_requests_total{op="create",status="201"} 1"#));

    let requests = &state.metrics().http_requests;
    assert_eq!(requests.get(&[("op", "create"), ("status", "201")]), 1);
    assert_eq!(requests.get(&[("status", "404"), ("op", "read")]), 1);
    assert_eq!(requests.get(&[("op", "delete"), ("status", "204")]), 0);
    assert!(text.contains("tally_draining 0"));

    assert_eq!(call(&app, Method::GET, "/readyz").await.0, StatusCode::OK);
    state.set_draining();
    let (s, b) = call(&app, Method::GET, "/readyz").await;
    assert_eq!(s, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(b, b"draining");
}
