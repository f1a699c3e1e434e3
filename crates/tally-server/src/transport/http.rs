//! Counter resource handlers.
//!
//! | verb   | op        | success                |
//! |--------|-----------|------------------------|
//! | POST   | create    | 201 `{name: 0}`        |
//! | GET    | read      | 200 `{name: value}`    |
//! | PUT    | increment | 200 `{name: value+1}`  |
//! | DELETE | delete    | 204, empty body        |

use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use tally_core::Result;

use crate::app_state::AppState;
use crate::transport::error::ApiError;

pub async fn create_counter(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    let started = Instant::now();
    let res = state
        .registry()
        .create(&name)
        .map(|body| (StatusCode::CREATED, Json(body)).into_response());
    finish(&state, "create", started, res)
}

pub async fn read_counter(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    let started = Instant::now();
    let res = state
        .registry()
        .read(&name)
        .map(|body| (StatusCode::OK, Json(body)).into_response());
    finish(&state, "read", started, res)
}

pub async fn increment_counter(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    let started = Instant::now();
    let res = state
        .registry()
        .increment(&name)
        .map(|body| (StatusCode::OK, Json(body)).into_response());
    finish(&state, "increment", started, res)
}

pub async fn delete_counter(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    let started = Instant::now();
    let res = state
        .registry()
        .delete(&name)
        .map(|()| StatusCode::NO_CONTENT.into_response());
    finish(&state, "delete", started, res)
}

/// Turn the op result into a response and record request metrics.
fn finish(state: &AppState, op: &'static str, started: Instant, res: Result<Response>) -> Response {
    let resp = match res {
        Ok(resp) => resp,
        Err(e) => {
            tracing::debug!(op, error = %e, "counter request rejected");
            ApiError(e).into_response()
        }
    };

    let m = state.metrics();
    m.http_requests
        .inc(&[("op", op), ("status", resp.status().as_str())]);
    m.http_duration.observe(&[("op", op)], started.elapsed());
    resp
}
