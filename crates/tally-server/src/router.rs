//! Axum router wiring.
//!
//! Counter routes live under `server.path_prefix`; ops endpoints are always
//! served at the root.

use axum::{routing::get, routing::post, Router};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    let counters = format!("{}/counters/:name", state.cfg().server.path_prefix);

    Router::new()
        .route(
            &counters,
            post(transport::http::create_counter)
                .get(transport::http::read_counter)
                .put(transport::http::increment_counter)
                .delete(transport::http::delete_counter),
        )
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
