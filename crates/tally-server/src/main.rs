//! tally-server binary.
//!
//! - Counter resource: /counters/:name (POST/GET/PUT/DELETE)
//! - Ops: /healthz, /readyz, /metrics
//! - Config: $TALLY_CONFIG (default `tally.yaml`, defaults if absent)

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let path = std::env::var("TALLY_CONFIG").unwrap_or_else(|_| "tally.yaml".to_string());
    match tally_server::run(&path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "tally-server failed");
            ExitCode::FAILURE
        }
    }
}
