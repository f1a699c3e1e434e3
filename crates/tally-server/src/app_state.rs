//! Shared application state for the counter server.
//!
//! The registry is built once at startup and handed to every handler through
//! axum `State`; there is no module-level singleton.

use std::sync::Arc;

use tally_core::CounterRegistry;

use crate::config::ServerConfig;
use crate::obs::metrics::ServerMetrics;

#[derive(Clone)]
pub struct AppState {
    cfg: Arc<ServerConfig>,
    registry: Arc<CounterRegistry>,
    metrics: Arc<ServerMetrics>,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Self {
        Self {
            cfg: Arc::new(cfg),
            registry: Arc::new(CounterRegistry::new()),
            metrics: Arc::new(ServerMetrics::default()),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.cfg
    }

    pub fn registry(&self) -> &CounterRegistry {
        &self.registry
    }

    pub fn metrics(&self) -> &ServerMetrics {
        &self.metrics
    }

    pub fn set_draining(&self) {
        self.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }

    /// Gauge lines appended to `/metrics`.
    pub fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        vec![("tally_counters_live", self.registry.len() as u64)]
    }
}
