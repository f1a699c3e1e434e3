//! Lightweight in-process metrics.
//!
//! Request counts and latencies are stored as atomics behind `DashMap` and
//! rendered in Prometheus text format by the `/metrics` handler.

pub mod metrics;
