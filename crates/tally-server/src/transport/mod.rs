//! HTTP transport layer.
//!
//! - `http`: one handler per verb on `/counters/:name`
//! - `error`: `TallyError` -> status code + JSON error body

pub mod error;
pub mod http;
