//! Wire-level response shapes.
//!
//! Success bodies are single-key JSON objects (`{"<name>": <value>}`). The key
//! is data, not a field name, so the body is built by an explicit type with a
//! hand-written `Serialize` rather than an ad-hoc `json!` literal.

pub mod body;
