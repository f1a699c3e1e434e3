//! tally core: counter registry, error taxonomy, and response bodies.
//!
//! This crate owns the domain of the service: a name -> value map with
//! create / read / increment / delete semantics. It carries no HTTP or
//! runtime dependencies, so the registry can be exercised directly in tests
//! and wrapped by any transport.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every failure surfaces as `TallyError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;
pub mod registry;

pub use error::{Result, TallyError};
pub use protocol::body::CounterBody;
pub use registry::CounterRegistry;
