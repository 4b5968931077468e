//! Parlor — HTTP API surface.
//!
//! Exposed as a library so integration tests can build the same router the
//! binary serves.

pub mod error;
pub mod legacy;
pub mod routes;
pub mod state;
