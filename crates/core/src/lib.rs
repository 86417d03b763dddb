//! Domain types and domain errors for the homedash backend.
//!
//! Pure logic only — no I/O. The `db` crate owns persistence, the `api`
//! crate owns HTTP concerns, and the `docker` crate owns the daemon client.

pub mod error;
pub mod metrics;
pub mod types;
pub mod validation;
