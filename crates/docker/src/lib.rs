//! Docker Engine API client library.
//!
//! Wraps the subset of the Docker Engine HTTP API the dashboard consumes:
//! container listing, one-shot stats, lifecycle actions, and system-level
//! counts. The daemon's own wire shapes live in [`raw`]; callers normally
//! see only the typed summaries in [`types`].

pub mod api;
pub mod raw;
pub mod stats;
pub mod types;

pub use api::{DockerApi, DockerApiError};
