//! Route definitions for the Docker proxy.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::docker;
use crate::state::AppState;

/// Docker routes mounted at `/docker`.
///
/// ```text
/// GET  /containers              -> list_containers
/// GET  /containers/{id}/stats   -> container_stats
/// POST /containers/{id}/action  -> container_action
/// GET  /system                  -> docker_system
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/containers", get(docker::list_containers))
        .route("/containers/{id}/stats", get(docker::container_stats))
        .route("/containers/{id}/action", post(docker::container_action))
        .route("/system", get(docker::docker_system))
}
