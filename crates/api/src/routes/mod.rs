pub mod docker;
pub mod health;
pub mod system;
pub mod widgets;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (everything except `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /widgets                          list, create
/// /widgets/{id}                     get, update, delete
///
/// /system/stats                     host resource snapshot (cached)
/// /system/info                      host identification + CPU inventory
///
/// /docker/containers                list containers
/// /docker/containers/{id}/stats     one-shot container stats
/// /docker/containers/{id}/action    start/stop/restart (POST)
/// /docker/system                    daemon object counts
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/widgets", widgets::router())
        .nest("/system", system::router())
        .nest("/docker", docker::router())
}
