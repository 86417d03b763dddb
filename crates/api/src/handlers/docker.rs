//! Handlers proxying the Docker Engine API.
//!
//! Thin pass-through over `homedash_docker`: validate the request, call
//! the daemon client, serialize its typed summaries. Daemon failures are
//! logged with detail and surfaced as generic 500s.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use homedash_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for the container listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ContainerListParams {
    /// Include stopped containers. Defaults to false, like the daemon.
    #[serde(default)]
    pub all: bool,
    /// Truncate the listing to at most this many entries (1..=100).
    pub limit: Option<usize>,
}

/// Lifecycle action on a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerAction {
    Start,
    Stop,
    Restart,
}

/// Request body for the container action endpoint.
#[derive(Debug, Deserialize)]
pub struct ActionRequest {
    pub action: ContainerAction,
}

/// Response body for the container action endpoint.
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /docker/containers
///
/// List containers, optionally including stopped ones.
pub async fn list_containers(
    State(state): State<AppState>,
    Query(params): Query<ContainerListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(limit) = params.limit {
        if !(1..=100).contains(&limit) {
            return Err(AppError::Core(CoreError::Validation(
                "limit must be between 1 and 100".to_string(),
            )));
        }
    }

    let mut containers = state.docker.list_containers(params.all).await?;
    if let Some(limit) = params.limit {
        containers.truncate(limit);
    }

    Ok(Json(containers))
}

/// GET /docker/containers/{id}/stats
///
/// One-shot resource usage for a single container.
pub async fn container_stats(
    State(state): State<AppState>,
    Path(container_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let stats = state.docker.container_stats(&container_id).await?;
    Ok(Json(stats))
}

/// POST /docker/containers/{id}/action
///
/// Execute a start/stop/restart action on a container.
pub async fn container_action(
    State(state): State<AppState>,
    Path(container_id): Path<String>,
    Json(input): Json<ActionRequest>,
) -> AppResult<impl IntoResponse> {
    let (past_tense, result) = match input.action {
        ContainerAction::Start => ("started", state.docker.start_container(&container_id).await),
        ContainerAction::Stop => ("stopped", state.docker.stop_container(&container_id).await),
        ContainerAction::Restart => (
            "restarted",
            state.docker.restart_container(&container_id).await,
        ),
    };
    result?;

    tracing::info!(container_id = %container_id, action = ?input.action, "Container action executed");

    Ok(Json(ActionResponse {
        success: true,
        message: format!("Container {past_tense} successfully"),
    }))
}

/// GET /docker/system
///
/// Daemon-wide object counts.
pub async fn docker_system(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let info = state.docker.system_info().await?;
    Ok(Json(info))
}
