//! Handlers for the widget CRUD surface.
//!
//! Each handler follows validate -> store -> serialize: schema failures
//! stop with a 400 carrying field-level issues, an empty store result
//! where a row was expected becomes a 404, and every mutation logs an
//! audit line with the widget id.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use homedash_core::error::CoreError;
use homedash_core::types::WidgetId;
use homedash_db::models::widget::{CreateWidget, GridPosition, UpdateWidget, Widget, WidgetKind};
use homedash_db::repositories::WidgetRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters and wire types
// ---------------------------------------------------------------------------

/// Query parameters for listing widgets.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Restrict the listing to a single widget kind.
    #[serde(rename = "type")]
    pub kind: Option<WidgetKind>,
}

/// Wire representation of a widget.
///
/// Identical to the stored row except that timestamps are ISO-8601
/// strings (millisecond precision, `Z` suffix).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetResponse {
    pub id: WidgetId,
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    pub config: serde_json::Value,
    pub position: GridPosition,
    pub created_at: String,
    pub updated_at: String,
}

/// Convert a stored row to its wire form.
///
/// All non-temporal fields pass through unchanged. The output carries
/// timestamps as plain strings, so serializing a `WidgetResponse` any
/// number of times yields the same JSON.
pub fn serialize_widget(widget: Widget) -> WidgetResponse {
    WidgetResponse {
        id: widget.id,
        kind: widget.kind,
        config: widget.config,
        position: widget.position.0,
        created_at: widget
            .created_at
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        updated_at: widget
            .updated_at
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /widgets
///
/// List widgets, optionally filtered by `?type=`.
pub async fn list_widgets(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let widgets = match params.kind {
        Some(kind) => WidgetRepo::list_by_kind(&state.pool, kind).await?,
        None => WidgetRepo::list_all(&state.pool).await?,
    };

    let items: Vec<WidgetResponse> = widgets.into_iter().map(serialize_widget).collect();
    Ok(Json(items))
}

/// POST /widgets
///
/// Create a new widget; the server assigns `id` and both timestamps.
pub async fn create_widget(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateWidget>,
) -> AppResult<impl IntoResponse> {
    let widget = WidgetRepo::create(&state.pool, &input).await?;

    tracing::info!(widget_id = %widget.id, "Widget created");

    Ok((StatusCode::CREATED, Json(serialize_widget(widget))))
}

/// GET /widgets/{id}
///
/// Retrieve a single widget by ID.
pub async fn get_widget(
    State(state): State<AppState>,
    Path(widget_id): Path<WidgetId>,
) -> AppResult<impl IntoResponse> {
    let widget = WidgetRepo::find_by_id(&state.pool, widget_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Widget",
            id: widget_id,
        }))?;

    Ok(Json(serialize_widget(widget)))
}

/// PUT /widgets/{id}
///
/// Partially update a widget; only supplied fields change, and
/// `updated_at` is always refreshed.
pub async fn update_widget(
    State(state): State<AppState>,
    Path(widget_id): Path<WidgetId>,
    ValidatedJson(input): ValidatedJson<UpdateWidget>,
) -> AppResult<impl IntoResponse> {
    let widget = WidgetRepo::update(&state.pool, widget_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Widget",
            id: widget_id,
        }))?;

    tracing::info!(widget_id = %widget.id, "Widget updated");

    Ok(Json(serialize_widget(widget)))
}

/// DELETE /widgets/{id}
///
/// Delete a widget. A second delete of the same id is a plain 404.
pub async fn delete_widget(
    State(state): State<AppState>,
    Path(widget_id): Path<WidgetId>,
) -> AppResult<impl IntoResponse> {
    let deleted = WidgetRepo::delete(&state.pool, widget_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Widget",
            id: widget_id,
        }))?;

    tracing::info!(widget_id = %deleted.id, "Widget deleted");

    Ok(StatusCode::NO_CONTENT)
}
