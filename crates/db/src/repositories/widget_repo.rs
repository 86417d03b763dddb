//! Repository for the `widgets` table.
//!
//! All operations are single statements keyed by the `id` primary key;
//! there is no multi-row invariant, so no transactions are needed here.

use sqlx::types::Json;
use sqlx::PgPool;

use homedash_core::types::WidgetId;

use crate::models::widget::{CreateWidget, UpdateWidget, Widget, WidgetKind};

/// Column list for `widgets` queries.
const WIDGET_COLUMNS: &str = "\
    id, widget_type, config, grid_position, created_at, updated_at";

/// Provides data access for dashboard widgets.
pub struct WidgetRepo;

impl WidgetRepo {
    /// Insert a new widget.
    ///
    /// `id`, `created_at` and `updated_at` are assigned by the database.
    pub async fn create(pool: &PgPool, dto: &CreateWidget) -> Result<Widget, sqlx::Error> {
        let query = format!(
            "INSERT INTO widgets (widget_type, config, grid_position) \
             VALUES ($1, $2, $3) \
             RETURNING {WIDGET_COLUMNS}"
        );
        sqlx::query_as::<_, Widget>(&query)
            .bind(dto.kind)
            .bind(Json(&dto.config))
            .bind(Json(dto.position))
            .fetch_one(pool)
            .await
    }

    /// List all widgets in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Widget>, sqlx::Error> {
        let query = format!("SELECT {WIDGET_COLUMNS} FROM widgets ORDER BY created_at");
        sqlx::query_as::<_, Widget>(&query).fetch_all(pool).await
    }

    /// List widgets of a single kind, in insertion order.
    pub async fn list_by_kind(
        pool: &PgPool,
        kind: WidgetKind,
    ) -> Result<Vec<Widget>, sqlx::Error> {
        let query = format!(
            "SELECT {WIDGET_COLUMNS} FROM widgets \
             WHERE widget_type = $1 ORDER BY created_at"
        );
        sqlx::query_as::<_, Widget>(&query)
            .bind(kind)
            .fetch_all(pool)
            .await
    }

    /// Find a single widget by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: WidgetId,
    ) -> Result<Option<Widget>, sqlx::Error> {
        let query = format!("SELECT {WIDGET_COLUMNS} FROM widgets WHERE id = $1");
        sqlx::query_as::<_, Widget>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a widget.
    ///
    /// Uses `COALESCE` so only provided fields change; `updated_at` is
    /// refreshed on every match. Returns `None` when no row has this ID.
    pub async fn update(
        pool: &PgPool,
        id: WidgetId,
        dto: &UpdateWidget,
    ) -> Result<Option<Widget>, sqlx::Error> {
        let query = format!(
            "UPDATE widgets SET \
                 widget_type   = COALESCE($2, widget_type), \
                 config        = COALESCE($3, config), \
                 grid_position = COALESCE($4, grid_position), \
                 updated_at    = now() \
             WHERE id = $1 \
             RETURNING {WIDGET_COLUMNS}"
        );
        sqlx::query_as::<_, Widget>(&query)
            .bind(id)
            .bind(dto.kind)
            .bind(dto.config.as_ref().map(Json))
            .bind(dto.position.map(Json))
            .fetch_optional(pool)
            .await
    }

    /// Delete a widget by ID, returning the deleted row.
    ///
    /// Returns `None` when no row has this ID, so the caller can tell an
    /// absent widget apart from a storage fault.
    pub async fn delete(
        pool: &PgPool,
        id: WidgetId,
    ) -> Result<Option<Widget>, sqlx::Error> {
        let query = format!("DELETE FROM widgets WHERE id = $1 RETURNING {WIDGET_COLUMNS}");
        sqlx::query_as::<_, Widget>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
