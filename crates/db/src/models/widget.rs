//! Widget entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use homedash_core::types::{Timestamp, WidgetId};

/// Closed set of widget kinds a dashboard tile can have.
///
/// Stored as the Postgres enum `widget_type`; serialized on the wire in
/// kebab-case (`system-stats`, `notes`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "widget_type", rename_all = "kebab-case")]
pub enum WidgetKind {
    SystemStats,
    DockerQuick,
    PiholeStats,
    QbittorrentStats,
    Notes,
}

/// Placement of a widget on the dashboard grid.
///
/// `x`/`y` are the top-left cell, `w`/`h` the span in cells. A widget
/// always occupies at least one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct GridPosition {
    #[validate(range(min = 0, message = "must be a non-negative integer"))]
    pub x: i32,
    #[validate(range(min = 0, message = "must be a non-negative integer"))]
    pub y: i32,
    #[validate(range(min = 1, message = "must be a positive integer"))]
    pub w: i32,
    #[validate(range(min = 1, message = "must be a positive integer"))]
    pub h: i32,
}

/// A row from the `widgets` table.
#[derive(Debug, Clone, FromRow)]
pub struct Widget {
    pub id: WidgetId,
    #[sqlx(rename = "widget_type")]
    pub kind: WidgetKind,
    pub config: serde_json::Value,
    #[sqlx(rename = "grid_position")]
    pub position: Json<GridPosition>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new widget.
///
/// `config` is an open string-keyed mapping; its meaning depends on the
/// widget kind and is deliberately not validated per-kind.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWidget {
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    pub config: serde_json::Map<String, serde_json::Value>,
    #[validate(nested)]
    pub position: GridPosition,
}

/// DTO for partially updating a widget.
///
/// Only supplied fields are validated and merged; absent fields keep their
/// stored values.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateWidget {
    #[serde(rename = "type")]
    pub kind: Option<WidgetKind>,
    pub config: Option<serde_json::Map<String, serde_json::Value>>,
    #[validate(nested)]
    pub position: Option<GridPosition>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use homedash_core::validation::flatten_issues;
    use serde_json::json;

    #[test]
    fn widget_kind_uses_kebab_case_on_the_wire() {
        let kind: WidgetKind = serde_json::from_value(json!("system-stats")).unwrap();
        assert_eq!(kind, WidgetKind::SystemStats);
        assert_eq!(
            serde_json::to_value(WidgetKind::QbittorrentStats).unwrap(),
            json!("qbittorrent-stats")
        );
    }

    #[test]
    fn unknown_widget_kind_is_rejected() {
        assert!(serde_json::from_value::<WidgetKind>(json!("unknown-type")).is_err());
    }

    #[test]
    fn create_body_with_zero_width_reports_position_issue() {
        let dto: CreateWidget = serde_json::from_value(json!({
            "type": "notes",
            "config": {},
            "position": { "x": 0, "y": 0, "w": 0, "h": 1 },
        }))
        .unwrap();

        let errors = dto.validate().unwrap_err();
        let issues = flatten_issues(&errors);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "position.w");
        assert_eq!(issues[0].message, "must be a positive integer");
    }

    #[test]
    fn create_body_accepts_empty_config() {
        let dto: CreateWidget = serde_json::from_value(json!({
            "type": "notes",
            "config": {},
            "position": { "x": 1, "y": 2, "w": 3, "h": 3 },
        }))
        .unwrap();
        assert!(dto.validate().is_ok());
        assert!(dto.config.is_empty());
    }

    #[test]
    fn create_body_rejects_non_object_config() {
        let result = serde_json::from_value::<CreateWidget>(json!({
            "type": "notes",
            "config": "not-an-object",
            "position": { "x": 0, "y": 0, "w": 1, "h": 1 },
        }));
        assert!(result.is_err());
    }

    #[test]
    fn update_body_with_no_fields_is_valid_and_empty() {
        let dto: UpdateWidget = serde_json::from_value(json!({})).unwrap();
        assert!(dto.validate().is_ok());
        assert!(dto.kind.is_none());
        assert!(dto.config.is_none());
        assert!(dto.position.is_none());
    }

    #[test]
    fn update_body_validates_only_supplied_fields() {
        let dto: UpdateWidget = serde_json::from_value(json!({
            "position": { "x": -1, "y": 0, "w": 1, "h": 1 },
        }))
        .unwrap();

        let errors = dto.validate().unwrap_err();
        let issues = flatten_issues(&errors);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "position.x");
        assert_eq!(issues[0].message, "must be a non-negative integer");
    }
}
