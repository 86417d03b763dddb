//! Integration tests for the widget repository.
//!
//! Exercises the repository layer against a real database:
//! - Insert with server-assigned id and timestamps
//! - List, kind filter, lookup by id
//! - Partial update semantics (only supplied fields change)
//! - Delete returning the removed row

use sqlx::PgPool;

use homedash_db::models::widget::{CreateWidget, GridPosition, UpdateWidget, WidgetKind};
use homedash_db::repositories::WidgetRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_widget(kind: WidgetKind) -> CreateWidget {
    CreateWidget {
        kind,
        config: serde_json::Map::new(),
        position: GridPosition {
            x: 0,
            y: 0,
            w: 2,
            h: 2,
        },
    }
}

fn notes_widget(text: &str) -> CreateWidget {
    let mut config = serde_json::Map::new();
    config.insert("text".to_string(), serde_json::Value::from(text));
    CreateWidget {
        kind: WidgetKind::Notes,
        config,
        position: GridPosition {
            x: 1,
            y: 2,
            w: 3,
            h: 3,
        },
    }
}

// ---------------------------------------------------------------------------
// Test: Create assigns id and equal timestamps
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_assigns_id_and_timestamps(pool: PgPool) {
    let widget = WidgetRepo::create(&pool, &notes_widget("hi")).await.unwrap();

    assert_eq!(widget.kind, WidgetKind::Notes);
    assert_eq!(widget.config["text"], "hi");
    assert_eq!(widget.position.0.x, 1);
    assert_eq!(widget.position.0.w, 3);
    assert_eq!(widget.created_at, widget.updated_at);
}

// ---------------------------------------------------------------------------
// Test: Find by id round-trips the created row
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_find_by_id_round_trips(pool: PgPool) {
    let created = WidgetRepo::create(&pool, &notes_widget("hi")).await.unwrap();

    let found = WidgetRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("widget should exist");

    assert_eq!(found.id, created.id);
    assert_eq!(found.kind, created.kind);
    assert_eq!(found.config, created.config);
    assert_eq!(found.position.0, created.position.0);
    assert_eq!(found.created_at, created.created_at);
}

// ---------------------------------------------------------------------------
// Test: Find by id returns None for an unknown id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_find_by_unknown_id_is_none(pool: PgPool) {
    let missing = WidgetRepo::find_by_id(&pool, uuid::Uuid::new_v4())
        .await
        .unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Test: Kind filter returns only matching widgets
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_by_kind_filters(pool: PgPool) {
    WidgetRepo::create(&pool, &new_widget(WidgetKind::SystemStats))
        .await
        .unwrap();
    WidgetRepo::create(&pool, &notes_widget("a")).await.unwrap();
    WidgetRepo::create(&pool, &notes_widget("b")).await.unwrap();

    let all = WidgetRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 3);

    let notes = WidgetRepo::list_by_kind(&pool, WidgetKind::Notes)
        .await
        .unwrap();
    assert_eq!(notes.len(), 2);
    assert!(notes.iter().all(|w| w.kind == WidgetKind::Notes));
}

// ---------------------------------------------------------------------------
// Test: Partial update changes only supplied fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_partial_update_merges_supplied_fields(pool: PgPool) {
    let created = WidgetRepo::create(&pool, &notes_widget("hi")).await.unwrap();

    // Give the clock room so updated_at is strictly newer.
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let mut config = serde_json::Map::new();
    config.insert("text".to_string(), serde_json::Value::from("bye"));
    let dto = UpdateWidget {
        config: Some(config),
        ..UpdateWidget::default()
    };

    let updated = WidgetRepo::update(&pool, created.id, &dto)
        .await
        .unwrap()
        .expect("widget should exist");

    assert_eq!(updated.config["text"], "bye");
    // Unsupplied fields keep their stored values.
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.kind, created.kind);
    assert_eq!(updated.position.0, created.position.0);
    assert_eq!(updated.created_at, created.created_at);
    // The mutation always refreshes updated_at.
    assert!(updated.updated_at > created.updated_at);
}

// ---------------------------------------------------------------------------
// Test: Update of an unknown id returns None, not an error
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_update_unknown_id_is_none(pool: PgPool) {
    let dto = UpdateWidget {
        kind: Some(WidgetKind::Notes),
        ..UpdateWidget::default()
    };
    let missing = WidgetRepo::update(&pool, uuid::Uuid::new_v4(), &dto)
        .await
        .unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Test: Delete returns the removed row exactly once
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_returns_row_once(pool: PgPool) {
    let created = WidgetRepo::create(&pool, &notes_widget("hi")).await.unwrap();

    let deleted = WidgetRepo::delete(&pool, created.id)
        .await
        .unwrap()
        .expect("widget should exist");
    assert_eq!(deleted.id, created.id);

    // The row is gone; a second delete finds nothing.
    assert!(WidgetRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
    assert!(WidgetRepo::delete(&pool, created.id).await.unwrap().is_none());
}
