//! Route definitions for the widget CRUD surface.

use axum::routing::get;
use axum::Router;

use crate::handlers::widgets;
use crate::state::AppState;

/// Widget routes mounted at `/widgets`.
///
/// ```text
/// GET    /      -> list_widgets
/// POST   /      -> create_widget
/// GET    /{id}  -> get_widget
/// PUT    /{id}  -> update_widget
/// DELETE /{id}  -> delete_widget
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(widgets::list_widgets).post(widgets::create_widget),
        )
        .route(
            "/{id}",
            get(widgets::get_widget)
                .put(widgets::update_widget)
                .delete(widgets::delete_widget),
        )
}
