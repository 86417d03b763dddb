//! Route definitions for host system statistics.

use axum::routing::get;
use axum::Router;

use crate::handlers::system;
use crate::state::AppState;

/// System routes mounted at `/system`.
///
/// ```text
/// GET /stats -> system_stats (5-second cache)
/// GET /info  -> system_info
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(system::system_stats))
        .route("/info", get(system::system_info))
}
