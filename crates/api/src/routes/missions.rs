//! Route definitions for the `/missions` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::mission;
use crate::state::AppState;

/// Routes mounted at `/missions`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{id}                          -> get_by_id
/// DELETE /{id}                          -> delete
/// PATCH  /{id}/assign                   -> assign_cat
/// PATCH  /{id}/targets/{target_id}      -> update_target
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(mission::list).post(mission::create))
        .route("/{id}", get(mission::get_by_id).delete(mission::delete))
        .route("/{id}/assign", patch(mission::assign_cat))
        .route(
            "/{id}/targets/{target_id}",
            patch(mission::update_target),
        )
}
