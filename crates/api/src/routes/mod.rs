pub mod cats;
pub mod health;
pub mod missions;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree. Paths are mounted at the root.
///
/// Route hierarchy:
///
/// ```text
/// /cats                                  list, create
/// /cats/{id}                             get, patch salary, delete
///
/// /missions                              list, create (with 1-3 targets)
/// /missions/{id}                         get, delete
/// /missions/{id}/assign                  assign a cat (PATCH)
/// /missions/{id}/targets/{target_id}     update notes / complete (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/cats", cats::router())
        .nest("/missions", missions::router())
}
