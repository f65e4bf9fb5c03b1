pub mod cats;
pub mod health;
pub mod missions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /cats                                     list, create
/// /cats/{id}                                get, replace, patch, delete
///
/// /missions                                 list, create
/// /missions/{id}                            get, put/patch (assign cat), delete
/// /missions/{mission_id}/targets/{id}       patch
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/cats", cats::router())
        .nest("/missions", missions::router())
}
