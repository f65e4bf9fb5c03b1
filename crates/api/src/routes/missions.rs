//! Route definitions for the `/missions` resource.
//!
//! Targets have no top-level collection; they are created with their
//! mission and patched under `/missions/{mission_id}/targets/{id}`.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{mission, target};
use crate::state::AppState;

/// Routes mounted at `/missions`.
///
/// ```text
/// GET    /                               -> list
/// POST   /                               -> create
/// GET    /{id}                           -> get_by_id
/// PUT    /{id}                           -> update
/// PATCH  /{id}                           -> update
/// DELETE /{id}                           -> delete
///
/// PATCH  /{mission_id}/targets/{id}      -> target::update
/// ```
pub fn router() -> Router<AppState> {
    let target_routes = Router::new().route("/{id}", patch(target::update));

    Router::new()
        .route("/", get(mission::list).post(mission::create))
        .route(
            "/{id}",
            get(mission::get_by_id)
                .put(mission::update)
                .patch(mission::update)
                .delete(mission::delete),
        )
        .nest("/{mission_id}/targets", target_routes)
}
