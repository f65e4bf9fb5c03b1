//! Handlers for targets nested under `/missions/{mission_id}/targets`.

use axum::extract::{Path, State};
use axum::Json;
use spycat_core::types::DbId;
use spycat_db::models::target::{Target, UpdateTarget};

use crate::engine::target as engine;
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// PATCH /api/v1/missions/{mission_id}/targets/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((mission_id, id)): Path<(DbId, DbId)>,
    AppJson(input): AppJson<UpdateTarget>,
) -> AppResult<Json<Target>> {
    let target = engine::update_target(&state.pool, mission_id, id, &input).await?;
    Ok(Json(target))
}
