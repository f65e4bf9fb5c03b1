//! Handlers for the `/missions` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use spycat_core::types::DbId;
use spycat_db::models::mission::{CreateMission, MissionWithTargets, UpdateMission};

use crate::engine::mission as engine;
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// POST /api/v1/missions
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMission>,
) -> AppResult<(StatusCode, Json<MissionWithTargets>)> {
    let mission = engine::create_mission(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(mission)))
}

/// GET /api/v1/missions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MissionWithTargets>>> {
    let missions = engine::list_missions(&state.pool).await?;
    Ok(Json(missions))
}

/// GET /api/v1/missions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MissionWithTargets>> {
    let mission = engine::find_mission(&state.pool, id).await?;
    Ok(Json(mission))
}

/// PATCH /api/v1/missions/{id}
///
/// Also serves `PUT`: only `cat` is read from either body.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateMission>,
) -> AppResult<Json<MissionWithTargets>> {
    let mission = engine::update_mission(&state.pool, id, &input).await?;
    Ok(Json(mission))
}

/// DELETE /api/v1/missions/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    engine::destroy_mission(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
