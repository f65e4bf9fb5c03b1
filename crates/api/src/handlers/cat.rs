//! Handlers for the `/cats` resource.
//!
//! `is_available` and `current_mission_id` are computed on read; if a
//! client sends them in a write payload they are dropped by the DTOs.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use spycat_core::breed;
use spycat_core::error::CoreError;
use spycat_core::types::DbId;
use spycat_core::validation;
use spycat_db::models::cat::{Cat, CreateCat, UpdateCat};
use spycat_db::repositories::CatRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

fn cat_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Cat", id })
}

/// Check field bounds, then ask the breed oracle about any breed present.
async fn validate_cat(state: &AppState, input: &UpdateCat) -> AppResult<()> {
    input.validate().map_err(|e| validation::out_of_range(&e))?;
    if let Some(name) = &input.name {
        validation::validate_not_blank("name", name)?;
    }

    let Some(breed_name) = &input.breed else {
        return Ok(());
    };
    validation::validate_not_blank("breed", breed_name)?;

    match breed::verify_breed(state.breeds.as_ref(), breed_name).await {
        Err(CoreError::ValidationUnavailable(reason)) => {
            tracing::warn!(breed = %breed_name, %reason, "Breed oracle unavailable");
            Err(CoreError::ValidationUnavailable(reason).into())
        }
        other => Ok(other?),
    }
}

/// POST /api/v1/cats
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCat>,
) -> AppResult<(StatusCode, Json<Cat>)> {
    validate_cat(&state, &UpdateCat::from(input.clone())).await?;

    let cat = CatRepo::create(&state.pool, &input).await?;
    tracing::info!(cat_id = cat.id, breed = %cat.breed, "Cat created");
    Ok((StatusCode::CREATED, Json(cat)))
}

/// GET /api/v1/cats
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Cat>>> {
    let cats = CatRepo::list(&state.pool).await?;
    Ok(Json(cats))
}

/// GET /api/v1/cats/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Cat>> {
    let cat = CatRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| cat_not_found(id))?;
    Ok(Json(cat))
}

/// PATCH /api/v1/cats/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateCat>,
) -> AppResult<Json<Cat>> {
    apply_update(&state, id, &input).await.map(Json)
}

/// PUT /api/v1/cats/{id}
///
/// Full replacement: every writable field must be present.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<CreateCat>,
) -> AppResult<Json<Cat>> {
    apply_update(&state, id, &UpdateCat::from(input)).await.map(Json)
}

async fn apply_update(state: &AppState, id: DbId, input: &UpdateCat) -> AppResult<Cat> {
    if CatRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(cat_not_found(id));
    }
    validate_cat(state, input).await?;

    let cat = CatRepo::update(&state.pool, id, input)
        .await?
        .ok_or_else(|| cat_not_found(id))?;
    tracing::info!(cat_id = id, "Cat updated");
    Ok(cat)
}

/// DELETE /api/v1/cats/{id}
///
/// Unconditional. A mission the cat was on stays, unassigned.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = CatRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(cat_id = id, "Cat deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(cat_not_found(id))
    }
}
