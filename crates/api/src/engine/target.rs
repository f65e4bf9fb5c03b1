//! Target lifecycle guard.
//!
//! Open targets accept patches to `name`, `country`, `notes`, and
//! `is_complete`. Finalized targets accept nothing. The mission completion
//! cascade runs in the same transaction as the target write.

use sqlx::PgPool;
use spycat_core::error::CoreError;
use spycat_core::target;
use spycat_core::types::DbId;
use spycat_core::validation;
use spycat_db::models::target::{Target, UpdateTarget};
use spycat_db::repositories::{MissionRepo, TargetRepo};
use validator::Validate;

use crate::engine::mission::cascade_completion;
use crate::error::{AppError, AppResult};

/// Patch one target of one mission.
///
/// The owning mission row is locked first so concurrent patches to sibling
/// targets serialize and the last one to finish sees every completion.
pub async fn update_target(
    pool: &PgPool,
    mission_id: DbId,
    target_id: DbId,
    input: &UpdateTarget,
) -> AppResult<Target> {
    let mut tx = pool.begin().await?;

    MissionRepo::find_for_update(&mut *tx, mission_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Mission",
            id: mission_id,
        }))?;

    let current = TargetRepo::find_in_mission_for_update(&mut *tx, mission_id, target_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Target",
            id: target_id,
        }))?;

    target::ensure_target_open(target_id, current.is_complete)?;
    validate_patch(input)?;

    let updated = TargetRepo::update(&mut *tx, target_id, input).await?;
    let mission_completed = cascade_completion(&mut tx, mission_id).await?;

    tx.commit().await?;

    tracing::info!(
        mission_id,
        target_id,
        is_complete = updated.is_complete,
        mission_completed,
        "Target updated"
    );

    Ok(updated)
}

fn validate_patch(input: &UpdateTarget) -> Result<(), CoreError> {
    input.validate().map_err(|e| validation::out_of_range(&e))?;
    if let Some(name) = &input.name {
        validation::validate_not_blank("name", name)?;
    }
    if let Some(country) = &input.country {
        validation::validate_not_blank("country", country)?;
    }
    Ok(())
}
