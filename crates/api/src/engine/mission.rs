//! Mission lifecycle: creation, assignment, destruction, and the
//! completion cascade.
//!
//! Every write runs in one transaction. Rules come from
//! [`spycat_core::mission`]; this module supplies the locking and the
//! persistence around them. An early return drops the transaction, which
//! rolls it back.

use std::collections::HashMap;

use sqlx::{PgConnection, PgPool};
use spycat_core::error::CoreError;
use spycat_core::mission::{self, Assignment, MissionState};
use spycat_core::types::DbId;
use spycat_core::validation;
use spycat_db::models::mission::{CreateMission, MissionWithTargets, UpdateMission};
use spycat_db::models::target::{CreateTarget, Target};
use spycat_db::repositories::{CatRepo, MissionRepo, TargetRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};

fn mission_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Mission",
        id,
    })
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// Load one mission with its targets.
pub async fn find_mission(pool: &PgPool, id: DbId) -> AppResult<MissionWithTargets> {
    let mission = MissionRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| mission_not_found(id))?;
    let targets = TargetRepo::list_by_mission(pool, id).await?;
    Ok(MissionWithTargets { mission, targets })
}

/// Load every mission with its targets.
pub async fn list_missions(pool: &PgPool) -> AppResult<Vec<MissionWithTargets>> {
    let missions = MissionRepo::list(pool).await?;
    let ids: Vec<DbId> = missions.iter().map(|m| m.id).collect();

    let mut by_mission: HashMap<DbId, Vec<Target>> = HashMap::new();
    for target in TargetRepo::list_by_missions(pool, &ids).await? {
        by_mission.entry(target.mission_id).or_default().push(target);
    }

    Ok(missions
        .into_iter()
        .map(|mission| MissionWithTargets {
            targets: by_mission.remove(&mission.id).unwrap_or_default(),
            mission,
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// Create a mission and its targets atomically.
///
/// Fails with `InvalidTargetCount` outside 1..=3 targets, `OutOfRange` on a
/// malformed target, and `CatUnavailable` if the requested cat is busy.
pub async fn create_mission(pool: &PgPool, input: &CreateMission) -> AppResult<MissionWithTargets> {
    mission::validate_target_count(input.targets.len())?;
    for draft in &input.targets {
        validate_new_target(draft)?;
    }

    let mut tx = pool.begin().await?;

    if let Some(cat_id) = input.cat {
        claim_cat(&mut tx, cat_id).await?;
    }

    let created = MissionRepo::create(&mut *tx, input.cat).await?;
    let mut targets = Vec::with_capacity(input.targets.len());
    for draft in &input.targets {
        targets.push(TargetRepo::create(&mut *tx, created.id, draft).await?);
    }

    tx.commit().await?;

    tracing::info!(
        mission_id = created.id,
        cat_id = ?created.cat_id,
        target_count = targets.len(),
        "Mission created"
    );

    Ok(MissionWithTargets {
        mission: created,
        targets,
    })
}

/// Apply a mission patch. Only the `cat` reference can change, and only
/// from unassigned to an available cat.
pub async fn update_mission(
    pool: &PgPool,
    id: DbId,
    input: &UpdateMission,
) -> AppResult<MissionWithTargets> {
    let mut tx = pool.begin().await?;

    let current = MissionRepo::find_for_update(&mut *tx, id)
        .await?
        .ok_or_else(|| mission_not_found(id))?;

    let mission = match mission::plan_assignment(id, current.cat_id, input.cat)? {
        Assignment::Unchanged => current,
        Assignment::Assign(cat_id) => {
            claim_cat(&mut tx, cat_id).await?;
            let assigned = MissionRepo::set_cat(&mut *tx, id, cat_id).await?;
            tracing::info!(mission_id = id, cat_id, "Cat assigned to mission");
            assigned
        }
    };

    let targets = TargetRepo::list_by_mission(&mut *tx, id).await?;
    tx.commit().await?;

    Ok(MissionWithTargets { mission, targets })
}

/// Delete an unassigned mission together with its targets.
pub async fn destroy_mission(pool: &PgPool, id: DbId) -> AppResult<()> {
    let mut tx = pool.begin().await?;

    let current = MissionRepo::find_for_update(&mut *tx, id)
        .await?
        .ok_or_else(|| mission_not_found(id))?;
    mission::ensure_destroyable(id, current.cat_id)?;

    MissionRepo::delete(&mut *tx, id).await?;
    tx.commit().await?;

    tracing::info!(mission_id = id, "Mission destroyed");
    Ok(())
}

/// Mark the mission complete if every one of its targets is.
///
/// Must run inside the transaction that changed a target. Returns `true`
/// when this call completed the mission.
pub async fn cascade_completion(conn: &mut PgConnection, mission_id: DbId) -> AppResult<bool> {
    let flags = TargetRepo::completion_flags(&mut *conn, mission_id).await?;
    if !mission::all_targets_complete(flags) {
        return Ok(false);
    }

    let completed = MissionRepo::mark_complete(&mut *conn, mission_id).await?;
    if completed {
        tracing::info!(
            mission_id,
            state = ?MissionState::Complete,
            "All targets complete, mission completed"
        );
    }
    Ok(completed)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Lock `cat_id` and verify it has no incomplete mission.
///
/// The row lock holds until the surrounding transaction ends, so two
/// concurrent assignments of the same cat cannot both pass the check.
async fn claim_cat(conn: &mut PgConnection, cat_id: DbId) -> AppResult<()> {
    if !CatRepo::lock(&mut *conn, cat_id).await? {
        return Err(CoreError::Validation {
            field: "cat",
            message: format!("Cat {cat_id} does not exist"),
        }
        .into());
    }

    let current = CatRepo::current_mission_id(&mut *conn, cat_id).await?;
    mission::ensure_cat_available(cat_id, current)?;
    Ok(())
}

/// Validate one target of a creation payload.
fn validate_new_target(draft: &CreateTarget) -> Result<(), CoreError> {
    draft.validate()
        .map_err(|e| validation::out_of_range(&e))
        .and_then(|()| validation::validate_not_blank("name", &draft.name))
        .and_then(|()| validation::validate_not_blank("country", &draft.country))
        .map_err(|err| match err {
            CoreError::OutOfRange { field, reason } => CoreError::OutOfRange {
                field: format!("targets.{field}"),
                reason,
            },
            other => other,
        })
}
