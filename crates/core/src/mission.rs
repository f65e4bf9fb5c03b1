//! Mission lifecycle rules.
//!
//! A mission owns 1 to 3 targets fixed at creation, may hold one cat, and
//! becomes complete exactly when all of its targets are complete. Once a
//! cat is attached it stays attached; only deleting the cat clears it.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Fewest targets a mission may be created with.
pub const MIN_TARGETS: usize = 1;

/// Most targets a mission may be created with.
pub const MAX_TARGETS: usize = 3;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Coarse lifecycle state of a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionState {
    Unassigned,
    AssignedIncomplete,
    Complete,
}

impl MissionState {
    pub fn of(cat_id: Option<DbId>, is_complete: bool) -> Self {
        match (cat_id, is_complete) {
            (_, true) => MissionState::Complete,
            (Some(_), false) => MissionState::AssignedIncomplete,
            (None, false) => MissionState::Unassigned,
        }
    }
}

/// What a `cat` patch asks the engine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    /// The patch leaves the cat reference as it is.
    Unchanged,
    /// Attach this cat, subject to the availability check.
    Assign(DbId),
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// A mission needs between [`MIN_TARGETS`] and [`MAX_TARGETS`] targets.
pub fn validate_target_count(count: usize) -> Result<(), CoreError> {
    if !(MIN_TARGETS..=MAX_TARGETS).contains(&count) {
        return Err(CoreError::InvalidTargetCount(count));
    }
    Ok(())
}

/// Decide how a `cat` patch applies to a mission currently holding `current`.
///
/// `requested` follows the partial-update convention: `None` when the
/// field was absent, `Some(None)` for an explicit null. Re-sending the cat
/// the mission already holds is not a change.
pub fn plan_assignment(
    mission_id: DbId,
    current: Option<DbId>,
    requested: Option<Option<DbId>>,
) -> Result<Assignment, CoreError> {
    match (current, requested) {
        (_, None) => Ok(Assignment::Unchanged),
        (Some(held), Some(Some(wanted))) if held == wanted => Ok(Assignment::Unchanged),
        (Some(held), Some(_)) => Err(CoreError::AlreadyAssigned {
            mission_id,
            cat_id: held,
        }),
        (None, Some(None)) => Ok(Assignment::Unchanged),
        (None, Some(Some(wanted))) => Ok(Assignment::Assign(wanted)),
    }
}

/// A cat is available when it has no incomplete mission.
pub fn ensure_cat_available(cat_id: DbId, current_mission: Option<DbId>) -> Result<(), CoreError> {
    match current_mission {
        Some(_) => Err(CoreError::CatUnavailable(cat_id)),
        None => Ok(()),
    }
}

/// Missions with a cat attached cannot be deleted.
pub fn ensure_destroyable(mission_id: DbId, cat_id: Option<DbId>) -> Result<(), CoreError> {
    if cat_id.is_some() {
        return Err(CoreError::MissionInProgress(mission_id));
    }
    Ok(())
}

/// Whether a mission with these target completion flags is complete.
///
/// An empty set is never complete; a persisted mission always has at
/// least one target.
pub fn all_targets_complete<I>(flags: I) -> bool
where
    I: IntoIterator<Item = bool>,
{
    let mut seen = false;
    for done in flags {
        if !done {
            return false;
        }
        seen = true;
    }
    seen
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
