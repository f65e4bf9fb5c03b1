//! Target mutability rules.
//!
//! A target is `Open` until a patch sets `is_complete`; from then on it is
//! `Finalized` and every further patch is refused.

use crate::error::CoreError;
use crate::types::DbId;

/// Lifecycle state of a single target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    Open,
    Finalized,
}

impl TargetState {
    pub fn of(is_complete: bool) -> Self {
        if is_complete {
            TargetState::Finalized
        } else {
            TargetState::Open
        }
    }
}

/// Refuse any patch to a finalized target.
pub fn ensure_target_open(target_id: DbId, is_complete: bool) -> Result<(), CoreError> {
    match TargetState::of(is_complete) {
        TargetState::Open => Ok(()),
        TargetState::Finalized => Err(CoreError::TargetFinalized(target_id)),
    }
}
