//! Mission entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use spycat_core::patch::nullable;
use spycat_core::types::{DbId, Timestamp};

use crate::models::target::{CreateTarget, Target};

/// A mission row from the `missions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mission {
    pub id: DbId,
    #[serde(rename = "cat")]
    pub cat_id: Option<DbId>,
    pub is_complete: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A mission together with the targets it owns.
#[derive(Debug, Clone, Serialize)]
pub struct MissionWithTargets {
    #[serde(flatten)]
    pub mission: Mission,
    pub targets: Vec<Target>,
}

/// DTO for creating a mission with its targets.
///
/// A missing `targets` list deserializes as empty so it is reported as a
/// target-count failure rather than a malformed body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMission {
    #[serde(default)]
    pub cat: Option<DbId>,
    #[serde(default)]
    pub targets: Vec<CreateTarget>,
}

/// DTO for a mission patch. Only `cat` is recognised; `is_complete` and
/// `targets` are not fields here and are dropped on deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMission {
    #[serde(default, deserialize_with = "nullable")]
    pub cat: Option<Option<DbId>>,
}
