//! Target entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use spycat_core::types::{DbId, Timestamp};
use validator::Validate;

/// A target row from the `targets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Target {
    pub id: DbId,
    pub mission_id: DbId,
    pub name: String,
    pub country: String,
    pub notes: String,
    pub is_complete: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A new target inside a mission creation payload.
///
/// Targets always start open; a client-sent `is_complete` is dropped.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTarget {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub country: String,
    #[serde(default)]
    pub notes: String,
}

/// DTO for a partial target update. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTarget {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub country: Option<String>,
    pub notes: Option<String>,
    pub is_complete: Option<bool>,
}
