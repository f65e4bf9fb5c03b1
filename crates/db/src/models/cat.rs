//! Cat entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use spycat_core::types::{DbId, Timestamp};
use validator::Validate;

/// A cat row from the `cats` table, with its derived availability.
///
/// `is_available` and `current_mission_id` are computed by the query from
/// the `missions` table on every read.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cat {
    pub id: DbId,
    pub name: String,
    pub years_of_experience: i32,
    pub breed: String,
    pub salary: f64,
    pub is_available: bool,
    pub current_mission_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a cat, also used for full replacement (`PUT`).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCat {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 0, max = 20))]
    pub years_of_experience: i32,
    #[validate(length(min = 1, max = 100))]
    pub breed: String,
    #[validate(range(min = 0.0, max = 1_000_000.0))]
    pub salary: f64,
}

/// DTO for a partial cat update. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCat {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(range(min = 0, max = 20))]
    pub years_of_experience: Option<i32>,
    #[validate(length(min = 1, max = 100))]
    pub breed: Option<String>,
    #[validate(range(min = 0.0, max = 1_000_000.0))]
    pub salary: Option<f64>,
}

impl From<CreateCat> for UpdateCat {
    fn from(input: CreateCat) -> Self {
        Self {
            name: Some(input.name),
            years_of_experience: Some(input.years_of_experience),
            breed: Some(input.breed),
            salary: Some(input.salary),
        }
    }
}
