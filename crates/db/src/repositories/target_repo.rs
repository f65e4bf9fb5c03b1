//! Repository for the `targets` table.

use sqlx::PgExecutor;
use spycat_core::types::DbId;

use crate::models::target::{CreateTarget, Target, UpdateTarget};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, mission_id, name, country, notes, is_complete, created_at, updated_at";

/// Provides persistence operations for targets.
pub struct TargetRepo;

impl TargetRepo {
    /// Insert one open target under `mission_id`.
    pub async fn create<'e, E>(
        executor: E,
        mission_id: DbId,
        input: &CreateTarget,
    ) -> Result<Target, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO targets (mission_id, name, country, notes)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Target>(&query)
            .bind(mission_id)
            .bind(&input.name)
            .bind(&input.country)
            .bind(&input.notes)
            .fetch_one(executor)
            .await
    }

    /// Find a target that belongs to `mission_id` and lock its row.
    ///
    /// Returns `None` if the target does not exist or belongs to another
    /// mission.
    pub async fn find_in_mission_for_update<'e, E>(
        executor: E,
        mission_id: DbId,
        id: DbId,
    ) -> Result<Option<Target>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM targets WHERE id = $1 AND mission_id = $2 FOR UPDATE"
        );
        sqlx::query_as::<_, Target>(&query)
            .bind(id)
            .bind(mission_id)
            .fetch_optional(executor)
            .await
    }

    /// List the targets of one mission in creation order.
    pub async fn list_by_mission<'e, E>(
        executor: E,
        mission_id: DbId,
    ) -> Result<Vec<Target>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM targets WHERE mission_id = $1 ORDER BY id");
        sqlx::query_as::<_, Target>(&query)
            .bind(mission_id)
            .fetch_all(executor)
            .await
    }

    /// List the targets of several missions, grouped by mission then id.
    pub async fn list_by_missions<'e, E>(
        executor: E,
        mission_ids: &[DbId],
    ) -> Result<Vec<Target>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM targets WHERE mission_id = ANY($1) ORDER BY mission_id, id"
        );
        sqlx::query_as::<_, Target>(&query)
            .bind(mission_ids)
            .fetch_all(executor)
            .await
    }

    /// Completion flag of every target under `mission_id`.
    pub async fn completion_flags<'e, E>(
        executor: E,
        mission_id: DbId,
    ) -> Result<Vec<bool>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar("SELECT is_complete FROM targets WHERE mission_id = $1")
            .bind(mission_id)
            .fetch_all(executor)
            .await
    }

    /// Apply a partial update. Only non-`None` fields in `input` are applied.
    pub async fn update<'e, E>(
        executor: E,
        id: DbId,
        input: &UpdateTarget,
    ) -> Result<Target, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "UPDATE targets SET
                name = COALESCE($2, name),
                country = COALESCE($3, country),
                notes = COALESCE($4, notes),
                is_complete = COALESCE($5, is_complete)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Target>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.country)
            .bind(&input.notes)
            .bind(input.is_complete)
            .fetch_one(executor)
            .await
    }
}
