//! Repository for the `missions` table.

use sqlx::PgExecutor;
use spycat_core::types::DbId;

use crate::models::mission::Mission;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, cat_id, is_complete, created_at, updated_at";

/// Provides persistence operations for missions.
///
/// Targets are written through [`crate::repositories::TargetRepo`]; the
/// lifecycle engine combines both inside one transaction.
pub struct MissionRepo;

impl MissionRepo {
    /// Insert a new, incomplete mission, returning the created row.
    pub async fn create<'e, E>(executor: E, cat_id: Option<DbId>) -> Result<Mission, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("INSERT INTO missions (cat_id) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Mission>(&query)
            .bind(cat_id)
            .fetch_one(executor)
            .await
    }

    /// Find a mission by its ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Mission>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM missions WHERE id = $1");
        sqlx::query_as::<_, Mission>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a mission and lock its row for the rest of the transaction.
    pub async fn find_for_update<'e, E>(
        executor: E,
        id: DbId,
    ) -> Result<Option<Mission>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM missions WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Mission>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all missions, oldest first.
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Mission>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM missions ORDER BY id");
        sqlx::query_as::<_, Mission>(&query).fetch_all(executor).await
    }

    /// Attach a cat to a mission, returning the updated row.
    pub async fn set_cat<'e, E>(executor: E, id: DbId, cat_id: DbId) -> Result<Mission, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("UPDATE missions SET cat_id = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Mission>(&query)
            .bind(id)
            .bind(cat_id)
            .fetch_one(executor)
            .await
    }

    /// Flag a mission complete. Returns `true` if the flag changed.
    pub async fn mark_complete<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result =
            sqlx::query("UPDATE missions SET is_complete = TRUE WHERE id = $1 AND NOT is_complete")
                .bind(id)
                .execute(executor)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a mission by ID; its targets go with it (`ON DELETE CASCADE`).
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM missions WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
