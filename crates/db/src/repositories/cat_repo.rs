//! Repository for the `cats` table.

use sqlx::PgExecutor;
use spycat_core::types::DbId;

use crate::models::cat::{Cat, CreateCat, UpdateCat};

/// Projection shared across queries. Expects the cat aliased as `c` and
/// [`ACTIVE_MISSION_JOIN`] applied.
const COLUMNS: &str = "c.id, c.name, c.years_of_experience, c.breed, \
    c.salary::float8 AS salary, (m.id IS NULL) AS is_available, \
    m.id AS current_mission_id, c.created_at, c.updated_at";

/// Joins the cat's incomplete mission, if any, as `m`.
const ACTIVE_MISSION_JOIN: &str = "LEFT JOIN LATERAL (
        SELECT id FROM missions
        WHERE cat_id = c.id AND NOT is_complete
        ORDER BY id LIMIT 1
    ) m ON TRUE";

/// Provides CRUD operations for cats.
pub struct CatRepo;

impl CatRepo {
    /// Insert a new cat, returning the created row.
    pub async fn create<'e, E>(executor: E, input: &CreateCat) -> Result<Cat, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "WITH c AS (
                INSERT INTO cats (name, years_of_experience, breed, salary)
                VALUES ($1, $2, $3, $4::numeric)
                RETURNING *
             )
             SELECT {COLUMNS} FROM c {ACTIVE_MISSION_JOIN}"
        );
        sqlx::query_as::<_, Cat>(&query)
            .bind(&input.name)
            .bind(input.years_of_experience)
            .bind(&input.breed)
            .bind(input.salary)
            .fetch_one(executor)
            .await
    }

    /// Find a cat by its ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Cat>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM cats c {ACTIVE_MISSION_JOIN} WHERE c.id = $1");
        sqlx::query_as::<_, Cat>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all cats, oldest first.
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Cat>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM cats c {ACTIVE_MISSION_JOIN} ORDER BY c.id");
        sqlx::query_as::<_, Cat>(&query).fetch_all(executor).await
    }

    /// Update a cat. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update<'e, E>(
        executor: E,
        id: DbId,
        input: &UpdateCat,
    ) -> Result<Option<Cat>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "WITH c AS (
                UPDATE cats SET
                    name = COALESCE($2, name),
                    years_of_experience = COALESCE($3, years_of_experience),
                    breed = COALESCE($4, breed),
                    salary = COALESCE($5::numeric, salary)
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM c {ACTIVE_MISSION_JOIN}"
        );
        sqlx::query_as::<_, Cat>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.years_of_experience)
            .bind(&input.breed)
            .bind(input.salary)
            .fetch_optional(executor)
            .await
    }

    /// Delete a cat by ID. Returns `true` if a row was removed.
    ///
    /// Missions referencing the cat keep existing with `cat_id` set to NULL
    /// (`ON DELETE SET NULL`).
    pub async fn delete<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM cats WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Lock a cat row for the rest of the transaction.
    ///
    /// Serializes concurrent assignments of the same cat. Returns `false`
    /// if the cat does not exist.
    pub async fn lock<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let row: Option<(DbId,)> = sqlx::query_as("SELECT id FROM cats WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(row.is_some())
    }

    /// The cat's incomplete mission, if it has one.
    pub async fn current_mission_id<'e, E>(
        executor: E,
        id: DbId,
    ) -> Result<Option<DbId>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar(
            "SELECT id FROM missions
             WHERE cat_id = $1 AND NOT is_complete
             ORDER BY id LIMIT 1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await
    }
}
