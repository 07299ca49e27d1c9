//! Repository for the `targets` table.

use spycat_core::types::DbId;
use sqlx::{Executor, Sqlite};

use crate::models::target::{CreateTarget, Target, UpdateTarget};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, mission_id, name, country, notes, complete, created_at, updated_at";

/// Provides CRUD operations for targets.
pub struct TargetRepo;

impl TargetRepo {
    /// Insert a new, incomplete target for a mission.
    pub async fn create<'e, E>(
        executor: E,
        mission_id: DbId,
        input: &CreateTarget,
    ) -> Result<Target, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!(
            "INSERT INTO targets (mission_id, name, country, notes)
             VALUES (?, ?, ?, ?)
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

    /// Find a target by ID, scoped to its owning mission.
    ///
    /// A target that exists under a different mission is reported as absent.
    pub async fn find_in_mission<'e, E>(
        executor: E,
        mission_id: DbId,
        id: DbId,
    ) -> Result<Option<Target>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!("SELECT {COLUMNS} FROM targets WHERE id = ? AND mission_id = ?");
        sqlx::query_as::<_, Target>(&query)
            .bind(id)
            .bind(mission_id)
            .fetch_optional(executor)
            .await
    }

    /// List a mission's targets in creation order.
    pub async fn list_by_mission<'e, E>(
        executor: E,
        mission_id: DbId,
    ) -> Result<Vec<Target>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!("SELECT {COLUMNS} FROM targets WHERE mission_id = ? ORDER BY id");
        sqlx::query_as::<_, Target>(&query)
            .bind(mission_id)
            .fetch_all(executor)
            .await
    }

    /// List every target, grouped by mission and in creation order within
    /// each mission.
    pub async fn list_all<'e, E>(executor: E) -> Result<Vec<Target>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!("SELECT {COLUMNS} FROM targets ORDER BY mission_id, id");
        sqlx::query_as::<_, Target>(&query).fetch_all(executor).await
    }

    /// Apply a partial update to an incomplete target. Only non-`None` fields
    /// in `input` are applied.
    ///
    /// Returns `None` if the target does not exist in this mission or is
    /// already complete.
    pub async fn update_open<'e, E>(
        executor: E,
        mission_id: DbId,
        id: DbId,
        input: &UpdateTarget,
    ) -> Result<Option<Target>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!(
            "UPDATE targets SET
                notes = COALESCE(?, notes),
                complete = COALESCE(?, complete),
                updated_at = CURRENT_TIMESTAMP
             WHERE id = ? AND mission_id = ? AND complete = 0
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Target>(&query)
            .bind(&input.notes)
            .bind(input.complete)
            .bind(id)
            .bind(mission_id)
            .fetch_optional(executor)
            .await
    }

    /// Delete all targets of a mission. Returns the number of rows removed.
    pub async fn delete_by_mission<'e, E>(executor: E, mission_id: DbId) -> Result<u64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM targets WHERE mission_id = ?")
            .bind(mission_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
