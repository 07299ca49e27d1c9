//! Repository for the `missions` table.
//!
//! Lifecycle rules live in `spycat_core::mission`; the conditional updates
//! here only repeat the parts of those rules that must hold even when two
//! requests race for the same row.

use spycat_core::types::DbId;
use sqlx::{Executor, Sqlite};

use crate::models::mission::Mission;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, complete, cat_id, created_at, updated_at";

/// Provides CRUD operations for missions.
pub struct MissionRepo;

impl MissionRepo {
    /// Insert a new, incomplete mission, optionally pre-assigned to a cat.
    ///
    /// Targets are inserted separately via `TargetRepo::create` in the same
    /// transaction.
    pub async fn create<'e, E>(executor: E, cat_id: Option<DbId>) -> Result<Mission, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!(
            "INSERT INTO missions (cat_id) VALUES (?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mission>(&query)
            .bind(cat_id)
            .fetch_one(executor)
            .await
    }

    /// Find a mission by its ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Mission>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!("SELECT {COLUMNS} FROM missions WHERE id = ?");
        sqlx::query_as::<_, Mission>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find the mission currently referencing a cat, if any.
    pub async fn find_by_cat<'e, E>(
        executor: E,
        cat_id: DbId,
    ) -> Result<Option<Mission>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!("SELECT {COLUMNS} FROM missions WHERE cat_id = ?");
        sqlx::query_as::<_, Mission>(&query)
            .bind(cat_id)
            .fetch_optional(executor)
            .await
    }

    /// List all missions in creation order.
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Mission>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!("SELECT {COLUMNS} FROM missions ORDER BY id");
        sqlx::query_as::<_, Mission>(&query).fetch_all(executor).await
    }

    /// Assign a cat to an open, unassigned mission.
    ///
    /// Returns `None` if the mission does not exist, is complete, or already
    /// has a cat. A cat already holding another mission trips the
    /// `uq_missions_cat_id` unique index.
    pub async fn assign_cat<'e, E>(
        executor: E,
        id: DbId,
        cat_id: DbId,
    ) -> Result<Option<Mission>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!(
            "UPDATE missions SET cat_id = ?, updated_at = CURRENT_TIMESTAMP
             WHERE id = ? AND cat_id IS NULL AND complete = 0
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mission>(&query)
            .bind(cat_id)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Mark a mission complete. Completion is never reverted.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn mark_complete<'e, E>(
        executor: E,
        id: DbId,
    ) -> Result<Option<Mission>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!(
            "UPDATE missions SET complete = 1, updated_at = CURRENT_TIMESTAMP
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mission>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Permanently delete an unassigned mission. Returns `true` if a row was
    /// removed.
    ///
    /// Child targets must be removed first (see `TargetRepo::delete_by_mission`).
    pub async fn delete_unassigned<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM missions WHERE id = ? AND cat_id IS NULL")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
