//! Repository for the `cats` table.

use spycat_core::types::DbId;
use sqlx::{Executor, Sqlite};

use crate::models::cat::{Cat, CreateCat};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, years_experience, breed, salary, created_at, updated_at";

/// Provides CRUD operations for cats.
pub struct CatRepo;

impl CatRepo {
    /// Insert a new cat, returning the created row.
    pub async fn create<'e, E>(executor: E, input: &CreateCat) -> Result<Cat, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!(
            "INSERT INTO cats (name, years_experience, breed, salary)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cat>(&query)
            .bind(&input.name)
            .bind(input.years_experience)
            .bind(&input.breed)
            .bind(input.salary)
            .fetch_one(executor)
            .await
    }

    /// Find a cat by its ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Cat>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!("SELECT {COLUMNS} FROM cats WHERE id = ?");
        sqlx::query_as::<_, Cat>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all cats in creation order.
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Cat>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!("SELECT {COLUMNS} FROM cats ORDER BY id");
        sqlx::query_as::<_, Cat>(&query).fetch_all(executor).await
    }

    /// Replace a cat's salary.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_salary<'e, E>(
        executor: E,
        id: DbId,
        salary: f64,
    ) -> Result<Option<Cat>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!(
            "UPDATE cats SET salary = ?, updated_at = CURRENT_TIMESTAMP
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cat>(&query)
            .bind(salary)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Permanently delete a cat by ID. Returns `true` if a row was removed.
    pub async fn delete<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM cats WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
