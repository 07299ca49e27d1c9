//! Cat entity model and DTOs.

use serde::{Deserialize, Serialize};
use spycat_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A cat row from the `cats` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cat {
    pub id: DbId,
    pub name: String,
    pub years_experience: i64,
    pub breed: String,
    pub salary: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new cat.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCat {
    pub name: String,
    pub years_experience: i64,
    /// Must be a recognised breed name (case-insensitive).
    pub breed: String,
    pub salary: f64,
}

/// DTO for `PATCH /cats/{id}`. Salary is the only field mutable after
/// creation; anything else in the body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCatSalary {
    pub salary: f64,
}
