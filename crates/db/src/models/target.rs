//! Target entity model and DTOs.

use serde::{Deserialize, Serialize};
use spycat_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A target row from the `targets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Target {
    pub id: DbId,
    pub mission_id: DbId,
    pub name: String,
    pub country: String,
    pub notes: String,
    pub complete: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for one target inside a mission creation request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTarget {
    pub name: String,
    pub country: String,
    /// Defaults to an empty string if omitted.
    #[serde(default)]
    pub notes: String,
}

/// DTO for `PATCH /missions/{id}/targets/{tid}`. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTarget {
    pub notes: Option<String>,
    pub complete: Option<bool>,
}
