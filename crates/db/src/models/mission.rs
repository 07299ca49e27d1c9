//! Mission entity model and DTOs.

use serde::{Deserialize, Serialize};
use spycat_core::mission::MissionState;
use spycat_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::target::{CreateTarget, Target};

/// A mission row from the `missions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mission {
    pub id: DbId,
    pub complete: bool,
    pub cat_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Mission {
    /// Lifecycle state used by the mission guards.
    pub fn state(&self) -> MissionState {
        MissionState::from_parts(self.complete, self.cat_id)
    }
}

/// DTO for creating a new mission together with its targets.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMission {
    /// Assign a cat immediately. The cat must not hold another mission.
    pub cat_id: Option<DbId>,
    /// Between one and three targets, in order.
    pub targets: Vec<CreateTarget>,
}

/// DTO for `PATCH /missions/{id}/assign`.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignCat {
    pub cat_id: DbId,
}

/// A mission with its targets, as returned by every mission endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct MissionWithTargets {
    #[serde(flatten)]
    pub mission: Mission,
    pub targets: Vec<Target>,
}
