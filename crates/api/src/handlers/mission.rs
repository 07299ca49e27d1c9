//! Handlers for the `/missions` resource.
//!
//! Every mutating handler runs its guards and writes inside one transaction,
//! so a rejected request leaves the store untouched. Guards are evaluated in
//! the order the lifecycle rules in `spycat_core::mission` document.

use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use spycat_core::error::CoreError;
use spycat_core::mission;
use spycat_core::types::DbId;
use spycat_db::models::mission::{AssignCat, CreateMission, Mission, MissionWithTargets};
use spycat_db::models::target::{Target, UpdateTarget};
use spycat_db::repositories::{CatRepo, MissionRepo, TargetRepo};
use sqlx::SqliteConnection;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

/// Load a mission or fail with 404.
async fn load_mission(conn: &mut SqliteConnection, id: DbId) -> AppResult<Mission> {
    MissionRepo::find_by_id(conn, id)
        .await?
        .ok_or_else(|| not_found("Mission", id))
}

/// Check that `cat_id` names an existing cat that holds no mission.
async fn ensure_cat_free(conn: &mut SqliteConnection, cat_id: DbId) -> AppResult<()> {
    CatRepo::find_by_id(&mut *conn, cat_id)
        .await?
        .ok_or_else(|| not_found("Cat", cat_id))?;

    let current = MissionRepo::find_by_cat(&mut *conn, cat_id).await?;
    mission::ensure_cat_available(current.map(|m| m.id))?;
    Ok(())
}

/// Attach a mission's targets for the response body.
async fn with_targets(
    conn: &mut SqliteConnection,
    mission: Mission,
) -> AppResult<MissionWithTargets> {
    let targets = TargetRepo::list_by_mission(conn, mission.id).await?;
    Ok(MissionWithTargets { mission, targets })
}

// ---------------------------------------------------------------------------
// POST /missions
// ---------------------------------------------------------------------------

/// Create a mission with 1-3 targets, optionally assigned to a cat.
///
/// The target count is checked before the transaction opens. A given cat
/// must exist (404) and must not hold another mission (409).
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMission>,
) -> AppResult<(StatusCode, Json<MissionWithTargets>)> {
    mission::validate_target_count(input.targets.len())?;

    let mut tx = spycat_db::begin_write(&state.pool).await?;

    if let Some(cat_id) = input.cat_id {
        ensure_cat_free(&mut tx, cat_id).await?;
    }

    let created = MissionRepo::create(&mut *tx, input.cat_id).await?;

    let mut targets = Vec::with_capacity(input.targets.len());
    for target in &input.targets {
        targets.push(TargetRepo::create(&mut *tx, created.id, target).await?);
    }

    tx.commit().await?;

    tracing::info!(
        mission_id = created.id,
        cat_id = ?created.cat_id,
        target_count = targets.len(),
        "Mission created"
    );

    Ok((
        StatusCode::CREATED,
        Json(MissionWithTargets {
            mission: created,
            targets,
        }),
    ))
}

// ---------------------------------------------------------------------------
// GET /missions
// ---------------------------------------------------------------------------

/// List every mission with its targets.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MissionWithTargets>>> {
    let missions = MissionRepo::list(&state.pool).await?;
    let targets = TargetRepo::list_all(&state.pool).await?;

    let mut by_mission: HashMap<DbId, Vec<Target>> = HashMap::new();
    for target in targets {
        by_mission.entry(target.mission_id).or_default().push(target);
    }

    let result: Vec<MissionWithTargets> = missions
        .into_iter()
        .map(|mission| {
            let targets = by_mission.remove(&mission.id).unwrap_or_default();
            MissionWithTargets { mission, targets }
        })
        .collect();

    tracing::debug!(count = result.len(), "Listed missions");

    Ok(Json(result))
}

// ---------------------------------------------------------------------------
// GET /missions/{id}
// ---------------------------------------------------------------------------

/// Fetch one mission with its targets.
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MissionWithTargets>> {
    let mut conn = state.pool.acquire().await?;
    let found = load_mission(&mut conn, id).await?;
    Ok(Json(with_targets(&mut conn, found).await?))
}

// ---------------------------------------------------------------------------
// PATCH /missions/{id}/assign
// ---------------------------------------------------------------------------

/// Assign a cat to a mission. One-way: there is no unassign.
///
/// Checked in order: mission exists (404), mission not complete (409),
/// mission not yet assigned (409), cat exists (404), cat holds no mission
/// (409).
pub async fn assign_cat(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<AssignCat>,
) -> AppResult<Json<MissionWithTargets>> {
    let mut tx = spycat_db::begin_write(&state.pool).await?;

    let current = load_mission(&mut tx, id).await?;
    mission::ensure_assignable(current.state())?;
    ensure_cat_free(&mut tx, input.cat_id).await?;

    let assigned = MissionRepo::assign_cat(&mut *tx, id, input.cat_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Mission is no longer open for assignment".to_string(),
            ))
        })?;

    let body = with_targets(&mut tx, assigned).await?;
    tx.commit().await?;

    tracing::info!(mission_id = id, cat_id = input.cat_id, "Cat assigned to mission");

    Ok(Json(body))
}

// ---------------------------------------------------------------------------
// PATCH /missions/{id}/targets/{target_id}
// ---------------------------------------------------------------------------

/// Update a target's notes and/or completion flag.
///
/// Checked in order: mission exists (404), mission not complete (409),
/// target exists in this mission (404), target not complete (409). After the
/// write, the mission is marked complete in the same transaction if every
/// one of its targets is now complete.
pub async fn update_target(
    State(state): State<AppState>,
    AppPath((id, target_id)): AppPath<(DbId, DbId)>,
    AppJson(input): AppJson<UpdateTarget>,
) -> AppResult<Json<MissionWithTargets>> {
    let mut tx = spycat_db::begin_write(&state.pool).await?;

    let mut current = load_mission(&mut tx, id).await?;
    mission::ensure_mission_open(current.state())?;

    let target = TargetRepo::find_in_mission(&mut *tx, id, target_id)
        .await?
        .ok_or_else(|| not_found("Target", target_id))?;
    mission::ensure_target_open(target.complete)?;

    TargetRepo::update_open(&mut *tx, id, target_id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict("Target already completed".to_string()))
        })?;

    let targets = TargetRepo::list_by_mission(&mut *tx, id).await?;
    if mission::all_targets_complete(targets.iter().map(|t| t.complete)) {
        // The row was loaded under this transaction's write lock.
        current = MissionRepo::mark_complete(&mut *tx, id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Internal(format!(
                    "mission {id} disappeared while completing it"
                )))
            })?;
        tracing::info!(mission_id = id, "All targets complete, mission completed");
    }

    tx.commit().await?;

    tracing::info!(
        mission_id = id,
        target_id,
        complete = ?input.complete,
        notes_changed = input.notes.is_some(),
        "Target updated"
    );

    Ok(Json(MissionWithTargets {
        mission: current,
        targets,
    }))
}

// ---------------------------------------------------------------------------
// DELETE /missions/{id}
// ---------------------------------------------------------------------------

/// Delete an unassigned mission and all of its targets.
///
/// Returns 409 if a cat is assigned; since there is no unassign, such a
/// mission can never be deleted.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let mut tx = spycat_db::begin_write(&state.pool).await?;

    let current = load_mission(&mut tx, id).await?;
    mission::ensure_deletable(current.state())?;

    let removed_targets = TargetRepo::delete_by_mission(&mut *tx, id).await?;
    if !MissionRepo::delete_unassigned(&mut *tx, id).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Cannot delete: mission already assigned to a cat".to_string(),
        )));
    }

    tx.commit().await?;

    tracing::info!(mission_id = id, removed_targets, "Mission deleted");

    Ok(StatusCode::NO_CONTENT)
}
