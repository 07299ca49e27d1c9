//! Handlers for the `/cats` resource.
//!
//! Cats are validated field by field before the breed is checked against the
//! remote catalog, so malformed input never costs a network round trip.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use spycat_core::cat as cat_rules;
use spycat_core::error::CoreError;
use spycat_core::types::DbId;
use spycat_db::models::cat::{Cat, CreateCat, UpdateCatSalary};
use spycat_db::repositories::{CatRepo, MissionRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

fn cat_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Cat", id })
}

/// POST /cats
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCat>,
) -> AppResult<(StatusCode, Json<Cat>)> {
    cat_rules::validate_name(&input.name)?;
    cat_rules::validate_years_experience(input.years_experience)?;
    cat_rules::validate_salary(input.salary)?;
    state.breeds.validate(&input.breed).await?;

    let cat = CatRepo::create(&state.pool, &input).await?;

    tracing::info!(cat_id = cat.id, breed = %cat.breed, "Cat created");

    Ok((StatusCode::CREATED, Json(cat)))
}

/// GET /cats
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Cat>>> {
    let cats = CatRepo::list(&state.pool).await?;
    tracing::debug!(count = cats.len(), "Listed cats");
    Ok(Json(cats))
}

/// GET /cats/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Cat>> {
    let cat = CatRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| cat_not_found(id))?;
    Ok(Json(cat))
}

/// PATCH /cats/{id}
///
/// Replaces the salary, the only field mutable after creation. A
/// non-positive salary is rejected and the stored value stays unchanged.
pub async fn update_salary(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateCatSalary>,
) -> AppResult<Json<Cat>> {
    cat_rules::validate_salary(input.salary)?;

    let cat = CatRepo::update_salary(&state.pool, id, input.salary)
        .await?
        .ok_or_else(|| cat_not_found(id))?;

    tracing::info!(cat_id = id, salary = cat.salary, "Cat salary updated");

    Ok(Json(cat))
}

/// DELETE /cats/{id}
///
/// Returns 409 while a mission still references the cat.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let mut tx = spycat_db::begin_write(&state.pool).await?;

    CatRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| cat_not_found(id))?;

    let mission = MissionRepo::find_by_cat(&mut *tx, id).await?;
    cat_rules::ensure_cat_deletable(mission.map(|m| m.id))?;

    CatRepo::delete(&mut *tx, id).await?;
    tx.commit().await?;

    tracing::info!(cat_id = id, "Cat deleted");

    Ok(StatusCode::NO_CONTENT)
}
