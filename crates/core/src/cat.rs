//! Cat field validation and lifecycle guards.
//!
//! Only the salary may change after a cat is created; every other field is
//! fixed at creation time. Breed membership is checked separately through
//! [`crate::breeds::BreedCatalog`] because it needs the remote breed list.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that a cat's name is not blank.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("name must not be empty".to_string()));
    }
    Ok(())
}

/// Validate that years of experience is non-negative.
pub fn validate_years_experience(years: i64) -> Result<(), CoreError> {
    if years < 0 {
        return Err(CoreError::Validation(format!(
            "years_experience must be >= 0, got {years}"
        )));
    }
    Ok(())
}

/// Validate that a salary is a finite, strictly positive number.
///
/// NaN and infinity are rejected.
pub fn validate_salary(salary: f64) -> Result<(), CoreError> {
    if salary.is_nan() || salary.is_infinite() {
        return Err(CoreError::Validation(
            "salary must be a finite number".to_string(),
        ));
    }
    if salary <= 0.0 {
        return Err(CoreError::Validation(format!(
            "salary must be > 0, got {salary}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Lifecycle guards
// ---------------------------------------------------------------------------

/// Reject deleting a cat that still holds a mission.
///
/// A mission referencing the cat could never be unassigned or deleted
/// afterwards, so the cat has to stay.
pub fn ensure_cat_deletable(current_mission: Option<DbId>) -> Result<(), CoreError> {
    match current_mission {
        Some(mission_id) => Err(CoreError::Conflict(format!(
            "Cannot delete: cat is assigned to mission {mission_id}"
        ))),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
