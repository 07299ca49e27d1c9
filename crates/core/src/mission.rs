//! Mission lifecycle rules.
//!
//! A mission owns between [`MIN_TARGETS`] and [`MAX_TARGETS`] targets fixed at
//! creation time, may be handed to a cat exactly once while still open, and
//! completes automatically once every target is complete. Completion is
//! one-directional for both targets and missions.
//!
//! The guards here are evaluated by the API layer inside the transaction that
//! performs the corresponding write, in the order documented on each
//! operation.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Minimum number of targets a mission must be created with.
pub const MIN_TARGETS: usize = 1;

/// Maximum number of targets a mission may be created with.
pub const MAX_TARGETS: usize = 3;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Lifecycle state of a mission, derived from its `complete` flag and cat
/// assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionState {
    UnassignedIncomplete,
    AssignedIncomplete,
    AssignedComplete,
    /// Every target was completed before a cat was ever assigned. Such a
    /// mission can no longer be assigned because assignment is keyed on
    /// `complete`.
    UnassignedComplete,
}

impl MissionState {
    pub fn from_parts(complete: bool, cat_id: Option<DbId>) -> Self {
        match (complete, cat_id.is_some()) {
            (false, false) => Self::UnassignedIncomplete,
            (false, true) => Self::AssignedIncomplete,
            (true, true) => Self::AssignedComplete,
            (true, false) => Self::UnassignedComplete,
        }
    }

    pub fn is_complete(self) -> bool {
        matches!(self, Self::AssignedComplete | Self::UnassignedComplete)
    }

    pub fn is_assigned(self) -> bool {
        matches!(self, Self::AssignedIncomplete | Self::AssignedComplete)
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate the number of targets supplied when creating a mission.
///
/// Runs before anything is written so a rejected request leaves no trace.
pub fn validate_target_count(count: usize) -> Result<(), CoreError> {
    if !(MIN_TARGETS..=MAX_TARGETS).contains(&count) {
        return Err(CoreError::Validation(format!(
            "Mission must contain {MIN_TARGETS}-{MAX_TARGETS} targets, got {count}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Guards
// ---------------------------------------------------------------------------

/// Check that a mission can receive a cat.
///
/// Completion is checked before assignment: a finished mission reports
/// "already completed" even when it also has a cat.
pub fn ensure_assignable(state: MissionState) -> Result<(), CoreError> {
    if state.is_complete() {
        return Err(CoreError::Conflict("Mission already completed".to_string()));
    }
    if state.is_assigned() {
        return Err(CoreError::Conflict(
            "Mission already assigned to a cat".to_string(),
        ));
    }
    Ok(())
}

/// Check that a cat is free to take a mission.
///
/// Evaluated from the cat side: `current_mission` is whatever mission
/// currently references the cat, assigned or finished.
pub fn ensure_cat_available(current_mission: Option<DbId>) -> Result<(), CoreError> {
    if current_mission.is_some() {
        return Err(CoreError::Conflict(
            "Cat already assigned to a mission".to_string(),
        ));
    }
    Ok(())
}

/// Check that a mission still accepts target edits.
pub fn ensure_mission_open(state: MissionState) -> Result<(), CoreError> {
    if state.is_complete() {
        return Err(CoreError::Conflict("Mission already completed".to_string()));
    }
    Ok(())
}

/// Check that a target still accepts edits. A completed target is frozen,
/// notes included.
pub fn ensure_target_open(target_complete: bool) -> Result<(), CoreError> {
    if target_complete {
        return Err(CoreError::Conflict("Target already completed".to_string()));
    }
    Ok(())
}

/// Check that a mission can be deleted. Assigned missions never can.
pub fn ensure_deletable(state: MissionState) -> Result<(), CoreError> {
    if state.is_assigned() {
        return Err(CoreError::Conflict(
            "Cannot delete: mission already assigned to a cat".to_string(),
        ));
    }
    Ok(())
}

/// Whether a mission with the given target completion flags should be marked
/// complete. An empty target set never completes.
pub fn all_targets_complete<I>(flags: I) -> bool
where
    I: IntoIterator<Item = bool>,
{
    let mut seen = false;
    for complete in flags {
        if !complete {
            return false;
        }
        seen = true;
    }
    seen
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
