//! Input validation for planning runs.
//!
//! Checks a roster and its slot list before the planner touches any run
//! state. Detects:
//! - Slots with a zero weight
//! - Slots requiring zero staff members
//! - Meal-duty members whose reserved meal load alone exceeds their cap
//!
//! All problems are collected, not just the first.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{DutySlot, Roster};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A slot charges no load.
    NonPositiveWeight,
    /// A slot needs no staff.
    ZeroRequiredCount,
    /// Meal duty alone would push a member over their maximum load.
    MealDutyOverCapacity,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the slot list of a run.
pub fn validate_slots(slots: &[DutySlot]) -> ValidationResult {
    let mut errors = Vec::new();

    for slot in slots {
        if slot.weight == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveWeight,
                format!("Slot '{}' has weight 0", slot.key()),
            ));
        }
        if slot.required_count == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroRequiredCount,
                format!("Slot '{}' requires 0 staff members", slot.key()),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Meal-duty load each flagged member will carry in this run.
///
/// Returns roster index → total meal weight. The total saturates at
/// `u32::MAX`, which no regime can carry.
pub fn meal_reservations(roster: &Roster, slots: &[DutySlot]) -> HashMap<usize, u32> {
    let meal_weight = slots
        .iter()
        .filter(|s| s.is_meal_duty())
        .fold(0u32, |total, s| total.saturating_add(s.weight));

    if meal_weight == 0 {
        return HashMap::new();
    }

    roster
        .iter()
        .enumerate()
        .filter(|(_, m)| m.meal_duty)
        .map(|(i, _)| (i, meal_weight))
        .collect()
}

/// Validates a full planning input.
///
/// Checks:
/// 1. Every slot has a positive weight
/// 2. Every slot requires at least one staff member
/// 3. Every meal-duty member can carry the run's meal load
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(roster: &Roster, slots: &[DutySlot]) -> ValidationResult {
    let mut errors = validate_slots(slots).err().unwrap_or_default();

    let members = roster.members();
    let mut over: Vec<(usize, u32)> = meal_reservations(roster, slots)
        .into_iter()
        .filter(|&(i, load)| load > members[i].max_load())
        .collect();
    over.sort_unstable();

    for (i, load) in over {
        let member = &members[i];
        errors.push(ValidationError::new(
            ValidationErrorKind::MealDutyOverCapacity,
            format!(
                "Meal duty for '{}' needs {} load but {} allows at most {}",
                member.name,
                load,
                member.regime,
                member.max_load()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
