//! Error types.
//!
//! Each fallible boundary of the crate has its own error enum: roster
//! construction, free-text schedule ingestion, planning input checks,
//! roster storage and configuration loading.

use thiserror::Error;

use crate::models::Weekday;
use crate::validation::ValidationError;

/// Errors raised while building a roster or a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The work regime is not in the fixed regime table.
    #[error("unknown work regime: '{0}' (expected one of: full-time, 4/5, half-time)")]
    UnknownRegime(String),

    /// Two staff members share a name.
    #[error("duplicate staff member name: '{0}'")]
    DuplicateName(String),

    /// A staff member has an empty (or whitespace-only) name.
    #[error("staff member name must not be empty")]
    EmptyName,
}

/// A malformed entry in a free-text day schedule.
///
/// Malformed entries are reported and left out; the rest of the day is kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleParseError {
    #[error("{day}: '{item}' is missing the '=' between task name and weight")]
    MissingSeparator { day: Weekday, item: String },

    #[error("{day}: '{item}' has an empty task name")]
    EmptyTaskName { day: Weekday, item: String },

    #[error("{day}: '{item}' does not have a positive integer weight")]
    InvalidWeight { day: Weekday, item: String },
}

/// Errors that abort a planning run before any state is touched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("invalid planning input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors from a [`RosterStore`](crate::store::RosterStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("roster storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("roster file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("stored roster is invalid: {0}")]
    Roster(#[from] RosterError),
}

/// Errors while loading a [`PlannerConfig`](crate::config::PlannerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read planner config: {0}")]
    Io(#[from] std::io::Error),

    #[error("planner config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
