//! Weekly supervision duty planner.
//!
//! Assigns staff members to recurring duty slots across a five-day week,
//! honouring per-person availability, per-person load caps derived from
//! the work regime, and per-slot staffing requirements. Slots that cannot
//! be staffed are reported as shortfalls.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `StaffMember`, `Roster`, `DutySlot`,
//!   `SlotKey`, `AssignmentResult`, `Shortfall`
//! - **`planner`**: Slot generation (`WeekTemplate`), the greedy engine
//!   (`WeekPlanner`) and plan metrics (`PlanSummary`)
//! - **`ordering`**: Candidate ordering (random or preference-ranked)
//! - **`ingest`**: Free-text day schedules (`"noon=2, gate=1"`)
//! - **`validation`**: Input checks run before every plan
//! - **`store`**: Roster load/save contract and JSON file store
//! - **`config`**: Planner settings loadable from JSON
//!
//! # Example
//!
//! ```
//! use duty_planner::models::{Roster, StaffMember, Weekday, WorkRegime, DutySlot};
//! use duty_planner::planner::WeekPlanner;
//!
//! let mut roster = Roster::new(vec![
//!     StaffMember::new("Ann", WorkRegime::FullTime),
//!     StaffMember::new("Ben", WorkRegime::HalfTime).with_day_off(Weekday::Monday),
//! ])
//! .unwrap();
//! let slots = vec![
//!     DutySlot::task(Weekday::Monday, "yard", 1),
//!     DutySlot::task(Weekday::Monday, "yard", 1).with_occurrence(1),
//! ];
//!
//! let result = WeekPlanner::new().plan_week(&mut roster, &slots).unwrap();
//! assert!(result.is_complete());
//! assert_eq!(roster.get("Ann").unwrap().current_load(), 2);
//! ```

pub mod config;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod models;
pub mod ordering;
pub mod planner;
pub mod store;
pub mod validation;

pub use config::PlannerConfig;
pub use error::{ConfigError, PlanError, RosterError, ScheduleParseError, StoreError};
pub use planner::{PlanSummary, WeekPlanner};
