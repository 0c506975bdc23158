//! Week generation, greedy planning and plan metrics.
//!
//! # Algorithm
//!
//! `WeekPlanner` is a constrained greedy heuristic: slots are staffed one
//! at a time, in generation order, from the members still available and
//! under their load cap. It does not backtrack and is not optimal.
//!
//! # Generation
//!
//! `WeekTemplate` turns fixed tables (timeslots, places, required counts,
//! the shortened day and meal duty) into the week's ordered slot list.
//!
//! # Summary
//!
//! `PlanSummary` reports fill rate, deficit and per-member utilization.

mod engine;
mod summary;
mod template;

pub use engine::WeekPlanner;
pub use summary::{MemberLoad, PlanSummary};
pub use template::{MealDutySpec, RequiredOverride, ShortenedDay, TimeslotSpec, WeekTemplate};
