//! Roster and duty slot models.
//!
//! Provides the passive data model of a planning run: the staff who can
//! be assigned, the duty slots they are assigned to, and the result of
//! a run.
//!
//! # Domain Mappings
//!
//! | duty-planner | School | Care home | Retail |
//! |--------------|--------|-----------|--------|
//! | StaffMember | Teacher | Carer | Clerk |
//! | DutySlot | Playground supervision | Night round | Till shift |
//! | Post | Playground / gate | Ward | Counter |
//! | Shortfall | Unsupervised break | Uncovered round | Unmanned till |

mod result;
mod roster;
mod slot;
mod staff;

pub use result::{AssignmentResult, Shortfall, SlotFill};
pub use roster::Roster;
pub use slot::{DutySlot, Location, Post, SlotKey, Timeslot, Weekday};
pub use staff::{DayUnavailability, Role, StaffMember, Unavailability, WorkRegime};
