//! Staff member model.
//!
//! Staff members are the people who perform duties. Each has a work
//! regime that fixes their maximum load, an optional role used to rank
//! them for places they fit best, an unavailability record and an
//! optional meal-duty flag.
//!
//! # Run state
//! `assignments`, `current_load` and `reserved_load` belong to one
//! planning run. They are never persisted and are cleared by
//! [`Roster::reset_loads`](super::Roster::reset_loads).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use super::{DutySlot, Post, SlotKey, Timeslot, Weekday};
use crate::error::RosterError;
use crate::ordering::PreferenceTable;

/// Fractional employment level.
///
/// The regime alone determines the maximum assignable load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WorkRegime {
    /// Full-time (`"full-time"`), max load 10.
    FullTime,
    /// Four-fifths (`"4/5"`), max load 8.
    FourFifths,
    /// Half-time (`"half-time"`), max load 6.
    HalfTime,
}

impl WorkRegime {
    /// Maximum cumulative weight per planning week.
    pub fn max_load(&self) -> u32 {
        match self {
            WorkRegime::FullTime => 10,
            WorkRegime::FourFifths => 8,
            WorkRegime::HalfTime => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkRegime::FullTime => "full-time",
            WorkRegime::FourFifths => "4/5",
            WorkRegime::HalfTime => "half-time",
        }
    }
}

impl FromStr for WorkRegime {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "full-time" => Ok(WorkRegime::FullTime),
            "4/5" => Ok(WorkRegime::FourFifths),
            "half-time" => Ok(WorkRegime::HalfTime),
            other => Err(RosterError::UnknownRegime(other.to_string())),
        }
    }
}

impl TryFrom<String> for WorkRegime {
    type Error = RosterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WorkRegime> for String {
    fn from(regime: WorkRegime) -> Self {
        regime.as_str().to_string()
    }
}

impl fmt::Display for WorkRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorical staff role, only used for preference scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    LowerGrades,
    UpperGrades,
    Kindergarten,
    Any,
}

/// Unavailability on one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayUnavailability {
    /// Not available at all that day.
    AllDay,
    /// Not available at the listed timeslots.
    Timeslots(BTreeSet<Timeslot>),
}

/// Per-day record of when a staff member cannot be scheduled.
///
/// Days without an entry are fully available.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unavailability(BTreeMap<Weekday, DayUnavailability>);

impl Unavailability {
    /// Creates an empty record (always available).
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a whole day as unavailable.
    pub fn with_day_off(mut self, day: Weekday) -> Self {
        self.0.insert(day, DayUnavailability::AllDay);
        self
    }

    /// Marks one timeslot on a day as unavailable.
    ///
    /// Has no effect on a day already marked unavailable as a whole.
    pub fn with_timeslot(mut self, day: Weekday, timeslot: Timeslot) -> Self {
        match self
            .0
            .entry(day)
            .or_insert_with(|| DayUnavailability::Timeslots(BTreeSet::new()))
        {
            DayUnavailability::AllDay => {}
            DayUnavailability::Timeslots(set) => {
                set.insert(timeslot);
            }
        }
        self
    }

    /// Whether `(day, timeslot)` is excluded.
    ///
    /// Slots without a timeslot are only excluded by a whole-day entry.
    pub fn excludes(&self, day: Weekday, timeslot: Option<Timeslot>) -> bool {
        match self.0.get(&day) {
            None => false,
            Some(DayUnavailability::AllDay) => true,
            Some(DayUnavailability::Timeslots(set)) => timeslot.is_some_and(|t| set.contains(&t)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entry for a day, if any.
    pub fn day(&self, day: Weekday) -> Option<&DayUnavailability> {
        self.0.get(&day)
    }
}

/// A staff member who can be assigned duties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Unique name (identity key within a roster).
    pub name: String,
    /// Work regime, fixing the maximum load.
    pub regime: WorkRegime,
    /// Optional role for preference ranking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// When this member cannot supervise.
    #[serde(default, skip_serializing_if = "Unavailability::is_empty")]
    pub unavailability: Unavailability,
    /// Whether this member takes the daily meal duty.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub meal_duty: bool,
    #[serde(skip)]
    assignments: Vec<SlotKey>,
    #[serde(skip)]
    current_load: u32,
    #[serde(skip)]
    reserved_load: u32,
}

impl StaffMember {
    /// Creates a member with no role, no unavailability and no meal duty.
    pub fn new(name: impl Into<String>, regime: WorkRegime) -> Self {
        Self {
            name: name.into(),
            regime,
            role: None,
            unavailability: Unavailability::new(),
            meal_duty: false,
            assignments: Vec::new(),
            current_load: 0,
            reserved_load: 0,
        }
    }

    /// Creates a member from a regime name.
    ///
    /// Fails with [`RosterError::UnknownRegime`] if the regime is not in
    /// the fixed regime table.
    pub fn with_regime_name(name: impl Into<String>, regime: &str) -> Result<Self, RosterError> {
        Ok(Self::new(name, regime.parse()?))
    }

    /// Sets the role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Sets the unavailability record.
    pub fn with_unavailability(mut self, unavailability: Unavailability) -> Self {
        self.unavailability = unavailability;
        self
    }

    /// Marks a whole day as unavailable.
    pub fn with_day_off(mut self, day: Weekday) -> Self {
        self.unavailability = self.unavailability.with_day_off(day);
        self
    }

    /// Flags this member for meal duty.
    pub fn with_meal_duty(mut self) -> Self {
        self.meal_duty = true;
        self
    }

    /// Maximum cumulative weight, derived from the regime.
    #[inline]
    pub fn max_load(&self) -> u32 {
        self.regime.max_load()
    }

    /// Load assigned in the current run.
    #[inline]
    pub fn current_load(&self) -> u32 {
        self.current_load
    }

    /// Meal-duty load reserved but not yet assigned in the current run.
    #[inline]
    pub fn reserved_load(&self) -> u32 {
        self.reserved_load
    }

    /// Slots assigned in the current run, in assignment order.
    pub fn assignments(&self) -> &[SlotKey] {
        &self.assignments
    }

    /// Whether the member can be scheduled at `(day, timeslot)`.
    pub fn is_available(&self, day: Weekday, timeslot: Option<Timeslot>) -> bool {
        !self.unavailability.excludes(day, timeslot)
    }

    /// Whether `weight` more load fits under the cap, counting reserved load.
    ///
    /// A sum that overflows `u32` never fits.
    pub fn has_capacity(&self, weight: u32) -> bool {
        self.current_load
            .checked_add(self.reserved_load)
            .and_then(|load| load.checked_add(weight))
            .is_some_and(|load| load <= self.max_load())
    }

    /// Whether the member already holds this exact slot.
    pub fn holds(&self, key: &SlotKey) -> bool {
        self.assignments.contains(key)
    }

    /// Preference score for a post (higher = better fit).
    pub fn preference_score(&self, post: &Post, table: &PreferenceTable) -> u32 {
        table.score(self.role, post)
    }

    pub(crate) fn assign(&mut self, slot: &DutySlot) {
        self.assignments.push(slot.key());
        self.current_load = self.current_load.saturating_add(slot.weight);
    }

    pub(crate) fn reserve(&mut self, weight: u32) {
        self.reserved_load = self.reserved_load.saturating_add(weight);
    }

    /// Assigns a meal-duty slot, moving its weight out of the reservation.
    pub(crate) fn assign_reserved(&mut self, slot: &DutySlot) {
        self.reserved_load = self.reserved_load.saturating_sub(slot.weight);
        self.assign(slot);
    }

    pub(crate) fn reset(&mut self) {
        self.assignments.clear();
        self.current_load = 0;
        self.reserved_load = 0;
    }
}
