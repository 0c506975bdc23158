//! Duty slot model.
//!
//! A duty slot is one unit of supervision on a given weekday: a place
//! (or a named task) at an optional timeslot, with a weight charged
//! against each assigned staff member's load and a number of distinct
//! staff members it needs.
//!
//! # Identity
//! Slots are identified by [`SlotKey`]: day, timeslot, post and an
//! occurrence counter that separates repeated identical entries on the
//! same day (two `yard` tasks on Monday are two different slots).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Weekday of the planning week.
///
/// Declaration order is the canonical planning order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All weekdays in planning order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Lowercase name, as used in serialized data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical supervision moment within a school day.
///
/// Declaration order is the canonical time order used by slot generation.
/// `EarlyDismissal` only occurs on the shortened day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Timeslot {
    BeforeSchool,
    MorningBreak,
    EarlyDismissal,
    Lunch,
    AfternoonBreak,
    AfterSchool,
}

impl Timeslot {
    /// All timeslots in canonical order.
    pub const ALL: [Timeslot; 6] = [
        Timeslot::BeforeSchool,
        Timeslot::MorningBreak,
        Timeslot::EarlyDismissal,
        Timeslot::Lunch,
        Timeslot::AfternoonBreak,
        Timeslot::AfterSchool,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeslot::BeforeSchool => "before-school",
            Timeslot::MorningBreak => "morning-break",
            Timeslot::EarlyDismissal => "early-dismissal",
            Timeslot::Lunch => "lunch",
            Timeslot::AfternoonBreak => "afternoon-break",
            Timeslot::AfterSchool => "after-school",
        }
    }
}

impl fmt::Display for Timeslot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supervised place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    Playground,
    KindergartenPlayground,
    Cafeteria,
    Gate,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Playground => "playground",
            Location::KindergartenPlayground => "kindergarten-playground",
            Location::Cafeteria => "cafeteria",
            Location::Gate => "gate",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a slot staffs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Post {
    /// A supervised place from the weekly grid.
    Location(Location),
    /// A caller-defined named task (free-text schedules).
    Task(String),
    /// The meal-duty pseudo-slot, staffed by every flagged member.
    MealDuty,
}

impl Post {
    /// The location, if this post is a place.
    pub fn location(&self) -> Option<Location> {
        match self {
            Post::Location(loc) => Some(*loc),
            _ => None,
        }
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Post::Location(loc) => loc.fmt(f),
            Post::Task(name) => f.write_str(name),
            Post::MealDuty => f.write_str("meal-duty"),
        }
    }
}

/// Identity of a duty slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotKey {
    pub day: Weekday,
    pub timeslot: Option<Timeslot>,
    pub post: Post,
    /// Distinguishes repeated identical slots on the same day (0 = first).
    #[serde(default)]
    pub occurrence: u32,
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.day)?;
        if let Some(ts) = self.timeslot {
            write!(f, " {ts}")?;
        }
        write!(f, " {}", self.post)?;
        if self.occurrence > 0 {
            write!(f, " #{}", self.occurrence + 1)?;
        }
        Ok(())
    }
}

/// A duty slot to be staffed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutySlot {
    /// Day of the week.
    pub day: Weekday,
    /// Canonical time, absent for named tasks and meal duty.
    pub timeslot: Option<Timeslot>,
    /// Place or task being staffed.
    pub post: Post,
    /// Load charged to every assigned staff member.
    pub weight: u32,
    /// Number of distinct staff members needed (default: 1).
    pub required_count: u32,
    /// Repetition index for identical slots on the same day.
    #[serde(default)]
    pub occurrence: u32,
}

impl DutySlot {
    /// Creates a slot with weight 1 and a single required staff member.
    pub fn new(day: Weekday, timeslot: Option<Timeslot>, post: Post) -> Self {
        Self {
            day,
            timeslot,
            post,
            weight: 1,
            required_count: 1,
            occurrence: 0,
        }
    }

    /// Creates a grid slot at a location.
    pub fn at(day: Weekday, timeslot: Timeslot, location: Location) -> Self {
        Self::new(day, Some(timeslot), Post::Location(location))
    }

    /// Creates a named task slot without a timeslot.
    pub fn task(day: Weekday, name: impl Into<String>, weight: u32) -> Self {
        Self::new(day, None, Post::Task(name.into())).with_weight(weight)
    }

    /// Creates a meal-duty pseudo-slot.
    pub fn meal_duty(day: Weekday, weight: u32, required_count: u32) -> Self {
        Self::new(day, None, Post::MealDuty)
            .with_weight(weight)
            .with_required(required_count)
    }

    /// Sets the weight.
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the required staff count.
    pub fn with_required(mut self, required_count: u32) -> Self {
        self.required_count = required_count;
        self
    }

    /// Sets the timeslot.
    pub fn with_timeslot(mut self, timeslot: Timeslot) -> Self {
        self.timeslot = Some(timeslot);
        self
    }

    /// Sets the occurrence index.
    pub fn with_occurrence(mut self, occurrence: u32) -> Self {
        self.occurrence = occurrence;
        self
    }

    /// Identity of this slot.
    pub fn key(&self) -> SlotKey {
        SlotKey {
            day: self.day,
            timeslot: self.timeslot,
            post: self.post.clone(),
            occurrence: self.occurrence,
        }
    }

    /// Whether this is the meal-duty pseudo-slot.
    #[inline]
    pub fn is_meal_duty(&self) -> bool {
        self.post == Post::MealDuty
    }
}
