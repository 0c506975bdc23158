//! Weekly slot generation.
//!
//! A [`WeekTemplate`] holds the fixed tables that describe a school week:
//! which places are supervised at which timeslot, how much load each
//! timeslot carries, which (timeslot, location) pairs need more than one
//! staff member, the shortened day, and meal duty.
//!
//! # Generation Order
//! Day-major (Monday first), then time-major (canonical [`Timeslot`]
//! order), then location-major (table order). Meal-duty pseudo-slots
//! follow the grid, one per meal day.

use serde::{Deserialize, Serialize};

use crate::models::{DutySlot, Location, Roster, Timeslot, Weekday};

/// Places supervised at a timeslot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeslotSpec {
    pub timeslot: Timeslot,
    /// Load charged per assigned staff member.
    pub weight: u32,
    /// Supervised places, in generation order.
    pub locations: Vec<Location>,
    /// Restricts the timeslot to a single day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_on: Option<Weekday>,
}

impl TimeslotSpec {
    pub fn new(timeslot: Timeslot, weight: u32, locations: Vec<Location>) -> Self {
        Self {
            timeslot,
            weight,
            locations,
            only_on: None,
        }
    }

    /// Restricts the timeslot to one day.
    pub fn only_on(mut self, day: Weekday) -> Self {
        self.only_on = Some(day);
        self
    }
}

/// Required staff count for one (timeslot, location) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredOverride {
    pub timeslot: Timeslot,
    pub location: Location,
    pub count: u32,
}

/// A day with a shortened schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenedDay {
    pub day: Weekday,
    /// Timeslots that do not take place on that day.
    pub skipped: Vec<Timeslot>,
}

/// Meal-duty settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDutySpec {
    /// Fixed load per meal day.
    pub weight: u32,
    /// Days a meal is served.
    pub days: Vec<Weekday>,
}

impl Default for MealDutySpec {
    fn default() -> Self {
        Self {
            weight: 1,
            days: vec![
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Thursday,
                Weekday::Friday,
            ],
        }
    }
}

/// Generation tables for a planning week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekTemplate {
    /// School days. Generation always follows weekday order.
    pub days: Vec<Weekday>,
    pub timeslots: Vec<TimeslotSpec>,
    /// Required counts other than the default of 1.
    pub required_overrides: Vec<RequiredOverride>,
    pub shortened_day: Option<ShortenedDay>,
    pub meal_duty: MealDutySpec,
}

impl Default for WeekTemplate {
    /// The standard school week.
    fn default() -> Self {
        use Location::*;

        Self {
            days: Weekday::ALL.to_vec(),
            timeslots: vec![
                TimeslotSpec::new(Timeslot::BeforeSchool, 1, vec![Gate]),
                TimeslotSpec::new(
                    Timeslot::MorningBreak,
                    1,
                    vec![Playground, KindergartenPlayground],
                ),
                TimeslotSpec::new(Timeslot::EarlyDismissal, 1, vec![Gate])
                    .only_on(Weekday::Wednesday),
                TimeslotSpec::new(
                    Timeslot::Lunch,
                    2,
                    vec![Playground, KindergartenPlayground, Cafeteria],
                ),
                TimeslotSpec::new(
                    Timeslot::AfternoonBreak,
                    1,
                    vec![Playground, KindergartenPlayground],
                ),
                TimeslotSpec::new(Timeslot::AfterSchool, 1, vec![Gate]),
            ],
            required_overrides: vec![
                RequiredOverride {
                    timeslot: Timeslot::Lunch,
                    location: Playground,
                    count: 2,
                },
                RequiredOverride {
                    timeslot: Timeslot::EarlyDismissal,
                    location: Gate,
                    count: 2,
                },
            ],
            shortened_day: Some(ShortenedDay {
                day: Weekday::Wednesday,
                skipped: vec![
                    Timeslot::Lunch,
                    Timeslot::AfternoonBreak,
                    Timeslot::AfterSchool,
                ],
            }),
            meal_duty: MealDutySpec::default(),
        }
    }
}

impl WeekTemplate {
    /// Creates a template with no days, timeslots or meal days.
    pub fn empty() -> Self {
        Self {
            days: Vec::new(),
            timeslots: Vec::new(),
            required_overrides: Vec::new(),
            shortened_day: None,
            meal_duty: MealDutySpec {
                weight: 1,
                days: Vec::new(),
            },
        }
    }

    /// Sets the school days.
    pub fn with_days(mut self, days: Vec<Weekday>) -> Self {
        self.days = days;
        self
    }

    /// Adds a timeslot.
    pub fn with_timeslot(mut self, spec: TimeslotSpec) -> Self {
        self.timeslots.push(spec);
        self
    }

    /// Sets the required count for a (timeslot, location) pair.
    pub fn with_required(mut self, timeslot: Timeslot, location: Location, count: u32) -> Self {
        self.required_overrides
            .retain(|o| !(o.timeslot == timeslot && o.location == location));
        self.required_overrides.push(RequiredOverride {
            timeslot,
            location,
            count,
        });
        self
    }

    /// Sets the shortened day.
    pub fn with_shortened_day(mut self, day: Weekday, skipped: Vec<Timeslot>) -> Self {
        self.shortened_day = Some(ShortenedDay { day, skipped });
        self
    }

    /// Sets the meal-duty weight and days.
    pub fn with_meal_duty(mut self, weight: u32, days: Vec<Weekday>) -> Self {
        self.meal_duty = MealDutySpec { weight, days };
        self
    }

    /// Required staff count for a pair; 1 unless overridden.
    pub fn required_count(&self, timeslot: Timeslot, location: Location) -> u32 {
        self.required_overrides
            .iter()
            .find(|o| o.timeslot == timeslot && o.location == location)
            .map(|o| o.count)
            .unwrap_or(1)
    }

    /// Whether a timeslot takes place on a day.
    pub fn occurs_on(&self, day: Weekday, spec: &TimeslotSpec) -> bool {
        if spec.only_on.is_some_and(|only| only != day) {
            return false;
        }
        !self
            .shortened_day
            .as_ref()
            .is_some_and(|s| s.day == day && s.skipped.contains(&spec.timeslot))
    }

    /// Generates the supervision grid (without meal duty).
    pub fn grid_slots(&self) -> Vec<DutySlot> {
        let mut specs: Vec<&TimeslotSpec> = self.timeslots.iter().collect();
        specs.sort_by_key(|s| s.timeslot);

        let mut slots = Vec::new();
        for day in Weekday::ALL.into_iter().filter(|d| self.days.contains(d)) {
            for spec in specs.iter().filter(|s| self.occurs_on(day, s)) {
                for &location in &spec.locations {
                    slots.push(
                        DutySlot::at(day, spec.timeslot, location)
                            .with_weight(spec.weight)
                            .with_required(self.required_count(spec.timeslot, location)),
                    );
                }
            }
        }
        slots
    }

    /// Generates one meal-duty pseudo-slot per meal day.
    ///
    /// Each slot requires every flagged member. Returns nothing when no
    /// roster member is flagged.
    pub fn meal_slots(&self, roster: &Roster) -> Vec<DutySlot> {
        let flagged = roster.iter().filter(|m| m.meal_duty).count() as u32;
        if flagged == 0 {
            return Vec::new();
        }

        Weekday::ALL
            .into_iter()
            .filter(|d| self.meal_duty.days.contains(d))
            .map(|day| DutySlot::meal_duty(day, self.meal_duty.weight, flagged))
            .collect()
    }

    /// Generates the full week: the grid followed by meal duty.
    pub fn generate(&self, roster: &Roster) -> Vec<DutySlot> {
        let mut slots = self.grid_slots();
        slots.extend(self.meal_slots(roster));
        slots
    }
}
