//! Greedy week planner.
//!
//! # Algorithm
//!
//! 1. Validate the input; reject the run before touching any state.
//! 2. Reset every member's run state and reserve meal-duty load.
//! 3. For each slot, in the given order:
//!    - meal duty: assign every flagged member unconditionally;
//!    - otherwise: collect members who are available, have capacity and
//!      do not already hold the slot, order them with the run's strategy,
//!      and take them from the front up to the required count.
//! 4. Record a shortfall for every slot left understaffed.
//!
//! The heuristic is not optimal: an early slot may take the only member
//! able to staff a later one.
//!
//! # Complexity
//! O(s * m log m) where s=slots, m=staff members.

use tracing::{debug, info, instrument, warn};

use super::WeekTemplate;
use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::models::{AssignmentResult, DutySlot, Roster};
use crate::ordering::{CandidateOrder, OrderingStrategy, PreferenceTable};
use crate::validation::{meal_reservations, validate_input};

/// Capacity-aware greedy duty planner.
///
/// Holds only configuration; all run state lives on the [`Roster`].
///
/// # Example
///
/// ```
/// use duty_planner::models::{Roster, StaffMember, WorkRegime};
/// use duty_planner::planner::WeekPlanner;
///
/// let mut roster = Roster::new(vec![
///     StaffMember::new("Ann", WorkRegime::FullTime),
///     StaffMember::new("Ben", WorkRegime::HalfTime),
/// ])
/// .unwrap();
///
/// let planner = WeekPlanner::new();
/// let result = planner.plan_template_week(&mut roster).unwrap();
/// assert!(roster.iter().all(|m| m.current_load() <= m.max_load()));
/// assert!(!result.is_complete());
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeekPlanner {
    template: WeekTemplate,
    ordering: CandidateOrder,
    preferences: PreferenceTable,
}

impl WeekPlanner {
    /// Creates a planner with the standard template and preference ranking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a planner from a loaded configuration.
    pub fn from_config(config: PlannerConfig) -> Self {
        Self {
            template: config.template,
            ordering: config.ordering,
            preferences: config.preferences,
        }
    }

    /// Sets the week template.
    pub fn with_template(mut self, template: WeekTemplate) -> Self {
        self.template = template;
        self
    }

    /// Sets the candidate ordering.
    pub fn with_ordering(mut self, ordering: CandidateOrder) -> Self {
        self.ordering = ordering;
        self
    }

    /// Sets the preference table.
    pub fn with_preferences(mut self, preferences: PreferenceTable) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn template(&self) -> &WeekTemplate {
        &self.template
    }

    pub fn ordering(&self) -> &CandidateOrder {
        &self.ordering
    }

    /// Generates this week's slots from the template.
    pub fn generate_slots(&self, roster: &Roster) -> Vec<DutySlot> {
        self.template.generate(roster)
    }

    /// Generates the template week and plans it.
    pub fn plan_template_week(&self, roster: &mut Roster) -> Result<AssignmentResult, PlanError> {
        let slots = self.generate_slots(roster);
        self.plan_week(roster, &slots)
    }

    /// Plans the given slots with the configured ordering.
    pub fn plan_week(
        &self,
        roster: &mut Roster,
        slots: &[DutySlot],
    ) -> Result<AssignmentResult, PlanError> {
        let mut strategy = self.ordering.build(&self.preferences);
        self.plan_week_with(roster, slots, strategy.as_mut())
    }

    /// Plans the given slots with a caller-supplied ordering strategy.
    ///
    /// Always starts from a clean slate: the roster's run state is reset
    /// once the input has passed validation.
    #[instrument(skip_all, fields(strategy = strategy.name(), staff = roster.len(), slots = slots.len()))]
    pub fn plan_week_with(
        &self,
        roster: &mut Roster,
        slots: &[DutySlot],
        strategy: &mut dyn OrderingStrategy,
    ) -> Result<AssignmentResult, PlanError> {
        validate_input(roster, slots).map_err(PlanError::InvalidInput)?;

        roster.reset_loads();
        for (index, load) in meal_reservations(roster, slots) {
            roster.member_mut(index).reserve(load);
        }

        let mut result = AssignmentResult::new();
        for slot in slots {
            let chosen = if slot.is_meal_duty() {
                assign_meal_duty(roster, slot)
            } else {
                assign_slot(roster, slot, strategy)
            };

            debug!(slot = %slot.key(), staff = ?chosen, "slot processed");
            if let Some(shortfall) = result.record(slot, chosen) {
                warn!(
                    slot = %shortfall.slot,
                    filled = shortfall.filled,
                    required = shortfall.required,
                    "slot understaffed"
                );
            }
        }

        info!(
            slots = result.slot_count(),
            shortfalls = result.shortfalls.len(),
            deficit = result.total_deficit(),
            "week planned"
        );
        Ok(result)
    }
}

/// Selects and assigns staff for a regular slot.
fn assign_slot(
    roster: &mut Roster,
    slot: &DutySlot,
    strategy: &mut dyn OrderingStrategy,
) -> Vec<String> {
    let key = slot.key();
    let mut candidates: Vec<usize> = roster
        .iter()
        .enumerate()
        .filter(|(_, m)| {
            m.is_available(slot.day, slot.timeslot)
                && m.has_capacity(slot.weight)
                && !m.holds(&key)
        })
        .map(|(i, _)| i)
        .collect();

    strategy.order(&mut candidates, roster, slot);

    candidates
        .into_iter()
        .take(slot.required_count as usize)
        .map(|i| {
            let member = roster.member_mut(i);
            member.assign(slot);
            member.name.clone()
        })
        .collect()
}

/// Assigns every meal-duty member, regardless of availability or capacity.
fn assign_meal_duty(roster: &mut Roster, slot: &DutySlot) -> Vec<String> {
    let flagged: Vec<usize> = roster
        .iter()
        .enumerate()
        .filter(|(_, m)| m.meal_duty)
        .map(|(i, _)| i)
        .collect();

    flagged
        .into_iter()
        .map(|i| {
            let member = roster.member_mut(i);
            member.assign_reserved(slot);
            member.name.clone()
        })
        .collect()
}
