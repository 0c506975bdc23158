//! Plan quality metrics.
//!
//! Computes staffing indicators from a finished run and its roster.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Fill rate | Filled positions / required positions |
//! | Total deficit | Sum of missing staff over all shortfalls |
//! | Member utilization | Current load / max load |
//! | Avg utilization | Mean member utilization |
//! | Idle members | Members with no load at all |

use serde::Serialize;

use crate::models::{AssignmentResult, Roster};

/// Load carried by one staff member after a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberLoad {
    pub name: String,
    pub load: u32,
    pub max_load: u32,
    /// `load / max_load` (0.0..=1.0).
    pub utilization: f64,
}

/// Staffing summary of one planning run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    /// Processed slots.
    pub slot_count: usize,
    /// Sum of required counts over all slots.
    pub required_positions: u32,
    /// Assigned staff over all slots.
    pub filled_positions: u32,
    /// Fraction of required positions filled (1.0 when nothing is required).
    pub fill_rate: f64,
    /// Understaffed slots.
    pub shortfall_count: usize,
    /// Missing staff over all shortfalls.
    pub total_deficit: u32,
    /// Per-member load, in roster order.
    pub loads: Vec<MemberLoad>,
    /// Mean member utilization (0.0 for an empty roster).
    pub avg_utilization: f64,
    /// Members who received no duty.
    pub idle_members: Vec<String>,
}

impl PlanSummary {
    /// Computes the summary of a run.
    ///
    /// # Arguments
    /// * `result` - The run's assignment result.
    /// * `roster` - The roster the run was planned on (with its run state).
    pub fn calculate(result: &AssignmentResult, roster: &Roster) -> Self {
        let required_positions: u32 = result.fills.iter().map(|f| f.required_count).sum();
        let filled_positions: u32 = result.fills.iter().map(|f| f.staff.len() as u32).sum();

        let fill_rate = if required_positions == 0 {
            1.0
        } else {
            // Slots passed twice can collect more names than one required count.
            (filled_positions.min(required_positions)) as f64 / required_positions as f64
        };

        let loads: Vec<MemberLoad> = roster
            .iter()
            .map(|m| MemberLoad {
                name: m.name.clone(),
                load: m.current_load(),
                max_load: m.max_load(),
                utilization: m.current_load() as f64 / m.max_load() as f64,
            })
            .collect();

        let avg_utilization = if loads.is_empty() {
            0.0
        } else {
            loads.iter().map(|l| l.utilization).sum::<f64>() / loads.len() as f64
        };

        let idle_members = loads
            .iter()
            .filter(|l| l.load == 0)
            .map(|l| l.name.clone())
            .collect();

        Self {
            slot_count: result.slot_count(),
            required_positions,
            filled_positions,
            fill_rate,
            shortfall_count: result.shortfalls.len(),
            total_deficit: result.total_deficit(),
            loads,
            avg_utilization,
            idle_members,
        }
    }

    /// Whether the run filled at least `min_fill_rate` of all positions.
    pub fn meets_threshold(&self, min_fill_rate: f64) -> bool {
        self.fill_rate >= min_fill_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DutySlot, StaffMember, Weekday, WorkRegime};
    use crate::planner::WeekPlanner;

    #[test]
    fn test_summary_of_partial_plan() {
        let mut roster = Roster::new(vec![
            StaffMember::new("A", WorkRegime::HalfTime),
            StaffMember::new("B", WorkRegime::FullTime).with_day_off(Weekday::Monday),
        ])
        .unwrap();
        let slots = vec![
            DutySlot::task(Weekday::Monday, "yard", 3).with_required(2),
            DutySlot::task(Weekday::Monday, "gate", 3),
        ];

        let result = WeekPlanner::new().plan_week(&mut roster, &slots).unwrap();
        let summary = PlanSummary::calculate(&result, &roster);

        assert_eq!(summary.slot_count, 2);
        assert_eq!(summary.required_positions, 3);
        assert_eq!(summary.filled_positions, 2);
        assert!((summary.fill_rate - 2.0 / 3.0).abs() < 1e-10);
        assert_eq!(summary.shortfall_count, 1);
        assert_eq!(summary.total_deficit, 1);
        assert_eq!(summary.loads[0].load, 6);
        assert!((summary.loads[0].utilization - 1.0).abs() < 1e-10);
        assert_eq!(summary.idle_members, vec!["B".to_string()]);
        assert!((summary.avg_utilization - 0.5).abs() < 1e-10);
        assert!(summary.meets_threshold(0.5));
        assert!(!summary.meets_threshold(0.9));
    }

    #[test]
    fn test_summary_of_empty_run() {
        let summary = PlanSummary::calculate(&AssignmentResult::new(), &Roster::default());
        assert_eq!(summary.slot_count, 0);
        assert!((summary.fill_rate - 1.0).abs() < 1e-10);
        assert!((summary.avg_utilization - 0.0).abs() < 1e-10);
        assert!(summary.idle_members.is_empty());
    }
}
