//! Planning invariants over the standard week.

use duty_planner::ingest::parse_week_schedule;
use duty_planner::logging;
use duty_planner::models::{
    AssignmentResult, DutySlot, Post, Role, Roster, StaffMember, Timeslot, Unavailability,
    Weekday, WorkRegime,
};
use duty_planner::ordering::CandidateOrder;
use duty_planner::planner::{PlanSummary, WeekPlanner};

fn school_roster() -> Roster {
    Roster::new(vec![
        StaffMember::new("Ann", WorkRegime::FullTime).with_role(Role::Kindergarten),
        StaffMember::new("Ben", WorkRegime::FullTime)
            .with_role(Role::LowerGrades)
            .with_meal_duty(),
        StaffMember::new("Cas", WorkRegime::FourFifths)
            .with_role(Role::UpperGrades)
            .with_day_off(Weekday::Wednesday),
        StaffMember::new("Dirk", WorkRegime::HalfTime).with_unavailability(
            Unavailability::new()
                .with_day_off(Weekday::Monday)
                .with_timeslot(Weekday::Tuesday, Timeslot::Lunch),
        ),
        StaffMember::new("Eva", WorkRegime::FullTime).with_role(Role::Any),
        StaffMember::new("Fien", WorkRegime::HalfTime)
            .with_role(Role::Kindergarten)
            .with_meal_duty(),
        StaffMember::new("Gert", WorkRegime::FourFifths).with_role(Role::LowerGrades),
    ])
    .unwrap()
}

fn orderings() -> Vec<CandidateOrder> {
    let mut orders = vec![
        CandidateOrder::PreferenceRanked,
        CandidateOrder::Random { seed: None },
    ];
    orders.extend((0..10).map(|seed| CandidateOrder::Random { seed: Some(seed) }));
    orders
}

fn assert_invariants(roster: &Roster, slots: &[DutySlot], result: &AssignmentResult) {
    for member in roster {
        assert!(
            member.current_load() <= member.max_load(),
            "{} over capacity: {}/{}",
            member.name,
            member.current_load(),
            member.max_load()
        );
    }

    // Meal duty is exempt from availability.
    for member in roster {
        for key in member.assignments() {
            if key.post != Post::MealDuty {
                assert!(
                    member.is_available(key.day, key.timeslot),
                    "{} assigned while unavailable: {key}",
                    member.name
                );
            }
        }
    }

    for slot in slots {
        let key = slot.key();
        let staffed = result.staff_for(&key).expect("every slot is recorded").len() as u32;
        let shortfall = result.shortfalls.iter().find(|s| s.slot == key);
        if staffed == slot.required_count {
            assert!(shortfall.is_none(), "{key} complete but reported short");
        } else {
            let shortfall =
                shortfall.unwrap_or_else(|| panic!("{key} short without a shortfall"));
            assert_eq!(shortfall.filled, staffed);
            assert_eq!(shortfall.deficit(), slot.required_count - staffed);
        }
    }

    for member in roster {
        let expected: u32 = result
            .fills_for_member(&member.name)
            .map(|f| f.weight)
            .sum();
        assert_eq!(member.current_load(), expected, "{}", member.name);
    }
}

#[test]
fn invariants_hold_for_every_ordering() {
    logging::init_test();

    for order in orderings() {
        let mut roster = school_roster();
        let planner = WeekPlanner::new().with_ordering(order.clone());
        let slots = planner.generate_slots(&roster);
        let result = planner.plan_week(&mut roster, &slots).unwrap();
        assert_invariants(&roster, &slots, &result);
    }
}

#[test]
fn invariants_hold_for_understaffed_roster() {
    let mut roster = Roster::new(vec![
        StaffMember::new("Ann", WorkRegime::HalfTime).with_meal_duty(),
        StaffMember::new("Ben", WorkRegime::HalfTime).with_day_off(Weekday::Friday),
    ])
    .unwrap();

    for order in orderings() {
        let planner = WeekPlanner::new().with_ordering(order);
        let slots = planner.generate_slots(&roster);
        let result = planner.plan_week(&mut roster, &slots).unwrap();
        assert_invariants(&roster, &slots, &result);
        assert!(!result.is_complete());
    }
}

#[test]
fn preference_ranked_runs_are_identical() {
    let mut roster = school_roster();
    let planner = WeekPlanner::new();
    let slots = planner.generate_slots(&roster);

    let first = planner.plan_week(&mut roster, &slots).unwrap();
    let loads: Vec<u32> = roster.iter().map(|m| m.current_load()).collect();

    let second = planner.plan_week(&mut roster, &slots).unwrap();
    assert_eq!(first, second);
    assert_eq!(loads, roster.iter().map(|m| m.current_load()).collect::<Vec<_>>());
}

#[test]
fn seeded_runs_are_identical() {
    let mut roster = school_roster();
    let planner = WeekPlanner::new().with_ordering(CandidateOrder::Random { seed: Some(2024) });
    let slots = planner.generate_slots(&roster);

    let first = planner.plan_week(&mut roster, &slots).unwrap();
    let second = planner.plan_week(&mut roster, &slots).unwrap();
    assert_eq!(first, second);
}

#[test]
fn meal_duty_members_in_every_meal_slot() {
    let mut roster = school_roster();
    let planner = WeekPlanner::new();
    let result = planner.plan_template_week(&mut roster).unwrap();

    let meal_fills: Vec<_> = result
        .fills
        .iter()
        .filter(|f| f.slot.post == Post::MealDuty)
        .collect();
    assert_eq!(meal_fills.len(), 4);
    for fill in &meal_fills {
        assert_eq!(fill.staff, vec!["Ben".to_string(), "Fien".to_string()]);
    }

    for name in ["Ben", "Fien"] {
        let member = roster.get(name).unwrap();
        let meal_load: u32 = member
            .assignments()
            .iter()
            .filter(|k| k.post == Post::MealDuty)
            .count() as u32;
        assert_eq!(meal_load, 4);
        assert!(member.current_load() >= 4);
        assert_eq!(member.reserved_load(), 0);
    }
}

#[test]
fn meal_duty_ignores_unavailability() {
    let mut roster = Roster::new(vec![StaffMember::new("Ann", WorkRegime::FullTime)
        .with_day_off(Weekday::Monday)
        .with_meal_duty()])
    .unwrap();
    let slots = vec![DutySlot::meal_duty(Weekday::Monday, 1, 1)];

    let result = WeekPlanner::new().plan_week(&mut roster, &slots).unwrap();
    assert_eq!(result.staff_for(&slots[0].key()).unwrap(), &["Ann".to_string()]);
    assert_eq!(roster.get("Ann").unwrap().current_load(), 1);
}

#[test]
fn free_text_scenario_single_available_member() {
    // A is full-time, B is unavailable on Monday: both yards go to A.
    let parsed = parse_week_schedule(&[(Weekday::Monday, "yard=1, yard=1")]);
    assert!(parsed.is_clean());

    let mut roster = Roster::new(vec![
        StaffMember::new("A", WorkRegime::FullTime),
        StaffMember::new("B", WorkRegime::HalfTime).with_day_off(Weekday::Monday),
    ])
    .unwrap();

    let result = WeekPlanner::new()
        .with_ordering(CandidateOrder::Random { seed: None })
        .plan_week(&mut roster, &parsed.slots)
        .unwrap();
    assert!(result.is_complete());
    for slot in &parsed.slots {
        assert_eq!(result.staff_for(&slot.key()).unwrap(), &["A".to_string()]);
    }
}

#[test]
fn free_text_scenario_cap_leaves_shortfall() {
    // Half-time cap 6: a weight-5 yard leaves room for only one more unit.
    let parsed = parse_week_schedule(&[(Weekday::Monday, "gate=5, yard=1, yard=1")]);
    let mut roster = Roster::new(vec![
        StaffMember::new("A", WorkRegime::HalfTime),
        StaffMember::new("B", WorkRegime::HalfTime).with_day_off(Weekday::Monday),
    ])
    .unwrap();

    let result = WeekPlanner::new().plan_week(&mut roster, &parsed.slots).unwrap();
    assert_eq!(result.shortfalls.len(), 1);
    assert_eq!(result.shortfalls[0].slot, parsed.slots[2].key());
    assert_eq!(roster.get("A").unwrap().current_load(), 6);
}

#[test]
fn pair_slot_takes_both_eligible() {
    let mut roster = Roster::new(vec![
        StaffMember::new("A", WorkRegime::FullTime),
        StaffMember::new("B", WorkRegime::FullTime),
    ])
    .unwrap();
    let slot = DutySlot::task(Weekday::Thursday, "yard", 1).with_required(2);

    for order in orderings() {
        let result = WeekPlanner::new()
            .with_ordering(order)
            .plan_week(&mut roster, std::slice::from_ref(&slot))
            .unwrap();
        let mut staff = result.staff_for(&slot.key()).unwrap().to_vec();
        staff.sort();
        assert_eq!(staff, vec!["A".to_string(), "B".to_string()]);
    }
}

#[test]
fn summary_matches_result() {
    let mut roster = school_roster();
    let result = WeekPlanner::new().plan_template_week(&mut roster).unwrap();
    let summary = PlanSummary::calculate(&result, &roster);

    assert_eq!(summary.slot_count, result.slot_count());
    assert_eq!(summary.shortfall_count, result.shortfalls.len());
    assert_eq!(summary.total_deficit, result.total_deficit());
    assert_eq!(
        summary.required_positions - summary.filled_positions,
        summary.total_deficit
    );
    assert_eq!(summary.loads.len(), roster.len());
}

#[test]
fn oversized_weights_become_shortfalls() {
    let parsed = parse_week_schedule(&[
        (Weekday::Monday, "yard=1, gate=11"),
        (Weekday::Tuesday, "hall=4294967295, yard=2"),
    ]);
    assert!(parsed.is_clean());

    for order in orderings() {
        let mut roster = school_roster();
        let result = WeekPlanner::new()
            .with_ordering(order)
            .plan_week(&mut roster, &parsed.slots)
            .unwrap();

        assert_invariants(&roster, &parsed.slots, &result);
        let short: Vec<_> = result.shortfalls.iter().map(|s| s.slot.clone()).collect();
        assert_eq!(short, vec![parsed.slots[1].key(), parsed.slots[2].key()]);
    }
}
