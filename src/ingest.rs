//! Free-text day schedules.
//!
//! A day schedule lists named tasks with their weight, separated by
//! commas: `"morning=1, noon=2, playground=1"`. Each valid item becomes
//! a [`DutySlot`] with no timeslot and a required count of 1.
//!
//! Malformed items are reported and left out; they never reach the
//! planner. Empty items (e.g. a trailing comma) are ignored.
//!
//! Repeated task names on one day become distinct slots, numbered by
//! their occurrence.

use std::collections::HashMap;

use crate::error::ScheduleParseError;
use crate::models::{DutySlot, Weekday};

/// Slots parsed from free text, with the items that were rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSchedule {
    pub slots: Vec<DutySlot>,
    pub errors: Vec<ScheduleParseError>,
}

impl ParsedSchedule {
    /// Whether every item was accepted.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parses one day's schedule.
pub fn parse_day_schedule(day: Weekday, input: &str) -> ParsedSchedule {
    let mut parsed = ParsedSchedule::default();
    let mut seen = HashMap::new();
    parse_into(day, input, &mut seen, &mut parsed);
    parsed
}

/// Parses a week of day schedules.
///
/// Slots come out in weekday order regardless of input order; several
/// entries for the same day are read in the order given.
pub fn parse_week_schedule(days: &[(Weekday, &str)]) -> ParsedSchedule {
    let mut parsed = ParsedSchedule::default();

    for day in Weekday::ALL {
        let mut seen = HashMap::new();
        for (_, input) in days.iter().filter(|(d, _)| *d == day) {
            parse_into(day, input, &mut seen, &mut parsed);
        }
    }
    parsed
}

fn parse_into(
    day: Weekday,
    input: &str,
    seen: &mut HashMap<String, u32>,
    parsed: &mut ParsedSchedule,
) {
    for item in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match parse_item(day, item) {
            Ok((name, weight)) => {
                let occurrence = seen.entry(name.to_string()).or_insert(0);
                parsed.slots.push(
                    DutySlot::task(day, name, weight).with_occurrence(*occurrence),
                );
                *occurrence += 1;
            }
            Err(err) => parsed.errors.push(err),
        }
    }
}

fn parse_item(day: Weekday, item: &str) -> Result<(&str, u32), ScheduleParseError> {
    let Some((name, weight)) = item.split_once('=') else {
        return Err(ScheduleParseError::MissingSeparator {
            day,
            item: item.to_string(),
        });
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(ScheduleParseError::EmptyTaskName {
            day,
            item: item.to_string(),
        });
    }

    match weight.trim().parse::<u32>() {
        Ok(weight) if weight > 0 => Ok((name, weight)),
        _ => Err(ScheduleParseError::InvalidWeight {
            day,
            item: item.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Post;

    #[test]
    fn test_parse_day() {
        let parsed = parse_day_schedule(Weekday::Monday, "morning=1, noon=2 ,playground = 1");
        assert!(parsed.is_clean());
        assert_eq!(parsed.slots.len(), 3);
        assert_eq!(parsed.slots[1].post, Post::Task("noon".into()));
        assert_eq!(parsed.slots[1].weight, 2);
        assert_eq!(parsed.slots[2].post, Post::Task("playground".into()));
        assert!(parsed.slots.iter().all(|s| s.day == Weekday::Monday
            && s.timeslot.is_none()
            && s.required_count == 1));
    }

    #[test]
    fn test_empty_items_ignored() {
        let parsed = parse_day_schedule(Weekday::Friday, " , gate=1,,");
        assert!(parsed.is_clean());
        assert_eq!(parsed.slots.len(), 1);

        assert_eq!(parse_day_schedule(Weekday::Friday, ""), ParsedSchedule::default());
    }

    #[test]
    fn test_malformed_items_reported_and_excluded() {
        let parsed = parse_day_schedule(Weekday::Tuesday, "yard, gate=x, =2, noon=0, hall=1=2, ok=3");

        assert_eq!(parsed.slots.len(), 1);
        assert_eq!(parsed.slots[0].post, Post::Task("ok".into()));
        assert_eq!(
            parsed.errors,
            vec![
                ScheduleParseError::MissingSeparator {
                    day: Weekday::Tuesday,
                    item: "yard".into()
                },
                ScheduleParseError::InvalidWeight {
                    day: Weekday::Tuesday,
                    item: "gate=x".into()
                },
                ScheduleParseError::EmptyTaskName {
                    day: Weekday::Tuesday,
                    item: "=2".into()
                },
                ScheduleParseError::InvalidWeight {
                    day: Weekday::Tuesday,
                    item: "noon=0".into()
                },
                ScheduleParseError::InvalidWeight {
                    day: Weekday::Tuesday,
                    item: "hall=1=2".into()
                },
            ]
        );
    }

    #[test]
    fn test_negative_weight_rejected() {
        let parsed = parse_day_schedule(Weekday::Monday, "yard=-1");
        assert!(parsed.slots.is_empty());
        assert_eq!(parsed.errors.len(), 1);
    }

    #[test]
    fn test_repeated_names_get_occurrences() {
        let parsed = parse_day_schedule(Weekday::Monday, "yard=1, yard=1, gate=1, yard=2");
        let occurrences: Vec<u32> = parsed.slots.iter().map(|s| s.occurrence).collect();
        assert_eq!(occurrences, vec![0, 1, 0, 2]);
        assert_ne!(parsed.slots[0].key(), parsed.slots[1].key());
    }

    #[test]
    fn test_parse_week_orders_by_day() {
        let parsed = parse_week_schedule(&[
            (Weekday::Friday, "gate=1"),
            (Weekday::Monday, "yard=1"),
            (Weekday::Monday, "yard=2"),
            (Weekday::Wednesday, "bad"),
        ]);

        let days: Vec<Weekday> = parsed.slots.iter().map(|s| s.day).collect();
        assert_eq!(days, vec![Weekday::Monday, Weekday::Monday, Weekday::Friday]);
        assert_eq!(parsed.slots[1].occurrence, 1);
        assert_eq!(parsed.errors.len(), 1);
    }
}
