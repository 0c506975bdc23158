//! Roster container.
//!
//! Owns the staff records of one planning context and indexes them by
//! name. Names are the identity key, so duplicates are rejected.

use std::collections::HashMap;

use super::StaffMember;
use crate::error::RosterError;

/// Indexed collection of staff members.
///
/// Run state on the members is only mutated by the planner, which holds
/// `&mut Roster` for the duration of a run.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    members: Vec<StaffMember>,
    index: HashMap<String, usize>,
}

impl Roster {
    /// Builds a roster, rejecting empty and duplicate names.
    pub fn new(members: Vec<StaffMember>) -> Result<Self, RosterError> {
        let mut roster = Self::default();
        for member in members {
            roster.push(member)?;
        }
        Ok(roster)
    }

    /// Adds a member, rejecting empty and duplicate names.
    ///
    /// Surrounding whitespace is stripped from the name first.
    pub fn push(&mut self, mut member: StaffMember) -> Result<(), RosterError> {
        let trimmed = member.name.trim();
        if trimmed.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if trimmed.len() != member.name.len() {
            member.name = trimmed.to_string();
        }
        if self.index.contains_key(&member.name) {
            return Err(RosterError::DuplicateName(member.name));
        }
        self.index.insert(member.name.clone(), self.members.len());
        self.members.push(member);
        Ok(())
    }

    /// Looks up a member by name.
    pub fn get(&self, name: &str) -> Option<&StaffMember> {
        self.index.get(name).map(|&i| &self.members[i])
    }

    /// Members in insertion order.
    pub fn members(&self) -> &[StaffMember] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StaffMember> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Clears every member's assignments, load and reservation.
    pub fn reset_loads(&mut self) {
        for member in &mut self.members {
            member.reset();
        }
    }

    pub(crate) fn member_mut(&mut self, index: usize) -> &mut StaffMember {
        &mut self.members[index]
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a StaffMember;
    type IntoIter = std::slice::Iter<'a, StaffMember>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DutySlot, WorkRegime, Weekday};

    #[test]
    fn test_roster_lookup() {
        let roster = Roster::new(vec![
            StaffMember::new("Ann", WorkRegime::FullTime),
            StaffMember::new("Ben", WorkRegime::HalfTime),
        ])
        .unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get("Ben").unwrap().max_load(), 6);
        assert!(roster.get("Zoe").is_none());
        let names: Vec<&str> = roster.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Ben"]);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = Roster::new(vec![
            StaffMember::new("Ann", WorkRegime::FullTime),
            StaffMember::new("Ann", WorkRegime::HalfTime),
        ])
        .unwrap_err();
        assert_eq!(err, RosterError::DuplicateName("Ann".into()));
    }

    #[test]
    fn test_names_are_trimmed() {
        let mut roster = Roster::new(vec![StaffMember::new(" Ann\t", WorkRegime::FullTime)]).unwrap();
        assert!(roster.get("Ann").is_some());
        assert_eq!(roster.members()[0].name, "Ann");

        assert_eq!(
            roster.push(StaffMember::new("Ann ", WorkRegime::HalfTime)),
            Err(RosterError::DuplicateName("Ann".into()))
        );
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut roster = Roster::default();
        assert_eq!(
            roster.push(StaffMember::new("  ", WorkRegime::FullTime)),
            Err(RosterError::EmptyName)
        );
        assert!(roster.is_empty());
    }

    #[test]
    fn test_reset_loads() {
        let mut roster = Roster::new(vec![StaffMember::new("Ann", WorkRegime::FullTime)]).unwrap();
        roster
            .member_mut(0)
            .assign(&DutySlot::task(Weekday::Monday, "yard", 3));
        roster.member_mut(0).reserve(1);
        assert_eq!(roster.get("Ann").unwrap().current_load(), 3);

        roster.reset_loads();
        let ann = roster.get("Ann").unwrap();
        assert_eq!(ann.current_load(), 0);
        assert_eq!(ann.reserved_load(), 0);
        assert!(ann.assignments().is_empty());
    }
}
