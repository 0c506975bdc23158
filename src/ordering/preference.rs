//! Role-based preference scores.
//!
//! Scores rank candidates for a post. They never exclude anyone:
//! a zero score only means "no particular fit".

use serde::{Deserialize, Serialize};

use crate::models::{Location, Post, Role};

/// One role × location score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceEntry {
    pub role: Role,
    pub location: Location,
    pub score: u32,
}

/// Lookup table from (role, location) to a preference score.
///
/// Unlisted pairs, members without a role, named tasks and meal duty
/// all score 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceTable {
    entries: Vec<PreferenceEntry>,
}

impl PreferenceTable {
    /// Creates an empty table (every score is 0).
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets the score for a role at a location, replacing any previous value.
    pub fn with_score(mut self, role: Role, location: Location, score: u32) -> Self {
        match self
            .entries
            .iter_mut()
            .find(|e| e.role == role && e.location == location)
        {
            Some(entry) => entry.score = score,
            None => self.entries.push(PreferenceEntry {
                role,
                location,
                score,
            }),
        }
        self
    }

    /// Score of a role for a post.
    pub fn score(&self, role: Option<Role>, post: &Post) -> u32 {
        let (Some(role), Some(location)) = (role, post.location()) else {
            return 0;
        };
        self.entries
            .iter()
            .find(|e| e.role == role && e.location == location)
            .map(|e| e.score)
            .unwrap_or(0)
    }

    pub fn entries(&self) -> &[PreferenceEntry] {
        &self.entries
    }
}

impl Default for PreferenceTable {
    /// The standard school table.
    fn default() -> Self {
        use Location::*;

        Self::empty()
            .with_score(Role::Kindergarten, Playground, 1)
            .with_score(Role::Kindergarten, KindergartenPlayground, 3)
            .with_score(Role::LowerGrades, Playground, 2)
            .with_score(Role::LowerGrades, KindergartenPlayground, 1)
            .with_score(Role::LowerGrades, Cafeteria, 2)
            .with_score(Role::UpperGrades, Playground, 2)
            .with_score(Role::UpperGrades, Cafeteria, 1)
            .with_score(Role::UpperGrades, Gate, 2)
            .with_score(Role::Any, Playground, 1)
            .with_score(Role::Any, KindergartenPlayground, 1)
            .with_score(Role::Any, Cafeteria, 1)
            .with_score(Role::Any, Gate, 1)
    }
}
