//! Candidate ordering for slot selection.
//!
//! Once the planner knows which staff members are eligible for a slot,
//! an ordering strategy decides who is considered first. The planner
//! then takes candidates from the front until the slot is staffed.
//!
//! # Usage
//!
//! ```
//! use duty_planner::ordering::{CandidateOrder, PreferenceTable};
//!
//! let order = CandidateOrder::Random { seed: Some(42) };
//! let strategy = order.build(&PreferenceTable::default());
//! assert_eq!(strategy.name(), "random");
//! ```

mod preference;
mod strategies;

pub use preference::{PreferenceEntry, PreferenceTable};
pub use strategies::{PreferenceRanking, SeededShuffle};

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::models::{DutySlot, Roster};

/// Orders eligible candidates for one slot.
///
/// `candidates` holds indices into [`Roster::members`], already filtered
/// for availability and capacity, in roster order. Implementations
/// reorder it in place; they must not add or drop entries.
pub trait OrderingStrategy: Debug {
    /// Strategy name (e.g., "random").
    fn name(&self) -> &'static str;

    /// Reorders candidates, best first.
    fn order(&mut self, candidates: &mut [usize], roster: &Roster, slot: &DutySlot);
}

/// Configured candidate ordering.
///
/// Each planning run builds a fresh strategy from this value, so a seeded
/// random order reproduces the same assignment on every run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "kebab-case")]
pub enum CandidateOrder {
    /// Random order; `None` seeds from the operating system.
    Random {
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Highest preference score first, roster order on ties.
    #[default]
    PreferenceRanked,
}

impl CandidateOrder {
    /// Builds the strategy for one run.
    pub fn build(&self, preferences: &PreferenceTable) -> Box<dyn OrderingStrategy> {
        match self {
            CandidateOrder::Random { seed: Some(seed) } => Box::new(SeededShuffle::new(*seed)),
            CandidateOrder::Random { seed: None } => Box::new(SeededShuffle::from_os_rng()),
            CandidateOrder::PreferenceRanked => {
                Box::new(PreferenceRanking::new(preferences.clone()))
            }
        }
    }

    /// Whether runs are reproducible without outside help.
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, CandidateOrder::Random { seed: None })
    }
}
