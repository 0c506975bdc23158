//! Built-in candidate ordering strategies.
//!
//! - [`SeededShuffle`]: uniform random order, reproducible per seed
//! - [`PreferenceRanking`]: descending preference score, stable on ties

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::{OrderingStrategy, PreferenceTable};
use crate::models::{DutySlot, Roster};

/// Random candidate order.
///
/// Spreads duties over repeated runs without preferring anyone.
/// Two shuffles built from the same seed produce the same sequence.
#[derive(Debug, Clone)]
pub struct SeededShuffle {
    rng: StdRng,
}

impl SeededShuffle {
    /// Creates a reproducible shuffle.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a shuffle seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl OrderingStrategy for SeededShuffle {
    fn name(&self) -> &'static str {
        "random"
    }

    fn order(&mut self, candidates: &mut [usize], _roster: &Roster, _slot: &DutySlot) {
        candidates.shuffle(&mut self.rng);
    }
}

/// Preference-ranked candidate order.
///
/// Sorts by [`PreferenceTable`] score, highest first. The sort is stable,
/// so equally scored candidates keep roster order.
#[derive(Debug, Clone, Default)]
pub struct PreferenceRanking {
    table: PreferenceTable,
}

impl PreferenceRanking {
    pub fn new(table: PreferenceTable) -> Self {
        Self { table }
    }
}

impl OrderingStrategy for PreferenceRanking {
    fn name(&self) -> &'static str {
        "preference-ranked"
    }

    fn order(&mut self, candidates: &mut [usize], roster: &Roster, slot: &DutySlot) {
        let members = roster.members();
        candidates.sort_by_key(|&i| {
            std::cmp::Reverse(members[i].preference_score(&slot.post, &self.table))
        });
    }
}
