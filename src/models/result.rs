//! Assignment result model.
//!
//! The output of one planning run: who fills each processed slot and
//! which slots ended up understaffed. Valid only for the run that
//! produced it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DutySlot, SlotKey};

/// The staff assigned to one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotFill {
    /// Slot identity.
    pub slot: SlotKey,
    /// Weight charged to each assigned member.
    pub weight: u32,
    /// Staff members the slot needed.
    pub required_count: u32,
    /// Assigned names, in selection order.
    pub staff: Vec<String>,
}

impl SlotFill {
    /// Whether the slot reached its required count.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.staff.len() as u32 >= self.required_count
    }
}

/// A slot that could not be fully staffed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    pub slot: SlotKey,
    /// Staff members actually assigned.
    pub filled: u32,
    /// Staff members needed.
    pub required: u32,
}

impl Shortfall {
    /// Missing staff members.
    #[inline]
    pub fn deficit(&self) -> u32 {
        self.required.saturating_sub(self.filled)
    }
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}/{} staff assigned",
            self.slot, self.filled, self.required
        )
    }
}

/// Result of one planning run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentResult {
    /// Slot fills in processing order.
    pub fills: Vec<SlotFill>,
    /// Understaffed slots in processing order.
    pub shortfalls: Vec<Shortfall>,
}

impl AssignmentResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the staff chosen for a slot, adding a shortfall when short.
    ///
    /// A slot identity seen before (the same key passed twice) extends
    /// the existing fill.
    pub fn record(&mut self, slot: &DutySlot, staff: Vec<String>) -> Option<&Shortfall> {
        let key = slot.key();
        let filled = staff.len() as u32;

        match self.fills.iter_mut().find(|f| f.slot == key) {
            Some(existing) => existing.staff.extend(staff),
            None => self.fills.push(SlotFill {
                slot: key.clone(),
                weight: slot.weight,
                required_count: slot.required_count,
                staff,
            }),
        }

        if filled < slot.required_count {
            self.shortfalls.push(Shortfall {
                slot: key,
                filled,
                required: slot.required_count,
            });
            return self.shortfalls.last();
        }
        None
    }

    /// Staff assigned to a slot, if the slot was processed.
    pub fn staff_for(&self, key: &SlotKey) -> Option<&[String]> {
        self.fills
            .iter()
            .find(|f| &f.slot == key)
            .map(|f| f.staff.as_slice())
    }

    /// Fills that involve a given staff member.
    pub fn fills_for_member<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a SlotFill> + 'a {
        self.fills
            .iter()
            .filter(move |f| f.staff.iter().any(|s| s == name))
    }

    /// Whether every processed slot was fully staffed.
    pub fn is_complete(&self) -> bool {
        self.shortfalls.is_empty()
    }

    /// Sum of all shortfall deficits.
    pub fn total_deficit(&self) -> u32 {
        self.shortfalls.iter().map(Shortfall::deficit).sum()
    }

    /// Number of processed slots.
    pub fn slot_count(&self) -> usize {
        self.fills.len()
    }
}
