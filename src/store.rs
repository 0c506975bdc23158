//! Roster storage.
//!
//! The planner never touches storage. Hosts load a [`Roster`] through a
//! [`RosterStore`], plan, and save it back. Only the staff records are
//! stored; run state (assignments, loads) is not.
//!
//! [`JsonFileStore`] keeps the roster as a flat JSON array of staff
//! records and rewrites the whole file on every save.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreError;
use crate::models::{Roster, StaffMember};

/// Load/save contract for a roster.
pub trait RosterStore {
    /// Loads the roster, rejecting duplicate names and unknown regimes.
    fn load_roster(&self) -> Result<Roster, StoreError>;

    /// Replaces the stored roster.
    fn save_roster(&self, roster: &Roster) -> Result<(), StoreError>;
}

/// Roster stored as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterStore for JsonFileStore {
    /// A missing file loads as an empty roster.
    fn load_roster(&self) -> Result<Roster, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no roster file, starting empty");
            return Ok(Roster::default());
        }

        let data = fs::read_to_string(&self.path)?;
        let members: Vec<StaffMember> = serde_json::from_str(&data)?;
        let roster = Roster::new(members)?;
        debug!(path = %self.path.display(), staff = roster.len(), "roster loaded");
        Ok(roster)
    }

    fn save_roster(&self, roster: &Roster) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(roster.members())?;
        fs::write(&self.path, data)?;
        debug!(path = %self.path.display(), staff = roster.len(), "roster saved");
        Ok(())
    }
}
