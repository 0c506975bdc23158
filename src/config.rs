//! Planner configuration.
//!
//! Everything a host may want to change without code: the week template,
//! the candidate ordering and the preference table. Every field has a
//! default, so a config file only needs the parts it changes.
//!
//! ```json
//! {
//!   "ordering": { "strategy": "random", "seed": 7 },
//!   "template": { "meal_duty": { "weight": 1, "days": ["monday", "thursday"] } }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::ordering::{CandidateOrder, PreferenceTable};
use crate::planner::WeekTemplate;

/// Planner settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub template: WeekTemplate,
    pub ordering: CandidateOrder,
    pub preferences: PreferenceTable,
}

impl PlannerConfig {
    /// Parses a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
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
}
