//! Consultant roster management
//!
//! The roster is the fixed list of consultants offered by the selector,
//! stored as `consultants.yml`:
//!
//! ```yaml
//! consultants:
//!   - id: adurand
//!     name: Alice Durand
//!   - id: bmartin
//!     name: Bruno Martin
//! ```

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Roster entry with consultant ID and display name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsultantEntry {
    /// Consultant ID (used for selection)
    pub id: String,
    /// Display name (used in status messages)
    pub name: String,
}

impl ConsultantEntry {
    /// Create a new roster entry
    pub fn new(id: String, name: String) -> Self {
        Self { id, name }
    }
}

/// Consultant roster structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsultantRoster {
    /// List of consultants offered by the selector
    #[serde(default)]
    pub consultants: Vec<ConsultantEntry>,
}

impl ConsultantRoster {
    /// Create a new empty roster
    pub fn new() -> Self {
        Self {
            consultants: Vec::new(),
        }
    }

    /// Create a roster with specified consultants
    pub fn with_consultants(consultants: Vec<ConsultantEntry>) -> Self {
        Self { consultants }
    }

    /// Add a consultant to the roster
    ///
    /// Returns true if the consultant was added, false if the id already
    /// exists
    pub fn add_consultant(&mut self, id: String, name: String) -> bool {
        if !self.consultants.iter().any(|c| c.id == id) {
            self.consultants.push(ConsultantEntry::new(id, name));
            true
        } else {
            false
        }
    }

    /// Remove a consultant from the roster by ID
    pub fn remove_consultant(&mut self, id: &str) -> bool {
        if let Some(pos) = self.consultants.iter().position(|c| c.id == id) {
            self.consultants.remove(pos);
            true
        } else {
            false
        }
    }

    /// Check if a consultant ID is in the roster
    pub fn contains(&self, id: &str) -> bool {
        self.consultants.iter().any(|c| c.id == id)
    }

    /// Get the display name of a consultant by ID
    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.consultants
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }

    /// Get all consultant IDs
    pub fn ids(&self) -> Vec<String> {
        self.consultants.iter().map(|c| c.id.clone()).collect()
    }

    /// Get the number of consultants in the roster
    pub fn count(&self) -> usize {
        self.consultants.len()
    }

    /// Read roster from YAML file
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read consultant roster: {}",
                path.as_ref().display()
            )
        })?;

        let roster: Self = serde_yaml::from_str(&content)
            .with_context(|| "Failed to parse consultant roster YAML")?;

        Ok(roster)
    }

    /// Write roster to YAML file
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        // Create parent directory if needed
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)
            .with_context(|| "Failed to serialize consultant roster to YAML")?;

        std::fs::write(path.as_ref(), yaml).with_context(|| {
            format!(
                "Failed to write consultant roster: {}",
                path.as_ref().display()
            )
        })?;

        Ok(())
    }
}

impl Default for ConsultantRoster {
    fn default() -> Self {
        Self::new()
    }
}
