use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Expected flood level label per advisory and point/zone id
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloodLevels {
    table: FxHashMap<String, FxHashMap<String, String>>,
}

impl FloodLevels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        advisory: impl Into<String>,
        id: impl Into<String>,
        level: impl Into<String>,
    ) {
        self.table
            .entry(advisory.into())
            .or_default()
            .insert(id.into(), level.into());
    }

    /// Level label, or `None` when absent or blank
    pub fn level_for(&self, advisory: &str, id: &str) -> Option<&str> {
        self.table
            .get(advisory)?
            .get(id)
            .map(|level| level.trim())
            .filter(|level| !level.is_empty())
    }

    pub fn advisories(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }
}
