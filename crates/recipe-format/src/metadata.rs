use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recipe metadata stored alongside the steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeMetadata {
    /// Human-readable model name.
    pub name: String,
    /// When the recipe was first created.
    pub created: DateTime<Utc>,
    /// When the recipe was last modified.
    pub modified: DateTime<Utc>,
}

impl RecipeMetadata {
    /// Create metadata with the given name and current timestamp.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            created: now,
            modified: now,
        }
    }

    /// Bump the modification time.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}
