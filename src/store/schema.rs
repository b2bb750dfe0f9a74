use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SCHEMA_VERSION: u32 = 1;

/// Local identity for the student using the app. Presence of a parseable,
/// current-version profile is what opens the quiz area.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileData {
    pub schema_version: u32,
    pub name: String,
    pub joined_at: DateTime<Utc>,
}

impl ProfileData {
    pub fn new(name: &str) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            name: name.to_string(),
            joined_at: Utc::now(),
        }
    }

    /// Stale schema versions are treated the same as a missing profile.
    pub fn needs_reset(&self) -> bool {
        self.schema_version != SCHEMA_VERSION
    }
}

/// One completed quiz attempt. Only finished attempts are recorded;
/// in-progress answers never leave memory.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub category: String,
    pub correct: usize,
    pub total: usize,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AttemptHistoryData {
    pub schema_version: u32,
    pub attempts: Vec<AttemptRecord>,
}

impl Default for AttemptHistoryData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            attempts: Vec::new(),
        }
    }
}

impl AttemptHistoryData {
    /// Best recorded score for a category, by correct count.
    pub fn best_for(&self, category: &str) -> Option<&AttemptRecord> {
        self.attempts
            .iter()
            .filter(|a| a.category == category)
            .max_by_key(|a| a.correct)
    }
}
