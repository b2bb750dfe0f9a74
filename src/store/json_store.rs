use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Serialize, de::DeserializeOwned};

use crate::store::schema::{AttemptHistoryData, ProfileData};

/// JSON persistence under `dirs::data_dir()/dblab`: the local profile and
/// the completed-attempt history. Writes go through a temp file and rename
/// so a crash mid-save never corrupts the previous contents.
pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dblab");
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    #[allow(dead_code)] // Used by integration tests
    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    fn load<T: DeserializeOwned + Default>(&self, name: &str) -> T {
        let path = self.file_path(name);
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
                Err(_) => T::default(),
            }
        } else {
            T::default()
        }
    }

    fn save<T: Serialize>(&self, name: &str, data: &T) -> Result<()> {
        let path = self.file_path(name);
        let tmp_path = path.with_extension("tmp");

        let json = serde_json::to_string_pretty(data)?;
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    /// None when no profile has been set up yet, or when the file exists
    /// but cannot be used (parse failure or stale schema) and the user
    /// should be asked again.
    pub fn load_profile(&self) -> Option<ProfileData> {
        let path = self.file_path("profile.json");
        if !path.exists() {
            return None;
        }
        let content = fs::read_to_string(&path).ok()?;
        let profile: ProfileData = serde_json::from_str(&content).ok()?;
        (!profile.needs_reset()).then_some(profile)
    }

    pub fn save_profile(&self, data: &ProfileData) -> Result<()> {
        self.save("profile.json", data)
    }

    pub fn load_attempt_history(&self) -> AttemptHistoryData {
        self.load("attempt_history.json")
    }

    pub fn save_attempt_history(&self, data: &AttemptHistoryData) -> Result<()> {
        self.save("attempt_history.json", data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::schema::AttemptRecord;
    use chrono::Utc;
    use tempfile::TempDir;

    fn make_test_store() -> (TempDir, JsonStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        (dir, store)
    }

    #[test]
    fn missing_profile_is_none() {
        let (_dir, store) = make_test_store();
        assert!(store.load_profile().is_none());
    }

    #[test]
    fn profile_round_trip() {
        let (_dir, store) = make_test_store();
        store.save_profile(&ProfileData::new("Ada")).unwrap();

        let loaded = store.load_profile().unwrap();
        assert_eq!(loaded.name, "Ada");
    }

    #[test]
    fn corrupt_profile_is_none() {
        let (_dir, store) = make_test_store();
        fs::write(store.file_path("profile.json"), "{not json").unwrap();
        assert!(store.load_profile().is_none());
    }

    #[test]
    fn stale_schema_profile_is_none() {
        let (_dir, store) = make_test_store();
        let mut profile = ProfileData::new("Old");
        profile.schema_version = 99;
        store.save_profile(&profile).unwrap();
        assert!(store.load_profile().is_none());
    }

    #[test]
    fn attempt_history_round_trip_and_default() {
        let (_dir, store) = make_test_store();
        assert!(store.load_attempt_history().attempts.is_empty());

        let mut history = AttemptHistoryData::default();
        history.attempts.push(AttemptRecord {
            category: "basic".to_string(),
            correct: 4,
            total: 5,
            timestamp: Utc::now(),
        });
        store.save_attempt_history(&history).unwrap();

        let loaded = store.load_attempt_history();
        assert_eq!(loaded.attempts.len(), 1);
        assert_eq!(loaded.attempts[0].correct, 4);
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let (_dir, store) = make_test_store();
        store.save_profile(&ProfileData::new("Ada")).unwrap();
        assert!(!store.file_path("profile.tmp").exists());
        assert!(store.file_path("profile.json").exists());
    }
}
