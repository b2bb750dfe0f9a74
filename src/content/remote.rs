//! Optional refresh of the content collections over HTTP.
//!
//! The remote serves one JSON document bundling every collection. Each
//! collection is rewritten atomically in the user content dir, so a failed
//! download or a torn write leaves the previous files in place.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::content::ContentError;
use crate::content::types::{Announcement, Lecture, Member, QuizQuestion};

#[derive(Debug, Deserialize)]
pub struct ContentBundle {
    #[serde(default)]
    pub announcements: Vec<Announcement>,
    #[serde(default)]
    pub lectures: Vec<Lecture>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub quizzes: Vec<QuizQuestion>,
}

/// Download the bundle at `url` and replace the user content collections
/// under `dir`.
pub fn refresh(url: &str, dir: &Path) -> Result<(), ContentError> {
    if url.is_empty() {
        return Err(ContentError::NoRemoteUrl);
    }

    let body = reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(ContentError::Fetch)?;
    let bundle: ContentBundle = serde_json::from_str(&body).map_err(|source| {
        ContentError::Parse {
            name: "bundle".to_string(),
            source,
        }
    })?;

    fs::create_dir_all(dir).map_err(|source| ContentError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    write_collection(dir, "announcements", &bundle.announcements)?;
    write_collection(dir, "lectures", &bundle.lectures)?;
    write_collection(dir, "members", &bundle.members)?;
    write_collection(dir, "quizzes", &bundle.quizzes)?;
    Ok(())
}

fn write_collection<T: Serialize>(dir: &Path, name: &str, items: &[T]) -> Result<(), ContentError> {
    let json = serde_json::to_string_pretty(items).map_err(|source| ContentError::Parse {
        name: name.to_string(),
        source,
    })?;

    let path = dir.join(format!("{name}.json"));
    let tmp_path = path.with_extension("json.tmp");
    let result = (|| -> std::io::Result<()> {
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    })();

    result.map_err(|source| ContentError::Io { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = refresh("", dir.path()).unwrap_err();
        assert!(matches!(err, ContentError::NoRemoteUrl));
    }

    #[test]
    fn written_collections_load_back_through_the_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let members = vec![Member {
            id: "m1".to_string(),
            name: "Lab Head".to_string(),
            role: Some("Head".to_string()),
        }];
        write_collection(dir.path(), "members", &members).unwrap();

        let loaded = crate::content::catalog::ContentCatalog::load_from(dir.path()).unwrap();
        assert_eq!(loaded.members().len(), 1);
        assert_eq!(loaded.members()[0].name, "Lab Head");
        // No stray temp file left behind.
        assert!(!dir.path().join("members.json.tmp").exists());
    }

    #[test]
    fn bundle_tolerates_missing_collections() {
        let bundle: ContentBundle = serde_json::from_str(r#"{"members": []}"#).unwrap();
        assert!(bundle.announcements.is_empty());
        assert!(bundle.quizzes.is_empty());
    }
}
