use std::fs;
use std::path::{Path, PathBuf};

use rust_embed::Embed;
use serde::de::DeserializeOwned;

use crate::content::ContentError;
use crate::content::types::{Announcement, Lecture, Member, QuizQuestion};

#[derive(Embed)]
#[folder = "assets/content/"]
struct ContentAssets;

/// The app's document collections, loaded once at startup.
///
/// Each collection comes from a JSON file in the user content directory
/// when one exists, falling back to the bundled defaults. Screens read
/// through the accessors; nothing mutates the catalog after load.
#[derive(Debug, Default)]
pub struct ContentCatalog {
    announcements: Vec<Announcement>,
    lectures: Vec<Lecture>,
    members: Vec<Member>,
    quizzes: Vec<QuizQuestion>,
}

impl ContentCatalog {
    /// Directory user-provided collections (and downloaded bundles) live in.
    pub fn content_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dblab")
            .join("content")
    }

    pub fn load() -> Result<Self, ContentError> {
        Self::load_from(&Self::content_dir())
    }

    pub fn load_from(dir: &Path) -> Result<Self, ContentError> {
        let mut announcements: Vec<Announcement> = load_collection(dir, "announcements")?;
        announcements.sort_by(|a, b| b.date.cmp(&a.date));

        let lectures = load_collection(dir, "lectures")?;
        let members = load_collection(dir, "members")?;

        let mut quizzes: Vec<QuizQuestion> = load_collection(dir, "quizzes")?;
        quizzes.sort_by_key(|q| q.sequence);

        Ok(Self {
            announcements,
            lectures,
            members,
            quizzes,
        })
    }

    /// Announcements, newest first.
    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    pub fn latest_announcements(&self, count: usize) -> &[Announcement] {
        &self.announcements[..self.announcements.len().min(count)]
    }

    pub fn lectures(&self) -> &[Lecture] {
        &self.lectures
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// The ordered question set for one category, cloned so an attempt
    /// keeps an immutable snapshot.
    pub fn quiz_set(&self, category: &str) -> Vec<QuizQuestion> {
        self.quizzes
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect()
    }

    pub fn question_count(&self, category: &str) -> usize {
        self.quizzes.iter().filter(|q| q.category == category).count()
    }
}

fn load_collection<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<Vec<T>, ContentError> {
    let user_path = dir.join(format!("{name}.json"));
    if user_path.exists() {
        let content = fs::read_to_string(&user_path).map_err(|source| ContentError::Io {
            path: user_path.clone(),
            source,
        })?;
        return serde_json::from_str(&content).map_err(|source| ContentError::Parse {
            name: name.to_string(),
            source,
        });
    }

    let file = ContentAssets::get(&format!("{name}.json"))
        .ok_or_else(|| ContentError::MissingAsset(name.to_string()))?;
    serde_json::from_slice(file.data.as_ref()).map_err(|source| ContentError::Parse {
        name: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_collections_parse() {
        let dir = tempfile::tempdir().unwrap();
        // Empty user dir: everything falls back to the bundled assets.
        let catalog = ContentCatalog::load_from(dir.path()).unwrap();

        assert!(!catalog.announcements().is_empty());
        assert!(!catalog.lectures().is_empty());
        assert!(!catalog.members().is_empty());
        assert!(catalog.question_count("basic") > 0);
        assert!(catalog.question_count("advanced") > 0);
    }

    #[test]
    fn announcements_sorted_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = ContentCatalog::load_from(dir.path()).unwrap();
        let dates: Vec<_> = catalog.announcements().iter().map(|a| a.date).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[test]
    fn quiz_sets_ordered_by_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = ContentCatalog::load_from(dir.path()).unwrap();
        let seqs: Vec<u32> = catalog.quiz_set("basic").iter().map(|q| q.sequence).collect();
        let mut sorted = seqs.clone();
        sorted.sort();
        assert_eq!(seqs, sorted);
    }

    #[test]
    fn bundled_questions_banks_cover_their_answers() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = ContentCatalog::load_from(dir.path()).unwrap();
        for category in ["basic", "advanced"] {
            for q in catalog.quiz_set(category) {
                for token in &q.answer {
                    let in_bank = q.tokens.iter().filter(|t| *t == token).count();
                    let in_answer = q.answer.iter().filter(|t| *t == token).count();
                    assert!(
                        in_bank >= in_answer,
                        "question {} bank is missing '{}'",
                        q.id,
                        token
                    );
                }
            }
        }
    }

    #[test]
    fn user_collection_overrides_bundled() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("members.json"),
            r#"[{"id": "m1", "name": "Override Person", "role": "Head"}]"#,
        )
        .unwrap();

        let catalog = ContentCatalog::load_from(dir.path()).unwrap();
        assert_eq!(catalog.members().len(), 1);
        assert_eq!(catalog.members()[0].name, "Override Person");
    }

    #[test]
    fn corrupt_user_collection_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("lectures.json"), "not json").unwrap();

        let err = ContentCatalog::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, ContentError::Parse { ref name, .. } if name == "lectures"));
    }

    #[test]
    fn unknown_category_yields_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = ContentCatalog::load_from(dir.path()).unwrap();
        assert!(catalog.quiz_set("expert").is_empty());
        assert_eq!(catalog.question_count("expert"), 0);
    }
}
