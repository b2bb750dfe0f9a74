use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A bulletin post: exam notices, schedule changes, new materials.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    pub category: String,
    pub content: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Lecture {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// One token-assembly question. `tokens` is the shuffleable bank shown to
/// the user; `answer` is the canonical correct sequence. `schema_hint` is a
/// short table-shape description rendered above the prompt.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub category: String,
    pub sequence: u32,
    pub title: String,
    pub tokens: Vec<String>,
    pub answer: Vec<String>,
    #[serde(default)]
    pub schema_hint: Option<String>,
}

/// Static metadata for the quiz tracks offered on the category screen.
pub struct QuizCategory {
    pub key: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
}

pub const CATEGORIES: &[QuizCategory] = &[
    QuizCategory {
        key: "basic",
        title: "SQL basic",
        tagline: "Single-table queries: SELECT, WHERE, ORDER BY",
    },
    QuizCategory {
        key: "advanced",
        title: "SQL advanced",
        tagline: "Joins, grouping, and subqueries",
    },
];

pub fn category_by_key(key: &str) -> Option<&'static QuizCategory> {
    CATEGORIES.iter().find(|c| c.key == key)
}
