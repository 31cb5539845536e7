use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Question entity - the root of a thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub title: String,
    pub text: String,
    pub tags: Vec<String>,
    pub asked_by: String,
    pub ask_date_time: DateTime<Utc>,
    pub views: i64,
}

impl Question {
    /// Create a new question with no views.
    pub fn new(title: String, text: String, tags: Vec<String>, asked_by: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            title,
            text,
            tags,
            asked_by,
            ask_date_time: Utc::now(),
            views: 0,
        }
    }

    /// True if any tag equals `tag`, ignoring case.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Ordering applied to question listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionOrder {
    #[default]
    Newest,
    Unanswered,
    Active,
    MostViewed,
}
