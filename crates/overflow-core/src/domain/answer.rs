use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Answer entity - belongs to exactly one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: Uuid,
    pub question_id: Uuid,
    pub text: String,
    pub ans_by: String,
    pub ans_date_time: DateTime<Utc>,
}

impl Answer {
    pub fn new(question_id: Uuid, text: String, ans_by: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            question_id,
            text,
            ans_by,
            ans_date_time: Utc::now(),
        }
    }
}
