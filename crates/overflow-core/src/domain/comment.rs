use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The post a comment hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum CommentParent {
    Question(Uuid),
    Answer(Uuid),
}

impl CommentParent {
    pub const QUESTION: &'static str = "question";
    pub const ANSWER: &'static str = "answer";

    /// Storage discriminator for the parent kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CommentParent::Question(_) => Self::QUESTION,
            CommentParent::Answer(_) => Self::ANSWER,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            CommentParent::Question(id) | CommentParent::Answer(id) => *id,
        }
    }

    /// Rebuild a parent from its stored discriminator and id.
    pub fn from_parts(kind: &str, id: Uuid) -> Option<Self> {
        match kind {
            Self::QUESTION => Some(CommentParent::Question(id)),
            Self::ANSWER => Some(CommentParent::Answer(id)),
            _ => None,
        }
    }
}

/// A comment as drafted by a client, before it is attached to a parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub text: String,
    pub comment_by: String,
    pub comment_date_time: DateTime<Utc>,
}

/// Comment entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub parent: CommentParent,
    pub text: String,
    pub comment_by: String,
    pub comment_date_time: DateTime<Utc>,
}

impl Comment {
    /// Attach a drafted comment to its parent.
    pub fn new(parent: CommentParent, draft: NewComment) -> Self {
        Self {
            id: Uuid::now_v7(),
            parent,
            text: draft.text,
            comment_by: draft.comment_by,
            comment_date_time: draft.comment_date_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_round_trips_through_parts() {
        let id = Uuid::new_v4();
        let parent = CommentParent::Answer(id);

        assert_eq!(parent.kind(), "answer");
        assert_eq!(CommentParent::from_parts(parent.kind(), parent.id()), Some(parent));
        assert_eq!(CommentParent::from_parts("tag", id), None);
    }

    #[test]
    fn test_new_comment_keeps_draft_fields() {
        let draft = NewComment {
            text: "nice answer".to_string(),
            comment_by: "alice".to_string(),
            comment_date_time: Utc::now(),
        };
        let parent = CommentParent::Question(Uuid::new_v4());

        let comment = Comment::new(parent, draft.clone());

        assert_eq!(comment.parent, parent);
        assert_eq!(comment.text, draft.text);
        assert_eq!(comment.comment_by, draft.comment_by);
        assert_eq!(comment.comment_date_time, draft.comment_date_time);
    }

    #[test]
    fn test_ids_sort_in_creation_order() {
        let draft = NewComment {
            text: "same instant".to_string(),
            comment_by: "alice".to_string(),
            comment_date_time: Utc::now(),
        };
        let parent = CommentParent::Question(Uuid::new_v4());

        let ids: Vec<Uuid> = (0..50)
            .map(|_| Comment::new(parent, draft.clone()).id)
            .collect();

        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }
}
