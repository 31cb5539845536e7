//! Write guards.
//!
//! Every record passes through one of these functions before it is handed to
//! a repository. A guard either accepts the value (possibly normalised) or
//! rejects the whole write; nothing is stored partially.

use thiserror::Error;

use super::{Answer, Comment, Question, User};
use crate::error::{DomainError, RepoError};

pub const MAX_USERNAME_LEN: usize = 30;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_TAGS: usize = 5;
pub const MAX_TAG_LEN: usize = 20;
pub const MAX_COMMENT_LEN: usize = 500;

/// Usernames end up as a profile URL path segment.
const RESERVED_USERNAME_CHARS: &[char] = &['/', '?', '#', '%'];

/// A field that failed its guard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::Validation(err.to_string())
    }
}

impl From<ValidationError> for RepoError {
    fn from(err: ValidationError) -> Self {
        RepoError::Invalid(err.to_string())
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "is required"));
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    require_text("username", username)?;
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(ValidationError::new(
            "username",
            format!("must be at most {MAX_USERNAME_LEN} characters"),
        ));
    }
    if username.chars().any(char::is_whitespace) {
        return Err(ValidationError::new("username", "must not contain whitespace"));
    }
    if username.contains(RESERVED_USERNAME_CHARS) {
        return Err(ValidationError::new(
            "username",
            "must not contain '/', '?', '#' or '%'",
        ));
    }
    Ok(())
}

/// Checked on the plain-text password, before hashing.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::new(
            "password",
            format!("must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    Ok(())
}

pub fn validate_user(user: &User) -> Result<(), ValidationError> {
    validate_username(&user.username)?;
    require_text("password", &user.password_hash)
}

/// Split, lowercase and deduplicate tags.
///
/// Returns the normalised list in first-seen order.
pub fn normalize_tags<S: AsRef<str>>(tags: &[S]) -> Result<Vec<String>, ValidationError> {
    let mut normalized: Vec<String> = Vec::new();
    for tag in tags.iter().flat_map(|t| t.as_ref().split_whitespace()) {
        let tag = tag.to_lowercase();
        if tag.chars().count() > MAX_TAG_LEN {
            return Err(ValidationError::new(
                "tags",
                format!("tag '{tag}' is longer than {MAX_TAG_LEN} characters"),
            ));
        }
        if !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }

    if normalized.is_empty() {
        return Err(ValidationError::new("tags", "at least one tag is required"));
    }
    if normalized.len() > MAX_TAGS {
        return Err(ValidationError::new(
            "tags",
            format!("at most {MAX_TAGS} tags are allowed"),
        ));
    }
    Ok(normalized)
}

pub fn validate_question(question: &Question) -> Result<(), ValidationError> {
    require_text("title", &question.title)?;
    if question.title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::new(
            "title",
            format!("must be at most {MAX_TITLE_LEN} characters"),
        ));
    }
    require_text("text", &question.text)?;
    require_text("asked_by", &question.asked_by)?;
    let normalized = normalize_tags(&question.tags)?;
    if normalized != question.tags {
        return Err(ValidationError::new("tags", "tags are not normalised"));
    }
    Ok(())
}

pub fn validate_answer(answer: &Answer) -> Result<(), ValidationError> {
    require_text("text", &answer.text)?;
    require_text("ans_by", &answer.ans_by)
}

pub fn validate_comment_text(text: &str) -> Result<(), ValidationError> {
    require_text("text", text)?;
    if text.chars().count() > MAX_COMMENT_LEN {
        return Err(ValidationError::new(
            "text",
            format!("must be at most {MAX_COMMENT_LEN} characters"),
        ));
    }
    Ok(())
}

pub fn validate_comment(comment: &Comment) -> Result<(), ValidationError> {
    validate_comment_text(&comment.text)?;
    require_text("comment_by", &comment.comment_by)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(validate_username("alice").is_ok());
        assert_eq!(validate_username("   ").unwrap_err().field, "username");
        assert!(validate_username("bob smith").is_err());
        assert!(validate_username(&"x".repeat(MAX_USERNAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_username_cannot_break_its_profile_path() {
        for name in ["a/b", "a?b", "a#b", "100%"] {
            assert_eq!(validate_username(name).unwrap_err().field, "username", "{name}");
        }
        assert!(validate_username("o'brien-2_x.y").is_ok());
    }

    #[test]
    fn test_user_without_username_is_rejected() {
        let user = User::new(String::new(), "hash".to_string());
        let err = validate_user(&user).unwrap_err();
        assert_eq!(err.field, "username");
    }

    #[test]
    fn test_normalize_tags_splits_lowercases_and_dedupes() {
        let tags = normalize_tags(&["Rust async", "rust", "TOKIO"]).unwrap();
        assert_eq!(tags, vec!["rust", "async", "tokio"]);
    }

    #[test]
    fn test_normalize_tags_limits() {
        assert!(normalize_tags::<&str>(&[]).is_err());
        assert!(normalize_tags(&["a b c d e f"]).is_err());
        assert!(normalize_tags(&["x".repeat(MAX_TAG_LEN + 1)]).is_err());
    }

    #[test]
    fn test_question_requires_normalised_tags() {
        let mut question = Question::new(
            "Title".to_string(),
            "Body".to_string(),
            vec!["Rust".to_string()],
            "alice".to_string(),
        );
        assert!(validate_question(&question).is_err());

        question.tags = vec!["rust".to_string()];
        assert!(validate_question(&question).is_ok());
    }

    #[test]
    fn test_comment_length() {
        assert!(validate_comment_text("fine").is_ok());
        assert!(validate_comment_text("").is_err());
        assert!(validate_comment_text(&"x".repeat(MAX_COMMENT_LEN + 1)).is_err());
    }
}
