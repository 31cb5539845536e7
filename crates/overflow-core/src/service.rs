//! Application service - the write paths and read models behind every page.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::validation::{normalize_tags, validate_comment_text, validate_username};
use crate::domain::{Answer, Comment, CommentParent, NewComment, Question, QuestionOrder, User};
use crate::error::DomainError;
use crate::ports::{AnswerRepository, CommentRepository, QuestionRepository, UserRepository};

/// A question listing entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionSummary {
    pub question: Question,
    pub answer_count: usize,
    /// Latest answer time, or the ask time for unanswered questions.
    pub last_activity: DateTime<Utc>,
}

/// An answer together with its comments, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerThread {
    pub answer: Answer,
    pub comments: Vec<Comment>,
}

/// Everything needed to render a question page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionThread {
    pub question: Question,
    pub comments: Vec<Comment>,
    pub answers: Vec<AnswerThread>,
}

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub username: String,
    pub member_since: DateTime<Utc>,
    pub questions: Vec<Question>,
    pub answer_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub name: String,
    pub question_count: usize,
}

/// Orchestrates the repositories. Cheap to clone.
#[derive(Clone)]
pub struct QaService {
    users: Arc<dyn UserRepository>,
    questions: Arc<dyn QuestionRepository>,
    answers: Arc<dyn AnswerRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl QaService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        questions: Arc<dyn QuestionRepository>,
        answers: Arc<dyn AnswerRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            users,
            questions,
            answers,
            comments,
        }
    }

    pub fn users(&self) -> &Arc<dyn UserRepository> {
        &self.users
    }

    /// Store a new account. `password_hash` is already hashed.
    pub async fn register(&self, username: String, password_hash: String) -> Result<User, DomainError> {
        validate_username(&username)?;
        let user = User::new(username, password_hash);
        self.users.insert(user.clone()).await?;
        tracing::info!(username = %user.username, "User registered");
        Ok(user)
    }

    async fn require_user(&self, username: &str) -> Result<User, DomainError> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::UnknownUser(username.to_string()))
    }

    async fn require_question(&self, id: Uuid) -> Result<Question, DomainError> {
        self.questions
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Question",
                id,
            })
    }

    pub async fn profile(&self, username: &str) -> Result<UserProfile, DomainError> {
        let user = self.require_user(username).await?;
        let questions = self.questions.find_by_author(&user.username).await?;
        let answer_count = self.answers.find_by_author(&user.username).await?.len();
        Ok(UserProfile {
            username: user.username,
            member_since: user.created_at,
            questions,
            answer_count,
        })
    }

    pub async fn ask_question(
        &self,
        asked_by: &str,
        title: String,
        text: String,
        tags: &[String],
    ) -> Result<Question, DomainError> {
        let author = self.require_user(asked_by).await?;
        let tags = normalize_tags(tags)?;
        let question = self
            .questions
            .insert(Question::new(title, text, tags, author.username))
            .await?;
        tracing::info!(question_id = %question.id, asked_by = %question.asked_by, "Question posted");
        Ok(question)
    }

    pub async fn answer_question(
        &self,
        question_id: Uuid,
        ans_by: &str,
        text: String,
    ) -> Result<Answer, DomainError> {
        let author = self.require_user(ans_by).await?;
        let question = self.require_question(question_id).await?;
        let answer = self
            .answers
            .insert(Answer::new(question.id, text, author.username))
            .await?;
        tracing::info!(question_id = %question.id, answer_id = %answer.id, "Answer posted");
        Ok(answer)
    }

    /// Attach a drafted comment to a question or answer.
    ///
    /// The draft is stored as given once its author and parent resolve.
    pub async fn add_comment(
        &self,
        parent: CommentParent,
        draft: NewComment,
    ) -> Result<Comment, DomainError> {
        validate_comment_text(&draft.text)?;
        self.require_user(&draft.comment_by).await?;
        match parent {
            CommentParent::Question(id) => {
                self.require_question(id).await?;
            }
            CommentParent::Answer(id) => {
                if self.answers.find_by_id(id).await?.is_none() {
                    return Err(DomainError::NotFound {
                        entity_type: "Answer",
                        id,
                    });
                }
            }
        }
        let comment = self.comments.insert(Comment::new(parent, draft)).await?;
        tracing::debug!(comment_id = %comment.id, parent = parent.kind(), "Comment posted");
        Ok(comment)
    }

    /// Load a full thread. `count_view` bumps the view counter first.
    pub async fn thread(&self, id: Uuid, count_view: bool) -> Result<QuestionThread, DomainError> {
        let question = if count_view {
            self.questions.increment_views(id).await?
        } else {
            self.questions.find_by_id(id).await?
        }
        .ok_or(DomainError::NotFound {
            entity_type: "Question",
            id,
        })?;

        let comments = self
            .comments
            .find_by_parent(CommentParent::Question(question.id))
            .await?;

        let mut answers = Vec::new();
        for answer in self.answers.find_by_question(question.id).await? {
            let comments = self
                .comments
                .find_by_parent(CommentParent::Answer(answer.id))
                .await?;
            answers.push(AnswerThread { answer, comments });
        }

        Ok(QuestionThread {
            question,
            comments,
            answers,
        })
    }

    pub async fn list_questions(
        &self,
        order: QuestionOrder,
        search: Option<&str>,
    ) -> Result<Vec<QuestionSummary>, DomainError> {
        let mut summaries = Vec::new();
        for question in self.questions.find_all().await? {
            if !matches_search(&question, search.unwrap_or_default()) {
                continue;
            }
            let answers = self.answers.find_by_question(question.id).await?;
            let last_activity = answers
                .iter()
                .map(|a| a.ans_date_time)
                .max()
                .unwrap_or(question.ask_date_time);
            summaries.push(QuestionSummary {
                answer_count: answers.len(),
                last_activity,
                question,
            });
        }
        Ok(order_questions(summaries, order))
    }

    /// Every tag in use with the number of questions carrying it, by name.
    pub async fn tags(&self) -> Result<Vec<TagCount>, DomainError> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for question in self.questions.find_all().await? {
            for tag in question.tags {
                *counts.entry(tag).or_default() += 1;
            }
        }
        Ok(counts
            .into_iter()
            .map(|(name, question_count)| TagCount {
                name,
                question_count,
            })
            .collect())
    }
}

/// Whitespace-separated terms; `[tag]` terms match tags, other terms match
/// title or text. Any matching term selects the question.
pub fn matches_search(question: &Question, search: &str) -> bool {
    let mut terms = search.split_whitespace().peekable();
    if terms.peek().is_none() {
        return true;
    }

    let title = question.title.to_lowercase();
    let text = question.text.to_lowercase();
    terms.any(|term| match term.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
        Some(tag) => question.has_tag(tag),
        None => {
            let term = term.to_lowercase();
            title.contains(&term) || text.contains(&term)
        }
    })
}

/// Apply a listing order. Ties always fall back to newest first.
pub fn order_questions(
    mut summaries: Vec<QuestionSummary>,
    order: QuestionOrder,
) -> Vec<QuestionSummary> {
    let newest = |a: &QuestionSummary, b: &QuestionSummary| {
        b.question.ask_date_time.cmp(&a.question.ask_date_time)
    };
    match order {
        QuestionOrder::Newest => summaries.sort_by(newest),
        QuestionOrder::Unanswered => {
            summaries.retain(|s| s.answer_count == 0);
            summaries.sort_by(newest);
        }
        QuestionOrder::Active => summaries.sort_by(|a, b| {
            b.last_activity
                .cmp(&a.last_activity)
                .then_with(|| newest(a, b))
        }),
        QuestionOrder::MostViewed => summaries.sort_by(|a, b| {
            b.question
                .views
                .cmp(&a.question.views)
                .then_with(|| newest(a, b))
        }),
    }
    summaries
}
