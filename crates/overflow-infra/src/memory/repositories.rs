use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use overflow_core::domain::validation::validate_user;
use overflow_core::domain::{Answer, Comment, CommentParent, Question, User};
use overflow_core::error::RepoError;
use overflow_core::ports::{
    AnswerRepository, BaseRepository, CommentRepository, QuestionRepository, UserRepository,
};

/// A stored entity with a primary key.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
}

impl Record for User {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Question {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Answer {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Comment {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Rows kept in insertion order behind an async RwLock.
pub struct InMemoryRepository<T> {
    rows: RwLock<Vec<T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    async fn select<F>(&self, pred: F) -> Vec<T>
    where
        T: Clone,
        F: Fn(&T) -> bool,
    {
        self.rows.read().await.iter().filter(|&r| pred(r)).cloned().collect()
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub type InMemoryUserRepository = InMemoryRepository<User>;
pub type InMemoryQuestionRepository = InMemoryRepository<Question>;
pub type InMemoryAnswerRepository = InMemoryRepository<Answer>;
pub type InMemoryCommentRepository = InMemoryRepository<Comment>;

#[async_trait]
impl<T: Record> BaseRepository<T, Uuid> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        Ok(self.rows.read().await.iter().find(|r| r.id() == id).cloned())
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|r| r.id() == entity.id()) {
            Some(existing) => *existing = entity.clone(),
            None => rows.push(entity.clone()),
        }
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        let position = rows
            .iter()
            .position(|r| r.id() == id)
            .ok_or(RepoError::NotFound)?;
        rows.remove(position);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    // Check and write under one lock so concurrent registrations cannot
    // both claim a username.
    async fn insert(&self, user: User) -> Result<Uuid, RepoError> {
        validate_user(&user)?;
        let mut rows = self.rows.write().await;
        if rows.iter().any(|u| u.username == user.username) {
            return Err(RepoError::Constraint(format!(
                "username '{}' is already taken",
                user.username
            )));
        }
        let id = user.id;
        rows.push(user);
        Ok(id)
    }
}

fn newest_first(mut questions: Vec<Question>) -> Vec<Question> {
    questions.sort_by(|a, b| b.ask_date_time.cmp(&a.ask_date_time));
    questions
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_all(&self) -> Result<Vec<Question>, RepoError> {
        Ok(newest_first(self.select(|_| true).await))
    }

    async fn find_by_author(&self, username: &str) -> Result<Vec<Question>, RepoError> {
        Ok(newest_first(self.select(|q| q.asked_by == username).await))
    }

    async fn increment_views(&self, id: Uuid) -> Result<Option<Question>, RepoError> {
        let mut rows = self.rows.write().await;
        Ok(rows.iter_mut().find(|q| q.id == id).map(|q| {
            q.views += 1;
            q.clone()
        }))
    }
}

#[async_trait]
impl AnswerRepository for InMemoryAnswerRepository {
    async fn find_by_question(&self, question_id: Uuid) -> Result<Vec<Answer>, RepoError> {
        Ok(self.select(|a| a.question_id == question_id).await)
    }

    async fn find_by_author(&self, username: &str) -> Result<Vec<Answer>, RepoError> {
        Ok(self.select(|a| a.ans_by == username).await)
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_parent(&self, parent: CommentParent) -> Result<Vec<Comment>, RepoError> {
        Ok(self.select(|c| c.parent == parent).await)
    }
}
