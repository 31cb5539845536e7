use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::validation::{
    validate_answer, validate_comment, validate_question, validate_user,
};
use crate::domain::{Answer, Comment, CommentParent, Question, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    ///
    /// Does not run write guards; use the `insert` method of the
    /// entity-specific repository for new records.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository - the `users` collection.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their exact username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    /// Guard, check uniqueness, then store a new user.
    async fn insert(&self, user: User) -> Result<Uuid, RepoError> {
        validate_user(&user)?;
        if self.find_by_username(&user.username).await?.is_some() {
            return Err(RepoError::Constraint(format!(
                "username '{}' is already taken",
                user.username
            )));
        }
        Ok(self.save(user).await?.id)
    }
}

/// Question repository.
#[async_trait]
pub trait QuestionRepository: BaseRepository<Question, Uuid> {
    /// All questions, newest first.
    async fn find_all(&self) -> Result<Vec<Question>, RepoError>;

    /// Questions asked by `username`, newest first.
    async fn find_by_author(&self, username: &str) -> Result<Vec<Question>, RepoError>;

    /// Bump the view counter and return the updated question.
    async fn increment_views(&self, id: Uuid) -> Result<Option<Question>, RepoError>;

    async fn insert(&self, question: Question) -> Result<Question, RepoError> {
        validate_question(&question)?;
        self.save(question).await
    }
}

/// Answer repository.
#[async_trait]
pub trait AnswerRepository: BaseRepository<Answer, Uuid> {
    /// Answers to a question in posting order.
    async fn find_by_question(&self, question_id: Uuid) -> Result<Vec<Answer>, RepoError>;

    async fn find_by_author(&self, username: &str) -> Result<Vec<Answer>, RepoError>;

    async fn insert(&self, answer: Answer) -> Result<Answer, RepoError> {
        validate_answer(&answer)?;
        self.save(answer).await
    }
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, Uuid> {
    /// Comments on a question or answer in posting order.
    async fn find_by_parent(&self, parent: CommentParent) -> Result<Vec<Comment>, RepoError>;

    async fn insert(&self, comment: Comment) -> Result<Comment, RepoError> {
        validate_comment(&comment)?;
        self.save(comment).await
    }
}
