//! PostgreSQL repository implementations.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use overflow_core::QaService;
use overflow_core::domain::{Answer, Comment, CommentParent, Question, User};
use overflow_core::error::RepoError;
use overflow_core::ports::{
    AnswerRepository, BaseRepository, CommentRepository, QuestionRepository, UserRepository,
};

use super::entity::answer::{self, Entity as AnswerEntity};
use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::question::{self, Entity as QuestionEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, convert_all, query_err};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL question repository.
pub type PostgresQuestionRepository = PostgresBaseRepository<QuestionEntity>;

/// PostgreSQL answer repository.
pub type PostgresAnswerRepository = PostgresBaseRepository<AnswerEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

/// Build the service over a single connection pool.
pub fn postgres_service(db: DbConn) -> QaService {
    QaService::new(
        Arc::new(PostgresUserRepository::new(db.clone())),
        Arc::new(PostgresQuestionRepository::new(db.clone())),
        Arc::new(PostgresAnswerRepository::new(db.clone())),
        Arc::new(PostgresCommentRepository::new(db)),
    )
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(username, "Finding user by username");

        UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(query_err)?
            .map(User::try_from)
            .transpose()
    }
}

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
    async fn find_all(&self) -> Result<Vec<Question>, RepoError> {
        let result = QuestionEntity::find()
            .order_by_desc(question::Column::AskDateTime)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        convert_all(result)
    }

    async fn find_by_author(&self, username: &str) -> Result<Vec<Question>, RepoError> {
        let result = QuestionEntity::find()
            .filter(question::Column::AskedBy.eq(username))
            .order_by_desc(question::Column::AskDateTime)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        convert_all(result)
    }

    async fn increment_views(&self, id: Uuid) -> Result<Option<Question>, RepoError> {
        let result = QuestionEntity::update_many()
            .col_expr(
                question::Column::Views,
                Expr::col(question::Column::Views).add(1),
            )
            .filter(question::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        if result.rows_affected == 0 {
            return Ok(None);
        }
        <Self as BaseRepository<Question, Uuid>>::find_by_id(self, id).await
    }
}

#[async_trait]
impl AnswerRepository for PostgresAnswerRepository {
    async fn find_by_question(&self, question_id: Uuid) -> Result<Vec<Answer>, RepoError> {
        let result = AnswerEntity::find()
            .filter(answer::Column::QuestionId.eq(question_id))
            .order_by_asc(answer::Column::AnsDateTime)
            .order_by_asc(answer::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        convert_all(result)
    }

    async fn find_by_author(&self, username: &str) -> Result<Vec<Answer>, RepoError> {
        let result = AnswerEntity::find()
            .filter(answer::Column::AnsBy.eq(username))
            .order_by_desc(answer::Column::AnsDateTime)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        convert_all(result)
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_by_parent(&self, parent: CommentParent) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::ParentKind.eq(parent.kind()))
            .filter(comment::Column::ParentId.eq(parent.id()))
            .order_by_asc(comment::Column::CommentDateTime)
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        convert_all(result)
    }
}
