#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr, SqlErr};
    use uuid::Uuid;

    use crate::database::entity::{answer, comment, question, user};
    use crate::database::postgres_base::{constraint_err, write_err};
    use crate::database::postgres_repo::{
        PostgresAnswerRepository, PostgresCommentRepository, PostgresQuestionRepository,
        PostgresUserRepository,
    };
    use overflow_core::domain::{Answer, CommentParent, Question, User};
    use overflow_core::error::RepoError;
    use overflow_core::ports::{
        AnswerRepository, BaseRepository, CommentRepository, QuestionRepository, UserRepository,
    };

    fn question_row(id: Uuid, title: &str, views: i64) -> question::Model {
        question::Model {
            id,
            title: title.to_owned(),
            text: "Body".to_owned(),
            tags: "rust tokio".to_owned(),
            asked_by: "alice".to_owned(),
            ask_date_time: Utc::now().into(),
            views,
        }
    }

    #[tokio::test]
    async fn test_find_question_by_id_splits_tags() {
        let question_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![question_row(question_id, "Test Question", 3)]])
            .into_connection();

        let repo = PostgresQuestionRepository::new(db);
        let result: Option<Question> = repo.find_by_id(question_id).await.unwrap();

        let question = result.unwrap();
        assert_eq!(question.id, question_id);
        assert_eq!(question.title, "Test Question");
        assert_eq!(question.tags, vec!["rust", "tokio"]);
        assert_eq!(question.views, 3);
    }

    #[tokio::test]
    async fn test_find_user_by_username() {
        let user_id = Uuid::new_v4();
        let now = Utc::now();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user::Model {
                id: user_id,
                username: "alice".to_owned(),
                password_hash: "hash".to_owned(),
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);
        let user: User = repo.find_by_username("alice").await.unwrap().unwrap();

        assert_eq!(user.id, user_id);
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_find_answers_keeps_row_order() {
        let question_id = Uuid::new_v4();
        let now = Utc::now();
        let rows: Vec<answer::Model> = ["first", "second"]
            .iter()
            .map(|text| answer::Model {
                id: Uuid::new_v4(),
                question_id,
                text: (*text).to_owned(),
                ans_by: "bob".to_owned(),
                ans_date_time: now.into(),
            })
            .collect();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![rows])
            .into_connection();

        let repo = PostgresAnswerRepository::new(db);
        let answers: Vec<Answer> = repo.find_by_question(question_id).await.unwrap();

        let texts: Vec<_> = answers.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_comment_with_unknown_parent_kind_is_an_error() {
        let parent_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![comment::Model {
                id: Uuid::new_v4(),
                parent_kind: "tag".to_owned(),
                parent_id,
                text: "hmm".to_owned(),
                comment_by: "carol".to_owned(),
                comment_date_time: Utc::now().into(),
            }]])
            .into_connection();

        let repo = PostgresCommentRepository::new(db);
        let result = repo.find_by_parent(CommentParent::Question(parent_id)).await;

        assert!(matches!(result, Err(RepoError::Query(_))));
    }

    #[tokio::test]
    async fn test_increment_views_on_missing_question() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresQuestionRepository::new(db);
        let result = repo.increment_views(Uuid::new_v4()).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresQuestionRepository::new(db);
        let result = BaseRepository::<Question, Uuid>::delete(&repo, Uuid::new_v4()).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    fn user_row(user: &User) -> user::Model {
        user::Model {
            id: user.id,
            username: user.username.clone(),
            password_hash: user.password_hash.clone(),
            created_at: user.created_at.into(),
            updated_at: user.updated_at.into(),
        }
    }

    #[tokio::test]
    async fn test_user_without_username_never_reaches_the_database() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = PostgresUserRepository::new(db.clone());

        let user = User::new(String::new(), "hash".to_owned());

        let result = UserRepository::insert(&repo, user).await;

        assert!(matches!(result, Err(RepoError::Invalid(_))));
        drop(repo);
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn test_save_inserts_when_update_matches_nothing() {
        let user = User::new("alice".to_owned(), "hash".to_owned());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<user::Model>::new(), vec![user_row(&user)]])
            .into_connection();
        let repo = PostgresUserRepository::new(db.clone());

        let saved = BaseRepository::<User, Uuid>::save(&repo, user.clone()).await.unwrap();

        assert_eq!(saved.id, user.id);
        assert_eq!(saved.username, "alice");
        drop(repo);
        let log = db.into_transaction_log();
        assert_eq!(log.len(), 2);
        assert!(format!("{:?}", log[0]).contains("UPDATE"));
        assert!(format!("{:?}", log[1]).contains("INSERT"));
    }

    #[tokio::test]
    async fn test_save_updates_existing_row_without_insert() {
        let user = User::new("alice".to_owned(), "hash".to_owned());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_row(&user)]])
            .into_connection();
        let repo = PostgresUserRepository::new(db.clone());

        BaseRepository::<User, Uuid>::save(&repo, user).await.unwrap();

        drop(repo);
        assert_eq!(db.into_transaction_log().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_fallback_insert_is_a_query_error() {
        let user = User::new("alice".to_owned(), "hash".to_owned());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<user::Model>::new()])
            .append_query_errors(vec![DbErr::Custom("disk full".to_owned())])
            .into_connection();
        let repo = PostgresUserRepository::new(db);

        let result = BaseRepository::<User, Uuid>::save(&repo, user).await;

        assert!(matches!(result, Err(RepoError::Query(msg)) if msg.contains("disk full")));
    }

    // The mock driver cannot raise a real SQLSTATE, so the mapping is
    // checked on the driver's classification directly.
    #[test]
    fn test_unique_violation_is_a_constraint_error() {
        let detail = "duplicate key value violates unique constraint \"users_username_key\"";

        let err = constraint_err(SqlErr::UniqueConstraintViolation(detail.to_owned()));

        assert!(matches!(err, RepoError::Constraint(msg) if msg == detail));
    }

    #[test]
    fn test_foreign_key_violation_is_a_constraint_error() {
        let err = constraint_err(SqlErr::ForeignKeyConstraintViolation(
            "answers_question_id_fkey".to_owned(),
        ));

        assert!(matches!(err, RepoError::Constraint(_)));
    }

    #[test]
    fn test_connection_failure_keeps_its_kind() {
        let err = write_err(DbErr::Conn(RuntimeErr::Internal("refused".to_owned())));

        assert!(matches!(err, RepoError::Connection(msg) if msg.contains("refused")));
    }
}
