//! PostgreSQL persistence via SeaORM.

mod connections;

#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
mod postgres_repo;

pub use connections::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use connections::connect;
#[cfg(feature = "postgres")]
pub use postgres_base::PostgresBaseRepository;
#[cfg(feature = "postgres")]
pub use postgres_repo::{
    PostgresAnswerRepository, PostgresCommentRepository, PostgresQuestionRepository,
    PostgresUserRepository, postgres_service,
};

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
