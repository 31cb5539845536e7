//! # Overflow Infrastructure
//!
//! Concrete implementations of the ports defined in `overflow-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL persistence via SeaORM
//! - `auth` - JWT + Argon2 authentication

pub mod database;
pub mod memory;

#[cfg(feature = "auth")]
pub mod auth;

pub use database::DatabaseConfig;
pub use memory::{
    InMemoryAnswerRepository, InMemoryCommentRepository, InMemoryQuestionRepository,
    InMemoryUserRepository, in_memory_service,
};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
