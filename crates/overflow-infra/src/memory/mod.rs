//! In-memory repositories - used when no database is configured, and in tests.
//!
//! Data is lost on process restart.

mod repositories;

use std::sync::Arc;

use overflow_core::QaService;

pub use repositories::{
    InMemoryAnswerRepository, InMemoryCommentRepository, InMemoryQuestionRepository,
    InMemoryRepository, InMemoryUserRepository, Record,
};

/// A service over fresh, empty in-memory repositories.
pub fn in_memory_service() -> QaService {
    QaService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryQuestionRepository::new()),
        Arc::new(InMemoryAnswerRepository::new()),
        Arc::new(InMemoryCommentRepository::new()),
    )
}
