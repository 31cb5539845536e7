//! # Overflow Core
//!
//! The domain layer of the Overflow question-and-answer site.
//! This crate contains the entities, write guards, repository ports and the
//! [`QaService`](service::QaService) that ties them together. It has no
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError};
pub use service::QaService;
