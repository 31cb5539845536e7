//! Extractors and error mapping shared by every handler.

pub mod auth;
pub mod error;
