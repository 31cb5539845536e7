//! SeaORM entities, one per table.

pub mod answer;
pub mod comment;
pub mod question;
pub mod user;
