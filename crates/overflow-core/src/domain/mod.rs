//! Domain entities - the core business objects.

mod answer;
mod comment;
mod question;
mod user;

pub mod validation;

pub use answer::Answer;
pub use comment::{Comment, CommentParent, NewComment};
pub use question::{Question, QuestionOrder};
pub use user::User;
