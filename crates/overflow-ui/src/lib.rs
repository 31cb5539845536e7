//! # Overflow UI
//!
//! Dioxus components for question and profile pages. Components take their
//! props plus an explicit [`SessionContext`] and are rendered to HTML on the
//! server with `dioxus-ssr`. Nothing here performs I/O: comment submission
//! goes through a caller-supplied [`CommentHandler`] or a plain form post, and
//! author clicks through a [`Navigator`].

pub mod answer_view;
pub mod comment_section;
pub mod error;
pub mod handler;
pub mod hyperlink;
pub mod metadata;
pub mod profile_page;
pub mod question_page;
pub mod render;
pub mod session;

pub use answer_view::{AnswerView, AnswerViewProps};
pub use comment_section::{CommentSection, CommentSectionProps};
pub use error::ComponentError;
pub use handler::{CommentHandler, SharedHandler, ThreadCommentHandler};
pub use hyperlink::{Hyperlinked, Segment, handle_hyperlink};
pub use metadata::{count_label, format_meta};
pub use profile_page::{ProfilePage, ProfilePageProps};
pub use question_page::{QuestionPage, QuestionPageProps, comment_action};
pub use render::{render_component, render_document};
pub use session::{History, Navigator, Route, SessionContext};
