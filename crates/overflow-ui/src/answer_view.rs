//! A single answer: text, author, metadata and its comment thread.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use overflow_core::domain::{Comment, NewComment};

use crate::comment_section::{CommentSection, CommentSectionProps};
use crate::handler::CommentHandler;
use crate::hyperlink::Hyperlinked;
use crate::session::{Route, SessionContext};

#[derive(Props, Clone, PartialEq)]
pub struct AnswerViewProps {
    /// Answer body; URLs inside it are rendered as links.
    pub text: String,
    /// Username of the author.
    pub ans_by: String,
    /// Displayed verbatim.
    pub meta: String,
    pub comments: Vec<Comment>,
    #[props(!optional)]
    pub handle_add_comment: Option<CommentHandler>,
    pub session: SessionContext,
    /// Form target for comments on this answer.
    pub comment_action: String,
    #[props(default)]
    pub comments_expanded: bool,
    pub now: DateTime<Utc>,
}

impl AnswerViewProps {
    /// Where clicking the author name leads.
    pub fn author_route(&self) -> Route {
        self.session.profile_route(&self.ans_by)
    }

    pub fn handle_author_click(&self) {
        self.session.navigate(&self.author_route());
    }

    /// Pass a comment straight to the parent's handler.
    pub fn add_comment(&self, comment: NewComment) {
        if let Some(handler) = &self.handle_add_comment {
            handler.call(comment);
        }
    }

    /// The nested thread shares this answer's handler and session.
    pub fn comment_section(&self) -> CommentSectionProps {
        CommentSectionProps {
            comments: self.comments.clone(),
            handle_add_comment: self.handle_add_comment.clone(),
            session: self.session.clone(),
            action: self.comment_action.clone(),
            expanded: self.comments_expanded,
            now: self.now,
        }
    }
}

#[component]
pub fn AnswerView(props: AnswerViewProps) -> Element {
    let author_href = props.author_route().path();
    let section = props.comment_section();

    let on_author_click = {
        let props = props.clone();
        move |evt: MouseEvent| {
            evt.prevent_default();
            props.handle_author_click();
        }
    };

    rsx! {
        div {
            class: "answer right_padding",
            div {
                class: "answerText",
                Hyperlinked { text: props.text.clone() }
            }
            div {
                class: "answerAuthor",
                a {
                    class: "answer_author",
                    href: "{author_href}",
                    onclick: on_author_click,
                    "{props.ans_by}"
                }
                div { class: "answer_question_meta", "{props.meta}" }
            }
            CommentSection {
                comments: section.comments,
                handle_add_comment: section.handle_add_comment,
                session: section.session,
                action: section.action,
                expanded: section.expanded,
                now: section.now,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::TimeZone;
    use overflow_core::domain::CommentParent;
    use uuid::Uuid;

    use super::*;
    use crate::render::render_component;
    use crate::session::History;

    struct Fixture {
        props: AnswerViewProps,
        history: Arc<History>,
        received: Arc<Mutex<Vec<NewComment>>>,
    }

    fn fixture(current_user: Option<&str>, ans_by: &str, text: &str, comments: Vec<Comment>) -> Fixture {
        let history = Arc::new(History::default());
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();
        let props = AnswerViewProps {
            text: text.to_string(),
            ans_by: ans_by.to_string(),
            meta: "Jan 05 at 10:00".to_string(),
            comments,
            handle_add_comment: Some(CommentHandler::new(move |c| sink.lock().unwrap().push(c))),
            session: SessionContext::new(current_user.map(String::from), history.clone()),
            comment_action: "/question/q/answers/a/comments".to_string(),
            comments_expanded: false,
            now: Utc::now(),
        };
        Fixture {
            props,
            history,
            received,
        }
    }

    fn comment(text: &str) -> Comment {
        Comment::new(
            CommentParent::Answer(Uuid::new_v4()),
            NewComment {
                text: text.to_string(),
                comment_by: "carol".to_string(),
                comment_date_time: Utc::now(),
            },
        )
    }

    #[test]
    fn test_author_click_navigates_to_own_profile() {
        let f = fixture(Some("alice"), "alice", "text", Vec::new());

        f.props.handle_author_click();

        assert_eq!(f.history.visited(), vec!["/currentUser"]);
    }

    #[test]
    fn test_author_click_navigates_to_other_profile() {
        let f = fixture(Some("alice"), "Alice", "text", Vec::new());

        f.props.handle_author_click();

        assert_eq!(f.history.visited(), vec!["/user/Alice"]);
    }

    #[test]
    fn test_author_click_when_signed_out() {
        let f = fixture(None, "bob", "text", Vec::new());

        f.props.handle_author_click();

        assert_eq!(f.history.current().as_deref(), Some("/user/bob"));
    }

    #[test]
    fn test_render_shows_text_author_and_meta() {
        let f = fixture(Some("alice"), "bob", "Plain answer", Vec::new());

        let html = render_component(AnswerView, f.props);

        assert!(html.starts_with("<div class=\"answer right_padding\">"));
        assert!(html.contains("<div class=\"answerText\">Plain answer</div>"));
        assert!(html.contains("class=\"answer_author\""));
        assert!(html.contains("href=\"/user/bob\""));
        assert!(html.contains(">bob</a>"));
        assert!(html.contains("<div class=\"answer_question_meta\">Jan 05 at 10:00</div>"));
    }

    #[test]
    fn test_rendered_href_matches_click_target() {
        let f = fixture(Some("alice"), "alice", "text", Vec::new());

        let html = render_component(AnswerView, f.props.clone());
        f.props.handle_author_click();

        let visited = f.history.current().unwrap();
        assert!(html.contains(&format!("href=\"{visited}\"")));
    }

    #[test]
    fn test_render_links_urls_in_text() {
        let f = fixture(None, "bob", "Docs: https://docs.rs and https://crates.io", Vec::new());

        let html = render_component(AnswerView, f.props);

        assert!(html.contains("Docs: <a href=\"https://docs.rs\""));
        assert!(html.contains(">https://docs.rs</a> and <a href=\"https://crates.io\""));
        assert_eq!(html.matches("target=\"_blank\"").count(), 2);
    }

    #[test]
    fn test_comment_thread_is_nested() {
        let mut f = fixture(Some("alice"), "bob", "text", vec![comment("one"), comment("two")]);
        f.props.comments_expanded = true;

        let html = render_component(AnswerView, f.props);

        assert_eq!(html.matches("class=\"comment-section\"").count(), 1);
        assert_eq!(html.matches("class=\"comment-item\"").count(), 2);
        assert!(html.contains("action=\"/question/q/answers/a/comments\""));
    }

    #[test]
    fn test_add_comment_forwards_value_unmodified() {
        let f = fixture(Some("alice"), "bob", "text", Vec::new());
        let comment = NewComment {
            text: "nice answer".to_string(),
            comment_by: "alice".to_string(),
            comment_date_time: Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap(),
        };

        f.props.add_comment(comment.clone());

        assert_eq!(*f.received.lock().unwrap(), vec![comment]);
    }

    #[test]
    fn test_comment_section_submission_reaches_parent_handler() {
        let f = fixture(Some("alice"), "bob", "text", Vec::new());
        let section = f.props.comment_section();

        let draft = section.submit("great").unwrap();

        assert_eq!(section.handle_add_comment, f.props.handle_add_comment);
        assert_eq!(*f.received.lock().unwrap(), vec![draft]);
    }
}
