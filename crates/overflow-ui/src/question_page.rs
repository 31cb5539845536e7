//! Full question page: header, question body, answers.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use overflow_core::domain::CommentParent;
use overflow_core::service::QuestionThread;
use uuid::Uuid;

use crate::answer_view::{AnswerView, AnswerViewProps};
use crate::comment_section::{CommentSection, CommentSectionProps};
use crate::handler::ThreadCommentHandler;
use crate::hyperlink::Hyperlinked;
use crate::metadata::{count_label, format_meta};
use crate::render::render_document;
use crate::session::SessionContext;

/// Form target for a comment on `parent`, a post on question `question_id`.
pub fn comment_action(question_id: Uuid, parent: CommentParent) -> String {
    match parent {
        CommentParent::Question(id) => format!("/question/{id}/comments"),
        CommentParent::Answer(id) => format!("/question/{question_id}/answers/{id}/comments"),
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct QuestionPageProps {
    pub thread: QuestionThread,
    pub session: SessionContext,
    pub now: DateTime<Utc>,
    /// Receives comments drafted anywhere on the page, tagged with their
    /// post. Without one, comment forms post to the server.
    #[props(!optional)]
    pub handle_add_comment: Option<ThreadCommentHandler>,
    /// Open every comment thread; used for static server rendering.
    #[props(default)]
    pub comments_expanded: bool,
}

impl QuestionPageProps {
    fn question_id(&self) -> Uuid {
        self.thread.question.id
    }

    /// The question's own comment thread.
    pub fn question_comments(&self) -> CommentSectionProps {
        let parent = CommentParent::Question(self.question_id());
        CommentSectionProps {
            comments: self.thread.comments.clone(),
            handle_add_comment: self.handle_add_comment.as_ref().map(|h| h.bind(parent)),
            session: self.session.clone(),
            action: comment_action(self.question_id(), parent),
            expanded: self.comments_expanded,
            now: self.now,
        }
    }

    /// One entry per answer, in display order.
    pub fn answers(&self) -> Vec<AnswerViewProps> {
        self.thread
            .answers
            .iter()
            .map(|entry| {
                let parent = CommentParent::Answer(entry.answer.id);
                AnswerViewProps {
                    text: entry.answer.text.clone(),
                    ans_by: entry.answer.ans_by.clone(),
                    meta: format!("answered {}", format_meta(entry.answer.ans_date_time, self.now)),
                    comments: entry.comments.clone(),
                    handle_add_comment: self.handle_add_comment.as_ref().map(|h| h.bind(parent)),
                    session: self.session.clone(),
                    comment_action: comment_action(self.question_id(), parent),
                    comments_expanded: self.comments_expanded,
                    now: self.now,
                }
            })
            .collect()
    }

    /// The page as a complete HTML document.
    pub fn render_document(self) -> String {
        let title = self.thread.question.title.clone();
        render_document(&title, QuestionPage, self)
    }
}

#[component]
pub fn QuestionPage(props: QuestionPageProps) -> Element {
    let question = &props.thread.question;
    let answer_count = count_label(props.thread.answers.len(), "answer");
    let author_route = props.session.profile_route(&question.asked_by);
    let author_href = author_route.path();
    let asked = format_meta(question.ask_date_time, props.now);
    let section = props.question_comments();
    let answers = props.answers();

    let on_author_click = {
        let session = props.session.clone();
        move |evt: MouseEvent| {
            evt.prevent_default();
            session.navigate(&author_route);
        }
    };

    rsx! {
        div {
            class: "question_page",
            div {
                class: "question_header",
                div { class: "answer_count", "{answer_count}" }
                h1 { class: "question_title", "{question.title}" }
                div { class: "view_count", "{question.views} views" }
            }
            div {
                class: "question_body",
                div {
                    class: "question_text",
                    Hyperlinked { text: question.text.clone() }
                }
                div {
                    class: "question_tags",
                    for tag in question.tags.iter() {
                        span { class: "question_tag_button", "{tag}" }
                    }
                }
                div {
                    class: "question_author",
                    a {
                        class: "question_author_link",
                        href: "{author_href}",
                        onclick: on_author_click,
                        "{question.asked_by}"
                    }
                    div { class: "answer_question_meta", "asked {asked}" }
                }
            }
            CommentSection {
                comments: section.comments,
                handle_add_comment: section.handle_add_comment,
                session: section.session,
                action: section.action,
                expanded: section.expanded,
                now: section.now,
            }
            div {
                class: "answers",
                for answer in answers {
                    AnswerView {
                        text: answer.text,
                        ans_by: answer.ans_by,
                        meta: answer.meta,
                        comments: answer.comments,
                        handle_add_comment: answer.handle_add_comment,
                        session: answer.session,
                        comment_action: answer.comment_action,
                        comments_expanded: answer.comments_expanded,
                        now: answer.now,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use overflow_core::domain::{Answer, Comment, NewComment, Question};
    use overflow_core::service::AnswerThread;

    use super::*;
    use crate::render::render_component;
    use crate::session::History;

    fn comment(parent: CommentParent, text: &str) -> Comment {
        Comment::new(
            parent,
            NewComment {
                text: text.to_string(),
                comment_by: "carol".to_string(),
                comment_date_time: Utc::now(),
            },
        )
    }

    fn thread() -> QuestionThread {
        let question = Question::new(
            "How do lifetimes work?".to_string(),
            "See https://doc.rust-lang.org".to_string(),
            vec!["rust".to_string(), "lifetimes".to_string()],
            "alice".to_string(),
        );
        let first = Answer::new(question.id, "First <b>answer</b>".to_string(), "bob".to_string());
        let second = Answer::new(question.id, "Second answer".to_string(), "alice".to_string());
        QuestionThread {
            comments: vec![comment(CommentParent::Question(question.id), "on question")],
            answers: vec![
                AnswerThread {
                    comments: vec![comment(CommentParent::Answer(first.id), "on first")],
                    answer: first,
                },
                AnswerThread {
                    comments: Vec::new(),
                    answer: second,
                },
            ],
            question,
        }
    }

    fn page(user: Option<&str>) -> QuestionPageProps {
        QuestionPageProps {
            thread: thread(),
            session: SessionContext::new(user.map(String::from), Arc::new(History::default())),
            now: Utc::now(),
            handle_add_comment: None,
            comments_expanded: true,
        }
    }

    #[test]
    fn test_page_renders_answers_in_order_with_routes() {
        let props = page(Some("alice"));

        let html = render_component(QuestionPage, props.clone());

        assert_eq!(props.answers().len(), 2);
        assert!(html.contains("<div class=\"answer_count\">2 answers</div>"));
        let bob = html.find("href=\"/user/bob\"").unwrap();
        let own = html.find("<a class=\"answer_author\" href=\"/currentUser\"").unwrap();
        assert!(bob < own);
        assert!(html.contains("<a class=\"question_author_link\" href=\"/currentUser\""));
        assert_eq!(html.matches("class=\"question_tag_button\"").count(), 2);
    }

    #[test]
    fn test_every_post_gets_its_own_comment_form() {
        let props = page(Some("alice"));
        let question_id = props.thread.question.id;
        let first_answer = props.thread.answers[0].answer.id;

        let html = render_component(QuestionPage, props);

        assert_eq!(html.matches("<form").count(), 3);
        assert!(html.contains(&format!("action=\"/question/{question_id}/comments\"")));
        assert!(html.contains(&format!(
            "action=\"/question/{question_id}/answers/{first_answer}/comments\""
        )));
    }

    #[test]
    fn test_handlers_are_bound_to_their_parent() {
        let parents = Arc::new(Mutex::new(Vec::new()));
        let sink = parents.clone();
        let mut props = page(Some("alice"));
        props.handle_add_comment = Some(ThreadCommentHandler::new(move |(parent, _)| {
            sink.lock().unwrap().push(parent)
        }));
        let first_answer = props.thread.answers[0].answer.id;
        let question_id = props.thread.question.id;

        props.answers()[0].comment_section().submit("thanks").unwrap();
        props.question_comments().submit("why?").unwrap();

        assert_eq!(
            *parents.lock().unwrap(),
            vec![
                CommentParent::Answer(first_answer),
                CommentParent::Question(question_id),
            ]
        );
    }

    #[test]
    fn test_document_escapes_user_text() {
        let html = page(None).render_document();

        assert!(html.starts_with("<!DOCTYPE html><html><head>"));
        assert!(html.contains("<title>How do lifetimes work?</title>"));
        assert!(html.contains("First &lt;b&gt;answer&lt;/b&gt;"));
        assert!(html.contains("<a href=\"https://doc.rust-lang.org\""));
        assert!(html.contains("on first"));
        assert!(html.contains("on question"));
        assert!(html.contains("Log in to comment."));
    }
}
