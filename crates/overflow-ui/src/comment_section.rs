//! Comment thread with an add-comment form.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use overflow_core::domain::{Comment, NewComment};

use crate::error::ComponentError;
use crate::handler::CommentHandler;
use crate::hyperlink::Hyperlinked;
use crate::metadata::format_meta;
use crate::session::SessionContext;

#[derive(Props, Clone, PartialEq)]
pub struct CommentSectionProps {
    pub comments: Vec<Comment>,
    /// Receives drafted comments. Without one the form posts to `action`.
    #[props(!optional)]
    pub handle_add_comment: Option<CommentHandler>,
    pub session: SessionContext,
    /// Form target for the add-comment form.
    pub action: String,
    /// Start with the thread open.
    #[props(default)]
    pub expanded: bool,
    pub now: DateTime<Utc>,
}

impl CommentSectionProps {
    /// Draft a comment from form input and hand it to the handler.
    ///
    /// Returns the exact value passed on.
    pub fn submit(&self, text: &str) -> Result<NewComment, ComponentError> {
        if text.trim().is_empty() {
            return Err(ComponentError::EmptyComment);
        }
        let comment_by = self
            .session
            .current_user()
            .ok_or(ComponentError::NotLoggedIn)?
            .to_string();

        let draft = NewComment {
            text: text.to_string(),
            comment_by,
            comment_date_time: Utc::now(),
        };
        if let Some(handler) = &self.handle_add_comment {
            handler.call(draft.clone());
        }
        Ok(draft)
    }
}

fn toggle_label(expanded: bool, count: usize) -> String {
    if expanded {
        "Hide Comments".to_string()
    } else {
        format!("Show Comments ({count})")
    }
}

/// A post's comments, collapsed behind a toggle, plus the add-comment form
/// for signed-in viewers.
#[component]
pub fn CommentSection(props: CommentSectionProps) -> Element {
    let mut expanded = use_signal(|| props.expanded);
    let mut draft = use_signal(String::new);
    let mut error = use_signal(|| None::<ComponentError>);

    let toggle = toggle_label(expanded(), props.comments.len());
    let signed_in = props.session.current_user().is_some();

    let on_submit = {
        let props = props.clone();
        move |evt: FormEvent| {
            // No handler: let the browser post the form.
            if props.handle_add_comment.is_none() {
                return;
            }
            evt.prevent_default();
            let text = draft();
            match props.submit(&text) {
                Ok(_) => {
                    draft.set(String::new());
                    error.set(None);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    };

    rsx! {
        div {
            class: "comment-section",
            button {
                class: "toggle-button",
                r#type: "button",
                onclick: move |_| expanded.set(!expanded()),
                "{toggle}"
            }
            if expanded() {
                if props.comments.is_empty() {
                    p { class: "no-comments", "No comments yet." }
                } else {
                    ul {
                        class: "comments-list",
                        for comment in props.comments.iter() {
                            CommentItem {
                                key: "{comment.id}",
                                comment: comment.clone(),
                                now: props.now,
                            }
                        }
                    }
                }
                if signed_in {
                    form {
                        class: "add-comment",
                        method: "post",
                        action: "{props.action}",
                        onsubmit: on_submit,
                        textarea {
                            class: "comment-textarea",
                            name: "text",
                            placeholder: "Comment",
                            value: "{draft}",
                            oninput: move |e| draft.set(e.value()),
                        }
                        if let Some(err) = error() {
                            p { class: "comment-error", "{err}" }
                        }
                        button {
                            class: "add-comment-button",
                            r#type: "submit",
                            "Add Comment"
                        }
                    }
                } else {
                    p { class: "comment-login-hint", "Log in to comment." }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct CommentItemProps {
    comment: Comment,
    now: DateTime<Utc>,
}

#[component]
fn CommentItem(props: CommentItemProps) -> Element {
    let comment = &props.comment;
    let meta = format_meta(comment.comment_date_time, props.now);

    rsx! {
        li {
            class: "comment-item",
            p {
                class: "comment-text",
                Hyperlinked { text: comment.text.clone() }
            }
            small { class: "comment-meta", "{comment.comment_by}, {meta}" }
        }
    }
}
