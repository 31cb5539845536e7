//! Callbacks handed down as component props.

use std::fmt;
use std::sync::Arc;

use overflow_core::domain::{CommentParent, NewComment};

/// A shared, thread-safe callback.
///
/// Unlike a dioxus `EventHandler` it can be built outside a running
/// `VirtualDom`, so the server and tests can supply one. Two handlers are
/// equal only when one is a clone of the other.
pub struct SharedHandler<T>(Arc<dyn Fn(T) + Send + Sync>);

/// Receives a comment drafted under one post.
pub type CommentHandler = SharedHandler<NewComment>;

/// Receives a comment drafted anywhere on a page, with the post it is for.
pub type ThreadCommentHandler = SharedHandler<(CommentParent, NewComment)>;

impl<T> SharedHandler<T> {
    pub fn new(f: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, value: T) {
        (self.0)(value)
    }
}

impl ThreadCommentHandler {
    /// A per-post handler that tags each draft with `parent`.
    pub fn bind(&self, parent: CommentParent) -> CommentHandler {
        let inner = self.clone();
        CommentHandler::new(move |draft| inner.call((parent, draft)))
    }
}

impl<T> Clone for SharedHandler<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> PartialEq for SharedHandler<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> fmt::Debug for SharedHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedHandler")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_handlers_equal_only_their_clones() {
        let handler = CommentHandler::new(|_| {});
        let other = CommentHandler::new(|_| {});

        assert_eq!(handler, handler.clone());
        assert_ne!(handler, other);
    }

    #[test]
    fn test_bound_handler_tags_parent() {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();
        let page = ThreadCommentHandler::new(move |entry| sink.lock().unwrap().push(entry));
        let parent = CommentParent::Answer(Uuid::new_v4());
        let draft = NewComment {
            text: "thanks".to_string(),
            comment_by: "alice".to_string(),
            comment_date_time: Utc::now(),
        };

        page.bind(parent).call(draft.clone());

        assert_eq!(*received.lock().unwrap(), vec![(parent, draft)]);
    }
}
