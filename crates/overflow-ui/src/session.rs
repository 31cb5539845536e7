//! Session context and client-side routes.

use std::fmt;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

/// Pages a component can send the user to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// The signed-in user's own profile.
    CurrentUser,
    UserProfile(String),
    Question(Uuid),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::CurrentUser => "/currentUser".to_string(),
            Route::UserProfile(username) => format!("/user/{username}"),
            Route::Question(id) => format!("/question/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Performs client-side navigation.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Navigator that records visited paths, newest last.
#[derive(Debug, Default)]
pub struct History {
    visited: Mutex<Vec<String>>,
}

impl History {
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn current(&self) -> Option<String> {
        self.visited.lock().ok().and_then(|v| v.last().cloned())
    }
}

impl Navigator for History {
    fn navigate(&self, path: &str) {
        tracing::debug!(path, "navigate");
        if let Ok(mut visited) = self.visited.lock() {
            visited.push(path.to_string());
        }
    }
}

/// Who is signed in and how to move between pages.
///
/// Built once per session by the application and passed to every component
/// as a prop.
#[derive(Clone)]
pub struct SessionContext {
    current_user: Option<String>,
    navigator: Arc<dyn Navigator>,
}

impl SessionContext {
    pub fn new(current_user: Option<String>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            current_user,
            navigator,
        }
    }

    /// An anonymous session.
    pub fn anonymous(navigator: Arc<dyn Navigator>) -> Self {
        Self::new(None, navigator)
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    /// Exact, case-sensitive comparison against the signed-in username.
    pub fn is_current_user(&self, username: &str) -> bool {
        self.current_user.as_deref() == Some(username)
    }

    /// Profile page for `username`: the own-profile route when it is the
    /// signed-in user, the public profile otherwise.
    pub fn profile_route(&self, username: &str) -> Route {
        if self.is_current_user(username) {
            Route::CurrentUser
        } else {
            Route::UserProfile(username.to_string())
        }
    }

    pub fn navigate(&self, route: &Route) {
        self.navigator.navigate(&route.path());
    }
}

/// Same viewer and the same navigator instance.
impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        self.current_user == other.current_user && Arc::ptr_eq(&self.navigator, &other.navigator)
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("current_user", &self.current_user)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        let id = Uuid::nil();
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::CurrentUser.path(), "/currentUser");
        assert_eq!(Route::UserProfile("bob".into()).path(), "/user/bob");
        assert_eq!(Route::Question(id).to_string(), format!("/question/{id}"));
    }

    #[test]
    fn test_profile_route_is_case_sensitive() {
        let session = SessionContext::new(Some("Alice".into()), Arc::new(History::default()));

        assert_eq!(session.profile_route("Alice"), Route::CurrentUser);
        assert_eq!(
            session.profile_route("alice"),
            Route::UserProfile("alice".into())
        );
    }

    #[test]
    fn test_anonymous_session_never_matches() {
        let session = SessionContext::anonymous(Arc::new(History::default()));

        assert!(!session.is_current_user(""));
        assert_eq!(session.profile_route(""), Route::UserProfile(String::new()));
    }

    #[test]
    fn test_sessions_compare_viewer_and_navigator() {
        let history: Arc<dyn Navigator> = Arc::new(History::default());
        let alice = SessionContext::new(Some("alice".into()), history.clone());

        assert_eq!(alice, SessionContext::new(Some("alice".into()), history.clone()));
        assert_ne!(alice, SessionContext::anonymous(history));
        assert_ne!(alice, SessionContext::new(Some("alice".into()), Arc::new(History::default())));
    }

    #[test]
    fn test_history_records_navigation() {
        let history = Arc::new(History::default());
        let session = SessionContext::anonymous(history.clone());

        session.navigate(&Route::Home);
        session.navigate(&Route::CurrentUser);

        assert_eq!(history.visited(), vec!["/", "/currentUser"]);
        assert_eq!(history.current().as_deref(), Some("/currentUser"));
    }
}
