//! A user's profile: join date, activity counts and asked questions.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use overflow_core::service::UserProfile;

use crate::metadata::{count_label, format_meta};
use crate::render::render_document;
use crate::session::{Route, SessionContext};

#[derive(Props, Clone, PartialEq)]
pub struct ProfilePageProps {
    pub profile: UserProfile,
    pub session: SessionContext,
    pub now: DateTime<Utc>,
}

impl ProfilePageProps {
    pub fn render_document(self) -> String {
        let title = format!("{} - Profile", self.profile.username);
        render_document(&title, ProfilePage, self)
    }
}

#[component]
pub fn ProfilePage(props: ProfilePageProps) -> Element {
    let profile = &props.profile;
    let own_profile = props.session.is_current_user(&profile.username);
    let joined = format_meta(profile.member_since, props.now);
    let question_count = count_label(profile.questions.len(), "question");
    let answer_count = count_label(profile.answer_count, "answer");
    let questions: Vec<(String, String)> = profile
        .questions
        .iter()
        .map(|q| (Route::Question(q.id).path(), q.title.clone()))
        .collect();

    rsx! {
        div {
            class: "profile_page",
            h1 { class: "profile_username", "{profile.username}" }
            if own_profile {
                p { class: "profile_own", "This is your profile." }
            }
            div {
                class: "profile_stats",
                span { class: "profile_joined", "joined {joined}" }
                span { class: "profile_question_count", "{question_count}" }
                span { class: "profile_answer_count", "{answer_count}" }
            }
            if questions.is_empty() {
                p { class: "no-questions", "No questions asked yet." }
            } else {
                ul {
                    class: "profile_questions",
                    for (href, title) in questions {
                        li {
                            class: "profile_question",
                            a { href: "{href}", "{title}" }
                        }
                    }
                }
            }
        }
    }
}
