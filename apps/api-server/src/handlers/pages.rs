//! Server-rendered HTML pages and the form posts they make.

use std::sync::Arc;

use actix_web::{HttpResponse, http::header, web};
use chrono::Utc;
use overflow_core::domain::CommentParent;
use overflow_shared::dto::PostCommentRequest;
use overflow_ui::{History, ProfilePageProps, QuestionPageProps, Route, SessionContext};
use uuid::Uuid;

use super::comments;
use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// One render, one session; navigation is left to the browser.
fn session(username: Option<&str>) -> SessionContext {
    SessionContext::new(username.map(String::from), Arc::new(History::default()))
}

fn html(document: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(header::ContentType::html())
        .body(document)
}

/// Post/redirect/get back to a page.
fn see_other(route: &Route) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, route.path()))
        .finish()
}

/// GET /question/{id} - counts as a view.
pub async fn question_page(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let thread = state.service.thread(path.into_inner(), true).await?;

    let page = QuestionPageProps {
        thread,
        session: session(identity.username()),
        now: Utc::now(),
        handle_add_comment: None,
        comments_expanded: true,
    };
    Ok(html(page.render_document()))
}

/// POST /question/{id}/comments - the question's comment form.
pub async fn comment_on_question(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    form: web::Form<PostCommentRequest>,
) -> AppResult<HttpResponse> {
    let question_id = path.into_inner();
    let parent = CommentParent::Question(question_id);
    comments::store(&state, identity, parent, form.into_inner()).await?;
    Ok(see_other(&Route::Question(question_id)))
}

/// POST /question/{question_id}/answers/{answer_id}/comments - an answer's
/// comment form.
pub async fn comment_on_answer(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<(Uuid, Uuid)>,
    form: web::Form<PostCommentRequest>,
) -> AppResult<HttpResponse> {
    let (question_id, answer_id) = path.into_inner();
    let parent = CommentParent::Answer(answer_id);
    comments::store(&state, identity, parent, form.into_inner()).await?;
    Ok(see_other(&Route::Question(question_id)))
}

/// GET /user/{username}
pub async fn user_profile(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let profile = state.service.profile(&path.into_inner()).await?;

    let page = ProfilePageProps {
        profile,
        session: session(identity.username()),
        now: Utc::now(),
    };
    Ok(html(page.render_document()))
}

/// GET /currentUser - the signed-in user's own profile.
pub async fn current_user(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let profile = state.service.profile(&identity.username).await?;

    let page = ProfilePageProps {
        profile,
        session: session(Some(&identity.username)),
        now: Utc::now(),
    };
    Ok(html(page.render_document()))
}
