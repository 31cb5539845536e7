//! Comments on questions and answers.
//!
//! The author is always the authenticated user and the time is stamped here.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use overflow_core::domain::{Comment, CommentParent, NewComment};
use overflow_shared::ApiResponse;
use overflow_shared::dto::PostCommentRequest;
use uuid::Uuid;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Store a comment by the signed-in user, stamped now.
pub(super) async fn store(
    state: &AppState,
    identity: Identity,
    parent: CommentParent,
    req: PostCommentRequest,
) -> AppResult<Comment> {
    let draft = NewComment {
        text: req.text,
        comment_by: identity.username,
        comment_date_time: Utc::now(),
    };
    Ok(state.service.add_comment(parent, draft).await?)
}

async fn post(
    state: &AppState,
    identity: Identity,
    parent: CommentParent,
    req: PostCommentRequest,
) -> AppResult<HttpResponse> {
    let comment = store(state, identity, parent, req).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(comment)))
}

/// POST /api/questions/{id}/comments
pub async fn on_question(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<PostCommentRequest>,
) -> AppResult<HttpResponse> {
    let parent = CommentParent::Question(path.into_inner());
    post(&state, identity, parent, body.into_inner()).await
}

/// POST /api/answers/{id}/comments
pub async fn on_answer(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<PostCommentRequest>,
) -> AppResult<HttpResponse> {
    let parent = CommentParent::Answer(path.into_inner());
    post(&state, identity, parent, body.into_inner()).await
}
