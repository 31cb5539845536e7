//! Question listing, asking and reading.

use actix_web::{HttpResponse, web};
use overflow_core::domain::QuestionOrder;
use overflow_shared::ApiResponse;
use overflow_shared::dto::AskQuestionRequest;
use serde::Deserialize;
use uuid::Uuid;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuestionsQuery {
    #[serde(default)]
    pub order: QuestionOrder,
    pub search: Option<String>,
}

/// GET /api/questions?order=newest|unanswered|active|mostViewed&search=...
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListQuestionsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let questions = state
        .service
        .list_questions(query.order, query.search.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(questions)))
}

/// POST /api/questions
pub async fn ask(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<AskQuestionRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let question = state
        .service
        .ask_question(&identity.username, req.title, req.text, &req.tags)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(question)))
}

/// GET /api/questions/{id} - counts as a view.
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let thread = state.service.thread(path.into_inner(), true).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(thread)))
}
