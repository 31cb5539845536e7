use actix_web::{HttpResponse, web};
use overflow_shared::ApiResponse;
use overflow_shared::dto::PostAnswerRequest;
use uuid::Uuid;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/questions/{id}/answers
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<PostAnswerRequest>,
) -> AppResult<HttpResponse> {
    let answer = state
        .service
        .answer_question(path.into_inner(), &identity.username, body.into_inner().text)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(answer)))
}
