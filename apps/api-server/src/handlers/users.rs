use actix_web::{HttpResponse, web};
use overflow_shared::ApiResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/users/{username}
pub async fn profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let profile = state.service.profile(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(profile)))
}
