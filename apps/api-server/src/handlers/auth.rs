//! Registration, login and the current-user endpoint.

use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::{HttpResponse, web};
use overflow_core::domain::validation::{validate_password, validate_username};
use overflow_shared::dto::{AuthResponse, LoginRequest, RegisterUserRequest, UserResponse};
use uuid::Uuid;

use crate::middleware::auth::{ACCESS_TOKEN_COOKIE, Identity};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn issue_token(state: &AppState, user_id: Uuid, username: &str) -> AppResult<AuthResponse> {
    let access_token = state
        .tokens
        .generate_token(user_id, username)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(AuthResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.tokens.expiration_seconds().max(0) as u64,
    })
}

/// The same token as a cookie, so page forms can post as the user.
fn token_cookie(auth: &AuthResponse) -> Cookie<'static> {
    Cookie::build(ACCESS_TOKEN_COOKIE, auth.access_token.clone())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(auth.expires_in as i64))
        .finish()
}

/// POST /api/auth/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Reject before paying for a hash.
    validate_username(&req.username)?;
    validate_password(&req.password)?;

    let password_hash = state.passwords.hash(&req.password)?;
    let user = state.service.register(req.username, password_hash).await?;

    let auth = issue_token(&state, user.id, &user.username)?;
    Ok(HttpResponse::Created().cookie(token_cookie(&auth)).json(auth))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let Some(user) = state.service.users().find_by_username(&req.username).await? else {
        tracing::info!(username = %req.username, "Login for unknown user");
        return Err(AppError::Unauthorized);
    };

    if !state.passwords.verify(&req.password, &user.password_hash)? {
        tracing::info!(username = %user.username, "Login with wrong password");
        return Err(AppError::Unauthorized);
    }

    let auth = issue_token(&state, user.id, &user.username)?;
    Ok(HttpResponse::Ok().cookie(token_cookie(&auth)).json(auth))
}

/// GET /api/auth/me
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let user = state
        .service
        .users()
        .find_by_username(&identity.username)
        .await?
        .ok_or(AppError::Unauthorized)?;

    Ok(HttpResponse::Ok().json(UserResponse {
        id: user.id.to_string(),
        username: user.username,
        created_at: user.created_at.to_rfc3339(),
    }))
}
