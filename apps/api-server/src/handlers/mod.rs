//! HTTP handlers and route configuration.

mod answers;
mod auth;
mod comments;
mod health;
mod pages;
mod questions;
mod tags;
mod users;


use actix_web::web;

use crate::middleware::error::AppError;

/// JSON body limits; malformed bodies become problem responses.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Form bodies posted by server-rendered pages.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            .route("/users/{username}", web::get().to(users::profile))
            .service(
                web::scope("/questions")
                    .route("", web::get().to(questions::list))
                    .route("", web::post().to(questions::ask))
                    .route("/{id}", web::get().to(questions::get))
                    .route("/{id}/answers", web::post().to(answers::create))
                    .route("/{id}/comments", web::post().to(comments::on_question)),
            )
            .route("/answers/{id}/comments", web::post().to(comments::on_answer))
            .route("/tags", web::get().to(tags::list)),
    )
    .route("/question/{id}", web::get().to(pages::question_page))
    .route("/question/{id}/comments", web::post().to(pages::comment_on_question))
    .route(
        "/question/{question_id}/answers/{answer_id}/comments",
        web::post().to(pages::comment_on_answer),
    )
    .route("/user/{username}", web::get().to(pages::user_profile))
    .route("/currentUser", web::get().to(pages::current_user));
}
