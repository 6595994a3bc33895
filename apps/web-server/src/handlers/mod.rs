//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::{HttpResponse, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::NotFound(err.to_string()).into()),
    )
    .route("/", web::get().to(posts::index))
    .service(
        web::resource("/create")
            .route(web::get().to(posts::create_form))
            .route(web::post().to(posts::create)),
    )
    .service(
        web::resource("/edit/{id}")
            .route(web::get().to(posts::edit_form))
            .route(web::post().to(posts::edit)),
    )
    .route("/delete/{id}", web::post().to(posts::delete))
    .service(web::scope("/api").route("/health", web::get().to(health::health_check)));
}

/// Fallback for unmatched routes.
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("no matching route".to_string()))
}
