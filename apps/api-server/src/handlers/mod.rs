//! HTTP handlers and route configuration.

mod docs;
mod health;
mod members;
mod posts;

use actix_web::web;

use crate::middleware::error::{json_error_handler, path_error_handler};

/// Configure all application routes.
///
/// Docs come first: once the `/api` scope matches a prefix, later
/// app-level routes are never consulted.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(docs::configure)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/members")
                        .route("", web::get().to(members::list_members))
                        .route("", web::post().to(members::create_member))
                        .route("", web::delete().to(members::delete_all_members)),
                )
                .service(
                    web::scope("/posts")
                        .route("", web::get().to(posts::list_posts))
                        .route("/create", web::post().to(posts::create_post))
                        .route("/delete", web::delete().to(posts::delete_all_posts))
                        .route("/{post_id}/like", web::post().to(posts::like_post))
                        .route("/{post_id}/unlike", web::post().to(posts::unlike_post))
                        .route("/{post_id}/delete", web::delete().to(posts::delete_post)),
                ),
        );
}
