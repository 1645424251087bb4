//! OpenAPI document and its routes.

use actix_web::{HttpResponse, web};
use utoipa::OpenApi;

use chatdev_shared::ErrorResponse;
use chatdev_shared::dto::{
    CreateMemberRequest, CreatePostRequest, LikePostRequest, MemberResponse, PostResponse,
};

use super::{health, members, posts};

pub const OPENAPI_JSON_PATH: &str = "/api/docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ChatDev API",
        description = "Team roster and a chat board whose posts can be liked and unliked by NetID.",
        license(name = "MIT")
    ),
    paths(
        health::health_check,
        members::list_members,
        members::create_member,
        members::delete_all_members,
        posts::list_posts,
        posts::create_post,
        posts::like_post,
        posts::unlike_post,
        posts::delete_post,
        posts::delete_all_posts,
    ),
    components(schemas(
        CreateMemberRequest,
        MemberResponse,
        CreatePostRequest,
        LikePostRequest,
        PostResponse,
        ErrorResponse,
        health::HealthResponse,
    )),
    tags(
        (name = "members", description = "Team roster"),
        (name = "posts", description = "Chat posts and likes"),
        (name = "health", description = "Service health checks"),
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Register the docs routes at the application root.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(OPENAPI_JSON_PATH, web::get().to(openapi_json));

    #[cfg(feature = "swagger-ui")]
    cfg.service(
        utoipa_swagger_ui::SwaggerUi::new("/api/docs/{_:.*}")
            .config(utoipa_swagger_ui::Config::from(OPENAPI_JSON_PATH)),
    );
}
