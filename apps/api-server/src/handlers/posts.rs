//! Post handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;
use validator::Validate;

use chatdev_shared::ErrorResponse;
use chatdev_shared::dto::{CreatePostRequest, LikePostRequest, PostResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    responses((status = 200, description = "All posts", body = [PostResponse]))
)]
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<PostResponse> = state
        .posts
        .list()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/posts/create
#[utoipa::path(
    post,
    path = "/api/posts/create",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Created", body = PostResponse),
        (status = 422, description = "Validation Failed", body = ErrorResponse)
    )
)]
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let post = state.posts.insert(req.into()).await?;
    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// POST /api/posts/{post_id}/like
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/like",
    tag = "posts",
    params(("post_id" = Uuid, Path, description = "The ID of the post to like")),
    request_body = LikePostRequest,
    responses(
        (status = 200, description = "Updated", body = PostResponse),
        (status = 400, description = "Invalid postId or netId", body = ErrorResponse),
        (status = 422, description = "Validation Failed", body = ErrorResponse)
    )
)]
pub async fn like_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<LikePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let post = state.posts.like(path.into_inner(), &req.net_id).await?;
    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// POST /api/posts/{post_id}/unlike
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/unlike",
    tag = "posts",
    params(("post_id" = Uuid, Path, description = "The ID of the post to unlike")),
    request_body = LikePostRequest,
    responses(
        (status = 200, description = "Updated", body = PostResponse),
        (status = 400, description = "Invalid postId, or netId has not liked the post", body = ErrorResponse),
        (status = 422, description = "Validation Failed", body = ErrorResponse)
    )
)]
pub async fn unlike_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<LikePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let post = state.posts.unlike(path.into_inner(), &req.net_id).await?;
    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// DELETE /api/posts/{post_id}/delete
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}/delete",
    tag = "posts",
    params(("post_id" = Uuid, Path, description = "The ID of the post to delete")),
    responses(
        (status = 200, description = "The deleted post", body = PostResponse),
        (status = 400, description = "Invalid postId", body = ErrorResponse)
    )
)]
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state.posts.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// DELETE /api/posts/delete
#[utoipa::path(
    delete,
    path = "/api/posts/delete",
    tag = "posts",
    responses((status = 200, description = "How many posts were deleted", body = String))
)]
pub async fn delete_all_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let count = state.posts.delete_all().await?;
    Ok(HttpResponse::Ok().json(format!("Successfully deleted {} posts", count)))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test, web};
    use chatdev_core::domain::NewPost;
    use serde_json::{Value, json};
    use uuid::Uuid;

    use crate::handlers::configure_routes;
    use crate::state::AppState;
    use chatdev_shared::dto::PostResponse;

    async fn seed(state: &AppState, likes: &[&str]) -> Uuid {
        let post = NewPost::new("Hi! Vin was here.").with_likes(likes.iter().copied());
        state.posts.insert(post).await.unwrap().id
    }

    #[actix_web::test]
    async fn create_then_list() {
        let state = AppState::in_memory();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts/create")
            .set_json(json!({"message": "hi"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: PostResponse = test::read_body_json(resp).await;
        assert_eq!(created.message, "hi");
        assert!(created.likes.is_empty());

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let posts: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(posts, vec![created]);
    }

    #[actix_web::test]
    async fn like_and_unlike_over_http() {
        let state = AppState::in_memory();
        let id = seed(&state, &[]).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri(&format!("/api/posts/{id}/like"))
                .set_json(json!({"netId": "abc"}))
                .to_request();
            let post: PostResponse = test::call_and_read_body_json(&app, req).await;
            assert_eq!(post.likes, vec!["abc"]);
        }

        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/{id}/unlike"))
            .set_json(json!({"netId": "abc"}))
            .to_request();
        let post: PostResponse = test::call_and_read_body_json(&app, req).await;
        assert!(post.likes.is_empty());

        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/{id}/unlike"))
            .set_json(json!({"netId": "abc"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({"name": "InvalidArgumentError", "details": "The given netId has not liked this post"})
        );
    }

    #[actix_web::test]
    async fn like_on_unknown_post_is_bad_request() {
        let state = AppState::in_memory();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/{}/like", Uuid::new_v4()))
            .set_json(json!({"netId": "abc"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["details"], "Invalid postId or netId supplied");
    }

    #[actix_web::test]
    async fn whitespace_net_id_is_a_valid_like() {
        let state = AppState::in_memory();
        let id = seed(&state, &[]).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/{id}/like"))
            .set_json(json!({"netId": " "}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let post: PostResponse = test::read_body_json(resp).await;
        assert_eq!(post.likes, vec![" "]);

        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/{id}/unlike"))
            .set_json(json!({"netId": " "}))
            .to_request();
        let post: PostResponse = test::call_and_read_body_json(&app, req).await;
        assert!(post.likes.is_empty());
    }

    #[actix_web::test]
    async fn malformed_requests_are_unprocessable() {
        let state = AppState::in_memory();
        let id = seed(&state, &["vdb23"]).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        // Missing field
        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/{id}/like"))
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["name"], "Validation Failed");

        // Empty netId
        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/{id}/unlike"))
            .set_json(json!({"netId": ""}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["details"]["netId"]["message"].is_string());

        // Unparseable id
        let req = test::TestRequest::delete()
            .uri("/api/posts/not-an-id/delete")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let post = state.posts.list().await.unwrap();
        assert_eq!(post[0].likes, vec!["vdb23"]);
    }

    #[actix_web::test]
    async fn delete_one_and_delete_all() {
        let state = AppState::in_memory();
        let first = seed(&state, &[]).await;
        seed(&state, &[]).await;
        seed(&state, &[]).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/posts/{first}/delete"))
            .to_request();
        let deleted: PostResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(deleted.id, first);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/posts/{first}/delete"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::delete().uri("/api/posts/delete").to_request();
        let message: String = test::call_and_read_body_json(&app, req).await;
        assert_eq!(message, "Successfully deleted 2 posts");
        assert!(state.posts.list().await.unwrap().is_empty());
    }
}
