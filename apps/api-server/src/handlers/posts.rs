//! Post CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::{Author, Post, PostDraft};
use quill_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        author: post.author.display_name(),
        title: post.title,
        content: post.content,
    }
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let draft = PostDraft {
        author: Author::new(req.author.first_name, req.author.last_name),
        title: req.title,
        content: req.content,
    };
    let post = state.posts.create(draft).await?;

    tracing::debug!(post_id = %post.id, "Created post");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /posts/{id} - full replacement; the identifier never changes.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    if req.id != id {
        return Err(AppError::BadRequest(format!(
            "Path id {} and body id {} must match",
            id, req.id
        )));
    }

    let post = Post {
        id,
        author: Author::new(req.author.first_name, req.author.last_name),
        title: req.title,
        content: req.content,
    };
    state.posts.replace(post).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.posts.delete(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
