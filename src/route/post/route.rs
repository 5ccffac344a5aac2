use axum::extract::State;
use macros::route;

use crate::{
	error::{AppError, ErrorBody},
	extract::{Json, Path},
	openapi::tag,
	service::PostService,
};

use super::model;

/// List posts
/// Returns every stored post.
#[route(tag = tag::POST)]
pub async fn list_posts(
	State(posts): State<PostService>,
) -> Result<Json<model::PostList>, AppError> {
	let posts = posts.list()?;

	Ok(Json(model::PostList { posts }))
}

/// Get single post
/// Returns a single post by its unique id.
#[route(
	tag = tag::POST,
	response(status = 404, description = "The post does not exist.", shape = "Json<ErrorBody>")
)]
pub async fn get_post(
	State(posts): State<PostService>,
	Path(path): Path<model::IdInput>,
) -> Result<Json<model::Post>, AppError> {
	Ok(Json(posts.get(path.id)?))
}

/// Create post
/// Creates a new post, returning its assigned id.
#[route(
	tag = tag::POST,
	response(status = 400, description = "The post failed validation.", shape = "Json<ErrorBody>")
)]
pub async fn create_post(
	State(posts): State<PostService>,
	Json(input): Json<model::CreatePostInput>,
) -> Result<Json<model::CreatedId>, AppError> {
	let id = posts.create(input.into_model())?;

	Ok(Json(model::CreatedId { id }))
}

/// Update post
/// Replaces the title, author and content of an existing post.
#[route(
	tag = tag::POST,
	response(status = 400, description = "The post failed validation.", shape = "Json<ErrorBody>"),
	response(status = 404, description = "The post does not exist.", shape = "Json<ErrorBody>")
)]
pub async fn update_post(
	State(posts): State<PostService>,
	Json(input): Json<model::UpdatePostInput>,
) -> Result<Json<model::CreatedId>, AppError> {
	let post = input.into_model();
	let id = post.id;

	posts.update(post)?;

	Ok(Json(model::CreatedId { id }))
}

/// Delete post
/// Deletes an existing post by its unique id. The id is never reused.
#[route(
	tag = tag::POST,
	response(status = 404, description = "The post does not exist.", shape = "Json<ErrorBody>")
)]
pub async fn delete_post(
	State(posts): State<PostService>,
	Path(path): Path<model::IdInput>,
) -> Result<(), AppError> {
	posts.delete(path.id)?;

	Ok(())
}
