use std::sync::Arc;

use aide::{
	axum::{routing::get, ApiRouter},
	openapi::OpenApi,
};
use axum::{middleware, Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{error, openapi, AppState};

pub mod docs;
pub mod item;
pub mod model;
pub mod post;

/// Builds the full application router, including the `OpenAPI` document.
pub fn router(state: AppState) -> Router {
	let mut api = OpenApi::default();

	ApiRouter::new()
		.nest("/posts", post::routes())
		.nest("/items", item::routes())
		.route("/docs/api.json", get(docs::serve_docs))
		.finish_api_with(&mut api, openapi::docs)
		.layer(Extension(Arc::new(api)))
		.layer(
			ServiceBuilder::new()
				.layer(TraceLayer::new_for_http())
				.layer(middleware::map_response(error::normalize)),
		)
		.with_state(state)
}
