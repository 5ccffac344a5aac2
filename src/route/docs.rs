use std::sync::Arc;

use aide::{axum::IntoApiResponse, openapi::OpenApi};
use axum::{response::IntoResponse, Extension};

use crate::extract::Json;

/// Serves the generated `OpenAPI` document.
pub async fn serve_docs(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
	Json(api.as_ref()).into_response()
}
