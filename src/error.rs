use aide::OperationOutput;
use axum::{
	body::Body,
	extract::rejection::{JsonRejection, PathRejection},
	http::{header, Response, StatusCode},
	response::IntoResponse,
	Json,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::store;

/// Error type for the HTTP boundary.
///
/// This is the only place where an error kind becomes a status code.
/// The Display output is only logged, it is never sent to the client
/// for internal errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
	#[error("validation error: {0}")]
	Validation(#[from] validator::ValidationErrors),
	#[error("json error: {0}")]
	Json(#[from] JsonRejection),
	#[error("path error: {0}")]
	Path(#[from] PathRejection),
	#[error("store error: {0}")]
	Store(#[from] store::Error),
}

/// The machine-readable kind of an error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ErrorCode {
	BadRequest,
	NotFound,
	Unauthorized,
	#[serde(rename = "Method Not Allowed")]
	MethodNotAllowed,
	Conflict,
	InternalServerError,
}

impl ErrorCode {
	/// Picks the code for a bare status produced outside of the handlers.
	pub fn from_status(status: StatusCode) -> Self {
		match status {
			StatusCode::NOT_FOUND => Self::NotFound,
			StatusCode::UNAUTHORIZED => Self::Unauthorized,
			StatusCode::METHOD_NOT_ALLOWED => Self::MethodNotAllowed,
			StatusCode::CONFLICT => Self::Conflict,
			status if status.is_client_error() => Self::BadRequest,
			_ => Self::InternalServerError,
		}
	}

	pub fn status(self) -> StatusCode {
		match self {
			Self::BadRequest => StatusCode::BAD_REQUEST,
			Self::NotFound => StatusCode::NOT_FOUND,
			Self::Unauthorized => StatusCode::UNAUTHORIZED,
			Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
			Self::Conflict => StatusCode::CONFLICT,
			Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// A generic description, used when there is nothing more specific to say.
	pub fn description(self) -> &'static str {
		match self {
			Self::BadRequest => "The request is malformed.",
			Self::NotFound => "The requested resource does not exist.",
			Self::Unauthorized => "Invalid authentication token.",
			Self::MethodNotAllowed => "The method is not supported for this resource.",
			Self::Conflict => "The request conflicts with the current state of the resource.",
			Self::InternalServerError => "An internal error occurred.",
		}
	}
}

/// The body of every error response.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ErrorBody {
	pub code: ErrorCode,
	pub description: String,
}

impl ErrorBody {
	pub fn new(code: ErrorCode, description: impl Into<String>) -> Self {
		Self {
			code,
			description: description.into(),
		}
	}
}

impl AppError {
	pub fn code(&self) -> ErrorCode {
		match self {
			Self::Validation(..) | Self::Json(..) | Self::Path(..) => ErrorCode::BadRequest,
			Self::Store(store::Error::NotFound(..)) => ErrorCode::NotFound,
			Self::Store(store::Error::Conflict { .. }) => ErrorCode::Conflict,
			Self::Store(store::Error::Exhausted | store::Error::Poisoned) => {
				ErrorCode::InternalServerError
			}
		}
	}

	/// The description sent to the client.
	fn description(&self) -> String {
		match self {
			Self::Validation(errors) => validation_description(errors),
			Self::Json(rejection) => rejection.body_text(),
			Self::Path(rejection) => rejection.body_text(),
			Self::Store(error @ (store::Error::NotFound(..) | store::Error::Conflict { .. })) => {
				error.to_string()
			}
			Self::Store(..) => ErrorCode::InternalServerError.description().into(),
		}
	}
}

/// Lists every offending field with its rule, e.g. `author(length), title(length)`.
fn validation_description(errors: &validator::ValidationErrors) -> String {
	let mut fields = errors
		.field_errors()
		.into_iter()
		.flat_map(|(field, errors)| {
			errors
				.iter()
				.map(move |error| format!("{}({})", field, error.code))
		})
		.collect::<Vec<_>>();

	fields.sort_unstable();
	format!("invalid fields: {}", fields.join(", "))
}

impl IntoResponse for AppError {
	fn into_response(self) -> Response<Body> {
		let code = self.code();

		if code == ErrorCode::InternalServerError {
			tracing::error!(error = %self, "request failed");
		} else {
			tracing::debug!(error = %self, "request rejected");
		}

		(code.status(), Json(ErrorBody::new(code, self.description()))).into_response()
	}
}

impl OperationOutput for AppError {
	type Inner = ErrorBody;
}

/// Rewrites bare error responses (unknown routes, unsupported methods) into an [`ErrorBody`].
///
/// Responses that already carry a body are left alone.
pub async fn normalize(response: Response<Body>) -> Response<Body> {
	let status = response.status();

	if !(status.is_client_error() || status.is_server_error())
		|| response.headers().contains_key(header::CONTENT_TYPE)
	{
		return response;
	}

	let code = ErrorCode::from_status(status);

	(status, Json(ErrorBody::new(code, code.description()))).into_response()
}

#[cfg(test)]
mod test {
	use validator::Validate;

	use super::*;

	#[derive(Validate)]
	struct Input {
		#[validate(length(min = 1))]
		title: String,
		#[validate(length(max = 2))]
		author: String,
	}

	#[test]
	fn test_codes_serialize_to_wire_names() {
		assert_eq!(
			serde_json::to_value(ErrorCode::MethodNotAllowed).unwrap(),
			"Method Not Allowed"
		);
		assert_eq!(
			serde_json::to_value(ErrorCode::InternalServerError).unwrap(),
			"InternalServerError"
		);
	}

	#[test]
	fn test_code_status_round_trip() {
		for code in [
			ErrorCode::BadRequest,
			ErrorCode::NotFound,
			ErrorCode::Unauthorized,
			ErrorCode::MethodNotAllowed,
			ErrorCode::Conflict,
			ErrorCode::InternalServerError,
		] {
			assert_eq!(ErrorCode::from_status(code.status()), code);
		}

		assert_eq!(
			ErrorCode::from_status(StatusCode::PAYLOAD_TOO_LARGE),
			ErrorCode::BadRequest
		);
	}

	#[test]
	fn test_store_errors_map_to_codes() {
		assert_eq!(
			AppError::from(store::Error::NotFound(1)).code(),
			ErrorCode::NotFound
		);
		assert_eq!(
			AppError::from(store::Error::Conflict { id: 1, reason: "" }).code(),
			ErrorCode::Conflict
		);
		assert_eq!(
			AppError::from(store::Error::Poisoned).code(),
			ErrorCode::InternalServerError
		);
	}

	#[test]
	fn test_internal_errors_hide_details() {
		let error = AppError::from(store::Error::Exhausted);

		assert_eq!(
			error.description(),
			ErrorCode::InternalServerError.description()
		);
	}

	#[test]
	fn test_validation_description_lists_fields() {
		let errors = Input {
			title: String::new(),
			author: "abc".into(),
		}
		.validate()
		.unwrap_err();

		assert_eq!(
			AppError::from(errors).description(),
			"invalid fields: author(length), title(length)"
		);
	}
}
