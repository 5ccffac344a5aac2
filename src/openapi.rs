use aide::{openapi::Tag, transform::TransformOpenApi};

use crate::{
	error::{ErrorBody, ErrorCode},
	extract::Json,
};

pub mod tag {
	pub const POST: &str = "Post";
	pub const ITEM: &str = "Item";
}

pub fn docs(api: TransformOpenApi) -> TransformOpenApi {
	api.title("Blog API")
		.summary("Blog post and inventory management")
		.description(include_str!("../README.md"))
		.tag(Tag {
			name: tag::POST.into(),
			description: Some("Blog post management".into()),
			..Default::default()
		})
		.tag(Tag {
			name: tag::ITEM.into(),
			description: Some("Inventory item management".into()),
			..Default::default()
		})
		.default_response_with::<Json<ErrorBody>, _>(|res| {
			res.example(ErrorBody::new(
				ErrorCode::NotFound,
				ErrorCode::NotFound.description(),
			))
		})
}
