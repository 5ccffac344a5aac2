use aide::axum::{
	routing::{get_with, put_with},
	ApiRouter,
};

use crate::AppState;

pub mod model;
pub mod route;

pub fn routes() -> ApiRouter<AppState> {
	use route::*;

	ApiRouter::new()
		.api_route(
			"/",
			get_with(list_items, list_items_docs).post_with(create_item, create_item_docs),
		)
		.api_route(
			"/:id",
			get_with(get_item, get_item_docs).delete_with(delete_item, delete_item_docs),
		)
		.api_route(
			"/:id/increase",
			put_with(increase_item, increase_item_docs),
		)
		.api_route(
			"/:id/decrease",
			put_with(decrease_item, decrease_item_docs),
		)
}
