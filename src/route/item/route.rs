use axum::extract::State;
use macros::route;

use crate::{
	error::{AppError, ErrorBody},
	extract::{Json, Path},
	openapi::tag,
	service::ItemService,
};

use super::model;

/// List items
/// Returns every item in the inventory.
#[route(tag = tag::ITEM)]
pub async fn list_items(
	State(items): State<ItemService>,
) -> Result<Json<model::ItemList>, AppError> {
	let items = items.list()?;

	Ok(Json(model::ItemList { items }))
}

/// Get single item
#[route(
	tag = tag::ITEM,
	response(status = 404, description = "The item does not exist.", shape = "Json<ErrorBody>")
)]
pub async fn get_item(
	State(items): State<ItemService>,
	Path(path): Path<model::IdInput>,
) -> Result<Json<model::Item>, AppError> {
	Ok(Json(items.get(path.id)?))
}

/// Create item
/// Adds a new item to the inventory and returns it.
#[route(tag = tag::ITEM)]
pub async fn create_item(
	State(items): State<ItemService>,
	Json(input): Json<model::CreateItemInput>,
) -> Result<Json<model::Item>, AppError> {
	Ok(Json(items.create(input.into_model())?))
}

/// Increase stock
/// Adds units to the stock of an item.
#[route(
	tag = tag::ITEM,
	response(status = 404, description = "The item does not exist.", shape = "Json<ErrorBody>"),
	response(status = 409, description = "The quantity would overflow.", shape = "Json<ErrorBody>")
)]
pub async fn increase_item(
	State(items): State<ItemService>,
	Path(path): Path<model::IdInput>,
	Json(input): Json<model::QuantityInput>,
) -> Result<Json<model::Item>, AppError> {
	Ok(Json(items.increase(path.id, input.amount)?))
}

/// Decrease stock
/// Removes units from the stock of an item. The stock never goes below zero.
#[route(
	tag = tag::ITEM,
	response(status = 404, description = "The item does not exist.", shape = "Json<ErrorBody>"),
	response(status = 409, description = "Not enough units in stock.", shape = "Json<ErrorBody>")
)]
pub async fn decrease_item(
	State(items): State<ItemService>,
	Path(path): Path<model::IdInput>,
	Json(input): Json<model::QuantityInput>,
) -> Result<Json<model::Item>, AppError> {
	Ok(Json(items.decrease(path.id, input.amount)?))
}

/// Delete item
#[route(
	tag = tag::ITEM,
	response(status = 404, description = "The item does not exist.", shape = "Json<ErrorBody>")
)]
pub async fn delete_item(
	State(items): State<ItemService>,
	Path(path): Path<model::IdInput>,
) -> Result<(), AppError> {
	items.delete(path.id)?;

	Ok(())
}
