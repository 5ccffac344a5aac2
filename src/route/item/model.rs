pub use crate::route::model::IdInput;

use chrono::{DateTime, Utc};
use macros::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::store::Record;

/// A stock-keeping item in the inventory.
#[model(create_only)]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema, Validate)]
pub struct Item {
	/// The unique identifier of the item.
	#[serde(skip_deserializing)]
	pub id: u64,
	/// The display name of the item.
	#[serde(default)]
	#[validate(length(min = 1, max = 255))]
	pub name: String,
	/// The number of units in stock.
	#[serde(default)]
	pub quantity: u32,
	/// Where the item is stored.
	#[serde(default)]
	#[validate(length(max = 255))]
	pub location: String,
	/// When the item was created.
	#[serde(skip_deserializing)]
	pub created_at: DateTime<Utc>,
	/// When the item was last changed.
	#[serde(skip_deserializing)]
	pub updated_at: DateTime<Utc>,
}

impl Record for Item {
	fn id(&self) -> u64 {
		self.id
	}

	fn set_id(&mut self, id: u64) {
		self.id = id;
	}
}

/// Every stored item.
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ItemList {
	pub items: Vec<Item>,
}

/// A change to the stock of an item.
#[derive(Debug, Deserialize, Validate, JsonSchema)]
pub struct QuantityInput {
	/// The number of units to add or remove.
	#[validate(range(min = 1))]
	pub amount: u32,
}
