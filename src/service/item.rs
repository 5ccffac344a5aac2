use std::sync::Arc;

use chrono::Utc;

use crate::{
	route::item::model::Item,
	store::{self, Repository},
};

/// Inventory operations on top of the item store.
///
/// Timestamps are assigned here, quantity changes are applied atomically by the store.
#[derive(Clone)]
pub struct ItemService {
	store: Arc<dyn Repository<Item>>,
}

impl ItemService {
	pub fn new(store: Arc<dyn Repository<Item>>) -> Self {
		Self { store }
	}

	pub fn list(&self) -> Result<Vec<Item>, store::Error> {
		self.store.list()
	}

	pub fn get(&self, id: u64) -> Result<Item, store::Error> {
		self.store.get(id)
	}

	#[tracing::instrument(level = "debug", skip_all, fields(name = %item.name))]
	pub fn create(&self, mut item: Item) -> Result<Item, store::Error> {
		let now = Utc::now();

		item.created_at = now;
		item.updated_at = now;
		item.id = self.store.create(item.clone())?;

		Ok(item)
	}

	#[tracing::instrument(level = "debug", skip(self))]
	pub fn increase(&self, id: u64, amount: u32) -> Result<Item, store::Error> {
		self.store.modify(id, &mut |item: &mut Item| {
			item.quantity = item
				.quantity
				.checked_add(amount)
				.ok_or(store::Error::Conflict {
					id,
					reason: "quantity would overflow",
				})?;
			item.updated_at = Utc::now();

			Ok(())
		})
	}

	#[tracing::instrument(level = "debug", skip(self))]
	pub fn decrease(&self, id: u64, amount: u32) -> Result<Item, store::Error> {
		self.store.modify(id, &mut |item: &mut Item| {
			item.quantity = item
				.quantity
				.checked_sub(amount)
				.ok_or(store::Error::Conflict {
					id,
					reason: "insufficient quantity",
				})?;
			item.updated_at = Utc::now();

			Ok(())
		})
	}

	#[tracing::instrument(level = "debug", skip(self))]
	pub fn delete(&self, id: u64) -> Result<(), store::Error> {
		self.store.delete(id)
	}
}
