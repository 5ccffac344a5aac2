use std::sync::Arc;

use crate::{
	route::post::model::Post,
	store::{self, Repository},
};

/// Forwards post operations to the underlying store.
#[derive(Clone)]
pub struct PostService {
	store: Arc<dyn Repository<Post>>,
}

impl PostService {
	pub fn new(store: Arc<dyn Repository<Post>>) -> Self {
		Self { store }
	}

	pub fn list(&self) -> Result<Vec<Post>, store::Error> {
		self.store.list()
	}

	pub fn get(&self, id: u64) -> Result<Post, store::Error> {
		self.store.get(id)
	}

	#[tracing::instrument(level = "debug", skip_all, fields(title = %post.title))]
	pub fn create(&self, post: Post) -> Result<u64, store::Error> {
		self.store.create(post)
	}

	#[tracing::instrument(level = "debug", skip_all, fields(id = post.id))]
	pub fn update(&self, post: Post) -> Result<(), store::Error> {
		self.store.update(post)
	}

	#[tracing::instrument(level = "debug", skip(self))]
	pub fn delete(&self, id: u64) -> Result<(), store::Error> {
		self.store.delete(id)
	}
}
