//! Startup seeding of the post store from the bundled data set.

use serde::Deserialize;
use validator::Validate;

use crate::{route::post::model::Post, service::PostService, store};

/// The bundled posts, loaded once at startup.
const POSTS: &str = include_str!("../data/posts.json");

#[derive(Deserialize)]
struct Document {
	posts: Vec<Post>,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("malformed seed document: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("seed post {index} is invalid: {source}")]
	Invalid {
		index: usize,
		source: validator::ValidationErrors,
	},
	#[error("failed to store seed post {index}: {source}")]
	Store { index: usize, source: store::Error },
}

/// Loads the bundled posts, returning how many were created.
pub fn load(posts: &PostService) -> Result<usize, Error> {
	load_from(posts, POSTS)
}

/// Creates every post in `document` in order.
///
/// The whole document is parsed and validated before the first post is created,
/// so a malformed data set leaves the store untouched. Ids in the document are ignored.
#[tracing::instrument(skip_all)]
pub fn load_from(posts: &PostService, document: &str) -> Result<usize, Error> {
	let document = serde_json::from_str::<Document>(document)?;

	for (index, post) in document.posts.iter().enumerate() {
		post.validate()
			.map_err(|source| Error::Invalid { index, source })?;
	}

	let count = document.posts.len();

	for (index, post) in document.posts.into_iter().enumerate() {
		posts
			.create(post)
			.map_err(|source| Error::Store { index, source })?;
	}

	tracing::info!(count, "seeded posts");

	Ok(count)
}

#[cfg(test)]
mod test {
	use std::sync::{
		atomic::{AtomicUsize, Ordering},
		Arc,
	};

	use crate::store::{MemoryStore, Repository};

	use super::*;

	fn service() -> PostService {
		PostService::new(Arc::new(MemoryStore::<Post>::new()))
	}

	/// A store whose `limit`-th create fails as if the ids had run out.
	struct Limited {
		inner: MemoryStore<Post>,
		creates: AtomicUsize,
		limit: usize,
	}

	impl Repository<Post> for Limited {
		fn list(&self) -> Result<Vec<Post>, store::Error> {
			self.inner.list()
		}

		fn get(&self, id: u64) -> Result<Post, store::Error> {
			self.inner.get(id)
		}

		fn create(&self, post: Post) -> Result<u64, store::Error> {
			if self.creates.fetch_add(1, Ordering::SeqCst) + 1 >= self.limit {
				return Err(store::Error::Exhausted);
			}

			self.inner.create(post)
		}

		fn update(&self, post: Post) -> Result<(), store::Error> {
			self.inner.update(post)
		}

		fn delete(&self, id: u64) -> Result<(), store::Error> {
			self.inner.delete(id)
		}

		fn modify(
			&self,
			id: u64,
			change: &mut dyn FnMut(&mut Post) -> Result<(), store::Error>,
		) -> Result<Post, store::Error> {
			self.inner.modify(id, change)
		}
	}

	#[test]
	fn test_bundled_posts_load() {
		let posts = service();

		assert_eq!(load(&posts).unwrap(), 50);

		let ids = posts
			.list()
			.unwrap()
			.into_iter()
			.map(|post| post.id)
			.collect::<Vec<_>>();

		assert_eq!(ids, (1..=50).collect::<Vec<_>>());
		assert_eq!(posts.get(22).unwrap().title, "Title 22");
		assert_eq!(posts.get(22).unwrap().author, "Author 22");
	}

	#[test]
	fn test_document_ids_are_ignored() {
		let posts = service();
		let document = r#"{"posts": [
			{"id": 9, "title": "first", "author": "a", "content": ""},
			{"title": "second", "author": "b"}
		]}"#;

		assert_eq!(load_from(&posts, document).unwrap(), 2);
		assert_eq!(posts.get(1).unwrap().title, "first");
		assert_eq!(posts.get(2).unwrap().title, "second");
		assert!(posts.get(9).is_err());
	}

	#[test]
	fn test_invalid_post_leaves_store_empty() {
		let posts = service();
		let document = r#"{"posts": [
			{"title": "fine", "author": "a", "content": ""},
			{"title": "", "author": "b", "content": ""}
		]}"#;

		let error = load_from(&posts, document).unwrap_err();

		assert!(matches!(error, Error::Invalid { index: 1, .. }));
		assert!(posts.list().unwrap().is_empty());
	}

	#[test]
	fn test_store_failure_keeps_earlier_posts() {
		let posts = PostService::new(Arc::new(Limited {
			inner: MemoryStore::new(),
			creates: AtomicUsize::new(0),
			limit: 3,
		}));

		let error = load(&posts).unwrap_err();

		assert!(matches!(
			error,
			Error::Store {
				index: 2,
				source: store::Error::Exhausted,
			}
		));

		let titles = posts
			.list()
			.unwrap()
			.into_iter()
			.map(|post| post.title)
			.collect::<Vec<_>>();

		assert_eq!(titles, ["Title 1", "Title 2"]);
	}

	#[test]
	fn test_malformed_document() {
		let posts = service();

		assert!(matches!(
			load_from(&posts, r#"{"posts": [{"title": 1}]}"#),
			Err(Error::Parse(..))
		));
		assert!(matches!(load_from(&posts, "not json"), Err(Error::Parse(..))));
		assert!(posts.list().unwrap().is_empty());
	}
}
