pub use crate::route::model::{CreatedId, IdInput};

use macros::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::store::Record;

/// A single blog post.
#[model]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema, Validate)]
pub struct Post {
	/// The unique identifier of the post.
	#[serde(skip_deserializing)]
	pub id: u64,
	/// The title of the post.
	#[serde(default)]
	#[validate(length(min = 1, max = 255))]
	pub title: String,
	/// The name of the author.
	#[serde(default)]
	#[validate(length(min = 1, max = 255))]
	pub author: String,
	/// The body of the post.
	#[serde(default)]
	pub content: String,
}

impl Record for Post {
	fn id(&self) -> u64 {
		self.id
	}

	fn set_id(&mut self, id: u64) {
		self.id = id;
	}
}

/// Every stored post.
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct PostList {
	pub posts: Vec<Post>,
}
