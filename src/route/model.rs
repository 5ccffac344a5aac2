use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A record identifier taken from the path.
///
/// Anything other than a non-negative integer is rejected before reaching a handler.
#[derive(Deserialize, Validate, JsonSchema)]
pub struct IdInput {
	pub id: u64,
}

/// The identifier of a created or updated record.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreatedId {
	pub id: u64,
}
