//! The capability surface handed to the routes.
//!
//! Services own an `Arc<dyn Repository<_>>` and surface store errors unchanged.

mod item;
mod post;

pub use item::ItemService;
pub use post::PostService;
