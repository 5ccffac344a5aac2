//! Record storage.
//!
//! Services only ever see a [`Repository`], so the in-memory implementation can be swapped
//! for a persistent one without touching them or the routes.

mod memory;

pub use memory::MemoryStore;

/// An error returned by a [`Repository`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("record {0} not found")]
	NotFound(u64),
	#[error("record {id} rejected the change: {reason}")]
	Conflict { id: u64, reason: &'static str },
	#[error("identifier space exhausted")]
	Exhausted,
	#[error("store lock poisoned")]
	Poisoned,
}

/// A record with a store-assigned identifier.
///
/// An id of `0` means the record has not been stored yet.
pub trait Record: Clone + Send + Sync + 'static {
	fn id(&self) -> u64;
	fn set_id(&mut self, id: u64);
}

/// Storage for a single kind of record.
///
/// Every read returns an owned copy, so callers can never mutate stored state directly.
pub trait Repository<T: Record>: Send + Sync {
	/// Returns a snapshot of all records.
	fn list(&self) -> Result<Vec<T>, Error>;

	/// Returns the record with the given id.
	fn get(&self, id: u64) -> Result<T, Error>;

	/// Stores a new record under the next free id, ignoring any id it already carries.
	fn create(&self, record: T) -> Result<u64, Error>;

	/// Replaces the record with the same id.
	fn update(&self, record: T) -> Result<(), Error>;

	/// Removes the record with the given id.
	fn delete(&self, id: u64) -> Result<(), Error>;

	/// Atomically applies `change` to the record with the given id and returns the result.
	///
	/// The change works on a copy, the stored record is only replaced if it returns `Ok`.
	/// The record keeps its id no matter what the change does.
	fn modify(
		&self,
		id: u64,
		change: &mut dyn FnMut(&mut T) -> Result<(), Error>,
	) -> Result<T, Error>;
}
