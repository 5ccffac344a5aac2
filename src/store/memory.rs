use std::{
	collections::HashMap,
	sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use super::{Error, Record, Repository};

struct Inner<T> {
	records: HashMap<u64, T>,
	last_id: u64,
}

/// An in-memory [`Repository`] guarded by a single reader/writer lock.
///
/// Ids start at 1 and are never reused, even after a delete.
pub struct MemoryStore<T> {
	inner: RwLock<Inner<T>>,
}

impl<T> Default for MemoryStore<T> {
	fn default() -> Self {
		Self {
			inner: RwLock::new(Inner {
				records: HashMap::new(),
				last_id: 0,
			}),
		}
	}
}

impl<T> MemoryStore<T> {
	pub fn new() -> Self {
		Self::default()
	}

	fn read(&self) -> Result<RwLockReadGuard<'_, Inner<T>>, Error> {
		self.inner.read().map_err(|_| Error::Poisoned)
	}

	fn write(&self) -> Result<RwLockWriteGuard<'_, Inner<T>>, Error> {
		self.inner.write().map_err(|_| Error::Poisoned)
	}
}

impl<T: Record> Repository<T> for MemoryStore<T> {
	fn list(&self) -> Result<Vec<T>, Error> {
		let inner = self.read()?;
		let mut records = inner.records.values().cloned().collect::<Vec<_>>();

		records.sort_unstable_by_key(Record::id);
		Ok(records)
	}

	fn get(&self, id: u64) -> Result<T, Error> {
		self.read()?
			.records
			.get(&id)
			.cloned()
			.ok_or(Error::NotFound(id))
	}

	fn create(&self, mut record: T) -> Result<u64, Error> {
		let mut inner = self.write()?;
		let id = inner.last_id.checked_add(1).ok_or(Error::Exhausted)?;

		inner.last_id = id;
		record.set_id(id);
		inner.records.insert(id, record);

		Ok(id)
	}

	fn update(&self, record: T) -> Result<(), Error> {
		let mut inner = self.write()?;
		let Some(stored) = inner.records.get_mut(&record.id()) else {
			return Err(Error::NotFound(record.id()));
		};

		*stored = record;
		Ok(())
	}

	fn delete(&self, id: u64) -> Result<(), Error> {
		self.write()?
			.records
			.remove(&id)
			.map(|_| ())
			.ok_or(Error::NotFound(id))
	}

	fn modify(
		&self,
		id: u64,
		change: &mut dyn FnMut(&mut T) -> Result<(), Error>,
	) -> Result<T, Error> {
		let mut inner = self.write()?;
		let Some(stored) = inner.records.get_mut(&id) else {
			return Err(Error::NotFound(id));
		};

		let mut record = stored.clone();
		change(&mut record)?;
		record.set_id(id);

		*stored = record.clone();
		Ok(record)
	}
}

#[cfg(test)]
mod test {
	use std::{collections::HashSet, sync::Arc};

	use super::*;

	#[derive(Debug, Clone, Default, PartialEq)]
	struct Note {
		id: u64,
		text: String,
	}

	impl Record for Note {
		fn id(&self) -> u64 {
			self.id
		}

		fn set_id(&mut self, id: u64) {
			self.id = id;
		}
	}

	fn note(text: &str) -> Note {
		Note {
			id: 0,
			text: text.into(),
		}
	}

	#[test]
	fn test_create_assigns_sequential_ids() {
		let store = MemoryStore::<Note>::new();

		assert_eq!(store.create(note("a")).unwrap(), 1);
		assert_eq!(store.create(note("b")).unwrap(), 2);
		assert_eq!(store.create(note("c")).unwrap(), 3);
	}

	#[test]
	fn test_create_ignores_caller_id() {
		let store = MemoryStore::<Note>::new();
		let id = store
			.create(Note {
				id: 40,
				text: "a".into(),
			})
			.unwrap();

		assert_eq!(id, 1);
		assert_eq!(store.get(1).unwrap().text, "a");
		assert_eq!(store.get(40), Err(Error::NotFound(40)));
	}

	#[test]
	fn test_get_returns_created_record() {
		let store = MemoryStore::<Note>::new();
		let id = store.create(note("hello")).unwrap();

		assert_eq!(
			store.get(id).unwrap(),
			Note {
				id,
				text: "hello".into()
			}
		);
	}

	#[test]
	fn test_missing_ids_are_not_found() {
		let store = MemoryStore::<Note>::new();
		store.create(note("a")).unwrap();

		assert_eq!(store.get(0), Err(Error::NotFound(0)));
		assert_eq!(store.get(222), Err(Error::NotFound(222)));
		assert_eq!(store.delete(222), Err(Error::NotFound(222)));
		assert_eq!(
			store.update(Note {
				id: 222,
				text: "x".into()
			}),
			Err(Error::NotFound(222))
		);
		assert_eq!(store.update(note("unassigned")), Err(Error::NotFound(0)));
	}

	#[test]
	fn test_update_replaces_whole_record() {
		let store = MemoryStore::<Note>::new();
		let id = store.create(note("before")).unwrap();

		store
			.update(Note {
				id,
				text: String::new(),
			})
			.unwrap();

		assert_eq!(store.get(id).unwrap().text, "");
	}

	#[test]
	fn test_deleted_ids_are_never_reused() {
		let store = MemoryStore::<Note>::new();
		let first = store.create(note("a")).unwrap();
		let second = store.create(note("b")).unwrap();

		store.delete(second).unwrap();
		assert_eq!(store.get(second), Err(Error::NotFound(second)));

		let third = store.create(note("c")).unwrap();

		assert_eq!(first, 1);
		assert_eq!(third, 3);
	}

	#[test]
	fn test_reads_are_copies() {
		let store = MemoryStore::<Note>::new();
		let id = store.create(note("original")).unwrap();

		let mut copy = store.get(id).unwrap();
		copy.text.push_str(" changed");

		let mut listed = store.list().unwrap();
		listed[0].text.clear();

		assert_eq!(store.get(id).unwrap().text, "original");
	}

	#[test]
	fn test_list_is_ordered_by_id() {
		let store = MemoryStore::<Note>::new();

		for text in ["a", "b", "c", "d"] {
			store.create(note(text)).unwrap();
		}

		store.delete(2).unwrap();

		let ids = store
			.list()
			.unwrap()
			.iter()
			.map(Record::id)
			.collect::<Vec<_>>();

		assert_eq!(ids, vec![1, 3, 4]);
	}

	#[test]
	fn test_modify_keeps_record_on_error() {
		let store = MemoryStore::<Note>::new();
		let id = store.create(note("keep")).unwrap();

		let result = store.modify(id, &mut |record: &mut Note| {
			record.text.clear();
			Err(Error::Conflict {
				id: record.id,
				reason: "nope",
			})
		});

		assert_eq!(
			result,
			Err(Error::Conflict {
				id,
				reason: "nope"
			})
		);
		assert_eq!(store.get(id).unwrap().text, "keep");
	}

	#[test]
	fn test_modify_preserves_id() {
		let store = MemoryStore::<Note>::new();
		let id = store.create(note("a")).unwrap();

		let modified = store
			.modify(id, &mut |record: &mut Note| {
				record.id = 99;
				record.text = "b".into();
				Ok(())
			})
			.unwrap();

		assert_eq!(modified.id, id);
		assert_eq!(store.get(id).unwrap().text, "b");
		assert_eq!(store.get(99), Err(Error::NotFound(99)));
	}

	#[test]
	fn test_concurrent_creates_get_unique_ids() {
		let store = Arc::new(MemoryStore::<Note>::new());

		let handles = (0..8)
			.map(|_| {
				let store = Arc::clone(&store);

				std::thread::spawn(move || {
					(0..100)
						.map(|_| store.create(note("x")).unwrap())
						.collect::<Vec<_>>()
				})
			})
			.collect::<Vec<_>>();

		let ids = handles
			.into_iter()
			.flat_map(|handle| handle.join().unwrap())
			.collect::<HashSet<_>>();

		assert_eq!(ids.len(), 800);
		assert_eq!(ids, (1..=800).collect::<HashSet<_>>());
	}
}
