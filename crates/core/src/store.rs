//! Append-only, in-memory list of searchable entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Values seeded into [`EntryStore::default`].
pub const DEFAULT_VALUES: [&str; 7] = [
	"Street", "Men", "Survive", "Office", "Notes", "Notion", "Fixer",
];

/// Identifier allocated by an [`EntryStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A stored `{id, value}` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
	pub id: EntryId,
	pub value: String,
}

impl Entry {
	#[must_use]
	pub fn new(id: u64, value: impl Into<String>) -> Self {
		Self {
			id: EntryId(id),
			value: value.into(),
		}
	}

	/// Whether the entry matches `query` as a case-sensitive substring.
	#[must_use]
	pub fn contains(&self, query: &str) -> bool {
		self.value.contains(query)
	}
}

/// Ordered entry list with a monotonic identifier counter.
///
/// Entries are never removed or mutated; [`EntryStore::append`] is the only
/// way the list grows after construction.
#[derive(Debug, Clone)]
pub struct EntryStore {
	entries: Vec<Entry>,
	next_id: u64,
}

impl Default for EntryStore {
	fn default() -> Self {
		Self::with_values(DEFAULT_VALUES)
	}
}

impl EntryStore {
	/// An empty store whose first allocated id is `1`.
	#[must_use]
	pub fn new() -> Self {
		Self {
			entries: Vec::new(),
			next_id: 1,
		}
	}

	/// Seed a store from plain values, assigning ids `1, 2, 3, …`.
	pub fn with_values<I, S>(values: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut store = Self::new();
		for value in values {
			store.append(value);
		}
		store
	}

	/// Seed a store from explicit records.
	///
	/// The id counter continues past the largest seeded id so appended entries
	/// never collide with seeded ones.
	#[must_use]
	pub fn from_entries(entries: Vec<Entry>) -> Self {
		let next_id = entries
			.iter()
			.map(|entry| entry.id.0)
			.max()
			.map_or(1, |max| max.saturating_add(1));
		Self { entries, next_id }
	}

	/// Return every entry whose value contains `query`, in store order.
	///
	/// An empty query matches nothing.
	#[must_use]
	pub fn filter(&self, query: &str) -> Vec<Entry> {
		if query.is_empty() {
			return Vec::new();
		}
		self.entries
			.iter()
			.filter(|entry| entry.contains(query))
			.cloned()
			.collect()
	}

	/// Append `value` under a freshly allocated id and return the new entry.
	///
	/// Duplicate values are accepted.
	pub fn append(&mut self, value: impl Into<String>) -> Entry {
		let entry = Entry {
			id: EntryId(self.next_id),
			value: value.into(),
		};
		self.next_id = self.next_id.saturating_add(1);
		log::debug!("appended entry {} ({:?})", entry.id, entry.value);
		self.entries.push(entry.clone());
		entry
	}

	#[must_use]
	pub fn get(&self, id: EntryId) -> Option<&Entry> {
		self.entries.iter().find(|entry| entry.id == id)
	}

	#[must_use]
	pub fn entries(&self) -> &[Entry] {
		&self.entries
	}

	pub fn iter(&self) -> impl Iterator<Item = &Entry> {
		self.entries.iter()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
