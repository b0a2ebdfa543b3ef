use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap as HashMap;

use crate::entries::Entries;
use crate::producer::SharedProducer;

/// Mapping from key to producer.
pub(crate) struct Namespace<V> {
	producers: HashMap<Box<str>, SharedProducer<V>>,
}

impl<V> Namespace<V> {
	/// Creates an empty namespace.
	pub fn new() -> Self {
		Self {
			producers: HashMap::default(),
		}
	}

	/// Merges `entries` into the namespace, last write wins per key.
	///
	/// Returns how many existing keys were replaced.
	pub fn merge(&mut self, entries: Entries<V>) -> usize {
		let mut replaced = 0;
		for (name, producer) in entries.map {
			if self.producers.insert(name, producer).is_some() {
				replaced += 1;
			}
		}
		replaced
	}

	/// Returns a handle to the producer stored under `name`.
	#[inline]
	pub fn get(&self, name: &str) -> Option<SharedProducer<V>> {
		self.producers.get(name).map(Arc::clone)
	}

	#[inline]
	pub fn contains(&self, name: &str) -> bool {
		self.producers.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.producers.len()
	}

	/// Returns keys sorted by name.
	pub fn keys(&self) -> Vec<&str> {
		let mut keys: Vec<_> = self.producers.keys().map(AsRef::as_ref).collect();
		keys.sort_unstable();
		keys
	}
}

impl<V> Default for Namespace<V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<V> fmt::Debug for Namespace<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Namespace").field("keys", &self.keys()).finish()
	}
}
