use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap as HashMap;

use crate::producer::{Constant, Producer, SharedProducer};

/// Batch of named producers handed to a single merge.
///
/// Names are unique within a batch; inserting a name twice keeps the later
/// producer.
pub struct Entries<V> {
	pub(crate) map: HashMap<Box<str>, SharedProducer<V>>,
}

impl<V> Entries<V> {
	pub fn new() -> Self {
		Self { map: HashMap::default() }
	}

	/// Adds a producer, builder style.
	///
	/// Closures need an annotated argument (`|_: &str| ...`) to be accepted
	/// as producers.
	pub fn with<P>(mut self, name: impl Into<Box<str>>, producer: P) -> Self
	where
		P: Producer<V> + 'static,
	{
		self.insert(name, producer);
		self
	}

	/// Adds a producer that always yields `value`.
	pub fn constant(self, name: impl Into<Box<str>>, value: V) -> Self
	where
		V: Clone + Send + Sync + 'static,
	{
		self.with(name, Constant(value))
	}

	/// Inserts a producer, returning the one it replaced.
	pub fn insert<P>(&mut self, name: impl Into<Box<str>>, producer: P) -> Option<SharedProducer<V>>
	where
		P: Producer<V> + 'static,
	{
		self.insert_shared(name, Arc::new(producer))
	}

	/// Inserts an already shared producer, returning the one it replaced.
	pub fn insert_shared(&mut self, name: impl Into<Box<str>>, producer: SharedProducer<V>) -> Option<SharedProducer<V>> {
		self.map.insert(name.into(), producer)
	}

	pub fn len(&self) -> usize {
		self.map.len()
	}

	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}

	/// Names in the batch, in no particular order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.map.keys().map(AsRef::as_ref)
	}
}

impl<V> Default for Entries<V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<V> fmt::Debug for Entries<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.names()).finish()
	}
}

impl<V, K, P> FromIterator<(K, P)> for Entries<V>
where
	K: Into<Box<str>>,
	P: Producer<V> + 'static,
{
	fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
		let mut entries = Self::new();
		for (name, producer) in iter {
			entries.insert(name, producer);
		}
		entries
	}
}
