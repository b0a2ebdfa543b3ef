use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap as HashMap;

use crate::entries::Entries;
use crate::error::StoreError;
use crate::namespace::Namespace;
use crate::producer::SharedProducer;
use crate::scope::Scope;


/// Store handle shared between request handlers.
pub type SharedStore<V> = Arc<LazyValueStore<V>>;

/// Registry of named lazily evaluated values.
///
/// Holds one global namespace and one namespace per session. Both exist from
/// construction; session namespaces are created by their first write.
///
/// Merges hold the namespace's write lock for the whole batch. Producers are
/// always evaluated with no lock held, so they may use the store themselves.
pub struct LazyValueStore<V> {
	global: RwLock<Namespace<V>>,
	sessions: RwLock<HashMap<Box<str>, Namespace<V>>>,
}

impl<V> LazyValueStore<V> {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self {
			global: RwLock::new(Namespace::new()),
			sessions: RwLock::new(HashMap::default()),
		}
	}

	/// Creates an empty store behind an [`Arc`].
	pub fn shared() -> SharedStore<V> {
		Arc::new(Self::new())
	}

	/// Merges `entries` into the global namespace.
	///
	/// # Errors
	///
	/// Returns [`StoreError::MissingEntries`] when `entries` is empty.
	pub fn add_global(&self, entries: Entries<V>) -> Result<(), StoreError> {
		const OP: &str = "add_global";
		if entries.is_empty() {
			return Err(reject(StoreError::MissingEntries { op: OP }, None));
		}

		let count = entries.len();
		let replaced = self.global.write().merge(entries);
		tracing::debug!(scope = "global", entries = count, replaced, "store.merge");
		Ok(())
	}

	/// Merges `entries` into the namespace of `session_id`, creating it if absent.
	///
	/// An empty batch still creates the namespace.
	///
	/// # Errors
	///
	/// Returns [`StoreError::MissingSession`] for an empty session id.
	pub fn add_for_session(&self, session_id: &str, entries: Entries<V>) -> Result<(), StoreError> {
		const OP: &str = "add_for_session";
		if session_id.is_empty() {
			return Err(reject(StoreError::MissingSession { op: OP }, Some(session_id)));
		}

		let count = entries.len();
		let replaced = self.sessions.write().entry(Box::from(session_id)).or_default().merge(entries);
		tracing::debug!(scope = "session", session = session_id, entries = count, replaced, "store.merge");
		Ok(())
	}

	/// Evaluates the global producer stored under `name`.
	pub fn get_global(&self, name: &str) -> Option<V> {
		let producer = self.global.read().get(name);
		evaluate(Scope::Global, name, producer)
	}

	/// Evaluates the producer stored under `name` for `session_id`.
	///
	/// An empty session id is logged and yields `None`. Unknown sessions and
	/// keys yield `None` without logging.
	pub fn get_for_session(&self, session_id: &str, name: &str) -> Option<V> {
		if session_id.is_empty() {
			reject(StoreError::MissingSession { op: "get_for_session" }, Some(session_id));
			return None;
		}
		self.session_lookup(session_id, name)
	}

	/// Evaluates the producer stored under `name` in `scope`.
	///
	/// Never logs: an empty session id is just another unknown session.
	pub fn get_from_namespace(&self, scope: Scope<'_>, name: &str) -> Option<V> {
		match scope {
			Scope::Global => self.get_global(name),
			Scope::Session(session_id) => self.session_lookup(session_id, name),
		}
	}

	/// Returns whether `name` is stored in `scope`, without evaluating it.
	pub fn contains(&self, scope: Scope<'_>, name: &str) -> bool {
		match scope {
			Scope::Global => self.global.read().contains(name),
			Scope::Session(session_id) => self.sessions.read().get(session_id).is_some_and(|ns| ns.contains(name)),
		}
	}

	/// Returns the keys stored in `scope`, sorted by name.
	pub fn keys(&self, scope: Scope<'_>) -> Vec<String> {
		let owned = |ns: &Namespace<V>| -> Vec<String> { ns.keys().into_iter().map(str::to_owned).collect() };
		match scope {
			Scope::Global => owned(&*self.global.read()),
			Scope::Session(session_id) => self.sessions.read().get(session_id).map(owned).unwrap_or_default(),
		}
	}

	/// Drops the namespace of `session_id`.
	///
	/// Returns `true` when the session had a namespace. An empty session id is
	/// logged and yields `false`.
	pub fn end_session(&self, session_id: &str) -> bool {
		const OP: &str = "end_session";
		if session_id.is_empty() {
			reject(StoreError::MissingSession { op: OP }, Some(session_id));
			return false;
		}

		let removed = self.sessions.write().remove(session_id);
		let Some(namespace) = removed else {
			return false;
		};
		tracing::debug!(session = session_id, entries = namespace.len(), "store.end_session");
		true
	}

	/// Returns how many sessions currently own a namespace.
	pub fn session_count(&self) -> usize {
		self.sessions.read().len()
	}

	/// Returns ids of sessions owning a namespace, sorted.
	pub fn session_ids(&self) -> Vec<String> {
		let mut ids: Vec<_> = self.sessions.read().keys().map(|id| id.to_string()).collect();
		ids.sort_unstable();
		ids
	}

	fn session_lookup(&self, session_id: &str, name: &str) -> Option<V> {
		let producer = self.sessions.read().get(session_id).and_then(|ns| ns.get(name));
		evaluate(Scope::Session(session_id), name, producer)
	}
}

impl<V> Default for LazyValueStore<V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<V> fmt::Debug for LazyValueStore<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LazyValueStore")
			.field("global", &*self.global.read())
			.field("sessions", &self.session_count())
			.finish()
	}
}

fn evaluate<V>(scope: Scope<'_>, name: &str, producer: Option<SharedProducer<V>>) -> Option<V> {
	let producer = producer?;
	tracing::trace!(scope = scope.as_str(), name, "store.evaluate");
	Some(producer.evaluate(""))
}

fn reject(err: StoreError, session_id: Option<&str>) -> StoreError {
	tracing::error!(op = err.op(), session = ?session_id, error = %err, "store.invalid_argument");
	err
}
