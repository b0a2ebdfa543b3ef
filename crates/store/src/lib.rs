//! Session-scoped store of lazily evaluated values.
//!
//! Request handlers stash named [`Producer`]s either in the global namespace or
//! in the namespace of one session, and evaluate them on demand when rendering
//! a response. Nothing is computed at write time.
//!
//! ```
//! use pact_store::{Entries, LazyValueStore, Scope};
//!
//! let store = LazyValueStore::<u32>::new();
//! store.add_global(Entries::new().constant("contract_ttl_days", 30)).ok();
//! store
//! 	.add_for_session("sess-1", Entries::new().with("pending", |_: &str| 2))
//! 	.ok();
//!
//! assert_eq!(store.get_global("contract_ttl_days"), Some(30));
//! assert_eq!(store.get_from_namespace(Scope::Session("sess-1"), "pending"), Some(2));
//! assert_eq!(store.get_for_session("sess-2", "pending"), None);
//! ```
//!
//! # Invalid arguments
//!
//! An empty session id, or an empty batch of global entries, is reported
//! through `tracing::error!` and returned as a [`StoreError`]. The store is left
//! unchanged. Unknown keys and sessions are not errors: lookups return `None`
//! without logging.

mod entries;
mod error;
mod namespace;
mod producer;
mod scope;
mod store;

pub use entries::Entries;
pub use error::StoreError;
pub use producer::{Constant, Producer, SharedProducer};
pub use scope::Scope;
pub use store::{LazyValueStore, SharedStore};
