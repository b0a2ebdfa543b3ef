//! Error types for store operations.

use thiserror::Error;

/// Invalid arguments rejected by [`LazyValueStore`](crate::LazyValueStore).
///
/// Each variant names the operation that rejected its input. Rejections are
/// logged where they are detected and never leave the store half-updated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
	/// The session id was empty or whitespace.
	#[error("{op}: missing session id")]
	MissingSession {
		/// Operation that rejected the call.
		op: &'static str,
	},

	/// The batch of entries to merge was empty.
	#[error("{op}: no entries provided")]
	MissingEntries {
		/// Operation that rejected the call.
		op: &'static str,
	},
}

impl StoreError {
	/// Returns the operation that rejected the call.
	pub const fn op(&self) -> &'static str {
		match self {
			Self::MissingSession { op } | Self::MissingEntries { op } => op,
		}
	}
}
