//! Seed files for pact stores.
//!
//! A seed preloads constant values (feature flags, derived configuration) into
//! a [`LazyValueStore`]. Seeds are written in TOML:
//!
//! ```toml
//! # Global values, readable by every session
//! [global]
//! feature_signing = true
//! contract_ttl_days = 30
//!
//! # Values owned by one session
//! [sessions."sess-42"]
//! role = "partyA"
//! ```
//!
//! Every value becomes a [`Constant`] producer. Applying a seed merges into
//! the store, so values already present under other keys are kept.

pub mod error;

use std::collections::BTreeMap;
use std::path::Path;

pub use error::{ConfigError, Result};
use pact_store::{Constant, Entries, LazyValueStore};
use serde::Deserialize;

#[cfg(test)]
mod tests;

/// Parsed seed document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, bound(deserialize = "V: Deserialize<'de>"))]
pub struct Seed<V> {
	/// Values merged into the global namespace.
	#[serde(default)]
	pub global: BTreeMap<String, V>,
	/// Values merged into per-session namespaces, keyed by session id.
	#[serde(default)]
	pub sessions: BTreeMap<String, BTreeMap<String, V>>,
}

/// Counts of what [`Seed::apply`] merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
	/// Global keys merged.
	pub global: usize,
	/// Sessions that received at least one key.
	pub sessions: usize,
	/// Session keys merged, across all sessions.
	pub session_entries: usize,
}

impl<V> Seed<V> {
	/// Creates an empty seed.
	pub fn new() -> Self {
		Self {
			global: BTreeMap::new(),
			sessions: BTreeMap::new(),
		}
	}

	/// Returns true when the seed holds no values.
	pub fn is_empty(&self) -> bool {
		self.global.is_empty() && self.sessions.values().all(BTreeMap::is_empty)
	}

	/// Checks that every `[sessions]` key is a usable session id.
	pub fn validate(&self) -> Result<()> {
		match self.sessions.keys().find(|id| id.is_empty()) {
			Some(id) => Err(ConfigError::InvalidSession(id.clone())),
			None => Ok(()),
		}
	}

	/// Merge another seed into this one.
	///
	/// Values from `other` override values in `self`, key by key.
	pub fn merge(&mut self, other: Seed<V>) {
		self.global.extend(other.global);
		for (session_id, values) in other.sessions {
			self.sessions.entry(session_id).or_default().extend(values);
		}
	}
}

impl<V> Seed<V>
where
	V: for<'de> Deserialize<'de>,
{
	/// Parse a TOML string into a [`Seed`].
	pub fn from_toml(input: &str) -> Result<Self> {
		let seed: Self = toml::from_str(input)?;
		seed.validate()?;
		Ok(seed)
	}

	/// Load a seed from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		let seed = Self::from_toml(&content)?;
		tracing::debug!(path = %path.display(), "config.seed_loaded");
		Ok(seed)
	}
}

impl<V> Seed<V>
where
	V: Clone + Send + Sync + 'static,
{
	/// Merges every value of the seed into `store`.
	///
	/// Empty tables are skipped. The seed is validated before the first
	/// merge, so an invalid seed leaves `store` untouched.
	pub fn apply(&self, store: &LazyValueStore<V>) -> Result<SeedReport> {
		self.validate()?;

		let mut report = SeedReport::default();

		if !self.global.is_empty() {
			store.add_global(constants(&self.global))?;
			report.global = self.global.len();
		}

		for (session_id, values) in self.sessions.iter().filter(|(_, values)| !values.is_empty()) {
			store.add_for_session(session_id, constants(values))?;
			report.sessions += 1;
			report.session_entries += values.len();
		}

		tracing::info!(
			global = report.global,
			sessions = report.sessions,
			session_entries = report.session_entries,
			"config.seed_applied"
		);
		Ok(report)
	}
}

impl<V> Default for Seed<V> {
	fn default() -> Self {
		Self::new()
	}
}

fn constants<V>(values: &BTreeMap<String, V>) -> Entries<V>
where
	V: Clone + Send + Sync + 'static,
{
	values.iter().map(|(name, value)| (name.as_str(), Constant(value.clone()))).collect()
}
