//! Error types for seed loading.

use std::path::PathBuf;

use pact_store::StoreError;
use thiserror::Error;

/// Errors that can occur when loading or applying a seed.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a seed file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A `[sessions]` table is keyed by an empty session id.
	#[error("invalid session id: {0:?}")]
	InvalidSession(String),

	/// The store rejected a merge.
	#[error("store rejected seed: {0}")]
	Store(#[from] StoreError),
}

/// Result type for seed operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
