//! Error types for the mock registry
//!
//! This module contains the error type and result alias used across the
//! crate.

use thiserror::Error;

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, MockError>;

/// Error type for registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MockError {
	/// An entry point was called with no override installed and no default
	#[error("`{name}` has no default implementation; install an override before calling it")]
	MissingDefault {
		/// Display name of the entry point
		name: &'static str,
	},

	/// No entry point with this name exists in the catalog
	#[error("Unknown entry point: {0}")]
	UnknownEntryPoint(String),

	/// A configuration value could not be interpreted
	#[error("Invalid value {value:?} for {key}")]
	InvalidConfig {
		/// The configuration key, usually an environment variable
		key: &'static str,
		/// The rejected value
		value: String,
	},
}
