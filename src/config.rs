//! Registry configuration
//!
//! This module contains the process-wide configuration of the registry and
//! the builder used to change it.

use crate::mock_manager::{MockError, Result};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

/// Environment variable enabling per-call tracing
pub const TRACE_ENV: &str = "SIMULAKRUM_TRACE";

/// Environment variable enabling debug logging
pub const DEBUG_ENV: &str = "SIMULAKRUM_DEBUG";

static ACTIVE_CONFIG: Lazy<RwLock<MockConfig>> = Lazy::new(|| RwLock::new(MockConfig::default()));

// Read on every dispatch, so kept outside the lock.
static TRACE_CALLS: AtomicBool = AtomicBool::new(false);

/// Configuration for the registry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockConfig {
	/// Whether to emit a trace event for every dispatched call
	pub trace_calls: bool,
	/// Whether applying the configuration installs the logging subscriber
	pub init_logging: bool,
}

impl MockConfig {
	/// Read the configuration from the environment
	///
	/// `SIMULAKRUM_TRACE` takes a boolean flag; setting `SIMULAKRUM_DEBUG` to
	/// anything enables logging.
	pub fn from_env() -> Result<Self> {
		let trace_calls = match std::env::var(TRACE_ENV) {
			Ok(value) => parse_flag(TRACE_ENV, &value)?,
			Err(_) => false,
		};

		Ok(Self {
			trace_calls,
			init_logging: std::env::var_os(DEBUG_ENV).is_some(),
		})
	}
}

/// Builder for applying a registry configuration
#[derive(Debug, Clone, Default)]
pub struct MockConfigBuilder {
	config: MockConfig,
}

impl MockConfigBuilder {
	/// Start from the default configuration
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Start from the configuration found in the environment
	pub fn from_env() -> Result<Self> {
		Ok(Self {
			config: MockConfig::from_env()?,
		})
	}

	/// Enable or disable per-call tracing
	#[must_use]
	pub const fn trace_calls(mut self, trace: bool) -> Self {
		self.config.trace_calls = trace;
		self
	}

	/// Enable or disable installing the logging subscriber
	#[must_use]
	pub const fn init_logging(mut self, init: bool) -> Self {
		self.config.init_logging = init;
		self
	}

	/// Finish without applying
	#[must_use]
	pub fn build(self) -> MockConfig {
		self.config
	}

	/// Make the configuration the active one
	pub fn apply(self) -> MockConfig {
		apply(self.config.clone());
		self.config
	}
}

/// Make `config` the active configuration
pub fn apply(config: MockConfig) {
	if config.init_logging {
		crate::util::init_logging();
	}

	TRACE_CALLS.store(config.trace_calls, Ordering::Relaxed);
	tracing::debug!(?config, "configuration applied");
	*ACTIVE_CONFIG.write().unwrap_or_else(PoisonError::into_inner) = config;
}

/// The active configuration
#[must_use]
pub fn current() -> MockConfig {
	ACTIVE_CONFIG.read().unwrap_or_else(PoisonError::into_inner).clone()
}

pub(crate) fn trace_calls() -> bool {
	TRACE_CALLS.load(Ordering::Relaxed)
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Ok(true),
		"0" | "false" | "no" | "off" => Ok(false),
		_ => Err(MockError::InvalidConfig {
			key,
			value: value.to_string(),
		}),
	}
}
