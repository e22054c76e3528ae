//! Logging utilities for simulakrum
//!
//! This module installs the `tracing` subscriber used by the registry.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// Initialize logging once
static INIT: Once = Once::new();

/// Initialize the tracing system
///
/// This function sets up tracing with an `EnvFilter` that:
/// - Honors the `RUST_LOG` environment variable if set
/// - Uses the `SIMULAKRUM_DEBUG` environment variable to enable debug output
/// - Only logs warnings and errors by default
///
/// Does nothing if another subscriber is already installed.
pub fn init_logging() {
	INIT.call_once(|| {
		let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			if std::env::var_os(crate::config::DEBUG_ENV).is_some() {
				EnvFilter::new("simulakrum=debug")
			} else {
				EnvFilter::new("simulakrum=warn")
			}
		});

		let installed = tracing_subscriber::registry()
			.with(fmt::layer().with_target(true))
			.with(filter)
			.try_init();

		if installed.is_err() {
			tracing::debug!("tracing subscriber already installed, keeping it");
		}
	});
}
