//! Registration statistics
//!
//! Snapshots of a state record, for diagnostics and test assertions.

use crate::mock_manager::Catalog;
use std::fmt;

/// Snapshot of one entry point's registration state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPointStats {
	/// Display name of the entry point
	pub name: &'static str,
	/// Number of dispatches so far
	pub call_count: usize,
	/// Number of overrides currently installed
	pub overrides: usize,
	/// Number of observers currently installed
	pub observers: usize,
	/// Whether a default implementation was supplied
	pub has_default: bool,
}

impl EntryPointStats {
	/// Whether an override currently replaces the default
	#[must_use]
	pub const fn is_overridden(&self) -> bool {
		self.overrides > 0
	}
}

impl fmt::Display for EntryPointStats {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}: {} call(s), {} override(s), {} observer(s)",
			self.name, self.call_count, self.overrides, self.observers
		)?;
		if !self.has_default {
			f.write_str(", no default")?;
		}
		Ok(())
	}
}

/// Statistics for every entry point of a catalog, in catalog order
#[must_use]
pub fn report<C: Catalog>() -> Vec<EntryPointStats> {
	C::all().iter().map(|entry| entry.stats()).collect()
}
