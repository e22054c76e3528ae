//! Per-entry-point state records
//!
//! A `FunctionState` holds everything that can change about one entry point
//! at runtime: the installed overrides, the installed observers and the
//! dispatch counter. Records are created lazily on first use and live until
//! the process exits.

use crate::mock_manager::slots::Slots;
use crate::mock_manager::EntryPoint;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// An installed replacement implementation
pub type Implementation<E> = Arc<dyn Fn(<E as EntryPoint>::Args) -> <E as EntryPoint>::Output + Send + Sync>;

/// An installed observer: same parameters, no result
pub type Observer<E> = Arc<dyn Fn(<E as EntryPoint>::Args) + Send + Sync>;

/// Runtime state of one entry point
pub struct FunctionState<E: EntryPoint> {
	overrides: RwLock<Slots<Implementation<E>>>,
	observers: RwLock<Slots<Observer<E>>>,
	call_count: AtomicUsize,
}

impl<E: EntryPoint> Default for FunctionState<E> {
	fn default() -> Self {
		Self::new()
	}
}

impl<E: EntryPoint> fmt::Debug for FunctionState<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FunctionState")
			.field("name", &E::NAME)
			.field("overrides", &self.override_count())
			.field("observers", &self.observer_count())
			.field("call_count", &self.call_count())
			.finish()
	}
}

impl<E: EntryPoint> FunctionState<E> {
	/// Create an empty record
	#[must_use]
	pub fn new() -> Self {
		Self {
			overrides: RwLock::new(Slots::new()),
			observers: RwLock::new(Slots::new()),
			call_count: AtomicUsize::new(0),
		}
	}

	/// Number of dispatches so far
	pub fn call_count(&self) -> usize {
		self.call_count.load(Ordering::Relaxed)
	}

	/// Number of overrides currently installed
	pub fn override_count(&self) -> usize {
		read(&self.overrides).len()
	}

	/// Number of observers currently installed
	pub fn observer_count(&self) -> usize {
		read(&self.observers).len()
	}

	pub(crate) fn overrides(&self) -> &RwLock<Slots<Implementation<E>>> {
		&self.overrides
	}

	pub(crate) fn observers(&self) -> &RwLock<Slots<Observer<E>>> {
		&self.observers
	}

	pub(crate) fn record_call(&self) {
		self.call_count.fetch_add(1, Ordering::Relaxed);
	}

	/// The installed observers in insertion order
	///
	/// The lock is released before this returns, so observers can re-enter
	/// the registry while they run.
	pub(crate) fn observer_snapshot(&self) -> Vec<Observer<E>> {
		read(&self.observers).iter().cloned().collect()
	}

	/// The most recently installed override that is still present
	pub(crate) fn active_override(&self) -> Option<Implementation<E>> {
		read(&self.overrides).back().cloned()
	}
}

// A panic inside a registry operation cannot leave a `Slots` half-updated,
// so a poisoned lock still guards consistent data.
pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
	lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
	lock.write().unwrap_or_else(PoisonError::into_inner)
}
