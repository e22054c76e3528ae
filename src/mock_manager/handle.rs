//! Scoped registration handles
//!
//! Installing an override or an observer returns a handle that owns the
//! registration. Dropping the handle, calling [`ScopedHandle::reset`] or
//! assigning another handle over it removes the registration exactly once.

use crate::mock_manager::slots::{SlotKey, Slots};
use crate::mock_manager::state::{Implementation, Observer, read, write};
use crate::mock_manager::{EntryPoint, FunctionState};
use std::fmt;
use std::marker::PhantomData;
use std::sync::RwLock;
use tracing::debug;

/// Selects which collection of a state record a handle refers to
pub trait SlotKind: 'static {
	/// The callable stored in the collection
	type Entry<E: EntryPoint>: Clone;

	/// Short label used in logs and `Debug` output
	const LABEL: &'static str;

	#[doc(hidden)]
	fn slots<E: EntryPoint>(state: &FunctionState<E>) -> &RwLock<Slots<Self::Entry<E>>>;
}

/// Marker for handles owning an override
#[derive(Debug)]
pub enum Override {}

/// Marker for handles owning an observer
#[derive(Debug)]
pub enum Observe {}

impl SlotKind for Override {
	type Entry<E: EntryPoint> = Implementation<E>;

	const LABEL: &'static str = "override";

	fn slots<E: EntryPoint>(state: &FunctionState<E>) -> &RwLock<Slots<Self::Entry<E>>> {
		state.overrides()
	}
}

impl SlotKind for Observe {
	type Entry<E: EntryPoint> = Observer<E>;

	const LABEL: &'static str = "observer";

	fn slots<E: EntryPoint>(state: &FunctionState<E>) -> &RwLock<Slots<Self::Entry<E>>> {
		state.observers()
	}
}

/// Owner of at most one override or observer registration
///
/// A handle is either empty or owns exactly one entry, which it removes
/// exactly once. Handles cannot be cloned; moving one moves the obligation.
/// [`Default`] produces an empty handle, so `std::mem::take` empties the
/// source while keeping the registration alive in the destination.
#[must_use = "dropping a scoped handle removes its registration immediately"]
pub struct ScopedHandle<E: EntryPoint, K: SlotKind> {
	key: Option<SlotKey>,
	_marker: PhantomData<fn() -> (E, K)>,
}

/// Handle owning an installed override
pub type OverrideHandle<E> = ScopedHandle<E, Override>;

/// Handle owning an installed observer
pub type ObserverHandle<E> = ScopedHandle<E, Observe>;

impl<E: EntryPoint, K: SlotKind> ScopedHandle<E, K> {
	pub(crate) const fn new(key: SlotKey) -> Self {
		Self {
			key: Some(key),
			_marker: PhantomData,
		}
	}

	/// Whether this handle still owns a registration
	#[must_use]
	pub const fn is_active(&self) -> bool {
		self.key.is_some()
	}

	/// The installed callable, or `None` for an empty handle
	#[must_use]
	pub fn get(&self) -> Option<K::Entry<E>> {
		let key = self.key?;
		read(K::slots(E::state())).get(key).cloned()
	}

	/// Remove the registration now and leave the handle empty
	///
	/// Does nothing on an empty handle.
	pub fn reset(&mut self) {
		let Some(key) = self.key.take() else {
			return;
		};

		// Drop the callable only after the lock is released: it may own other
		// handles whose release needs the same lock.
		let removed = write(K::slots(E::state())).remove(key);
		if removed.is_some() {
			debug!(entry_point = E::NAME, kind = K::LABEL, seq = key.seq(), "registration released");
		}
		drop(removed);
	}

	/// Consume the handle, removing its registration
	pub fn release(mut self) {
		self.reset();
	}
}

impl<E: EntryPoint, K: SlotKind> Default for ScopedHandle<E, K> {
	fn default() -> Self {
		Self {
			key: None,
			_marker: PhantomData,
		}
	}
}

impl<E: EntryPoint, K: SlotKind> Drop for ScopedHandle<E, K> {
	fn drop(&mut self) {
		self.reset();
	}
}

impl<E: EntryPoint, K: SlotKind> fmt::Debug for ScopedHandle<E, K> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ScopedHandle")
			.field("entry_point", &E::NAME)
			.field("kind", &K::LABEL)
			.field("active", &self.is_active())
			.finish()
	}
}
