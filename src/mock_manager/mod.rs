//! Mock registry
//!
//! This module holds the per-entry-point state records and the operations
//! test code uses on them: installing scoped overrides and observers, and
//! dispatching calls to whichever implementation is currently active.

mod entry_point;
mod error;
mod handle;
mod slots;
mod state;
mod stats;

pub use entry_point::{Catalog, EntryPoint};
pub use error::{MockError, Result};
pub use handle::{Observe, ObserverHandle, Override, OverrideHandle, ScopedHandle, SlotKind};
pub use state::{FunctionState, Implementation, Observer};
pub use stats::{EntryPointStats, report};

use state::write;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, trace};

/// Display name of an entry point
#[must_use]
pub const fn name<E: EntryPoint>() -> &'static str {
	E::NAME
}

/// Dispatch a call to an entry point
///
/// Every installed observer is notified first, in insertion order, with a
/// copy of `args`. Then the most recently installed override that is still
/// present runs, or the default implementation if there is none. Its result
/// is returned unchanged.
///
/// No registry lock is held while observers or implementations run, so they
/// may call entry points or install and release handles themselves. An
/// observer released during a call still completes that call.
///
/// # Safety
///
/// `args` must satisfy the contract of the native entry point. Defaults for
/// pointer-based entry points dereference their arguments.
///
/// # Panics
///
/// Panics if no override is installed and the entry point has no default
/// implementation. Do not call an entry point before a default is registered.
pub unsafe fn call<E: EntryPoint>(args: E::Args) -> E::Output {
	let state = E::state();
	state.record_call();

	let observers = state.observer_snapshot();
	for observer in &observers {
		observer(args);
	}

	let active = state.active_override();
	if crate::config::trace_calls() {
		trace!(
			entry_point = E::NAME,
			implementation = if active.is_some() { "override" } else { "default" },
			observers = observers.len(),
			"dispatch"
		);
	}

	if let Some(implementation) = active {
		return implementation(args);
	}

	match E::DEFAULT_IMPL {
		Some(default_impl) => unsafe { default_impl(args) },
		None => {
			let err = MockError::MissingDefault { name: E::NAME };
			error!("{err}");
			panic!("{err}");
		},
	}
}

/// Install an observer for an entry point
///
/// The observer sees the arguments of every call until the returned handle
/// is released.
pub fn register_observer<E, F>(observer: F) -> ObserverHandle<E>
where
	E: EntryPoint,
	F: Fn(E::Args) + Send + Sync + 'static,
{
	let observer: Observer<E> = Arc::new(observer);
	let key = write(E::state().observers()).push_back(observer);
	debug!(entry_point = E::NAME, seq = key.seq(), "observer registered");
	ScopedHandle::new(key)
}

/// Install an override for an entry point
///
/// The override replaces the default, and every earlier override, until the
/// returned handle is released.
pub fn override_with<E, F>(implementation: F) -> OverrideHandle<E>
where
	E: EntryPoint,
	F: Fn(E::Args) -> E::Output + Send + Sync + 'static,
{
	let implementation: Implementation<E> = Arc::new(implementation);
	let key = write(E::state().overrides()).push_back(implementation);
	debug!(entry_point = E::NAME, seq = key.seq(), "override installed");
	ScopedHandle::new(key)
}

/// Install an observer that logs every call's arguments at `debug` level
pub fn trace<E>() -> ObserverHandle<E>
where
	E: EntryPoint,
	E::Args: fmt::Debug,
{
	register_observer::<E, _>(|args: E::Args| {
		debug!(entry_point = E::NAME, ?args, "call observed");
	})
}

/// Number of dispatches through an entry point so far
#[must_use]
pub fn call_count<E: EntryPoint>() -> usize {
	E::state().call_count()
}

/// Whether a default implementation was supplied for an entry point
#[must_use]
pub const fn has_default<E: EntryPoint>() -> bool {
	E::DEFAULT_IMPL.is_some()
}

/// Current registration state of an entry point
#[must_use]
pub fn stats<E: EntryPoint>() -> EntryPointStats {
	let state = E::state();
	EntryPointStats {
		name: E::NAME,
		call_count: state.call_count(),
		overrides: state.override_count(),
		observers: state.observer_count(),
		has_default: has_default::<E>(),
	}
}
