//! Function keys
//!
//! Every interceptable entry point is represented by a zero-sized key type.
//! The type itself is the identity: naming it selects the entry point's
//! state record at compile time, without any runtime lookup.

use crate::mock_manager::{EntryPointStats, FunctionState};
use std::fmt;

/// Compile-time identity of one interceptable entry point
///
/// Implementations are normally generated by [`entry_points!`](crate::entry_points),
/// which also supplies the display name, the default implementation and a
/// function-local `static` holding the state record.
pub trait EntryPoint: Sized + 'static {
	/// The native parameter list, as a tuple
	type Args: Copy + 'static;

	/// The native return type, `()` for void entry points
	type Output: 'static;

	/// Display name of the entry point
	const NAME: &'static str = "unknown function";

	/// Synthetic implementation used while no override is installed
	///
	/// `None` means no default was ever supplied. Calling such an entry point
	/// without an override is a configuration error and panics.
	///
	/// Defaults may dereference pointer arguments, so calling one is `unsafe`
	/// with the same contract as [`call`](crate::mock_manager::call):
	///
	/// ```compile_fail
	/// use simulakrum::EntryPoint;
	/// use simulakrum::vulkan::VkEnumerateInstanceVersion;
	///
	/// if let Some(default_impl) = VkEnumerateInstanceVersion::DEFAULT_IMPL {
	///     default_impl((std::ptr::null_mut(),));
	/// }
	/// ```
	const DEFAULT_IMPL: Option<unsafe fn(Self::Args) -> Self::Output> = None;

	/// The process-wide state record of this entry point
	fn state() -> &'static FunctionState<Self>;
}

/// Enumerable view over a generated catalog of entry points
pub trait Catalog: Copy + Eq + fmt::Debug + fmt::Display + 'static {
	/// Every entry point of the catalog, in declaration order
	fn all() -> &'static [Self];

	/// Display name of the entry point
	fn name(self) -> &'static str;

	/// Current registration state of the entry point
	fn stats(self) -> EntryPointStats;
}
