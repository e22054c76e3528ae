//! simulakrum - Scoped mocking for C-style API entry points
//!
//! Every mockable entry point gets a process-wide state record holding its
//! overrides, its observers and a call counter. Calls go through a forwarder
//! with the native signature, which notifies the observers and then runs the
//! most recent override, or the default implementation if there is none.
//! Overrides and observers live exactly as long as the handle returned when
//! they were installed.
//!
//! # Getting Started
//!
//! ```rust
//! use simulakrum::entry_points;
//!
//! fn real_answer(question: u32) -> u32 {
//!     question
//! }
//!
//! entry_points! {
//!     enum Api;
//!
//!     fn get_answer(question: u32) -> u32 = real_answer;
//! }
//!
//! assert_eq!(get_answer(7), 7);
//! {
//!     let _answer = GetAnswer::override_with(|_| 42);
//!     assert_eq!(get_answer(7), 42);
//! }
//! // The override went away with its handle
//! assert_eq!(get_answer(7), 7);
//! ```
//!
//! The [`vulkan`] module ships a ready-made catalog of Vulkan commands.

// Lets code generated by `entry_points!` refer to `::simulakrum` from inside
// this crate too.
extern crate self as simulakrum;

pub mod config;
pub mod mock_manager;
pub mod util;
pub mod vulkan;

pub use simulakrum_macros::entry_points;

pub use config::{MockConfig, MockConfigBuilder};
pub use mock_manager::{
	Catalog, EntryPoint, EntryPointStats, FunctionState, MockError, ObserverHandle, OverrideHandle, Result, ScopedHandle,
};

/// Start configuring the registry
///
/// The builder starts from the defaults; call
/// [`MockConfigBuilder::apply`] to make the result active.
#[must_use]
pub fn configure() -> MockConfigBuilder {
	MockConfigBuilder::new()
}

/// Apply the configuration found in the environment
///
/// This is equivalent to `MockConfigBuilder::from_env()?.apply()`.
pub fn init_from_env() -> Result<MockConfig> {
	Ok(MockConfigBuilder::from_env()?.apply())
}
