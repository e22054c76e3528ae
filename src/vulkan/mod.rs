//! Mocked Vulkan driver
//!
//! A small catalog of Vulkan 1.3 commands, each dispatched through the mock
//! registry with a synthetic default implementation.

pub mod defaults;
mod table;
mod types;

pub use table::*;
pub use types::*;
