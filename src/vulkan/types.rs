//! Vulkan types used by the mocked entry points
//!
//! Only the handful of types the catalog needs are defined here, with the
//! same layout as the C headers so the forwarders can be handed to code that
//! expects real Vulkan function pointers.

use libc::{c_char, c_void};
use std::fmt;

/// Size of the fixed name buffers in property structs
pub const VK_MAX_EXTENSION_NAME_SIZE: usize = 256;

/// Size of the fixed description buffers in property structs
pub const VK_MAX_DESCRIPTION_SIZE: usize = 256;

/// Pack an API version number
#[must_use]
pub const fn make_api_version(variant: u32, major: u32, minor: u32, patch: u32) -> u32 {
	(variant << 29) | (major << 22) | (minor << 12) | patch
}

#[must_use]
pub const fn api_version_major(version: u32) -> u32 {
	(version >> 22) & 0x7f
}

#[must_use]
pub const fn api_version_minor(version: u32) -> u32 {
	(version >> 12) & 0x3ff
}

#[must_use]
pub const fn api_version_patch(version: u32) -> u32 {
	version & 0xfff
}

pub const VK_API_VERSION_1_0: u32 = make_api_version(0, 1, 0, 0);
pub const VK_API_VERSION_1_1: u32 = make_api_version(0, 1, 1, 0);
pub const VK_API_VERSION_1_2: u32 = make_api_version(0, 1, 2, 0);
pub const VK_API_VERSION_1_3: u32 = make_api_version(0, 1, 3, 0);

/// Result code returned by most Vulkan commands
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct VkResult(pub i32);

impl VkResult {
	pub const SUCCESS: Self = Self(0);
	pub const NOT_READY: Self = Self(1);
	pub const TIMEOUT: Self = Self(2);
	pub const EVENT_SET: Self = Self(3);
	pub const EVENT_RESET: Self = Self(4);
	pub const INCOMPLETE: Self = Self(5);
	pub const ERROR_OUT_OF_HOST_MEMORY: Self = Self(-1);
	pub const ERROR_OUT_OF_DEVICE_MEMORY: Self = Self(-2);
	pub const ERROR_INITIALIZATION_FAILED: Self = Self(-3);
	pub const ERROR_DEVICE_LOST: Self = Self(-4);
	pub const ERROR_MEMORY_MAP_FAILED: Self = Self(-5);
	pub const ERROR_LAYER_NOT_PRESENT: Self = Self(-6);
	pub const ERROR_EXTENSION_NOT_PRESENT: Self = Self(-7);
	pub const ERROR_FEATURE_NOT_PRESENT: Self = Self(-8);
	pub const ERROR_INCOMPATIBLE_DRIVER: Self = Self(-9);
	pub const ERROR_TOO_MANY_OBJECTS: Self = Self(-10);
	pub const ERROR_FORMAT_NOT_SUPPORTED: Self = Self(-11);

	/// Whether this is a success code (non-negative)
	#[must_use]
	pub const fn is_success(self) -> bool {
		self.0 >= 0
	}

	/// The symbolic name of the code, if it is a known one
	#[must_use]
	pub const fn name(self) -> Option<&'static str> {
		Some(match self.0 {
			0 => "VK_SUCCESS",
			1 => "VK_NOT_READY",
			2 => "VK_TIMEOUT",
			3 => "VK_EVENT_SET",
			4 => "VK_EVENT_RESET",
			5 => "VK_INCOMPLETE",
			-1 => "VK_ERROR_OUT_OF_HOST_MEMORY",
			-2 => "VK_ERROR_OUT_OF_DEVICE_MEMORY",
			-3 => "VK_ERROR_INITIALIZATION_FAILED",
			-4 => "VK_ERROR_DEVICE_LOST",
			-5 => "VK_ERROR_MEMORY_MAP_FAILED",
			-6 => "VK_ERROR_LAYER_NOT_PRESENT",
			-7 => "VK_ERROR_EXTENSION_NOT_PRESENT",
			-8 => "VK_ERROR_FEATURE_NOT_PRESENT",
			-9 => "VK_ERROR_INCOMPATIBLE_DRIVER",
			-10 => "VK_ERROR_TOO_MANY_OBJECTS",
			-11 => "VK_ERROR_FORMAT_NOT_SUPPORTED",
			_ => return None,
		})
	}
}

impl fmt::Debug for VkResult {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.name() {
			Some(name) => f.write_str(name),
			None => write!(f, "VkResult({})", self.0),
		}
	}
}

impl fmt::Display for VkResult {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self, f)
	}
}

macro_rules! dispatchable_handle {
	($(#[$meta:meta])* $name:ident) => {
		$(#[$meta])*
		#[repr(transparent)]
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub struct $name(*mut c_void);

		// Handles are opaque identifiers; this crate never dereferences them.
		unsafe impl Send for $name {}
		unsafe impl Sync for $name {}

		impl $name {
			/// The null handle
			#[must_use]
			pub const fn null() -> Self {
				Self(std::ptr::null_mut())
			}

			/// Wrap a raw handle value
			#[must_use]
			pub fn from_raw(raw: usize) -> Self {
				Self(raw as *mut c_void)
			}

			/// The raw handle value
			#[must_use]
			pub fn as_raw(self) -> usize {
				self.0 as usize
			}

			#[must_use]
			pub fn is_null(self) -> bool {
				self.0.is_null()
			}
		}

		impl Default for $name {
			fn default() -> Self {
				Self::null()
			}
		}
	};
}

dispatchable_handle!(
	/// Handle to a Vulkan instance
	VkInstance
);

dispatchable_handle!(
	/// Handle to a physical device
	VkPhysicalDevice
);

/// Instance creation parameters, passed through untouched
#[repr(C)]
pub struct VkInstanceCreateInfo {
	_private: [u8; 0],
}

/// Host allocation callbacks, passed through untouched
#[repr(C)]
pub struct VkAllocationCallbacks {
	_private: [u8; 0],
}

/// Copy `s` into a NUL-terminated fixed-size C string buffer
///
/// Input longer than `N - 1` bytes is truncated.
#[must_use]
pub const fn c_name<const N: usize>(s: &str) -> [c_char; N] {
	let bytes = s.as_bytes();
	let mut out = [0 as c_char; N];
	let mut i = 0;
	while i < bytes.len() && i + 1 < N {
		out[i] = bytes[i] as c_char;
		i += 1;
	}
	out
}

/// Read a NUL-terminated fixed-size C string buffer
#[must_use]
pub fn read_c_name(buffer: &[c_char]) -> String {
	let bytes: Vec<u8> = buffer.iter().take_while(|&&c| c != 0).map(|&c| c as u8).collect();
	String::from_utf8_lossy(&bytes).into_owned()
}

/// Properties of a layer
#[repr(C)]
#[derive(Clone, Copy)]
pub struct VkLayerProperties {
	pub layer_name: [c_char; VK_MAX_EXTENSION_NAME_SIZE],
	pub spec_version: u32,
	pub implementation_version: u32,
	pub description: [c_char; VK_MAX_DESCRIPTION_SIZE],
}

impl VkLayerProperties {
	#[must_use]
	pub const fn new(layer_name: &str, spec_version: u32, implementation_version: u32, description: &str) -> Self {
		Self {
			layer_name: c_name(layer_name),
			spec_version,
			implementation_version,
			description: c_name(description),
		}
	}

	#[must_use]
	pub fn layer_name(&self) -> String {
		read_c_name(&self.layer_name)
	}

	#[must_use]
	pub fn description(&self) -> String {
		read_c_name(&self.description)
	}
}

impl Default for VkLayerProperties {
	fn default() -> Self {
		Self::new("", 0, 0, "")
	}
}

impl fmt::Debug for VkLayerProperties {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("VkLayerProperties")
			.field("layer_name", &self.layer_name())
			.field("spec_version", &self.spec_version)
			.field("implementation_version", &self.implementation_version)
			.field("description", &self.description())
			.finish()
	}
}

/// Properties of an extension
#[repr(C)]
#[derive(Clone, Copy)]
pub struct VkExtensionProperties {
	pub extension_name: [c_char; VK_MAX_EXTENSION_NAME_SIZE],
	pub spec_version: u32,
}

impl VkExtensionProperties {
	#[must_use]
	pub const fn new(extension_name: &str, spec_version: u32) -> Self {
		Self {
			extension_name: c_name(extension_name),
			spec_version,
		}
	}

	#[must_use]
	pub fn extension_name(&self) -> String {
		read_c_name(&self.extension_name)
	}
}

impl Default for VkExtensionProperties {
	fn default() -> Self {
		Self::new("", 0)
	}
}

impl fmt::Debug for VkExtensionProperties {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("VkExtensionProperties")
			.field("extension_name", &self.extension_name())
			.field("spec_version", &self.spec_version)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn api_version_round_trips_its_parts() {
		assert_eq!(api_version_major(VK_API_VERSION_1_3), 1);
		assert_eq!(api_version_minor(VK_API_VERSION_1_3), 3);
		assert_eq!(api_version_patch(make_api_version(0, 1, 2, 198)), 198);
		assert!(VK_API_VERSION_1_2 > VK_API_VERSION_1_1);
		assert!(VK_API_VERSION_1_1 > VK_API_VERSION_1_0);
	}

	#[test]
	fn result_codes_print_their_names() {
		assert_eq!(VkResult::SUCCESS.to_string(), "VK_SUCCESS");
		assert_eq!(format!("{:?}", VkResult::ERROR_LAYER_NOT_PRESENT), "VK_ERROR_LAYER_NOT_PRESENT");
		assert_eq!(VkResult(-1000).to_string(), "VkResult(-1000)");
		assert!(VkResult::INCOMPLETE.is_success());
		assert!(!VkResult::ERROR_DEVICE_LOST.is_success());
	}

	#[test]
	fn names_are_truncated_and_terminated() {
		let short: [c_char; 4] = c_name("abcdef");
		assert_eq!(read_c_name(&short), "abc");

		let ext = VkExtensionProperties::new("VK_KHR_surface", 25);
		assert_eq!(ext.extension_name(), "VK_KHR_surface");
		assert!(format!("{ext:?}").contains("VK_KHR_surface"));
	}

	#[test]
	fn handles_wrap_raw_values() {
		assert!(VkInstance::default().is_null());
		let device = VkPhysicalDevice::from_raw(0x2000);
		assert!(!device.is_null());
		assert_eq!(device.as_raw(), 0x2000);
	}
}
