//! Default implementations of the mocked Vulkan entry points
//!
//! These describe a minimal, always-available driver: Vulkan 1.3, no layers,
//! a couple of instance extensions and a single physical device. Tests that
//! need something else install an override instead of editing this list.
//!
//! All enumerating commands follow the usual two-call protocol. With a null
//! output pointer they report the total count; otherwise they write as many
//! entries as fit and return `VK_INCOMPLETE` if some were left out.

use crate::vulkan::types::{
	VK_API_VERSION_1_3, VkAllocationCallbacks, VkExtensionProperties, VkInstance, VkInstanceCreateInfo, VkLayerProperties,
	VkPhysicalDevice, VkResult,
};
use libc::c_char;

const FAKE_INSTANCE: usize = 0x1000;
const FAKE_PHYSICAL_DEVICE: usize = 0x2000;

static INSTANCE_LAYERS: [VkLayerProperties; 0] = [];

static INSTANCE_EXTENSIONS: [VkExtensionProperties; 2] = [
	VkExtensionProperties::new("VK_KHR_surface", 25),
	VkExtensionProperties::new("VK_EXT_debug_utils", 2),
];

static DEVICE_LAYERS: [VkLayerProperties; 0] = [];

static DEVICE_EXTENSIONS: [VkExtensionProperties; 1] = [VkExtensionProperties::new("VK_KHR_swapchain", 70)];

/// Copy as many of `items` as fit into `out`
///
/// Returns the number of entries reported together with the result code.
/// Without an output buffer the total count is reported.
pub fn fill<T: Copy>(items: &[T], out: Option<&mut [T]>) -> (usize, VkResult) {
	let Some(out) = out else {
		return (items.len(), VkResult::SUCCESS);
	};

	let written = out.len().min(items.len());
	out[..written].copy_from_slice(&items[..written]);

	let result = if written < items.len() {
		VkResult::INCOMPLETE
	} else {
		VkResult::SUCCESS
	};
	(written, result)
}

/// Pointer form of [`fill`]
///
/// # Safety
///
/// `p_count` must be null or valid for reads and writes. If `p_out` is not
/// null it must be valid for writing `*p_count` entries.
pub unsafe fn enumerate<T: Copy>(items: &[T], p_count: *mut u32, p_out: *mut T) -> VkResult {
	let Some(count) = (unsafe { p_count.as_mut() }) else {
		return VkResult::ERROR_INITIALIZATION_FAILED;
	};

	let out = if p_out.is_null() {
		None
	} else {
		Some(unsafe { std::slice::from_raw_parts_mut(p_out, *count as usize) })
	};

	let (written, result) = fill(items, out);
	*count = u32::try_from(written).unwrap_or(u32::MAX);
	result
}

/// # Safety
///
/// `p_api_version` must be null or valid for writes.
pub unsafe fn enumerate_instance_version(p_api_version: *mut u32) -> VkResult {
	match unsafe { p_api_version.as_mut() } {
		Some(version) => {
			*version = VK_API_VERSION_1_3;
			VkResult::SUCCESS
		},
		None => VkResult::ERROR_INITIALIZATION_FAILED,
	}
}

/// # Safety
///
/// See [`enumerate`].
pub unsafe fn enumerate_instance_layer_properties(p_property_count: *mut u32, p_properties: *mut VkLayerProperties) -> VkResult {
	unsafe { enumerate(&INSTANCE_LAYERS, p_property_count, p_properties) }
}

/// # Safety
///
/// See [`enumerate`]. `p_layer_name` is only checked for null.
pub unsafe fn enumerate_instance_extension_properties(
	p_layer_name: *const c_char,
	p_property_count: *mut u32,
	p_properties: *mut VkExtensionProperties,
) -> VkResult {
	// No layers exist, so no layer can provide extensions.
	if !p_layer_name.is_null() {
		return VkResult::ERROR_LAYER_NOT_PRESENT;
	}
	unsafe { enumerate(&INSTANCE_EXTENSIONS, p_property_count, p_properties) }
}

/// # Safety
///
/// `p_instance` must be null or valid for writes. The other pointers are not
/// read.
pub unsafe fn create_instance(
	_p_create_info: *const VkInstanceCreateInfo,
	_p_allocator: *const VkAllocationCallbacks,
	p_instance: *mut VkInstance,
) -> VkResult {
	match unsafe { p_instance.as_mut() } {
		Some(instance) => {
			*instance = VkInstance::from_raw(FAKE_INSTANCE);
			VkResult::SUCCESS
		},
		None => VkResult::ERROR_INITIALIZATION_FAILED,
	}
}

/// # Safety
///
/// Always safe to call; no pointer is read.
pub unsafe fn destroy_instance(_instance: VkInstance, _p_allocator: *const VkAllocationCallbacks) {}

/// # Safety
///
/// See [`enumerate`].
pub unsafe fn enumerate_physical_devices(
	instance: VkInstance,
	p_physical_device_count: *mut u32,
	p_physical_devices: *mut VkPhysicalDevice,
) -> VkResult {
	if instance.is_null() {
		return VkResult::ERROR_INITIALIZATION_FAILED;
	}

	let devices = [VkPhysicalDevice::from_raw(FAKE_PHYSICAL_DEVICE)];
	unsafe { enumerate(&devices, p_physical_device_count, p_physical_devices) }
}

/// # Safety
///
/// See [`enumerate`].
pub unsafe fn enumerate_device_layer_properties(
	_physical_device: VkPhysicalDevice,
	p_property_count: *mut u32,
	p_properties: *mut VkLayerProperties,
) -> VkResult {
	unsafe { enumerate(&DEVICE_LAYERS, p_property_count, p_properties) }
}

/// # Safety
///
/// See [`enumerate_instance_extension_properties`].
pub unsafe fn enumerate_device_extension_properties(
	_physical_device: VkPhysicalDevice,
	p_layer_name: *const c_char,
	p_property_count: *mut u32,
	p_properties: *mut VkExtensionProperties,
) -> VkResult {
	if !p_layer_name.is_null() {
		return VkResult::ERROR_LAYER_NOT_PRESENT;
	}
	unsafe { enumerate(&DEVICE_EXTENSIONS, p_property_count, p_properties) }
}
