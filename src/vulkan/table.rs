//! The Vulkan entry point catalog
//!
//! Every command here follows the pointer rules of the Vulkan specification:
//! pointer arguments must be null or valid for the accesses the command
//! documents. The forwarders can stand in for loader-provided function
//! pointers.

#![allow(clippy::missing_safety_doc)]

use crate::entry_points;
use crate::vulkan::defaults;
use crate::vulkan::types::{
	VkAllocationCallbacks, VkExtensionProperties, VkInstance, VkInstanceCreateInfo, VkLayerProperties, VkPhysicalDevice,
	VkResult,
};
use libc::c_char;

entry_points! {
	/// Vulkan commands known to the mock driver
	pub enum Command;

	/// Query the supported instance-level API version
	pub unsafe extern "system" fn vkEnumerateInstanceVersion(p_api_version: *mut u32) -> VkResult
		= defaults::enumerate_instance_version;

	pub unsafe extern "system" fn vkEnumerateInstanceLayerProperties(
		p_property_count: *mut u32,
		p_properties: *mut VkLayerProperties,
	) -> VkResult = defaults::enumerate_instance_layer_properties;

	pub unsafe extern "system" fn vkEnumerateInstanceExtensionProperties(
		p_layer_name: *const c_char,
		p_property_count: *mut u32,
		p_properties: *mut VkExtensionProperties,
	) -> VkResult = defaults::enumerate_instance_extension_properties;

	/// Create a new instance
	pub unsafe extern "system" fn vkCreateInstance(
		p_create_info: *const VkInstanceCreateInfo,
		p_allocator: *const VkAllocationCallbacks,
		p_instance: *mut VkInstance,
	) -> VkResult = defaults::create_instance;

	/// Destroy an instance
	pub unsafe extern "system" fn vkDestroyInstance(instance: VkInstance, p_allocator: *const VkAllocationCallbacks)
		= defaults::destroy_instance;

	pub unsafe extern "system" fn vkEnumeratePhysicalDevices(
		instance: VkInstance,
		p_physical_device_count: *mut u32,
		p_physical_devices: *mut VkPhysicalDevice,
	) -> VkResult = defaults::enumerate_physical_devices;

	pub unsafe extern "system" fn vkEnumerateDeviceLayerProperties(
		physical_device: VkPhysicalDevice,
		p_property_count: *mut u32,
		p_properties: *mut VkLayerProperties,
	) -> VkResult = defaults::enumerate_device_layer_properties;

	pub unsafe extern "system" fn vkEnumerateDeviceExtensionProperties(
		physical_device: VkPhysicalDevice,
		p_layer_name: *const c_char,
		p_property_count: *mut u32,
		p_properties: *mut VkExtensionProperties,
	) -> VkResult = defaults::enumerate_device_extension_properties;
}
