//! Scenarios against the bundled Vulkan catalog
//!
//! These share the process-wide state records of the catalog, so they run
//! one at a time.

use serial_test::serial;
use simulakrum::{EntryPoint, mock_manager};
use simulakrum::vulkan::{
	self, Command, VK_API_VERSION_1_3, VkCreateInstance, VkDestroyInstance, VkEnumerateDeviceExtensionProperties,
	VkEnumerateInstanceLayerProperties, VkEnumerateInstanceVersion, VkEnumeratePhysicalDevices, VkExtensionProperties,
	VkInstance, VkLayerProperties, VkPhysicalDevice, VkResult,
};
use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn get_version() -> u32 {
	let mut version = 0;
	let result = unsafe { vulkan::vkEnumerateInstanceVersion(&mut version) };
	assert_eq!(result, VkResult::SUCCESS);
	version
}

#[test]
#[serial]
fn observer_override_and_default_version() {
	let observed = Arc::new(AtomicUsize::new(0));
	{
		let observed = Arc::clone(&observed);
		let _observer = VkEnumerateInstanceVersion::observe(move |_| {
			observed.fetch_add(1, Ordering::SeqCst);
		});
		assert_eq!(get_version(), VK_API_VERSION_1_3);
	}
	assert_eq!(observed.load(Ordering::SeqCst), 1);

	assert_eq!(get_version(), VK_API_VERSION_1_3);
	assert_eq!(observed.load(Ordering::SeqCst), 1);

	{
		let _override = VkEnumerateInstanceVersion::override_with(|p_api_version| {
			unsafe { *p_api_version = 42 };
			VkResult::SUCCESS
		});
		assert_eq!(get_version(), 42);
	}
	assert_eq!(get_version(), VK_API_VERSION_1_3);
}

#[test]
fn defaults_take_the_native_pointer_contract() {
	let default_impl: unsafe fn((*mut u32,)) -> VkResult = VkEnumerateInstanceVersion::DEFAULT_IMPL.unwrap();

	let mut version = 0;
	assert_eq!(unsafe { default_impl((&raw mut version,)) }, VkResult::SUCCESS);
	assert_eq!(version, VK_API_VERSION_1_3);

	assert_eq!(
		unsafe { default_impl((ptr::null_mut(),)) },
		VkResult::ERROR_INITIALIZATION_FAILED
	);
}

#[test]
#[serial]
fn override_errors_pass_through() {
	let _override = VkEnumerateInstanceLayerProperties::override_with(|_, _| VkResult::ERROR_OUT_OF_HOST_MEMORY);

	let mut count = 0;
	let result = unsafe { vulkan::vkEnumerateInstanceLayerProperties(&mut count, ptr::null_mut()) };
	assert_eq!(result, VkResult::ERROR_OUT_OF_HOST_MEMORY);
}

#[test]
#[serial]
fn default_layers_are_empty() {
	let mut count = 7;
	let result = unsafe { vulkan::vkEnumerateInstanceLayerProperties(&mut count, ptr::null_mut()) };
	assert_eq!(result, VkResult::SUCCESS);
	assert_eq!(count, 0);

	let mut properties = [VkLayerProperties::default(); 2];
	let mut count = 2;
	let result = unsafe { vulkan::vkEnumerateInstanceLayerProperties(&mut count, properties.as_mut_ptr()) };
	assert_eq!(result, VkResult::SUCCESS);
	assert_eq!(count, 0);
}

#[test]
#[serial]
fn physical_devices_through_a_created_instance() {
	let mut instance = VkInstance::null();
	let result = unsafe { vulkan::vkCreateInstance(ptr::null(), ptr::null(), &mut instance) };
	assert_eq!(result, VkResult::SUCCESS);
	assert!(!instance.is_null());

	let mut count = 0;
	let result = unsafe { vulkan::vkEnumeratePhysicalDevices(instance, &mut count, ptr::null_mut()) };
	assert_eq!(result, VkResult::SUCCESS);
	assert_eq!(count, 1);

	let mut devices = vec![VkPhysicalDevice::null(); count as usize];
	let result = unsafe { vulkan::vkEnumeratePhysicalDevices(instance, &mut count, devices.as_mut_ptr()) };
	assert_eq!(result, VkResult::SUCCESS);
	assert!(!devices[0].is_null());

	let mut count = 0;
	let result =
		unsafe { vulkan::vkEnumerateDeviceExtensionProperties(devices[0], ptr::null(), &mut count, ptr::null_mut()) };
	assert_eq!(result, VkResult::SUCCESS);
	let mut extensions = vec![VkExtensionProperties::default(); count as usize];
	let result = unsafe {
		vulkan::vkEnumerateDeviceExtensionProperties(devices[0], ptr::null(), &mut count, extensions.as_mut_ptr())
	};
	assert_eq!(result, VkResult::SUCCESS);
	assert_eq!(extensions[0].extension_name(), "VK_KHR_swapchain");

	unsafe { vulkan::vkDestroyInstance(instance, ptr::null()) };
}

#[test]
#[serial]
fn override_can_report_more_devices() {
	let _override = VkEnumeratePhysicalDevices::override_with(|_, p_count, p_devices| {
		let devices = [VkPhysicalDevice::from_raw(0xa), VkPhysicalDevice::from_raw(0xb)];
		unsafe { vulkan::defaults::enumerate(&devices, p_count, p_devices) }
	});

	let instance = VkInstance::from_raw(0x1);
	let mut count = 0;
	let result = unsafe { vulkan::vkEnumeratePhysicalDevices(instance, &mut count, ptr::null_mut()) };
	assert_eq!(result, VkResult::SUCCESS);
	assert_eq!(count, 2);

	let mut first = VkPhysicalDevice::null();
	let mut count = 1;
	let result = unsafe { vulkan::vkEnumeratePhysicalDevices(instance, &mut count, &mut first) };
	assert_eq!(result, VkResult::INCOMPLETE);
	assert_eq!(count, 1);
	assert_eq!(first.as_raw(), 0xa);
}

#[test]
#[serial]
fn void_commands_are_observed() {
	let destroyed = Arc::new(Mutex::new(Vec::new()));
	let _observer = {
		let destroyed = Arc::clone(&destroyed);
		VkDestroyInstance::observe(move |instance, _| destroyed.lock().unwrap().push(instance.as_raw()))
	};

	unsafe { vulkan::vkDestroyInstance(VkInstance::from_raw(0x10), ptr::null()) };
	unsafe { vulkan::vkDestroyInstance(VkInstance::from_raw(0x20), ptr::null()) };
	assert_eq!(*destroyed.lock().unwrap(), [0x10, 0x20]);
}

#[test]
#[serial]
fn report_covers_the_whole_catalog() {
	let before = VkCreateInstance::call_count();
	let _observer = VkCreateInstance::observe(|_, _, _| {});
	let _override = VkEnumerateDeviceExtensionProperties::override_with(|_, _, _, _| VkResult::ERROR_DEVICE_LOST);

	let mut instance = VkInstance::null();
	let result = unsafe { vulkan::vkCreateInstance(ptr::null(), ptr::null(), &mut instance) };
	assert_eq!(result, VkResult::SUCCESS);

	let report = mock_manager::report::<Command>();
	assert_eq!(report.len(), Command::ALL.len());
	assert!(report.iter().all(|stats| stats.has_default));

	let create = Command::VkCreateInstance.stats();
	assert_eq!(create.call_count, before + 1);
	assert_eq!(create.observers, 1);

	let extensions = "vkEnumerateDeviceExtensionProperties".parse::<Command>().unwrap().stats();
	assert!(extensions.is_overridden());
	assert_eq!(
		extensions.to_string(),
		format!(
			"vkEnumerateDeviceExtensionProperties: {} call(s), 1 override(s), 0 observer(s)",
			extensions.call_count
		)
	);
}
