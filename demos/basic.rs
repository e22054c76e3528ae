//! Basic usage of the Vulkan mock
//!
//! Run it with:
//! ```bash
//! SIMULAKRUM_DEBUG=1 cargo run --example basic
//! ```

use simulakrum::mock_manager;
use simulakrum::vulkan::{self, VkEnumerateInstanceVersion, VkResult};

/// Stand-in for application code that asks the driver for its version
fn get_version() -> u32 {
	let mut version = 0;
	let result = unsafe { vulkan::vkEnumerateInstanceVersion(&mut version) };
	assert_eq!(result, VkResult::SUCCESS);
	version
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	simulakrum::init_from_env()?;

	// Observer scoped to this block
	{
		let _observer = mock_manager::register_observer::<VkEnumerateInstanceVersion, _>(|_| {
			println!("observer called");
		});
		get_version();
	}

	let version = get_version();
	println!(
		"default impl: {}.{}",
		vulkan::api_version_major(version),
		vulkan::api_version_minor(version)
	);

	let _override = VkEnumerateInstanceVersion::override_with(|p_api_version| {
		unsafe { *p_api_version = 42 };
		VkResult::SUCCESS
	});
	println!("override: {}", get_version());

	for stats in mock_manager::report::<vulkan::Command>() {
		println!("{stats}");
	}

	Ok(())
}
