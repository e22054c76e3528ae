extern crate proc_macro;

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod catalog;
mod entry_point;

use catalog::{CatalogInput, generate_catalog};

/// Declare a catalog of interceptable entry points
///
/// The first item names the catalog enum; every following item is a native
/// function signature, optionally bound to a default implementation with
/// `= path`. For each entry point this generates:
///
/// 1. A zero-sized function key type named after the function in CamelCase
/// 2. An implementation of `simulakrum::EntryPoint` for that key, with its
///    own lazily constructed state record
/// 3. Typed `override_with` and `observe` helpers on the key
/// 4. A forwarding function with exactly the declared signature that routes
///    through the dispatcher
///
/// # Example
///
/// ```ignore
/// simulakrum::entry_points! {
///     pub enum Command;
///
///     pub unsafe extern "system" fn vkEnumerateInstanceVersion(p_api_version: *mut u32) -> VkResult
///         = defaults::enumerate_instance_version;
///
///     pub fn get_answer(question: u32) -> u32;
/// }
/// ```
///
/// Entry points declared `unsafe` forward to an `unsafe` default and produce
/// an `unsafe` forwarding function. An entry point without `= path` has no
/// default; calling it with no override installed panics.
#[proc_macro]
pub fn entry_points(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as CatalogInput);

	match generate_catalog(&input) {
		Ok(output) => output.into(),
		Err(err) => err.to_compile_error().into(),
	}
}
