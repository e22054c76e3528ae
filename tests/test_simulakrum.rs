//! Integration tests for the mock registry
//!
//! Every test declares or uses its own entry points, so the tests can run in
//! parallel without sharing state records.

use simulakrum::mock_manager::{self, ObserverHandle, OverrideHandle};
use simulakrum::{Catalog, EntryPoint, MockError, entry_points};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

fn add(a: i32, b: i32) -> i32 {
	a + b
}

fn record(_message: &'static str) {}

entry_points! {
	/// Entry points used by the tests in this file
	pub enum Api;

	pub fn add_default(a: i32, b: i32) -> i32 = add;
	pub fn add_overridden(a: i32, b: i32) -> i32 = add;
	pub fn add_observed(a: i32, b: i32) -> i32 = add;
	pub fn add_replaced(a: i32, b: i32) -> i32 = add;
	pub fn add_threaded(a: i32, b: i32) -> i32 = add;
	pub fn add_nested(a: i32, b: i32) -> i32 = add;
	pub fn log_message(message: &'static str) = record;
	pub fn get_answer(question: u32) -> u32;
}

#[test]
fn default_result_is_stable() {
	assert_eq!(add_default(2, 3), 5);
	assert_eq!(add_default(2, 3), 5);
	assert_eq!(AddDefault::name(), "add_default");
	assert_eq!(mock_manager::name::<AddDefault>(), "add_default");
}

#[test]
fn overrides_stack_and_unwind() {
	let first = AddOverridden::override_with(|a, b| a * b);
	assert_eq!(add_overridden(2, 3), 6);

	let second = AddOverridden::override_with(|a, b| a - b);
	assert_eq!(add_overridden(2, 3), -1);

	drop(first);
	assert_eq!(add_overridden(2, 3), -1);

	drop(second);
	assert_eq!(add_overridden(2, 3), 5);
	assert!(!mock_manager::stats::<AddOverridden>().is_overridden());
}

#[test]
fn observers_see_every_argument() {
	let seen = Arc::new(Mutex::new(Vec::new()));
	let observer = {
		let seen = Arc::clone(&seen);
		AddObserved::observe(move |a, b| seen.lock().unwrap().push((a, b)))
	};

	assert_eq!(add_observed(1, 2), 3);
	assert_eq!(add_observed(3, 4), 7);
	assert_eq!(*seen.lock().unwrap(), [(1, 2), (3, 4)]);

	observer.release();
	assert_eq!(add_observed(5, 6), 11);
	assert_eq!(seen.lock().unwrap().len(), 2);
}

#[test]
fn observers_and_override_see_the_same_arguments() {
	let observed = Arc::new(Mutex::new(Vec::new()));
	let implemented = Arc::new(Mutex::new(Vec::new()));

	let _observer = {
		let observed = Arc::clone(&observed);
		AddReplaced::observe(move |a, b| observed.lock().unwrap().push((a, b)))
	};
	let _override = {
		let implemented = Arc::clone(&implemented);
		AddReplaced::override_with(move |a, b| {
			implemented.lock().unwrap().push((a, b));
			a * b
		})
	};

	assert_eq!(add_replaced(2, 5), 10);
	assert_eq!(add_replaced(-1, 7), -7);

	assert_eq!(*observed.lock().unwrap(), [(2, 5), (-1, 7)]);
	assert_eq!(*observed.lock().unwrap(), *implemented.lock().unwrap());
}

#[test]
fn void_entry_points_dispatch() {
	let messages = Arc::new(Mutex::new(Vec::new()));
	let _observer = {
		let messages = Arc::clone(&messages);
		LogMessage::observe(move |message| messages.lock().unwrap().push(message))
	};

	log_message("hello");
	log_message("world");
	assert_eq!(*messages.lock().unwrap(), ["hello", "world"]);
	assert_eq!(LogMessage::call_count(), 2);
}

#[test]
fn observer_may_install_an_override_for_the_same_call() {
	let armed = Arc::new(AtomicBool::new(true));
	let installed: Arc<Mutex<Option<OverrideHandle<AddNested>>>> = Arc::default();
	let _observer: ObserverHandle<AddNested> = {
		let armed = Arc::clone(&armed);
		let installed = Arc::clone(&installed);
		AddNested::observe(move |_, _| {
			if armed.swap(false, Ordering::SeqCst) {
				*installed.lock().unwrap() = Some(AddNested::override_with(|_, _| 100));
			}
		})
	};

	// The override is resolved after the observers ran
	assert_eq!(add_nested(1, 1), 100);
	assert_eq!(add_nested(1, 1), 100);

	drop(installed.lock().unwrap().take());
	assert_eq!(add_nested(1, 1), 2);
}

#[test]
fn concurrent_calls_are_all_counted() {
	const THREADS: usize = 8;
	const CALLS: usize = 1000;

	let observed = Arc::new(AtomicUsize::new(0));
	let _observer = {
		let observed = Arc::clone(&observed);
		AddThreaded::observe(move |_, _| {
			observed.fetch_add(1, Ordering::Relaxed);
		})
	};

	let workers: Vec<_> = (0..THREADS)
		.map(|_| {
			thread::spawn(|| {
				for i in 0..CALLS {
					let value = i32::try_from(i).unwrap();
					assert_eq!(add_threaded(value, 1), value + 1);
				}
			})
		})
		.collect();
	for worker in workers {
		worker.join().unwrap();
	}

	assert_eq!(AddThreaded::call_count(), THREADS * CALLS);
	assert_eq!(observed.load(Ordering::Relaxed), THREADS * CALLS);
}

#[test]
fn entry_point_without_default_needs_an_override() {
	assert!(!mock_manager::has_default::<GetAnswer>());
	assert!(<GetAnswer as EntryPoint>::DEFAULT_IMPL.is_none());

	let answer = GetAnswer::override_with(|_| 42);
	assert_eq!(get_answer(1), 42);
	drop(answer);

	let result = std::panic::catch_unwind(|| get_answer(1));
	assert!(result.is_err());
}

#[test]
fn catalog_lists_its_entry_points() {
	assert_eq!(Api::all().len(), 8);
	assert_eq!(Api::ALL[0], Api::AddDefault);
	assert_eq!(Catalog::name(Api::LogMessage), "log_message");
	assert_eq!("get_answer".parse::<Api>(), Ok(Api::GetAnswer));
	assert_eq!(
		"add".parse::<Api>(),
		Err(MockError::UnknownEntryPoint("add".to_string()))
	);

	let report = mock_manager::report::<Api>();
	let unbound = report.iter().find(|stats| stats.name == "get_answer").unwrap();
	assert!(!unbound.has_default);
}

#[test]
fn configuration_can_be_applied() {
	let config = simulakrum::configure().trace_calls(true).apply();
	assert!(config.trace_calls);
	assert_eq!(simulakrum::config::current(), config);

	// Tracing must not change results
	let _trace = mock_manager::trace::<AddDefault>();
	assert_eq!(add_default(20, 22), 42);

	simulakrum::config::apply(simulakrum::MockConfig::default());
}
