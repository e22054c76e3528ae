//! Utility modules for simulakrum

pub mod logging;

pub use logging::init_logging;
