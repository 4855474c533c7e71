//! Utility functions shared by the CLI
//!
//! ## Modules
//!
//! - [`app_data`] - Configuration file location and loading
//! - [`logging`] - Tracing subscriber setup
//! - [`progress`] - Progress bar, no-op without the `progress` feature

pub mod app_data;
pub mod logging;
pub mod progress;

pub use app_data::*;
pub use logging::*;
pub use progress::*;
