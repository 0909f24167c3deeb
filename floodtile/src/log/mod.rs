//! Logging abstraction layer.
//!
//! This module provides a logging interface that decouples rendering and
//! cache code from any specific logging backend. Components accept an
//! `Arc<dyn Logger>` and never import `tracing` directly.
//!
//! # Architecture
//!
//! - `Logger` trait: The interface that all components use for logging
//! - `TracingLogger`: Production adapter that delegates to the `tracing` crate
//! - `NoOpLogger`: Silent logger for testing and benchmarking
//! - `MemoryLogger`: Capturing logger for asserting on log output in tests
//!
//! # Usage
//!
//! ```
//! use floodtile::log::{Logger, LogLevel, NoOpLogger};
//! use floodtile::{log_info, log_debug};
//! use std::sync::Arc;
//!
//! struct MyComponent {
//!     logger: Arc<dyn Logger>,
//! }
//!
//! impl MyComponent {
//!     fn new(logger: Arc<dyn Logger>) -> Self {
//!         Self { logger }
//!     }
//!
//!     fn do_work(&self) {
//!         log_info!(self.logger, "Starting work");
//!         // ... do work ...
//!         log_debug!(self.logger, "Work completed");
//!     }
//! }
//! ```

mod memory;
mod noop;
mod tracing_adapter;
mod r#trait;

pub use memory::MemoryLogger;
pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger};
pub use tracing_adapter::TracingLogger;
