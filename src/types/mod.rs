//! Core types for the event bridge.
//!
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Configuration structures for observability and sinks

mod config;
mod errors;

pub use config::{Config, ObservabilityConfig, SinkConfig};
pub use errors::{Error, Result};
