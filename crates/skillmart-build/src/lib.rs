//! Skillmart marketplace builder
//!
//! Library side of the build binary: configuration, the build service, and
//! the artifact writers. The binary entry point only loads config, runs the
//! service, and prints the report — everything here is testable without
//! process-level side effects.

pub mod config;
pub mod error;
pub mod outputs;
pub mod service;

pub use config::Config;
pub use error::{BuildError, Result};
pub use service::{BuildReport, BuildService};
